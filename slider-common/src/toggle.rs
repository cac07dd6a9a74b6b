//! Render tree of a single boolean toggle
//!
//! `render` is a pure function from a configuration snapshot to the tree the
//! UI layer draws: a root container holding a checkbox input followed by a
//! label. The caller owns the boolean; the label only dispatches clicks.

use crate::classes::{class_list, ClassList, Part};

/// Prefix of the identifier shared by the input's `id` and the label's `for`
pub const ID_PREFIX: &str = "mx-toggle-";

/// Everything needed to render one toggle. `H` is the click callback.
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleConfiguration<H> {
    /// Unique per rendered toggle
    pub widget_id: String,
    pub is_checked: bool,
    pub enabled: bool,
    pub has_error: bool,
    /// Invoked once per label click, whether or not the toggle is enabled
    pub on_click: H,
}

/// Identifier linking the input and its label.
pub fn input_id(widget_id: &str) -> String {
    format!("{ID_PREFIX}{widget_id}")
}

/// The hidden checkbox. It has no click handler of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputElement {
    pub kind: &'static str,
    pub id: String,
    pub checked: bool,
    pub disabled: bool,
    pub class: ClassList,
}

/// The clickable label pointing at the input.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelElement<H> {
    pub html_for: String,
    pub class: ClassList,
    pub on_click: H,
}

impl<H: Fn()> LabelElement<H> {
    /// Simulate a user click: calls the handler once, synchronously.
    pub fn click(&self) {
        (self.on_click)();
    }
}

/// A child of the root container, in render order
#[derive(Debug)]
pub enum Child<'a, H> {
    Input(&'a InputElement),
    Label(&'a LabelElement<H>),
}

impl<H> Child<'_, H> {
    pub fn tag(&self) -> &'static str {
        match self {
            Child::Input(_) => "input",
            Child::Label(_) => "label",
        }
    }
}

/// Root container with its two children
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleTree<H> {
    pub class: ClassList,
    pub input: InputElement,
    pub label: LabelElement<H>,
}

impl<H> ToggleTree<H> {
    /// Children in render order: input, then label.
    pub fn children(&self) -> [Child<'_, H>; 2] {
        [Child::Input(&self.input), Child::Label(&self.label)]
    }

    /// The same tree with the handler replaced by `()`, for structural comparison.
    pub fn shape(&self) -> ToggleTree<()> {
        ToggleTree {
            class: self.class.clone(),
            input: self.input.clone(),
            label: LabelElement {
                html_for: self.label.html_for.clone(),
                class: self.label.class.clone(),
                on_click: (),
            },
        }
    }
}

pub fn render<H: Clone>(config: &ToggleConfiguration<H>) -> ToggleTree<H> {
    let id = input_id(&config.widget_id);

    ToggleTree {
        class: class_list(Part::Root, config.enabled, config.has_error),
        input: InputElement {
            kind: "checkbox",
            id: id.clone(),
            checked: config.is_checked,
            disabled: !config.enabled,
            class: class_list(Part::Input, config.enabled, config.has_error),
        },
        label: LabelElement {
            html_for: id,
            class: class_list(Part::Label, config.enabled, config.has_error),
            on_click: config.on_click.clone(),
        },
    }
}
