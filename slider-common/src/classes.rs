use std::fmt;

/// Base class of the root container
pub const ROOT_CLASS: &str = "mx-boolean-slider";
/// Base class of the hidden checkbox input
pub const INPUT_CLASS: &str = "mx-toggle";
/// Base class of the clickable label
pub const LABEL_CLASS: &str = "mx-toggle-btn";
pub const ENABLED_CLASS: &str = "enabled";
pub const ERROR_CLASS: &str = "has-error";

/// The rendered elements that carry classes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Part {
    Root,
    Input,
    Label,
}

/// Presentational modifiers layered on top of a part's base class
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Modifier {
    Enabled,
    Error,
}

impl Part {
    pub fn base_class(self) -> &'static str {
        match self {
            Part::Root => ROOT_CLASS,
            Part::Input => INPUT_CLASS,
            Part::Label => LABEL_CLASS,
        }
    }

    /// Class token a modifier contributes to this part, if any.
    pub fn modifier_class(self, modifier: Modifier) -> Option<&'static str> {
        match (self, modifier) {
            (Part::Root, Modifier::Enabled) => None,
            (Part::Root, Modifier::Error) => Some(ERROR_CLASS),
            (Part::Input, Modifier::Enabled) => Some(ENABLED_CLASS),
            (Part::Input, Modifier::Error) => Some(ERROR_CLASS),
            (Part::Label, Modifier::Enabled) => Some(ENABLED_CLASS),
            (Part::Label, Modifier::Error) => None,
        }
    }
}

/// Ordered class tokens of one element. The base class always comes first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<&'static str>,
}

impl ClassList {
    fn new(base: &'static str) -> Self {
        Self { tokens: vec![base] }
    }

    fn push(&mut self, token: &'static str) {
        if !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| *t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tokens.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Compute the class list of `part` for the given presentational flags.
pub fn class_list(part: Part, enabled: bool, has_error: bool) -> ClassList {
    let mut classes = ClassList::new(part.base_class());
    let active = [(Modifier::Enabled, enabled), (Modifier::Error, has_error)];
    for (modifier, on) in active {
        if !on {
            continue;
        }
        if let Some(token) = part.modifier_class(modifier) {
            classes.push(token);
        }
    }
    classes
}
