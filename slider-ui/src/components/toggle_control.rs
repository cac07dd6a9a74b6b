//! Checkbox/label toggle

use dioxus::prelude::*;
use slider_common::{render, ToggleConfiguration, ToggleTree};

/// Hidden checkbox plus a clickable label, linked by a shared id.
///
/// Stateless: `is_checked` is rendered as given and every label click calls
/// `on_click`, even while disabled. Toggling is up to the caller.
#[component]
pub fn ToggleControl(
    widget_id: String,
    is_checked: bool,
    enabled: bool,
    #[props(default)] has_error: bool,
    on_click: EventHandler<()>,
) -> Element {
    let ToggleTree {
        class,
        input: checkbox,
        label: target,
    } = render(&ToggleConfiguration {
        widget_id,
        is_checked,
        enabled,
        has_error,
        on_click,
    });

    let label_handler = target.on_click;
    let target_id = target.html_for.clone();

    rsx! {
        div { class: "{class}",
            input {
                r#type: checkbox.kind,
                id: "{checkbox.id}",
                class: "{checkbox.class}",
                checked: checkbox.checked,
                disabled: checkbox.disabled,
            }
            label {
                r#for: "{target.html_for}",
                class: "{target.class}",
                onclick: move |_| {
                    tracing::debug!("Toggle label clicked for {}", target_id);
                    label_handler.call(());
                },
            }
        }
    }
}
