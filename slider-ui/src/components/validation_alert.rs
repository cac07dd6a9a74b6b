//! Validation message shown under a slider

use dioxus::prelude::*;

/// Red alert with the validation message; renders nothing without one.
#[component]
pub fn ValidationAlert(#[props(default)] message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div { class: "alert alert-danger mx-validation-message", role: "alert", "{message}" }
    }
}
