//! Boolean slider container: owns nothing but the wiring between the
//! host's value and the stateless `ToggleControl`.

use crate::components::{ToggleControl, ValidationAlert};
use crate::settings::SliderSettings;
use dioxus::prelude::*;
use slider_common::ToggleState;

/// Toggle bound to a host signal.
///
/// Clicks flip `value` only when the settings allow editing; `on_change`
/// fires with the new value after each flip. A validation message, from the
/// props or the settings, marks the toggle as errored and is shown below it.
#[component]
pub fn BooleanSlider(
    settings: SliderSettings,
    value: Signal<bool>,
    #[props(default)] validation_message: Option<String>,
    #[props(default)] on_change: Option<EventHandler<bool>>,
) -> Element {
    let enabled = settings.is_enabled();
    let message = validation_message.or_else(|| settings.validation_message.clone());
    let has_error = message.is_some();
    let widget_id = settings.widget_id.clone();

    let handle_click = {
        let mut value = value;
        let widget_id = widget_id.clone();
        move |_: ()| {
            let mut state = ToggleState::new(*value.peek(), enabled);
            match state.click() {
                Some(next) => {
                    value.set(next);
                    tracing::info!("Slider {} set to {}", widget_id, next);
                    if let Some(handler) = on_change {
                        handler.call(next);
                    }
                }
                None => {
                    tracing::debug!("Ignoring click on read-only slider {}", widget_id);
                }
            }
        }
    };

    rsx! {
        ToggleControl {
            widget_id,
            is_checked: *value.read(),
            enabled,
            has_error,
            on_click: handle_click,
        }
        ValidationAlert { message }
    }
}
