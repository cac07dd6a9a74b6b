//! slider demo - Web page hosting a few boolean sliders
//!
//! Each slider's value lives in a signal owned here, the way a host page
//! owns the attribute behind the widget.

use dioxus::prelude::*;
use slider_ui::{BooleanSlider, SliderSettings};

const FIXTURES: &str = include_str!("fixtures.json");

fn load_fixtures() -> Vec<SliderSettings> {
    match SliderSettings::list_from_json(FIXTURES) {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Failed to load slider fixtures: {e}");
            Vec::new()
        }
    }
}

#[component]
fn App() -> Element {
    let fixtures = use_hook(load_fixtures);

    rsx! {
        div { class: "p-4 flex flex-col gap-4",
            for settings in fixtures {
                DemoRow { key: "{settings.widget_id}", settings }
            }
        }
    }
}

#[component]
fn DemoRow(settings: SliderSettings) -> Element {
    let value = use_signal(|| settings.initial_value);
    let name = settings.widget_id.clone();
    let widget_id = settings.widget_id.clone();

    rsx! {
        div { class: "flex items-center gap-3",
            span { class: "w-32", "{name}" }
            BooleanSlider {
                settings,
                value,
                on_change: move |next: bool| {
                    tracing::info!("Demo observed {} -> {}", widget_id, next);
                },
            }
            span { class: "text-sm text-gray-400", if *value.read() { "on" } else { "off" } }
        }
    }
}

fn main() {
    dioxus::launch(App);
}
