//! Slider components

pub mod boolean_slider;
pub mod toggle_control;
pub mod validation_alert;

pub use boolean_slider::BooleanSlider;
pub use toggle_control::ToggleControl;
pub use validation_alert::ValidationAlert;
