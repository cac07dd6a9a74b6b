//! slider-ui - Boolean slider components
//!
//! `ToggleControl` draws the checkbox/label pair computed by `slider-common`;
//! `BooleanSlider` is the host-side container that owns the value and
//! decides whether a click toggles it.

pub mod components;
pub mod settings;

pub use components::*;
pub use settings::*;
