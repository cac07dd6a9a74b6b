//! slider-common - Pure toggle logic shared by the UI crate and its tests
//!
//! No UI runtime and no I/O: class derivation, identifier derivation, the
//! render tree for a single boolean toggle, and the host-side toggle state.

pub mod classes;
pub mod toggle;
pub mod toggle_state;

pub use classes::*;
pub use toggle::*;
pub use toggle_state::*;
