use crate::toggle::ToggleConfiguration;

/// Host-owned boolean behind a toggle.
///
/// The toggle component dispatches every click; deciding whether a click
/// actually flips the value belongs here. Read-only values never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleState {
    value: bool,
    enabled: bool,
}

impl ToggleState {
    pub fn new(value: bool, enabled: bool) -> Self {
        Self { value, enabled }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Handle one click. Returns the new value, or `None` when disabled.
    pub fn click(&mut self) -> Option<bool> {
        if !self.enabled {
            return None;
        }
        self.value = !self.value;
        Some(self.value)
    }

    /// Configuration snapshot for the next render.
    pub fn configuration<H>(
        &self,
        widget_id: impl Into<String>,
        has_error: bool,
        on_click: H,
    ) -> ToggleConfiguration<H> {
        ToggleConfiguration {
            widget_id: widget_id.into(),
            is_checked: self.value,
            enabled: self.enabled,
            has_error,
            on_click,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toggle::render;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_click_flips_when_enabled() {
        let mut state = ToggleState::new(true, true);
        assert_eq!(state.click(), Some(false));
        assert_eq!(state.click(), Some(true));
        assert!(state.value());
    }

    #[test]
    fn test_click_ignored_when_disabled() {
        let mut state = ToggleState::new(true, false);
        assert_eq!(state.click(), None);
        assert_eq!(state.click(), None);
        assert!(state.value());
    }

    #[test]
    fn test_set_enabled_resumes_toggling() {
        let mut state = ToggleState::new(false, false);
        assert_eq!(state.click(), None);
        state.set_enabled(true);
        assert!(state.enabled());
        assert_eq!(state.click(), Some(true));
    }

    #[test]
    fn test_configuration_snapshot() {
        let state = ToggleState::new(true, false);
        let config = state.configuration("slider", true, ());
        assert_eq!(config.widget_id, "slider");
        assert!(config.is_checked);
        assert!(!config.enabled);
        assert!(config.has_error);
    }

    #[test]
    fn test_gated_host_does_not_toggle_disabled_slider() {
        let state = Rc::new(RefCell::new(ToggleState::new(true, false)));
        let on_click = {
            let state = Rc::clone(&state);
            move || {
                state.borrow_mut().click();
            }
        };

        for _ in 0..2 {
            let config = state.borrow().configuration("slider", false, on_click.clone());
            render(&config).label.click();
            let config = state.borrow().configuration("slider", false, ());
            assert!(render(&config).input.checked);
        }
    }

    #[test]
    fn test_gated_host_toggles_enabled_slider() {
        let state = Rc::new(RefCell::new(ToggleState::new(true, true)));
        let on_click = {
            let state = Rc::clone(&state);
            move || {
                state.borrow_mut().click();
            }
        };

        let expected = [false, true];
        for want in expected {
            let config = state.borrow().configuration("slider", false, on_click.clone());
            render(&config).label.click();
            let config = state.borrow().configuration("slider", false, ());
            assert_eq!(render(&config).input.checked, want);
        }
    }
}
