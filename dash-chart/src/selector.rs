//! View selector: which panel is currently visible.

use crate::panel::Panel;

/// Holds the active panel. Starts on [`Panel::Table`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSelector {
    active: Panel,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    /// Make `panel` the active one.
    ///
    /// Returns `false` without touching anything if it already was, so
    /// callers only reconcile on a real change.
    pub fn select(&mut self, panel: Panel) -> bool {
        if self.active == panel {
            return false;
        }
        log::info!("active panel: {} -> {}", self.active, panel);
        self.active = panel;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_table() {
        assert_eq!(ViewSelector::new().active(), Panel::Table);
    }

    #[test]
    fn test_select_changes_active() {
        let mut selector = ViewSelector::new();
        assert!(selector.select(Panel::Line));
        assert_eq!(selector.active(), Panel::Line);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut selector = ViewSelector::new();
        selector.select(Panel::Bar);
        assert!(!selector.select(Panel::Bar));
        assert_eq!(selector.active(), Panel::Bar);
    }
}
