//! Application state managed via Dioxus context.
//!
//! The top-level `App` creates `AppState` with `use_context_provider`; child
//! components retrieve it with `use_context::<AppState>()`. There is no
//! global or static panel state.

use dash_chart::{Panel, ViewSelector};
use dioxus::prelude::*;

/// Shared dashboard state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Which panel is visible
    pub view: Signal<ViewSelector>,
    /// Last rendering error, cleared by the next successful render
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState showing the table panel.
    pub fn new() -> Self {
        Self {
            view: Signal::new(ViewSelector::new()),
            error_msg: Signal::new(None),
        }
    }

    /// The active panel. Subscribes the calling scope to panel changes.
    pub fn active(&self) -> Panel {
        self.view.read().active()
    }

    /// Switch to `panel`.
    ///
    /// Selecting the active panel leaves the signal untouched, so nothing
    /// re-renders and no chart is redrawn.
    pub fn select(&mut self, panel: Panel) {
        if self.view.peek().active() == panel {
            return;
        }
        self.view.write().select(panel);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
