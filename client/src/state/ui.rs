//! Local UI chrome state (active view, sidebar expansion).
//!
//! DESIGN
//! ======
//! Keeps navigation concerns out of issue-list state so the shell can switch
//! views without touching filters.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level view mounted in the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Issues,
}

impl ActiveView {
    /// Sidebar navigation order.
    pub const ALL: [Self; 2] = [Self::Dashboard, Self::Issues];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Issues => "Issues",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "▥",
            Self::Issues => "☰",
        }
    }
}

/// UI state for navigation and sidebar expansion.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_view: ActiveView,
    pub sidebar_collapsed: bool,
}

impl UiState {
    pub fn show(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn is_active(&self, view: ActiveView) -> bool {
        self.active_view == view
    }
}
