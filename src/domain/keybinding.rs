use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Logout,
    ToggleHelp,

    // Screens
    NextScreen,
    PreviousScreen,

    // Table
    NavigateUp,
    NavigateDown,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    IncreasePageSize,
    DecreasePageSize,
    Refresh,

    // Search
    FocusSearch,
    ClearSearch,

    // Record actions
    Create,
    Edit,
    ToggleStatus,
    Delete,
}

impl Action {
    /// Every action in help-overlay order.
    pub const ALL: [Self; 20] = [
        Self::NavigateUp,
        Self::NavigateDown,
        Self::NextScreen,
        Self::PreviousScreen,
        Self::NextPage,
        Self::PreviousPage,
        Self::FirstPage,
        Self::LastPage,
        Self::IncreasePageSize,
        Self::DecreasePageSize,
        Self::Refresh,
        Self::FocusSearch,
        Self::ClearSearch,
        Self::Create,
        Self::Edit,
        Self::ToggleStatus,
        Self::Delete,
        Self::ToggleHelp,
        Self::Logout,
        Self::Quit,
    ];

    /// Returns a short label for the footer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Logout => "Logout",
            Self::ToggleHelp => "Help",
            Self::NextScreen => "Next tab",
            Self::PreviousScreen => "Prev tab",
            Self::NavigateUp => "Up",
            Self::NavigateDown => "Down",
            Self::NextPage => "Next page",
            Self::PreviousPage => "Prev page",
            Self::FirstPage => "First page",
            Self::LastPage => "Last page",
            Self::IncreasePageSize => "Page size +",
            Self::DecreasePageSize => "Page size -",
            Self::Refresh => "Refresh",
            Self::FocusSearch => "Search",
            Self::ClearSearch => "Clear search",
            Self::Create => "Add",
            Self::Edit => "Edit",
            Self::ToggleStatus => "Toggle status",
            Self::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}
