mod footer_bar;
mod input;
mod modal;
mod record_table;
mod status_bar;

pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use input::TextInput;
pub use modal::{ConfirmDialog, HelpOverlay, RecordFormModal, SubAdminFormModal, centered};
pub use record_table::RecordTable;
pub use status_bar::{StatusBar, StatusLevel};
