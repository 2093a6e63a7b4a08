//! Stateful building blocks shared by every resource screen.

mod confirm_gate;
mod debounce;
mod list_controller;
mod notification_manager;
mod record_form;
mod sub_admin_form;

pub use confirm_gate::ConfirmGate;
pub use debounce::Debouncer;
pub use list_controller::{ApplyOutcome, FetchTicket, ListController, LoadState};
pub use notification_manager::NotificationManager;
pub use record_form::{FormMode, RecordForm};
pub use sub_admin_form::{SubAdminField, SubAdminForm};
