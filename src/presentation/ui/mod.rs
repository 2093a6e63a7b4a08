//! UI screens.

mod app;
mod backend;
mod console_screen;
mod login_screen;
mod notification_popup;

pub use app::App;
pub use backend::{Action, Backend, BackendCommand};
pub use console_screen::{ConsoleCommand, ConsoleFocus, ConsoleScreen, ConsoleScreenState};
pub use login_screen::{LoginAction, LoginScreen, LoginState};
pub use notification_popup::NotificationPopup;
