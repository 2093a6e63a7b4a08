//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::dto::LoginRequest;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Input,
    Validating,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoginField {
    #[default]
    Email,
    Password,
    Remember,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    Quit,
}

pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focused: LoginField,
    state: LoginState,
    error_message: Option<String>,
    persist_token: bool,
}

impl LoginScreen {
    #[must_use]
    pub fn new() -> Self {
        let mut email = TextInput::new(" Email ").placeholder("admin@example.com");
        email.set_focused(true);
        let password = TextInput::new(" Password ").password();

        Self {
            email,
            password,
            focused: LoginField::Email,
            state: LoginState::Input,
            error_message: None,
            persist_token: true,
        }
    }

    /// Login screen shown after a session ended, with an explanation.
    #[must_use]
    pub fn with_error(message: impl Into<String>) -> Self {
        let mut screen = Self::new();
        screen.set_error(message);
        screen
    }

    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.value()
    }

    #[must_use]
    pub const fn should_persist(&self) -> bool {
        self.persist_token
    }

    /// Builds the request and wipes the password field.
    pub fn take_request(&mut self) -> LoginRequest {
        let request = LoginRequest::new(self.email.value().trim(), self.password.value());
        self.password.clear();
        if self.persist_token {
            request
        } else {
            request.without_persistence()
        }
    }

    pub fn set_validating(&mut self) {
        self.state = LoginState::Validating;
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = LoginState::Error;
        self.error_message = Some(message.into());
    }

    fn focus(&mut self, field: LoginField) {
        self.focused = field;
        self.email.set_focused(field == LoginField::Email);
        self.password.set_focused(field == LoginField::Password);
    }

    fn focus_next(&mut self) {
        self.focus(match self.focused {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Remember,
            LoginField::Remember => LoginField::Email,
        });
    }

    fn focus_previous(&mut self) {
        self.focus(match self.focused {
            LoginField::Email => LoginField::Remember,
            LoginField::Password => LoginField::Email,
            LoginField::Remember => LoginField::Password,
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.state == LoginState::Validating {
            return LoginAction::None;
        }
        if self.state == LoginState::Error {
            self.state = LoginState::Input;
            self.error_message = None;
        }

        match key.code {
            KeyCode::Esc => return LoginAction::Quit,
            KeyCode::Enter => {
                if self.focused == LoginField::Email {
                    self.focus_next();
                } else if !self.email.value().trim().is_empty()
                    && !self.password.value().is_empty()
                {
                    return LoginAction::Submit;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Char(' ') if self.focused == LoginField::Remember => {
                self.persist_token = !self.persist_token;
            }
            _ => match self.focused {
                LoginField::Email => {
                    self.email.handle_key(key);
                }
                LoginField::Password => {
                    self.password.handle_key(key);
                }
                LoginField::Remember => {}
            },
        }

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(15),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, content_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ])
        .areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Pawboard Admin ");
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [title_area, _, email_area, password_area, _, remember_area, _, status_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new("Sign in with your administrator account")
            .style(Style::default().fg(Color::White))
            .render(title_area, buf);

        (&self.email).render(email_area, buf);
        (&self.password).render(password_area, buf);

        let checkbox = if self.persist_token { "[x]" } else { "[ ]" };
        let checkbox_style = if self.focused == LoginField::Remember {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(checkbox, checkbox_style),
            Span::raw(" Remember this session (Space to toggle)"),
        ]))
        .render(remember_area, buf);

        let dim = Style::default().fg(Color::DarkGray);
        let status = match self.state {
            LoginState::Input => Line::from(vec![
                Span::styled("Enter: Login", dim),
                Span::raw(" | "),
                Span::styled("Tab: Next field", dim),
                Span::raw(" | "),
                Span::styled("Esc: Quit", dim),
            ]),
            LoginState::Validating => Line::from(Span::styled(
                "Signing in...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            LoginState::Error => {
                let msg = self.error_message.as_deref().unwrap_or("Unknown error");
                Line::from(Span::styled(
                    format!("Error: {msg}"),
                    Style::default().fg(Color::Red),
                ))
            }
        };
        Paragraph::new(status).render(status_area, buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
