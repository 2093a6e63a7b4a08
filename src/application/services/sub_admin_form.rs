//! Sub-admin creation form with live validation.

use serde_json::{Value, json};
use zeroize::Zeroizing;

use crate::domain::ValidationError;
use crate::domain::entities::PermissionRoutes;
use crate::domain::ports::RecordPayload;
use crate::domain::validation::{
    validate_email, validate_password, validate_permissions, validate_required,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubAdminField {
    #[default]
    Name,
    Email,
    Password,
    Permissions,
}

impl SubAdminField {
    const ORDER: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::Permissions];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubAdminForm {
    name: String,
    email: String,
    password: Zeroizing<String>,
    permissions: PermissionRoutes,
    focused: SubAdminField,
    /// Index into [`PermissionRoutes::ROUTES`] while the permission list is focused.
    route_cursor: usize,
    name_error: String,
    email_error: String,
    password_error: String,
    permission_error: String,
}

impl SubAdminForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        let i = (self.focused.index() + 1) % SubAdminField::ORDER.len();
        self.focused = SubAdminField::ORDER[i];
    }

    pub fn focus_previous(&mut self) {
        let len = SubAdminField::ORDER.len();
        let i = (self.focused.index() + len - 1) % len;
        self.focused = SubAdminField::ORDER[i];
    }

    pub fn input_char(&mut self, c: char) {
        match self.focused {
            SubAdminField::Name => {
                self.name.push(c);
                self.name_error = validate_required("Name", &self.name);
            }
            SubAdminField::Email => {
                self.email.push(c);
                self.email_error = validate_email(&self.email);
            }
            SubAdminField::Password => {
                self.password.push(c);
                self.password_error = validate_password(&self.password);
            }
            SubAdminField::Permissions => {
                if c == ' ' {
                    self.toggle_route_at_cursor();
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focused {
            SubAdminField::Name => {
                self.name.pop();
                self.name_error = validate_required("Name", &self.name);
            }
            SubAdminField::Email => {
                self.email.pop();
                self.email_error = validate_email(&self.email);
            }
            SubAdminField::Password => {
                self.password.pop();
                self.password_error = validate_password(&self.password);
            }
            SubAdminField::Permissions => {}
        }
    }

    pub fn route_cursor_up(&mut self) {
        self.route_cursor = self.route_cursor.saturating_sub(1);
    }

    pub fn route_cursor_down(&mut self) {
        self.route_cursor = (self.route_cursor + 1).min(PermissionRoutes::ROUTES.len() - 1);
    }

    pub fn toggle_route_at_cursor(&mut self) {
        if let Some((flag, _)) = PermissionRoutes::ROUTES.get(self.route_cursor) {
            self.toggle_permission(*flag);
        }
    }

    pub fn toggle_permission(&mut self, route: PermissionRoutes) {
        self.permissions.toggle(route);
        self.permission_error = validate_permissions(self.permissions);
    }

    /// Runs every rule and stores the inline messages.
    pub fn validate(&mut self) {
        self.name_error = validate_required("Name", &self.name);
        self.email_error = validate_email(&self.email);
        self.password_error = validate_password(&self.password);
        self.permission_error = validate_permissions(self.permissions);
    }

    /// Returns whether every rule currently passes.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        validate_required("Name", &self.name).is_empty()
            && validate_email(&self.email).is_empty()
            && validate_password(&self.password).is_empty()
            && validate_permissions(self.permissions).is_empty()
    }

    /// Validates and builds the create request body.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] while any rule fails.
    pub fn submit(&mut self) -> Result<RecordPayload, ValidationError> {
        self.validate();
        if let Some(err) = ValidationError::collect([
            ("Name", self.name_error.as_str()),
            ("Email", self.email_error.as_str()),
            ("Password", self.password_error.as_str()),
            ("Permissions", self.permission_error.as_str()),
        ]) {
            return Err(err);
        }

        let mut payload = RecordPayload::new();
        payload.insert("name".into(), Value::String(self.name.trim().to_string()));
        payload.insert("email".into(), Value::String(self.email.trim().to_string()));
        payload.insert("password".into(), Value::String(self.password.to_string()));
        payload.insert(
            "permissions".into(),
            json!(self.permissions.route_names()),
        );
        Ok(payload)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    #[must_use]
    pub const fn permissions(&self) -> PermissionRoutes {
        self.permissions
    }

    #[must_use]
    pub const fn focused(&self) -> SubAdminField {
        self.focused
    }

    #[must_use]
    pub const fn route_cursor(&self) -> usize {
        self.route_cursor
    }

    #[must_use]
    pub fn error(&self, field: SubAdminField) -> &str {
        match field {
            SubAdminField::Name => &self.name_error,
            SubAdminField::Email => &self.email_error,
            SubAdminField::Password => &self.password_error,
            SubAdminField::Permissions => &self.permission_error,
        }
    }
}
