//! Generic create/edit form driven by a resource's field list.

use serde_json::Value;

use crate::domain::ports::RecordPayload;
use crate::domain::resource::{FormField, Resource};
use crate::domain::validation::{validate_positive_number, validate_required};
use crate::domain::{AdminRecord, ValidationError};

/// Whether the form creates a record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone)]
pub struct RecordForm {
    resource: Resource,
    mode: FormMode,
    fields: Vec<FormField>,
    values: Vec<String>,
    errors: Vec<String>,
    focused: usize,
}

impl RecordForm {
    #[must_use]
    pub fn create(resource: Resource) -> Self {
        let fields = resource.form_fields();
        let values = vec![String::new(); fields.len()];
        let errors = vec![String::new(); fields.len()];
        Self {
            resource,
            mode: FormMode::Create,
            fields,
            values,
            errors,
            focused: 0,
        }
    }

    /// Opens an edit form prefilled from `record`.
    #[must_use]
    pub fn edit(record: &AdminRecord) -> Self {
        let mut form = Self::create(record.resource());
        form.mode = FormMode::Edit {
            id: record.id().to_string(),
        };
        for (key, value) in record.form_values() {
            if let Some(i) = form.fields.iter().position(|f| f.key == key) {
                form.values[i] = value;
            }
        }
        form
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(value) = self.values.get_mut(self.focused) {
            value.push(c);
            self.revalidate(self.focused);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.focused) {
            value.pop();
            self.revalidate(self.focused);
        }
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        if let Some(i) = self.fields.iter().position(|f| f.key == key) {
            self.values[i] = value.into();
            self.revalidate(i);
        }
    }

    fn check(field: &FormField, value: &str) -> String {
        if value.trim().is_empty() {
            return if field.required {
                validate_required(field.label, value)
            } else {
                String::new()
            };
        }
        if field.numeric {
            validate_positive_number(field.label, value)
        } else {
            String::new()
        }
    }

    fn revalidate(&mut self, index: usize) {
        if let (Some(field), Some(value)) = (self.fields.get(index), self.values.get(index)) {
            self.errors[index] = Self::check(field, value);
        }
    }

    /// Validates every field and builds the request body.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] and records inline messages when a field fails.
    pub fn submit(&mut self) -> Result<RecordPayload, ValidationError> {
        for i in 0..self.fields.len() {
            self.revalidate(i);
        }
        if let Some(err) = ValidationError::collect(
            self.fields
                .iter()
                .zip(&self.errors)
                .map(|(f, e)| (f.label, e.as_str())),
        ) {
            return Err(err);
        }

        let mut payload = RecordPayload::new();
        for (field, value) in self.fields.iter().zip(&self.values) {
            let value = value.trim();
            if value.is_empty() && !field.required {
                continue;
            }
            let json = if field.numeric {
                value
                    .parse::<u64>()
                    .map_or_else(|_| Value::String(value.to_string()), Value::from)
            } else {
                Value::String(value.to_string())
            };
            payload.insert(field.key.to_string(), json);
        }
        Ok(payload)
    }

    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map_or("", String::as_str)
    }

    #[must_use]
    pub fn error(&self, index: usize) -> &str {
        self.errors.get(index).map_or("", String::as_str)
    }

    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("New {}", self.resource.noun()),
            FormMode::Edit { .. } => format!("Edit {}", self.resource.noun()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_required_fields_block_submit() {
        let mut form = RecordForm::create(Resource::Faqs);
        form.set_value("question", "Is the app free?");

        let err = form.submit().unwrap_err();
        assert_eq!(err, ValidationError::field("Answer", "Answer is required"));
        assert_eq!(form.error(1), "Answer is required");
    }

    #[test]
    fn test_gifting_payload_sends_coins_as_number() {
        let mut form = RecordForm::create(Resource::Gifting);
        form.set_value("userId", "u-42");
        form.set_value("coins", "150");

        let payload = form.submit().unwrap();
        assert_eq!(payload.get("coins"), Some(&json!(150)));
        assert_eq!(payload.get("userId"), Some(&json!("u-42")));
        assert!(!payload.contains_key("note"));
    }

    #[test]
    fn test_numeric_field_validates_while_typing() {
        let mut form = RecordForm::create(Resource::Gifting);
        form.focus_next();
        form.input_char('x');
        assert!(!form.error(1).is_empty());
        form.backspace();
        form.input_char('5');
        assert!(form.error(1).is_empty());
    }

    #[test]
    fn test_edit_prefills_values() {
        let record = AdminRecord::from_json(
            Resource::Breeds,
            json!({"_id": "b1", "name": "Beagle", "status": "active"}),
        )
        .unwrap();

        let mut form = RecordForm::edit(&record);
        assert_eq!(form.mode(), &FormMode::Edit { id: "b1".into() });
        assert_eq!(form.value(0), "Beagle");
        assert_eq!(form.title(), "Edit Breed");
        assert_eq!(form.submit().unwrap().get("name"), Some(&json!("Beagle")));
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = RecordForm::create(Resource::Faqs);
        form.focus_previous();
        assert_eq!(form.focused(), 1);
        form.focus_next();
        assert_eq!(form.focused(), 0);
    }
}
