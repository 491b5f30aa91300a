//! Contact form inputs.
//!
//! Describes each field of the contact form: label, placeholder, kind, and
//! the disabled/error state derived from the submission flow.

use crate::services::{ContactField, ContactSnapshot};
use crate::ui::theme::ThemeColors;

/// Kind of input control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line text.
    #[default]
    Text,
    /// Single-line email address.
    Email,
    /// Multiline text area.
    TextArea,
}

/// A form field ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    field: ContactField,
    label: &'static str,
    value: String,
    placeholder: Option<&'static str>,
    kind: InputKind,
    rows: u32,
    required: bool,
    disabled: bool,
    error: bool,
}

impl FormField {
    /// Create a field with the default label and placeholder for `field`.
    pub fn new(field: ContactField) -> Self {
        let (label, placeholder, kind) = match field {
            ContactField::Name => ("Name", "Your full name", InputKind::Text),
            ContactField::Email => ("Email", "your.email@example.com", InputKind::Email),
            ContactField::Subject => ("Subject", "Project Inquiry", InputKind::Text),
            ContactField::Message => ("Message", "Let's discuss a project...", InputKind::TextArea),
        };
        Self {
            field,
            label,
            value: String::new(),
            placeholder: Some(placeholder),
            kind,
            rows: if kind == InputKind::TextArea { 5 } else { 1 },
            required: true,
            disabled: false,
            error: false,
        }
    }

    /// Set the current value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Disable the input.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show error state.
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn field(&self) -> ContactField {
        self.field
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Text to show: the value, or the placeholder when empty.
    pub fn display_text(&self) -> &str {
        if self.value.is_empty() {
            self.placeholder.unwrap_or_default()
        } else {
            &self.value
        }
    }

    /// Border color for the current state.
    pub fn border_color(&self, colors: &ThemeColors) -> &'static str {
        if self.error {
            colors.error
        } else {
            colors.border
        }
    }

    /// Text color; placeholders are muted.
    pub fn text_color(&self, colors: &ThemeColors) -> &'static str {
        if self.value.is_empty() {
            colors.text_secondary
        } else {
            colors.text
        }
    }
}

/// Builds the four contact fields from the form state.
///
/// Inputs are disabled while a submission is in flight. After a validation
/// failure, blank fields (and a malformed email) are flagged.
pub fn contact_fields(snapshot: &ContactSnapshot) -> Vec<FormField> {
    let submitting = snapshot.status.is_submitting();
    let flag_errors = snapshot.validation_error.is_some();

    ContactField::ALL
        .iter()
        .map(|&field| {
            let value = snapshot.form.get(field);
            let invalid = value.trim().is_empty()
                || (field == ContactField::Email
                    && !crate::services::is_valid_email(value.trim()));
            FormField::new(field)
                .value(value)
                .disabled(submitting)
                .error(flag_errors && invalid)
        })
        .collect()
}

/// Label of the submit button.
pub fn submit_label(snapshot: &ContactSnapshot) -> &'static str {
    if snapshot.status.is_submitting() {
        "Sending..."
    } else {
        "Send Email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ContactForm, SubmissionStatus};

    fn snapshot(form: ContactForm, status: SubmissionStatus, error: bool) -> ContactSnapshot {
        ContactSnapshot {
            form,
            status,
            validation_error: error.then_some(crate::error::VALIDATION_MESSAGE),
        }
    }

    #[test]
    fn field_builder() {
        let input = FormField::new(ContactField::Message)
            .value("Hello")
            .placeholder("Say hi")
            .disabled(true)
            .error(false);

        assert_eq!(input.kind(), InputKind::TextArea);
        assert_eq!(input.rows(), 5);
        assert_eq!(input.display_text(), "Hello");
        assert!(input.is_disabled());
        assert!(!input.has_error());
        assert!(input.is_required());
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let input = FormField::new(ContactField::Email);
        assert_eq!(input.label(), "Email");
        assert_eq!(input.display_text(), "your.email@example.com");

        let colors = ThemeColors::light();
        assert_eq!(input.text_color(&colors), colors.text_secondary);
        assert_eq!(input.clone().error(true).border_color(&colors), colors.error);
    }

    #[test]
    fn fields_disabled_while_submitting() {
        let snap = snapshot(ContactForm::default(), SubmissionStatus::Submitting, false);
        let fields = contact_fields(&snap);
        assert_eq!(fields.len(), 4);
        assert!(fields.iter().all(FormField::is_disabled));
        assert_eq!(submit_label(&snap), "Sending...");
    }

    #[test]
    fn validation_flags_offending_fields() {
        let form = ContactForm::new("A", "not-an-email", "", "M");
        let fields = contact_fields(&snapshot(form, SubmissionStatus::Idle, true));
        let flagged: Vec<_> = fields
            .iter()
            .filter(|f| f.has_error())
            .map(FormField::field)
            .collect();
        assert_eq!(flagged, vec![ContactField::Email, ContactField::Subject]);
    }
}
