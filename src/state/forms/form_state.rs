//! Form state management and the registration form

use super::field::{FieldName, FieldSet, FormField};
use super::validation::{self, ValidationError};
use std::collections::BTreeMap;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Values of the fields a form variant carries.
///
/// Every configured field always holds a string, empty by default.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    pub fn new(field_set: FieldSet) -> Self {
        Self {
            fields: field_set.fields().into_iter().map(FormField::new).collect(),
        }
    }

    pub fn has_field(&self, name: FieldName) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Value of a field, or the empty string if the variant lacks it
    pub fn value(&self, name: FieldName) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(FormField::as_text)
            .unwrap_or("")
    }

    /// Set a field by name. Returns false when the variant lacks the field.
    pub fn set(&mut self, name: FieldName, value: String) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value;
                true
            }
            None => {
                tracing::debug!(field = %name, "Ignoring edit to a field this form does not carry");
                false
            }
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// (field, value) pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.fields.iter().map(|f| (f.name, f.as_text()))
    }
}

/// Inline error messages, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    messages: BTreeMap<FieldName, String>,
}

impl ErrorState {
    /// Message shown under a field, if any
    pub fn message(&self, name: FieldName) -> Option<&str> {
        self.messages.get(&name).map(String::as_str)
    }

    pub fn clear(&mut self, name: FieldName) {
        self.messages.remove(&name);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Record a failed validation pass
    fn record(&mut self, error: ValidationError) {
        if error.field() == FieldName::Password {
            self.clear(FieldName::ConfirmPassword);
        }
        self.messages.insert(error.field(), error.to_string());
    }
}

/// Whether validation errors are currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Invalid,
}

/// Buttons on the action panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Register,
    SearchAddress,
}

impl FormButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "登録",
            Self::SearchAddress => "住所検索",
        }
    }
}

/// The registration form: values, inline errors and focus
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    values: FormState,
    errors: ErrorState,
    pub active_field_index: usize,
    /// Which button is selected when the action panel is active
    pub selected_button: usize,
}

impl RegistrationForm {
    pub fn new(field_set: FieldSet) -> Self {
        Self {
            values: FormState::new(field_set),
            errors: ErrorState::default(),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        if self.errors.is_empty() {
            FormPhase::Idle
        } else {
            FormPhase::Invalid
        }
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.values.value(name)
    }

    /// Single entry point for field updates.
    /// Editing a field clears that field's error only.
    pub fn edit(&mut self, name: FieldName, value: String) {
        if self.values.set(name, value) {
            self.errors.clear(name);
        }
    }

    /// Validate the current values, recording any failure inline
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        validation::validate(&self.values).inspect_err(|&err| self.errors.record(err))
    }

    /// Buttons shown on the action panel for this variant
    pub fn buttons(&self) -> Vec<FormButton> {
        let mut buttons = vec![FormButton::Register];
        if self.values.has_field(FieldName::PostalCode) {
            buttons.push(FormButton::SearchAddress);
        }
        buttons
    }

    /// Returns true if the action panel is currently active
    pub fn is_action_panel_active(&self) -> bool {
        self.active_field_index == self.values.fields().len()
    }

    pub fn selected(&self) -> Option<FormButton> {
        self.buttons().get(self.selected_button).copied()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        let count = self.buttons().len();
        self.selected_button = (self.selected_button + 1) % count;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        let count = self.buttons().len();
        if self.selected_button == 0 {
            self.selected_button = count - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Name of the focused input, None on the action panel
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.get_field(self.active_field_index).map(|f| f.name)
    }

    /// Append a typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            let mut value = self.value(name).to_string();
            value.push(c);
            self.edit(name, value);
        }
    }

    /// Remove the last character from the focused field
    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            let mut value = self.value(name).to_string();
            if value.pop().is_some() {
                self.edit(name, value);
            }
        }
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        // inputs plus the action panel
        self.values.fields().len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.values.fields().len());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.values.fields().get(index)
    }
}
