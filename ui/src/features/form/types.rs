// Core types for the dynamic form feature - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::features::form::schema::{default_schema, FormSchema};

/// Closed set of renderable field types. Dropdowns carry their option list
/// directly on the variant, so an option-less dropdown is unrepresentable
/// outside of explicit schema construction.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Dropdown { options: Vec<String> },
}

impl FieldKind {
    /// HTML `type` attribute for kinds rendered as an `input` element.
    /// Dropdown fields render as a `select` and never consult this.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Password => "password",
            FieldKind::Dropdown { .. } => "text",
        }
    }
}

/// A single field of a form type. Authored once as static configuration;
/// `name` is unique within its form type.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDefinition {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }
}

/// A named form type: its selector label and ordered field list.
/// Field order is display-significant.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FormTypeDefinition {
    pub id: String,
    pub label: String,
    pub fields: Vec<FieldDefinition>,
}

/// Snapshot of the form data at the moment of submit, together with the
/// originating form type so table columns can be derived per record.
/// Immutable once created and independent of later edits.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SubmittedRecord {
    pub form_type: String,
    pub values: HashMap<String, String>,
}

impl SubmittedRecord {
    /// Current value for `field`, or the empty string when unset.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum FormAction {
    /// Activate a form type by id. The empty string is the "none" sentinel.
    SelectFormType(String),
    /// Write one field value and recompute progress.
    UpdateField { name: String, value: String },
    /// Snapshot the current form data into the records list and reset.
    Submit,
}

/// Consolidated state for the dynamic form widget. Two logical states:
/// Idle (no active form type, empty data, progress 0) and Editing.
#[derive(Clone)]
pub struct FormState {
    pub schema: FormSchema,
    pub active_type: Option<String>,
    pub form_data: HashMap<String, String>,
    pub submitted: Vec<SubmittedRecord>,
    pub progress: u8,
}

impl FormState {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            active_type: None,
            form_data: HashMap::new(),
            submitted: Vec::new(),
            progress: 0,
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: FormAction) {
        match action {
            FormAction::SelectFormType(id) => {
                tracing::debug!("active form type set to '{}', form data reset", id);
                self.active_type = if id.is_empty() { None } else { Some(id) };
                self.form_data.clear();
                self.progress = 0;
            }
            FormAction::UpdateField { name, value } => {
                self.form_data.insert(name, value);
                self.progress = self.compute_progress();
            }
            FormAction::Submit => {
                match self.active_type.take() {
                    Some(form_type) => {
                        tracing::info!(
                            "form '{}' submitted with {} field value(s)",
                            form_type,
                            self.form_data.len()
                        );
                        self.submitted.push(SubmittedRecord {
                            form_type,
                            values: std::mem::take(&mut self.form_data),
                        });
                    }
                    None => {
                        tracing::warn!("submit with no active form type ignored");
                    }
                }
                self.form_data.clear();
                self.progress = 0;
            }
        }
    }

    /// Helper methods for common state queries
    pub fn is_editing(&self) -> bool {
        self.active_form().is_some()
    }

    /// Definition of the active form type. An unknown id resolves to `None`,
    /// which the UI treats as "no active form" rather than an error.
    pub fn active_form(&self) -> Option<&FormTypeDefinition> {
        self.active_type.as_deref().and_then(|id| self.schema.get(id))
    }

    /// Ordered field list of the active form type, empty when idle.
    pub fn active_fields(&self) -> &[FieldDefinition] {
        self.active_form().map(|t| t.fields.as_slice()).unwrap_or(&[])
    }

    /// Current value for `field`, or the empty string when unset.
    pub fn field_value(&self, field: &str) -> &str {
        self.form_data.get(field).map(String::as_str).unwrap_or_default()
    }

    /// Percentage of active-type fields holding a non-empty value, rounded.
    /// Recomputed from the current values on every call, so re-edits never
    /// overcount and clearing a field lowers the result. A field count of
    /// zero (idle, or an unknown form type) yields 0 without dividing.
    pub fn compute_progress(&self) -> u8 {
        let fields = self.active_fields();
        let total = fields.len();
        if total == 0 {
            return 0;
        }
        let filled = fields
            .iter()
            .filter(|f| !self.field_value(&f.name).is_empty())
            .count();
        ((filled as f64 / total as f64) * 100.0).round() as u8
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(default_schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing_state(form_type: &str) -> FormState {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::SelectFormType(form_type.to_string()));
        state
    }

    fn update(state: &mut FormState, name: &str, value: &str) {
        state.reduce_in_place(FormAction::UpdateField {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    #[test]
    fn test_select_form_type_enters_editing() {
        let state = editing_state("userInfo");

        assert!(state.is_editing());

        // Rendered field set must match the schema's field list, in order
        let names: Vec<&str> = state.active_fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["firstName", "lastName", "age"]);
    }

    #[test]
    fn test_select_form_type_resets_state() {
        let mut state = editing_state("userInfo");
        update(&mut state, "firstName", "Ann");
        assert!(state.progress > 0);

        // Switching types always clears data and progress, regardless of prior state
        state.reduce_in_place(FormAction::SelectFormType("addressInfo".to_string()));
        assert!(state.form_data.is_empty());
        assert_eq!(state.progress, 0);
        assert!(state.is_editing());
    }

    #[test]
    fn test_empty_sentinel_returns_to_idle() {
        let mut state = editing_state("userInfo");
        update(&mut state, "firstName", "Ann");

        state.reduce_in_place(FormAction::SelectFormType(String::new()));
        assert_eq!(state.active_type, None);
        assert!(!state.is_editing());
        assert!(state.form_data.is_empty());
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_unknown_form_type_renders_nothing() {
        let mut state = editing_state("bogusType");

        // Unknown ids are not errors: no fields, no progress, no division fault
        assert!(!state.is_editing());
        assert!(state.active_fields().is_empty());
        update(&mut state, "stray", "value");
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_progress_progression_for_user_info() {
        let mut state = editing_state("userInfo");
        assert_eq!(state.progress, 0);

        // 3 fields total: round(100 * 1/3) = 33, round(100 * 2/3) = 67
        update(&mut state, "firstName", "Ann");
        assert_eq!(state.progress, 33);
        update(&mut state, "lastName", "Lee");
        assert_eq!(state.progress, 67);
        update(&mut state, "age", "30");
        assert_eq!(state.progress, 100);
    }

    #[test]
    fn test_progress_does_not_overcount_on_reedit() {
        let mut state = editing_state("userInfo");

        update(&mut state, "firstName", "Ann");
        update(&mut state, "firstName", "Anna");
        assert_eq!(state.progress, 33);
    }

    #[test]
    fn test_progress_decrements_when_field_cleared() {
        let mut state = editing_state("userInfo");
        update(&mut state, "firstName", "Ann");
        update(&mut state, "lastName", "Lee");
        assert_eq!(state.progress, 67);

        update(&mut state, "lastName", "");
        assert_eq!(state.progress, 33);
    }

    #[test]
    fn test_submit_appends_snapshot_and_resets() {
        let mut state = editing_state("userInfo");
        update(&mut state, "firstName", "Ann");
        update(&mut state, "lastName", "Lee");

        state.reduce_in_place(FormAction::Submit);

        assert_eq!(state.submitted.len(), 1);
        let record = &state.submitted[0];
        assert_eq!(record.form_type, "userInfo");
        assert_eq!(record.value("firstName"), "Ann");
        assert_eq!(record.value("lastName"), "Lee");
        // Untouched optional field left out of the snapshot entirely
        assert_eq!(record.values.len(), 2);

        // Back to Idle
        assert_eq!(state.active_type, None);
        assert!(state.form_data.is_empty());
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_submit_empty_form_is_not_blocked() {
        // Required fields are advisory only: an untouched form still submits
        let mut state = editing_state("addressInfo");

        state.reduce_in_place(FormAction::Submit);

        assert_eq!(state.submitted.len(), 1);
        assert_eq!(state.submitted[0].form_type, "addressInfo");
        assert!(state.submitted[0].values.is_empty());
    }

    #[test]
    fn test_submitted_record_is_independent_of_later_edits() {
        let mut state = editing_state("userInfo");
        update(&mut state, "firstName", "Ann");
        state.reduce_in_place(FormAction::Submit);

        state.reduce_in_place(FormAction::SelectFormType("userInfo".to_string()));
        update(&mut state, "firstName", "Zoe");

        assert_eq!(state.submitted[0].value("firstName"), "Ann");
    }

    #[test]
    fn test_submit_when_idle_is_ignored() {
        let mut state = FormState::default();

        state.reduce_in_place(FormAction::Submit);

        assert!(state.submitted.is_empty());
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_record_serializes_to_json() {
        let mut state = editing_state("userInfo");
        update(&mut state, "firstName", "Ann");
        state.reduce_in_place(FormAction::Submit);

        let json = serde_json::to_value(&state.submitted[0]).unwrap();
        assert_eq!(json["form_type"], "userInfo");
        assert_eq!(json["values"]["firstName"], "Ann");
    }
}
