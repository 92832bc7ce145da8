use crate::features::form::types::FormState;

/// True when the current value for `field` is absent or empty. An unselected
/// dropdown reports the empty string and counts as blank.
pub fn field_is_blank(state: &FormState, field: &str) -> bool {
    state.field_value(field).is_empty()
}

/// Names of required fields of the active form type that are still blank.
/// Advisory only: the result drives inline hints and a console warning,
/// never a submission gate.
pub fn missing_required_fields(state: &FormState) -> Vec<String> {
    state
        .active_fields()
        .iter()
        .filter(|f| f.required && field_is_blank(state, &f.name))
        .map(|f| f.name.clone())
        .collect()
}

/// True when a form type is active and every required field has a value.
pub fn form_is_complete(state: &FormState) -> bool {
    state.is_editing() && missing_required_fields(state).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::form::types::FormAction;

    fn update(state: &mut FormState, name: &str, value: &str) {
        state.reduce_in_place(FormAction::UpdateField {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    #[test]
    fn test_missing_required_fields_for_address() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::SelectFormType("addressInfo".to_string()));

        // zipCode is optional and never listed
        assert_eq!(missing_required_fields(&state), vec!["street", "city", "state"]);

        update(&mut state, "street", "1 Main St");
        assert_eq!(missing_required_fields(&state), vec!["city", "state"]);

        // Clearing a field brings it back
        update(&mut state, "street", "");
        assert_eq!(missing_required_fields(&state), vec!["street", "city", "state"]);
    }

    #[test]
    fn test_form_is_complete_ignores_optional_fields() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::SelectFormType("userInfo".to_string()));
        assert!(!form_is_complete(&state));

        update(&mut state, "firstName", "Ann");
        update(&mut state, "lastName", "Lee");

        // age is optional; the form is complete without it
        assert!(form_is_complete(&state));
    }

    #[test]
    fn test_idle_state_is_never_complete() {
        let state = FormState::default();

        assert!(!form_is_complete(&state));
        assert!(missing_required_fields(&state).is_empty());
    }

    #[test]
    fn test_incomplete_form_still_submits() {
        let mut state = FormState::default();
        state.reduce_in_place(FormAction::SelectFormType("paymentInfo".to_string()));
        assert!(!form_is_complete(&state));

        // The missing-required list never gates submission
        state.reduce_in_place(FormAction::Submit);
        assert_eq!(state.submitted.len(), 1);
    }
}
