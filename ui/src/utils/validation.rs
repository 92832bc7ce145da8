/// CSS class for a field control, reflecting the advisory missing-required
/// state.
pub fn field_input_class(missing_required: bool) -> &'static str {
    if missing_required {
        "input-field input-required-missing"
    } else {
        "input-field"
    }
}

pub fn field_input_style(missing_required: bool) -> &'static str {
    if missing_required {
        "border: 2px solid #ef4444; background-color: #fef2f2;"
    } else {
        ""
    }
}
