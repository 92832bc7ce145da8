use dioxus::prelude::*;

use crate::features::form::{FieldDefinition, FieldKind};
use crate::utils::validation::{field_input_class, field_input_style};

#[derive(Props, PartialEq, Clone)]
pub struct FieldInputProps {
    pub field: FieldDefinition,
    pub value: String,
    pub on_change: EventHandler<String>,
}

/// One schema field: label, the matching control for its kind, and the
/// advisory required-field hint when the value is still blank.
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let field = props.field;
    let value = props.value;
    let on_change = props.on_change;

    let missing = field.required && value.is_empty();

    let control = match &field.kind {
        FieldKind::Dropdown { options } => {
            let options = options.clone();
            rsx! {
                select {
                    class: "{field_input_class(missing)}",
                    style: "{field_input_style(missing)}",
                    id: "{field.name}",
                    value: "{value}",
                    onchange: move |evt| {
                        on_change.call(evt.value());
                    },
                    option {
                        value: "",
                        "--Select--"
                    }
                    for option_value in options {
                        option {
                            value: "{option_value}",
                            selected: option_value == value,
                            "{option_value}"
                        }
                    }
                }
            }
        }
        kind => rsx! {
            input {
                class: "{field_input_class(missing)}",
                style: "{field_input_style(missing)}",
                id: "{field.name}",
                r#type: "{kind.input_type()}",
                value: "{value}",
                oninput: move |evt| {
                    on_change.call(evt.value());
                },
            }
        },
    };

    rsx! {
        div {
            class: "field-group",
            label {
                class: "field-label",
                r#for: "{field.name}",
                "{field.label}"
            }
            {control}
            if missing {
                small {
                    class: "field-required-hint",
                    "This field is required."
                }
            }
        }
    }
}
