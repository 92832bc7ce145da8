use dioxus::prelude::*;

use crate::features::form::FormTypeDefinition;

#[derive(Props, PartialEq, Clone)]
pub struct FormTypeSelectorProps {
    /// Form types in schema (display) order.
    pub form_types: Vec<FormTypeDefinition>,
    /// Id of the active form type, or the empty string for none.
    pub selected: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FormTypeSelector(props: FormTypeSelectorProps) -> Element {
    let form_types = props.form_types;
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            class: "form-type-selector",
            id: "formType",
            value: "{selected}",
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            option {
                value: "",
                "--Select--"
            }
            for form_type in form_types {
                option {
                    value: "{form_type.id}",
                    selected: form_type.id == selected,
                    "{form_type.label}"
                }
            }
        }
    }
}
