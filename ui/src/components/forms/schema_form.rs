use dioxus::prelude::*;

use crate::components::input::FieldInput;
use crate::features::form::{
    form_is_complete, missing_required_fields, FieldDefinition, FormAction, FormState,
};
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct SchemaFormProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
}

fn render_field(
    field: &FieldDefinition,
    value: String,
    dispatch: EventHandler<FormAction>,
) -> Element {
    let name = field.name.clone();
    rsx! {
        FieldInput {
            field: field.clone(),
            value: value,
            on_change: move |value: String| {
                dispatch.call(FormAction::UpdateField {
                    name: name.clone(),
                    value,
                });
            }
        }
    }
}

/// The active form: one input per schema field and a submit button. Submit
/// swallows the browser's default navigation, snapshots the data into the
/// records list, and acknowledges with a blocking alert. Blank required
/// fields are logged, never enforced.
#[component]
pub fn SchemaForm(props: SchemaFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let fields = state().active_fields().to_vec();

    rsx! {
        form {
            class: "schema-form",
            onsubmit: move |evt| {
                evt.prevent_default();

                if form_is_complete(&state()) {
                    console_info!("[FORM] Submitting complete form");
                } else {
                    let missing = missing_required_fields(&state());
                    console_warn!(
                        "[FORM] Submitting with {} required field(s) blank: {}",
                        missing.len(),
                        missing.join(", ")
                    );
                }

                dispatch.call(FormAction::Submit);

                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Form submitted successfully!");
                }
            },

            for field in fields.iter() {
                {render_field(field, state().field_value(&field.name).to_string(), dispatch)}
            }

            div {
                class: "button-section",
                button {
                    r#type: "submit",
                    class: "submit-button",
                    "Submit"
                }
            }
        }
    }
}
