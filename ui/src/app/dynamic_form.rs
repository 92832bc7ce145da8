use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::{ProgressIndicator, RecordsTable};
use crate::components::forms::{FormTypeSelector, SchemaForm};
use crate::features::form::{FormAction, FormState};

const DYNAMIC_FORM_CSS: Asset = asset!("/assets/styling/dynamic_form.css");

#[component]
pub fn DynamicForm() -> Element {
    // Consolidated state management
    let mut state = use_signal(FormState::default);

    // Dispatch function for actions - in-place reduction preserves Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: FormAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: DYNAMIC_FORM_CSS }

        div {
            class: "dynamic-form-container",

            h2 {
                class: "dynamic-form-title",
                "Dynamic Form Implementation"
            }

            // Form type selector
            div {
                class: "form-type-section",
                label {
                    class: "input-label",
                    r#for: "formType",
                    "Select Form Type:"
                }
                FormTypeSelector {
                    form_types: state().schema.types().to_vec(),
                    selected: state().active_type.clone().unwrap_or_default(),
                    on_change: move |id: String| {
                        console_info!("[FORM] Form type selected: '{}'", id);
                        dispatch.call(FormAction::SelectFormType(id));
                    }
                }
            }

            ProgressIndicator { progress: state().progress }

            // Active form (hidden while no known form type is selected)
            if state().is_editing() {
                SchemaForm {
                    state: state,
                    dispatch: dispatch
                }
            }

            // Submitted records (hidden until the first submit)
            if !state().submitted.is_empty() {
                RecordsTable {
                    schema: state().schema.clone(),
                    records: state().submitted.clone()
                }
            }
        }
    }
}
