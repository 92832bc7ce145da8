use dioxus::prelude::*;

use crate::features::form::{FormSchema, SubmittedRecord};

#[derive(Props, PartialEq, Clone)]
pub struct RecordsTableProps {
    pub schema: FormSchema,
    pub records: Vec<SubmittedRecord>,
}

/// Table of submitted records. Header columns come from the first record's
/// originating form type; each row's cells come from its own record's form
/// type, so values stay aligned with their field names even when records
/// from different form types share the table. Edit/Delete are inert.
#[component]
pub fn RecordsTable(props: RecordsTableProps) -> Element {
    let schema = props.schema;
    let records = props.records;

    let columns: Vec<String> = records
        .first()
        .and_then(|record| schema.get(&record.form_type))
        .map(|form_type| form_type.fields.iter().map(|f| f.label.clone()).collect())
        .unwrap_or_default();

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            schema
                .get(&record.form_type)
                .map(|form_type| {
                    form_type
                        .fields
                        .iter()
                        .map(|f| record.value(&f.name).to_string())
                        .collect()
                })
                .unwrap_or_default()
        })
        .collect();

    rsx! {
        div {
            class: "records-section",
            h3 {
                class: "records-title",
                "Submitted Data"
            }
            table {
                class: "records-table",
                thead {
                    tr {
                        for column in columns {
                            th { "{column}" }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            for cell in row {
                                td { "{cell}" }
                            }
                            td {
                                button {
                                    class: "edit-button",
                                    "Edit"
                                }
                                " "
                                button {
                                    class: "delete-button",
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
