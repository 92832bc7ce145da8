//! Form schema container and the built-in form types.
//!
//! The schema is an injectable configuration value: components own whatever
//! `FormSchema` their state was constructed with, and tests substitute
//! alternates without touching any widget logic.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::features::form::types::{FieldDefinition, FieldKind, FormTypeDefinition};

/// Structural problems detectable when a schema is authored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("duplicate form type id '{id}'")]
    DuplicateFormType { id: String },
    #[error("duplicate field '{field}' in form type '{form_type}'")]
    DuplicateField { form_type: String, field: String },
    #[error("dropdown field '{field}' in form type '{form_type}' has no options")]
    EmptyDropdown { form_type: String, field: String },
}

/// Ordered collection of form types, looked up by id. Pure data with no
/// mutation after construction; an id not present simply resolves to `None`,
/// which callers treat as "no active form".
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FormSchema {
    types: Vec<FormTypeDefinition>,
}

impl FormSchema {
    /// Builds a schema, rejecting duplicate type ids, duplicate field names
    /// within a type, and dropdowns with an empty option list.
    pub fn new(types: Vec<FormTypeDefinition>) -> Result<Self, SchemaError> {
        let mut seen_types = HashSet::new();
        for form_type in &types {
            if !seen_types.insert(form_type.id.as_str()) {
                return Err(SchemaError::DuplicateFormType {
                    id: form_type.id.clone(),
                });
            }
            let mut seen_fields = HashSet::new();
            for field in &form_type.fields {
                if !seen_fields.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        form_type: form_type.id.clone(),
                        field: field.name.clone(),
                    });
                }
                if let FieldKind::Dropdown { options } = &field.kind {
                    if options.is_empty() {
                        return Err(SchemaError::EmptyDropdown {
                            form_type: form_type.id.clone(),
                            field: field.name.clone(),
                        });
                    }
                }
            }
        }
        Ok(Self { types })
    }

    pub fn get(&self, id: &str) -> Option<&FormTypeDefinition> {
        self.types.iter().find(|t| t.id == id)
    }

    /// All form types in authored (selector display) order.
    pub fn types(&self) -> &[FormTypeDefinition] {
        &self.types
    }
}

/// The built-in schema: user, address, and payment forms.
pub fn default_schema() -> FormSchema {
    FormSchema::new(vec![
        FormTypeDefinition {
            id: "userInfo".to_string(),
            label: "User Information".to_string(),
            fields: vec![
                FieldDefinition::new("firstName", "First Name", FieldKind::Text, true),
                FieldDefinition::new("lastName", "Last Name", FieldKind::Text, true),
                FieldDefinition::new("age", "Age", FieldKind::Number, false),
            ],
        },
        FormTypeDefinition {
            id: "addressInfo".to_string(),
            label: "Address Information".to_string(),
            fields: vec![
                FieldDefinition::new("street", "Street", FieldKind::Text, true),
                FieldDefinition::new("city", "City", FieldKind::Text, true),
                FieldDefinition::new(
                    "state",
                    "State",
                    FieldKind::Dropdown {
                        options: vec![
                            "California".to_string(),
                            "Texas".to_string(),
                            "New York".to_string(),
                        ],
                    },
                    true,
                ),
                FieldDefinition::new("zipCode", "Zip Code", FieldKind::Text, false),
            ],
        },
        FormTypeDefinition {
            id: "paymentInfo".to_string(),
            label: "Payment Information".to_string(),
            fields: vec![
                FieldDefinition::new("cardNumber", "Card Number", FieldKind::Text, true),
                FieldDefinition::new("expiryDate", "Expiry Date", FieldKind::Date, true),
                FieldDefinition::new("cvv", "CVV", FieldKind::Password, true),
                FieldDefinition::new("cardholderName", "Cardholder Name", FieldKind::Text, true),
            ],
        },
    ])
    .expect("built-in schema is structurally valid")
}
