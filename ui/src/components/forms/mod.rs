pub mod form_type_selector;
pub mod schema_form;

pub use form_type_selector::*;
pub use schema_form::*;
