pub mod form_validation;
pub mod schema;
pub mod types;

pub use form_validation::*;
pub use schema::*;
pub use types::*;
