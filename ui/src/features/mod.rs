//! Application Features
//!
//! Feature modules organized by domain:
//!
//! - **form**: schema-driven form state, progress, and validation

pub mod form;
