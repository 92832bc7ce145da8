//! User Interface Components
//!
//! This module contains reusable Dioxus components for the dynamic form service:
//!
//! - **forms**: the form-type selector and the schema-driven active form
//! - **display**: progress indicator and submitted-records table
//! - **input**: per-field input controls

pub mod display;
pub mod forms;
pub mod input;
