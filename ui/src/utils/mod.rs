//! Utility Functions and Cross-Cutting Concerns
//!
//! This module provides utility functions and macros used throughout the application:
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: CSS helpers for the advisory field validation states

pub mod console_macros;
pub mod validation;

pub use validation::*;
