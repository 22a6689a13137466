//! Field validation for contact editing.
//!
//! This module implements the live-editing contract of a contact text field:
//! character-level checks while typing, paste checks, and whole-value checks
//! that produce UI-bindable error state. Nothing here panics or returns a
//! process-level error; invalid input is ordinary state.

pub mod field;
pub mod rules;

pub use field::{
    validate_contact, ContactField, FieldError, FieldValidator, ValidationMode,
};
