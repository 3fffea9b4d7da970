//! `contracts-core` -- validation rules for the contract form.
//!
//! Pure logic with no UI dependencies: every validator takes the raw field
//! text and returns a [`validation::ValidationResult`]. Rendering the result
//! into a form label is left to the caller (see [`validation::display`]).

pub mod error;
pub mod validation;
