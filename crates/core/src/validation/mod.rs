//! Contract form validation.
//!
//! Provides the rule table, compiled field patterns, per-field validators,
//! whole-form evaluation and a label rendering adapter.

pub mod display;
pub mod field;
pub mod form;
pub mod patterns;
pub mod rules;

pub use field::{
    validate_contact_no, validate_contract_id, validate_drafted_by, validate_field,
    validate_start_date, validate_status, validate_term, validate_title, validate_type,
};
pub use form::{validate_form, ContractForm, FieldViolation, FormValidation};
pub use rules::{ContractField, FieldErrorKind, ValidationResult, ValidationRule};
