//! Whole-form evaluation.
//!
//! Runs every field validator over one form submission and collects the
//! failures in form order.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::field::validate_field;
use super::rules::{ContractField, FieldErrorKind};

/// Raw text of one contract form submission.
///
/// Missing keys deserialize as empty strings so they fail validation the
/// same way a blank input would.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractForm {
    pub contract_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub term: String,
    pub status: String,
    pub start_date: String,
    pub drafted_by: String,
    pub contact_no: String,
}

impl ContractForm {
    /// Raw input for `field`.
    pub fn value(&self, field: ContractField) -> &str {
        match field {
            ContractField::ContractId => &self.contract_id,
            ContractField::Title => &self.title,
            ContractField::Type => &self.contract_type,
            ContractField::Term => &self.term,
            ContractField::Status => &self.status,
            ContractField::StartDate => &self.start_date,
            ContractField::DraftedBy => &self.drafted_by,
            ContractField::ContactNo => &self.contact_no,
        }
    }
}

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: ContractField,
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Aggregated result of validating every field of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValidation {
    pub is_valid: bool,
    pub violations: Vec<FieldViolation>,
}

impl FormValidation {
    /// The failure a single error label would show: the first in form order.
    pub fn first_violation(&self) -> Option<&FieldViolation> {
        self.violations.first()
    }

    /// Violation for `field`, if it failed.
    pub fn violation(&self, field: ContractField) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }

    /// Convert into a `Result`, joining all messages on failure.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid {
            return Ok(());
        }
        let messages: Vec<String> = self.violations.into_iter().map(|v| v.message).collect();
        Err(CoreError::Validation(messages.join(" ")))
    }
}

/// Validate every field of `form`.
pub fn validate_form(form: &ContractForm) -> FormValidation {
    let mut violations = Vec::new();

    for field in ContractField::ALL {
        let result = validate_field(field, form.value(field));
        if let Some(kind) = result.error {
            tracing::debug!(
                field = field.key(),
                kind = ?kind,
                "Contract form field rejected",
            );
            violations.push(FieldViolation {
                field,
                kind,
                message: result.message,
            });
        }
    }

    FormValidation {
        is_valid: violations.is_empty(),
        violations,
    }
}
