//! Per-field validators.
//!
//! Every validator is a pure function of its input. Failures are returned as
//! an invalid [`ValidationResult`], never as an error or panic.

use super::rules::{Check, ContractField, FieldErrorKind, ValidationResult, ValidationRule};

/// Validate `input` against the rule for `field`.
pub fn validate_field(field: ContractField, input: &str) -> ValidationResult {
    let rule = field.rule();
    match check(rule, input) {
        Ok(()) => ValidationResult::valid(),
        Err(kind) => ValidationResult::invalid(kind, rule.message_for(kind)),
    }
}

fn check(rule: &ValidationRule, input: &str) -> Result<(), FieldErrorKind> {
    if rule.required && input.trim().is_empty() {
        return Err(FieldErrorKind::Empty);
    }
    match rule.check {
        Check::Pattern(re) => {
            if re.is_match(input) {
                Ok(())
            } else {
                Err(FieldErrorKind::FormatMismatch)
            }
        }
        Check::Range { min, max } => {
            let value: f64 = input
                .trim()
                .parse()
                .map_err(|_| FieldErrorKind::NotANumber)?;
            // NaN fails `contains`, so it lands here too.
            if (min..=max).contains(&value) {
                Ok(())
            } else {
                Err(FieldErrorKind::OutOfRange)
            }
        }
    }
}

/// Contract ID: exactly five digits.
pub fn validate_contract_id(input: &str) -> ValidationResult {
    validate_field(ContractField::ContractId, input)
}

/// Title: one or two alphabetic words.
pub fn validate_title(input: &str) -> ValidationResult {
    validate_field(ContractField::Title, input)
}

/// Type: a single alphabetic word.
pub fn validate_type(input: &str) -> ValidationResult {
    validate_field(ContractField::Type, input)
}

/// Term: a real number between 1 and 120 inclusive.
pub fn validate_term(input: &str) -> ValidationResult {
    validate_field(ContractField::Term, input)
}

/// Status: a single alphabetic word.
pub fn validate_status(input: &str) -> ValidationResult {
    validate_field(ContractField::Status, input)
}

/// Start date in `DD-MM-YYYY` shape. Calendar validity is not checked.
pub fn validate_start_date(input: &str) -> ValidationResult {
    validate_field(ContractField::StartDate, input)
}

pub fn validate_drafted_by(input: &str) -> ValidationResult {
    validate_field(ContractField::DraftedBy, input)
}

pub fn validate_contact_no(input: &str) -> ValidationResult {
    validate_field(ContractField::ContactNo, input)
}
