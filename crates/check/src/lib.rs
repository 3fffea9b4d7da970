//! `contracts-check` library crate.
//!
//! Loads a contract form from disk, validates it with `contracts-core` and
//! renders a report. The binary entrypoint lives in `main.rs`; the modules
//! are public for integration testing.

pub mod config;
pub mod error;
pub mod report;

use contracts_core::validation::{validate_form, FormValidation};

use crate::config::CheckConfig;
use crate::error::CheckError;

/// Load the configured form and validate it.
pub fn run(config: &CheckConfig) -> Result<FormValidation, CheckError> {
    let form = report::load_form(&config.form_path)?;
    let result = validate_form(&form);

    tracing::info!(
        path = %config.form_path.display(),
        is_valid = result.is_valid,
        violations = result.violations.len(),
        "Contract form checked",
    );

    Ok(result)
}
