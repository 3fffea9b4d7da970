//! Form loading and report rendering.

use std::path::Path;

use contracts_core::validation::{ContractField, ContractForm, FormValidation};

use crate::config::OutputFormat;
use crate::error::CheckError;

/// Read a contract form from a JSON file.
pub fn load_form(path: &Path) -> Result<ContractForm, CheckError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Render `result` in the requested format.
pub fn render(result: &FormValidation, format: OutputFormat) -> Result<String, CheckError> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// One line per field: `OK` or the failure message.
pub fn render_text(result: &FormValidation) -> String {
    let width = ContractField::ALL
        .iter()
        .map(|f| f.label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in ContractField::ALL {
        let status = match result.violation(field) {
            Some(v) => v.message.as_str(),
            None => "OK",
        };
        out.push_str(&format!("{:<width$}  {status}\n", field.label()));
    }
    out.push_str(if result.is_valid {
        "Form is valid.\n"
    } else {
        "Form has errors.\n"
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts_core::validation::validate_form;

    #[test]
    fn text_report_lists_every_field() {
        let text = render_text(&validate_form(&ContractForm::default()));
        for field in ContractField::ALL {
            assert!(text.contains(field.label()), "missing {field}");
        }
        assert!(text.contains("Contract ID cannot be empty."));
        assert!(text.ends_with("Form has errors.\n"));
    }

    #[test]
    fn text_report_aligns_labels() {
        let text = render_text(&validate_form(&ContractForm::default()));
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("Contract ID  "));
    }
}
