/// Errors that stop a check before a report can be produced.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Neither a positional argument nor `CONTRACT_FORM_PATH` was given.
    #[error("No form path given (pass it as the first argument or set CONTRACT_FORM_PATH)")]
    MissingFormPath,

    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownOutputFormat(String),

    #[error("Failed to read form: {0}")]
    Io(#[from] std::io::Error),

    /// The form file is not a JSON object with string fields, or the report
    /// could not be serialized.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
