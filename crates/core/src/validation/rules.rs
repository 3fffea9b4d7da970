//! Field, rule and result types.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::{CONTACT_RE, CONTRACT_ID_RE, DATE_RE, SINGLE_WORD_RE, TWO_WORDS_RE};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Shortest accepted contract term.
pub const MIN_TERM: f64 = 1.0;

/// Longest accepted contract term.
pub const MAX_TERM: f64 = 120.0;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// One input on the contract form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractField {
    ContractId,
    Title,
    Type,
    Term,
    Status,
    StartDate,
    DraftedBy,
    ContactNo,
}

impl ContractField {
    /// Every field, in the order the form lays them out.
    pub const ALL: [ContractField; 8] = [
        ContractField::ContractId,
        ContractField::Title,
        ContractField::Type,
        ContractField::Term,
        ContractField::Status,
        ContractField::StartDate,
        ContractField::DraftedBy,
        ContractField::ContactNo,
    ];

    /// Label shown to the user and used as the subject of messages.
    pub fn label(self) -> &'static str {
        match self {
            ContractField::ContractId => "Contract ID",
            ContractField::Title => "Title",
            ContractField::Type => "Type",
            ContractField::Term => "Term",
            ContractField::Status => "Status",
            ContractField::StartDate => "Start Date",
            ContractField::DraftedBy => "Drafted By",
            ContractField::ContactNo => "Contact No",
        }
    }

    /// Snake-case key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            ContractField::ContractId => "contract_id",
            ContractField::Title => "title",
            ContractField::Type => "type",
            ContractField::Term => "term",
            ContractField::Status => "status",
            ContractField::StartDate => "start_date",
            ContractField::DraftedBy => "drafted_by",
            ContractField::ContactNo => "contact_no",
        }
    }

    /// The rule that governs this field.
    pub fn rule(self) -> &'static ValidationRule {
        &RULES[self as usize]
    }
}

impl fmt::Display for ContractField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Failure kinds
// ---------------------------------------------------------------------------

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    #[error("value is empty")]
    Empty,

    #[error("value does not match the expected format")]
    FormatMismatch,

    #[error("value is outside the accepted range")]
    OutOfRange,

    #[error("value is not a number")]
    NotANumber,
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// What a rule checks once the empty check (if any) has passed.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Whole-string pattern match.
    Pattern(&'static LazyLock<Regex>),
    /// Real number within `[min, max]`.
    Range { min: f64, max: f64 },
}

/// Immutable validation rule for one field.
#[derive(Debug)]
pub struct ValidationRule {
    pub field: ContractField,
    /// Whether blank input is rejected as [`FieldErrorKind::Empty`] before
    /// the main check runs.
    pub required: bool,
    pub check: Check,
    /// Message for [`FieldErrorKind::FormatMismatch`] and
    /// [`FieldErrorKind::OutOfRange`].
    pub message: &'static str,
}

impl ValidationRule {
    /// User-facing message for a failure of the given kind.
    pub fn message_for(&self, kind: FieldErrorKind) -> String {
        match kind {
            FieldErrorKind::Empty => format!("{} cannot be empty.", self.field.label()),
            FieldErrorKind::NotANumber => {
                format!("{} must be a valid number.", self.field.label())
            }
            FieldErrorKind::FormatMismatch | FieldErrorKind::OutOfRange => {
                self.message.to_string()
            }
        }
    }
}

/// Rule table, indexed by `ContractField as usize`.
static RULES: [ValidationRule; 8] = [
    ValidationRule {
        field: ContractField::ContractId,
        required: true,
        check: Check::Pattern(&CONTRACT_ID_RE),
        message: "Contract ID must be exactly 5 digits and numeric.",
    },
    ValidationRule {
        field: ContractField::Title,
        required: true,
        check: Check::Pattern(&TWO_WORDS_RE),
        message: "Title must contain only alphabets and up to 2 words.",
    },
    ValidationRule {
        field: ContractField::Type,
        required: true,
        check: Check::Pattern(&SINGLE_WORD_RE),
        message: "Type must be a single word (alphabets only).",
    },
    ValidationRule {
        field: ContractField::Term,
        required: true,
        check: Check::Range {
            min: MIN_TERM,
            max: MAX_TERM,
        },
        message: "Term must be a double between 1 and 120.",
    },
    ValidationRule {
        field: ContractField::Status,
        required: true,
        check: Check::Pattern(&SINGLE_WORD_RE),
        message: "Status must be a single word (alphabets only).",
    },
    ValidationRule {
        field: ContractField::StartDate,
        required: false,
        check: Check::Pattern(&DATE_RE),
        message: "Start Date must be in DD-MM-YYYY format.",
    },
    ValidationRule {
        field: ContractField::DraftedBy,
        required: false,
        check: Check::Pattern(&TWO_WORDS_RE),
        message: "Drafted By must contain only alphabets and 1-2 words.",
    },
    ValidationRule {
        field: ContractField::ContactNo,
        required: false,
        check: Check::Pattern(&CONTACT_RE),
        message: "Contact No must start with 98 or 97 and have 10 digits.",
    },
];

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Empty when valid.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldErrorKind>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            error: None,
        }
    }

    pub fn invalid(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            error: Some(kind),
        }
    }
}
