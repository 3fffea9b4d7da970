//! Rendering a [`ValidationResult`] into a form's error label.
//!
//! Validators never touch the UI. A presentation layer implements
//! [`ErrorLabel`] for its widget and calls [`render`] after validating.

use serde::Serialize;

use super::rules::ValidationResult;

/// Foreground colour of the error label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelColor {
    /// The widget's normal colour.
    Default,
    /// Error red.
    Error,
}

/// A display surface that shows one validation message.
pub trait ErrorLabel {
    fn set_message(&mut self, text: &str);
    fn set_color(&mut self, color: LabelColor);
}

/// Show `result` on `label`: the message in red on failure, cleared on success.
pub fn render(result: &ValidationResult, label: &mut impl ErrorLabel) {
    if result.is_valid {
        label.set_message("");
        label.set_color(LabelColor::Default);
    } else {
        label.set_message(&result.message);
        label.set_color(LabelColor::Error);
    }
}
