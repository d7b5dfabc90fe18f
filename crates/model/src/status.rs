use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A one-line message shown above the summary.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

impl StatusMessage {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        StatusMessage {
            severity,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage::new(Severity::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage::new(Severity::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        StatusMessage::new(Severity::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage::new(Severity::Error, text)
    }
}
