use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid component file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFileName { name, .. } => vec![
                format!("'{}' cannot be turned into a component name", name),
                "Rename the file to something like alert-dialog.tsx".into(),
            ],
            Self::InvalidSettings(msg) => vec![
                "Check the [organize] section of your config file".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFileName { .. } | Self::InvalidSettings(_) => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
