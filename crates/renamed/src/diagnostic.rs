//! Synthesis failures and the diagnostics reported for them

use serde::Serialize;
use std::fmt;

/// Message domain attached to every diagnostic unless the host overrides it
pub const DEFAULT_DOMAIN: &str = "uk.josephduffy.Renamed";

/// Reasons a shim could not be synthesized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShimError {
    #[error("'Renamed' requires a string literal containing the name of the old symbol")]
    MissingNameParameter,

    #[error(
        "'Renamed' can only be applied to structs, classes, enums, typealiases, functions, and variables, not {kind}"
    )]
    InvalidDeclarationType { kind: String },

    #[error("The provided function signature '{signature}' is not valid. {reason}.")]
    MalformedSignature { signature: String, reason: &'static str },

    #[error("A function signature ('{signature}') can only rename a function")]
    UnexpectedSignature { signature: String },

    #[error(
        "The old function signature must have the same number of parameters as the function 'Renamed' is applied to (expected {expected}, found {found})"
    )]
    ParameterCountMismatch { expected: usize, found: usize },

    #[error("'Renamed' requires variable '{name}' to be explicitly typed")]
    MissingExplicitType { name: String },

    #[error(
        "'Renamed' is only supported on variables with block and explicit accessor syntax ({description})"
    )]
    UnsupportedAccessorForm { description: String },

    #[error("'Renamed' is only supported on variables with a getter")]
    MissingGetAccessor,

    #[error("'Renamed' is only supported on var and let variables. This is a {binding}")]
    UnsupportedVariable { binding: String },
}

impl ShimError {
    /// Stable machine readable identifier
    pub fn id(&self) -> &'static str {
        match self {
            ShimError::MissingNameParameter => "missing-name-parameter",
            ShimError::InvalidDeclarationType { .. } => "invalid-declaration-type",
            ShimError::MalformedSignature { .. } | ShimError::UnexpectedSignature { .. } => {
                "invalid-function-signature"
            }
            ShimError::ParameterCountMismatch { .. } => "invalid-function-parameter-count",
            ShimError::MissingExplicitType { .. } => "missing-variable-type",
            ShimError::UnsupportedAccessorForm { .. } => "unsupported-block",
            ShimError::MissingGetAccessor => "missing-get-accessor",
            ShimError::UnsupportedVariable { .. } => "unsupported-variable",
        }
    }

    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic::new(DEFAULT_DOMAIN, self)
    }
}

/// Diagnostic severity. Synthesis never produces anything below an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What the host renders for a failed expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub domain: String,
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(domain: impl Into<String>, error: &ShimError) -> Self {
        Self {
            domain: domain.into(),
            id: error.id().to_string(),
            message: error.to_string(),
            severity: Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}.{}]: {}", self.severity, self.domain, self.id, self.message)
    }
}
