//! Parsing of the old name handed to the attribute
//!
//! The literal is either a bare identifier (`OldType`) or a function
//! selector (`oldFn(_:label:)`). Splitting follows the selector syntax: the
//! text is cut at the first `(`, the remainder must close with `)`, and the
//! interior is split on `:` into one label per parameter.

use crate::ast::{ArgExpr, MacroArgument, StringSegment};
use crate::diagnostic::ShimError;
use std::fmt;
use std::str::FromStr;

/// Label marking a parameter without an external name
pub const WILDCARD_LABEL: &str = "_";

/// Parsed legacy name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyNameSpec {
    Identifier(String),
    FunctionSignature { base_name: String, labels: Vec<String> },
}

impl LegacyNameSpec {
    pub fn parse(input: &str) -> Result<Self, ShimError> {
        if input.trim().is_empty() {
            return Err(ShimError::MissingNameParameter);
        }

        let Some((base_name, rest)) = input.split_once('(') else {
            if input.contains(')') {
                return Err(malformed(input, "Unexpected closing parenthesis"));
            }
            return Ok(LegacyNameSpec::Identifier(input.to_string()));
        };

        let interior = rest
            .strip_suffix(')')
            .ok_or_else(|| malformed(input, "Missing matching closing parenthesis"))?;

        if interior.contains(['(', ')']) {
            return Err(malformed(input, "Nested or unbalanced parentheses"));
        }
        if base_name.is_empty() {
            return Err(malformed(input, "Missing function name before the parameter list"));
        }

        let labels =
            interior.split(':').filter(|label| !label.is_empty()).map(str::to_string).collect();

        Ok(LegacyNameSpec::FunctionSignature { base_name: base_name.to_string(), labels })
    }

    /// Name without any parameter list
    pub fn base_name(&self) -> &str {
        match self {
            LegacyNameSpec::Identifier(name) => name,
            LegacyNameSpec::FunctionSignature { base_name, .. } => base_name,
        }
    }

    /// Parameter labels; a bare identifier has none
    pub fn labels(&self) -> &[String] {
        match self {
            LegacyNameSpec::Identifier(_) => &[],
            LegacyNameSpec::FunctionSignature { labels, .. } => labels,
        }
    }

    pub fn is_signature(&self) -> bool {
        matches!(self, LegacyNameSpec::FunctionSignature { .. })
    }
}

impl FromStr for LegacyNameSpec {
    type Err = ShimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LegacyNameSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyNameSpec::Identifier(name) => f.write_str(name),
            LegacyNameSpec::FunctionSignature { base_name, labels } => {
                write!(f, "{}(", base_name)?;
                for label in labels {
                    write!(f, "{}:", label)?;
                }
                f.write_str(")")
            }
        }
    }
}

fn malformed(signature: &str, reason: &'static str) -> ShimError {
    ShimError::MalformedSignature { signature: signature.to_string(), reason }
}

/// Extract the old name from the attribute's arguments.
///
/// The first argument must be a string literal made of exactly one plain,
/// non-blank text segment.
pub fn legacy_name(arguments: &[MacroArgument]) -> Result<&str, ShimError> {
    let first = arguments.first().ok_or(ShimError::MissingNameParameter)?;

    match &first.expr {
        ArgExpr::StringLiteral(segments) => match segments.as_slice() {
            [StringSegment::Text(text)] if !text.trim().is_empty() => Ok(text.as_str()),
            _ => Err(ShimError::MissingNameParameter),
        },
        ArgExpr::Other(_) => Err(ShimError::MissingNameParameter),
    }
}
