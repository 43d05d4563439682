//! Shim synthesis, one rule per declaration category

pub mod alias;
pub mod annotate;
pub mod function;
pub mod property;

use crate::ast::{AttributedDecl, Declaration, ShimDecl};
use crate::diagnostic::ShimError;
use crate::legacy::{legacy_name, LegacyNameSpec};
use log::debug;

/// Expand an attributed declaration into its deprecated peer
pub fn expand(input: &AttributedDecl) -> Result<ShimDecl, ShimError> {
    let literal = legacy_name(&input.arguments)?;
    let spec = LegacyNameSpec::parse(literal)?;
    debug!("expanding {} with legacy name {:?}", input.decl.kind_name(), spec);
    synthesize(&input.decl, &spec)
}

/// Build the shim for `decl` given an already parsed legacy name
pub fn synthesize(decl: &Declaration, spec: &LegacyNameSpec) -> Result<ShimDecl, ShimError> {
    match decl {
        Declaration::Type(decl) => alias::type_shim(decl, spec),
        Declaration::TypeAlias(decl) => alias::typealias_shim(decl, spec),
        Declaration::Variable(decl) => property::property_shim(decl, spec),
        Declaration::Function(decl) => function::function_shim(decl, spec),
        Declaration::Other(kind) => {
            debug!("rejecting unsupported declaration kind {}", kind);
            Err(ShimError::InvalidDeclarationType { kind: kind.clone() })
        }
    }
}

/// Old name for targets that cannot take a parameter list
fn require_identifier(spec: &LegacyNameSpec) -> Result<&str, ShimError> {
    match spec {
        LegacyNameSpec::Identifier(name) => Ok(name.as_str()),
        LegacyNameSpec::FunctionSignature { .. } => {
            Err(ShimError::UnexpectedSignature { signature: spec.to_string() })
        }
    }
}
