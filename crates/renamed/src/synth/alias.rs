use super::annotate::deprecated;
use super::require_identifier;
use crate::ast::{Modifier, ShimDecl, ShimKind, TypeAliasDecl, TypeDecl};
use crate::diagnostic::ShimError;
use crate::legacy::LegacyNameSpec;
use crate::visibility::extract_visibility;

/// struct, class or enum: `typealias Old = New`
pub fn type_shim(decl: &TypeDecl, spec: &LegacyNameSpec) -> Result<ShimDecl, ShimError> {
    alias_shim(decl.kind.keyword(), &decl.ident, &decl.modifiers, spec)
}

/// typealias: `typealias Old = New`
pub fn typealias_shim(decl: &TypeAliasDecl, spec: &LegacyNameSpec) -> Result<ShimDecl, ShimError> {
    alias_shim("typealias", &decl.ident, &decl.modifiers, spec)
}

fn alias_shim(
    kind: &str,
    current: &str,
    modifiers: &[Modifier],
    spec: &LegacyNameSpec,
) -> Result<ShimDecl, ShimError> {
    if current.is_empty() {
        return Err(ShimError::InvalidDeclarationType { kind: format!("anonymous {}", kind) });
    }
    let legacy = require_identifier(spec)?;

    let shim = ShimDecl::new(
        legacy,
        extract_visibility(modifiers),
        ShimKind::TypeAlias { target: current.to_string() },
    );
    Ok(deprecated(shim, current))
}
