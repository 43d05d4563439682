use crate::ast::{Attribute, ShimDecl};

/// Mark `shim` as deprecated in favour of `renamed`
pub fn deprecated(mut shim: ShimDecl, renamed: impl Into<String>) -> ShimDecl {
    shim.attrs.push(Attribute::Deprecated { renamed: renamed.into() });
    shim
}
