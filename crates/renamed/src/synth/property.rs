//! Computed property shims
//!
//! The shim is read-only or read-write depending on what the renamed
//! property allows. Decision order:
//!
//! | binding | accessors            | shim                  |
//! |---------|----------------------|-----------------------|
//! | `let`   | any                  | read-only             |
//! | `var`   | none (stored)        | read-write            |
//! | `var`   | naked `{ expr }`     | read-only             |
//! | `var`   | `get` + `set`        | read-write            |
//! | `var`   | `get`                | read-only             |
//! | `var`   | no `get`             | `missing-get-accessor`|
//! | `var`   | anything else        | `unsupported-block`   |

use super::annotate::deprecated;
use super::require_identifier;
use crate::ast::{
    AccessorKind, AccessorShape, Binding, Expr, Pattern, PropertyAccessors, ShimDecl, ShimKind,
    VariableDecl,
};
use crate::diagnostic::ShimError;
use crate::legacy::LegacyNameSpec;
use crate::visibility::extract_visibility;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Immutable,
    Mutable,
}

pub fn property_shim(decl: &VariableDecl, spec: &LegacyNameSpec) -> Result<ShimDecl, ShimError> {
    let (name, ty) = name_and_type(decl)?;
    let shape = select_shape(decl)?;
    trace!("property {} gets a {:?} shim", name, shape);

    let legacy = require_identifier(spec)?;
    let accessors = match shape {
        Shape::Immutable => immutable_accessors(name),
        Shape::Mutable => mutable_accessors(name),
    };

    let shim = ShimDecl::new(
        legacy,
        extract_visibility(&decl.modifiers),
        ShimKind::Property { ty: ty.to_string(), accessors },
    );
    Ok(deprecated(shim, name))
}

fn name_and_type(decl: &VariableDecl) -> Result<(&str, &str), ShimError> {
    let missing = || ShimError::MissingExplicitType { name: decl.pattern.text().to_string() };

    let Pattern::Ident(name) = &decl.pattern else {
        return Err(missing());
    };
    match decl.explicit_type.as_deref() {
        Some(ty) if is_simple_type(ty) => Ok((name.as_str(), ty)),
        _ => Err(missing()),
    }
}

/// Plain identifier type: no generics, arrays, optionals or member paths
pub fn is_simple_type(ty: &str) -> bool {
    let mut chars = ty.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

fn select_shape(decl: &VariableDecl) -> Result<Shape, ShimError> {
    match &decl.binding {
        Binding::Let => Ok(Shape::Immutable),
        Binding::Var => match &decl.accessors {
            AccessorShape::NoAccessorBlock => Ok(Shape::Mutable),
            AccessorShape::NakedGetter => Ok(Shape::Immutable),
            AccessorShape::Explicit(kinds) => explicit_shape(kinds),
            AccessorShape::Unsupported(description) => {
                Err(ShimError::UnsupportedAccessorForm { description: description.clone() })
            }
        },
        Binding::Other(keyword) => {
            Err(ShimError::UnsupportedVariable { binding: keyword.clone() })
        }
    }
}

fn explicit_shape(kinds: &[AccessorKind]) -> Result<Shape, ShimError> {
    if !kinds.contains(&AccessorKind::Get) {
        return Err(ShimError::MissingGetAccessor);
    }
    if let Some(other) =
        kinds.iter().find(|kind| !matches!(kind, AccessorKind::Get | AccessorKind::Set))
    {
        return Err(ShimError::UnsupportedAccessorForm {
            description: format!("{} accessor", other.keyword()),
        });
    }

    if kinds.contains(&AccessorKind::Set) {
        Ok(Shape::Mutable)
    } else {
        Ok(Shape::Immutable)
    }
}

fn immutable_accessors(current: &str) -> PropertyAccessors {
    PropertyAccessors::ReadOnly { getter: Expr::Ident(current.to_string()) }
}

fn mutable_accessors(current: &str) -> PropertyAccessors {
    PropertyAccessors::ReadWrite {
        getter: Expr::Ident(current.to_string()),
        target: current.to_string(),
    }
}
