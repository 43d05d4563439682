//! Forwarding function shims
//!
//! The shim accepts the old labels and calls the renamed function with its
//! current labels. Both the forwarding call and the `renamed:` selector are
//! derived from [`current_labels`], so they always name the same function.

use super::annotate::deprecated;
use crate::ast::{CallArg, CallExpr, Expr, FunctionDecl, ShimDecl, ShimKind, ShimParam};
use crate::diagnostic::ShimError;
use crate::legacy::{LegacyNameSpec, WILDCARD_LABEL};
use crate::visibility::extract_visibility;
use log::debug;

pub fn function_shim(decl: &FunctionDecl, spec: &LegacyNameSpec) -> Result<ShimDecl, ShimError> {
    let legacy_labels = spec.labels();
    if legacy_labels.len() != decl.params.len() {
        return Err(ShimError::ParameterCountMismatch {
            expected: decl.params.len(),
            found: legacy_labels.len(),
        });
    }

    let current = current_labels(decl);
    let params = legacy_labels
        .iter()
        .zip(&decl.params)
        .enumerate()
        .map(|(index, (label, param))| ShimParam {
            label: label.clone(),
            name: arg_name(index),
            ty: param.ty.clone(),
        })
        .collect();

    let body = forwarding_call(&decl.ident, &current);
    let selector = selector(&decl.ident, &current);
    debug!("forwarding {} to {}", spec, selector);

    let shim = ShimDecl::new(
        spec.base_name(),
        extract_visibility(&decl.modifiers),
        ShimKind::Function { params, return_type: decl.return_type.clone(), body },
    );
    Ok(deprecated(shim, selector))
}

/// External label of each current parameter, `None` for `_`
pub fn current_labels(decl: &FunctionDecl) -> Vec<Option<&str>> {
    decl.params
        .iter()
        .map(|param| param.label.as_deref().filter(|label| *label != WILDCARD_LABEL))
        .collect()
}

/// `name(arg0, label: arg1, ...)`
pub fn forwarding_call(name: &str, labels: &[Option<&str>]) -> CallExpr {
    let args = labels
        .iter()
        .enumerate()
        .map(|(index, label)| CallArg {
            label: label.map(str::to_string),
            value: Expr::Ident(arg_name(index)),
        })
        .collect();

    CallExpr { callee: name.to_string(), args }
}

/// `name(_:label:)`, or just `name` without parameters
pub fn selector(name: &str, labels: &[Option<&str>]) -> String {
    if labels.is_empty() {
        return name.to_string();
    }

    let mut selector = format!("{}(", name);
    for label in labels {
        selector.push_str(label.unwrap_or(WILDCARD_LABEL));
        selector.push(':');
    }
    selector.push(')');
    selector
}

fn arg_name(index: usize) -> String {
    format!("arg{}", index)
}
