use crate::ast::*;
use crate::sexp::SExp;

/// S-expression form of a synthesized declaration
pub fn shim_to_sexp(shim: &ShimDecl) -> SExp {
    let mut elements = vec![SExp::symbol("Shim"), SExp::keyword("name"), SExp::string(&shim.name)];

    elements.push(SExp::keyword("visibility"));
    elements.push(match shim.visibility {
        Some(visibility) => SExp::symbol(visibility.keyword()),
        None => SExp::nil(),
    });

    elements.push(SExp::keyword("attrs"));
    elements.push(SExp::list(shim.attrs.iter().map(attr_to_sexp).collect()));

    elements.push(SExp::keyword("kind"));
    elements.push(kind_to_sexp(&shim.kind));

    SExp::list(elements)
}

fn attr_to_sexp(attr: &Attribute) -> SExp {
    match attr {
        Attribute::Deprecated { renamed } => SExp::list(vec![
            SExp::symbol("Deprecated"),
            SExp::keyword("renamed"),
            SExp::string(renamed),
        ]),
    }
}

fn kind_to_sexp(kind: &ShimKind) -> SExp {
    match kind {
        ShimKind::TypeAlias { target } => SExp::list(vec![
            SExp::symbol("TypeAlias"),
            SExp::keyword("target"),
            SExp::string(target),
        ]),
        ShimKind::Property { ty, accessors } => {
            let accessors = match accessors {
                PropertyAccessors::ReadOnly { getter } => SExp::list(vec![
                    SExp::symbol("ReadOnly"),
                    SExp::keyword("getter"),
                    expr_to_sexp(getter),
                ]),
                PropertyAccessors::ReadWrite { getter, target } => SExp::list(vec![
                    SExp::symbol("ReadWrite"),
                    SExp::keyword("getter"),
                    expr_to_sexp(getter),
                    SExp::keyword("target"),
                    SExp::string(target),
                ]),
            };
            SExp::list(vec![
                SExp::symbol("Property"),
                SExp::keyword("type"),
                SExp::string(ty),
                SExp::keyword("accessors"),
                accessors,
            ])
        }
        ShimKind::Function { params, return_type, body } => {
            let params = params
                .iter()
                .map(|param| {
                    SExp::list(vec![
                        SExp::symbol("Param"),
                        SExp::keyword("label"),
                        SExp::string(&param.label),
                        SExp::keyword("name"),
                        SExp::string(&param.name),
                        SExp::keyword("type"),
                        SExp::string(&param.ty),
                    ])
                })
                .collect();
            SExp::list(vec![
                SExp::symbol("Function"),
                SExp::keyword("params"),
                SExp::list(params),
                SExp::keyword("returns"),
                return_type.as_ref().map_or_else(SExp::nil, SExp::string),
                SExp::keyword("body"),
                call_to_sexp(body),
            ])
        }
    }
}

fn expr_to_sexp(expr: &Expr) -> SExp {
    match expr {
        Expr::Ident(name) => SExp::list(vec![SExp::symbol("Ident"), SExp::string(name)]),
    }
}

fn call_to_sexp(call: &CallExpr) -> SExp {
    let args = call
        .args
        .iter()
        .map(|arg| {
            SExp::list(vec![
                SExp::symbol("Arg"),
                SExp::keyword("label"),
                arg.label.as_ref().map_or_else(SExp::nil, SExp::string),
                SExp::keyword("value"),
                expr_to_sexp(&arg.value),
            ])
        })
        .collect();

    SExp::list(vec![
        SExp::symbol("Call"),
        SExp::keyword("callee"),
        SExp::string(&call.callee),
        SExp::keyword("args"),
        SExp::list(args),
    ])
}
