//! Swift source rendering of synthesized declarations

use crate::ast::{Attribute, CallExpr, Expr, PropertyAccessors, ShimDecl, ShimKind, ShimParam};
use std::fmt::{self, Display, Formatter};

const INDENT: &str = "    ";

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Deprecated { renamed } => {
                write!(f, "@available(*, deprecated, renamed: \"{}\")", renamed)
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => f.write_str(name),
        }
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match &arg.label {
                Some(label) => write!(f, "{}: {}", label, arg.value)?,
                None => write!(f, "{}", arg.value)?,
            }
        }
        f.write_str(")")
    }
}

impl Display for ShimParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.label, self.name, self.ty)
    }
}

impl Display for ShimDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for attr in &self.attrs {
            writeln!(f, "{}", attr)?;
        }
        if let Some(visibility) = self.visibility {
            write!(f, "{} ", visibility)?;
        }

        match &self.kind {
            ShimKind::TypeAlias { target } => write!(f, "typealias {} = {}", self.name, target),
            ShimKind::Property { ty, accessors } => {
                writeln!(f, "var {}: {} {{", self.name, ty)?;
                write_accessors(f, accessors)?;
                f.write_str("}")
            }
            ShimKind::Function { params, return_type, body } => {
                write!(f, "func {}(", self.name)?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                f.write_str(")")?;
                if let Some(ty) = return_type {
                    write!(f, " -> {}", ty)?;
                }
                writeln!(f, " {{")?;
                writeln!(f, "{}{}", INDENT, body)?;
                f.write_str("}")
            }
        }
    }
}

fn write_accessors(f: &mut Formatter<'_>, accessors: &PropertyAccessors) -> fmt::Result {
    match accessors {
        PropertyAccessors::ReadOnly { getter } => writeln!(f, "{}{}", INDENT, getter),
        PropertyAccessors::ReadWrite { getter, target } => {
            writeln!(f, "{}get {{", INDENT)?;
            writeln!(f, "{}{}{}", INDENT, INDENT, getter)?;
            writeln!(f, "{}}}", INDENT)?;
            writeln!(f, "{}set {{", INDENT)?;
            writeln!(f, "{}{}{} = newValue", INDENT, INDENT, target)?;
            writeln!(f, "{}}}", INDENT)
        }
    }
}

/// Render a shim as Swift source
pub fn render(shim: &ShimDecl) -> String {
    shim.to_string()
}
