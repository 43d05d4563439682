use crate::visibility::Visibility;

/// Attribute placed on a synthesized declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `@available(*, deprecated, renamed: "<renamed>")`
    Deprecated { renamed: String },
}

/// Expression inside a shim body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<CallArg>,
}

/// `label: value`, or just `value` when unlabeled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArg {
    pub label: Option<String>,
    pub value: Expr,
}

/// Accessors of a synthesized property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyAccessors {
    /// Getter body only
    ReadOnly { getter: Expr },
    /// `get { getter }` / `set { target = newValue }`
    ReadWrite { getter: Expr, target: String },
}

impl PropertyAccessors {
    pub fn is_mutable(&self) -> bool {
        matches!(self, PropertyAccessors::ReadWrite { .. })
    }
}

/// Parameter of a synthesized function: `label name: Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimParam {
    /// Legacy label as written, `_` included
    pub label: String,
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShimKind {
    TypeAlias { target: String },
    Property { ty: String, accessors: PropertyAccessors },
    Function { params: Vec<ShimParam>, return_type: Option<String>, body: CallExpr },
}

/// Deprecated peer declaration produced for a renamed symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimDecl {
    pub attrs: Vec<Attribute>,
    pub visibility: Option<Visibility>,
    pub name: String,
    pub kind: ShimKind,
}

impl ShimDecl {
    pub fn new(name: impl Into<String>, visibility: Option<Visibility>, kind: ShimKind) -> Self {
        Self { attrs: Vec::new(), visibility, name: name.into(), kind }
    }

    /// Target named by the deprecation attribute, if any
    pub fn renamed_to(&self) -> Option<&str> {
        self.attrs.iter().find_map(|attr| match attr {
            Attribute::Deprecated { renamed } => Some(renamed.as_str()),
        })
    }
}
