use super::Declaration;

/// Piece of a string literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringSegment {
    Text(String),
    /// `\(expr)`, kept as source text
    Interpolation(String),
}

/// Expression passed to the attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgExpr {
    StringLiteral(Vec<StringSegment>),
    /// Anything that is not a string literal, kept as source text
    Other(String),
}

impl ArgExpr {
    pub fn string(text: impl Into<String>) -> Self {
        ArgExpr::StringLiteral(vec![StringSegment::Text(text.into())])
    }
}

/// `label: expr` inside the attribute's argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroArgument {
    pub label: Option<String>,
    pub expr: ArgExpr,
}

impl MacroArgument {
    pub fn new(label: Option<String>, expr: ArgExpr) -> Self {
        Self { label, expr }
    }

    /// `from: "<text>"`, the form the attribute is normally written in
    pub fn from_name(text: impl Into<String>) -> Self {
        Self::new(Some("from".to_string()), ArgExpr::string(text))
    }
}

/// A declaration together with the arguments of the attribute attached to it
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedDecl {
    pub arguments: Vec<MacroArgument>,
    pub decl: Declaration,
}

impl AttributedDecl {
    pub fn new(arguments: Vec<MacroArgument>, decl: Declaration) -> Self {
        Self { arguments, decl }
    }

    /// Shorthand for the common `@Renamed(from: "<old>")` case
    pub fn renamed_from(old: impl Into<String>, decl: Declaration) -> Self {
        Self::new(vec![MacroArgument::from_name(old)], decl)
    }
}
