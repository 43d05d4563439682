use crate::error::Position;

/// One node of a declaration form
#[derive(Debug, Clone, PartialEq)]
pub enum SExp {
    Symbol(Symbol),
    Keyword(Keyword),
    String(StringLit),
    Number(Number),
    Nil(Nil),
    List(List),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub value: String,
    pub pos: Position,
}

/// `:name` key of a keyword argument; `name` excludes the colon
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub name: String,
    pub pos: Position,
}

/// String literal with escapes already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct StringLit {
    pub value: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Nil {
    pub pos: Position,
}

/// Parenthesized form, positioned at its `(`
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub elements: Vec<SExp>,
    pub pos: Position,
}

impl Symbol {
    pub fn new(value: impl Into<String>, pos: Position) -> Self {
        Self { value: value.into(), pos }
    }
}

impl Keyword {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self { name: name.into(), pos }
    }
}

impl StringLit {
    pub fn new(value: impl Into<String>, pos: Position) -> Self {
        Self { value: value.into(), pos }
    }
}

impl Number {
    pub fn new(value: impl Into<String>, pos: Position) -> Self {
        Self { value: value.into(), pos }
    }
}

impl Nil {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

impl List {
    pub fn new(elements: Vec<SExp>, pos: Position) -> Self {
        Self { elements, pos }
    }

    /// Head symbol naming the node, e.g. `Struct` in `(Struct :name "A")`
    pub fn head(&self) -> Option<&Symbol> {
        match self.elements.first() {
            Some(SExp::Symbol(s)) => Some(s),
            _ => None,
        }
    }
}

// Shorthands for nodes built in code rather than read from text
impl SExp {
    pub fn symbol(value: impl Into<String>) -> Self {
        SExp::Symbol(Symbol::new(value, Position::synthetic()))
    }

    pub fn keyword(name: impl Into<String>) -> Self {
        SExp::Keyword(Keyword::new(name, Position::synthetic()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        SExp::String(StringLit::new(value, Position::synthetic()))
    }

    pub fn nil() -> Self {
        SExp::Nil(Nil::new(Position::synthetic()))
    }

    pub fn list(elements: Vec<SExp>) -> Self {
        SExp::List(List::new(elements, Position::synthetic()))
    }
}

/// Where a node started in the input, for error messages
pub trait HasPosition {
    fn position(&self) -> Position;
}

impl HasPosition for SExp {
    fn position(&self) -> Position {
        match self {
            SExp::Symbol(s) => s.pos,
            SExp::Keyword(k) => k.pos,
            SExp::String(s) => s.pos,
            SExp::Number(n) => n.pos,
            SExp::Nil(n) => n.pos,
            SExp::List(l) => l.pos,
        }
    }
}
