use std::fmt;

/// A single modifier keyword as written in source (`public`, `static`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub name: String,
}

impl Modifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Declaration the attribute is attached to
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Type(TypeDecl),
    TypeAlias(TypeAliasDecl),
    Variable(VariableDecl),
    Function(FunctionDecl),
    /// Any other declaration category (extension, protocol, init, ...)
    Other(String),
}

impl Declaration {
    /// Short category name, used in logs and diagnostics
    pub fn kind_name(&self) -> &str {
        match self {
            Declaration::Type(decl) => decl.kind.keyword(),
            Declaration::TypeAlias(_) => "typealias",
            Declaration::Variable(decl) => decl.binding.keyword(),
            Declaration::Function(_) => "func",
            Declaration::Other(kind) => kind,
        }
    }
}

/// Nominal type kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Struct,
    Class,
    Enum,
}

impl TypeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Struct => "struct",
            TypeKind::Class => "class",
            TypeKind::Enum => "enum",
        }
    }
}

/// struct, class or enum
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub ident: String,
    pub modifiers: Vec<Modifier>,
}

impl TypeDecl {
    pub fn new(kind: TypeKind, ident: impl Into<String>) -> Self {
        Self { kind, ident: ident.into(), modifiers: Vec::new() }
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    pub ident: String,
    pub modifiers: Vec<Modifier>,
}

impl TypeAliasDecl {
    pub fn new(ident: impl Into<String>) -> Self {
        Self { ident: ident.into(), modifiers: Vec::new() }
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Binding keyword of a variable declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Let,
    Var,
    Other(String),
}

impl Binding {
    pub fn keyword(&self) -> &str {
        match self {
            Binding::Let => "let",
            Binding::Var => "var",
            Binding::Other(keyword) => keyword,
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Binding pattern of a variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Ident(String),
    /// Tuple destructuring and friends, kept as source text
    Other(String),
}

impl Pattern {
    pub fn text(&self) -> &str {
        match self {
            Pattern::Ident(name) | Pattern::Other(name) => name,
        }
    }
}

/// Accessor keyword inside an explicit accessor block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
    Modify,
    WillSet,
    DidSet,
    Other(String),
}

impl AccessorKind {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "get" => AccessorKind::Get,
            "set" => AccessorKind::Set,
            "_modify" => AccessorKind::Modify,
            "willSet" => AccessorKind::WillSet,
            "didSet" => AccessorKind::DidSet,
            other => AccessorKind::Other(other.to_string()),
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Modify => "_modify",
            AccessorKind::WillSet => "willSet",
            AccessorKind::DidSet => "didSet",
            AccessorKind::Other(keyword) => keyword,
        }
    }
}

/// Read/write capability pattern of a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorShape {
    /// Plain stored property
    NoAccessorBlock,
    /// `{ expr }` without `get`/`set` keywords
    NakedGetter,
    /// `{ get { .. } set { .. } }`
    Explicit(Vec<AccessorKind>),
    /// Some accessor syntax the host could not classify
    Unsupported(String),
}

impl AccessorShape {
    pub fn explicit_get_only() -> Self {
        AccessorShape::Explicit(vec![AccessorKind::Get])
    }

    pub fn explicit_get_and_set() -> Self {
        AccessorShape::Explicit(vec![AccessorKind::Get, AccessorKind::Set])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub pattern: Pattern,
    pub binding: Binding,
    pub explicit_type: Option<String>,
    pub accessors: AccessorShape,
    pub modifiers: Vec<Modifier>,
}

impl VariableDecl {
    pub fn new(binding: Binding, ident: impl Into<String>) -> Self {
        Self {
            pattern: Pattern::Ident(ident.into()),
            binding,
            explicit_type: None,
            accessors: AccessorShape::NoAccessorBlock,
            modifiers: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.explicit_type = Some(ty.into());
        self
    }

    pub fn with_accessors(mut self, accessors: AccessorShape) -> Self {
        self.accessors = accessors;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Function parameter: `label name: Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// External label; `None` is the `_` wildcard
    pub label: Option<String>,
    /// Internal name when it differs from the label
    pub name: Option<String>,
    pub ty: String,
}

impl Param {
    pub fn labeled(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { label: Some(label.into()), name: None, ty: ty.into() }
    }

    pub fn unlabeled(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { label: None, name: Some(name.into()), ty: ty.into() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub ident: String,
    pub modifiers: Vec<Modifier>,
    pub params: Vec<Param>,
    pub return_type: Option<String>,
}

impl FunctionDecl {
    pub fn new(ident: impl Into<String>) -> Self {
        Self { ident: ident.into(), modifiers: Vec::new(), params: Vec::new(), return_type: None }
    }

    pub fn with_params(mut self, params: Vec<Param>) -> Self {
        self.params = params;
        self
    }

    pub fn with_return_type(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Build a modifier list from keywords
pub fn modifiers<I, S>(names: I) -> Vec<Modifier>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Modifier::new).collect()
}
