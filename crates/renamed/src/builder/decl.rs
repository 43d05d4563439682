//! Reading attributed declarations
//!
//! ```text
//! (Renamed :from "oldFn(_:label:)"
//!          :decl (Function :name "newFn"
//!                          :modifiers (public)
//!                          :params ((Param :label "_" :name "x" :type "Int")
//!                                   (Param :label "label" :name "y" :type "String"))
//!                          :returns "Bool"))
//! ```
//!
//! As in Swift, a `Param` without `:label` uses its `:name` as the external
//! label; write `:label "_"` for an unlabeled parameter.

use super::helpers::*;
use crate::ast::*;
use crate::error::{ParseError, Result};
use crate::legacy::WILDCARD_LABEL;
use crate::sexp::{HasPosition, List, SExp};
use std::collections::HashMap;

/// Builds [`AttributedDecl`]s from S-expressions
#[derive(Debug, Default)]
pub struct DeclBuilder;

impl DeclBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build every `(Renamed ...)` form in `forms`
    pub fn build_all(&self, forms: &[SExp]) -> Result<Vec<AttributedDecl>> {
        forms.iter().map(|form| self.build_attributed(form)).collect()
    }

    pub fn build_attributed(&self, sexp: &SExp) -> Result<AttributedDecl> {
        let (list, head) = expect_node(sexp)?;
        if head.value != "Renamed" {
            return Err(ParseError::Expected {
                expected: "Renamed".to_string(),
                found: head.value.clone(),
                pos: head.pos,
            });
        }

        let kwargs = parse_kwargs(list)?;
        let arguments = match kwargs.get("from") {
            Some(from) => vec![MacroArgument::new(Some("from".to_string()), self.build_arg_expr(from)?)],
            None => Vec::new(),
        };
        let decl = self.build_decl(required(&kwargs, "decl", list)?)?;

        Ok(AttributedDecl::new(arguments, decl))
    }

    fn build_arg_expr(&self, sexp: &SExp) -> Result<ArgExpr> {
        match sexp {
            SExp::String(s) => Ok(ArgExpr::string(s.value.clone())),
            SExp::List(list) if list.head().is_some_and(|h| h.value == "Segments") => {
                let segments = list.elements[1..]
                    .iter()
                    .map(|segment| self.build_segment(segment))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ArgExpr::StringLiteral(segments))
            }
            other => Ok(ArgExpr::Other(describe(other))),
        }
    }

    fn build_segment(&self, sexp: &SExp) -> Result<StringSegment> {
        match sexp {
            SExp::String(s) => Ok(StringSegment::Text(s.value.clone())),
            SExp::List(_) => {
                let (list, head) = expect_node(sexp)?;
                if head.value != "Interpolation" {
                    return Err(ParseError::Expected {
                        expected: "Interpolation".to_string(),
                        found: head.value.clone(),
                        pos: head.pos,
                    });
                }
                let expr = list.elements.get(1).map(expect_text).transpose()?;
                Ok(StringSegment::Interpolation(expr.unwrap_or_default()))
            }
            other => Err(ParseError::Expected {
                expected: "string segment".to_string(),
                found: describe(other),
                pos: other.position(),
            }),
        }
    }

    pub fn build_decl(&self, sexp: &SExp) -> Result<Declaration> {
        let (list, head) = expect_node(sexp)?;
        let kwargs = parse_kwargs(list)?;

        match head.value.as_str() {
            "Struct" => self.build_type(TypeKind::Struct, list, &kwargs),
            "Class" => self.build_type(TypeKind::Class, list, &kwargs),
            "Enum" => self.build_type(TypeKind::Enum, list, &kwargs),
            "Typealias" => {
                let ident = expect_text(required(&kwargs, "name", list)?)?;
                let modifiers = self.build_modifiers(&kwargs)?;
                Ok(Declaration::TypeAlias(TypeAliasDecl::new(ident).with_modifiers(modifiers)))
            }
            "Variable" => self.build_variable(list, &kwargs),
            "Function" => self.build_function(list, &kwargs),
            other => Ok(Declaration::Other(other.to_lowercase())),
        }
    }

    fn build_type(
        &self,
        kind: TypeKind,
        list: &List,
        kwargs: &HashMap<String, &SExp>,
    ) -> Result<Declaration> {
        let ident = expect_text(required(kwargs, "name", list)?)?;
        let modifiers = self.build_modifiers(kwargs)?;
        Ok(Declaration::Type(TypeDecl::new(kind, ident).with_modifiers(modifiers)))
    }

    fn build_variable(&self, list: &List, kwargs: &HashMap<String, &SExp>) -> Result<Declaration> {
        let binding = match expect_text(required(kwargs, "binding", list)?)?.as_str() {
            "let" => Binding::Let,
            "var" => Binding::Var,
            other => Binding::Other(other.to_string()),
        };

        let pattern = match (optional(kwargs, "name"), optional(kwargs, "pattern")) {
            (Some(name), _) => Pattern::Ident(expect_text(name)?),
            (None, Some(pattern)) => Pattern::Other(expect_text(pattern)?),
            (None, None) => {
                return Err(ParseError::MissingField { field: "name".to_string(), pos: list.pos })
            }
        };

        let explicit_type = optional(kwargs, "type").map(expect_text).transpose()?;
        let accessors = match optional(kwargs, "accessors") {
            Some(sexp) => self.build_accessors(sexp)?,
            None => AccessorShape::NoAccessorBlock,
        };

        Ok(Declaration::Variable(VariableDecl {
            pattern,
            binding,
            explicit_type,
            accessors,
            modifiers: self.build_modifiers(kwargs)?,
        }))
    }

    /// `naked`, `(get set ...)`, or a string describing unsupported syntax
    fn build_accessors(&self, sexp: &SExp) -> Result<AccessorShape> {
        match sexp {
            SExp::Symbol(s) if s.value == "naked" => Ok(AccessorShape::NakedGetter),
            SExp::Symbol(s) if s.value == "none" => Ok(AccessorShape::NoAccessorBlock),
            SExp::String(s) => Ok(AccessorShape::Unsupported(s.value.clone())),
            SExp::List(list) => {
                let kinds = list
                    .elements
                    .iter()
                    .map(|kind| expect_text(kind).map(|k| AccessorKind::from_keyword(&k)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(AccessorShape::Explicit(kinds))
            }
            other => Err(ParseError::Expected {
                expected: "naked, none, accessor list or string".to_string(),
                found: describe(other),
                pos: other.position(),
            }),
        }
    }

    fn build_function(&self, list: &List, kwargs: &HashMap<String, &SExp>) -> Result<Declaration> {
        let ident = expect_text(required(kwargs, "name", list)?)?;

        let params = match optional(kwargs, "params") {
            Some(sexp) => expect_list(sexp)?
                .elements
                .iter()
                .map(|param| self.build_param(param))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let return_type = optional(kwargs, "returns").map(expect_text).transpose()?;

        Ok(Declaration::Function(FunctionDecl {
            ident,
            modifiers: self.build_modifiers(kwargs)?,
            params,
            return_type,
        }))
    }

    fn build_param(&self, sexp: &SExp) -> Result<Param> {
        let (list, head) = expect_node(sexp)?;
        if head.value != "Param" {
            return Err(ParseError::Expected {
                expected: "Param".to_string(),
                found: head.value.clone(),
                pos: head.pos,
            });
        }

        let kwargs = parse_kwargs(list)?;
        let name = optional(&kwargs, "name").map(expect_text).transpose()?;
        let label = match optional(&kwargs, "label") {
            Some(label) => Some(expect_text(label)?),
            None => name.clone(),
        }
        .filter(|label| label != WILDCARD_LABEL);
        let ty = expect_text(required(&kwargs, "type", list)?)?;

        Ok(Param { label, name, ty })
    }

    fn build_modifiers(&self, kwargs: &HashMap<String, &SExp>) -> Result<Vec<Modifier>> {
        match optional(kwargs, "modifiers") {
            Some(sexp) => expect_list(sexp)?
                .elements
                .iter()
                .map(|m| expect_text(m).map(Modifier::new))
                .collect(),
            None => Ok(Vec::new()),
        }
    }
}
