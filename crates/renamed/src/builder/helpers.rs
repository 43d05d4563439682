use crate::error::{ParseError, Result};
use crate::sexp::{HasPosition, Keyword, List, SExp, Symbol};
use std::collections::HashMap;

fn expected(what: &str, sexp: &SExp) -> ParseError {
    ParseError::Expected {
        expected: what.to_string(),
        found: describe(sexp),
        pos: sexp.position(),
    }
}

/// Short description of a value for error messages
pub fn describe(sexp: &SExp) -> String {
    match sexp {
        SExp::Symbol(s) => format!("symbol {}", s.value),
        SExp::Keyword(k) => format!("keyword :{}", k.name),
        SExp::String(s) => format!("string {:?}", s.value),
        SExp::Number(n) => format!("number {}", n.value),
        SExp::Nil(_) => "nil".to_string(),
        SExp::List(l) => match l.head() {
            Some(head) => format!("({} ...)", head.value),
            None => "list".to_string(),
        },
    }
}

/// Extract a keyword from an S-expression
pub fn expect_keyword(sexp: &SExp) -> Result<&Keyword> {
    match sexp {
        SExp::Keyword(k) => Ok(k),
        _ => Err(expected("keyword", sexp)),
    }
}

/// A string or a bare symbol, for names written either way
pub fn expect_text(sexp: &SExp) -> Result<String> {
    match sexp {
        SExp::String(s) => Ok(s.value.clone()),
        SExp::Symbol(s) => Ok(s.value.clone()),
        _ => Err(expected("string or symbol", sexp)),
    }
}

/// Extract a list from an S-expression
pub fn expect_list(sexp: &SExp) -> Result<&List> {
    match sexp {
        SExp::List(l) => Ok(l),
        _ => Err(expected("list", sexp)),
    }
}

/// Extract a list whose first element is a symbol, returning both
pub fn expect_node(sexp: &SExp) -> Result<(&List, &Symbol)> {
    let list = expect_list(sexp)?;
    let head = list.head().ok_or_else(|| expected("node with a head symbol", sexp))?;
    Ok((list, head))
}

/// Check if an S-expression is nil
pub fn is_nil(sexp: &SExp) -> bool {
    matches!(sexp, SExp::Nil(_))
}

/// Parse keyword-value pairs from a list
/// Returns a map of keyword name -> value
pub fn parse_kwargs(list: &List) -> Result<HashMap<String, &SExp>> {
    let mut map = HashMap::new();
    let mut pairs = list.elements.iter().skip(1); // Skip node type

    while let Some(key) = pairs.next() {
        let key = expect_keyword(key)?;
        let value = pairs.next().ok_or_else(|| ParseError::Expected {
            expected: format!("value after :{}", key.name),
            found: "end of list".to_string(),
            pos: list.pos,
        })?;
        map.insert(key.name.clone(), value);
    }

    Ok(map)
}

/// Look up a mandatory keyword argument
pub fn required<'a>(kwargs: &HashMap<String, &'a SExp>, field: &str, list: &List) -> Result<&'a SExp> {
    kwargs
        .get(field)
        .copied()
        .ok_or_else(|| ParseError::MissingField { field: field.to_string(), pos: list.pos })
}

/// Optional keyword argument, treating `nil` as absent
pub fn optional<'a>(kwargs: &HashMap<String, &'a SExp>, field: &str) -> Option<&'a SExp> {
    kwargs.get(field).copied().filter(|value| !is_nil(value))
}
