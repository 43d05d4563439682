use crate::sexp::types::*;

pub struct Printer {
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    pub fn print(&self, sexp: &SExp) -> String {
        self.print_sexp(sexp, 0)
    }

    fn print_sexp(&self, sexp: &SExp, depth: usize) -> String {
        match sexp {
            SExp::Symbol(s) => s.value.clone(),
            SExp::Keyword(k) => format!(":{}", k.name),
            SExp::String(s) => format!("\"{}\"", escape_string(&s.value)),
            SExp::Number(n) => n.value.clone(),
            SExp::Nil(_) => "nil".to_string(),
            SExp::List(l) => self.print_list(l, depth),
        }
    }

    fn print_list(&self, list: &List, depth: usize) -> String {
        if list.elements.is_empty() {
            return "()".to_string();
        }

        if is_flat(list) {
            let elements: Vec<String> =
                list.elements.iter().map(|e| self.print_sexp(e, depth + 1)).collect();
            return format!("({})", elements.join(" "));
        }

        // One line per element; a keyword shares its line with its value
        let mut result = String::from("(");
        result.push_str(&self.print_sexp(&list.elements[0], depth + 1));

        let mut rest = list.elements[1..].iter().peekable();
        while let Some(element) = rest.next() {
            result.push('\n');
            result.push_str(&" ".repeat((depth + 1) * self.indent));
            result.push_str(&self.print_sexp(element, depth + 1));

            if matches!(element, SExp::Keyword(_)) {
                if let Some(value) = rest.next() {
                    result.push(' ');
                    result.push_str(&self.print_sexp(value, depth + 1));
                }
            }
        }

        result.push(')');
        result
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Short lists without nested lists stay on one line
fn is_flat(list: &List) -> bool {
    list.elements.len() <= 9 && !list.elements.iter().any(|e| matches!(e, SExp::List(_)))
}

/// Escape special characters in a string
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}

/// Convenience function for printing S-expressions
pub fn print_sexp(sexp: &SExp) -> String {
    Printer::new().print(sexp)
}
