pub mod ast;
pub mod builder;
pub mod diagnostic;
pub mod error;
pub mod legacy;
pub mod render;
pub mod sexp;
pub mod synth;
pub mod visibility;

// Re-export commonly used items
pub use ast::{AttributedDecl, Declaration, ShimDecl};
pub use builder::{shim_to_sexp, DeclBuilder};
pub use diagnostic::{Diagnostic, Severity, ShimError, DEFAULT_DOMAIN};
pub use error::{LexError, ParseError, Position, Result};
pub use legacy::{legacy_name, LegacyNameSpec};
pub use render::render;
pub use sexp::{print_sexp, Parser, Printer, SExp};
pub use synth::{expand, synthesize};
pub use visibility::{extract_visibility, Visibility};
