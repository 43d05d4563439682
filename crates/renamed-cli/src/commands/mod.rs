pub mod check;
pub mod expand;
pub mod parse_name;

use anyhow::{Context, Result};
use renamed::{AttributedDecl, DeclBuilder, Parser};
use std::path::Path;

/// Read every `(Renamed ...)` form from `path`
pub fn load_forms(path: &Path) -> Result<Vec<AttributedDecl>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let forms = Parser::parse_all_str(&source)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    log::debug!("read {} form(s) from {}", forms.len(), path.display());

    DeclBuilder::new()
        .build_all(&forms)
        .with_context(|| format!("Invalid declaration in {}", path.display()))
}
