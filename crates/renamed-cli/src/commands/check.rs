//! Check command implementation

use super::load_forms;
use crate::config::Config;
use crate::errors::print_diagnostic;
use anyhow::{bail, Result};
use colored::Colorize;
use renamed::{expand, Diagnostic};
use std::path::Path;

pub fn execute(config: &Config, path: &Path) -> Result<()> {
    let decls = load_forms(path)?;
    let mut failed = 0;

    for (index, attributed) in decls.iter().enumerate() {
        let kind = attributed.decl.kind_name();
        match expand(attributed) {
            Ok(shim) => println!("  {} form #{} ({}) -> {}", "✓".green(), index, kind, shim.name),
            Err(err) => {
                failed += 1;
                print_diagnostic(index, kind, &Diagnostic::new(&config.diagnostic_domain, &err));
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} declaration(s) have errors", failed, decls.len());
    }

    println!("{}", format!("All {} declaration(s) can be expanded", decls.len()).green().bold());
    Ok(())
}
