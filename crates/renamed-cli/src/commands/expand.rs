//! Expand command implementation

use super::load_forms;
use crate::config::{Config, OutputFormat};
use crate::errors::print_diagnostic;
use anyhow::{bail, Result};
use renamed::{expand, shim_to_sexp, Diagnostic, Printer};
use serde_json::json;
use std::path::Path;

pub fn execute(config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    let decls = load_forms(path)?;
    let printer = Printer::with_indent(config.indent);

    let mut failed = 0;
    let mut records = Vec::new();

    for (index, attributed) in decls.iter().enumerate() {
        let kind = attributed.decl.kind_name();

        match expand(attributed) {
            Ok(shim) => match format {
                OutputFormat::Swift => println!("{}\n", shim),
                OutputFormat::Sexp => println!("{}\n", printer.print(&shim_to_sexp(&shim))),
                OutputFormat::Json => records.push(json!({
                    "index": index,
                    "kind": kind,
                    "name": shim.name,
                    "renamed": shim.renamed_to(),
                    "source": shim.to_string(),
                })),
            },
            Err(err) => {
                failed += 1;
                let diagnostic = Diagnostic::new(&config.diagnostic_domain, &err);
                match format {
                    OutputFormat::Json => records.push(json!({
                        "index": index,
                        "kind": kind,
                        "diagnostic": diagnostic,
                    })),
                    _ => print_diagnostic(index, kind, &diagnostic),
                }
            }
        }
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    if failed > 0 {
        bail!("{} of {} declaration(s) could not be expanded", failed, decls.len());
    }

    Ok(())
}
