//! Parse-name command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use renamed::LegacyNameSpec;

pub fn execute(literal: &str) -> Result<()> {
    let spec = LegacyNameSpec::parse(literal)
        .with_context(|| format!("'{}' is not a valid legacy name", literal))?;

    match &spec {
        LegacyNameSpec::Identifier(name) => {
            println!("{} {}", "identifier:".cyan().bold(), name);
        }
        LegacyNameSpec::FunctionSignature { base_name, labels } => {
            println!("{} {}", "function:".cyan().bold(), base_name);
            println!("{} {}", "parameters:".cyan().bold(), labels.len());
            for (index, label) in labels.iter().enumerate() {
                let shown = if label == "_" { "_ (unlabeled)".dimmed().to_string() } else { label.clone() };
                println!("  {}: {}", index, shown);
            }
        }
    }

    Ok(())
}
