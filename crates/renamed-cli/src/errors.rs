//! Error and diagnostic printing

use colored::*;
use renamed::Diagnostic;

/// Print a formatted error message
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    // Show chain of causes
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
    }
}

/// Print a synthesis diagnostic for the form at `index`
pub fn print_diagnostic(index: usize, kind: &str, diagnostic: &Diagnostic) {
    eprintln!(
        "{} form #{} ({}): {}",
        format!("{}[{}]", diagnostic.severity, diagnostic.id).red().bold(),
        index,
        kind,
        diagnostic.message
    );
    eprintln!("  {} {}", "domain:".dimmed(), diagnostic.domain.dimmed());
}
