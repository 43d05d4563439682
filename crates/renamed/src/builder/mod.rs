//! Conversion between S-expressions and declarations

pub mod decl;
pub mod helpers;
pub mod shim;

pub use decl::DeclBuilder;
pub use shim::shim_to_sexp;
