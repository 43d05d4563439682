pub mod attr;
pub mod decl;
pub mod shim;

pub use attr::*;
pub use decl::*;
pub use shim::*;
