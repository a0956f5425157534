//! Path guarding
//!
//! Resolves the config root and validates caller-supplied paths against it.

pub mod resolver;
pub mod validation;

pub use resolver::ConfigRootResolver;
pub use validation::resolve_admin_file;
