//! Command handlers — one module per subcommand.
//!
//! Each `execute` function wires concrete adapters into a core service, runs
//! the use case, and renders the result through [`crate::output::OutputManager`].

pub mod completions;
pub mod init;
pub mod lint;
