//! Stack VM CLI Library
//!
//! Provides the Driver struct and supporting modules for the `stack-vm`
//! binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod driver;
pub mod error;
pub mod logging;
pub mod program;

pub use cli::Cli;
pub use driver::{Driver, HaltPolicy};
pub use error::{CliError, CliResult};
pub use program::sample_program;
