//! Newman hand-off for the Charging Module API test runner
//!
//! This crate takes a resolved [`cma_core::RunConfiguration`] and runs it
//! with the Newman collection runner. It handles:
//!
//! - Discovery of the `newman` executable
//! - Writing the resolved collection and environment to a scratch directory
//! - Translating reporters, folders and reporter options into Newman flags
//!
//! Request execution, assertions and reports all happen inside Newman.

pub mod discovery;
pub mod error;
pub mod runner;
pub mod subprocess;

pub use discovery::find_newman;
pub use error::{Result, RunnerError};
pub use runner::{CollectionRunner, NewmanRunner};
pub use subprocess::newman_args;
