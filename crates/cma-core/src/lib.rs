//! Run configuration resolution for the Charging Module API test runner
//!
//! This crate turns the values parsed from the command line into a
//! [`RunConfiguration`] ready to be handed to Newman. It handles:
//!
//! - Normalizing "one or many" option values into ordered lists
//! - Lowercasing, deduplicating and aliasing reporter names
//! - Locating the environment file for a named environment
//! - Choosing between the primary and CI smoke-test collections
//!
//! Nothing here executes requests; that is the runner's job.

pub mod collection;
pub mod environment;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod reporters;
pub mod resolver;

pub use collection::{CollectionKind, select_collection};
pub use environment::{EnvironmentIndex, locate};
pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use normalize::{OptionValues, normalize};
pub use reporters::{ReporterOptions, resolve_reporters};
pub use resolver::{RunConfigResolver, RunConfiguration};
