//! Shared test utilities for the cma-tests workspace.
//!
//! This crate provides a [`TestProject`] builder for laying out test
//! projects (bundled collections plus an `environments/` directory) in a
//! temporary directory. It is a dev-dependency only — never published.

pub mod project;

pub use project::TestProject;
