//! Reporter name handling and per-reporter options.
//!
//! Users pick reporters by the names they know (`cli`, `json`, `html`).
//! Newman's HTML output comes from the `newman-reporter-htmlextra` plugin,
//! which only answers to `htmlextra`, so `html` is remapped.

use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, HashSet};

/// Reporter name users select for HTML output
pub const HTML_ALIAS: &str = "html";

/// Reporter name the HTML plugin registers with Newman
pub const HTML_REPORTER: &str = "htmlextra";

/// Title shown in the HTML report and its browser tab
pub const REPORT_TITLE: &str = "SROC Charging Module API";

/// Lowercase, deduplicate and alias a list of reporter names.
///
/// First occurrences keep their relative order. If `html` survives
/// deduplication it is renamed to `htmlextra` in place; should `htmlextra`
/// already be present the alias is dropped instead.
pub fn resolve_reporters(reporters: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(reporters.len());

    for reporter in reporters {
        let lowered = reporter.to_lowercase();
        if seen.insert(lowered.clone()) {
            resolved.push(lowered);
        }
    }

    if let Some(index) = resolved.iter().position(|r| r == HTML_ALIAS) {
        if seen.contains(HTML_REPORTER) {
            resolved.remove(index);
        } else {
            resolved[index] = HTML_REPORTER.to_string();
        }
    }

    tracing::debug!(?reporters, ?resolved, "Resolved reporters");
    resolved
}

/// Options passed to individual reporters, keyed by reporter name.
///
/// Newman ignores entries for reporters that are not selected, but the
/// htmlextra plugin fails without its section, so the default always
/// carries one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReporterOptions(BTreeMap<String, Map<String, Value>>);

impl ReporterOptions {
    /// Options with no reporter sections at all
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Set one option for a reporter, creating its section if needed
    pub fn with_option(
        mut self,
        reporter: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.0
            .entry(reporter.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Options for one reporter, if any were set
    pub fn get(&self, reporter: &str) -> Option<&Map<String, Value>> {
        self.0.get(reporter)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Map<String, Value>)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self::empty()
            .with_option(HTML_REPORTER, "browserTitle", REPORT_TITLE)
            .with_option(HTML_REPORTER, "title", REPORT_TITLE)
            .with_option(HTML_REPORTER, "skipSensitiveData", json!(true))
    }
}
