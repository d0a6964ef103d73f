//! Coercion of "one or many" option values into ordered lists.
//!
//! Option values arrive from the command line either as nothing, a single
//! string (for example a default), or a list of strings.

/// A raw option value as produced by argument parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionValues {
    /// The option was not given and has no default
    #[default]
    Absent,
    /// A single value
    One(String),
    /// An ordered list of values
    Many(Vec<String>),
}

impl From<&str> for OptionValues {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for OptionValues {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for OptionValues {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<&[&str]> for OptionValues {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: Into<OptionValues>> From<Option<T>> for OptionValues {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Turn a raw option value into an ordered list.
///
/// Absent values and a single empty string both yield an empty list. Lists
/// are returned as given.
pub fn normalize(value: impl Into<OptionValues>) -> Vec<String> {
    match value.into() {
        OptionValues::Absent => Vec::new(),
        OptionValues::One(value) if value.is_empty() => Vec::new(),
        OptionValues::One(value) => vec![value],
        OptionValues::Many(values) => values,
    }
}
