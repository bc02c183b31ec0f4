//! Permission code set

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A deduplicated set of opaque permission codes
///
/// Codes look like `"hr:access"` or `"admin:manage"`: a namespace, a
/// colon, and a capability. The set is the authoritative input to all
/// access decisions; insertion order is irrelevant and duplicates
/// collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    codes: HashSet<String>,
}

impl PermissionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the exact code is present
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Whether any of the given codes is present
    pub fn contains_any<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().any(|c| self.contains(c.as_ref()))
    }

    /// Whether all of the given codes are present
    pub fn contains_all<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().all(|c| self.contains(c.as_ref()))
    }

    /// Whether any code lives in the given namespace
    ///
    /// `has_namespace("admin")` matches `"admin:access"`, `"admin:manage"`
    /// and so on.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        let prefix = format!("{}:", namespace);
        self.codes.iter().any(|c| c.starts_with(&prefix))
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Iterate over the codes in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(codes: Vec<String>) -> Self {
        codes.into_iter().collect()
    }
}
