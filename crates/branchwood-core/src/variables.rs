//! Accumulated story variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named integer counters accumulated through choice effects.
///
/// Any name that has never been set reads as `0`. Entries are kept sorted so
/// serialized snapshots are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, i64>);

impl Variables {
    /// Creates an empty variable map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name`, or `0` when it has never been set.
    #[must_use]
    pub fn get(&self, name: &str) -> i64 {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// Adds `delta` to `name`, treating an unset variable as `0`.
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    pub fn adjust(&mut self, name: &str, delta: i64) {
        let entry = self.0.entry(name.to_owned()).or_insert(0);
        *entry = entry.saturating_add(delta);
    }

    /// Returns `true` when no variable has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of variables that have been set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over set variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Variables {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_reads_as_zero() {
        let variables = Variables::new();

        assert_eq!(variables.get("trust"), 0);
    }

    #[test]
    fn test_adjust_accumulates_instead_of_assigning() {
        // Arrange
        let mut variables = Variables::new();

        // Act
        variables.adjust("trust", 10);
        variables.adjust("trust", 10);
        variables.adjust("security", -5);

        // Assert
        assert_eq!(variables.get("trust"), 20);
        assert_eq!(variables.get("security"), -5);
        assert_eq!(variables.len(), 2);
    }

    #[test]
    fn test_adjust_saturates_at_bounds() {
        let mut variables: Variables = [("trust", i64::MAX)].into_iter().collect();

        variables.adjust("trust", 1);

        assert_eq!(variables.get("trust"), i64::MAX);
    }

    #[test]
    fn test_iter_yields_variables_in_name_order() {
        // Arrange
        let mut variables = Variables::new();
        variables.adjust("trust", 10);
        variables.adjust("courage", 5);
        variables.adjust("security", -10);

        // Act
        let pairs: Vec<(&str, i64)> = variables.iter().collect();

        // Assert
        assert_eq!(pairs, vec![("courage", 5), ("security", -10), ("trust", 10)]);
    }

    #[test]
    fn test_serializes_as_plain_sorted_object() {
        let variables: Variables = [("trust", 10), ("security", -10)].into_iter().collect();

        let json = serde_json::to_string(&variables).unwrap();

        assert_eq!(json, r#"{"security":-10,"trust":10}"#);
    }
}
