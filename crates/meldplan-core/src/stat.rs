//! Stat kinds and stat maps

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A stat category (e.g. "VIT", "CRT", "DET")
///
/// Open set keyed by name so new stats in the data files need no code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stat(pub String);

impl Stat {
    /// Create a new stat key
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the stat name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Stat {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Stat {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Stat {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Values per stat
///
/// A missing key means the stat does not apply, which is not the same as zero.
/// Uses IndexMap so iteration follows insertion order.
pub type StatMap = IndexMap<Stat, i32>;

/// Add `value` into `map[stat]`, treating a missing entry as zero
pub fn accumulate(map: &mut StatMap, stat: &Stat, value: i32) {
    *map.entry(stat.clone()).or_insert(0) += value;
}

/// Build a stat map from `(name, value)` pairs
pub fn stat_map<'a>(pairs: impl IntoIterator<Item = (&'a str, i32)>) -> StatMap {
    pairs
        .into_iter()
        .map(|(name, value)| (Stat::new(name), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let mut map = StatMap::new();
        let crt = Stat::new("CRT");
        accumulate(&mut map, &crt, 36);
        accumulate(&mut map, &crt, 36);
        assert_eq!(map.get(&crt), Some(&72));
    }

    #[test]
    fn test_stat_map_order() {
        let map = stat_map([("VIT", 10), ("CRT", 5), ("DET", 3)]);
        let keys: Vec<_> = map.keys().map(|s| s.as_str()).collect();
        assert_eq!(keys, vec!["VIT", "CRT", "DET"]);
    }

    #[test]
    fn test_stat_ron() {
        let map: StatMap = ron::from_str(r#"{ "VIT": 120, "CRT": 60 }"#).unwrap();
        assert_eq!(map.get(&Stat::new("VIT")), Some(&120));
        assert_eq!(map.get(&Stat::new("CRT")), Some(&60));
        assert_eq!(map["VIT"], 120);
    }
}
