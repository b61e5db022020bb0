//! # System Model
//!
//! The typed star-chart entities produced by the translator.
//!
//! All entities are built once during a single grid scan and never mutated
//! afterwards. Ownership is a simple tree: the [`StarChart`] owns every
//! [`System`], and each system exclusively owns its nested sequences.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// NESTED ENTITIES
// =============================================================================

/// One scan-able phenomenon instance inside a system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Display label: the category name, plus a Greek ordinal when more
    /// than one instance of the same (category, scan) pair exists.
    pub name: String,
    /// The signal category (one of the fixed categories in the layout).
    pub kind: String,
    /// 1-based scan-difficulty sub-column that produced this instance.
    pub scan: u8,
    /// Copied from the owning system's level at creation time.
    pub level: i32,
}

/// One mineable rock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asteroid {
    /// Single-character ore code (first character of the composite token).
    pub ore: String,
    /// Difficulty level (remaining characters of the token).
    pub level: i32,
}

impl Asteroid {
    /// Create an asteroid from an ore code and level.
    #[must_use]
    pub fn new(ore: impl Into<String>, level: i32) -> Self {
        Self {
            ore: ore.into(),
            level,
        }
    }
}

/// One gas-giant band system.
///
/// The three entries are the tier-3, tier-4, and tier-5 band compositions,
/// taken verbatim from the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jovian {
    pub bands: [String; 3],
}

/// One planetary body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Planet classification, with any trailing moon markers stripped.
    pub kind: String,
    /// Number of apostrophe moon markers in the raw cell.
    pub moons: u32,
    /// Reserved for the renderer; the translator never populates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Planet {
    /// Create a planet with no color assigned.
    #[must_use]
    pub fn new(kind: impl Into<String>, moons: u32) -> Self {
        Self {
            kind: kind.into(),
            moons,
            color: None,
        }
    }
}

// =============================================================================
// SYSTEM
// =============================================================================

/// One celestial region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    /// Unique display identifier; also the chart key.
    pub name: String,
    /// Difficulty band inherited from the nearest tier header above.
    pub tier: i32,
    /// Free-text owning faction.
    pub faction: String,
    /// Difficulty level, propagated onto every signal.
    pub level: i32,
    /// Whether the system hosts a station.
    pub station: bool,
    /// Signals in column scan order.
    pub signals: Vec<Signal>,
    /// Asteroids in column, then token order.
    pub asteroids: Vec<Asteroid>,
    /// Jovian bodies in slot order.
    pub jovians: Vec<Jovian>,
    /// Planets in column order.
    pub planets: Vec<Planet>,
}

// =============================================================================
// STAR CHART
// =============================================================================

/// The name-keyed collection of systems produced by one translation pass.
///
/// Uses `BTreeMap` for deterministic iteration order. Insertion is
/// last-writer-wins by name: a later row with a duplicate system name
/// replaces the earlier entry (see [`StarChart::upsert`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarChart {
    systems: BTreeMap<String, System>,
}

impl StarChart {
    /// Create an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a system under its name, replacing any earlier entry.
    ///
    /// Silent replacement is the documented contract for duplicate names
    /// in the source sheet, not an accident: the lowest row wins.
    pub fn upsert(&mut self, system: System) -> Option<System> {
        self.systems.insert(system.name.clone(), system)
    }

    /// Look up a system by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&System> {
        self.systems.get(name)
    }

    /// Check whether a system name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.systems.contains_key(name)
    }

    /// Number of systems in the chart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether the chart holds no systems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Iterate systems in name order.
    pub fn iter(&self) -> impl Iterator<Item = &System> {
        self.systems.values()
    }

    /// Iterate (name, system) pairs in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &System)> {
        self.systems.iter()
    }
}

impl<'a> IntoIterator for &'a StarChart {
    type Item = &'a System;
    type IntoIter = std::collections::btree_map::Values<'a, String, System>;

    fn into_iter(self) -> Self::IntoIter {
        self.systems.values()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn bare_system(name: &str, level: i32) -> System {
        System {
            name: name.to_string(),
            tier: 1,
            faction: String::from("Tanoch"),
            level,
            station: false,
            signals: Vec::new(),
            asteroids: Vec::new(),
            jovians: Vec::new(),
            planets: Vec::new(),
        }
    }

    #[test]
    fn upsert_inserts_new_system() {
        let mut chart = StarChart::new();
        assert!(chart.is_empty());

        let prior = chart.upsert(bare_system("Teyahu", 20));
        assert!(prior.is_none());
        assert_eq!(chart.len(), 1);
        assert!(chart.contains("Teyahu"));
    }

    #[test]
    fn upsert_duplicate_name_replaces_earlier_entry() {
        let mut chart = StarChart::new();
        chart.upsert(bare_system("Teyahu", 20));

        let prior = chart.upsert(bare_system("Teyahu", 35));
        assert_eq!(prior.map(|s| s.level), Some(20));
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.get("Teyahu").map(|s| s.level), Some(35));
    }

    #[test]
    fn iteration_is_name_ordered() {
        let mut chart = StarChart::new();
        chart.upsert(bare_system("Zeyra", 1));
        chart.upsert(bare_system("Araxes", 1));
        chart.upsert(bare_system("Meskal", 1));

        let names: Vec<_> = chart.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Araxes", "Meskal", "Zeyra"]);
    }

    #[test]
    fn planet_color_absent_from_json_until_set() {
        let planet = Planet::new("Terran", 2);
        let json = serde_json::to_string(&planet).unwrap();
        assert!(!json.contains("color"));
    }
}
