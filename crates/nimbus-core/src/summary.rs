//! # Derived Views
//!
//! Pure, stateless summaries of a system's nested collections, in
//! display-ready form. Nothing here mutates the model; the viewers call
//! these after translation.

use crate::system::{Asteroid, Jovian};
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Number of band tier positions carried by every Jovian body.
pub const JOVIAN_TIERS: usize = 3;

// =============================================================================
// ORE INVENTORY
// =============================================================================

/// Distinct ore symbols across a system's asteroids.
///
/// Alphabetically sorted, except that `M` is always moved to the front
/// when present: the baseline ore is listed first by convention.
#[must_use]
pub fn ore_inventory(asteroids: &[Asteroid]) -> Vec<String> {
    let mut ores: Vec<String> = Vec::new();
    for asteroid in asteroids {
        if !ores.contains(&asteroid.ore) {
            ores.push(asteroid.ore.clone());
        }
    }
    ores.sort();
    if let Some(position) = ores.iter().position(|ore| ore == "M") {
        let baseline = ores.remove(position);
        ores.insert(0, baseline);
    }
    ores
}

/// The inventory as one compact string, e.g. `"MAK"`.
#[must_use]
pub fn ore_inventory_string(asteroids: &[Asteroid]) -> String {
    ore_inventory(asteroids).concat()
}

// =============================================================================
// ORE LEVEL RANGES
// =============================================================================

/// Inclusive min/max asteroid level observed for one ore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OreRange {
    pub min: i32,
    pub max: i32,
}

impl OreRange {
    fn observe(&mut self, level: i32) {
        self.min = self.min.min(level);
        self.max = self.max.max(level);
    }

    /// Compact label: a single value when min equals max, else `min-max`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.min == self.max {
            self.min.to_string()
        } else {
            format!("{}-{}", self.min, self.max)
        }
    }
}

/// Per-ore level ranges, in [`ore_inventory`] order.
#[must_use]
pub fn ore_level_ranges(asteroids: &[Asteroid]) -> Vec<(String, OreRange)> {
    let mut ranges: BTreeMap<&str, OreRange> = BTreeMap::new();
    for asteroid in asteroids {
        ranges
            .entry(asteroid.ore.as_str())
            .and_modify(|range| range.observe(asteroid.level))
            .or_insert(OreRange {
                min: asteroid.level,
                max: asteroid.level,
            });
    }

    ore_inventory(asteroids)
        .into_iter()
        .filter_map(|ore| {
            let range = ranges.get(ore.as_str()).copied()?;
            Some((ore, range))
        })
        .collect()
}

// =============================================================================
// JOVIAN BANDS
// =============================================================================

/// Distinct band values at each tier position, each set independently
/// sorted.
///
/// `max_tier` requests a prefix of the three positions for compact
/// display; anything above [`JOVIAN_TIERS`] is clamped.
#[must_use]
pub fn jovian_band_tiers(jovians: &[Jovian], max_tier: usize) -> Vec<Vec<String>> {
    (0..max_tier.min(JOVIAN_TIERS))
        .map(|tier| {
            let bands: BTreeSet<&str> = jovians.iter().map(|j| j.bands[tier].as_str()).collect();
            bands.into_iter().map(String::from).collect()
        })
        .collect()
}

/// The band tiers as one compact string, tiers separated by ` / `.
#[must_use]
pub fn jovian_band_string(jovians: &[Jovian], max_tier: usize) -> String {
    jovian_band_tiers(jovians, max_tier)
        .iter()
        .map(|bands| bands.concat())
        .collect::<Vec<_>>()
        .join(" / ")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn asteroid(ore: &str, level: i32) -> Asteroid {
        Asteroid::new(ore, level)
    }

    fn jovian(bands: [&str; 3]) -> Jovian {
        Jovian {
            bands: bands.map(String::from),
        }
    }

    #[test]
    fn inventory_sorts_alphabetically_with_m_first() {
        let asteroids = vec![asteroid("K", 1), asteroid("M", 2), asteroid("A", 5)];
        assert_eq!(ore_inventory(&asteroids), vec!["M", "A", "K"]);
        assert_eq!(ore_inventory_string(&asteroids), "MAK");
    }

    #[test]
    fn inventory_without_baseline_is_plain_alphabetical() {
        let asteroids = vec![asteroid("K", 1), asteroid("A", 5)];
        assert_eq!(ore_inventory(&asteroids), vec!["A", "K"]);
    }

    #[test]
    fn inventory_deduplicates() {
        let asteroids = vec![asteroid("K", 1), asteroid("K", 9), asteroid("K", 4)];
        assert_eq!(ore_inventory(&asteroids), vec!["K"]);
    }

    #[test]
    fn inventory_of_no_asteroids_is_empty() {
        assert!(ore_inventory(&[]).is_empty());
        assert_eq!(ore_inventory_string(&[]), "");
    }

    #[test]
    fn level_range_spans_min_to_max() {
        let asteroids = vec![asteroid("K", 3), asteroid("K", 7)];
        let ranges = ore_level_ranges(&asteroids);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].0, "K");
        assert_eq!(ranges[0].1.label(), "3-7");
    }

    #[test]
    fn single_observation_labels_as_one_value() {
        let asteroids = vec![asteroid("M", 4)];
        let ranges = ore_level_ranges(&asteroids);
        assert_eq!(ranges[0].1.label(), "4");
    }

    #[test]
    fn ranges_follow_inventory_order() {
        let asteroids = vec![
            asteroid("K", 3),
            asteroid("M", 2),
            asteroid("A", 5),
            asteroid("K", 7),
        ];
        let ores: Vec<_> = ore_level_ranges(&asteroids)
            .into_iter()
            .map(|(ore, _)| ore)
            .collect();
        assert_eq!(ores, vec!["M", "A", "K"]);
    }

    #[test]
    fn band_tiers_are_distinct_and_sorted_per_position() {
        let jovians = vec![
            jovian(["III", "IV", "V"]),
            jovian(["II", "IV", "VI"]),
            jovian(["III", "IV", "V"]),
        ];
        let tiers = jovian_band_tiers(&jovians, 3);
        assert_eq!(tiers[0], vec!["II", "III"]);
        assert_eq!(tiers[1], vec!["IV"]);
        assert_eq!(tiers[2], vec!["V", "VI"]);
    }

    #[test]
    fn band_tier_prefix_can_be_requested() {
        let jovians = vec![jovian(["III", "IV", "V"])];
        let tiers = jovian_band_tiers(&jovians, 2);
        assert_eq!(tiers.len(), 2);
        // Values above the three positions clamp
        assert_eq!(jovian_band_tiers(&jovians, 9).len(), JOVIAN_TIERS);
    }

    #[test]
    fn band_string_joins_tiers() {
        let jovians = vec![jovian(["III", "IV", "V"]), jovian(["II", "IV", "V"])];
        assert_eq!(jovian_band_string(&jovians, 2), "IIIII / IV");
    }

    #[test]
    fn band_summaries_of_no_jovians_are_empty_sets() {
        let tiers = jovian_band_tiers(&[], 3);
        assert_eq!(tiers, vec![Vec::<String>::new(); 3]);
    }
}
