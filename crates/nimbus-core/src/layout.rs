//! # Sheet Layout
//!
//! The fixed column layout of the community systems sheet.
//!
//! The sheet is hand-maintained and its column positions are stable across
//! revisions, so the layout is a compile-time table rather than runtime
//! configuration. Everything the translator reads is indexed from here;
//! nothing else in the crate hard-codes a column number.

/// Column holding the "Tier N" header text on tier-header rows.
pub const COL_TIER_HEADER: usize = 1;

/// Column holding the owning faction on data rows (shares the index with
/// the tier header; row classification disambiguates).
pub const COL_FACTION: usize = 1;

/// Column holding the system name, possibly with a bracketed suffix.
pub const COL_SYSTEM: usize = 2;

/// Column holding the system difficulty level.
pub const COL_LEVEL: usize = 3;

/// Column holding the station indicator (any cell containing "y" or "Y").
pub const COL_STATION: usize = 4;

/// Aggregate signal-count column maintained by the sheet. Kept for layout
/// documentation; the translator derives its own counts per category.
pub const COL_SIGNAL_TOTAL: usize = 5;

/// Number of leading header rows skipped before classification begins.
pub const ROW_START: usize = 4;

// =============================================================================
// SIGNAL CATEGORIES
// =============================================================================

/// One signal category and its three scan-tier count columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalCategory {
    /// Base display name of the category.
    pub name: &'static str,
    /// Count columns for scan tiers 1, 2, and 3, in that order.
    pub scans: [usize; 3],
}

/// The eleven signal categories in declaration order.
///
/// This is an ordered slice, not a keyed map: category iteration order
/// determines signal insertion order in the assembled system, which the
/// display layer relies on.
pub const SIGNAL_CATEGORIES: &[SignalCategory] = &[
    SignalCategory {
        name: "Cangacian Signal",
        scans: [6, 7, 8],
    },
    SignalCategory {
        name: "Tanoch Signal",
        scans: [9, 10, 11],
    },
    SignalCategory {
        name: "Yaot Signal",
        scans: [12, 13, 14],
    },
    SignalCategory {
        name: "Amassari Signal",
        scans: [15, 16, 17],
    },
    SignalCategory {
        name: "Kiithless Signal",
        scans: [18, 19, 20],
    },
    SignalCategory {
        name: "Relic Recovery",
        scans: [21, 22, 23],
    },
    SignalCategory {
        name: "Progenitor Signal",
        scans: [24, 25, 26],
    },
    SignalCategory {
        name: "Progenitor Activities",
        scans: [27, 28, 29],
    },
    SignalCategory {
        name: "Distress Call",
        scans: [30, 31, 32],
    },
    SignalCategory {
        name: "Traveling Trader",
        scans: [33, 34, 35],
    },
    SignalCategory {
        name: "Other",
        scans: [36, 37, 38],
    },
];

// =============================================================================
// BODY COLUMNS
// =============================================================================

/// The thirteen asteroid columns (comma-separated ore+level tokens).
pub const COL_ASTEROIDS: std::ops::RangeInclusive<usize> = 40..=52;

/// The four Jovian column triples (verbatim band strings per tier).
/// A triple contributes a body only when its first column is non-empty.
pub const COL_JOVIANS: &[[usize; 3]] = &[[57, 58, 59], [60, 61, 62], [63, 64, 65], [66, 67, 68]];

/// The fourteen planet columns (type plus apostrophe moon markers).
pub const COL_PLANETS: std::ops::RangeInclusive<usize> = 71..=84;

// =============================================================================
// ORDINALS
// =============================================================================

/// Greek-letter ordinal designators for same-category signal instances.
pub const GREEK_LETTERS: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];

/// The 0-based ordinal designator, falling back to the 1-based numeral
/// once the Greek alphabet is exhausted.
#[must_use]
pub fn ordinal(index: usize) -> String {
    GREEK_LETTERS
        .get(index)
        .map_or_else(|| (index + 1).to_string(), |letter| (*letter).to_string())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_categories_in_declared_order() {
        assert_eq!(SIGNAL_CATEGORIES.len(), 11);
        assert_eq!(SIGNAL_CATEGORIES[0].name, "Cangacian Signal");
        assert_eq!(SIGNAL_CATEGORIES[10].name, "Other");
    }

    #[test]
    fn category_columns_are_adjacent_and_contiguous() {
        let mut expected = 6;
        for category in SIGNAL_CATEGORIES {
            assert_eq!(category.scans, [expected, expected + 1, expected + 2]);
            expected += 3;
        }
        assert_eq!(expected, 39);
    }

    #[test]
    fn body_column_counts() {
        assert_eq!(COL_ASTEROIDS.count(), 13);
        assert_eq!(COL_JOVIANS.len(), 4);
        assert_eq!(COL_PLANETS.count(), 14);
    }

    #[test]
    fn ordinal_within_alphabet() {
        assert_eq!(ordinal(0), "Alpha");
        assert_eq!(ordinal(1), "Beta");
        assert_eq!(ordinal(23), "Omega");
    }

    #[test]
    fn ordinal_past_omega_falls_back_to_numeral() {
        assert_eq!(ordinal(24), "25");
        assert_eq!(ordinal(99), "100");
    }
}
