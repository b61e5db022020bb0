//! # Grid Translator
//!
//! The single-pass translator from the raw 2-D string grid to the typed
//! [`StarChart`].
//!
//! The pass is synchronous and deterministic: one linear scan, one
//! explicit running-tier accumulator threaded through the row loop, and
//! the chart being built. It never fails; lenient numeric decoding (see
//! [`crate::cells`]) means a garbled cell marks a field, not the load.

use crate::cells::{cell, decode_asteroid_cell, decode_jovian_triple, decode_planet_cell};
use crate::cells::{lenient_number, signal_count, BAD_NUMBER};
use crate::layout::{
    ordinal, COL_ASTEROIDS, COL_FACTION, COL_JOVIANS, COL_LEVEL, COL_PLANETS, COL_STATION,
    COL_SYSTEM, COL_TIER_HEADER, ROW_START, SIGNAL_CATEGORIES,
};
use crate::system::{Signal, StarChart, System};

// =============================================================================
// ROW CLASSIFICATION
// =============================================================================

/// What one grid row means to the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A "Tier N" separator; the carried value becomes the running tier.
    TierHeader(i32),
    /// A fully blank separator; ignored, tier unchanged.
    Separator,
    /// A system data row, assembled under the current running tier.
    Data,
}

/// Classify one row.
///
/// A row with a system name is always data. Without one, a non-empty
/// tier-header cell makes it a tier header, otherwise it is a separator.
#[must_use]
pub fn classify_row(row: &[String]) -> RowKind {
    if !cell(row, COL_SYSTEM).is_empty() {
        return RowKind::Data;
    }
    let header = cell(row, COL_TIER_HEADER);
    if header.is_empty() {
        RowKind::Separator
    } else {
        RowKind::TierHeader(tier_from_header(header))
    }
}

/// Parse the tier number out of a "Tier N" header cell.
///
/// A header with no second token, or a non-numeric one, carries the
/// [`BAD_NUMBER`] sentinel forward rather than aborting the pass.
fn tier_from_header(header: &str) -> i32 {
    header
        .split_whitespace()
        .nth(1)
        .map_or(BAD_NUMBER, lenient_number)
}

// =============================================================================
// ENTITY ASSEMBLY
// =============================================================================

/// Assemble one [`System`] from a data row under the given tier.
///
/// Returns `None` when the name cell trims to nothing after stripping its
/// bracketed suffix; the chart key must be non-empty.
#[must_use]
pub fn assemble_system(row: &[String], tier: i32) -> Option<System> {
    let name = cell(row, COL_SYSTEM)
        .split('[')
        .next()
        .unwrap_or("")
        .trim();
    if name.is_empty() {
        return None;
    }

    let level = lenient_number(cell(row, COL_LEVEL));
    let mut system = System {
        name: name.to_string(),
        tier,
        faction: cell(row, COL_FACTION).to_string(),
        level,
        station: cell(row, COL_STATION).to_lowercase().contains('y'),
        signals: Vec::new(),
        asteroids: Vec::new(),
        jovians: Vec::new(),
        planets: Vec::new(),
    };

    // Signals: category declaration order, then scan tier, then ordinal.
    // This ordering is a contract with the display layer.
    for category in SIGNAL_CATEGORIES {
        for (scan_index, &column) in category.scans.iter().enumerate() {
            let count = signal_count(cell(row, column));
            for instance in 0..count {
                let name = if count > 1 {
                    format!("{} {}", category.name, ordinal(instance as usize))
                } else {
                    category.name.to_string()
                };
                system.signals.push(Signal {
                    name,
                    kind: category.name.to_string(),
                    scan: scan_index as u8 + 1,
                    level,
                });
            }
        }
    }

    for column in COL_ASTEROIDS {
        system
            .asteroids
            .extend(decode_asteroid_cell(cell(row, column)));
    }

    for columns in COL_JOVIANS {
        if let Some(jovian) = decode_jovian_triple(row, columns) {
            system.jovians.push(jovian);
        }
    }

    for column in COL_PLANETS {
        let raw = cell(row, column);
        if !raw.is_empty() {
            system.planets.push(decode_planet_cell(raw));
        }
    }

    Some(system)
}

// =============================================================================
// TRANSLATION PASS
// =============================================================================

/// Translate a raw grid into a [`StarChart`].
///
/// Skips the fixed header rows, classifies each remaining row, threads
/// the running tier through the scan (rows before the first tier header
/// inherit tier 0), and upserts each assembled system by name. Always
/// returns a chart; there is no fatal path.
#[must_use]
pub fn translate_grid(grid: &[Vec<String>]) -> StarChart {
    let mut chart = StarChart::new();
    let mut tier = 0;

    for row in grid.iter().skip(ROW_START) {
        match classify_row(row) {
            RowKind::TierHeader(next) => tier = next,
            RowKind::Separator => {}
            RowKind::Data => {
                if let Some(system) = assemble_system(row, tier) {
                    chart.upsert(system);
                }
            }
        }
    }

    chart
}

// =============================================================================
// TESTS
// =============================================================================
