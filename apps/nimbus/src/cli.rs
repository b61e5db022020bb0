//! # CLI Commands
//!
//! Command implementations for the Nimbus binary. Each `cmd_*` function
//! is directly callable so the integration tests can exercise commands
//! without spawning the binary.

use crate::grid::load_grid;
use nimbus_core::summary::{jovian_band_string, ore_inventory_string, ore_level_ranges};
use nimbus_core::{translate_grid, StarChart, System};
use std::path::Path;
use thiserror::Error;

/// Errors from the CLI layer.
///
/// The core translator never fails; everything here is file handling,
/// CSV decoding, or a name the chart does not contain.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV export could not be decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested system is not in the chart.
    #[error("no system named '{0}' in the chart")]
    UnknownSystem(String),
}

/// Load the CSV export and translate it into a chart.
pub fn load_chart(data: &Path) -> Result<StarChart, CliError> {
    let grid = load_grid(data)?;
    let chart = translate_grid(&grid);
    tracing::info!(
        rows = grid.len(),
        systems = chart.len(),
        "sheet translated"
    );
    Ok(chart)
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List every system, one line each, or dump the chart as JSON.
pub fn cmd_list(data: &Path, json: bool) -> Result<(), CliError> {
    let chart = load_chart(data)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
        return Ok(());
    }

    for system in &chart {
        println!("{}", list_line(system));
    }
    println!("{} systems", chart.len());
    Ok(())
}

/// One listing line: name, tier numeral, level, station flag, ores.
fn list_line(system: &System) -> String {
    let station = if system.station { "station" } else { "-" };
    format!(
        "{:<24} tier {:<5} lvl {:<4} {:<8} {}",
        system.name,
        roman_numeral(system.tier),
        system.level,
        station,
        ore_inventory_string(&system.asteroids),
    )
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Show the full detail view for one system.
pub fn cmd_show(data: &Path, name: &str, json: bool) -> Result<(), CliError> {
    let chart = load_chart(data)?;
    let system = chart
        .get(name)
        .ok_or_else(|| CliError::UnknownSystem(name.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(system)?);
        return Ok(());
    }

    print!("{}", detail_view(system));
    Ok(())
}

/// Multi-line detail view mirroring the list view of the web chart.
fn detail_view(system: &System) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} — {}, tier {}, level {}{}\n",
        system.name,
        if system.faction.is_empty() {
            "unclaimed"
        } else {
            system.faction.as_str()
        },
        roman_numeral(system.tier),
        system.level,
        if system.station { ", station" } else { "" },
    ));

    if !system.asteroids.is_empty() {
        let ranges: Vec<String> = ore_level_ranges(&system.asteroids)
            .into_iter()
            .map(|(ore, range)| format!("{} {}", ore, range.label()))
            .collect();
        out.push_str(&format!("  ores:    {}\n", ranges.join("  ")));
    }

    if !system.jovians.is_empty() {
        out.push_str(&format!(
            "  jovians: {}\n",
            jovian_band_string(&system.jovians, 3)
        ));
    }

    for planet in &system.planets {
        match planet.moons {
            0 => out.push_str(&format!("  planet:  {}\n", planet.kind)),
            1 => out.push_str(&format!("  planet:  {} (1 moon)\n", planet.kind)),
            n => out.push_str(&format!("  planet:  {} ({n} moons)\n", planet.kind)),
        }
    }

    for signal in &system.signals {
        out.push_str(&format!("  signal:  [scan {}] {}\n", signal.scan, signal.name));
    }

    out
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Serialize the whole chart as JSON to a file, or stdout when no output
/// path is given.
pub fn cmd_export(data: &Path, output: Option<&Path>) -> Result<(), CliError> {
    let chart = load_chart(data)?;
    let json = serde_json::to_string_pretty(&chart)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!(path = %path.display(), systems = chart.len(), "chart exported");
        }
        None => println!("{json}"),
    }
    Ok(())
}

// =============================================================================
// TIER NUMERALS
// =============================================================================

/// Roman numeral for a tier, as the web chart renders it.
///
/// Tiers outside 1..=3999 (tier 0, or the bad-number sentinel from a
/// garbled header) fall back to plain digits.
#[must_use]
pub fn roman_numeral(value: i32) -> String {
    if !(1..=3999).contains(&value) {
        return value.to_string();
    }

    const NUMERALS: &[(i32, &str)] = &[
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut remaining = value;
    let mut out = String::new();
    for &(weight, digits) in NUMERALS {
        while remaining >= weight {
            out.push_str(digits);
            remaining -= weight;
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn roman_numerals_for_chart_tiers() {
        assert_eq!(roman_numeral(1), "I");
        assert_eq!(roman_numeral(4), "IV");
        assert_eq!(roman_numeral(5), "V");
        assert_eq!(roman_numeral(9), "IX");
    }

    #[test]
    fn out_of_range_tiers_stay_numeric() {
        assert_eq!(roman_numeral(0), "0");
        assert_eq!(roman_numeral(-3), "-3");
        assert_eq!(roman_numeral(nimbus_core::BAD_NUMBER), i32::MIN.to_string());
    }

    #[test]
    fn detail_view_marks_station_and_faction() {
        let system = System {
            name: String::from("Teyahu"),
            tier: 2,
            faction: String::from("Tanoch"),
            level: 35,
            station: true,
            signals: Vec::new(),
            asteroids: Vec::new(),
            jovians: Vec::new(),
            planets: Vec::new(),
        };
        let view = detail_view(&system);
        assert!(view.starts_with("Teyahu — Tanoch, tier II, level 35, station"));
    }

    #[test]
    fn detail_view_handles_missing_faction() {
        let system = System {
            name: String::from("Zeyra"),
            tier: 1,
            faction: String::new(),
            level: 10,
            station: false,
            signals: Vec::new(),
            asteroids: Vec::new(),
            jovians: Vec::new(),
            planets: Vec::new(),
        };
        assert!(detail_view(&system).contains("unclaimed"));
    }
}
