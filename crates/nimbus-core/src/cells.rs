//! # Cell Decoders
//!
//! Decoders for the composite cell encodings used by the sheet: ore+level
//! tokens, planet type with apostrophe moon markers, and Jovian band
//! triples.
//!
//! All numeric decoding is lenient. The sheet is hand-maintained and
//! carries occasional typos; failing a whole load on one bad cell is worse
//! than carrying a bad field, so unparseable numbers become the explicit
//! [`BAD_NUMBER`] sentinel and the pass continues.

use crate::system::{Asteroid, Jovian, Planet};

/// Sentinel carried in place of a numeric cell that failed to parse.
///
/// The sentinel propagates into the assembled entity unchanged, so a
/// garbled tier header marks every system under it until the next valid
/// header. Callers that care can test for it; the translator never aborts.
pub const BAD_NUMBER: i32 = i32::MIN;

/// Read a cell from a row, treating out-of-range columns as empty.
///
/// Rows in the raw grid may be ragged; a missing trailing cell is the
/// ordinary absence case, not an error.
#[must_use]
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}

// =============================================================================
// LENIENT NUMBERS
// =============================================================================

/// Lenient integer decode for a numeric cell.
///
/// Empty or whitespace-only cells read as 0 (absence). Anything that is
/// not an integer reads as [`BAD_NUMBER`].
#[must_use]
pub fn lenient_number(raw: &str) -> i32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse::<i32>().unwrap_or(BAD_NUMBER)
}

/// Decode a signal-count cell.
///
/// Counts drive a repetition loop, so malformed and negative values both
/// collapse to "emit nothing" rather than to a sentinel.
#[must_use]
pub fn signal_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse::<i64>().map_or(0, |n| n.max(0) as u32)
}

// =============================================================================
// ASTEROIDS
// =============================================================================

/// Decode one asteroid cell into its composite tokens.
///
/// The cell is comma-separated; each token's first character is the ore
/// symbol and the remainder is the lenient level. An empty cell yields no
/// asteroids.
#[must_use]
pub fn decode_asteroid_cell(raw: &str) -> Vec<Asteroid> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',')
        .map(|token| {
            let mut chars = token.chars();
            let ore = chars.next().map_or_else(String::new, String::from);
            Asteroid::new(ore, lenient_number(chars.as_str()))
        })
        .collect()
}

// =============================================================================
// JOVIANS
// =============================================================================

/// Decode one Jovian column triple.
///
/// The triple's first column marks presence: when it is empty there is no
/// body in that slot, whatever the other two columns hold. Band strings
/// are taken verbatim.
#[must_use]
pub fn decode_jovian_triple(row: &[String], columns: &[usize; 3]) -> Option<Jovian> {
    if cell(row, columns[0]).is_empty() {
        return None;
    }
    Some(Jovian {
        bands: columns.map(|column| cell(row, column).to_string()),
    })
}

// =============================================================================
// PLANETS
// =============================================================================

/// Decode one planet cell.
///
/// Everything before the first apostrophe is the type; the apostrophe and
/// every character after it are moon markers, one moon each. A cell with
/// no apostrophe is a moonless planet.
#[must_use]
pub fn decode_planet_cell(raw: &str) -> Planet {
    match raw.find('\'') {
        Some(marker) => {
            let moons = raw[marker..].chars().count() as u32;
            Planet::new(&raw[..marker], moons)
        }
        None => Planet::new(raw, 0),
    }
}

// =============================================================================
// TESTS
// =============================================================================
