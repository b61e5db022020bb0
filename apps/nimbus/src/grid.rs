//! # Grid Acquisition
//!
//! Reads a CSV export of the systems sheet into the raw 2-D string grid
//! the core translator consumes. This is the whole transport layer: the
//! translator itself never learns where the grid came from.

use std::path::Path;

/// Read a CSV file into a row-major grid of cells.
///
/// The sheet export has no CSV header row (the leading sheet rows are
/// data to the reader and skipped by the translator), rows may be ragged,
/// and composite cells such as `"M3,K7"` arrive quoted.
pub fn load_grid(path: &Path) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(rows = grid.len(), path = %path.display(), "grid loaded");
    Ok(grid)
}
