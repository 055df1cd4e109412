use serde::{Deserialize, Serialize};

/// First year covered by the training data.
pub const YEAR_MIN: i32 = 2000;

/// Exclusive upper bound of the batch sweep's year range.
pub const SWEEP_YEAR_END: i32 = 2024;

/// Latest year a single-query check accepts.
pub const YEAR_MAX: i32 = 2100;

/// Lowest monitoring station id.
pub const STATION_MIN: u32 = 1;

/// Highest monitoring station id. Stations form a fixed known set.
pub const STATION_MAX: u32 = 22;

/// A (year, station) combination whose full predicted pollutant vector
/// satisfies all six threshold rules. One row of the batch report.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct SafeCombination {
    pub year: i32,
    pub station_id: u32,
}
