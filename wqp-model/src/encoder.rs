//! Feature-row construction matching the trained column schema.
//!
//! The model was trained on a `year` column plus one-hot station
//! indicators named `id_<station>`. A query encodes to a single row whose
//! values are positionally aligned to the trained column list: the year,
//! a 1 in the queried station's indicator, and 0 everywhere else.

use std::fmt;

/// Column name of the year feature.
pub const YEAR_COLUMN: &str = "year";

/// One-hot indicator column name for a station id, e.g. `id_7`.
pub fn indicator_column(station_id: u32) -> String {
    format!("id_{station_id}")
}

/// Errors from feature encoding.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EncodeError {
    /// The station id has no indicator column in the trained schema, so
    /// the model has never seen it. Encoding such a station would produce
    /// an all-zero one-hot block and a systematically wrong prediction,
    /// so it is rejected here instead.
    UnknownStation(u32),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnknownStation(id) => {
                write!(f, "station id {id} has no indicator column in the trained schema")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// A single feature row aligned to the trained column list: `values()[i]`
/// is the value of `columns()[i]`.
#[derive(Debug, PartialEq, Clone)]
pub struct FeatureRow<'a> {
    columns: &'a [String],
    values: Vec<f64>,
}

impl FeatureRow<'_> {
    pub fn columns(&self) -> &[String] {
        self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Encode a (year, station) query against the trained column list.
///
/// Every trained column gets a value: the year column carries the year,
/// the queried station's indicator carries 1, and everything else
/// (including the other stations' indicators) is zero-filled.
pub fn encode(
    year: i32,
    station_id: u32,
    trained_columns: &[String],
) -> Result<FeatureRow<'_>, EncodeError> {
    let indicator = indicator_column(station_id);
    if !trained_columns.iter().any(|c| *c == indicator) {
        return Err(EncodeError::UnknownStation(station_id));
    }
    let values = trained_columns
        .iter()
        .map(|col| {
            if col == YEAR_COLUMN {
                f64::from(year)
            } else if *col == indicator {
                1.0
            } else {
                0.0
            }
        })
        .collect();
    Ok(FeatureRow {
        columns: trained_columns,
        values,
    })
}
