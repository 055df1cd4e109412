//! Batch sweep: evaluate every station/year combination and write the
//! safe-water report.

use log::info;
use std::ops::{Range, RangeInclusive};
use wqp_core::station::{SafeCombination, STATION_MAX, STATION_MIN, SWEEP_YEAR_END, YEAR_MIN};
use wqp_core::verdict::is_safe;
use wqp_model::model::ModelBundle;

/// Run the pipeline over the Cartesian product of the given ranges and
/// collect the combinations whose predictions pass every threshold rule.
///
/// Iteration is year-major, station-minor, and the report rows keep that
/// order. Combinations are independent; the first inference error aborts
/// the whole sweep.
pub fn collect_safe(
    bundle: &ModelBundle,
    years: Range<i32>,
    stations: RangeInclusive<u32>,
) -> anyhow::Result<Vec<SafeCombination>> {
    let mut safe = Vec::new();
    for year in years {
        for station_id in stations.clone() {
            let predicted = bundle.predict_station(year, station_id)?;
            if is_safe(&predicted) {
                safe.push(SafeCombination { year, station_id });
            }
        }
    }
    Ok(safe)
}

/// Write the safe-set as a CSV with header `year,station_id`, overwriting
/// any existing file.
pub fn write_report(records: &[SafeCombination], output_csv: &str) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(output_csv)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Full sweep over the trained ranges: years 2000-2023, stations 1-22.
pub fn run_sweep(bundle: &ModelBundle, output_csv: &str) -> anyhow::Result<()> {
    info!(
        "Sweeping years {}..{} across stations {}..={}",
        YEAR_MIN, SWEEP_YEAR_END, STATION_MIN, STATION_MAX
    );

    let safe = collect_safe(bundle, YEAR_MIN..SWEEP_YEAR_END, STATION_MIN..=STATION_MAX)?;

    println!("Stations and years with safe water:");
    println!("{:>6} {:>10}", "year", "station");
    for record in &safe {
        println!("{:>6} {:>10}", record.year, record.station_id);
    }

    write_report(&safe, output_csv)?;
    info!(
        "{} safe combinations written to {}",
        safe.len(),
        output_csv
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wqp_model::model::LinearModel;

    /// Columns for a two-station model: year plus one indicator each.
    fn columns() -> Vec<String> {
        ["year", "id_1", "id_2"].iter().map(|s| s.to_string()).collect()
    }

    /// Station 1 predicts a fully safe vector every year; station 2's
    /// indicator pushes O2 below the 5.0 minimum.
    fn fixture_bundle() -> ModelBundle {
        let mut coefficients = vec![vec![0.0, 0.0, 0.0]; 6];
        coefficients[0][2] = -3.0;
        let model = LinearModel {
            coefficients,
            intercepts: vec![6.0, 5.0, 0.05, 100.0, 0.08, 200.0],
        };
        ModelBundle::new(Box::new(model), columns())
    }

    #[test]
    fn test_collect_safe_synthetic_range() {
        let bundle = fixture_bundle();
        let safe = collect_safe(&bundle, 2000..2002, 1..=2).unwrap();
        assert_eq!(
            safe,
            vec![
                SafeCombination { year: 2000, station_id: 1 },
                SafeCombination { year: 2001, station_id: 1 },
            ]
        );
    }

    #[test]
    fn test_collect_safe_aborts_on_unknown_station() {
        let bundle = fixture_bundle();
        assert!(collect_safe(&bundle, 2000..2001, 1..=3).is_err());
    }

    #[test]
    fn test_report_file_contents() {
        let bundle = fixture_bundle();
        let safe = collect_safe(&bundle, 2000..2002, 1..=2).unwrap();

        let path = std::env::temp_dir().join("wqp_sweep_report_test.csv");
        let path_str = path.to_str().unwrap();
        write_report(&safe, path_str).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "year,station_id\n2000,1\n2001,1\n");
        std::fs::remove_file(&path).unwrap();
    }
}
