//! Single-query safety check with a formatted results table.

use wqp_core::pollutant::POLLUTANTS;
use wqp_core::verdict::{evaluate, VerdictStatus};
use wqp_model::model::ModelBundle;

/// Predict pollutant levels for one station and year, print the
/// per-pollutant table and the aggregate verdict.
///
/// Inference failure is caught here and rendered as a message instead of
/// the table; this is the only caught error in the system.
pub fn run_check(
    bundle: &ModelBundle,
    year: i32,
    station_id: u32,
    explain: bool,
) -> anyhow::Result<()> {
    println!(
        "Predicted pollutant levels and safety check for station {} in {}:",
        station_id, year
    );
    println!();

    match bundle.predict_station(year, station_id) {
        Ok(predicted) => {
            let (verdicts, all_ok) = evaluate(&predicted);

            println!(
                "{:<10} {:>16} {:>24}  Status",
                "Pollutant", "Predicted (mg/L)", "Acceptable (mg/L)"
            );
            for verdict in &verdicts {
                let marker = match &verdict.status {
                    VerdictStatus::Ok => "OK".to_string(),
                    VerdictStatus::Violation(reason) => format!("FAIL  {reason}"),
                };
                println!(
                    "{:<10} {:>16.4} {:>24}  {}",
                    verdict.pollutant.name(),
                    verdict.predicted,
                    verdict.limit,
                    marker
                );
            }

            println!();
            if all_ok {
                println!("Water is likely safe for drinking based on predicted pollutant levels.");
            } else {
                println!("Water is NOT safe for drinking due to one or more critical pollutants.");
            }
        }
        Err(e) => println!("Prediction failed: {e}"),
    }

    if explain {
        print_parameter_guide();
    }
    Ok(())
}

/// Static guide describing each pollutant, independent of any prediction.
fn print_parameter_guide() {
    println!();
    println!("What do these parameters mean?");
    for pollutant in POLLUTANTS {
        println!("  {:<4} {}", pollutant.name(), pollutant.description());
    }
}
