//! Command implementations for the water quality predictor CLI.
//!
//! Two surfaces over one pipeline: `sweep` runs every station/year
//! combination and writes the safe-water report, `check` answers a single
//! query with a per-pollutant table.

use clap::Subcommand;
use wqp_model::model::ModelBundle;

pub mod check;
pub mod sweep;

/// Default path of the serialized regression model.
pub const DEFAULT_MODEL_PATH: &str = "fixtures/pollution_model.json";

/// Default path of the trained column list.
pub const DEFAULT_COLUMNS_PATH: &str = "fixtures/model_columns.json";

#[derive(Subcommand)]
pub enum Command {
    /// Sweep all station/year combinations and report safe drinking water
    Sweep {
        /// Output path for the safe-combination CSV (overwritten)
        #[arg(short = 'o', long, default_value = "safe_water_stations.csv")]
        output_csv: String,

        /// Path to the serialized regression model
        #[arg(long, default_value = DEFAULT_MODEL_PATH)]
        model: String,

        /// Path to the trained column list
        #[arg(long, default_value = DEFAULT_COLUMNS_PATH)]
        columns: String,
    },

    /// Predict pollutant levels for a single station and year
    Check {
        /// Year to predict for
        #[arg(short, long, default_value_t = 2024,
              value_parser = clap::value_parser!(i32).range(2000..=2100))]
        year: i32,

        /// Monitoring station id
        #[arg(short, long, default_value_t = 1,
              value_parser = clap::value_parser!(u32).range(1..=22))]
        station_id: u32,

        /// Print the pollutant parameter guide after the results
        #[arg(long)]
        explain: bool,

        /// Path to the serialized regression model
        #[arg(long, default_value = DEFAULT_MODEL_PATH)]
        model: String,

        /// Path to the trained column list
        #[arg(long, default_value = DEFAULT_COLUMNS_PATH)]
        columns: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Sweep {
            output_csv,
            model,
            columns,
        } => {
            let bundle = ModelBundle::load(&model, &columns)?;
            sweep::run_sweep(&bundle, &output_csv)
        }
        Command::Check {
            year,
            station_id,
            explain,
            model,
            columns,
        } => {
            let bundle = ModelBundle::load(&model, &columns)?;
            check::run_check(&bundle, year, station_id, explain)
        }
    }
}
