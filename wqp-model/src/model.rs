//! Model and column-schema artifacts.
//!
//! The trained regressor is serialized as JSON: one coefficient row and
//! one intercept per pollutant, over the columns listed in the companion
//! `model_columns.json` artifact.

use crate::encoder;
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use wqp_core::pollutant::POLLUTANTS;

/// Narrow capability interface over the opaque trained model: a feature
/// row in, one value per pollutant out. Lets tests substitute a
/// deterministic fixture for the real artifact.
pub trait Predictor {
    fn predict(&self, features: &[f64]) -> anyhow::Result<Vec<f64>>;
}

/// A multi-output linear regression artifact: `outputs[i] = intercepts[i]
/// + coefficients[i] · features`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearModel {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let model: LinearModel =
            serde_json::from_str(json).context("failed to parse model artifact")?;
        anyhow::ensure!(
            model.coefficients.len() == model.intercepts.len(),
            "model artifact has {} coefficient rows but {} intercepts",
            model.coefficients.len(),
            model.intercepts.len()
        );
        Ok(model)
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact {path}"))?;
        Self::from_json(&json)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64]) -> anyhow::Result<Vec<f64>> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                anyhow::ensure!(
                    row.len() == features.len(),
                    "feature row has {} values but the model expects {}",
                    features.len(),
                    row.len()
                );
                let dot: f64 = row.iter().zip(features).map(|(c, x)| c * x).sum();
                Ok(intercept + dot)
            })
            .collect()
    }
}

/// Load the ordered list of column names the model was trained on.
pub fn load_columns(path: &str) -> anyhow::Result<Vec<String>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read column schema {path}"))?;
    serde_json::from_str(&json).context("failed to parse column schema")
}

/// The trained model together with the column schema it expects. Loaded
/// once at startup and passed immutably to both reporters.
pub struct ModelBundle {
    model: Box<dyn Predictor>,
    columns: Vec<String>,
}

impl ModelBundle {
    pub fn new(model: Box<dyn Predictor>, columns: Vec<String>) -> Self {
        ModelBundle { model, columns }
    }

    /// Load both artifacts from disk.
    pub fn load(model_path: &str, columns_path: &str) -> anyhow::Result<Self> {
        let model = LinearModel::load(model_path)?;
        let columns = load_columns(columns_path)?;
        info!(
            "Loaded model from {} with {} trained columns",
            model_path,
            columns.len()
        );
        Ok(ModelBundle::new(Box::new(model), columns))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Run the pipeline front half for one query: encode the feature row
    /// and invoke the model. The returned vector is positionally aligned
    /// to the fixed pollutant order.
    pub fn predict_station(&self, year: i32, station_id: u32) -> anyhow::Result<Vec<f64>> {
        let row = encoder::encode(year, station_id, &self.columns)?;
        let predicted = self.model.predict(row.values())?;
        anyhow::ensure!(
            predicted.len() == POLLUTANTS.len(),
            "model returned {} values, expected {}",
            predicted.len(),
            POLLUTANTS.len()
        );
        Ok(predicted)
    }
}
