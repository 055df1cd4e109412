use serde::{Deserialize, Serialize};

/// The six pollutants the regression model predicts, in model output order.
/// Position i of a prediction vector corresponds to `POLLUTANTS[i]`.
pub const POLLUTANTS: [Pollutant; 6] = [
    Pollutant::O2,
    Pollutant::No3,
    Pollutant::No2,
    Pollutant::So4,
    Pollutant::Po4,
    Pollutant::Cl,
];

/// A measured water-quality indicator, in mg/L.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    /// Dissolved oxygen
    O2,
    /// Nitrate
    No3,
    /// Nitrite
    No2,
    /// Sulfate
    So4,
    /// Phosphate
    Po4,
    /// Chloride
    Cl,
}

/// Direction of a threshold comparison.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LimitKind {
    /// Value must be at least the threshold (dissolved oxygen).
    Minimum,
    /// Value must be at most the threshold (everything else).
    Maximum,
}

/// A drinking-water acceptability threshold in mg/L (WHO/EPA derived).
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Limit {
    pub threshold: f64,
    pub kind: LimitKind,
}

impl Limit {
    /// Whether a (rounded) predicted value satisfies this limit.
    /// Both directions are inclusive: a value exactly at the threshold passes.
    pub fn permits(&self, value: f64) -> bool {
        match self.kind {
            LimitKind::Minimum => value >= self.threshold,
            LimitKind::Maximum => value <= self.threshold,
        }
    }

    /// Human-readable form of the rule, e.g. ">= 5" or "<= 250".
    pub fn describe(&self) -> String {
        match self.kind {
            LimitKind::Minimum => format!(">= {}", self.threshold),
            LimitKind::Maximum => format!("<= {}", self.threshold),
        }
    }
}

impl Pollutant {
    /// Display name matching the training data column labels.
    pub fn name(self) -> &'static str {
        match self {
            Pollutant::O2 => "O2",
            Pollutant::No3 => "NO3",
            Pollutant::No2 => "NO2",
            Pollutant::So4 => "SO4",
            Pollutant::Po4 => "PO4",
            Pollutant::Cl => "CL",
        }
    }

    /// Acceptability limit for this pollutant. O2 is a minimum; the rest
    /// are maxima. These are process-wide constants, never mutated.
    pub fn limit(self) -> Limit {
        match self {
            Pollutant::O2 => Limit {
                threshold: 5.0,
                kind: LimitKind::Minimum,
            },
            Pollutant::No3 => Limit {
                threshold: 10.0,
                kind: LimitKind::Maximum,
            },
            Pollutant::No2 => Limit {
                threshold: 0.1,
                kind: LimitKind::Maximum,
            },
            Pollutant::So4 => Limit {
                threshold: 250.0,
                kind: LimitKind::Maximum,
            },
            Pollutant::Po4 => Limit {
                threshold: 0.1,
                kind: LimitKind::Maximum,
            },
            Pollutant::Cl => Limit {
                threshold: 250.0,
                kind: LimitKind::Maximum,
            },
        }
    }

    /// One-line description of what the parameter means and why it matters.
    /// Static guide content for the `check --explain` output.
    pub fn description(self) -> &'static str {
        match self {
            Pollutant::O2 => {
                "Dissolved oxygen in the water; below 5 mg/L it stresses or kills fish."
            }
            Pollutant::No3 => {
                "Nitrate from fertilizers and sewage; drives algae growth and is a health risk."
            }
            Pollutant::No2 => {
                "Nitrite, a nitrogen-cycle intermediate; toxic even at low levels."
            }
            Pollutant::So4 => {
                "Sulfate from mining runoff and detergents; causes taste issues and corrosion."
            }
            Pollutant::Po4 => {
                "Phosphate from sewage and fertilizer; drives eutrophication and fish kills."
            }
            Pollutant::Cl => {
                "Chloride from road salt and sewage; affects taste and harms freshwater life."
            }
        }
    }
}
