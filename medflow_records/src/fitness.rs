use crate::quality::{QualityBand, QUALITY_BANDS};
use medflow_scoring::{composite_score, WeightTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session intensity, contributed to the composite on the 0-10 attribute
/// scale via `as_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Vigorous,
    Peak,
}

impl Intensity {
    /// Even spread over the 0-10 sub-score scale.
    pub fn as_score(self) -> f64 {
        match self {
            Intensity::Light => 2.5,
            Intensity::Moderate => 5.0,
            Intensity::Vigorous => 7.5,
            Intensity::Peak => 10.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Moderate => "moderate",
            Intensity::Vigorous => "vigorous",
            Intensity::Peak => "peak",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute weights for fitness sessions. Duration and intensity dominate;
/// the rest contribute evenly. Sums to 1.0, though the scorer renormalizes
/// either way.
pub const FITNESS_WEIGHTS: WeightTable = WeightTable::new(&[
    ("duration", 0.2),
    ("intensity", 0.2),
    ("caloriesBurned", 0.1),
    ("maxHeartRate", 0.1),
    ("distance", 0.1),
    ("flexibilityScore", 0.1),
    ("recoveryTime", 0.1),
    ("vo2Max", 0.1),
]);

/// One logged fitness session.
///
/// Numeric attributes are caller-supplied sub-scores on the 0-10 scale;
/// normalizing raw units (minutes, kcal, km) into that scale is intake's
/// concern, and the scorer does not police it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FitnessRecord {
    pub duration: Option<f64>,
    pub intensity: Option<Intensity>,
    pub calories_burned: Option<f64>,
    pub max_heart_rate: Option<f64>,
    pub distance: Option<f64>,
    pub flexibility_score: Option<f64>,
    pub recovery_time: Option<f64>,
    pub vo2_max: Option<f64>,
}

impl FitnessRecord {
    fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "duration" => self.duration,
            "intensity" => self.intensity.map(Intensity::as_score),
            "caloriesBurned" => self.calories_burned,
            "maxHeartRate" => self.max_heart_rate,
            "distance" => self.distance,
            "flexibilityScore" => self.flexibility_score,
            "recoveryTime" => self.recovery_time,
            "vo2Max" => self.vo2_max,
            _ => None,
        }
    }

    /// Sparse weighted average over the attributes present; 0.0 for an empty
    /// record.
    pub fn score(&self) -> f64 {
        composite_score(&FITNESS_WEIGHTS, |name| self.attribute(name))
    }

    pub fn status(&self) -> QualityBand {
        QUALITY_BANDS.classify(self.score())
    }
}
