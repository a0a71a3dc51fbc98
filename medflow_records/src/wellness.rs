use crate::quality::{QualityBand, QUALITY_BANDS};
use medflow_scoring::{composite_score, WeightTable};
use serde::{Deserialize, Serialize};

pub const WELLNESS_WEIGHTS: WeightTable = WeightTable::new(&[
    ("sleepQuality", 0.25),
    ("nutritionScore", 0.2),
    ("hydrationLevel", 0.15),
    ("stressManagement", 0.15),
    ("activityLevel", 0.15),
    ("moodScore", 0.1),
]);

/// Daily wellness check-in, all attributes 0-10 sub-scores.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WellnessRecord {
    pub sleep_quality: Option<f64>,
    pub nutrition_score: Option<f64>,
    pub hydration_level: Option<f64>,
    pub stress_management: Option<f64>,
    pub activity_level: Option<f64>,
    pub mood_score: Option<f64>,
}

impl WellnessRecord {
    fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "sleepQuality" => self.sleep_quality,
            "nutritionScore" => self.nutrition_score,
            "hydrationLevel" => self.hydration_level,
            "stressManagement" => self.stress_management,
            "activityLevel" => self.activity_level,
            "moodScore" => self.mood_score,
            _ => None,
        }
    }

    pub fn score(&self) -> f64 {
        composite_score(&WELLNESS_WEIGHTS, |name| self.attribute(name))
    }

    pub fn status(&self) -> QualityBand {
        QUALITY_BANDS.classify(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sparse_check_in_renormalizes() {
        let record = WellnessRecord {
            sleep_quality: Some(8.0),
            nutrition_score: Some(7.0),
            ..Default::default()
        };
        // (8*0.25 + 7*0.2) / 0.45
        assert!((record.score() - 3.4 / 0.45).abs() < 1e-9);
        assert_eq!(record.status(), QualityBand::Good);
    }

    #[test]
    fn empty_check_in_is_poor() {
        assert_eq!(WellnessRecord::default().status(), QualityBand::Poor);
    }
}
