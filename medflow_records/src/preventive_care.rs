use crate::quality::{QualityBand, QUALITY_BANDS};
use medflow_scoring::{composite_score, WeightTable};
use serde::{Deserialize, Serialize};

pub const PREVENTIVE_CARE_WEIGHTS: WeightTable = WeightTable::new(&[
    ("screeningCompliance", 0.3),
    ("vaccinationCoverage", 0.25),
    ("checkupFrequency", 0.2),
    ("lifestyleRisk", 0.15),
    ("healthAwareness", 0.1),
]);

/// Preventive-care engagement snapshot, attributes on the 0-10 scale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreventiveCareRecord {
    pub screening_compliance: Option<f64>,
    pub vaccination_coverage: Option<f64>,
    pub checkup_frequency: Option<f64>,
    pub lifestyle_risk: Option<f64>,
    pub health_awareness: Option<f64>,
}

impl PreventiveCareRecord {
    fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "screeningCompliance" => self.screening_compliance,
            "vaccinationCoverage" => self.vaccination_coverage,
            "checkupFrequency" => self.checkup_frequency,
            "lifestyleRisk" => self.lifestyle_risk,
            "healthAwareness" => self.health_awareness,
            _ => None,
        }
    }

    pub fn score(&self) -> f64 {
        composite_score(&PREVENTIVE_CARE_WEIGHTS, |name| self.attribute(name))
    }

    pub fn status(&self) -> QualityBand {
        QUALITY_BANDS.classify(self.score())
    }
}
