use medflow_scoring::{composite_score, Band, BandTable, Boundary, WeightTable};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentalHealthStatus {
    Critical,
    Worsening,
    Improving,
    Stable,
}

impl MentalHealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentalHealthStatus::Critical => "critical",
            MentalHealthStatus::Worsening => "worsening",
            MentalHealthStatus::Improving => "improving",
            MentalHealthStatus::Stable => "stable",
        }
    }
}

impl fmt::Display for MentalHealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All weights positive regardless of attribute direction. Anxiety and
/// stress levels feed the average un-inverted; the asymmetry is a long-lived
/// behavior downstream dashboards depend on, so it stays.
pub const MENTAL_HEALTH_WEIGHTS: WeightTable = WeightTable::new(&[
    ("moodScore", 0.25),
    ("sleepQuality", 0.2),
    ("anxietyLevel", 0.15),
    ("stressLevel", 0.15),
    ("socialConnection", 0.15),
    ("copingSkills", 0.1),
]);

/// Inclusive bounds: a score of exactly 6.0 is improving, not stable.
pub static MENTAL_HEALTH_BANDS: BandTable<MentalHealthStatus> = BandTable {
    boundary: Boundary::AtOrBelow,
    bands: &[
        Band {
            upper: 3.0,
            label: MentalHealthStatus::Worsening,
        },
        Band {
            upper: 6.0,
            label: MentalHealthStatus::Improving,
        },
    ],
    fallback: MentalHealthStatus::Stable,
};

/// Mental-health check-in. The two safety flags are never scored; either one
/// forces the status to critical before the bands are consulted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MentalHealthRecord {
    pub mood_score: Option<f64>,
    pub sleep_quality: Option<f64>,
    pub anxiety_level: Option<f64>,
    pub stress_level: Option<f64>,
    pub social_connection: Option<f64>,
    pub coping_skills: Option<f64>,
    pub suicidal_thoughts: bool,
    pub self_harm_risk: bool,
}

impl MentalHealthRecord {
    fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "moodScore" => self.mood_score,
            "sleepQuality" => self.sleep_quality,
            "anxietyLevel" => self.anxiety_level,
            "stressLevel" => self.stress_level,
            "socialConnection" => self.social_connection,
            "copingSkills" => self.coping_skills,
            _ => None,
        }
    }

    pub fn has_safety_flag(&self) -> bool {
        self.suicidal_thoughts || self.self_harm_risk
    }

    pub fn score(&self) -> f64 {
        composite_score(&MENTAL_HEALTH_WEIGHTS, |name| self.attribute(name))
    }

    pub fn status(&self) -> MentalHealthStatus {
        MENTAL_HEALTH_BANDS.classify_with_override(
            self.score(),
            self.has_safety_flag()
                .then_some(MentalHealthStatus::Critical),
        )
    }
}
