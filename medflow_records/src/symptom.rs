use medflow_scoring::{composite_score, Band, BandTable, Boundary, WeightTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trajectory of a tracked symptom. The composite tracks severity here, so
/// lower is better and the fallback is `New` (heavy, not yet characterized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomStatus {
    Resolved,
    Improving,
    Stable,
    Worsening,
    New,
}

impl SymptomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomStatus::Resolved => "resolved",
            SymptomStatus::Improving => "improving",
            SymptomStatus::Stable => "stable",
            SymptomStatus::Worsening => "worsening",
            SymptomStatus::New => "new",
        }
    }
}

impl fmt::Display for SymptomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sums to 0.9 rather than 1.0; renormalization in the scorer absorbs the
/// difference, and the table doubles as the live exercise of that contract.
pub const SYMPTOM_WEIGHTS: WeightTable = WeightTable::new(&[
    ("severity", 0.3),
    ("frequency", 0.25),
    ("duration", 0.2),
    ("impact", 0.15),
]);

pub static SYMPTOM_BANDS: BandTable<SymptomStatus> = BandTable {
    boundary: Boundary::AtOrBelow,
    bands: &[
        Band {
            upper: 3.0,
            label: SymptomStatus::Resolved,
        },
        Band {
            upper: 5.0,
            label: SymptomStatus::Improving,
        },
        Band {
            upper: 7.0,
            label: SymptomStatus::Stable,
        },
        Band {
            upper: 9.0,
            label: SymptomStatus::Worsening,
        },
    ],
    fallback: SymptomStatus::New,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymptomRecord {
    pub name: Option<String>,
    pub severity: Option<f64>,
    pub frequency: Option<f64>,
    pub duration: Option<f64>,
    pub impact: Option<f64>,
}

impl SymptomRecord {
    fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "severity" => self.severity,
            "frequency" => self.frequency,
            "duration" => self.duration,
            "impact" => self.impact,
            _ => None,
        }
    }

    pub fn score(&self) -> f64 {
        composite_score(&SYMPTOM_WEIGHTS, |name| self.attribute(name))
    }

    pub fn status(&self) -> SymptomStatus {
        SYMPTOM_BANDS.classify(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn severity_walks_through_every_band() {
        // renormalization noise is ~1e-16, so stay clear of the exact bounds
        // here; BandTable's own tests pin the inclusive-bound behavior
        let at = |severity: f64| SymptomRecord {
            severity: Some(severity),
            ..Default::default()
        };
        assert_eq!(at(2.5).status(), SymptomStatus::Resolved);
        assert_eq!(at(4.5).status(), SymptomStatus::Improving);
        assert_eq!(at(6.5).status(), SymptomStatus::Stable);
        assert_eq!(at(8.5).status(), SymptomStatus::Worsening);
        assert_eq!(at(9.5).status(), SymptomStatus::New);
    }

    #[test]
    fn untracked_symptom_reads_resolved() {
        let record = SymptomRecord {
            name: Some("headache".into()),
            ..Default::default()
        };
        assert_eq!(record.score(), 0.0);
        assert_eq!(record.status(), SymptomStatus::Resolved);
    }
}
