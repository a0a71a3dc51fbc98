use crate::units::Temperature;
use serde::{Deserialize, Serialize};

/// One set of vital-sign measurements from an encounter.
///
/// Every field is optional: devices and intake forms send whatever they have,
/// and classification treats an absent metric as normal rather than guessing.
/// Wire names are camelCase to match the MedFlow API payloads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VitalsReading {
    /// Systolic blood pressure, mmHg.
    pub systolic: Option<f64>,
    /// Diastolic blood pressure, mmHg.
    pub diastolic: Option<f64>,
    /// Resting heart rate, bpm.
    pub heart_rate: Option<f64>,
    pub temperature: Option<Temperature>,
    /// SpO2, percent.
    pub oxygen_saturation: Option<f64>,
    /// Breaths per minute.
    pub respiratory_rate: Option<f64>,
    /// Carried for the record; not part of threshold classification.
    pub blood_glucose: Option<f64>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    /// Self-reported 0-10 scale.
    pub pain_score: Option<f64>,
    /// Glasgow Coma Scale, 3-15.
    pub gcs_score: Option<f64>,
}

impl VitalsReading {
    /// Body mass index from the carried weight and height, when both exist.
    pub fn bmi(&self) -> Option<f64> {
        match (self.weight_kg, self.height_cm) {
            (Some(weight), Some(height)) => crate::body::bmi(weight, height),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TempUnit;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_sparse_camel_case_payloads() {
        let reading: VitalsReading = serde_json::from_str(
            r#"{"heartRate": 72.0, "oxygenSaturation": 98.0, "temperature": {"value": 99.1, "unit": "f"}}"#,
        )
        .unwrap();
        assert_eq!(reading.heart_rate, Some(72.0));
        assert_eq!(reading.oxygen_saturation, Some(98.0));
        assert_eq!(
            reading.temperature,
            Some(Temperature {
                value: 99.1,
                unit: TempUnit::Fahrenheit
            })
        );
        assert_eq!(reading.systolic, None);
        assert_eq!(reading.pain_score, None);
    }

    #[test]
    fn empty_object_is_a_valid_reading() {
        let reading: VitalsReading = serde_json::from_str("{}").unwrap();
        assert_eq!(reading, VitalsReading::default());
    }

    #[test]
    fn bmi_needs_both_measurements() {
        let mut reading = VitalsReading {
            weight_kg: Some(70.0),
            ..Default::default()
        };
        assert_eq!(reading.bmi(), None);
        reading.height_cm = Some(175.0);
        let bmi = reading.bmi().unwrap();
        assert!((bmi - 22.857).abs() < 1e-3);
    }
}
