use crate::reading::VitalsReading;
use crate::status::VitalStatus;
use crate::units::Temperature;
use serde::{Deserialize, Serialize};

/// The metrics threshold classification covers. Blood pressure counts as one
/// metric even though it reads two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    BloodPressure,
    HeartRate,
    Temperature,
    OxygenSaturation,
    RespiratoryRate,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::BloodPressure => "bloodPressure",
            MetricKind::HeartRate => "heartRate",
            MetricKind::Temperature => "temperature",
            MetricKind::OxygenSaturation => "oxygenSaturation",
            MetricKind::RespiratoryRate => "respiratoryRate",
        }
    }
}

fn above(value: Option<f64>, bound: f64) -> bool {
    value.is_some_and(|v| v > bound)
}

/// Blood pressure grading over whichever components are present.
///
/// Critical when systolic > 180 or diastolic > 120; warning when
/// systolic > 140 or diastolic > 90. All bounds strict, so 180/120 exactly is
/// still only a warning. One present component classifies on its own.
pub fn classify_blood_pressure(systolic: Option<f64>, diastolic: Option<f64>) -> VitalStatus {
    if above(systolic, 180.0) || above(diastolic, 120.0) {
        VitalStatus::Critical
    } else if above(systolic, 140.0) || above(diastolic, 90.0) {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

/// Heart rate grading: critical outside (40, 130), warning outside [50, 100].
/// 130 exactly sits on the critical bound and therefore grades warning.
pub fn classify_heart_rate(bpm: Option<f64>) -> VitalStatus {
    let Some(bpm) = bpm else {
        return VitalStatus::Normal;
    };
    if bpm < 40.0 || bpm > 130.0 {
        VitalStatus::Critical
    } else if bpm < 50.0 || bpm > 100.0 {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

/// Temperature grading in Celsius: critical below 35 or above 40, warning
/// below 36 or above 38.5. Fahrenheit readings convert first; 104F converts
/// to exactly 40.0C, which the strict bound keeps at warning.
pub fn classify_temperature(temperature: Option<Temperature>) -> VitalStatus {
    let Some(temperature) = temperature else {
        return VitalStatus::Normal;
    };
    let celsius = temperature.to_celsius();
    if celsius < 35.0 || celsius > 40.0 {
        VitalStatus::Critical
    } else if celsius < 36.0 || celsius > 38.5 {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

/// SpO2 grading: critical below 90%, warning below 95%.
pub fn classify_oxygen_saturation(percent: Option<f64>) -> VitalStatus {
    let Some(percent) = percent else {
        return VitalStatus::Normal;
    };
    if percent < 90.0 {
        VitalStatus::Critical
    } else if percent < 95.0 {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

/// Respiratory rate grading: critical outside (8, 30), warning outside
/// [12, 20].
pub fn classify_respiratory_rate(rate: Option<f64>) -> VitalStatus {
    let Some(rate) = rate else {
        return VitalStatus::Normal;
    };
    if rate < 8.0 || rate > 30.0 {
        VitalStatus::Critical
    } else if rate < 12.0 || rate > 20.0 {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

/// Overall grade for a reading: the worst of the per-metric grades.
///
/// An empty reading grades normal, since every absent metric does.
pub fn classify_reading(reading: &VitalsReading) -> VitalStatus {
    let grades = [
        classify_blood_pressure(reading.systolic, reading.diastolic),
        classify_heart_rate(reading.heart_rate),
        classify_temperature(reading.temperature),
        classify_oxygen_saturation(reading.oxygen_saturation),
        classify_respiratory_rate(reading.respiratory_rate),
    ];
    grades.into_iter().fold(VitalStatus::Normal, std::cmp::max)
}
