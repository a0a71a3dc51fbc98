use crate::classify::{
    classify_blood_pressure, classify_heart_rate, classify_oxygen_saturation,
    classify_respiratory_rate, classify_temperature, MetricKind,
};
use crate::reading::VitalsReading;
use crate::status::VitalStatus;
use crate::units::Temperature;
use serde::{Deserialize, Serialize};

/// One piece of clinical copy about a non-normal metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalInsight {
    pub metric: MetricKind,
    pub status: VitalStatus,
    pub message: String,
}

/// Rule-based insights for a reading: one entry per non-normal metric, in
/// fixed metric order. The copy is selected by the same threshold
/// conditionals the classifier uses; nothing here calls a model.
pub fn reading_insights(reading: &VitalsReading) -> Vec<VitalInsight> {
    let mut out = Vec::new();
    if let Some(insight) = blood_pressure_insight(reading.systolic, reading.diastolic) {
        out.push(insight);
    }
    if let Some(insight) = heart_rate_insight(reading.heart_rate) {
        out.push(insight);
    }
    if let Some(insight) = temperature_insight(reading.temperature) {
        out.push(insight);
    }
    if let Some(insight) = oxygen_insight(reading.oxygen_saturation) {
        out.push(insight);
    }
    if let Some(insight) = respiratory_insight(reading.respiratory_rate) {
        out.push(insight);
    }
    out
}

fn blood_pressure_insight(systolic: Option<f64>, diastolic: Option<f64>) -> Option<VitalInsight> {
    let status = classify_blood_pressure(systolic, diastolic);
    let message = match status {
        VitalStatus::Normal => return None,
        VitalStatus::Critical => "Blood pressure in hypertensive crisis range; seek immediate care",
        VitalStatus::Warning => "Blood pressure elevated; recheck after rest and monitor",
    };
    Some(VitalInsight {
        metric: MetricKind::BloodPressure,
        status,
        message: message.to_string(),
    })
}

fn heart_rate_insight(bpm: Option<f64>) -> Option<VitalInsight> {
    let bpm = bpm?;
    let status = classify_heart_rate(Some(bpm));
    let message = match status {
        VitalStatus::Normal => return None,
        VitalStatus::Critical if bpm > 130.0 => "Severe tachycardia; urgent evaluation recommended",
        VitalStatus::Critical => "Severe bradycardia; urgent evaluation recommended",
        VitalStatus::Warning if bpm > 100.0 => "Resting heart rate elevated; monitor for symptoms",
        VitalStatus::Warning => "Resting heart rate low; monitor for dizziness or fatigue",
    };
    Some(VitalInsight {
        metric: MetricKind::HeartRate,
        status,
        message: message.to_string(),
    })
}

fn temperature_insight(temperature: Option<Temperature>) -> Option<VitalInsight> {
    let temperature = temperature?;
    let status = classify_temperature(Some(temperature));
    let celsius = temperature.to_celsius();
    let message = match status {
        VitalStatus::Normal => return None,
        VitalStatus::Critical if celsius > 40.0 => "Hyperpyrexia; emergency assessment advised",
        VitalStatus::Critical => "Hypothermia range; emergency assessment advised",
        VitalStatus::Warning if celsius > 38.5 => "Fever; monitor and consider antipyretics",
        VitalStatus::Warning => "Temperature below normal range; recheck and keep warm",
    };
    Some(VitalInsight {
        metric: MetricKind::Temperature,
        status,
        message: message.to_string(),
    })
}

fn oxygen_insight(percent: Option<f64>) -> Option<VitalInsight> {
    let percent = percent?;
    let status = classify_oxygen_saturation(Some(percent));
    let message = match status {
        VitalStatus::Normal => return None,
        VitalStatus::Critical => "Severe hypoxemia; supplemental oxygen likely required",
        VitalStatus::Warning => "Oxygen saturation below target; recheck on room air",
    };
    Some(VitalInsight {
        metric: MetricKind::OxygenSaturation,
        status,
        message: message.to_string(),
    })
}

fn respiratory_insight(rate: Option<f64>) -> Option<VitalInsight> {
    let rate = rate?;
    let status = classify_respiratory_rate(Some(rate));
    let message = match status {
        VitalStatus::Normal => return None,
        VitalStatus::Critical if rate > 30.0 => "Severe tachypnea; urgent respiratory assessment",
        VitalStatus::Critical => "Respiratory rate dangerously low; urgent assessment",
        VitalStatus::Warning if rate > 20.0 => "Breathing rate elevated; monitor work of breathing",
        VitalStatus::Warning => "Breathing rate low; monitor alertness",
    };
    Some(VitalInsight {
        metric: MetricKind::RespiratoryRate,
        status,
        message: message.to_string(),
    })
}
