//! Vital-sign primitives for MedFlow Connect.
//!
//! A `VitalsReading` carries whatever measurements an encounter produced;
//! every field is optional. `classify_reading` grades each present metric
//! against fixed clinical thresholds (strict comparisons throughout, absent
//! metrics count as normal) and folds the per-metric grades into an overall
//! `VitalStatus` by worst-of. `insights` turns the same thresholds into
//! short pieces of clinical copy for the UI.

pub mod body;
pub mod classify;
pub mod insights;
pub mod reading;
pub mod status;
pub mod units;

pub use body::{bmi, categorize_bmi, BmiCategory};
pub use classify::{
    classify_blood_pressure, classify_heart_rate, classify_oxygen_saturation, classify_reading,
    classify_respiratory_rate, classify_temperature, MetricKind,
};
pub use insights::{reading_insights, VitalInsight};
pub use reading::VitalsReading;
pub use status::VitalStatus;
pub use units::{TempUnit, Temperature};
