use serde::{Deserialize, Serialize};

/// Temperature scale a reading was taken in. Wire form is the single letter
/// used across MedFlow payloads (`"c"` / `"f"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempUnit {
    #[serde(rename = "c")]
    Celsius,
    #[serde(rename = "f")]
    Fahrenheit,
}

/// A body temperature tagged with its scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
    pub unit: TempUnit,
}

impl Temperature {
    pub fn celsius(value: f64) -> Self {
        Self {
            value,
            unit: TempUnit::Celsius,
        }
    }

    pub fn fahrenheit(value: f64) -> Self {
        Self {
            value,
            unit: TempUnit::Fahrenheit,
        }
    }

    /// Value on the Celsius scale; classification always happens in Celsius.
    pub fn to_celsius(&self) -> f64 {
        match self.unit {
            TempUnit::Celsius => self.value,
            TempUnit::Fahrenheit => (self.value - 32.0) * 5.0 / 9.0,
        }
    }
}

/// Pounds to kilograms.
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * 0.453_592_37
}

/// Inches to centimeters.
pub fn in_to_cm(inches: f64) -> f64 {
    inches * 2.54
}
