//! Record entities for the five MedFlow health domains.
//!
//! Each record is a plain serde struct (camelCase on the wire, scored
//! attributes all optional) paired with a domain weight table and a band
//! table. `score()` is a sparse weighted average over whatever attributes the
//! record carries; `status()` bands that score into the domain's label set.
//! Mental health additionally short-circuits to critical on safety flags,
//! whatever the score says.
//!
//! Nothing is cached: score and status are recomputed from the current
//! fields on every call, so mutating a field can never leave a stale label
//! behind.

pub mod fitness;
pub mod mental_health;
pub mod preventive_care;
pub mod quality;
pub mod symptom;
pub mod wellness;

pub use fitness::{FitnessRecord, Intensity};
pub use mental_health::{MentalHealthRecord, MentalHealthStatus};
pub use preventive_care::PreventiveCareRecord;
pub use quality::QualityBand;
pub use symptom::{SymptomRecord, SymptomStatus};
pub use wellness::WellnessRecord;
