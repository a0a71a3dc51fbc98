//! Scoring primitives shared by the MedFlow health-domain records.
//!
//! Two pieces:
//! - `composite_score`: a weighted average over whichever attributes a record
//!   actually carries, renormalized by the weight of the present attributes so
//!   sparse records stay comparable to complete ones.
//! - `BandTable`: ordered upper-bound tables that turn a score into a domain
//!   status label, with an optional caller-evaluated override for
//!   safety-critical short-circuits.

pub mod banding;
pub mod composite;
pub mod weights;

pub use banding::{Band, BandTable, Boundary};
pub use composite::composite_score;
pub use weights::WeightTable;
