use medflow_scoring::{Band, BandTable, Boundary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-band quality label shared by the higher-is-better domains
/// (fitness, wellness, preventive care).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QualityBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityBand::Poor => "poor",
            QualityBand::Fair => "fair",
            QualityBand::Good => "good",
            QualityBand::Excellent => "excellent",
        }
    }
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict bounds: a score of exactly 8.0 is excellent, 7.999... is good.
pub static QUALITY_BANDS: BandTable<QualityBand> = BandTable {
    boundary: Boundary::Below,
    bands: &[
        Band {
            upper: 4.0,
            label: QualityBand::Poor,
        },
        Band {
            upper: 6.0,
            label: QualityBand::Fair,
        },
        Band {
            upper: 8.0,
            label: QualityBand::Good,
        },
    ],
    fallback: QualityBand::Excellent,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_bounds_promote() {
        assert_eq!(QUALITY_BANDS.classify(3.999), QualityBand::Poor);
        assert_eq!(QUALITY_BANDS.classify(4.0), QualityBand::Fair);
        assert_eq!(QUALITY_BANDS.classify(6.0), QualityBand::Good);
        assert_eq!(QUALITY_BANDS.classify(8.0), QualityBand::Excellent);
    }

    #[test]
    fn labels_order_by_quality() {
        assert!(QualityBand::Poor < QualityBand::Fair);
        assert!(QualityBand::Good < QualityBand::Excellent);
    }
}
