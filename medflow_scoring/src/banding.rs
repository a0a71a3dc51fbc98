/// How a band's upper bound admits a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Match when `score < upper`. A score exactly on the bound falls through
    /// to the next band (or the fallback).
    Below,
    /// Match when `score <= upper`.
    AtOrBelow,
}

/// One band: scores admitted by `upper` carry `label`.
#[derive(Debug, Clone, Copy)]
pub struct Band<L> {
    pub upper: f64,
    pub label: L,
}

/// Ordered band table mapping a score to a status label.
///
/// Bands are listed ascending by `upper` and scanned top-down; the first band
/// whose bound admits the score wins. A score no band admits (including NaN)
/// gets the fallback label.
#[derive(Debug, Clone, Copy)]
pub struct BandTable<L: 'static> {
    pub boundary: Boundary,
    pub bands: &'static [Band<L>],
    pub fallback: L,
}

impl<L: Copy> BandTable<L> {
    pub fn classify(&self, score: f64) -> L {
        for band in self.bands {
            let admitted = match self.boundary {
                Boundary::Below => score < band.upper,
                Boundary::AtOrBelow => score <= band.upper,
            };
            if admitted {
                return band.label;
            }
        }
        self.fallback
    }

    /// Band the score unless the caller's override predicate already fired.
    ///
    /// The predicate itself lives with the caller (it usually reads record
    /// flags, not the score); this just honors its result unconditionally.
    pub fn classify_with_override(&self, score: f64, override_label: Option<L>) -> L {
        match override_label {
            Some(label) => label,
            None => self.classify(score),
        }
    }
}
