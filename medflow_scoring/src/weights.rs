/// Ordered `(attribute, weight)` table for one health domain.
///
/// Declaration order is significant: `composite_score` iterates the table in
/// order, which keeps floating-point accumulation deterministic across runs.
/// Weights need not sum to 1; the scorer renormalizes by the weight of the
/// attributes that are present.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable {
    entries: &'static [(&'static str, f64)],
}

impl WeightTable {
    pub const fn new(entries: &'static [(&'static str, f64)]) -> Self {
        Self { entries }
    }

    /// Weight for a named attribute, if the table defines one.
    pub fn weight(&self, attribute: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, weight)| *weight)
    }

    /// Sum of every weight in the table.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
