/// Result of a factor table lookup.
///
/// Unknown input never fails: it resolves to [`Factor::Default`], which
/// carries the baseline multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    Known(f64),
    Default,
}

impl Factor {
    pub const BASELINE: f64 = 1.0;

    pub fn value(self) -> f64 {
        match self {
            Factor::Known(value) => value,
            Factor::Default => Self::BASELINE,
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, Factor::Default)
    }
}
