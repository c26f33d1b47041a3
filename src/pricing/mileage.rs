/// Upper bounds (inclusive) of each mileage bracket with its multiplier.
const BRACKETS: [(u32, f64); 3] = [(5_000, 0.5), (10_000, 1.0), (20_000, 1.5)];

const ABOVE_TOP_BRACKET: f64 = 2.0;

/// Maps annual kilometers to the mileage multiplier.
///
/// Negative mileage is rejected before it gets here; the type keeps it out.
pub fn mileage_factor(kilometers: u32) -> f64 {
    BRACKETS
        .iter()
        .find(|(upper, _)| kilometers <= *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(ABOVE_TOP_BRACKET)
}
