use carbonprint_schemas::{
    category::Category,
    result::{EmissionBreakdown, Rating},
};

/// Lower bound (inclusive) of the Medium tier, in tonnes CO2 per year.
pub const MEDIUM_THRESHOLD_TONNES: f64 = 3.0;
/// Lower bound (inclusive) of the High tier, in tonnes CO2 per year.
pub const HIGH_THRESHOLD_TONNES: f64 = 7.0;

pub fn rate(total_tonnes: f64) -> Rating {
    if total_tonnes < MEDIUM_THRESHOLD_TONNES {
        Rating::Low
    } else if total_tonnes < HIGH_THRESHOLD_TONNES {
        Rating::Medium
    } else {
        Rating::High
    }
}

/// The category with the largest value. Ties keep the earliest category in declaration order.
pub fn dominant_category(breakdown: &EmissionBreakdown) -> Category {
    let mut best = (Category::ALL[0], breakdown.get(Category::ALL[0]));
    for (category, value) in breakdown.iter().skip(1) {
        if value > best.1 {
            best = (category, value);
        }
    }
    best.0
}

pub fn classify(breakdown: &EmissionBreakdown) -> (Rating, Category) {
    (rate(breakdown.total()), dominant_category(breakdown))
}
