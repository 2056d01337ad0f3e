//! Range checks applied before a calculation is allowed to start.

use crate::error::CarbonError;
use carbonprint_schemas::{lifestyle::LifestyleInput, user::UserProfile};

pub const MAX_DAILY_COMMUTE_KM: f64 = 100.0;
pub const MAX_MONTHLY_ELECTRICITY_KWH: f64 = 2000.0;
pub const MEALS_PER_DAY: (u32, u32) = (1, 5);
pub const MAX_CLOTHES_PER_YEAR: u32 = 100;
pub const MAX_PLASTIC_KG_PER_WEEK: f64 = 10.0;
pub const MAX_GENERAL_WASTE_KG_PER_WEEK: f64 = 50.0;
pub const AGE_RANGE: (u32, u32) = (5, 120);

fn check_real(field: &'static str, value: f64, max: f64) -> Result<(), CarbonError> {
    if !value.is_finite() {
        return Err(CarbonError::InvalidInput {
            field,
            reason: format!("{} is not a finite number", value),
        });
    }
    if !(0.0..=max).contains(&value) {
        return Err(CarbonError::InvalidInput {
            field,
            reason: format!("{} is outside [0, {}]", value, max),
        });
    }
    Ok(())
}

fn check_int(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), CarbonError> {
    if !(min..=max).contains(&value) {
        return Err(CarbonError::InvalidInput {
            field,
            reason: format!("{} is outside [{}, {}]", value, min, max),
        });
    }
    Ok(())
}

/// Enforces the declared bounds of every lifestyle field.
///
/// Flight counts are unbounded above and need no check beyond their unsigned type.
pub fn validate(input: &LifestyleInput) -> Result<(), CarbonError> {
    check_real("daily_commute_km", input.daily_commute_km, MAX_DAILY_COMMUTE_KM)?;
    check_real(
        "monthly_electricity_kwh",
        input.monthly_electricity_kwh,
        MAX_MONTHLY_ELECTRICITY_KWH,
    )?;
    check_int("meals_per_day", input.meals_per_day, MEALS_PER_DAY)?;
    check_int(
        "clothes_purchased_per_year",
        input.clothes_purchased_per_year,
        (0, MAX_CLOTHES_PER_YEAR),
    )?;
    check_real(
        "plastic_waste_kg_per_week",
        input.plastic_waste_kg_per_week,
        MAX_PLASTIC_KG_PER_WEEK,
    )?;
    check_real(
        "general_waste_kg_per_week",
        input.general_waste_kg_per_week,
        MAX_GENERAL_WASTE_KG_PER_WEEK,
    )?;
    Ok(())
}

pub fn validate_profile(profile: &UserProfile) -> Result<(), CarbonError> {
    if profile.name.trim().is_empty() {
        return Err(CarbonError::InvalidInput {
            field: "name",
            reason: "must not be empty".to_string(),
        });
    }
    check_int("age", profile.age, AGE_RANGE)
}
