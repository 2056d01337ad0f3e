use carbonprint_schemas::{
    category::Category,
    factors::{EmissionFactors, FlightClass},
    lifestyle::LifestyleInput,
    result::EmissionBreakdown,
};
use tracing::debug;

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const KG_PER_TONNE: f64 = 1000.0;

/// Annual emissions per category in kg CO2, before conversion to tonnes.
fn annual_kg(input: &LifestyleInput, factors: &EmissionFactors) -> [f64; Category::COUNT] {
    let yearly_distance_km = input.daily_commute_km * DAYS_PER_YEAR;
    let yearly_kwh = input.monthly_electricity_kwh * MONTHS_PER_YEAR;
    let yearly_meals = f64::from(input.meals_per_day) * DAYS_PER_YEAR;
    let yearly_plastic_kg = input.plastic_waste_kg_per_week * WEEKS_PER_YEAR;
    let yearly_waste_kg = input.general_waste_kg_per_week * WEEKS_PER_YEAR;

    let mut kg = [0.0; Category::COUNT];
    kg[Category::Transportation.index()] =
        yearly_distance_km * factors.transportation.get(input.transport_mode);
    kg[Category::Flights.index()] = f64::from(input.flights_domestic_per_year)
        * factors.flights.get(FlightClass::Domestic)
        + f64::from(input.flights_international_per_year)
            * factors.flights.get(FlightClass::International);
    kg[Category::Electricity.index()] = yearly_kwh * factors.electricity;
    kg[Category::Diet.index()] = factors.diet.get(input.diet_type) * yearly_meals;
    kg[Category::Clothing.index()] = f64::from(input.clothes_purchased_per_year) * factors.clothing;
    kg[Category::Plastic.index()] = yearly_plastic_kg * factors.plastic;
    kg[Category::Waste.index()] = yearly_waste_kg * factors.waste;
    kg
}

/// Converts a lifestyle record into annual emissions per category, in tonnes.
///
/// Input bounds are not re-checked here; see `validation::validate`.
pub fn estimate(input: &LifestyleInput, factors: &EmissionFactors) -> EmissionBreakdown {
    let breakdown = EmissionBreakdown::from_kg(annual_kg(input, factors));
    for (category, value) in breakdown.iter() {
        debug!(category = category.label(), tonnes = value, "estimated category emissions");
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors;
    use carbonprint_schemas::{
        factors::Region,
        lifestyle::{DietType, TransportMode},
    };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn reference_scenario_matches_hand_computation() {
        let breakdown = estimate(&LifestyleInput::default(), &factors::for_region(Region::Indonesia));
        assert!(approx(breakdown.get(Category::Transportation), 0.7665));
        assert!(approx(breakdown.get(Category::Flights), 0.0));
        assert!(approx(breakdown.get(Category::Electricity), 3.936));
        assert!(approx(breakdown.get(Category::Diet), 1.6425));
        assert!(approx(breakdown.get(Category::Clothing), 0.2));
        assert!(approx(breakdown.get(Category::Plastic), 0.312));
        assert!(approx(breakdown.get(Category::Waste), 0.026));
        assert!(approx(breakdown.total(), 6.883));
    }

    #[test]
    fn total_lands_exactly_on_whole_kg_sums() {
        let input = LifestyleInput {
            transport_mode: TransportMode::Car,
            daily_commute_km: 0.0,
            flights_domestic_per_year: 0,
            flights_international_per_year: 1,
            monthly_electricity_kwh: 400.0,
            diet_type: DietType::Vegan,
            meals_per_day: 2,
            clothes_purchased_per_year: 85,
            plastic_waste_kg_per_week: 0.0,
            general_waste_kg_per_week: 5.0,
        };
        let breakdown = estimate(&input, &factors::for_region(Region::Indonesia));
        assert_eq!(breakdown.total_kg(), 7000.0);
        assert_eq!(breakdown.total(), 7.0);
    }

    #[test]
    fn flights_combine_both_classes() {
        let input = LifestyleInput {
            flights_domestic_per_year: 2,
            flights_international_per_year: 1,
            ..LifestyleInput::default()
        };
        let breakdown = estimate(&input, &factors::for_region(Region::Indonesia));
        assert!(approx(breakdown.get(Category::Flights), 1.4));
    }

    #[test]
    fn coefficient_follows_selected_mode_and_diet() {
        let f = factors::for_region(Region::Indonesia);
        let walker = LifestyleInput {
            transport_mode: TransportMode::WalkOrBike,
            diet_type: DietType::Vegan,
            meals_per_day: 1,
            ..LifestyleInput::default()
        };
        let breakdown = estimate(&walker, &f);
        assert_eq!(breakdown.get(Category::Transportation), 0.0);
        assert!(approx(breakdown.get(Category::Diet), 0.6 * 365.0 / 1000.0));
    }

    #[test]
    fn zero_activity_yields_all_zero_categories() {
        let idle = LifestyleInput {
            daily_commute_km: 0.0,
            monthly_electricity_kwh: 0.0,
            diet_type: DietType::Vegan,
            meals_per_day: 1,
            clothes_purchased_per_year: 0,
            plastic_waste_kg_per_week: 0.0,
            general_waste_kg_per_week: 0.0,
            ..LifestyleInput::default()
        };
        let breakdown = estimate(&idle, &factors::for_region(Region::Indonesia));
        assert_eq!(breakdown.iter().count(), Category::COUNT);
        for (category, value) in breakdown.iter() {
            if category != Category::Diet {
                assert_eq!(value, 0.0, "{category} should be zero");
            }
        }
    }
}
