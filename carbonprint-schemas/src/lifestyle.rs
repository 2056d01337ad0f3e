use crate::key::UnknownKey;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Motorcycle,
    Bus,
    Train,
    WalkOrBike,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Motorcycle,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::WalkOrBike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Motorcycle => "motorcycle",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::WalkOrBike => "walk_or_bike",
        }
    }
}

impl FromStr for TransportMode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| UnknownKey::new("transport mode", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    MeatHeavy,
    Omnivore,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 4] = [
        DietType::MeatHeavy,
        DietType::Omnivore,
        DietType::Vegetarian,
        DietType::Vegan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::MeatHeavy => "meat_heavy",
            DietType::Omnivore => "omnivore",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
        }
    }
}

impl FromStr for DietType {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietType::ALL
            .into_iter()
            .find(|diet| diet.as_str() == s.trim())
            .ok_or_else(|| UnknownKey::new("diet type", s))
    }
}

/// The raw lifestyle answers for one calculation.
///
/// Quantities are given per the period in their name (per day, per week, per
/// month, per year); the engine annualizes them. Omitted fields fall back to
/// the calculator form's starting values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleInput {
    pub transport_mode: TransportMode,
    pub daily_commute_km: f64,
    pub flights_domestic_per_year: u32,
    pub flights_international_per_year: u32,
    pub monthly_electricity_kwh: f64,
    pub diet_type: DietType,
    pub meals_per_day: u32,
    pub clothes_purchased_per_year: u32,
    pub plastic_waste_kg_per_week: f64,
    pub general_waste_kg_per_week: f64,
}

impl Default for LifestyleInput {
    fn default() -> Self {
        Self {
            transport_mode: TransportMode::Car,
            daily_commute_km: 10.0,
            flights_domestic_per_year: 0,
            flights_international_per_year: 0,
            monthly_electricity_kwh: 400.0,
            diet_type: DietType::Omnivore,
            meals_per_day: 3,
            clothes_purchased_per_year: 10,
            plastic_waste_kg_per_week: 1.0,
            general_waste_kg_per_week: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_mode_parses_snake_case_labels() {
        assert_eq!("walk_or_bike".parse::<TransportMode>(), Ok(TransportMode::WalkOrBike));
        assert_eq!(" bus ".parse::<TransportMode>(), Ok(TransportMode::Bus));
        let err = "rocket".parse::<TransportMode>().unwrap_err();
        assert_eq!(err.kind, "transport mode");
        assert_eq!(err.value, "rocket");
    }

    #[test]
    fn diet_type_rejects_unknown_label() {
        assert_eq!("meat_heavy".parse::<DietType>(), Ok(DietType::MeatHeavy));
        assert!("carnivore".parse::<DietType>().is_err());
    }

    #[test]
    fn omitted_fields_take_form_defaults() {
        let input: LifestyleInput =
            serde_json::from_str(r#"{ "transport_mode": "train", "meals_per_day": 2 }"#).unwrap();
        assert_eq!(input.transport_mode, TransportMode::Train);
        assert_eq!(input.meals_per_day, 2);
        assert_eq!(input.monthly_electricity_kwh, 400.0);
        assert_eq!(input.diet_type, DietType::Omnivore);
    }
}
