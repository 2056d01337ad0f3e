use crate::{
    key::UnknownKey,
    lifestyle::{DietType, TransportMode},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Regions with a built-in emission factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    Indonesia,
}

impl Region {
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Indonesia => "Indonesia",
        }
    }
}

impl FromStr for Region {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indonesia" | "id" => Ok(Region::Indonesia),
            _ => Err(UnknownKey::new("region", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightClass {
    Domestic,
    International,
}

/// kg CO2 per km travelled, one field per `TransportMode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportFactors {
    pub car: f64,
    pub motorcycle: f64,
    pub bus: f64,
    pub train: f64,
    pub walk_or_bike: f64,
}

impl TransportFactors {
    pub fn get(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => self.car,
            TransportMode::Motorcycle => self.motorcycle,
            TransportMode::Bus => self.bus,
            TransportMode::Train => self.train,
            TransportMode::WalkOrBike => self.walk_or_bike,
        }
    }
}

/// kg CO2 per meal, one field per `DietType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DietFactors {
    pub meat_heavy: f64,
    pub omnivore: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

impl DietFactors {
    pub fn get(&self, diet: DietType) -> f64 {
        match diet {
            DietType::MeatHeavy => self.meat_heavy,
            DietType::Omnivore => self.omnivore,
            DietType::Vegetarian => self.vegetarian,
            DietType::Vegan => self.vegan,
        }
    }
}

/// kg CO2 per flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlightFactors {
    pub domestic: f64,
    pub international: f64,
}

impl FlightFactors {
    pub fn get(&self, class: FlightClass) -> f64 {
        match class {
            FlightClass::Domestic => self.domestic,
            FlightClass::International => self.international,
        }
    }
}

/// Emission coefficients for one region, in kg CO2 per unit of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmissionFactors {
    pub transportation: TransportFactors,
    /// Per kWh.
    pub electricity: f64,
    pub diet: DietFactors,
    /// Per kg of general waste.
    pub waste: f64,
    pub flights: FlightFactors,
    /// Per kg of plastic waste.
    pub plastic: f64,
    /// Per item of clothing.
    pub clothing: f64,
}

impl EmissionFactors {
    /// Every coefficient paired with a dotted key, for table-wide checks and display.
    pub fn entries(&self) -> Vec<(String, f64)> {
        let mut entries = Vec::with_capacity(16);
        for mode in TransportMode::ALL {
            entries.push((format!("transportation.{}", mode.as_str()), self.transportation.get(mode)));
        }
        entries.push(("electricity".to_string(), self.electricity));
        for diet in DietType::ALL {
            entries.push((format!("diet.{}", diet.as_str()), self.diet.get(diet)));
        }
        entries.push(("waste".to_string(), self.waste));
        entries.push(("flights.domestic".to_string(), self.flights.domestic));
        entries.push(("flights.international".to_string(), self.flights.international));
        entries.push(("plastic".to_string(), self.plastic));
        entries.push(("clothing".to_string(), self.clothing));
        entries
    }
}
