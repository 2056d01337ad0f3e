use crate::{category::Category, language::Language};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::fmt;

/// Annual emissions per category, reported in tonnes CO2.
///
/// All seven categories are always present; iteration follows `Category::ALL`.
/// Values are held in kg so the total is summed before the single conversion to
/// tonnes, keeping exact kg totals exact at the rating and offset thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmissionBreakdown {
    kg: [f64; Category::COUNT],
}

const KG_PER_TONNE: f64 = 1000.0;

impl EmissionBreakdown {
    pub fn from_kg(kg: [f64; Category::COUNT]) -> Self {
        Self { kg }
    }

    /// Tonnes for `category`.
    pub fn get(&self, category: Category) -> f64 {
        self.kg[category.index()] / KG_PER_TONNE
    }

    pub fn set(&mut self, category: Category, tonnes: f64) {
        self.kg[category.index()] = tonnes * KG_PER_TONNE;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Tonnes per category, in declaration order.
    pub fn values(&self) -> [f64; Category::COUNT] {
        self.kg.map(|kg| kg / KG_PER_TONNE)
    }

    pub fn total_kg(&self) -> f64 {
        self.kg.iter().sum()
    }

    /// Total tonnes, converted once from the kg sum.
    pub fn total(&self) -> f64 {
        self.total_kg() / KG_PER_TONNE
    }
}

impl Serialize for EmissionBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, tonnes) in self.iter() {
            map.serialize_entry(category.label(), &tonnes)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub breakdown: EmissionBreakdown,
    /// Sum of the breakdown, rounded to two decimals.
    pub total_tonnes: f64,
    pub rating: Rating,
    pub dominant_category: Category,
    pub trees_needed: u64,
    pub recommendations: Vec<String>,
    pub language: Language,
}

impl CalculationResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
