pub mod builder;

use crate::{
    error::CarbonError,
    estimation::{classifier, engine, offset},
    recommendation, validation,
};
use carbonprint_schemas::{
    factors::{EmissionFactors, Region},
    language::Language,
    lifestyle::LifestyleInput,
    result::CalculationResult,
};
use tracing::info;

/// Runs the full estimation pipeline against one factor table and language.
///
/// Holds no mutable state: the same input always produces the same result.
#[derive(Debug, Clone)]
pub struct Calculator {
    pub(super) region: Region,
    pub(super) factors: EmissionFactors,
    pub(super) language: Language,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Calculator {
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn calculate(&self, input: &LifestyleInput) -> Result<CalculationResult, CarbonError> {
        validation::validate(input)?;

        let breakdown = engine::estimate(input, &self.factors);
        let (rating, dominant_category) = classifier::classify(&breakdown);
        let total = breakdown.total();
        let trees_needed = offset::trees_for_kg(breakdown.total_kg());
        let recommendations = recommendation::recommend(dominant_category, self.language);

        let result = CalculationResult {
            breakdown,
            total_tonnes: round2(total),
            rating,
            dominant_category,
            trees_needed,
            recommendations,
            language: self.language,
        };
        info!(
            region = self.region.display_name(),
            total_tonnes = result.total_tonnes,
            rating = %result.rating,
            dominant = result.dominant_category.label(),
            trees = result.trees_needed,
            "carbon footprint calculated"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalculatorBuilder;
    use carbonprint_schemas::{category::Category, result::Rating};

    #[test]
    fn reference_scenario_end_to_end() {
        let calculator = CalculatorBuilder::new().build().unwrap();
        let result = calculator.calculate(&LifestyleInput::default()).unwrap();
        assert_eq!(result.total_tonnes, 6.88);
        assert_eq!(result.rating, Rating::Medium);
        assert_eq!(result.dominant_category, Category::Electricity);
        assert_eq!(result.trees_needed, 327);
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.language, Language::English);
    }

    #[test]
    fn invalid_input_fails_before_estimation() {
        let calculator = CalculatorBuilder::new().build().unwrap();
        let input = LifestyleInput {
            daily_commute_km: 250.0,
            ..LifestyleInput::default()
        };
        assert!(matches!(
            calculator.calculate(&input),
            Err(CarbonError::InvalidInput { field: "daily_commute_km", .. })
        ));
    }

    #[test]
    fn builder_rejects_bad_factor_table() {
        let mut factors = crate::factors::for_region(Region::Indonesia);
        factors.plastic = f64::INFINITY;
        let err = CalculatorBuilder::new().with_factors(factors).build().unwrap_err();
        assert!(matches!(err, CarbonError::ConfigError(_)));
    }

    #[test]
    fn language_flows_into_recommendations() {
        let calculator = CalculatorBuilder::new()
            .with_language(Language::Indonesian)
            .build()
            .unwrap();
        let result = calculator.calculate(&LifestyleInput::default()).unwrap();
        assert_eq!(
            result.recommendations[0],
            "Gunakan lampu LED hemat energi dan cabut perangkat elektronik jika tidak digunakan."
        );
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round2(6.883), 6.88);
        assert_eq!(round2(2.999), 3.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
