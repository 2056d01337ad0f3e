use crate::{calculator::Calculator, error::CarbonError, factors};
use carbonprint_schemas::{
    factors::{EmissionFactors, Region},
    language::Language,
};

/// A fluent builder for constructing a `Calculator`.
///
/// Without explicit factors the built-in table of the selected region is used.
#[derive(Default)]
pub struct CalculatorBuilder {
    region: Region,
    factors: Option<EmissionFactors>,
    language: Language,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Overrides the region's built-in table, e.g. with one loaded from a factor file.
    pub fn with_factors(mut self, factors: EmissionFactors) -> Self {
        self.factors = Some(factors);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// # Errors
    ///
    /// Returns `CarbonError::ConfigError` if the factor table holds a negative or
    /// non-finite coefficient.
    pub fn build(self) -> Result<Calculator, CarbonError> {
        let factors = self
            .factors
            .unwrap_or_else(|| factors::for_region(self.region));
        factors::check(&factors)?;

        Ok(Calculator {
            region: self.region,
            factors,
            language: self.language,
        })
    }
}
