//! Emission factor tables: the built-in regional table and YAML-loaded overrides.

use crate::error::CarbonError;
use carbonprint_schemas::{
    factors::{DietFactors, EmissionFactors, FlightFactors, Region, TransportFactors},
    file_formats::FactorFile,
};
use std::{fs, path::Path};
use tracing::debug;

/// Returns the built-in coefficient table for `region`.
pub fn for_region(region: Region) -> EmissionFactors {
    match region {
        Region::Indonesia => indonesia(),
    }
}

fn indonesia() -> EmissionFactors {
    EmissionFactors {
        transportation: TransportFactors {
            car: 0.21,
            motorcycle: 0.09,
            bus: 0.105,
            train: 0.045,
            walk_or_bike: 0.0,
        },
        electricity: 0.82,
        diet: DietFactors {
            meat_heavy: 2.5,
            omnivore: 1.5,
            vegetarian: 1.0,
            vegan: 0.6,
        },
        waste: 0.1,
        flights: FlightFactors {
            domestic: 250.0,
            international: 900.0,
        },
        plastic: 6.0,
        clothing: 20.0,
    }
}

/// Rejects tables with negative or non-finite coefficients.
pub fn check(factors: &EmissionFactors) -> Result<(), CarbonError> {
    for (key, value) in factors.entries() {
        if !value.is_finite() || value < 0.0 {
            return Err(CarbonError::ConfigError(format!(
                "emission factor '{}' must be a finite non-negative number, got {}",
                key, value
            )));
        }
    }
    Ok(())
}

/// Parses a factor file. A missing coefficient fails the parse rather than defaulting to zero.
pub fn from_yaml_str(content: &str, origin: &str) -> Result<(Region, EmissionFactors), CarbonError> {
    let file: FactorFile = serde_yaml::from_str(content)
        .map_err(|e| CarbonError::YamlParsing(origin.to_string(), e))?;
    check(&file.factors)?;
    debug!(origin, region = ?file.region, schema_version = %file.schema_version, "loaded emission factors");
    Ok((file.region, file.factors))
}

pub fn load(path: &Path) -> Result<(Region, EmissionFactors), CarbonError> {
    let origin = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| CarbonError::FileIO(origin.clone(), e))?;
    from_yaml_str(&content, &origin)
}
