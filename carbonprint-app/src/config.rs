use anyhow::{bail, Context, Result};
use carbonprint_core::{factors, labels, validation};
use carbonprint_schemas::{
    factors::{EmissionFactors, Region},
    file_formats::InputFile,
    lifestyle::LifestyleInput,
    user::UserProfile,
};
use std::{fs, path::Path};
use tracing::{info, warn};

/// Everything loaded from disk for one calculator run.
#[derive(Debug)]
pub struct RunConfig {
    pub user: Option<UserProfile>,
    pub lifestyle: LifestyleInput,
    pub region: Region,
    /// `None` selects the region's built-in table.
    pub factors: Option<EmissionFactors>,
}

/// Command-line labels that replace values from the input file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub region: Option<String>,
    pub transport_mode: Option<String>,
    pub diet_type: Option<String>,
}

impl RunConfig {
    pub fn load(
        input_path: Option<&Path>,
        factors_path: Option<&Path>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let (user, mut lifestyle) = match input_path {
            Some(path) => {
                let input = load_input_file(path)?;
                (input.user, input.lifestyle)
            }
            None => {
                warn!("no input file given, using the calculator's default answers");
                (None, LifestyleInput::default())
            }
        };

        if let Some(label) = &overrides.transport_mode {
            lifestyle.transport_mode = labels::parse(label).context("Invalid --transport-mode")?;
        }
        if let Some(label) = &overrides.diet_type {
            lifestyle.diet_type = labels::parse(label).context("Invalid --diet")?;
        }
        let requested_region: Option<Region> = overrides
            .region
            .as_deref()
            .map(labels::parse::<Region>)
            .transpose()
            .context("Invalid --region")?;

        // A blank name counts as not filled in, like an empty form field.
        let user = user.filter(|u| !u.name.trim().is_empty());
        if let Some(profile) = &user {
            validation::validate_profile(profile).context("Invalid user profile")?;
        }
        validation::validate(&lifestyle).context("Invalid lifestyle input")?;

        let (region, factors) = match factors_path {
            Some(path) => {
                let (region, table) = factors::load(path)
                    .with_context(|| format!("Failed to load emission factors from {:?}", path))?;
                if let Some(requested) = requested_region.filter(|r| *r != region) {
                    bail!(
                        "--region {} does not match the factor file's region {}",
                        requested.display_name(),
                        region.display_name()
                    );
                }
                (region, Some(table))
            }
            None => (requested_region.unwrap_or_default(), None),
        };

        Ok(Self {
            user,
            lifestyle,
            region,
            factors,
        })
    }
}

pub fn load_input_file(path: &Path) -> Result<InputFile> {
    info!(path = %path.display(), "loading lifestyle input");
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {:?}", path))?;
    parse_input(&content).with_context(|| format!("Failed to parse input file {:?}", path))
}

fn parse_input(content: &str) -> Result<InputFile> {
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbonprint_schemas::lifestyle::{DietType, TransportMode};
    use std::io::Write;

    const INPUT: &str = r#"
schema_version: "1.0"
user:
  name: Sari
  age: 31
lifestyle:
  transport_mode: motorcycle
  daily_commute_km: 25
  flights_domestic_per_year: 2
  diet_type: vegetarian
"#;

    #[test]
    fn parses_input_with_partial_lifestyle() {
        let input = parse_input(INPUT).unwrap();
        let user = input.user.unwrap();
        assert_eq!(user.name, "Sari");
        assert_eq!(user.country, "Indonesia");
        assert_eq!(input.lifestyle.transport_mode, TransportMode::Motorcycle);
        assert_eq!(input.lifestyle.diet_type, DietType::Vegetarian);
        assert_eq!(input.lifestyle.meals_per_day, 3);
    }

    #[test]
    fn unknown_transport_mode_fails_to_parse() {
        let bad = INPUT.replace("motorcycle", "hovercraft");
        assert!(parse_input(&bad).is_err());
    }

    #[test]
    fn load_rejects_out_of_range_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", INPUT.replace("25", "250")).unwrap();
        let err = RunConfig::load(Some(file.path()), None, &Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("daily_commute_km"));
    }

    #[test]
    fn blank_name_drops_the_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", INPUT.replace("Sari", "\"\"")).unwrap();
        let config = RunConfig::load(Some(file.path()), None, &Overrides::default()).unwrap();
        assert!(config.user.is_none());
        assert!(config.factors.is_none());
    }

    #[test]
    fn defaults_without_input_file() {
        let config = RunConfig::load(None, None, &Overrides::default()).unwrap();
        assert_eq!(config.lifestyle, LifestyleInput::default());
        assert_eq!(config.region, Region::Indonesia);
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", INPUT).unwrap();
        let overrides = Overrides {
            region: Some("id".to_string()),
            transport_mode: Some("train".to_string()),
            diet_type: Some("vegan".to_string()),
        };
        let config = RunConfig::load(Some(file.path()), None, &overrides).unwrap();
        assert_eq!(config.lifestyle.transport_mode, TransportMode::Train);
        assert_eq!(config.lifestyle.diet_type, DietType::Vegan);
        assert_eq!(config.lifestyle.daily_commute_km, 25.0);
        assert_eq!(config.region, Region::Indonesia);
    }

    #[test]
    fn unknown_override_label_is_reported() {
        let overrides = Overrides {
            transport_mode: Some("hovercraft".to_string()),
            ..Overrides::default()
        };
        let err = RunConfig::load(None, None, &overrides).unwrap_err();
        assert!(format!("{err:#}").contains("unknown transport mode 'hovercraft'"));

        let overrides = Overrides {
            region: Some("mars".to_string()),
            ..Overrides::default()
        };
        let err = RunConfig::load(None, None, &overrides).unwrap_err();
        assert!(format!("{err:#}").contains("unknown region 'mars'"));
    }
}
