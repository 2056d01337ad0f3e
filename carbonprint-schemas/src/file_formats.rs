use crate::{
    factors::{EmissionFactors, Region},
    lifestyle::LifestyleInput,
    user::UserProfile,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct InputFile {
    pub schema_version: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub lifestyle: LifestyleInput,
}

#[derive(Debug, Deserialize)]
pub struct FactorFile {
    pub schema_version: String,
    pub region: Region,
    pub factors: EmissionFactors,
}
