use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_country() -> String {
    "Indonesia".to_string()
}

/// Free-text identity shown on the report and attached to submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<PathBuf>,
}
