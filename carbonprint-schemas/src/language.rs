use crate::key::UnknownKey;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Indonesian,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Indonesian => "Bahasa Indonesia",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "id" | "bahasa" | "indonesian" | "bahasa indonesia" => Ok(Language::Indonesian),
            _ => Err(UnknownKey::new("language", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_codes_and_names() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert_eq!("Bahasa Indonesia".parse::<Language>(), Ok(Language::Indonesian));
        assert_eq!("id".parse::<Language>(), Ok(Language::Indonesian));
        assert!("fr".parse::<Language>().is_err());
    }
}
