use crate::key::UnknownKey;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The seven emission categories, in their fixed declaration order.
///
/// The order matters: breakdowns iterate in it and ties for the dominant
/// category are broken by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Transportation,
    Flights,
    Electricity,
    Diet,
    Clothing,
    Plastic,
    Waste,
}

impl Category {
    pub const COUNT: usize = 7;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Transportation,
        Category::Flights,
        Category::Electricity,
        Category::Diet,
        Category::Clothing,
        Category::Plastic,
        Category::Waste,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Flights => "Flights",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
            Category::Clothing => "Clothing",
            Category::Plastic => "Plastic",
            Category::Waste => "Waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKey::new("category", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn labels_parse_back_case_insensitively() {
        assert_eq!("electricity".parse::<Category>(), Ok(Category::Electricity));
        assert_eq!("Waste".parse::<Category>(), Ok(Category::Waste));
        assert!("Heating".parse::<Category>().is_err());
    }
}
