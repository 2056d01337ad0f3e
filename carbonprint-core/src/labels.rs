use crate::error::CarbonError;
use carbonprint_schemas::key::UnknownKey;
use std::str::FromStr;

/// Parses a user-facing label (region, transport mode, diet type, ...) into its enum.
pub fn parse<T>(label: &str) -> Result<T, CarbonError>
where
    T: FromStr<Err = UnknownKey>,
{
    Ok(label.trim().parse::<T>()?)
}
