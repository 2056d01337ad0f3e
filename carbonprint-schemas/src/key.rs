use thiserror::Error;

/// Raised when a text label does not name any variant of one of the fixed enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownKey {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
