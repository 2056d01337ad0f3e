pub mod calculator;
pub mod error;
pub mod estimation;
pub mod factors;
pub mod labels;
pub mod locale;
pub mod recommendation;
pub mod validation;

pub use calculator::{builder::CalculatorBuilder, Calculator};
pub use error::CarbonError;
