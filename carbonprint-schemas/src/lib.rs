pub mod category;
pub mod factors;
pub mod file_formats;
pub mod key;
pub mod language;
pub mod lifestyle;
pub mod result;
pub mod user;
