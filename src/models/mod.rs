pub mod enums;
pub mod patient;
pub mod records;

pub use enums::*;
pub use patient::*;
pub use records::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
