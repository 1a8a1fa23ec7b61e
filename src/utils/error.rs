use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input stream closed before a value was entered")]
    InputClosedError,

    #[error("Invalid species: {value}")]
    InvalidSpeciesError { value: String },

    #[error("Invalid number: {0}")]
    InvalidNumberError(#[from] std::num::ParseIntError),
}

pub type Result<T> = std::result::Result<T, ShelterError>;
