pub mod shelter;

pub use crate::domain::model::{AnimalRecord, Species};
pub use crate::domain::ports::AnimalStore;
pub use crate::utils::error::Result;
