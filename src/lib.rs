pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::menu::MenuSession;
pub use crate::config::CliConfig;
pub use crate::core::shelter::Shelter;
pub use crate::domain::model::{AnimalRecord, Species};
pub use crate::domain::ports::AnimalStore;
pub use crate::utils::error::{Result, ShelterError};
