pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{CliConfig, Endpoints};
pub use crate::core::client::{DumpertClient, RateDirection, RateOutcome};
pub use utils::error::{DumpertError, Result};
