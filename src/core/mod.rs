pub mod client;

pub use client::{DumpertClient, RateDirection, RateOutcome};
pub use crate::utils::error::Result;
