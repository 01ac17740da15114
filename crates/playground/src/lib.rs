//! Knowhere playground
//!
//! Runs the closures and higher-order function demonstrations from
//! `knowhere-core` as a configurable scenario and reports the results.
//!
//! # Modules
//!
//! - `config`: Scenario inputs (TOML, merged over embedded defaults)
//! - `scenario`: Runs the demonstrations in order
//! - `report`: Human and JSON rendering of the results
//! - `error`: Errors raised while loading or rendering

pub mod config;
pub mod error;
pub mod report;
pub mod scenario;

pub use config::ScenarioConfig;
pub use error::PlaygroundError;
pub use report::{Report, ReportFormat};

use std::path::Path;

/// Load a scenario (defaults merged with the optional file) and run it
pub fn run_scenario(config_path: Option<&Path>) -> Result<Report, PlaygroundError> {
    let config = ScenarioConfig::load(config_path)?;
    Ok(scenario::run(&config))
}
