//! Scenario report
//!
//! Everything a scenario run computed, rendered either as the playground's
//! console sentences or as JSON.

use crate::error::PlaygroundError;
use serde::Serialize;
use std::fmt::Write as _;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

/// Values computed by one scenario run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub volunteers_sorted: Vec<i64>,
    pub volunteers_sorted_in_place: Vec<i64>,
    pub stoplights: i64,
    pub plans_approved: usize,
    pub plans_rejected: usize,
    /// Last value returned by the tracker before it was aliased
    pub current_population: i64,
    /// Tracker total after growth through the alias
    pub tracked_population: i64,
    pub big_city_population: i64,
    pub projected_populations: Vec<i64>,
    pub big_projections: Vec<i64>,
    pub big_projection_total: i64,
    pub total_projection: i64,
}

impl Report {
    /// Human-readable report, one line per result
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "Volunteers sorted: {:?}", self.volunteers_sorted);
        let _ = writeln!(
            out,
            "Volunteers sorted in place: {:?}",
            self.volunteers_sorted_in_place
        );
        let _ = writeln!(
            out,
            "Town plans approved: {}, rejected: {}",
            self.plans_approved, self.plans_rejected
        );
        let _ = writeln!(out, "Knowhere has {} stoplights.", self.stoplights);
        let _ = writeln!(out, "current population is: {}", self.current_population);
        let _ = writeln!(out, "tracked population is: {}", self.tracked_population);
        let _ = writeln!(out, "big city population is: {}", self.big_city_population);
        let _ = writeln!(
            out,
            "Projected populations: {:?}",
            self.projected_populations
        );
        let _ = writeln!(out, "Big projections: {:?}", self.big_projections);
        let _ = writeln!(out, "Big projection total: {}", self.big_projection_total);
        let _ = writeln!(out, "Total projection: {}", self.total_projection);
        out
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, PlaygroundError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, PlaygroundError> {
        match format {
            ReportFormat::Human => Ok(self.to_human()),
            ReportFormat::Json => self.to_json(),
        }
    }
}
