//! Scenario configuration
//!
//! The scenario inputs live in TOML. An embedded default reproduces the
//! classic playground values; a user file is merged over it key by key, so a
//! file containing only
//!
//! ```toml
//! [population]
//! initial = 100
//! ```
//!
//! keeps every other default. Unknown keys are rejected.

use crate::error::PlaygroundError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Embedded default scenario
pub static DEFAULT_SCENARIO: &str = include_str!("scenario.toml");

/// Lists sorted by the volunteer demo
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolunteerConfig {
    pub counts: Vec<i64>,
}

/// Inputs for the town planner demo
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoplightConfig {
    /// Stoplights before any plan runs
    pub initial: i64,
    /// Lights added by every approved plan
    pub lights_per_plan: i64,
    /// A budget must be strictly above this to be approved
    pub budget_threshold: i64,
    /// Budgets submitted to the planner, in order
    pub budgets: Vec<i64>,
}

/// Inputs for one population tracker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    pub initial: i64,
    pub growth: Vec<i64>,
    /// Growth applied through an alias of the tracker
    #[serde(default)]
    pub alias_growth: Vec<i64>,
}

/// Inputs for the map/filter/reduce demo
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrecinctConfig {
    pub populations: Vec<i64>,
    pub multiplier: i64,
    /// Projections strictly above this count as big
    pub big_threshold: i64,
}

/// Complete scenario configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub volunteers: VolunteerConfig,
    pub stoplights: StoplightConfig,
    pub population: TrackerConfig,
    pub big_city: TrackerConfig,
    pub precincts: PrecinctConfig,
}

impl ScenarioConfig {
    /// Parse a complete scenario from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, PlaygroundError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load the embedded default scenario
    pub fn default_config() -> Result<Self, PlaygroundError> {
        Self::from_toml(DEFAULT_SCENARIO)
    }

    /// Merge a (possibly partial) TOML document over the defaults
    pub fn with_overrides(overrides: &str) -> Result<Self, PlaygroundError> {
        let mut base: toml::Table = toml::from_str(DEFAULT_SCENARIO)?;
        let user: toml::Table = toml::from_str(overrides)?;
        merge_tables(&mut base, user);
        Ok(toml::Value::Table(base).try_into()?)
    }

    /// Load the scenario, merging the file at `path` over the defaults if given
    pub fn load(path: Option<&Path>) -> Result<Self, PlaygroundError> {
        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading scenario overrides");
                let content = fs::read_to_string(path).map_err(|source| PlaygroundError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::with_overrides(&content)
            }
            None => Self::default_config(),
        }
    }
}

/// Recursively merge `overrides` into `base`
///
/// Nested tables merge; any other value (arrays included) replaces.
fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(incoming) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, incoming),
                _ => {
                    base.insert(key, toml::Value::Table(incoming));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ScenarioConfig::default_config().unwrap();
        assert_eq!(config.volunteers.counts, vec![1, 3, 40, 32, 2, 53, 77, 13]);
        assert_eq!(config.stoplights.initial, 4);
        assert_eq!(config.stoplights.budgets, vec![1_000, 10_500]);
        assert_eq!(config.stoplights.budget_threshold, 10_000);
        assert_eq!(config.population.initial, 5_422);
        assert_eq!(config.population.growth, vec![500; 4]);
        assert_eq!(config.population.alias_growth, vec![500]);
        assert_eq!(config.big_city.initial, 4_061_981);
        assert!(config.big_city.alias_growth.is_empty());
        assert_eq!(config.precincts.populations, vec![1244, 2021, 2157]);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let merged = ScenarioConfig::with_overrides("").unwrap();
        assert_eq!(merged, ScenarioConfig::default_config().unwrap());
    }

    #[test]
    fn test_partial_override_changes_one_key() {
        let merged = ScenarioConfig::with_overrides(
            r#"
            [population]
            initial = 100
            "#,
        )
        .unwrap();

        assert_eq!(merged.population.initial, 100);
        // Sibling keys in the same table survive
        assert_eq!(merged.population.growth, vec![500; 4]);
        assert_eq!(merged.big_city.initial, 4_061_981);
    }

    #[test]
    fn test_array_override_replaces() {
        let merged = ScenarioConfig::with_overrides(
            r#"
            [volunteers]
            counts = [9, 8]
            "#,
        )
        .unwrap();
        assert_eq!(merged.volunteers.counts, vec![9, 8]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = ScenarioConfig::with_overrides(
            r#"
            [population]
            inital = 100
            "#,
        );
        assert!(matches!(result, Err(PlaygroundError::Parse(_))));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = ScenarioConfig::with_overrides("[stoplights]\ninitial = \"four\"\n");
        assert!(matches!(result, Err(PlaygroundError::Parse(_))));
    }

    #[test]
    fn test_from_toml_requires_every_section() {
        let result = ScenarioConfig::from_toml("[volunteers]\ncounts = []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_tables_nested() {
        let mut base: toml::Table = toml::from_str("[a]\nx = 1\ny = 2\n[b]\nz = 3\n").unwrap();
        let overrides: toml::Table = toml::from_str("[a]\ny = 20\n[c]\nw = 4\n").unwrap();
        merge_tables(&mut base, overrides);

        assert_eq!(base["a"]["x"].as_integer(), Some(1));
        assert_eq!(base["a"]["y"].as_integer(), Some(20));
        assert_eq!(base["b"]["z"].as_integer(), Some(3));
        assert_eq!(base["c"]["w"].as_integer(), Some(4));
    }
}
