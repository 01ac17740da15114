//! Scenario runner
//!
//! Runs the playground demonstrations top to bottom:
//!
//! 1. sort the volunteer counts, once as a copy and once in place
//! 2. submit budgets to the town planner and build stoplights
//! 3. grow a town population through a tracker, then through an alias
//! 4. grow an independent big city tracker
//! 5. project precinct populations with map, filter and reduce

use crate::config::{PrecinctConfig, ScenarioConfig, StoplightConfig, TrackerConfig};
use crate::report::Report;
use knowhere_core::list_ops::{self, ascending};
use knowhere_core::{Pipeline, budget_exceeds, make_population_tracker, make_town_grand_with_budget};
use tracing::{debug, info};

/// Outcome of the town planner demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoplightOutcome {
    pub stoplights: i64,
    pub approved: usize,
    pub rejected: usize,
}

/// Outcome of one tracker demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerOutcome {
    /// Last value returned before aliasing (initial value if there was no growth)
    pub current: i64,
    /// Tracker total after growth through the alias
    pub tracked: i64,
}

/// Outcome of the projection demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionOutcome {
    pub projected: Vec<i64>,
    pub big: Vec<i64>,
    pub big_total: i64,
    pub total: i64,
}

/// Every stage of an ad-hoc sort, map, filter, reduce run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub sorted: Vec<i64>,
    pub mapped: Vec<i64>,
    pub filtered: Vec<i64>,
    pub reduced: i64,
}

/// Run every demonstration and collect the results
pub fn run(config: &ScenarioConfig) -> Report {
    info!("running scenario");

    let volunteers_sorted = list_ops::sorted_by(&config.volunteers.counts, |i, j| i < j);
    let mut volunteers_sorted_in_place = config.volunteers.counts.clone();
    list_ops::sort(&mut volunteers_sorted_in_place);
    debug!(?volunteers_sorted, "volunteers sorted");

    let stoplights = plan_stoplights(&config.stoplights);
    let population = track_population(&config.population);
    let big_city = track_population(&config.big_city);
    let projection = project_precincts(&config.precincts);

    Report {
        volunteers_sorted,
        volunteers_sorted_in_place,
        stoplights: stoplights.stoplights,
        plans_approved: stoplights.approved,
        plans_rejected: stoplights.rejected,
        current_population: population.current,
        tracked_population: population.tracked,
        big_city_population: big_city.current,
        projected_populations: projection.projected,
        big_projections: projection.big,
        big_projection_total: projection.big_total,
        total_projection: projection.total,
    }
}

/// Submit each budget to the planner; approved plans add lights
pub fn plan_stoplights(config: &StoplightConfig) -> StoplightOutcome {
    let mut outcome = StoplightOutcome {
        stoplights: config.initial,
        approved: 0,
        rejected: 0,
    };

    for &budget in &config.budgets {
        match make_town_grand_with_budget(budget, budget_exceeds(config.budget_threshold)) {
            Some(build_roads) => {
                outcome.stoplights = build_roads(config.lights_per_plan, outcome.stoplights);
                outcome.approved += 1;
                debug!(budget, stoplights = outcome.stoplights, "town plan approved");
            }
            None => {
                outcome.rejected += 1;
                debug!(budget, "town plan rejected");
            }
        }
    }

    outcome
}

/// Grow a fresh tracker, record the current value, then grow it through an alias
pub fn track_population(config: &TrackerConfig) -> TrackerOutcome {
    let grow_by = make_population_tracker(config.initial);

    let mut current = config.initial;
    for &growth in &config.growth {
        current = grow_by.grow(growth);
    }

    let another_grow_by = grow_by.clone();
    for &growth in &config.alias_growth {
        another_grow_by.grow(growth);
    }

    debug!(current, tracked = grow_by.total(), "population tracked");
    TrackerOutcome {
        current,
        tracked: grow_by.total(),
    }
}

/// Map, filter and reduce the precinct populations
pub fn project_precincts(config: &PrecinctConfig) -> ProjectionOutcome {
    let multiplier = config.multiplier;
    let threshold = config.big_threshold;

    let projected = Pipeline::from(config.populations.as_slice()).map(|p| p * multiplier);
    let big = projected.clone().filter(|p| *p > threshold);
    let big_total = big.clone().reduce(0, |acc, p| acc + p);
    let total = projected.sum();

    debug!(big_total, total, "precincts projected");
    ProjectionOutcome {
        projected: projected.into_vec(),
        big: big.into_vec(),
        big_total,
        total,
    }
}

/// Successive values returned by a fresh tracker, one per growth step
///
/// The initial population is not included; no growth yields no values.
pub fn track_values(initial: i64, growth: &[i64]) -> Vec<i64> {
    let grow_by = make_population_tracker(initial);
    let values: Vec<i64> = growth.iter().map(|&g| grow_by.grow(g)).collect();
    debug!(total = grow_by.total(), "tracking finished");
    values
}

/// Sort ascending, multiply, keep values above `threshold`, then sum
pub fn run_pipeline(values: Vec<i64>, multiplier: i64, threshold: i64) -> PipelineOutcome {
    let sorted = Pipeline::new(values).sorted_by(ascending);
    let mapped = sorted.clone().map(|x| x * multiplier);
    let filtered = mapped.clone().filter(|x| *x > threshold);
    let reduced = filtered.clone().reduce(0, |acc, x| acc + x);

    PipelineOutcome {
        sorted: sorted.into_vec(),
        mapped: mapped.into_vec(),
        filtered: filtered.into_vec(),
        reduced,
    }
}
