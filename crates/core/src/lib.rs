//! Knowhere Core: closures and higher-order functions over integer lists
//!
//! Key design principles:
//! - A closure that mutates captured state is a small struct owning that state
//! - An absent function is `None`, never a dangling callable
//! - List operations take the caller's function and never mutate their input,
//!   except the explicit in-place sort
//!
//! # Modules
//!
//! - `closures`: Population tracker (stateful closure factory)
//! - `cond`: Town planner (function returned only when a predicate holds)
//! - `list_ops`: sort, map, filter, reduce over slices
//! - `pipeline`: Chainable owned-list form of `list_ops`

pub mod closures;
pub mod cond;
pub mod list_ops;
pub mod pipeline;

// Re-export key types and functions
pub use closures::{PopulationTracker, make_population_tracker};
pub use cond::{
    BUDGET_THRESHOLD, RoadBuilder, budget_exceeds, build_roads, evaluate, make_town_grand,
    make_town_grand_with_budget,
};
pub use list_ops::{
    ascending, descending, each, filter, map, reduce, sort, sort_by, sorted, sorted_by, sum,
};
pub use pipeline::Pipeline;
