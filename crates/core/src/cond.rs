//! Functions as return values, guarded by a predicate
//!
//! The town planner hands out a road builder only when the budget passes a
//! caller-supplied condition. An absent builder is `None`, so a rejected plan
//! can never be invoked by accident.

/// Binary function handed out by the planner: `(lights, existing_lights) -> total`
pub type RoadBuilder = fn(i64, i64) -> i64;

/// Budget a plan must exceed under [`evaluate`]
pub const BUDGET_THRESHOLD: i64 = 10_000;

/// Add new lights to the existing ones
pub fn build_roads(lights: i64, existing_lights: i64) -> i64 {
    lights + existing_lights
}

/// Unconditionally hand out the road builder
pub fn make_town_grand() -> RoadBuilder {
    build_roads
}

/// Hand out the road builder only if `condition(budget)` holds
///
/// # Examples
///
/// ```
/// use knowhere_core::cond::{evaluate, make_town_grand_with_budget};
///
/// assert!(make_town_grand_with_budget(1_000, evaluate).is_none());
///
/// let mut stoplights = 4;
/// if let Some(plan) = make_town_grand_with_budget(10_500, evaluate) {
///     stoplights = plan(4, stoplights);
/// }
/// assert_eq!(stoplights, 8);
/// ```
pub fn make_town_grand_with_budget<C>(budget: i64, condition: C) -> Option<RoadBuilder>
where
    C: FnOnce(i64) -> bool,
{
    if condition(budget) {
        Some(build_roads)
    } else {
        None
    }
}

/// Default budget check: strictly more than [`BUDGET_THRESHOLD`]
pub fn evaluate(budget: i64) -> bool {
    budget > BUDGET_THRESHOLD
}

/// Predicate factory for a configurable threshold
pub fn budget_exceeds(threshold: i64) -> impl Fn(i64) -> bool {
    move |budget| budget > threshold
}
