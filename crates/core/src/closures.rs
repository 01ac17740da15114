//! Closures that capture and mutate state
//!
//! A population tracker is a closure in struct form: a handle that owns a
//! private running total and bumps it on every call.
//!
//! A tracker consists of:
//! - The accumulator (an `Rc`-shared cell, so the tracker value owns it)
//! - One mutating operation, [`PopulationTracker::grow`]
//!
//! Cloning a tracker does NOT copy the accumulator. Both handles point at the
//! same cell, the same way two names bound to one closure share its captures.
//! Use [`make_population_tracker`] again for an independent count.
//!
//! # Examples
//!
//! ```
//! use knowhere_core::closures::make_population_tracker;
//!
//! let grow_by = make_population_tracker(5_422);
//! assert_eq!(grow_by.grow(500), 5_922);
//!
//! let another_grow_by = grow_by.clone();
//! another_grow_by.grow(500);
//! assert_eq!(grow_by.total(), 6_422);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use tracing::trace;

/// A running population total that survives between calls
///
/// Not `Send`: the accumulator is shared through `Rc` and is only meant to be
/// driven from one thread.
#[derive(Debug, Clone)]
pub struct PopulationTracker {
    total: Rc<Cell<i64>>,
}

impl PopulationTracker {
    /// Create a tracker whose accumulator starts at `population`
    pub fn new(population: i64) -> Self {
        PopulationTracker {
            total: Rc::new(Cell::new(population)),
        }
    }

    /// Add `growth` to the running total and return the new total
    ///
    /// Overflow follows the default integer semantics of the build profile.
    pub fn grow(&self, growth: i64) -> i64 {
        let total = self.total.get() + growth;
        self.total.set(total);
        trace!(growth, total, "population tracker grew");
        total
    }

    /// Current value of the accumulator
    pub fn total(&self) -> i64 {
        self.total.get()
    }

    /// True when both handles drive the same accumulator
    pub fn shares_state_with(&self, other: &PopulationTracker) -> bool {
        Rc::ptr_eq(&self.total, &other.total)
    }

    /// Number of live handles (aliases) on this accumulator
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.total)
    }

    /// Turn the tracker into a plain closure
    ///
    /// The closure keeps the accumulator alive and still shares it with any
    /// other handle cloned from this tracker.
    pub fn into_fn(self) -> impl Fn(i64) -> i64 {
        move |growth| self.grow(growth)
    }
}

/// Build a tracker for an initial population
///
/// Every call produces a fresh, independent accumulator.
pub fn make_population_tracker(population: i64) -> PopulationTracker {
    PopulationTracker::new(population)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_returns_running_total() {
        let grow_by = make_population_tracker(5_422);
        assert_eq!(grow_by.grow(500), 5_922);
        assert_eq!(grow_by.grow(500), 6_422);
        assert_eq!(grow_by.grow(500), 6_922);
        assert_eq!(grow_by.grow(500), 7_422);
        assert_eq!(grow_by.total(), 7_422);
    }

    #[test]
    fn test_final_value_is_initial_plus_sum() {
        let cases: &[(i64, &[i64])] = &[
            (0, &[]),
            (10, &[1, 2, 3]),
            (-5, &[5, -10, 20]),
            (1_000, &[-1_000, 0, 7]),
        ];

        for (population, growths) in cases {
            let tracker = make_population_tracker(*population);
            let mut last = tracker.total();
            for g in growths.iter() {
                last = tracker.grow(*g);
            }
            let expected = population + growths.iter().sum::<i64>();
            assert_eq!(last, expected);
            assert_eq!(tracker.total(), expected);
        }
    }

    #[test]
    fn test_zero_growth_leaves_total() {
        let tracker = make_population_tracker(42);
        assert_eq!(tracker.grow(0), 42);
    }

    #[test]
    fn test_clone_aliases_accumulator() {
        let grow_by = make_population_tracker(100);
        let another_grow_by = grow_by.clone();

        assert!(grow_by.shares_state_with(&another_grow_by));
        assert_eq!(grow_by.alias_count(), 2);

        another_grow_by.grow(50);
        assert_eq!(grow_by.total(), 150);

        grow_by.grow(25);
        assert_eq!(another_grow_by.total(), 175);
    }

    #[test]
    fn test_separate_trackers_are_independent() {
        let town = make_population_tracker(5_422);
        let big_city = make_population_tracker(4_061_981);

        assert!(!town.shares_state_with(&big_city));
        assert_eq!(big_city.grow(10_000), 4_071_981);
        assert_eq!(town.total(), 5_422);
    }

    #[test]
    fn test_into_fn_keeps_sharing() {
        let tracker = make_population_tracker(1);
        let alias = tracker.clone();
        let grow = tracker.into_fn();

        assert_eq!(grow(2), 3);
        assert_eq!(grow(3), 6);
        assert_eq!(alias.total(), 6);
    }

    #[test]
    fn test_alias_outlives_original() {
        let alias = {
            let tracker = make_population_tracker(10);
            tracker.grow(5);
            tracker.clone()
        };
        assert_eq!(alias.alias_count(), 1);
        assert_eq!(alias.grow(5), 20);
    }
}
