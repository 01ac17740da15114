//! Chainable transform pipeline
//!
//! `Pipeline` owns a list and runs the [`list_ops`](crate::list_ops)
//! combinators as methods, so stages compose in any order:
//!
//! ```
//! use knowhere_core::pipeline::Pipeline;
//!
//! let total = Pipeline::new(vec![1244, 2021, 2157])
//!     .map(|p| p * 2)
//!     .filter(|p| *p > 4000)
//!     .reduce(0, |acc, p| acc + p);
//! assert_eq!(total, 8356);
//! ```

use crate::list_ops;
use tracing::trace;

/// An owned list moving through map/filter/sort stages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pipeline<T> {
    items: Vec<T>,
}

impl<T> Pipeline<T> {
    pub fn new(items: Vec<T>) -> Self {
        Pipeline { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Sort the pipeline's list; see [`list_ops::sort_by`]
    ///
    /// The owned list is sorted in place and handed on; no copy is made.
    pub fn sorted_by<F>(mut self, precedes: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        list_ops::sort_by(&mut self.items, precedes);
        trace!(len = self.items.len(), "pipeline: sorted");
        self
    }

    pub fn map<U, F>(self, transform: F) -> Pipeline<U>
    where
        F: FnMut(&T) -> U,
    {
        let items = list_ops::map(&self.items, transform);
        trace!(len = items.len(), "pipeline: mapped");
        Pipeline { items }
    }

    /// Keep matching elements
    ///
    /// Works on the owned list directly, so no element is cloned.
    pub fn filter<F>(mut self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(|item| predicate(item));
        trace!(len = self.items.len(), "pipeline: filtered");
        self
    }

    /// Fold the list into a single value, consuming the pipeline
    pub fn reduce<A, F>(self, seed: A, combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        trace!(len = self.items.len(), "pipeline: reduced");
        list_ops::reduce(&self.items, seed, combine)
    }
}

impl Pipeline<i64> {
    pub fn sum(&self) -> i64 {
        list_ops::sum(&self.items)
    }
}

impl<T> From<Vec<T>> for Pipeline<T> {
    fn from(items: Vec<T>) -> Self {
        Pipeline::new(items)
    }
}

impl<T: Clone> From<&[T]> for Pipeline<T> {
    fn from(items: &[T]) -> Self {
        Pipeline::new(items.to_vec())
    }
}
