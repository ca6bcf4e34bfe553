//! Interop with stillwater's [`Validation`].
//!
//! An [`ErrorTree`] is a [`Semigroup`]: combining two trees merges the
//! right one into the left at the root, so `Validation<T, ErrorTree<E>>`
//! accumulates nested errors through `and`, `map` and friends like any other
//! stillwater error type.

use stillwater::prelude::*;
use stillwater::Validation;

use crate::path::{Path, PathStep};
use crate::tree::ErrorTree;

impl<E> Semigroup for ErrorTree<E> {
    /// Merges `other` into `self` at the root.
    ///
    /// # Panics
    ///
    /// Panics if the two trees use the same position with different shapes.
    fn combine(mut self, other: Self) -> Self {
        self.add_tree(Path::root(), other);
        self
    }
}

impl<E> ErrorTree<E> {
    /// Turns the tree into a validation outcome.
    ///
    /// Returns `Success(value)` if the tree holds no errors, otherwise
    /// `Failure` carrying the tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use errortree::{path, ErrorTree};
    ///
    /// let tree: ErrorTree<&str> = ErrorTree::new();
    /// assert!(tree.into_validation(42).is_success());
    ///
    /// let mut tree = ErrorTree::new();
    /// tree.add_leaf(path!["age"], "must be positive");
    /// assert!(tree.into_validation(42).is_failure());
    /// ```
    pub fn into_validation<T>(self, value: T) -> Validation<T, Self> {
        if self.is_empty() {
            Validation::Success(value)
        } else {
            Validation::Failure(self)
        }
    }

    /// Records the outcome of a nested validation under `path`.
    ///
    /// A failure's tree is merged at `path` and `None` is returned; a
    /// success hands back its value untouched.
    ///
    /// # Panics
    ///
    /// Panics on a shape conflict, like [`add_tree`](Self::add_tree).
    #[track_caller]
    pub fn record<T>(
        &mut self,
        path: impl AsRef<[PathStep]>,
        outcome: Validation<T, ErrorTree<E>>,
    ) -> Option<T> {
        match outcome {
            Validation::Success(value) => Some(value),
            Validation::Failure(subtree) => {
                self.add_tree(path, subtree);
                None
            }
        }
    }
}
