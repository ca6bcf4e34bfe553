//! Paths addressing positions inside an error tree.
//!
//! This module provides [`Path`] and [`PathStep`] for locating a position in
//! a nested object/list document, and the [`path!`](crate::path!) macro for
//! writing mixed paths inline.

use std::fmt::{self, Display};

/// One step of a [`Path`].
///
/// A step either selects a named child of an object-shaped position or an
/// element of a list-shaped position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathStep {
    /// A named attribute (e.g., `name`, `email`)
    Attribute(String),
    /// A list element by position (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathStep {
    /// Creates a new attribute step.
    pub fn attribute(name: impl Into<String>) -> Self {
        PathStep::Attribute(name.into())
    }

    /// Creates a new index step.
    pub fn index(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

impl From<&str> for PathStep {
    fn from(name: &str) -> Self {
        PathStep::Attribute(name.to_string())
    }
}

impl From<String> for PathStep {
    fn from(name: String) -> Self {
        PathStep::Attribute(name)
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}

impl Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Attribute(name) => write!(f, ".{}", name),
            PathStep::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// An ordered sequence of [`PathStep`]s.
///
/// The empty path addresses the position it is applied to (usually the tree
/// root). Paths are values: the builder methods return a new path and leave
/// the original untouched, so a path handed out once never changes.
///
/// # Example
///
/// ```rust
/// use errortree::Path;
///
/// let path = Path::root()
///     .push_attribute("users")
///     .push_index(0)
///     .push_attribute("email");
///
/// assert_eq!(path.to_string(), ".users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Creates an empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from any sequence of steps.
    pub fn from_steps(steps: impl IntoIterator<Item = PathStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Returns a new path with an attribute step appended.
    pub fn push_attribute(&self, name: impl Into<String>) -> Self {
        self.push(PathStep::Attribute(name.into()))
    }

    /// Returns a new path with an index step appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathStep::Index(index))
    }

    /// Returns a new path with `step` appended.
    pub fn push(&self, step: PathStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self { steps }
    }

    /// Returns a new path made of this path's steps followed by `suffix`'s.
    pub fn join(&self, suffix: impl AsRef<[PathStep]>) -> Self {
        let suffix = suffix.as_ref();
        let mut steps = Vec::with_capacity(self.steps.len() + suffix.len());
        steps.extend_from_slice(&self.steps);
        steps.extend_from_slice(suffix);
        Self { steps }
    }

    /// Returns true if this is the root path (no steps).
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the number of steps in this path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if this path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns an iterator over the steps.
    pub fn steps(&self) -> impl Iterator<Item = &PathStep> {
        self.steps.iter()
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.steps.split_last()?;
        Some(Self {
            steps: init.to_vec(),
        })
    }

    /// Returns the last step, or None if this is root.
    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }
}

impl AsRef<[PathStep]> for Path {
    fn as_ref(&self) -> &[PathStep] {
        &self.steps
    }
}

impl From<Vec<PathStep>> for Path {
    fn from(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        Self::from_steps(iter)
    }
}

impl IntoIterator for Path {
    type Item = PathStep;
    type IntoIter = std::vec::IntoIter<PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// Builds a [`Path`] from a list of attribute names and indices.
///
/// String-like expressions become [`PathStep::Attribute`], `usize`
/// expressions become [`PathStep::Index`].
///
/// ```rust
/// use errortree::{path, Path};
///
/// assert_eq!(path!["abc", 3], Path::root().push_attribute("abc").push_index(3));
/// assert!(path![].is_root());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($step:expr),+ $(,)?) => {
        $crate::Path::from_steps([$($crate::PathStep::from($step)),+])
    };
}
