use std::error::Error;
use std::fmt::{self, Display};

use crate::path::Path;

/// A single error paired with the path it was stored at.
///
/// `PathError` is what flattening an [`ErrorTree`](crate::ErrorTree)
/// produces. The path is an owned snapshot: later changes to the tree never
/// affect a `PathError` already handed out.
///
/// # Example
///
/// ```rust
/// use errortree::{path, PathError};
///
/// let error = PathError::new(path!["a", 2, "b"], "too short");
/// assert_eq!(error.to_string(), ".a[2].b: too short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathError<E> {
    /// Where the error was stored, relative to the flattened tree's root.
    pub path: Path,
    /// The stored error.
    pub error: E,
}

impl<E> PathError<E> {
    /// Creates a new path error.
    pub fn new(path: Path, error: E) -> Self {
        Self { path, error }
    }

    /// Applies `f` to the error, keeping the path.
    pub fn map<F, T>(self, f: F) -> PathError<T>
    where
        F: FnOnce(E) -> T,
    {
        PathError {
            path: self.path,
            error: f(self.error),
        }
    }

    /// Splits into path and error.
    pub fn into_parts(self) -> (Path, E) {
        (self.path, self.error)
    }
}

impl<E: Clone> PathError<&E> {
    /// Clones the borrowed error into an owned `PathError`.
    pub fn cloned(self) -> PathError<E> {
        self.map(Clone::clone)
    }
}

impl<E: Display> Display for PathError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

impl<E: Error + 'static> Error for PathError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
