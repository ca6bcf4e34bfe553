use thiserror::Error;

use crate::path::Path;

/// A mode-exclusivity violation.
///
/// Every position of an [`ErrorTree`](crate::ErrorTree) is either
/// object-shaped (children by attribute name) or list-shaped (children by
/// index), fixed by the first child inserted there. Inserting through a
/// step of the other kind is a programming error: the panicking insertion
/// methods abort with this error's message, the `try_` variants return it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// An attribute step was used on a position already holding elements.
    #[error("node at `{path}` is already acting as a list, cannot add attribute `{name}`")]
    AttributeOnList { path: Path, name: String },

    /// An index step was used on a position already holding attributes.
    #[error("node at `{path}` is already acting as an object, cannot add element [{index}]")]
    IndexOnObject { path: Path, index: usize },
}

impl ShapeError {
    /// Returns the path of the node whose mode was violated.
    pub fn path(&self) -> &Path {
        match self {
            ShapeError::AttributeOnList { path, .. } | ShapeError::IndexOnObject { path, .. } => {
                path
            }
        }
    }
}
