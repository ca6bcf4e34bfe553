//! Error types produced by the tree.
//!
//! [`PathError`] is the flattened form of a stored error, paired with the
//! path it was stored at. [`ShapeError`] describes a caller bug: using one
//! position of the tree as both an object and a list.

mod path_error;
mod shape_error;

pub use path_error::PathError;
pub use shape_error::ShapeError;
