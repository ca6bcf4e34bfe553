//! # errortree
//!
//! A tree of errors addressed by paths, for validators that report every
//! failure in a document instead of stopping at the first one.
//!
//! ## Overview
//!
//! Errors are stored at positions mirroring the validated document: named
//! attributes for object-shaped values, integer indices for list-shaped
//! values. A validator for a nested value can build its own tree and have
//! the caller merge it at the nested value's position. Once validation is
//! done, the tree is read position by position or flattened into
//! `(path, error)` pairs in a deterministic order.
//!
//! ## Core Types
//!
//! - [`ErrorTree`]: the tree, with insertion, merging, lookup and flattening
//! - [`Path`] and [`PathStep`]: positions such as `.users[0].email`
//! - [`PathError`]: one flattened error with its path
//! - [`ShapeError`]: a position used both as an object and as a list
//!
//! ## Example
//!
//! ```rust
//! use errortree::{path, ErrorTree, Path};
//!
//! let mut address = ErrorTree::new();
//! address.add_leaf(path!["zip"], "invalid zip code");
//!
//! let mut tree = ErrorTree::new();
//! tree.add_leaf(path!["name"], "required");
//! tree.add_tree(path!["addresses", 1], address);
//!
//! assert_eq!(tree.get(path!["addresses", 1, "zip"]), ["invalid zip code"]);
//! assert!(tree.get(path!["addresses", 0]).is_empty());
//! assert_eq!(
//!     tree.to_string(),
//!     ".addresses[1].zip: invalid zip code, .name: required"
//! );
//! ```

pub mod error;
pub mod path;
pub mod tree;
pub mod validation;

pub use error::{PathError, ShapeError};
pub use path::{Path, PathStep};
pub use tree::{ErrorTree, NodeKind};

/// Type alias for validation results accumulating into an [`ErrorTree`].
pub type TreeResult<T, E> = stillwater::Validation<T, ErrorTree<E>>;
