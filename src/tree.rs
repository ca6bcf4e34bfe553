//! The error tree.
//!
//! [`ErrorTree`] stores errors at positions addressed by a [`Path`]. Each
//! position holds its own errors plus children reached either by attribute
//! name or by element index, mirroring an object or a list in the document
//! being validated.

use std::error::Error;
use std::fmt::{self, Display};

use indexmap::IndexMap;

use crate::error::{PathError, ShapeError};
use crate::path::{Path, PathStep};

/// How a node's children are addressed.
///
/// A node starts `Unset`. The first child inserted fixes it to `Object` or
/// `List` for the rest of the node's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// No child has been inserted yet.
    Unset,
    /// Children are addressed by attribute name.
    Object,
    /// Children are addressed by element index.
    List,
}

#[derive(Debug, Clone, PartialEq)]
enum Children<E> {
    Unset,
    Attributes(IndexMap<String, ErrorTree<E>>),
    Elements(IndexMap<usize, ErrorTree<E>>),
}

/// A tree of errors shaped like the document that produced them.
///
/// Validators add errors at the path of the offending value and keep going;
/// the tree is read afterwards, either position by position with
/// [`get`](Self::get) or all at once with [`all_errors`](Self::all_errors).
///
/// Flattening is deterministic: a node's own errors come first in insertion
/// order, then its children in ascending key order (names lexicographically,
/// indices numerically), depth first.
///
/// A position is either object-shaped or list-shaped. Inserting through an
/// attribute step where elements already exist, or the reverse, is a caller
/// bug: [`add_leaf`](Self::add_leaf) and [`add_tree`](Self::add_tree) panic,
/// while [`try_add_leaf`](Self::try_add_leaf) and
/// [`try_add_tree`](Self::try_add_tree) return a [`ShapeError`].
///
/// The tree has no internal synchronization. Share it across threads only
/// behind a lock covering the whole tree.
///
/// # Example
///
/// ```rust
/// use errortree::{path, ErrorTree, Path};
///
/// let mut tree = ErrorTree::new();
/// tree.add_leaf(path!["name"], "required");
/// tree.add_leaf(path!["tags", 2], "too long");
/// tree.add_leaf(Path::root(), "2 fields invalid");
///
/// assert_eq!(tree.get(path!["name"]), ["required"]);
/// assert_eq!(tree.get(path!["tags", 0]), [] as [&str; 0]);
/// assert_eq!(
///     tree.to_string(),
///     ": 2 fields invalid, .name: required, .tags[2]: too long"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTree<E> {
    errors: Vec<E>,
    children: Children<E>,
}

impl<E> Default for ErrorTree<E> {
    fn default() -> Self {
        Self {
            errors: Vec::new(),
            children: Children::Unset,
        }
    }
}

impl<E> ErrorTree<E> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` at `path`, creating missing intermediate nodes.
    ///
    /// Errors added at the same path keep their call order.
    ///
    /// # Panics
    ///
    /// Panics if `path` uses a node as an object after it was used as a
    /// list, or the reverse.
    #[track_caller]
    pub fn add_leaf(&mut self, path: impl AsRef<[PathStep]>, error: E) {
        if let Err(err) = self.try_add_leaf(path, error) {
            shape_violation(err);
        }
    }

    /// Records `error` at `path`, or reports a mode conflict.
    ///
    /// The tree is left unchanged when an error is returned.
    pub fn try_add_leaf(
        &mut self,
        path: impl AsRef<[PathStep]>,
        error: E,
    ) -> Result<(), ShapeError> {
        let steps = path.as_ref();
        self.descend_mut(steps, steps)?.errors.push(error);
        Ok(())
    }

    /// Merges every error of `subtree` into this tree under `path`.
    ///
    /// Each error lands at `path` joined with its own path inside `subtree`,
    /// in `subtree`'s flattened order. This is equivalent to calling
    /// [`add_leaf`](Self::add_leaf) once per flattened error. Nodes of
    /// `subtree` holding no errors leave no trace.
    ///
    /// # Panics
    ///
    /// Panics if any merged path conflicts with the shape of this tree.
    #[track_caller]
    pub fn add_tree(&mut self, path: impl AsRef<[PathStep]>, subtree: ErrorTree<E>) {
        if let Err(err) = self.try_add_tree(path, subtree) {
            shape_violation(err);
        }
    }

    /// Merges `subtree` under `path`, or reports a mode conflict.
    ///
    /// All merged paths are checked before anything is inserted, so the
    /// tree is left unchanged when an error is returned.
    pub fn try_add_tree(
        &mut self,
        path: impl AsRef<[PathStep]>,
        subtree: ErrorTree<E>,
    ) -> Result<(), ShapeError> {
        let prefix = Path::from_steps(path.as_ref().iter().cloned());
        let entries: Vec<(Path, E)> = subtree
            .into_all_errors()
            .into_iter()
            .map(|entry| (prefix.join(&entry.path), entry.error))
            .collect();

        for (target, _) in &entries {
            self.check_shape(target.as_ref())?;
        }

        tracing::trace!(prefix = %prefix, count = entries.len(), "merging error tree");
        for (target, error) in entries {
            let steps = target.as_ref();
            self.descend_mut(steps, steps)?.errors.push(error);
        }
        Ok(())
    }

    /// Returns the errors stored exactly at `path`.
    ///
    /// Errors of descendants are not included. A path that does not resolve
    /// to a node yields an empty slice, including a path that uses an
    /// object as a list or the reverse.
    pub fn get(&self, path: impl AsRef<[PathStep]>) -> &[E] {
        self.node(path)
            .map(|node| node.errors.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the sub-tree at `path`, if a node exists there.
    pub fn node(&self, path: impl AsRef<[PathStep]>) -> Option<&ErrorTree<E>> {
        path.as_ref()
            .iter()
            .try_fold(self, |node, step| node.child(step))
    }

    /// Returns the errors stored at this node itself.
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Returns how this node's children are addressed.
    pub fn kind(&self) -> NodeKind {
        match self.children {
            Children::Unset => NodeKind::Unset,
            Children::Attributes(_) => NodeKind::Object,
            Children::Elements(_) => NodeKind::List,
        }
    }

    /// Returns true if no error is stored anywhere in this tree.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.child_nodes().all(ErrorTree::is_empty)
    }

    /// Returns the number of errors stored anywhere in this tree.
    pub fn len(&self) -> usize {
        self.errors.len() + self.child_nodes().map(ErrorTree::len).sum::<usize>()
    }

    /// Returns every error in the tree paired with its path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use errortree::{path, ErrorTree};
    ///
    /// let mut tree = ErrorTree::new();
    /// tree.add_leaf(path!["b"], "second");
    /// tree.add_leaf(path!["a"], "first");
    ///
    /// let rendered: Vec<String> = tree
    ///     .all_errors()
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// assert_eq!(rendered, [".a: first", ".b: second"]);
    /// ```
    pub fn all_errors(&self) -> Vec<PathError<&E>> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_errors(&Path::root(), &mut out);
        out
    }

    /// Consumes the tree, returning every error paired with its path.
    ///
    /// The order is the same as [`all_errors`](Self::all_errors).
    pub fn into_all_errors(self) -> Vec<PathError<E>> {
        let mut out = Vec::with_capacity(self.len());
        self.drain_errors(&Path::root(), &mut out);
        out
    }

    fn child(&self, step: &PathStep) -> Option<&ErrorTree<E>> {
        match (&self.children, step) {
            (Children::Attributes(map), PathStep::Attribute(name)) => map.get(name.as_str()),
            (Children::Elements(map), PathStep::Index(index)) => map.get(index),
            _ => None,
        }
    }

    fn child_nodes(&self) -> impl Iterator<Item = &ErrorTree<E>> {
        let (attributes, elements) = match &self.children {
            Children::Unset => (None, None),
            Children::Attributes(map) => (Some(map), None),
            Children::Elements(map) => (None, Some(map)),
        };
        attributes
            .into_iter()
            .flat_map(|map| map.values())
            .chain(elements.into_iter().flat_map(|map| map.values()))
    }

    /// Walks `steps` without creating anything, failing at the first node
    /// whose mode rejects the next step.
    fn check_shape(&self, steps: &[PathStep]) -> Result<(), ShapeError> {
        let mut node = self;
        for (depth, step) in steps.iter().enumerate() {
            if let Some(err) = node.conflict(step, &steps[..depth]) {
                return Err(err);
            }
            match node.child(step) {
                Some(next) => node = next,
                // everything below here would be freshly created
                None => return Ok(()),
            }
        }
        Ok(())
    }

    fn conflict(&self, step: &PathStep, at: &[PathStep]) -> Option<ShapeError> {
        match (&self.children, step) {
            (Children::Elements(_), PathStep::Attribute(name)) => {
                Some(ShapeError::AttributeOnList {
                    path: Path::from_steps(at.iter().cloned()),
                    name: name.clone(),
                })
            }
            (Children::Attributes(_), PathStep::Index(index)) => Some(ShapeError::IndexOnObject {
                path: Path::from_steps(at.iter().cloned()),
                index: *index,
            }),
            _ => None,
        }
    }

    /// Returns the node at `steps`, creating missing nodes on the way.
    ///
    /// `full` is the whole path being inserted; `steps` is the part still
    /// to walk from `self`. A conflict can only occur at an existing node,
    /// so nothing is created when an error is returned.
    fn descend_mut(
        &mut self,
        steps: &[PathStep],
        full: &[PathStep],
    ) -> Result<&mut ErrorTree<E>, ShapeError> {
        let Some((step, rest)) = steps.split_first() else {
            return Ok(self);
        };
        if let Some(err) = self.conflict(step, &full[..full.len() - steps.len()]) {
            return Err(err);
        }

        let child = match step {
            PathStep::Attribute(name) => {
                if matches!(self.children, Children::Unset) {
                    self.children = Children::Attributes(IndexMap::new());
                }
                match &mut self.children {
                    Children::Attributes(map) => map.entry(name.clone()).or_default(),
                    _ => unreachable!("mode checked above"),
                }
            }
            PathStep::Index(index) => {
                if matches!(self.children, Children::Unset) {
                    self.children = Children::Elements(IndexMap::new());
                }
                match &mut self.children {
                    Children::Elements(map) => map.entry(*index).or_default(),
                    _ => unreachable!("mode checked above"),
                }
            }
        };
        child.descend_mut(rest, full)
    }

    fn collect_errors<'a>(&'a self, prefix: &Path, out: &mut Vec<PathError<&'a E>>) {
        out.extend(
            self.errors
                .iter()
                .map(|error| PathError::new(prefix.clone(), error)),
        );

        match &self.children {
            Children::Unset => {}
            Children::Attributes(map) => {
                let mut sorted: Vec<_> = map.iter().collect();
                sorted.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
                for (name, child) in sorted {
                    child.collect_errors(&prefix.push_attribute(name.as_str()), out);
                }
            }
            Children::Elements(map) => {
                let mut sorted: Vec<_> = map.iter().collect();
                sorted.sort_unstable_by_key(|(index, _)| **index);
                for (index, child) in sorted {
                    child.collect_errors(&prefix.push_index(*index), out);
                }
            }
        }
    }

    fn drain_errors(self, prefix: &Path, out: &mut Vec<PathError<E>>) {
        let ErrorTree { errors, children } = self;
        out.extend(
            errors
                .into_iter()
                .map(|error| PathError::new(prefix.clone(), error)),
        );

        match children {
            Children::Unset => {}
            Children::Attributes(mut map) => {
                map.sort_unstable_keys();
                for (name, child) in map {
                    child.drain_errors(&prefix.push_attribute(name), out);
                }
            }
            Children::Elements(mut map) => {
                map.sort_unstable_keys();
                for (index, child) in map {
                    child.drain_errors(&prefix.push_index(index), out);
                }
            }
        }
    }
}

#[track_caller]
fn shape_violation(err: ShapeError) -> ! {
    tracing::debug!(path = %err.path(), "error tree shape violation");
    panic!("{}", err);
}

impl<E> FromIterator<PathError<E>> for ErrorTree<E> {
    /// Builds a tree by adding each error at its path.
    ///
    /// Panics on conflicting shapes, like [`ErrorTree::add_leaf`].
    fn from_iter<I: IntoIterator<Item = PathError<E>>>(iter: I) -> Self {
        let mut tree = ErrorTree::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<PathError<E>> for ErrorTree<E> {
    fn extend<I: IntoIterator<Item = PathError<E>>>(&mut self, iter: I) {
        for PathError { path, error } in iter {
            self.add_leaf(&path, error);
        }
    }
}

impl<E: Display> Display for ErrorTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.all_errors().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<E: Error> Error for ErrorTree<E> {}

// Trees of thread-safe errors can be moved and shared like any other value.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorTree<String>>();
    assert_sync::<ErrorTree<String>>();
};
