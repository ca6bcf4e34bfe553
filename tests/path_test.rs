//! Integration tests for Path and PathStep.

use errortree::{path, Path, PathStep};

#[test]
fn test_path_construction_and_display() {
    assert_eq!(Path::root().to_string(), "");
    assert_eq!(Path::root().push_attribute("name").to_string(), ".name");
    assert_eq!(Path::root().push_index(0).to_string(), "[0]");

    let path = Path::root()
        .push_attribute("users")
        .push_index(0)
        .push_attribute("address")
        .push_attribute("city");
    assert_eq!(path.to_string(), ".users[0].address.city");
}

#[test]
fn test_path_steps_preserved() {
    let path = path!["data", 42, "value"];

    let steps: Vec<&PathStep> = path.steps().collect();
    assert_eq!(steps.len(), 3);

    match &steps[0] {
        PathStep::Attribute(name) => assert_eq!(name, "data"),
        _ => panic!("Expected Attribute step"),
    }

    match &steps[1] {
        PathStep::Index(idx) => assert_eq!(*idx, 42),
        _ => panic!("Expected Index step"),
    }

    match &steps[2] {
        PathStep::Attribute(name) => assert_eq!(name, "value"),
        _ => panic!("Expected Attribute step"),
    }
}

#[test]
fn test_path_is_immutable() {
    let base = path!["items"];

    let first = base.push_index(0);
    let second = base.push_index(1);
    let count = base.push_attribute("count");

    assert_eq!(base.to_string(), ".items");
    assert_eq!(first.to_string(), ".items[0]");
    assert_eq!(second.to_string(), ".items[1]");
    assert_eq!(count.to_string(), ".items.count");
}

#[test]
fn test_path_equality() {
    assert_eq!(path!["a", 0], path!["a", 0]);
    assert_ne!(path!["a", 0], path!["a", 1]);
    assert_ne!(path!["a", 0], path!["b", 0]);
    // an attribute named "0" is not an index
    assert_ne!(path!["0"], path![0]);
}

#[test]
fn test_join_concatenates() {
    let joined = path!["a"].join(path![2, "b"]);
    assert_eq!(joined.to_string(), ".a[2].b");
    assert_eq!(joined.len(), 3);
}

#[test]
fn test_path_hash() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(path!["a"]);
    set.insert(path!["b"]);
    set.insert(path!["a"]);

    assert_eq!(set.len(), 2);
}

#[test]
fn test_path_debug() {
    let debug = format!("{:?}", path!["test", 0]);
    assert!(debug.contains("Path"));
    assert!(debug.contains("Attribute"));
    assert!(debug.contains("Index"));
}
