//! A small document validator built on ErrorTree, reporting every problem
//! in a JSON document at its position.

use errortree::{path, ErrorTree, Path};
use regex::Regex;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
enum Invalid {
    #[error("field required")]
    Required,
    #[error("expected {0}")]
    WrongType(&'static str),
    #[error("does not match {0}")]
    Pattern(&'static str),
    #[error("length {len} exceeds {max}")]
    TooLong { len: usize, max: usize },
}

const EMAIL: &str = r"^[^@\s]+@[^@\s]+\.[a-z]+$";
const ZIP: &str = r"^\d{5}$";

fn check_string(value: Option<&Value>, pattern: Option<&'static str>) -> ErrorTree<Invalid> {
    let mut tree = ErrorTree::new();
    match value {
        None => tree.add_leaf(Path::root(), Invalid::Required),
        Some(Value::String(s)) => {
            if let Some(pattern) = pattern {
                let re = Regex::new(pattern).expect("valid pattern");
                if !re.is_match(s) {
                    tree.add_leaf(Path::root(), Invalid::Pattern(pattern));
                }
            }
        }
        Some(_) => tree.add_leaf(Path::root(), Invalid::WrongType("string")),
    }
    tree
}

fn check_tags(value: &Value) -> ErrorTree<Invalid> {
    let mut tree = ErrorTree::new();
    let Some(items) = value.as_array() else {
        tree.add_leaf(Path::root(), Invalid::WrongType("array"));
        return tree;
    };
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(tag) if tag.len() > 8 => tree.add_leaf(
                path![i],
                Invalid::TooLong {
                    len: tag.len(),
                    max: 8,
                },
            ),
            Some(_) => {}
            None => tree.add_leaf(path![i], Invalid::WrongType("string")),
        }
    }
    tree
}

fn check_address(value: &Value) -> ErrorTree<Invalid> {
    let mut tree = ErrorTree::new();
    tree.add_tree(path!["zip"], check_string(value.get("zip"), Some(ZIP)));
    tree.add_tree(path!["city"], check_string(value.get("city"), None));
    tree
}

fn check_signup(doc: &Value) -> ErrorTree<Invalid> {
    let mut tree = ErrorTree::new();
    tree.add_tree(path!["name"], check_string(doc.get("name"), None));
    tree.add_tree(path!["email"], check_string(doc.get("email"), Some(EMAIL)));
    if let Some(tags) = doc.get("tags") {
        tree.add_tree(path!["tags"], check_tags(tags));
    }
    match doc.get("addresses").and_then(Value::as_array) {
        Some(addresses) => {
            for (i, address) in addresses.iter().enumerate() {
                tree.add_tree(path!["addresses", i], check_address(address));
            }
        }
        None => tree.add_leaf(path!["addresses"], Invalid::Required),
    }
    tree
}

#[test]
fn test_valid_document_has_no_errors() {
    let doc = json!({
        "name": "Ada",
        "email": "ada@example.org",
        "tags": ["math", "engines"],
        "addresses": [{ "zip": "12345", "city": "London" }]
    });

    let tree = check_signup(&doc);
    assert!(tree.is_empty());
    assert_eq!(tree.to_string(), "");
    assert!(tree.into_validation(()).is_success());
}

#[test]
fn test_every_problem_is_reported() {
    let doc = json!({
        "email": "not-an-email",
        "tags": ["ok", "much-too-long", 7, "another-long-one"],
        "addresses": [
            { "zip": "12345", "city": "Paris" },
            { "zip": "abc" },
            { "zip": 12345, "city": "Rome" }
        ]
    });

    let tree = check_signup(&doc);
    assert_eq!(tree.len(), 8);

    let rendered: Vec<String> = tree.all_errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            ".addresses[1].city: field required",
            ".addresses[1].zip: does not match ^\\d{5}$",
            ".addresses[2].zip: expected string",
            ".email: does not match ^[^@\\s]+@[^@\\s]+\\.[a-z]+$",
            ".name: field required",
            ".tags[1]: length 13 exceeds 8",
            ".tags[2]: expected string",
            ".tags[3]: length 16 exceeds 8",
        ]
    );
}

#[test]
fn test_lookup_by_document_position() {
    let doc = json!({
        "name": 42,
        "email": "a@b.io",
        "addresses": [{ "zip": "1", "city": "Oslo" }]
    });

    let tree = check_signup(&doc);
    assert_eq!(tree.get(path!["name"]), [Invalid::WrongType("string")]);
    assert_eq!(tree.get(path!["addresses", 0, "zip"]), [Invalid::Pattern(ZIP)]);
    assert!(tree.get(path!["email"]).is_empty());
    assert!(tree.get(path!["addresses", 0, "city"]).is_empty());
    assert!(tree.node(path!["tags"]).is_none());
}

#[test]
fn test_missing_list_is_reported_at_its_attribute() {
    let tree = check_signup(&json!({ "name": "x", "email": "x@y.com" }));
    assert_eq!(tree.to_string(), ".addresses: field required");
}
