//! Tests for querying the tree: find_all, find_first, typed getters,
//! predicates, and listing

use figtree::{read_config, Branch, ItemKind, TreeError};
use rstest::rstest;

fn sample() -> Branch {
    read_config("tests/resources/fixtures/sample").unwrap()
}

// ============================================================
// find_all / find_first
// ============================================================

#[test]
fn given_leading_slash_when_finding_all_then_it_is_ignored() {
    let root = sample();
    assert_eq!(root.find_all("/key3").len(), 1);
}

#[test]
fn given_four_identical_keys_when_finding_all_then_returns_all_in_order() {
    let root = sample();

    let collection = root.find_all("section2/four-identical-keys");
    assert_eq!(collection.len(), 4);

    let values: Vec<&str> = collection.iter().map(|i| i.value().unwrap()).collect();
    assert_eq!(values, vec!["value1", "value2", "value3", "value4"]);
}

#[test]
fn given_key_paths_when_finding_first_then_kinds_match() {
    let root = sample();

    assert_eq!(root.find_first("/key3").unwrap().kind(), ItemKind::Leaf);
    assert_eq!(root.find_first("section1").unwrap().kind(), ItemKind::Branch);
    assert_eq!(
        root.find_first("section1/key1").unwrap().kind(),
        ItemKind::Leaf
    );
}

#[test]
fn given_repeated_key_when_finding_first_then_returns_first_occurrence() {
    let root = sample();

    let item = root.find_first("section2/four-identical-keys").unwrap();
    assert_eq!(item.value().unwrap(), "value1");
}

#[test]
fn given_missing_key_when_finding_first_then_returns_not_found() {
    let root = sample();

    assert_eq!(
        root.find_first("section1/key99"),
        Err(TreeError::NotFound("section1/key99".to_string()))
    );
}

// ============================================================
// Typed Getters
// ============================================================

#[test]
fn given_paths_when_getting_item_then_resolves_or_not_found() {
    let root = sample();

    assert!(root.get_item("section1").is_ok());
    assert!(root.get_item("section1/key1").is_ok());
    assert_eq!(
        root.get_item("section1/key99"),
        Err(TreeError::NotFound("key99".to_string()))
    );
}

#[test]
fn given_paths_when_getting_branch_then_type_checks() {
    let root = sample();

    assert!(root.get_branch("section1").is_ok());
    assert_eq!(
        root.get_branch("section1/key1"),
        Err(TreeError::NotBranch("section1/key1".to_string()))
    );
    assert_eq!(
        root.get_branch("section1/key99"),
        Err(TreeError::NotFound("section1/key99".to_string()))
    );
}

#[test]
fn given_paths_when_getting_leaf_then_type_checks() {
    let root = sample();

    assert!(root.get_leaf("section1/key1").is_ok());
    assert_eq!(
        root.get_leaf("section1"),
        Err(TreeError::NotLeaf("section1".to_string()))
    );
}

#[test]
fn given_paths_when_getting_value_then_returns_leaf_text() {
    let root = sample();

    assert_eq!(root.get_value("/key3").unwrap(), "value3");
    assert_eq!(root.get_value("section1/key1").unwrap(), "space-then-value");
    assert_eq!(
        root.get_value("section2/four-identical-keys").unwrap(),
        "value1"
    );
    assert_eq!(
        root.get_value("section1"),
        Err(TreeError::NotLeaf("section1".to_string()))
    );
    assert_eq!(
        root.get_value("section1/key99"),
        Err(TreeError::NotFound("section1/key99".to_string()))
    );
}

#[test]
fn given_key_only_item_when_getting_value_then_returns_empty_string() {
    let root = sample();
    assert_eq!(root.get_value("empty-key").unwrap(), "");
}

// ============================================================
// Predicates
// ============================================================

#[rstest]
#[case("key1", true)]
#[case("section1", true)]
#[case("key99", false)]
fn given_simple_keys_when_checking_existence_then_matches_immediate_branch(
    #[case] key: &str,
    #[case] expected: bool,
) {
    let root = sample();
    assert_eq!(root.item_exists(key), expected);
}

#[rstest]
#[case("key1", true)]
#[case("/section1", true)]
#[case("/section1/key1", true)]
#[case("/section1/key99", false)]
fn given_key_paths_when_checking_path_exists_then_descends(
    #[case] key_path: &str,
    #[case] expected: bool,
) {
    let root = sample();
    assert_eq!(root.path_exists(key_path), expected);
}

#[test]
fn given_singleton_and_repeated_keys_when_checking_is_array_then_counts_occurrences() {
    let root = sample();

    assert!(!root.item_is_array("key1"));
    assert!(!root.item_is_array("key99"));

    let section2 = root.get_branch("/section2").unwrap();
    assert!(section2.item_is_array("four-identical-keys"));
}

#[test]
fn given_key_paths_when_classifying_kind_then_predicates_agree() {
    let root = sample();

    assert!(root.item_is_branch("section1"));
    assert!(!root.item_is_branch("key1"));
    assert!(root.item_is_leaf("section1/key1"));
    assert!(!root.item_is_leaf("section1"));
}

// ============================================================
// Listing
// ============================================================

#[test]
fn given_sample_root_when_listing_then_kinds_are_partitioned_in_order() {
    let root = sample();

    let branch_keys: Vec<&str> = root.list_branches().iter().map(|i| i.key()).collect();
    assert_eq!(branch_keys, vec!["section1", "section2"]);

    let leaf_keys: Vec<&str> = root.list_leaves().iter().map(|i| i.key()).collect();
    assert_eq!(
        leaf_keys,
        vec!["key1", "key2", "key3", "empty-key", "homepage"]
    );
}
