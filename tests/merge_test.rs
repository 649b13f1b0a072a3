//! Tests for the baseline merge: precedence, array replacement, and
//! isolation between independent reads

use std::fs;
use std::path::Path;

use figtree::util::testing::init_test_setup;
use figtree::{merge_baseline_with_user, read_config, Branch, FigtreeReader, FileOrigin, Item};

// ============================================================
// Fixture-based Merge
// ============================================================

#[test]
fn given_user_with_baseline_when_reading_then_user_values_win() {
    init_test_setup();
    let root = read_config("tests/resources/fixtures/user").unwrap();

    assert_eq!(root.get_value("scalar-key").unwrap(), "user-scalar");
    assert_eq!(root.get_value("section/key1").unwrap(), "user-value");
}

#[test]
fn given_user_with_baseline_when_reading_then_baseline_fills_gaps() {
    let root = read_config("tests/resources/fixtures/user").unwrap();

    // keys the user never mentions fall back to the baseline
    assert_eq!(root.get_value("baseline-only").unwrap(), "from-baseline");
    assert_eq!(root.get_value("section/key2").unwrap(), "baseline-kept");

    // keys only the user has are appended
    assert_eq!(root.get_value("section/user-only").unwrap(), "yes");
}

#[test]
fn given_arrays_on_both_sides_when_reading_then_user_array_replaces_baseline() {
    let root = read_config("tests/resources/fixtures/user").unwrap();

    let values: Vec<&str> = root
        .find_all("multi")
        .iter()
        .map(|i| i.value().unwrap())
        .collect();
    assert_eq!(values, vec!["user-a", "user-b"]);
}

#[test]
fn given_merged_tree_when_inspecting_origins_then_both_sources_show() {
    let root = read_config("tests/resources/fixtures/user").unwrap();

    assert_eq!(
        root.find_first("baseline-only").unwrap().origin(),
        FileOrigin::Baseline
    );
    assert_eq!(
        root.find_first("scalar-key").unwrap().origin(),
        FileOrigin::User
    );
}

// ============================================================
// Baseline Isolation
// ============================================================

#[test]
fn given_consecutive_reads_when_second_has_no_baseline_then_nothing_leaks() {
    let mut reader = FigtreeReader::new();

    let first = reader
        .read_config(Path::new("tests/resources/fixtures/user"))
        .unwrap();
    assert!(first.item_exists("baseline-only"));

    // the second read must start from a clean slate
    let second = reader
        .read_config(Path::new("tests/resources/fixtures/sample"))
        .unwrap();
    assert!(!second.item_exists("baseline-only"));
    assert!(!second.item_exists("scalar-key"));
}

// ============================================================
// Merge Semantics on Composed Files
// ============================================================

#[test]
fn given_array_only_in_baseline_when_merging_then_baseline_array_survives() {
    let temp = tempfile::TempDir::new().unwrap();

    let baseline_path = temp.path().join("defaults");
    fs::write(&baseline_path, "fallback f1\nfallback f2\n").unwrap();

    let user_path = temp.path().join("user");
    fs::write(
        &user_path,
        format!("!baseline {}\nother value\n", baseline_path.display()),
    )
    .unwrap();

    let root = read_config(&user_path).unwrap();

    let values: Vec<&str> = root
        .find_all("fallback")
        .iter()
        .map(|i| i.value().unwrap())
        .collect();
    assert_eq!(values, vec!["f1", "f2"]);
    assert_eq!(root.get_value("other").unwrap(), "value");
}

#[test]
fn given_two_baseline_pragmas_when_reading_then_last_one_wins() {
    let temp = tempfile::TempDir::new().unwrap();

    let first = temp.path().join("first-defaults");
    fs::write(&first, "from-first yes\n").unwrap();
    let second = temp.path().join("second-defaults");
    fs::write(&second, "from-second yes\n").unwrap();

    let user_path = temp.path().join("user");
    fs::write(
        &user_path,
        format!(
            "!baseline {}\n!baseline {}\nkey1 value1\n",
            first.display(),
            second.display()
        ),
    )
    .unwrap();

    let root = read_config(&user_path).unwrap();

    assert!(!root.item_exists("from-first"));
    assert_eq!(root.get_value("from-second").unwrap(), "yes");
}

// ============================================================
// In-memory Merge
// ============================================================

#[test]
fn given_retained_baseline_when_merging_twice_then_baseline_is_untouched() {
    let mut baseline = Branch::new();
    baseline.append_item(Item::new("shared", "fallback"));
    baseline.append_item(Item::new("fixed", "stays"));

    let mut user_a = Branch::new();
    user_a.append_item(Item::new("shared", "from-a"));

    let mut user_b = Branch::new();
    user_b.append_item(Item::new("shared", "from-b"));

    let merged_a = merge_baseline_with_user(Some(&baseline), user_a);
    let merged_b = merge_baseline_with_user(Some(&baseline), user_b);

    assert_eq!(merged_a.get_value("shared").unwrap(), "from-a");
    assert_eq!(merged_b.get_value("shared").unwrap(), "from-b");
    assert_eq!(baseline.get_value("shared").unwrap(), "fallback");
    assert_eq!(merged_a.get_value("fixed").unwrap(), "stays");
}

#[test]
fn given_nested_branches_when_merging_then_recursion_reaches_inner_keys() {
    let mut baseline_inner = Branch::new();
    baseline_inner.append_item(Item::new("kept", "from-baseline"));
    baseline_inner.append_item(Item::new("replaced", "old"));
    let mut baseline = Branch::new();
    baseline.append_item(Item::with_branch("section", baseline_inner));

    let mut user_inner = Branch::new();
    user_inner.append_item(Item::new("replaced", "new"));
    let mut user = Branch::new();
    user.append_item(Item::with_branch("section", user_inner));

    let merged = merge_baseline_with_user(Some(&baseline), user);

    assert_eq!(merged.get_value("section/kept").unwrap(), "from-baseline");
    assert_eq!(merged.get_value("section/replaced").unwrap(), "new");
}
