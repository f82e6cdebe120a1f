//! Tests for TreeBuilder level-order construction

use rstest::rstest;
use treeflip::{sample_tree, TreeBuilder, TreeError};

#[test]
fn given_sample_tokens_when_building_then_matches_sample_tree() {
    let tree = TreeBuilder::parse(&["4", "2", "7", "1", "3", "6", "9"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(tree, sample_tree());
}

#[rstest]
#[case(&["1"], vec![1])]
#[case(&["1", "null", "2", "3"], vec![1, 3, 2])]
#[case(&["5", "3", "_", "1"], vec![1, 3, 5])]
#[case(&["1", "2", "3", "4", "_", "_", "5"], vec![4, 2, 1, 3, 5])]
fn given_tokens_when_building_then_in_order_matches(
    #[case] tokens: &[&str],
    #[case] expected: Vec<i32>,
) {
    let tree = TreeBuilder::parse(tokens).unwrap().build().unwrap();
    assert_eq!(tree.in_order(), expected);
}

#[test]
fn given_trailing_absent_slots_when_building_then_ignored() {
    let tree = TreeBuilder::parse(&["1", "2", "_", "_", "_"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(tree.len(), 2);
}

#[test]
fn given_invalid_token_when_parsing_then_reports_token() {
    let err = TreeBuilder::parse(&["1", "two"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid slot token: \"two\" (expected an integer or null)"
    );
}

#[test]
fn given_absent_root_with_children_when_building_then_missing_root() {
    let err = TreeBuilder::parse(&["null", "1"]).unwrap().build().unwrap_err();
    assert!(matches!(err, TreeError::MissingRoot));
}

#[test]
fn given_full_last_level_when_building_then_succeeds() {
    let tree = TreeBuilder::parse(&["1", "2", "3", "4", "5", "6", "7", "8"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(tree.len(), 8);
    assert_eq!(tree.height(), 4);
}

#[test]
fn given_leftover_slots_when_building_then_dangling_count() {
    // root has two absent children, so 9 has no parent
    let err = TreeBuilder::parse(&["1", "_", "_", "9"]).unwrap().build().unwrap_err();
    assert!(matches!(err, TreeError::DanglingSlots { count: 1 }));
}
