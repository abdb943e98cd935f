//! Integration tests for nested list flattening.

#![cfg(feature = "flatten")]

use rstest::rstest;
use slotted::flatten::{Nested, flatten, flatten_all};
use slotted::nested;

#[rstest]
fn test_depth_one_splices_single_level() {
    assert_eq!(
        flatten(nested![1, [2, 3], [[4]]], 1),
        nested![1, 2, 3, [4]]
    );
}

#[rstest]
fn test_depth_zero_returns_input_unchanged() {
    let items = nested![[1, [2]], 3];
    assert_eq!(flatten(items.clone(), 0), items);
}

#[rstest]
fn test_depth_beyond_nesting_matches_flatten_all() {
    let items = nested![["a", ["b"]], "c", [[["d"]]]];
    let fully = flatten(items.clone(), usize::MAX);

    assert!(fully.iter().all(Nested::is_item));
    assert_eq!(
        fully,
        flatten_all(items).into_iter().map(Nested::item).collect::<Vec<_>>()
    );
}

#[rstest]
fn test_flatten_composes_by_depth() {
    let items = nested![1, [2, [3, [4, [5]]]]];
    assert_eq!(
        flatten(flatten(items.clone(), 1), 2),
        flatten(items, 3)
    );
}

#[rstest]
fn test_empty_input() {
    assert!(flatten(Vec::<Nested<i32>>::new(), 3).is_empty());
    assert!(flatten_all(Vec::<Nested<i32>>::new()).is_empty());
}

#[rstest]
fn test_owned_values_are_moved_not_cloned() {
    let items = vec![
        Nested::item(String::from("left")),
        Nested::from(vec![Nested::item(String::from("right"))]),
    ];
    assert_eq!(flatten_all(items), vec!["left", "right"]);
}
