#![cfg(feature = "serde")]

//! Integration tests for serde support in slotted.
//!
//! These tests verify that argument lists and nested lists serialize and
//! deserialize with serde_json.

use rstest::rstest;

// =============================================================================
// Argument Integration Tests
// =============================================================================

#[cfg(feature = "curry")]
mod argument_tests {
    use super::*;
    use slotted::args;
    use slotted::curry::{Argument, Arguments, Invocation, curry};

    #[rstest]
    fn test_argument_json_representation() {
        let value: Argument<i32> = Argument::Value(7);
        let placeholder: Argument<i32> = Argument::Placeholder;

        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"Value":7}"#);
        assert_eq!(serde_json::to_string(&placeholder).unwrap(), r#""Placeholder""#);
    }

    #[rstest]
    fn test_arguments_json_roundtrip() {
        let arguments: Arguments<String> = args!["a".to_string(), __, "c".to_string()];
        let json = serde_json::to_string(&arguments).unwrap();
        let restored: Arguments<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(json, r#"[{"Value":"a"},"Placeholder",{"Value":"c"}]"#);
        assert_eq!(restored, arguments);
    }

    #[rstest]
    fn test_pending_list_can_be_restored_into_new_chain() {
        let sum = |invocation: Invocation<i32>| invocation.required().iter().sum::<i32>();
        let waiting = curry(sum, 3).call(args![1, __, 3]).partial().unwrap();

        let json = serde_json::to_string(waiting.pending()).unwrap();
        let restored: Arguments<i32> = serde_json::from_str(&json).unwrap();
        let resumed = curry(sum, 3).call(restored).partial().unwrap();

        assert_eq!(resumed.call(args![2]).complete(), Some(6));
    }
}

// =============================================================================
// Nested Integration Tests
// =============================================================================

#[cfg(feature = "flatten")]
mod nested_tests {
    use super::*;
    use slotted::flatten::{Nested, flatten_all};
    use slotted::nested;

    #[rstest]
    fn test_nested_uses_plain_json_arrays() {
        let items: Vec<Nested<i32>> = nested![1, [2, [3]]];
        assert_eq!(serde_json::to_string(&items).unwrap(), "[1,[2,[3]]]");
    }

    #[rstest]
    fn test_nested_from_json() {
        let items: Vec<Nested<i32>> = serde_json::from_str("[[1, 2], [[3]], 4]").unwrap();
        assert_eq!(flatten_all(items), vec![1, 2, 3, 4]);
    }
}
