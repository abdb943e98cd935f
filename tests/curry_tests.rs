//! Integration tests for the placeholder-aware curry engine.
//!
//! Covers argument merging, readiness, continuation reuse and error
//! propagation through `Curried` chains built with `curry` and `args!`.

#![cfg(feature = "curry")]

use rstest::rstest;
use slotted::args;
use slotted::curry::{
    Application, Argument, Arguments, Curried, CurryError, Invocation, PLACEHOLDER, curry,
};

fn label(invocation: Invocation<i32>) -> String {
    let values = invocation.required();
    format!("{}_{}_{}", values[0], values[1], values[2])
}

fn sum(invocation: Invocation<i32>) -> i32 {
    invocation.required().iter().sum()
}

fn echo(invocation: Invocation<i32>) -> Vec<Argument<i32>> {
    invocation.into_arguments().into_vec()
}

// =============================================================================
// Full and split application
// =============================================================================

mod application_tests {
    use super::*;

    #[rstest]
    fn test_full_application_matches_direct_call() {
        let curried = curry(sum, 3);
        assert_eq!(curried.call(args![1, 2, 3]).complete(), Some(6));
    }

    #[rstest]
    #[case(vec![args![1, 2, 3]])]
    #[case(vec![args![1, 2], args![3]])]
    #[case(vec![args![1], args![2, 3]])]
    #[case(vec![args![1], args![2], args![3]])]
    #[case(vec![args![], args![1], args![], args![2, 3]])]
    fn test_grouping_does_not_change_result(#[case] groups: Vec<Arguments<i32>>) {
        let mut application = Application::Partial(curry(sum, 3));
        for group in groups {
            application = application.call(group).unwrap();
        }
        assert_eq!(application.complete(), Some(6));
    }

    #[rstest]
    fn test_placeholders_fill_in_any_order() {
        let result = curry(label, 3)
            .call(args![__, __, 3, 4])
            .call(args![1, __])
            .and_then(|application| application.call(args![2, 5]))
            .map(Application::complete);

        assert_eq!(result, Ok(Some("1_2_3".to_string())));
    }

    #[rstest]
    fn test_placeholder_fill_order_is_left_to_right() {
        let waiting = curry(label, 3)
            .call(args![__, __, 3, 4])
            .partial()
            .unwrap();
        let waiting = waiting.call(args![1, __]).partial().unwrap();

        assert_eq!(
            waiting.pending(),
            &[
                Argument::Value(1),
                Argument::Placeholder,
                Argument::Value(3),
                Argument::Value(4),
            ]
        );
        assert_eq!(waiting.remaining(), 1);
    }

    #[rstest]
    fn test_extra_values_are_forwarded() {
        let curried = curry(echo, 2);
        assert_eq!(
            curried.call(args![1, 2, 3, 4]).complete(),
            Some(vec![
                Argument::Value(1),
                Argument::Value(2),
                Argument::Value(3),
                Argument::Value(4),
            ])
        );
    }

    #[rstest]
    fn test_call_with_values_skips_placeholders() {
        let curried = curry(sum, 2);
        let waiting = curried.call_with_values([40]).partial().unwrap();
        assert_eq!(waiting.call_with_values([2]).complete(), Some(42));
    }
}

// =============================================================================
// Readiness
// =============================================================================

mod readiness_tests {
    use super::*;

    #[rstest]
    fn test_trailing_placeholder_does_not_block_invocation() {
        let curried = curry(echo, 2);
        assert_eq!(
            curried.call(args![5, 6, __]).complete(),
            Some(vec![
                Argument::Value(5),
                Argument::Value(6),
                Argument::Placeholder,
            ])
        );
    }

    #[rstest]
    #[case(args![__, 2])]
    #[case(args![1, __])]
    #[case(args![1])]
    #[case(args![__, __, 3])]
    fn test_open_slot_in_arity_window_waits(#[case] arguments: Arguments<i32>) {
        assert!(curry(sum, 2).call(arguments).is_partial());
    }

    #[rstest]
    #[case(args![])]
    #[case(args![1, 2])]
    #[case(args![__])]
    fn test_zero_arity_invokes_on_first_call(#[case] arguments: Arguments<i32>) {
        let constant = curry(|_: Invocation<i32>| "ran", 0);
        assert_eq!(constant.call(arguments).complete(), Some("ran"));
    }

    #[rstest]
    fn test_empty_call_returns_equivalent_continuation() {
        let waiting = curry(sum, 2).call(args![1]).partial().unwrap();
        let same = waiting.call(args![]).partial().unwrap();

        assert_eq!(same.pending(), waiting.pending());
        assert_eq!(same.call(args![2]).complete(), Some(3));
    }

    #[rstest]
    fn test_supplied_placeholder_keeps_slot_open() {
        let waiting = curry(sum, 2).call(args![__, 2]).partial().unwrap();
        let still_waiting = waiting.call(Arguments::new().with(PLACEHOLDER)).partial().unwrap();

        assert_eq!(still_waiting.remaining(), 1);
        assert_eq!(still_waiting.call(args![1]).complete(), Some(3));
    }

    #[rstest]
    fn test_placeholder_identity_is_not_value_equality() {
        let curried: Curried<Option<i32>, usize> =
            curry(|invocation: Invocation<Option<i32>>| invocation.len(), 1);
        assert_eq!(curried.call(args![None]).complete(), Some(1));
    }

    #[rstest]
    fn test_none_supplied_through_with_is_a_value() {
        let arguments = Arguments::<Option<i32>>::new().with(Argument::Value(None));
        assert_eq!(arguments.as_slice(), &[Argument::Value(None)]);

        let count = curry(|invocation: Invocation<Option<i32>>| invocation.required().to_vec(), 1);
        assert_eq!(count.call(arguments).complete(), Some(vec![None]));
    }
}

// =============================================================================
// Continuation reuse
// =============================================================================

mod reuse_tests {
    use super::*;

    #[rstest]
    fn test_continuation_can_be_called_twice() {
        let waiting = curry(label, 3).call(args![1, __, 3]).partial().unwrap();

        assert_eq!(waiting.call(args![2]).complete(), Some("1_2_3".to_string()));
        assert_eq!(waiting.call(args![9]).complete(), Some("1_9_3".to_string()));
        assert_eq!(waiting.pending().len(), 3);
    }

    #[rstest]
    fn test_entry_point_is_reusable() {
        let curried = curry(sum, 2);
        let first = curried.call(args![1]).partial().unwrap();
        let second = curried.call(args![10]).partial().unwrap();

        assert_eq!(first.call(args![1]).complete(), Some(2));
        assert_eq!(second.call(args![10]).complete(), Some(20));
        assert!(curried.pending().is_empty());
    }

    #[rstest]
    fn test_cloned_chain_shares_state() {
        let waiting = curry(sum, 2).call(args![5]).partial().unwrap();
        let cloned = waiting.clone();
        assert_eq!(cloned.call(args![5]).complete(), Some(10));
        assert_eq!(waiting.call(args![6]).complete(), Some(11));
    }
}

// =============================================================================
// Errors
// =============================================================================

mod error_tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct DivisionByZero;

    fn divide(invocation: Invocation<i32>) -> Result<i32, DivisionByZero> {
        let [numerator, denominator] = invocation
            .into_required_array::<2>()
            .map_err(|_| DivisionByZero)?;
        if denominator == 0 {
            Err(DivisionByZero)
        } else {
            Ok(numerator / denominator)
        }
    }

    #[rstest]
    #[case(-1)]
    #[case(-42)]
    #[case(isize::MIN)]
    fn test_negative_arity_is_rejected(#[case] arity: isize) {
        let result = Curried::try_new(sum, arity);
        assert_eq!(result.err(), Some(CurryError::NegativeArity { arity }));
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    fn test_non_negative_arity_is_accepted(#[case] arity: isize) {
        let curried = Curried::try_new(sum, arity).unwrap();
        assert_eq!(curried.arity(), arity.unsigned_abs());
    }

    #[rstest]
    fn test_target_error_passes_through_unchanged() {
        let waiting = curry(divide, 2).call(args![__, 0]).partial().unwrap();
        assert_eq!(waiting.call(args![10]).complete(), Some(Err(DivisionByZero)));
        assert!(waiting.call(args![__]).is_partial());
    }

    #[rstest]
    fn test_target_success_passes_through() {
        let result = curry(divide, 2).call(args![10, 2]).complete();
        assert_eq!(result, Some(Ok(5)));
    }

    #[rstest]
    fn test_completed_application_is_not_callable() {
        let done = curry(sum, 1).call(args![1]);
        assert_eq!(done.call(args![2]).err(), Some(CurryError::AlreadyInvoked));
    }

    #[rstest]
    #[should_panic(expected = "target panicked")]
    fn test_target_panic_reaches_caller() {
        let explode = curry(|_: Invocation<i32>| -> i32 { panic!("target panicked") }, 1);
        let _ = explode.call(args![1]);
    }
}

// =============================================================================
// Mapping
// =============================================================================

mod map_tests {
    use super::*;

    #[rstest]
    fn test_map_transforms_result_of_partial_chain() {
        let described = curry(sum, 2)
            .call(args![__, 2])
            .map(|total| format!("total: {total}"));

        assert_eq!(
            described.call(args![40]).map(Application::complete),
            Ok(Some("total: 42".to_string()))
        );
    }

    #[rstest]
    fn test_into_result_separates_outcomes() {
        let curried = curry(sum, 2);
        assert_eq!(curried.call(args![1, 2]).into_result().ok(), Some(3));
        assert!(curried.call(args![1]).into_result().is_err());
    }
}
