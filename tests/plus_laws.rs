#![cfg(feature = "typeclass")]
//! Property-based tests for the zero/plus laws on `Maybe` and `List`.
//!
//! 1. **Absorption**: `zero.bind(f) == zero` and `m.bind(|_| zero) == zero`
//! 2. **Left Identity**: `zero.plus(m) == m`
//! 3. **Right Identity**: `m.plus(zero) == m`
//! 4. **Associativity**: `m.plus(n.plus(o)) == (m.plus(n)).plus(o)`

use monadic::prelude::*;
use proptest::prelude::*;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(just), Just(Maybe::Nothing)]
}

fn any_list() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..8).prop_map(List::from)
}

proptest! {
    // =========================================================================
    // Maybe
    // =========================================================================

    #[test]
    fn prop_maybe_zero_absorbs_bind(offset in any::<i32>()) {
        let result = Maybe::<i32>::zero().bind(move |n| just(n.wrapping_add(offset)));
        prop_assert_eq!(result, Maybe::zero());
    }

    #[test]
    fn prop_maybe_bind_into_zero_is_zero(monad in any_maybe()) {
        prop_assert_eq!(monad.bind(|_| Maybe::<i32>::zero()), Maybe::zero());
    }

    #[test]
    fn prop_maybe_zero_is_left_identity_for_plus(monad in any_maybe()) {
        prop_assert_eq!(Maybe::zero().plus(monad), monad);
    }

    #[test]
    fn prop_maybe_zero_is_right_identity_for_plus(monad in any_maybe()) {
        prop_assert_eq!(monad.plus(Maybe::zero()), monad);
    }

    #[test]
    fn prop_maybe_plus_is_associative(
        m in any_maybe(),
        n in any_maybe(),
        o in any_maybe()
    ) {
        prop_assert_eq!(m.plus(n.plus(o)), m.plus(n).plus(o));
    }

    #[test]
    fn prop_maybe_plus_picks_first_just(first in any::<i32>(), second in any_maybe()) {
        prop_assert_eq!(just(first).plus(second), just(first));
    }

    // =========================================================================
    // List
    // =========================================================================

    #[test]
    fn prop_list_zero_absorbs_bind(offset in any::<i32>()) {
        let result = List::<i32>::zero().bind(move |n| list![n.wrapping_add(offset)]);
        prop_assert_eq!(result, List::zero());
    }

    #[test]
    fn prop_list_bind_into_zero_is_zero(monad in any_list()) {
        prop_assert_eq!(monad.bind(|_: i32| List::<i32>::zero()), List::zero());
    }

    #[test]
    fn prop_list_zero_is_left_identity_for_plus(monad in any_list()) {
        prop_assert_eq!(List::zero().plus(monad.clone()), monad);
    }

    #[test]
    fn prop_list_zero_is_right_identity_for_plus(monad in any_list()) {
        prop_assert_eq!(monad.clone().plus(List::zero()), monad);
    }

    #[test]
    fn prop_list_plus_is_associative(
        m in any_list(),
        n in any_list(),
        o in any_list()
    ) {
        prop_assert_eq!(
            m.clone().plus(n.clone().plus(o.clone())),
            m.plus(n).plus(o)
        );
    }

    #[test]
    fn prop_list_plus_length_is_sum(m in any_list(), n in any_list()) {
        let expected = m.len() + n.len();
        prop_assert_eq!(m.plus(n).len(), expected);
    }
}
