#![cfg(feature = "typeclass")]
//! Property-based tests for the monad laws across the container family.
//!
//! Every container must satisfy:
//!
//! 1. **Left Identity**: `unit(a).bind(f) == f(a)`
//! 2. **Right Identity**: `m.bind(unit) == m`
//! 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! plus the concrete chaining scenarios the library documents.

use monadic::prelude::*;
use proptest::prelude::*;
use rstest::rstest;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(just), Just(Maybe::Nothing)]
}

fn any_list() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..8).prop_map(List::from)
}

proptest! {
    // =========================================================================
    // Left Identity: unit(a).bind(f) == f(a)
    // =========================================================================

    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |n: i32| identity(n.wrapping_add(3));
        let left: Identity<i32> = Identity::<()>::unit(value).bind(function);
        prop_assert_eq!(left, function(value));
    }

    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        let function = |n: i32| if n % 2 == 0 { just(n.wrapping_mul(2)) } else { nothing() };
        let left: Maybe<i32> = Maybe::<()>::unit(value).bind(function);
        prop_assert_eq!(left, function(value));
    }

    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let function = |n: i32| either(n.wrapping_add(3));
        let left: Either<i32> = Monad::bind(Either::<()>::unit(value), function);
        prop_assert_eq!(*left.value(), *function(value).value());
    }

    #[test]
    fn prop_list_left_identity(value in any::<i32>()) {
        let function = |n: i32| list![n, n.wrapping_add(1)];
        let left: List<i32> = List::<()>::unit(value).bind(function);
        prop_assert_eq!(left, function(value));
    }

    // =========================================================================
    // Right Identity: m.bind(unit) == m
    // =========================================================================

    #[test]
    fn prop_identity_right_identity(value in any::<i32>()) {
        let monad = identity(value);
        prop_assert_eq!(monad.bind(|x| Identity::<()>::unit(x)), monad);
    }

    #[test]
    fn prop_maybe_right_identity(monad in any_maybe()) {
        prop_assert_eq!(monad.bind(|x| Maybe::<()>::unit(x)), monad);
    }

    #[test]
    fn prop_either_right_identity(left in any::<i32>(), right in any::<Option<i32>>()) {
        let monad = match right {
            Some(right) => either(left).with_right(right),
            None => either(left),
        };
        let rebuilt = Monad::bind(monad.clone(), |x| Either::<()>::unit(x));
        prop_assert_eq!(*rebuilt.value(), *monad.value());
    }

    #[test]
    fn prop_list_right_identity(monad in any_list()) {
        prop_assert_eq!(monad.clone().bind(|x| List::<()>::unit(x)), monad);
    }

    // =========================================================================
    // Associativity: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
    // =========================================================================

    #[test]
    fn prop_identity_associativity(value in any::<i32>()) {
        let f = |n: i32| identity(n.wrapping_add(1));
        let g = |n: i32| identity(n.wrapping_mul(2));

        let monad = identity(value);
        prop_assert_eq!(
            monad.bind(f).bind(g),
            monad.bind(|x| f(x).bind(g))
        );
    }

    #[test]
    fn prop_maybe_associativity(monad in any_maybe()) {
        let f = |n: i32| if n % 3 == 0 { nothing() } else { just(n.wrapping_add(1)) };
        let g = |n: i32| just(n.wrapping_mul(2));

        prop_assert_eq!(
            monad.bind(f).bind(g),
            monad.bind(|x| f(x).bind(g))
        );
    }

    #[test]
    fn prop_either_associativity(value in any::<i32>()) {
        let f = |n: i32| either(n.wrapping_add(1));
        let g = |n: i32| either(n.wrapping_mul(2));

        let monad = either(value);
        let left = Monad::bind(Monad::bind(monad.clone(), f), g);
        let right = Monad::bind(monad, |x| Monad::bind(f(x), g));
        prop_assert_eq!(*left.value(), *right.value());
    }

    #[test]
    fn prop_list_associativity(monad in any_list()) {
        let f = |n: i32| list![n, n.wrapping_add(10)];
        let g = |n: i32| list![n.wrapping_mul(100)];

        prop_assert_eq!(
            monad.clone().bind(f).bind(g),
            monad.bind(|x| f(x).bind(g))
        );
    }

    // =========================================================================
    // map with the identity transform
    // =========================================================================

    #[test]
    fn prop_map_identity_is_idempotent(monad in any_maybe()) {
        prop_assert_eq!(monad.map(|x| x), monad);
    }

    #[test]
    fn prop_list_map_identity_is_idempotent(monad in any_list()) {
        prop_assert_eq!(monad.clone().map(|x| x), monad);
    }
}

// =============================================================================
// Documented chaining scenarios
// =============================================================================

#[rstest]
fn identity_chain_scenario() {
    assert_eq!(identity(5).bind(|x| x + 3), 8);
}

#[rstest]
fn maybe_factory_scenarios() {
    assert_eq!(maybe::<i32>(None), nothing());
    assert_eq!(maybe(Some(5)).value(), Some(&5));
}

#[rstest]
fn either_chain_scenarios() {
    assert_eq!(either(5).with_right(7).bind(|x| x + 3), 10);
    assert_eq!(either(5).bind(|x| x + 3), 8);
}

#[rstest]
fn list_chain_scenario() {
    let result = list![5, 7, 11].bind(|x| list![x + 3]);
    assert_eq!(result, list![8, 10, 14]);
}

#[rstest]
fn list_single_argument_scenario() {
    // One argument means one element, never a pre-sized sequence
    assert_eq!(list![3].as_slice(), &[3]);
}

#[rstest]
fn lifted_transforms_compose_across_types() {
    assert_eq!(identity(5).bind(Identity::lift(|x: i32| x + 3)), identity(8));
    assert_eq!(just(5).bind(Maybe::lift(|x: i32| x + 3)), just(8));
    assert_eq!(list![5].bind(List::lift(|x: i32| x + 3)), list![8]);
}

#[rstest]
fn lift2_accepts_raw_and_wrapped_operands() {
    let lifted = Maybe::lift2(|x: i32, y: i32| x + y);
    assert_eq!(lifted(5, 3), just(8));

    let lifted = Maybe::lift2(|x: i32, y: i32| x + y);
    assert_eq!(lifted(just(5), just(3)), just(8));

    let lifted = List::lift2(|x: i32, y: i32| x + y);
    assert_eq!(lifted(list![5], list![3]), list![8]);
}
