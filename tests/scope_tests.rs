//! Integration tests for scoped pipeline blocks.
//!
//! Covers registration ordering, the error paths (both `Err` returns and
//! panics skip evaluation), nesting, and scopes over every container
//! variant.

use std::cell::Cell;
use std::panic;
use std::rc::Rc;

use functorial::prelude::*;
use rstest::rstest;

fn transform_each(function: fn(i64) -> i64, values: Vec<i64>) -> Vec<i64> {
    values.into_iter().map(function).collect()
}

fn sort_with_key(values: Vec<i64>, key: fn(&i64) -> (i64, i64, i64)) -> Vec<i64> {
    let mut sorted = values;
    sorted.sort_by_key(key);
    sorted
}

fn arithmetic(x: i64) -> i64 {
    let y = x % 3;
    let z = x + y;
    x + y + z
}

#[rstest]
fn scope_applies_stages_in_registration_order() {
    let result = Functor::wrap(String::from("abc")).scope(|block| {
        block.call(|text: String| text.to_uppercase());
        block.call(|text: String| text + "def");
    });
    assert_eq!(result, "ABCdef");
}

#[rstest]
fn scope_registrations_chain() {
    let result = Functor::wrap(2).scope(|block| {
        block.call(|x: i32| x + 10).call(|x: i32| x * 2);
    });
    assert_eq!(result, 24);
}

#[rstest]
fn scope_with_curried_stages_end_to_end() {
    let result = Functor::wrap((0..10).collect::<Vec<i64>>()).scope(|block| {
        block.call(curry2(transform_each).apply(arithmetic as fn(i64) -> i64));
        block.call(
            curry2(sort_with_key)
                .apply_second((|x: &i64| (x % 7, x % 3, *x)) as fn(&i64) -> (i64, i64, i64)),
        );
    });
    assert_eq!(result, vec![0, 14, 8, 16, 10, 18, 4, 12, 6, 20]);
}

#[rstest]
fn scope_registers_named_functions() {
    fn shout(text: String) -> String {
        text.to_uppercase()
    }

    let result = Functor::wrap(String::from("abc")).scope(|block| {
        block.call(shout);
        block.call(|text: String| format!("z{text}"));
    });
    assert_eq!(result, "zABC");
}

#[rstest]
fn try_scope_evaluates_on_ok() {
    let outcome: Result<i32, String> = Functor::wrap(1).try_scope(|block| {
        block.call(|x: i32| x + 1);
        Ok(())
    });
    assert_eq!(outcome, Ok(2));
}

#[rstest]
fn try_scope_error_skips_evaluation() {
    let touched = Rc::new(Cell::new(false));
    let witness = Rc::clone(&touched);

    let outcome: Result<i32, &str> = Functor::wrap(1).try_scope(|block| {
        block.call(move |x: i32| {
            witness.set(true);
            x + 1
        });
        Err("abandoned")
    });

    assert_eq!(outcome, Err("abandoned"));
    assert!(!touched.get());
}

#[rstest]
fn scope_panic_skips_evaluation() {
    let touched = Rc::new(Cell::new(false));
    let witness = Rc::clone(&touched);
    let base = Functor::wrap(1);

    let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        base.scope(|block| {
            block.call(move |x: i32| {
                witness.set(true);
                x + 1
            });
            panic!("interrupted");
        })
    }));

    assert!(outcome.is_err());
    assert!(!touched.get());
}

#[rstest]
fn scopes_nest_independently() {
    let result = Functor::wrap(4).scope(|outer| {
        let inner_value = Functor::wrap(10).scope(|inner| {
            inner.call(|x: i32| x + 1);
        });
        outer.call(move |x: i32| x * inner_value);
    });
    assert_eq!(result, 44);
}

#[rstest]
fn scope_over_the_list_instance() {
    let result = ListF::wrap([1, 2, 3]).scope(|block| {
        block.call(|x: i32| x * 2);
        block.call(|x: i32| x + 1);
    });
    assert_eq!(result, vec![3, 5, 7]);
}

#[rstest]
fn scope_over_the_optional_instance() {
    let present = Maybe::just(1).scope(|block| {
        block.call(|x: i32| x + 1);
    });
    assert_eq!(present, Some(2));

    let absent = Maybe::<i32>::nothing().scope(|block| {
        block.call(|x: i32| x + 1);
    });
    assert_eq!(absent, None);
}

#[rstest]
fn scope_leaves_the_source_container_reusable() {
    let base = Functor::wrap(3);
    let first = base.scope(|block| {
        block.call(|x: i32| x + 1);
    });
    let second = base.scope(|block| {
        block.call(|x: i32| x * 10);
    });
    assert_eq!(first, 4);
    assert_eq!(second, 30);
    assert_eq!(base.stage_count(), 0);
}
