//! Composition laws, checked over generated inputs.
//!
//! | Law        | Statement                                              |
//! |------------|--------------------------------------------------------|
//! | UNIT-EMPTY | `pipe!()(x) == x`                                      |
//! | UNIT-ONE   | `pipe!(f)(x) == f(x)`                                  |
//! | ORDER      | `pipe!(f, g, h)(x) == h(g(f(x)))`                      |
//! | ASSOC      | `then(then(f, g), h)(x) == then(f, then(g, h))(x)`     |
//! | FOLD       | `pipe([f, g, h])(x) == pipe!(f, g, h)(x)`              |
//! | PIPELINE   | `pipeline(f).map(g).map(h).run(x) == pipe!(f, g, h)(x)`|
//! | PICK       | `picker(k)(r) == pick(&k, r)`                          |

use piper_kernel::{always, identity, pick, picker, pipe, pipeline, then};
use proptest::prelude::*;
use std::collections::HashMap;

fn f(x: i64) -> i64 {
    x.wrapping_mul(3)
}

fn g(x: i64) -> i64 {
    x.wrapping_sub(7)
}

fn h(x: i64) -> String {
    format!("<{x}>")
}

proptest! {
    #[test]
    fn empty_pipe_is_identity(x in any::<i64>()) {
        let id = pipe!();
        prop_assert_eq!(id(x), x);
        prop_assert_eq!(identity(x), x);
    }

    #[test]
    fn single_pipe_is_the_function(x in any::<i64>()) {
        prop_assert_eq!(pipe!(f)(x), f(x));
    }

    #[test]
    fn pipe_applies_left_to_right(x in any::<i64>()) {
        prop_assert_eq!(pipe!(f, g, h)(x), h(g(f(x))));
    }

    #[test]
    fn composition_is_associative(x in any::<i64>()) {
        let left = then(then(f, g), h);
        let right = then(f, then(g, h));
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn runtime_fold_matches_macro(x in any::<i64>()) {
        let folded = pipe([f as fn(i64) -> i64, g, f]);
        prop_assert_eq!(folded(x), pipe!(f, g, f)(x));
    }

    #[test]
    fn pipeline_matches_pipe(x in any::<i64>()) {
        let built = pipeline(f).map(g).map(h);
        prop_assert_eq!(built.run(x), pipe!(f, g, h)(x));
    }

    #[test]
    fn always_ignores_any_input(x in any::<i64>(), v in "[a-z]{0,8}") {
        let constant = always(v.clone());
        prop_assert_eq!(constant(x), v);
    }

    #[test]
    fn curried_pick_equals_direct_pick(
        entries in prop::collection::hash_map("[a-z]{1,4}", any::<u32>(), 0..8),
        key in "[a-z]{1,4}",
    ) {
        let record: HashMap<String, u32> = entries;
        let direct = pick(key.as_str(), &record);
        let curried = picker::<&HashMap<String, u32>, _>(key.clone())(&record);
        prop_assert_eq!(direct, curried);
        prop_assert_eq!(direct, record.get(&key));
    }
}
