//! Unit tests for the Io monad.
//!
//! This module tests the Io type's basic functionality and ensures that
//! side effects are properly deferred until `exec` is called.

use deferio::effect::Io;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// =============================================================================
// Basic Construction Tests
// =============================================================================

mod construction {
    use super::*;

    #[rstest]
    fn test_io_of_and_exec() {
        let action = Io::of(42);
        assert_eq!(action.exec(), 42);
    }

    #[rstest]
    fn test_io_new_and_exec() {
        let action = Io::new(|| 42 + 8);
        assert_eq!(action.exec(), 50);
    }

    #[rstest]
    fn test_io_of_with_string() {
        let action = Io::of("scooter".to_string());
        assert_eq!(action.exec(), "scooter");
    }

    #[rstest]
    fn test_io_new_with_capturing_closure() {
        let value = 10;
        let action = Io::new(move || value * 3);
        assert_eq!(action.exec(), 30);
    }
}

// =============================================================================
// Deferral Tests (side effects wait for exec)
// =============================================================================

mod deferral {
    use super::*;

    #[rstest]
    fn test_io_new_is_deferred() {
        let executed = Arc::new(AtomicBool::new(false));
        let executed_clone = executed.clone();

        let action = Io::new(move || {
            executed_clone.store(true, Ordering::SeqCst);
            42
        });

        assert!(
            !executed.load(Ordering::SeqCst),
            "Io should not execute on construction"
        );

        let result = action.exec();
        assert!(
            executed.load(Ordering::SeqCst),
            "Io should execute on exec"
        );
        assert_eq!(result, 42);
    }

    #[rstest]
    fn test_io_map_is_deferred() {
        let executed = Arc::new(AtomicBool::new(false));
        let executed_clone = executed.clone();

        let action = Io::new(move || {
            executed_clone.store(true, Ordering::SeqCst);
            21
        })
        .map(|x| x * 2);

        assert!(
            !executed.load(Ordering::SeqCst),
            "Io should not execute after map"
        );

        assert_eq!(action.exec(), 42);
        assert!(executed.load(Ordering::SeqCst));
    }

    #[rstest]
    fn test_io_bind_is_deferred() {
        let first_executed = Arc::new(AtomicBool::new(false));
        let second_executed = Arc::new(AtomicBool::new(false));
        let first_clone = first_executed.clone();
        let second_clone = second_executed.clone();

        let action = Io::new(move || {
            first_clone.store(true, Ordering::SeqCst);
            10
        })
        .bind(move |x| {
            let second_clone = second_clone.clone();
            Io::new(move || {
                second_clone.store(true, Ordering::SeqCst);
                x * 2
            })
        });

        assert!(
            !first_executed.load(Ordering::SeqCst),
            "First Io should not execute after bind"
        );
        assert!(
            !second_executed.load(Ordering::SeqCst),
            "Second Io should not execute after bind"
        );

        assert_eq!(action.exec(), 20);
        assert!(first_executed.load(Ordering::SeqCst));
        assert!(second_executed.load(Ordering::SeqCst));
    }

    #[rstest]
    fn test_io_composition_keeps_effect_count_at_zero() {
        let effect_count = Arc::new(AtomicUsize::new(0));
        let count_clone = effect_count.clone();

        let action = Io::new(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
            1
        })
        .map(|x| x + 1)
        .bind(|x| Io::of(x * 10))
        .then(Io::of(7));

        assert_eq!(
            effect_count.load(Ordering::SeqCst),
            0,
            "no combination of of/new/map/bind may run the effect"
        );

        assert_eq!(action.exec(), 7);
        assert_eq!(effect_count.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_io_ap_is_deferred() {
        let executed = Arc::new(AtomicBool::new(false));
        let executed_clone = executed.clone();

        let action = Io::of(|x: i32| x + 1).ap(Io::new(move || {
            executed_clone.store(true, Ordering::SeqCst);
            41
        }));

        assert!(
            !executed.load(Ordering::SeqCst),
            "ap should not force either side"
        );
        assert_eq!(action.exec(), 42);
        assert!(executed.load(Ordering::SeqCst));
    }
}

// =============================================================================
// Functor (map) Tests
// =============================================================================

mod functor {
    use super::*;

    #[rstest]
    fn test_io_map_basic() {
        let action = Io::of(21).map(|x| x * 2);
        assert_eq!(action.exec(), 42);
    }

    #[rstest]
    fn test_io_map_chain() {
        let action = Io::of(10)
            .map(|x| x + 5)
            .map(|x| x * 2)
            .map(|x| x - 10);
        assert_eq!(action.exec(), 20); // ((10 + 5) * 2) - 10 = 20
    }

    #[rstest]
    fn test_io_map_type_change() {
        let action = Io::of(42).map(|x| format!("value: {x}"));
        assert_eq!(action.exec(), "value: 42");
    }

    #[rstest]
    fn test_io_map_identity() {
        let action = Io::of(42).map(|x| x);
        assert_eq!(action.exec(), 42);
    }
}

// =============================================================================
// Applicative (ap, map2, product) Tests
// =============================================================================

mod applicative {
    use super::*;

    #[rstest]
    fn test_io_ap_applies_a_forced_function_to_a_forced_argument() {
        let value = Io::of(|text: String| text.to_uppercase())
            .ap(Io::of("foo".to_string()))
            .flat_map(|text| text);
        assert_eq!(value, "FOO");
    }

    #[rstest]
    #[case(0, "FOO")]
    #[case(1, "OO")]
    #[case(3, "")]
    fn test_io_ap_with_parameterized_function(#[case] skip: usize, #[case] expected: &str) {
        let action = Io::of(move |text: String| {
            text.chars().skip(skip).collect::<String>().to_uppercase()
        })
        .ap(Io::of("foo".to_string()));
        assert_eq!(action.exec(), expected);
    }

    #[rstest]
    fn test_io_map2() {
        let action = Io::of(10).map2(Io::of(20), |a, b| a + b);
        assert_eq!(action.exec(), 30);
    }

    #[rstest]
    fn test_io_map2_with_different_types() {
        let action = Io::of(42).map2(Io::of("hello".to_string()), |n, s| format!("{s}: {n}"));
        assert_eq!(action.exec(), "hello: 42");
    }

    #[rstest]
    fn test_io_product() {
        let action = Io::of(10).product(Io::of("hello".to_string()));
        assert_eq!(action.exec(), (10, "hello".to_string()));
    }
}

// =============================================================================
// Monad (bind) Tests
// =============================================================================

mod monad {
    use super::*;

    #[rstest]
    fn test_io_bind_basic() {
        let action = Io::of(10).bind(|x| Io::of(x * 2));
        assert_eq!(action.exec(), 20);
    }

    #[rstest]
    fn test_io_bind_chain() {
        let action = Io::of(5)
            .bind(|x| Io::of(x + 10))
            .bind(|x| Io::of(x * 2));
        assert_eq!(action.exec(), 30); // (5 + 10) * 2 = 30
    }

    #[rstest]
    fn test_io_bind_folds_a_sequence_with_addition() {
        let action = Io::of(vec![1, 2, 3, 4, 5])
            .bind(|numbers| Io::of(numbers.into_iter().fold(0, |acc, n| acc + n)));
        assert_eq!(action.exec(), 15);
    }

    #[rstest]
    fn test_io_and_then_alias() {
        let action = Io::of(10).and_then(|x| Io::of(x + 5));
        assert_eq!(action.exec(), 15);
    }

    #[rstest]
    fn test_io_then_discards_result_but_runs_effect() {
        let execution_count = Arc::new(AtomicUsize::new(0));
        let count_clone = execution_count.clone();

        let action = Io::new(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
            "first result"
        })
        .then(Io::of("second result".to_string()));

        let result = action.exec();
        assert_eq!(result, "second result");
        assert_eq!(
            execution_count.load(Ordering::SeqCst),
            1,
            "First Io should have executed"
        );
    }
}

// =============================================================================
// flat_map Dual Behavior Tests
// =============================================================================

mod flat_map {
    use super::*;

    #[rstest]
    fn test_flat_map_with_plain_function_yields_plain_value() {
        let value = Io::of("scooter".to_string()).flat_map(|s| s.to_uppercase());
        assert_eq!(value, "SCOOTER");
    }

    #[rstest]
    fn test_flat_map_action_forces_the_inner_action() {
        let value = Io::of("scooter".to_string())
            .flat_map_action(|s| Io::of(s.to_uppercase()));
        assert_eq!(value, "SCOOTER");
    }

    #[rstest]
    fn test_flat_map_forces_immediately() {
        let executed = Arc::new(AtomicBool::new(false));
        let executed_clone = executed.clone();

        let value = Io::new(move || {
            executed_clone.store(true, Ordering::SeqCst);
            21
        })
        .flat_map(|x| x * 2);

        assert!(executed.load(Ordering::SeqCst));
        assert_eq!(value, 42);
    }
}

// =============================================================================
// Identity Read-Back Tests
// =============================================================================

mod read_io {
    use super::*;

    #[rstest]
    fn test_read_io_normalizes_a_value_into_the_action_type() {
        let read = Io::of("foo".to_string()).read_io();
        assert_eq!(read.exec(), "foo");
    }

    #[rstest]
    fn test_read_io_forces_eagerly() {
        let executed = Arc::new(AtomicBool::new(false));
        let executed_clone = executed.clone();

        let read = Io::new(move || {
            executed_clone.store(true, Ordering::SeqCst);
            "foo"
        })
        .read_io();

        // The inner force happens at call time; the wrapper stays pure.
        assert!(executed.load(Ordering::SeqCst));
        assert_eq!(read.exec(), "foo");
    }
}

// =============================================================================
// Composite Operation Tests
// =============================================================================

mod composite_operations {
    use super::*;

    #[rstest]
    fn test_io_complex_chain() {
        let action = Io::of(1)
            .bind(|x| Io::of(x + 1))
            .map(|x| x * 10)
            .bind(|x| Io::of(x + 5))
            .map(|x| format!("result: {x}"));

        assert_eq!(action.exec(), "result: 25");
    }

    #[rstest]
    fn test_io_side_effect_order_is_left_to_right() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let order1 = order.clone();
        let order2 = order.clone();
        let order3 = order.clone();

        let action = Io::new(move || {
            order1.lock().unwrap().push(1);
            "first"
        })
        .bind(move |_| {
            Io::new(move || {
                order2.lock().unwrap().push(2);
                "second"
            })
        })
        .bind(move |_| {
            Io::new(move || {
                order3.lock().unwrap().push(3);
                "third"
            })
        });

        let _ = action.exec();
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }
}
