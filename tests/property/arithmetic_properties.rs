use example_domains::{add, divide, multiply, subtract, Operation};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e12f64..1.0e12f64
}

fn nonzero() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("divisor must be nonzero", |b| *b != 0.0 && !b.is_nan())
}

fn operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(test_support::property_cases()))]

    #[test]
    fn test_add_is_commutative(a in finite(), b in finite()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn test_subtract_is_anti_commutative(a in finite(), b in finite()) {
        prop_assert_eq!(subtract(a, b), -subtract(b, a));
    }

    #[test]
    fn test_multiply_by_zero_is_zero(a in finite()) {
        prop_assert_eq!(multiply(a, 0.0), 0.0);
    }

    #[test]
    fn test_divide_zero_by_nonzero_is_zero(b in nonzero()) {
        prop_assert_eq!(divide(0.0, b), 0.0);
    }

    #[test]
    fn test_divide_positive_by_zero_is_infinity(a in 1.0e-300f64..1.0e300f64) {
        prop_assert_eq!(divide(a, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_divide_negative_by_zero_is_negative_infinity(a in -1.0e300f64..-1.0e-300f64) {
        prop_assert_eq!(divide(a, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_divide_by_one_is_identity(a in finite()) {
        prop_assert_eq!(divide(a, 1.0), a);
    }

    #[test]
    fn test_operation_parses_from_name_and_symbol(op in operation()) {
        prop_assert_eq!(op.name().to_uppercase().parse::<Operation>().unwrap(), op);
        prop_assert_eq!(op.symbol().parse::<Operation>().unwrap(), op);
    }

    #[test]
    fn test_arbitrary_tokens_never_panic(token in "\\PC{0,12}") {
        // Either it parses or returns an error - no panics
        let _ = token.parse::<Operation>();
    }
}
