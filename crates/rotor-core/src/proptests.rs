//! Property-based tests for symbol arithmetic and ordering.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{Fraction, Symbol};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Small trees over three variables and small constants.
    fn symbol_tree() -> impl Strategy<Value = Symbol> {
        let leaf = prop_oneof![
            prop::sample::select(vec!["a", "b", "c"]).prop_map(Symbol::var),
            (-5i64..6).prop_map(Symbol::integer),
        ];
        leaf.prop_recursive(4, 24, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l + r),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l - r),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l * r),
                inner.prop_map(|x| -x),
            ]
        })
    }

    proptest! {
        #[test]
        fn fraction_add_matches_cross_multiplication(
            a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int()
        ) {
            let sum = Fraction::new(a, b).unwrap().checked_add(Fraction::new(c, d).unwrap()).unwrap();
            prop_assert_eq!(sum, Fraction::new(a * d + c * b, b * d).unwrap());
        }

        #[test]
        fn rational_symbols_fold_exactly(a in small_int(), b in small_int()) {
            prop_assert_eq!(Symbol::integer(a) + Symbol::integer(b), Symbol::integer(a + b));
            prop_assert_eq!(Symbol::integer(a) * Symbol::integer(b), Symbol::integer(a * b));
            prop_assert_eq!(Symbol::integer(a) - Symbol::integer(b), Symbol::integer(a - b));
        }

        #[test]
        fn additive_identity(x in symbol_tree()) {
            prop_assert_eq!(&x + Symbol::zero(), x.clone());
            prop_assert_eq!(Symbol::zero() + &x, x);
        }

        #[test]
        fn negation_is_an_involution(x in symbol_tree()) {
            prop_assert_eq!(-(-&x), x);
        }

        #[test]
        fn self_difference_is_zero(x in symbol_tree()) {
            prop_assert_eq!(&x - &x, Symbol::zero());
        }

        #[test]
        fn order_is_antisymmetric(x in symbol_tree(), y in symbol_tree()) {
            prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
            prop_assert_eq!(x.cmp(&y) == Ordering::Equal, x == y);
        }

        #[test]
        fn order_is_transitive(x in symbol_tree(), y in symbol_tree(), z in symbol_tree()) {
            let mut v = vec![x, y, z];
            v.sort();
            prop_assert!(v[0] <= v[1]);
            prop_assert!(v[1] <= v[2]);
            prop_assert!(v[0] <= v[2]);
        }
    }
}
