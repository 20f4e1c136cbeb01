//! Property-based tests for the normal-form passes.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{get_multiple, normal_form};
    use rotor_core::Symbol;

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Polynomial trees over three variables. Kept shallow: products of
    // sums expand multiplicatively and cancellation is quadratic.
    fn poly_tree() -> impl Strategy<Value = Symbol> {
        let leaf = prop_oneof![
            prop::sample::select(vec!["a", "b", "c"]).prop_map(Symbol::var),
            (-5i64..6).prop_map(Symbol::integer),
        ];
        leaf.prop_recursive(3, 12, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l + r),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l - r),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| l * r),
                inner.prop_map(|x| -x),
            ]
        })
    }

    fn nf(x: &Symbol) -> Symbol {
        normal_form(x).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn normal_form_is_idempotent(x in poly_tree()) {
            let once = nf(&x);
            prop_assert_eq!(nf(&once), once);
        }

        #[test]
        fn sum_with_negated_copy_vanishes(x in poly_tree()) {
            let negated = Symbol::build_str("*", Symbol::minus_one(), Some(x.clone())).unwrap();
            let raw = Symbol::build_str("+", x, Some(negated)).unwrap();
            prop_assert_eq!(nf(&raw), Symbol::zero());
        }

        #[test]
        fn commuted_operands_share_a_normal_form(x in poly_tree(), y in poly_tree()) {
            prop_assert_eq!(nf(&(&x + &y)), nf(&(&y + &x)));
            prop_assert_eq!(nf(&(&x * &y)), nf(&(&y * &x)));
        }

        #[test]
        fn distribution_is_correct(x in poly_tree(), y in poly_tree(), z in poly_tree()) {
            prop_assert_eq!(nf(&(&x * (&y + &z))), nf(&(&x * &y + &x * &z)));
            prop_assert_eq!(nf(&((&y - &z) * &x)), nf(&(&y * &x - &z * &x)));
        }

        #[test]
        fn nested_mixed_forms_agree(x in poly_tree(), y in poly_tree()) {
            let product = (&x + &y) * (&x - &y);
            let difference = &x * &x - &y * &y;
            prop_assert_eq!(nf(&product), nf(&difference));
        }

        #[test]
        fn thirds_sum_exactly(k in non_zero_int()) {
            let third = Symbol::rational(1, 3).unwrap();
            let a = Symbol::var("a");
            let term = &third * &a * k;
            prop_assert_eq!(nf(&(&term + &term + &term)), Symbol::integer(k) * &a);
        }

        #[test]
        fn get_multiple_recovers_scale(k in non_zero_int()) {
            let ab = Symbol::var("a") * Symbol::var("b");
            prop_assert_eq!(get_multiple(&(Symbol::integer(k) * &ab)).unwrap(), Symbol::integer(k));
            prop_assert_eq!(get_multiple(&(&ab / k)).unwrap(), Symbol::rational(1, k).unwrap());
        }
    }
}
