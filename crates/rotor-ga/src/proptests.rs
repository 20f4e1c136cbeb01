//! Property-based tests for blades and multivectors.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::basis::E41;
    use crate::blade::BasisBlade;
    use crate::multivector::Multivector;

    type Mv = Multivector<f64, E41>;

    // Integer-valued coordinates keep float products exact.
    fn coord() -> impl Strategy<Value = f64> {
        (-100i32..100).prop_map(f64::from)
    }

    fn euclidean() -> impl Strategy<Value = Mv> {
        (coord(), coord(), coord()).prop_map(|(x, y, z)| Mv::vector(0.0, x, y, z))
    }

    fn blade() -> impl Strategy<Value = BasisBlade<E41>> {
        (0u32..32).prop_map(|bits| BasisBlade::new(bits).unwrap())
    }

    proptest! {
        #[test]
        fn distinct_vectors_anticommute(i in 1u32..=5, j in 1u32..=5) {
            prop_assume!(i != j);
            let (ei, ej) = (BasisBlade::<E41>::e(i), BasisBlade::<E41>::e(j));
            // Blade equality ignores the sign, so compare signs separately.
            prop_assert_eq!(ei * ej, ej * ei);
            prop_assert_eq!((ei * ej).sign(), -(ej * ei).sign());
        }

        #[test]
        fn blade_squares_are_units(b in blade()) {
            let square = b * b;
            prop_assert!(square.is_scalar());
            prop_assert_eq!((square * square).sign(), 1);
        }

        #[test]
        fn blade_product_is_associative(a in blade(), b in blade(), c in blade()) {
            let lhs = (a * b) * c;
            let rhs = a * (b * c);
            prop_assert_eq!(lhs.bits(), rhs.bits());
            prop_assert_eq!(lhs.sign(), rhs.sign());
        }

        #[test]
        fn geometric_is_inner_plus_wedge(a in euclidean(), b in euclidean()) {
            let split = Mv::scalar(a.inner(&b)) + a.wedge(&b);
            prop_assert_eq!(&a * &b, split);
        }

        #[test]
        fn wedge_is_antisymmetric(a in euclidean(), b in euclidean()) {
            prop_assert_eq!(a.wedge(&b), -b.wedge(&a));
        }

        #[test]
        fn dual_of_wedge_is_cross_product(a in euclidean(), b in euclidean()) {
            let [a1, a2, a3] = [1, 2, 3].map(|n| a.coefficient(BasisBlade::e(n)));
            let [b1, b2, b3] = [1, 2, 3].map(|n| b.coefficient(BasisBlade::e(n)));
            let cross = Mv::vector(0.0, a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1);
            prop_assert_eq!(a.wedge(&b).dual(3).unwrap(), cross);
        }

        #[test]
        fn conformal_round_trip(x in coord(), y in coord(), z in coord()) {
            let point = Mv::conformal(x, y, z);
            prop_assert_eq!(point.inner(&point), 0.0);
            prop_assert_eq!(Mv::extract(&point).unwrap(), Mv::vector(0.0, x, y, z));
        }

        #[test]
        fn translation_versor_inverts(a in euclidean()) {
            let product = &Mv::translate_versor(&a) * &Mv::inv_translate_versor(&a);
            prop_assert_eq!(product, Mv::scalar(1.0));
        }

        #[test]
        fn translation_moves_points(x in coord(), y in coord(), z in coord(), a in euclidean()) {
            let moved = Mv::translate(&Mv::conformal(x, y, z), &a);
            let [a1, a2, a3] = [1, 2, 3].map(|n| a.coefficient(BasisBlade::e(n)));
            prop_assert_eq!(moved, Mv::conformal(x + a1, y + a2, z + a3));
        }
    }
}
