mod common;

use common::{any_matrix, assert_allclose, assert_allclose_f64, dominant_square};
use matkern_core::Matrix;
use matkern_core::linalg::{
    LuDecomposition, determinant, inverse_via_cofactors, inverse_via_elimination, lu, multiply,
    solve,
};
use proptest::prelude::*;

fn product_triple() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>, Matrix<f64>)> {
    (1usize..=4, 1usize..=4, 1usize..=4, 1usize..=4)
        .prop_flat_map(|(m, k, l, n)| (any_matrix(m, k), any_matrix(k, l), any_matrix(l, n)))
}

fn system(max_n: usize) -> impl Strategy<Value = (Matrix<f64>, Vec<f64>)> {
    dominant_square(max_n).prop_flat_map(|a| {
        let n = a.rows();
        (Just(a), prop::collection::vec(-10.0_f64..10.0, n))
    })
}

proptest! {
    #[test]
    fn prop_multiply_associative((a, b, c) in product_triple()) {
        let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left.shape(), (a.rows(), c.cols()));
        assert_allclose(&left, &right, 1e-10, 1e-8, "(AB)C vs A(BC)");
    }

    #[test]
    fn prop_elimination_inverse_is_inverse(m in dominant_square(6)) {
        let inv = inverse_via_elimination(&m).unwrap();
        let eye = Matrix::identity(m.rows()).unwrap();
        assert_allclose(&multiply(&m, &inv).unwrap(), &eye, 0.0, 1e-10, "M * inv(M)");
    }

    #[test]
    fn prop_inverse_strategies_agree(m in dominant_square(5)) {
        let by_elimination = inverse_via_elimination(&m).unwrap();
        let by_cofactors = inverse_via_cofactors(&m).unwrap();
        assert_allclose(&by_cofactors, &by_elimination, 1e-9, 1e-10, "cofactor vs elimination");
    }

    #[test]
    fn prop_lu_reconstructs(m in dominant_square(6)) {
        let (l, u) = lu(&m).unwrap();
        assert_allclose(&multiply(&l, &u).unwrap(), &m, 0.0, 1e-10, "L * U");
    }

    #[test]
    fn prop_lu_determinant_matches_cofactor(m in dominant_square(5)) {
        let by_lu = LuDecomposition::decompose(&m).unwrap().determinant();
        let by_cofactors = determinant(&m).unwrap();
        assert_allclose_f64(&[by_lu], &[by_cofactors], 1e-9, 1e-9, "det");
    }

    #[test]
    fn prop_solve_residual((a, b) in system(6)) {
        let x = solve(&a, &b).unwrap();
        let xm = Matrix::from_vec(x, a.rows(), 1).unwrap();
        let ax = multiply(&a, &xm).unwrap();
        assert_allclose_f64(ax.as_slice(), &b, 0.0, 1e-9, "A * x vs b");
    }

    #[test]
    fn prop_zero_row_determinant(m in dominant_square(5), row in 0usize..5) {
        let n = m.rows();
        let row = row % n;
        let mut z = m.clone();
        for c in 0..n {
            z[(row, c)] = 0.0;
        }
        prop_assert_eq!(determinant(&z).unwrap(), 0.0);
    }
}

#[test]
fn identity_determinant_is_one() {
    for n in 1..=7 {
        let eye = Matrix::<f64>::identity(n).unwrap();
        assert_eq!(determinant(&eye).unwrap(), 1.0, "n = {n}");
    }
}
