//! Property-based tests for matrix products.

use proptest::prelude::*;

use tutorials_matrix::{Matrix, MatrixError};

/// A `rows x cols` matrix with small entries, so products never overflow.
fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(prop::collection::vec(-20i32..20, cols), rows)
        .prop_map(|rows| Matrix::new(rows).expect("generated rows are rectangular"))
}

fn product_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..6, 1usize..6, 1usize..6)
        .prop_flat_map(|(n, m, p)| (matrix(n, m), matrix(m, p)))
}

proptest! {
    #[test]
    fn product_has_outer_dimensions((a, b) in product_pair()) {
        let product = a.multiply(&b).expect("inner dimensions match");
        prop_assert_eq!(product.dimensions(), (a.rows(), b.cols()));
    }

    #[test]
    fn elements_are_dot_products((a, b) in product_pair()) {
        let product = a.multiply(&b).expect("inner dimensions match");
        for i in 0..a.rows() {
            for j in 0..b.cols() {
                let row = a.row(i).expect("row in range");
                let column = b.column(j).expect("column in range");
                let dot: i32 = row.iter().zip(&column).map(|(x, y)| x * y).sum();
                prop_assert_eq!(product.get(i, j), Ok(dot));
            }
        }
    }

    #[test]
    fn identity_is_neutral(a in (1usize..6, 1usize..6).prop_flat_map(|(r, c)| matrix(r, c))) {
        prop_assert_eq!(a.multiply(&Matrix::identity(a.cols())), Ok(a.clone()));
        prop_assert_eq!(Matrix::identity(a.rows()).multiply(&a), Ok(a));
    }

    #[test]
    fn transpose_reverses_product((a, b) in product_pair()) {
        let left = a.multiply(&b).expect("inner dimensions match").transpose();
        let right = b.transpose().multiply(&a.transpose()).expect("inner dimensions match");
        prop_assert_eq!(left, right);
    }

    #[test]
    fn mismatched_inner_dimensions_are_rejected(
        (a, b) in (1usize..6, 1usize..6, 1usize..6, 1usize..6)
            .prop_filter("inner dimensions differ", |(_, m, k, _)| m != k)
            .prop_flat_map(|(n, m, k, p)| (matrix(n, m), matrix(k, p)))
    ) {
        prop_assert_eq!(
            a.multiply(&b),
            Err(MatrixError::DimensionMismatch {
                left_cols: a.cols(),
                right_rows: b.rows(),
            })
        );
    }
}

#[test]
fn worked_example() {
    let a = Matrix::new(vec![vec![0, 3, 5], vec![5, 5, 2]]).expect("rectangular");
    let b = Matrix::new(vec![vec![3, 4], vec![3, -2], vec![4, -2]]).expect("rectangular");

    let product = a.multiply(&b).expect("inner dimensions match");

    assert_eq!(product.to_rows(), vec![vec![29, -16], vec![38, 6]]);
}
