//! Property-based tests for the container pair.

#[cfg(test)]
mod tests {
    use proptest::collection::vec as pvec;
    use proptest::prelude::*;

    use crate::dense_vector::DenseVector;
    use crate::error::Error;
    use crate::square_matrix::SquareMatrix;

    // Strategy for element values small enough that products and sums
    // stay comfortably inside i64.
    fn small_elem() -> impl Strategy<Value = i64> {
        -1000_i64..1000_i64
    }

    fn values() -> impl Strategy<Value = Vec<i64>> {
        pvec(small_elem(), 1..24)
    }

    // Two element lists of one shared length.
    fn same_len_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
        (1_usize..16).prop_flat_map(|n| (pvec(small_elem(), n), pvec(small_elem(), n)))
    }

    // Square entry grids of side 1..6.
    fn square_entries() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1_usize..6).prop_flat_map(|n| pvec(pvec(small_elem(), n), n))
    }

    fn vector(values: &[i64]) -> DenseVector<i64> {
        DenseVector::from_slice(values).unwrap()
    }

    fn matrix(entries: &[Vec<i64>]) -> SquareMatrix<i64> {
        SquareMatrix::from_rows(entries.iter().map(|row| vector(row)).collect()).unwrap()
    }

    proptest! {
        #[test]
        fn vector_construction_len(n in 1_usize..64) {
            let v: DenseVector<i64> = DenseVector::new(n).unwrap();
            prop_assert_eq!(v.len(), n);
        }

        #[test]
        fn vector_from_slice_preserves_contents(vals in values()) {
            let v = vector(&vals);
            prop_assert_eq!(v.as_slice(), vals.as_slice());
        }

        #[test]
        fn vector_add_commutative((a, b) in same_len_pair()) {
            let a = vector(&a);
            let b = vector(&b);
            prop_assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
        }

        #[test]
        fn vector_dot_commutative((a, b) in same_len_pair()) {
            let a = vector(&a);
            let b = vector(&b);
            prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        }

        #[test]
        fn scale_distributes_over_add((a, b) in same_len_pair(), s in small_elem()) {
            let a = vector(&a);
            let b = vector(&b);
            let lhs = a.checked_add(&b).unwrap().scale(&s);
            let rhs = a.scale(&s).checked_add(&b.scale(&s)).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn clone_is_independent(vals in values(), replacement in small_elem()) {
            let mut original = vector(&vals);
            let copy = original.clone();
            original[0] = replacement;
            prop_assert_eq!(copy.as_slice(), vals.as_slice());
        }

        #[test]
        fn equality_reflexive(vals in values()) {
            let v = vector(&vals);
            prop_assert_eq!(&v, &v);
            prop_assert_eq!(v.clone(), v);
        }

        #[test]
        fn different_lengths_never_equal(vals in values(), extra in small_elem()) {
            let shorter = vector(&vals);
            let mut longer_vals = vals;
            longer_vals.push(extra);
            let longer = vector(&longer_vals);
            prop_assert_ne!(&shorter, &longer);
            prop_assert_eq!(
                shorter.checked_add(&longer).unwrap_err(),
                Error::SizeMismatch { left: shorter.len(), right: longer.len() }
            );
        }

        #[test]
        fn out_of_range_index_reported(vals in values(), past in 0_usize..8) {
            let v = vector(&vals);
            let index = v.len() + past;
            prop_assert_eq!(
                v.at(index).unwrap_err(),
                Error::IndexOutOfRange { index, len: v.len() }
            );
        }

        #[test]
        fn matrix_add_commutative(entries in square_entries()) {
            let a = matrix(&entries);
            let b = a.scale(&3);
            prop_assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
        }

        #[test]
        fn matrix_identity_fixed_point(entries in square_entries()) {
            let m = matrix(&entries);
            let id = SquareMatrix::identity(m.side()).unwrap();
            prop_assert_eq!(m.checked_mul(&id).unwrap(), m.clone());
            prop_assert_eq!(id.checked_mul(&m).unwrap(), m);
        }

        #[test]
        fn matrix_vector_matches_row_dots(entries in square_entries()) {
            let m = matrix(&entries);
            let x = vector(&entries[0]);
            let y = m.mul_vector(&x).unwrap();
            for i in 0..m.side() {
                prop_assert_eq!(y.at(i).unwrap(), &m.at(i).unwrap().dot(&x).unwrap());
            }
        }

        #[test]
        fn vector_text_roundtrip(vals in values()) {
            let original = vector(&vals);
            let mut buf = Vec::new();
            original.write_to(&mut buf).unwrap();
            let mut restored: DenseVector<i64> = DenseVector::new(original.len()).unwrap();
            restored.read_from(&mut std::io::Cursor::new(buf)).unwrap();
            prop_assert_eq!(restored, original);
        }
    }
}
