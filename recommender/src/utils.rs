use std::{cmp::Ordering, ops::Deref};

use ndarray::{ArrayBase, Data, Ix1};

/// Allows comparing and sorting f64 even if `NaN` is involved.
///
/// Pretend that f64 has a total ordering.
///
/// `NaN` is treated as the lowest possible value, similar to what [`f64::max`] does.
///
/// If this is used for sorting this will lead to an ascending order, like
/// for example `[NaN, 0.5, 1.5, 2.0]`.
pub(crate) fn nan_safe_f64_cmp(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        // if `partial_cmp` returns None we have at least one NaN
        match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    })
}

/// `nan_safe_f64_cmp_desc(a,b)` is syntax suggar for `nan_safe_f64_cmp(b, a)`
#[inline]
pub(crate) fn nan_safe_f64_cmp_desc(a: &f64, b: &f64) -> Ordering {
    nan_safe_f64_cmp(b, a)
}

/// Computes the l2 norm (euclidean metric) of a vector.
///
/// # Panics
/// Panics if the vector doesn't consist solely of real values.
pub(crate) fn l2_norm<A, S>(a: &A) -> f64
where
    A: Deref<Target = ArrayBase<S, Ix1>>,
    S: Data<Elem = f64>,
{
    let norm = a.dot(a.deref()).sqrt();
    assert!(
        norm.is_finite(),
        "vector must consist of real values only, but got:\n{:?}",
        a.deref(),
    );

    norm
}

/// Computes the cosine similarity of two vectors.
///
/// The similarity is zero if any of the vectors has zero magnitude.
///
/// # Panics
/// Panics if the vectors don't consist solely of real values or their shapes don't match.
pub(crate) fn cosine_similarity<A, B, S>(a: &A, b: &B) -> f64
where
    A: Deref<Target = ArrayBase<S, Ix1>>,
    B: Deref<Target = ArrayBase<S, Ix1>>,
    S: Data<Elem = f64>,
{
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);

    // the product of the norms is commutative, which keeps the similarity symmetric
    (norm_a != 0. && norm_b != 0.)
        .then(|| a.dot(b.deref()) / (norm_a * norm_b))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use ndarray::{arr1, Array1};

    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_nan_safe_f64_cmp_sorts_in_the_right_order() {
        let data = &mut [f64::NAN, 1., 5., f64::NAN, 4.];
        data.sort_by(nan_safe_f64_cmp);

        assert_approx_eq!(f64, &data[2..], [1., 4., 5.], ulps = 0);
        assert!(data[0].is_nan());
        assert!(data[1].is_nan());

        data.sort_by(nan_safe_f64_cmp_desc);

        assert_approx_eq!(f64, &data[..3], [5., 4., 1.], ulps = 0);
        assert!(data[3].is_nan());
        assert!(data[4].is_nan());
    }

    #[test]
    fn test_l2_norm() {
        let a = Box::new(arr1(&[1., 2., 3.]));
        assert_approx_eq!(f64, l2_norm(&a), 3.741_657_386_773_941_3);
    }

    #[test]
    #[should_panic(expected = "vector must consist of real values only, but got")]
    fn test_l2_norm_nan() {
        let a = Box::new(arr1(&[1., f64::NAN, 3.]));
        l2_norm(&a);
    }

    #[test]
    #[should_panic(expected = "vector must consist of real values only, but got")]
    fn test_l2_norm_inf() {
        let a = Box::new(arr1(&[1., f64::INFINITY, 3.]));
        l2_norm(&a);
    }

    #[test]
    fn test_cosine_similarity() {
        let a = Box::new(arr1(&[1., 2., 3.]));
        let b = Box::new(arr1(&[4., 5., 6.]));
        assert_approx_eq!(f64, cosine_similarity(&a, &b), 0.974_631_846_197_076_2);
    }

    #[test]
    fn test_cosine_similarity_is_symmetric() {
        let a = Box::new(arr1(&[5., 0., 3., 1.]));
        let b = Box::new(arr1(&[4., 2., 0., 5.]));
        assert_approx_eq!(
            f64,
            cosine_similarity(&a, &b),
            cosine_similarity(&b, &a),
            ulps = 0,
        );
    }

    #[test]
    fn test_cosine_similarity_zero_magnitude() {
        let a = Box::new(Array1::<f64>::zeros(3));
        let b = Box::new(arr1(&[4., 5., 6.]));
        assert_approx_eq!(f64, cosine_similarity(&a, &b), 0., ulps = 0);
        assert_approx_eq!(f64, cosine_similarity(&b, &a), 0., ulps = 0);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = Box::new(arr1(&[5., 0.]));
        let b = Box::new(arr1(&[0., 4.]));
        assert_approx_eq!(f64, cosine_similarity(&a, &b), 0., ulps = 0);
    }
}
