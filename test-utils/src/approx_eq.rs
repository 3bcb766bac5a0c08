use ndarray::{ArrayBase, Data, Dimension, IntoDimension};

/// Compares two "things" with approximate equality.
///
/// Both sides are flattened into their floating point leaves together with the logical index of
/// each leaf, which must match pairwise. The leaves are compared with the precision of `$t`.
///
/// # Examples
///
/// ```
/// use test_utils::assert_approx_eq;
/// assert_approx_eq!(f32, 0.15039155, 0.1503916, ulps = 3);
/// assert_approx_eq!(f32, Some(0.5), Some(0.5));
/// assert_approx_eq!(f32, &[[1.0, 2.], [3., 4.]], vec![[1.0, 2.], [3., 4.]]);
/// assert_approx_eq!(f32, ndarray::arr1(&[1.0, 2.]), [1.0, 2.]);
/// assert_approx_eq!(f64, Some(0.780_868_809_443_030_4), Some(0.780_868_809_443_030_4));
/// ```
///
/// The number of `ulps` defaults to `2` and the `epsilon` to `0` if not specified. Two NaN
/// values are treated as approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($t:ty, $left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($t, $left, $right, epsilon = 0., ulps = 2)
    };
    ($t:ty, $left:expr, $right:expr, ulps = $ulps:expr $(,)?) => {
        $crate::assert_approx_eq!($t, $left, $right, epsilon = 0., ulps = $ulps)
    };
    ($t:ty, $left:expr, $right:expr, epsilon = $epsilon:expr $(,)?) => {
        $crate::assert_approx_eq!($t, $left, $right, epsilon = $epsilon, ulps = 2)
    };
    ($t:ty, $left:expr, $right:expr, epsilon = $epsilon:expr, ulps = $ulps:expr $(,)?) => {{
        let epsilon = $epsilon;
        let ulps = $ulps;
        let left = $crate::approx_leaves(&$left);
        let right = $crate::approx_leaves(&$right);
        std::assert_eq!(
            left.len(),
            right.len(),
            "number of values differ: {:?} != {:?}",
            left,
            right,
        );
        for ((lidx, lv), (ridx, rv)) in left.into_iter().zip(right) {
            std::assert_eq!(lidx, ridx, "indices differ: {:?} != {:?}", lidx, ridx);
            if !(lv.is_nan() && rv.is_nan()) {
                std::assert!(
                    $crate::approx_eq!($t, lv as $t, rv as $t, epsilon = epsilon, ulps = ulps),
                    "approximated equal assertion failed (ulps={:?}, epsilon={:?}) at index {:?}: {:?} == {:?}",
                    ulps,
                    epsilon,
                    lidx,
                    lv,
                    rv,
                );
            }
        }
    }};
}

/// Flattens a value into its floating point leaves.
///
/// Sequential containers push the position of each element onto the index, leaves take the
/// index as is. Leaves are widened to `f64` losslessly.
pub trait ApproxLeaves {
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>);
}

/// Collects the leaves of a value in logical order.
pub fn approx_leaves<T>(value: &T) -> Vec<(Vec<usize>, f64)>
where
    T: ApproxLeaves + ?Sized,
{
    let mut leaves = Vec::new();
    value.push_leaves(&mut Vec::new(), &mut leaves);
    leaves
}

impl ApproxLeaves for f32 {
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>) {
        leaves.push((index.clone(), f64::from(*self)));
    }
}

impl ApproxLeaves for f64 {
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>) {
        leaves.push((index.clone(), *self));
    }
}

impl<T> ApproxLeaves for &T
where
    T: ApproxLeaves + ?Sized,
{
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>) {
        (**self).push_leaves(index, leaves);
    }
}

impl<T> ApproxLeaves for Option<T>
where
    T: ApproxLeaves,
{
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>) {
        if let Some(value) = self {
            index.push(0);
            value.push_leaves(index, leaves);
            index.pop();
        }
    }
}

impl<T> ApproxLeaves for [T]
where
    T: ApproxLeaves,
{
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>) {
        for (position, value) in self.iter().enumerate() {
            index.push(position);
            value.push_leaves(index, leaves);
            index.pop();
        }
    }
}

impl<T, const N: usize> ApproxLeaves for [T; N]
where
    T: ApproxLeaves,
{
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>) {
        self[..].push_leaves(index, leaves);
    }
}

impl<T> ApproxLeaves for Vec<T>
where
    T: ApproxLeaves,
{
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>) {
        self.as_slice().push_leaves(index, leaves);
    }
}

impl<S, D> ApproxLeaves for ArrayBase<S, D>
where
    S: Data,
    S::Elem: Copy + Into<f64>,
    D: Dimension,
{
    fn push_leaves(&self, index: &mut Vec<usize>, leaves: &mut Vec<(Vec<usize>, f64)>) {
        for (position, value) in self.indexed_iter() {
            let mut index = index.clone();
            index.extend(position.into_dimension().as_array_view().iter());
            leaves.push((index, (*value).into()));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use ndarray::{arr1, arr2};

    #[test]
    fn test_assert_approx_eq_float() {
        assert_approx_eq!(f32, 0.15039155, 0.1503916, ulps = 3);
        catch_unwind(|| assert_approx_eq!(f32, 0.15039155, 0.1503916, ulps = 2)).unwrap_err();
    }

    #[test]
    fn test_assert_approx_eq_double() {
        assert_approx_eq!(f64, 0.1 + 0.2, 0.3);
        assert_approx_eq!(f64, Some(0.780_868_809_443_030_4), Some(0.780_868_809_443_030_5));
        assert_approx_eq!(f64, arr1(&[0.3_f64, 0.5]), [0.3, 0.5], ulps = 0);
        catch_unwind(|| assert_approx_eq!(f64, 0.299_999_99, 0.3)).unwrap_err();
    }

    #[test]
    fn test_assert_approx_eq_single_ignores_double_digits() {
        assert_approx_eq!(f32, 0.780_868_8_f32, 0.780_868_809_443_030_4, ulps = 1);
    }

    #[test]
    fn test_assert_approx_eq_sequences() {
        assert_approx_eq!(f32, &[0.25, 1.25], vec![0.25, 1.25]);
        assert_approx_eq!(f32, &[0.25, 1.25], arr1(&[0.25, 1.25]));
        assert_approx_eq!(f32, [[0.25, 1.25], [0., 0.125]], arr2(&[[0.25, 1.25], [0., 0.125]]));
    }

    #[test]
    fn test_assert_approx_eq_options() {
        assert_approx_eq!(f32, Some(0.5), Some(0.5));
        assert_approx_eq!(f32, Option::<f32>::None, Option::<f32>::None);
    }

    #[test]
    #[should_panic(expected = "number of values differ")]
    fn test_assert_approx_eq_fails_for_missing_option() {
        assert_approx_eq!(f32, Some(0.5), Option::<f32>::None);
    }

    #[test]
    #[should_panic(expected = "at index [1]")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(f32, &[0.35, 4.35], arr1(&[0.35, 4.45]));
    }

    #[test]
    #[should_panic(expected = "indices differ")]
    fn test_assert_approx_eq_fails_for_different_shapes() {
        assert_approx_eq!(f32, [[1., 2.]], [1., 2.]);
    }

    #[test]
    fn test_compares_nan_values() {
        assert_approx_eq!(f32, [3.1, f32::NAN, 1.0], [3.1, f32::NAN, 1.0]);
    }

    #[test]
    #[should_panic(expected = "at index [1]")]
    fn test_compares_nan_with_number() {
        assert_approx_eq!(f32, [3.1, f32::NAN, 1.0], [3.1, 3.0, 1.0]);
    }

    #[test]
    fn test_equality_using_epsilon() {
        assert_approx_eq!(f32, 0.125, 0.625, epsilon = 0.5)
    }
}
