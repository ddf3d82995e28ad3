//! Scalar derivative estimation.

use num_traits::Float;

/// Estimate `f'(x)` by central differences with step `h`.
///
/// Evaluates `f` twice, at `x + h/2` and `x - h/2`. `h` must be positive.
///
/// # Example
///
/// ```
/// use newton_core::math::finite_difference::central_difference;
///
/// let slope = central_difference(|x: f64| x * x, 3.0, 1e-5);
/// assert!((slope - 6.0).abs() < 1e-3);
/// ```
#[inline]
pub fn central_difference<T, F>(f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let half = h / (T::one() + T::one());
    (f(x + half) - f(x - half)) / h
}

/// Wrap `f` into a callable returning its central-difference derivative.
///
/// `derivative_fn(f, h)(x)` is identical to `central_difference(f, x, h)`.
///
/// # Example
///
/// ```
/// use newton_core::math::finite_difference::derivative_fn;
///
/// let d_sin = derivative_fn(|x: f64| x.sin(), 1e-6);
/// assert!((d_sin(0.0) - 1.0).abs() < 1e-8);
/// ```
pub fn derivative_fn<T, F>(f: F, h: T) -> impl Fn(T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    move |x| central_difference(&f, x, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_square_at_three() {
        let slope = central_difference(|x: f64| x * x, 3.0, 1e-5);
        assert_abs_diff_eq!(slope, 6.0, epsilon = 1e-3);
    }

    #[test]
    fn test_quadratic_is_exact_up_to_rounding() {
        // Central differences have no truncation error on quadratics.
        let f = |x: f64| 3.0 * x * x - 2.0 * x + 1.0;
        let slope = central_difference(f, 2.0, 1e-3);
        assert_abs_diff_eq!(slope, 10.0, epsilon = 1e-8);
    }

    #[test]
    fn test_exp() {
        let slope = central_difference(|x: f64| x.exp(), 1.0, 1e-5);
        assert_abs_diff_eq!(slope, 1.0_f64.exp(), epsilon = 1e-8);
    }

    #[test]
    fn test_two_evaluations_at_symmetric_points() {
        let calls = Cell::new(0);
        let seen = RefCell::new(Vec::new());
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            seen.borrow_mut().push(x);
            x
        };

        let _ = central_difference(f, 1.0, 0.5);

        assert_eq!(calls.get(), 2);
        assert_eq!(*seen.borrow(), vec![1.25, 0.75]);
    }

    #[test]
    fn test_derivative_fn_matches_point_estimate() {
        let f = |x: f64| x.powi(3) - x;
        let df = derivative_fn(f, 1e-6);

        for &x in &[-2.0, -0.5, 0.0, 1.0, 4.0] {
            assert_eq!(df(x), central_difference(f, x, 1e-6));
        }
    }

    #[test]
    fn test_with_f32() {
        let slope = central_difference(|x: f32| x * x, 3.0_f32, 1e-2_f32);
        assert!((slope - 6.0).abs() < 1e-2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_linear_slope_recovered(
                a in -100.0_f64..100.0,
                b in -100.0_f64..100.0,
                x in -100.0_f64..100.0,
            ) {
                let slope = central_difference(|t: f64| a * t + b, x, 1e-4);
                let scale = 1.0 + a.abs() * x.abs() + b.abs();
                prop_assert!((slope - a).abs() < 1e-6 * scale);
            }
        }
    }
}
