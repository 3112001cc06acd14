//! Custom assertion macros for testing.

/// Assert that two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use synthvr_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0_f64, 1.0001_f64, 0.001_f64);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that two `[f64; 3]` vectors are component-wise approximately equal.
///
/// # Example
///
/// ```rust
/// use synthvr_test_helpers::assert_vec3_approx_eq;
///
/// assert_vec3_approx_eq!([0.03, 0.0029995, -2.0], [0.03, 0.003, -2.0], 1e-6);
/// ```
#[macro_export]
macro_rules! assert_vec3_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left: [f64; 3] = $left;
        let right: [f64; 3] = $right;
        let tolerance: f64 = $tolerance;
        for axis in 0..3 {
            let diff = (left[axis] - right[axis]).abs();
            if diff > tolerance {
                panic!(
                    "assertion failed: vectors differ on axis {}\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                    axis, left, right, diff, tolerance
                );
            }
        }
    };
}

/// Assert that a quaternion-like value with `w, x, y, z` fields is unit length.
///
/// # Example
///
/// ```rust
/// use synthvr_test_helpers::assert_unit_quaternion;
///
/// struct Q { w: f64, x: f64, y: f64, z: f64 }
/// assert_unit_quaternion!(Q { w: 1.0, x: 0.0, y: 0.0, z: 0.0 }, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_unit_quaternion {
    ($q:expr, $tolerance:expr $(,)?) => {
        let q = &$q;
        let tolerance: f64 = $tolerance;
        let norm = (q.w * q.w + q.x * q.x + q.y * q.y + q.z * q.z).sqrt();
        if (norm - 1.0).abs() > tolerance {
            panic!(
                "assertion failed: quaternion is not unit length\n  norm: `{:?}`,\n  tolerance: `{:?}`",
                norm, tolerance
            );
        }
    };
}
