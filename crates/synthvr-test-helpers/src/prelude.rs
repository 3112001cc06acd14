//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use synthvr_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_some, must_with};

pub use crate::{assert_approx_eq, assert_unit_quaternion, assert_vec3_approx_eq};

#[cfg(feature = "mock")]
pub use crate::mock::{MockDriverHost, PublishLog};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
