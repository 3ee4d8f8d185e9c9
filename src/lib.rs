//! Kleisli composition over a simple tagged result type.
//!
//! Fallible single-argument functions returning [`outcome::Outcome`]
//! compose into pipelines of arbitrary depth; the first failure
//! short-circuits and is forwarded unchanged.
//!
//! # Example
//!
//! ```
//! use rs_kleisli_compose::compose::compose;
//! use rs_kleisli_compose::math::{safe_reciprocal, safe_sqrt};
//!
//! let sqrt_reciprocal = compose(safe_sqrt, safe_reciprocal);
//! assert_eq!(sqrt_reciprocal(4.0).ok(), Some(0.5));
//! assert_eq!(sqrt_reciprocal(-4.0).is_err(), true);
//! ```

pub mod compose;
pub mod math;
pub mod outcome;
