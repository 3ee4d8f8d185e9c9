//! Sample fallible math functions for exercising composition.

use crate::outcome::Outcome;

/// Computes the reciprocal unless the input is zero.
///
/// # Example
///
/// ```
/// use rs_kleisli_compose::math::safe_reciprocal;
///
/// assert_eq!(safe_reciprocal(4.0).ok(), Some(0.25));
/// assert_eq!(safe_reciprocal(0.0).is_err(), true);
/// ```
pub fn safe_reciprocal(x: f64) -> Outcome<f64, Vec<String>> {
    if x == 0.0 {
        return Outcome::Err(vec![String::from("Cannot compute reciprocal of zero")]);
    }
    Outcome::Ok(1.0 / x)
}

/// Computes the non-negative square root unless the input is negative.
///
/// # Example
///
/// ```
/// use rs_kleisli_compose::math::safe_sqrt;
///
/// assert_eq!(safe_sqrt(4.0).ok(), Some(2.0));
/// assert_eq!(safe_sqrt(-4.0).is_err(), true);
/// ```
pub fn safe_sqrt(x: f64) -> Outcome<f64, Vec<String>> {
    if x < 0.0 {
        return Outcome::Err(vec![format!("Cannot sqrt a negative number: {}", x)]);
    }
    Outcome::Ok(x.sqrt())
}
