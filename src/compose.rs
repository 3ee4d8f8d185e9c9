//! Composition of fallible functions(Kleisli composition).

use crate::outcome::Outcome;

/// Composes two fallible functions which agree on the error type.
///
/// The composed function evaluates `f` first. Its failure is forwarded
/// unchanged and `g` is never invoked; its success value is fed to `g`
/// and that result(either variant) becomes the overall result.
///
/// # Example
///
/// ```
/// use rs_kleisli_compose::compose::compose;
/// use rs_kleisli_compose::outcome::Outcome;
///
/// let nonzero = |x: i32| match x {
///     0 => Outcome::Err(String::from("got zero")),
///     _ => Outcome::Ok(x),
/// };
/// let halve = |x: i32| Outcome::<_, String>::Ok(x / 2);
///
/// let h = compose(nonzero, halve);
/// assert_eq!(h(8), Outcome::Ok(4));
/// assert_eq!(h(0), Outcome::Err(String::from("got zero")));
/// ```
pub fn compose<F, G, T, U, V, E>(f: F, g: G) -> impl Fn(T) -> Outcome<V, E>
where
    F: Fn(T) -> Outcome<U, E>,
    G: Fn(U) -> Outcome<V, E>,
{
    move |t: T| match f(t) {
        Outcome::Ok(u) => g(u),
        Outcome::Err(e) => Outcome::Err(e),
    }
}

/// Composes two plain functions.
pub fn compose_fn<F, G, T, U, V>(f: F, g: G) -> impl Fn(T) -> V
where
    F: Fn(T) -> U,
    G: Fn(U) -> V,
{
    move |t: T| {
        let u: U = f(t);
        g(u)
    }
}
