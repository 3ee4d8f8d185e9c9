//! Outcome of a fallible computation(success or failure).

/// A success value or a failure value; exactly one of the two.
///
/// The error payload `E` is never inspected by this crate; it is only
/// forwarded. Callers pick `T` and `E` freely at each call site.
///
/// # Example
///
/// ```
/// use rs_kleisli_compose::outcome::Outcome;
///
/// let o: Outcome<u8, String> = Outcome::Ok(42);
/// match o {
///     Outcome::Ok(v) => assert_eq!(v, 42),
///     Outcome::Err(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// Success payload.
    Ok(T),

    /// Failure payload.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Checks if the success variant is active.
    pub fn is_ok(&self) -> bool {
        match self {
            Self::Ok(_) => true,
            Self::Err(_) => false,
        }
    }

    /// Checks if the failure variant is active.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Gets the success payload, discarding any failure payload.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_kleisli_compose::outcome::Outcome;
    ///
    /// let o: Outcome<u8, String> = Outcome::Ok(42);
    /// assert_eq!(o.ok(), Some(42));
    ///
    /// let o: Outcome<u8, String> = Outcome::Err("oops".into());
    /// assert_eq!(o.ok(), None);
    /// ```
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(t) => Some(t),
            Self::Err(_) => None,
        }
    }

    /// Gets the failure payload, discarding any success payload.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(e) => Some(e),
        }
    }

    /// Borrows the active payload without consuming self.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(t) => Outcome::Ok(t),
            Self::Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(r: Result<T, E>) -> Self {
        match r {
            Ok(t) => Self::Ok(t),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(o: Outcome<T, E>) -> Self {
        match o {
            Outcome::Ok(t) => Ok(t),
            Outcome::Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod test_outcome {

    mod inspect {

        use crate::outcome::Outcome;

        #[test]
        fn test_ok() {
            let o: Outcome<i32, String> = Outcome::Ok(7);
            assert_eq!(o.is_ok(), true);
            assert_eq!(o.is_err(), false);
            assert_eq!(o.ok(), Some(7));
        }

        #[test]
        fn test_err() {
            let o: Outcome<i32, String> = Outcome::Err("no".into());
            assert_eq!(o.is_ok(), false);
            assert_eq!(o.is_err(), true);
            assert_eq!(o.err(), Some(String::from("no")));
        }

        #[test]
        fn test_as_ref() {
            let o: Outcome<i32, String> = Outcome::Ok(7);
            let r: Outcome<&i32, &String> = o.as_ref();
            assert_eq!(r.ok(), Some(&7));
            assert_eq!(o.ok(), Some(7));
        }
    }

    mod convert {

        use crate::outcome::Outcome;

        #[test]
        fn test_from_result() {
            let o: Outcome<i32, String> = Outcome::from(Ok(7));
            assert_eq!(o, Outcome::Ok(7));

            let o: Outcome<i32, String> = Result::Err(String::from("no")).into();
            assert_eq!(o, Outcome::Err(String::from("no")));
        }

        #[test]
        fn test_into_result() {
            let o: Outcome<i32, String> = Outcome::Ok(7);
            let r: Result<i32, String> = o.into();
            assert_eq!(r, Ok(7));
        }
    }
}
