//! Iteration over success payloads and collection of outcome streams.
//!
//! An outcome iterates like an `Option`: one item for a success, none for a
//! failure. Collecting an iterator of outcomes into
//! `Outcome<C, FailureVec<F>>` keeps going past the first failure and
//! accumulates every failure payload.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{FailureVec, Outcome};
//!
//! let parsed = ["1", "x", "3", "y"]
//!     .iter()
//!     .map(|s| Outcome::from(s.parse::<i32>().map_err(|_| *s)));
//! let all: Outcome<Vec<i32>, FailureVec<&str>> = parsed.collect();
//! assert_eq!(all.get_failure().as_slice(), &["x", "y"]);
//! ```
use crate::traits::Fallible;
use crate::types::{FailureVec, Outcome};

/// Borrowing iterator over a success payload.
pub struct Iter<'a, S> {
    inner: Option<&'a S>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Mutably borrowing iterator over a success payload.
pub struct IterMut<'a, S> {
    inner: Option<&'a mut S>,
}

impl<'a, S> Iterator for IterMut<'a, S> {
    type Item = &'a mut S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over a success payload.
pub struct IntoIter<S> {
    inner: Option<S>,
}

impl<S> Iterator for IntoIter<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<S, F> IntoIterator for Outcome<S, F> {
    type Item = S;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_success() }
    }
}

impl<'a, S, F> IntoIterator for &'a Outcome<S, F> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S, F> IntoIterator for &'a mut Outcome<S, F> {
    type Item = &'a mut S;
    type IntoIter = IterMut<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<S, F> Outcome<S, F> {
    /// Iterates over the success payload: one item, or none for a failure.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter { inner: self.as_success() }
    }

    /// Mutable counterpart of [`iter`](Self::iter).
    pub fn iter_mut(&mut self) -> IterMut<'_, S> {
        match self {
            Outcome::Success(value) => IterMut { inner: Some(value) },
            Outcome::Failure(_) => IterMut { inner: None },
        }
    }
}

impl<S, F, C> FromIterator<Outcome<S, F>> for Outcome<C, FailureVec<F>>
where
    C: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<S, F>>>(iter: I) -> Self {
        let mut failures = FailureVec::new();
        let values: C = iter
            .into_iter()
            .filter_map(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failures.push(error);
                    None
                }
            })
            .collect();

        if failures.is_empty() {
            Outcome::Success(values)
        } else {
            Outcome::Failure(failures)
        }
    }
}

/// Counts how many items of any outcome shape hold a success payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::iter::count_successes;
/// use outcome_rail::Flag;
///
/// let flags = [Flag::from(true), Flag::from(false), Flag::from(true)];
/// assert_eq!(count_successes(&flags), 2);
/// ```
pub fn count_successes<'a, O, I>(outcomes: I) -> usize
where
    O: Fallible + 'a,
    I: IntoIterator<Item = &'a O>,
{
    outcomes.into_iter().filter(|o| o.is_success()).count()
}

/// Returns the first success payload among `outcomes`, if any.
pub fn first_success<'a, O, I>(outcomes: I) -> Option<&'a O::Success>
where
    O: Fallible + 'a,
    I: IntoIterator<Item = &'a O>,
{
    outcomes.into_iter().find_map(Fallible::as_success)
}
