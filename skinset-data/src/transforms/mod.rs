//! Sample transforms.
//!
//! A [`Transform`] turns one raw sample into the form the model consumes. Any
//! closure `Fn(&S) -> Result<O, DataError>` is a transform, so ad-hoc
//! preprocessing needs no new type. [`Compose`] chains two transforms and
//! [`Identity`] passes samples through unchanged.

pub mod image;

pub use image::{HorizontalFlip, Image, Normalize, RandomHorizontalFlip, Resize};

use crate::error::DataError;

/// Maps one raw sample of type `S` to a processed sample.
///
/// Implementations take `&self`, so a transform holding mutable state (a
/// random generator, a counter) has to synchronize it internally.
pub trait Transform<S> {
    /// The processed sample type.
    type Output: Send;

    /// Applies the transform to a single sample.
    ///
    /// # Errors
    ///
    /// Returns `DataError` if the sample cannot be processed (wrong shape,
    /// invalid content).
    fn apply(&self, sample: &S) -> Result<Self::Output, DataError>;

    /// Chains `next` after `self`.
    fn then<N>(self, next: N) -> Compose<Self, N>
    where
        Self: Sized,
        N: Transform<Self::Output>,
    {
        Compose::new(self, next)
    }
}

impl<S, O, F> Transform<S> for F
where
    F: Fn(&S) -> Result<O, DataError>,
    O: Send,
{
    type Output = O;

    fn apply(&self, sample: &S) -> Result<O, DataError> {
        self(sample)
    }
}

/// Returns a clone of the sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Identity {
    pub fn new() -> Self {
        Identity
    }
}

impl<S: Clone + Send> Transform<S> for Identity {
    type Output = S;

    fn apply(&self, sample: &S) -> Result<S, DataError> {
        Ok(sample.clone())
    }
}

/// Applies `first`, then `second` on its output.
#[derive(Debug, Clone)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A, B> Compose<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<S, A, B> Transform<S> for Compose<A, B>
where
    A: Transform<S>,
    B: Transform<A::Output>,
{
    type Output = B::Output;

    fn apply(&self, sample: &S) -> Result<Self::Output, DataError> {
        let intermediate = self.first.apply(sample)?;
        self.second.apply(&intermediate)
    }
}

#[cfg(test)]
#[path = "transforms_test.rs"]
mod tests;
