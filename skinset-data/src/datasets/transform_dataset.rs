use crate::dataset::Dataset;
use crate::error::{DataError, Sequence};
use crate::transforms::Transform;
use log::{debug, trace};

/// A dataset over borrowed parallel `samples` and `labels`, applying a
/// transform to each sample at fetch time.
///
/// The dataset owns nothing: the two slices and the transform belong to the
/// caller and must outlive it. Nothing is copied or precomputed at
/// construction, and every `get` re-runs the transform, so a stochastic
/// transform yields a fresh variant on each access.
///
/// The length is `samples.len()`. Equal lengths of `samples` and `labels` are
/// expected but not enforced; fetching past the end of a shorter `labels`
/// fails with `DataError::IndexOutOfBounds` on the labels side.
///
/// # Type Parameters
///
/// * `S`: The raw sample type.
/// * `L`: The label type. Labels are cloned out on every fetch.
/// * `T`: The transform, implementing [`Transform<S>`].
#[derive(Debug)]
pub struct TransformDataset<'a, S, L, T> {
    samples: &'a [S],
    labels: &'a [L],
    transform: &'a T,
}

impl<'a, S, L, T> TransformDataset<'a, S, L, T> {
    /// Creates a new `TransformDataset` over the given samples, labels and transform.
    ///
    /// # Arguments
    ///
    /// * `samples` - The raw samples.
    /// * `labels` - Labels, index-aligned with `samples`.
    /// * `transform` - Applied to a sample each time it is fetched.
    pub fn new(samples: &'a [S], labels: &'a [L], transform: &'a T) -> Self {
        debug!(
            "TransformDataset: new() with {} samples and {} labels",
            samples.len(),
            labels.len()
        );
        Self {
            samples,
            labels,
            transform,
        }
    }

    pub fn samples(&self) -> &'a [S] {
        self.samples
    }

    pub fn labels(&self) -> &'a [L] {
        self.labels
    }
}

// Manual impls: the derive would require `S: Clone, L: Clone, T: Clone`.
impl<S, L, T> Clone for TransformDataset<'_, S, L, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, L, T> Copy for TransformDataset<'_, S, L, T> {}

impl<S, L, T> Dataset for TransformDataset<'_, S, L, T>
where
    T: Transform<S>,
    L: Clone + Send,
{
    type Item = (T::Output, L);

    /// Returns the transformed sample at `index` together with its label.
    ///
    /// # Errors
    ///
    /// Returns `DataError::IndexOutOfBounds` tagged `Sequence::Samples` if
    /// `index >= len()`, in which case the transform is not run. Errors from
    /// the transform are returned as-is. Returns `DataError::IndexOutOfBounds`
    /// tagged `Sequence::Labels` if the sample exists but its label does not.
    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        trace!("TransformDataset: get({})", index);
        let sample = self.samples.get(index).ok_or_else(|| DataError::IndexOutOfBounds {
            index,
            len: self.samples.len(),
            sequence: Sequence::Samples,
        })?;
        let transformed = self.transform.apply(sample)?;
        let label = self.labels.get(index).cloned().ok_or_else(|| DataError::IndexOutOfBounds {
            index,
            len: self.labels.len(),
            sequence: Sequence::Labels,
        })?;
        Ok((transformed, label))
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
#[path = "transform_dataset_test.rs"]
mod tests;
