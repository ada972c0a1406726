use crate::error::DataError;

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item is typically a pair
/// `(sample, label)` ready to be consumed by a training loop. The trait is the
/// whole contract an iteration or batching layer needs: a length and an
/// indexed fetch.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    ///
    /// This type must be `Send` so that items fetched on a loader worker
    /// thread can be handed back to the training thread.
    type Item: Send;

    /// Returns the item at the given index.
    ///
    /// # Arguments
    ///
    /// * `index` - The index of the item to retrieve.
    ///
    /// # Errors
    ///
    /// Returns `DataError` if the index is out of bounds or if producing the
    /// item failed.
    fn get(&self, index: usize) -> Result<Self::Item, DataError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
