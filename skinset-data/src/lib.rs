//! # skinset-data
//!
//! Indexed datasets for image classification training loops.
//!
//! The central type is [`TransformDataset`]: a borrowed view over a slice of
//! raw samples, a parallel slice of labels and a [`Transform`]. It implements
//! [`Dataset`], the length-plus-indexed-fetch contract that batching and
//! sampling layers build on.
//!
//! ```rust
//! use skinset_data::{Dataset, DataError, TransformDataset};
//!
//! let samples = vec![1u32, 2, 3];
//! let labels = vec!["benign", "malignant", "benign"];
//! let double = |s: &u32| Ok::<_, DataError>(s * 2);
//!
//! let dataset = TransformDataset::new(&samples, &labels, &double);
//! assert_eq!(dataset.len(), 3);
//! assert_eq!(dataset.get(1).unwrap(), (4, "malignant"));
//! assert!(dataset.get(3).is_err());
//! ```

pub mod dataset;
pub mod datasets;
pub mod error;
pub mod transforms;

// Re-export main components
pub use dataset::Dataset;
pub use datasets::TransformDataset;
pub use error::{DataError, Sequence};
pub use transforms::{Compose, Identity, Transform};
