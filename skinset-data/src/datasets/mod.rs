pub mod transform_dataset;

pub use transform_dataset::TransformDataset;
