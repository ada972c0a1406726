//! Builds a small in-memory skin lesion dataset and walks it the way a
//! training loop would, one epoch at a time.
//!
//! Run with `RUST_LOG=debug` to see the dataset and transform logging.

use skinset_data::transforms::{Image, Normalize, RandomHorizontalFlip, Resize};
use skinset_data::{DataError, Dataset, Transform, TransformDataset};

const CLASSES: [&str; 2] = ["benign", "malignant"];

fn synthetic_images(count: usize) -> Result<Vec<Image>, DataError> {
    (0..count)
        .map(|i| {
            // 3-channel 6x6 gradient, shifted per image
            let bytes: Vec<u8> = (0..3 * 6 * 6).map(|p| ((p * 7 + i * 31) % 256) as u8).collect();
            Image::from_u8(3, 6, 6, &bytes)
        })
        .collect()
}

fn main() -> Result<(), DataError> {
    env_logger::init();

    let images = synthetic_images(8)?;
    let labels: Vec<usize> = (0..images.len()).map(|i| i % CLASSES.len()).collect();

    let transform = Resize::new(4, 4)?
        .then(RandomHorizontalFlip::new(0.5)?)
        .then(Normalize::new(
            vec![0.485, 0.456, 0.406],
            vec![0.229, 0.224, 0.225],
        )?);

    let dataset = TransformDataset::new(&images, &labels, &transform);
    println!("Dataset with {} samples", dataset.len());

    for epoch in 0..2 {
        println!("\n--- Epoch {epoch} ---");
        for index in 0..dataset.len() {
            let (image, label) = dataset.get(index)?;
            let mean = image.data().iter().sum::<f32>() / image.data().len() as f32;
            println!(
                "  Sample {index}: shape {:?}, label {} ({}), mean {:.4}",
                image.shape(),
                label,
                CLASSES[label],
                mean
            );
        }
    }

    Ok(())
}
