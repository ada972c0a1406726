// skinset-data/src/transforms/image.rs

use super::Transform;
use crate::error::DataError;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// One channel of an [`Image`] as an `image` crate buffer.
type Plane = ImageBuffer<Luma<f32>, Vec<f32>>;

/// A channel-first (`[C, H, W]`) image with `f32` pixel values.
///
/// Pixel values follow the `image` crate's `f32` convention of `[0, 1]`.
/// Geometric transforms run on each channel through `image::imageops`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    channels: usize,
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl Image {
    /// Creates an image from a flat channel-first buffer.
    ///
    /// # Errors
    ///
    /// Returns `DataError::ShapeMismatch` if `data.len()` is not
    /// `channels * height * width`, or if that product overflows `usize`.
    pub fn new(channels: usize, height: usize, width: usize, data: Vec<f32>) -> Result<Self, DataError> {
        let expected = channels.checked_mul(height).and_then(|n| n.checked_mul(width));
        if expected != Some(data.len()) {
            return Err(DataError::ShapeMismatch {
                expected: vec![channels, height, width],
                actual: vec![data.len()],
                operation: "Image::new".to_string(),
            });
        }
        Ok(Self {
            channels,
            height,
            width,
            data,
        })
    }

    /// Creates an image from 8-bit pixels, scaling them to `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::ShapeMismatch` under the same conditions as
    /// [`Image::new`].
    pub fn from_u8(channels: usize, height: usize, width: usize, bytes: &[u8]) -> Result<Self, DataError> {
        let data = bytes.iter().map(|&b| b as f32 / 255.0).collect();
        Self::new(channels, height, width, data)
    }

    /// Returns `[channels, height, width]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.channels, self.height, self.width]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the value at `(c, y, x)`, or `None` outside the image.
    pub fn pixel(&self, c: usize, y: usize, x: usize) -> Option<f32> {
        if c >= self.channels || y >= self.height || x >= self.width {
            return None;
        }
        self.data.get((c * self.height + y) * self.width + x).copied()
    }

    /// Runs `op` on every channel and stacks the `out_height x out_width`
    /// results back into a channel-first image.
    fn map_planes<F>(&self, out_height: usize, out_width: usize, operation: &str, op: F) -> Result<Image, DataError>
    where
        F: Fn(&Plane) -> Plane,
    {
        let width = to_u32(self.width, operation)?;
        let height = to_u32(self.height, operation)?;
        let plane_len = self.height * self.width;
        let mut data = Vec::new();
        for c in 0..self.channels {
            let raw = self.data[c * plane_len..(c + 1) * plane_len].to_vec();
            let plane = Plane::from_raw(width, height, raw).ok_or_else(|| DataError::ShapeMismatch {
                expected: vec![self.height, self.width],
                actual: vec![plane_len],
                operation: operation.to_string(),
            })?;
            data.extend_from_slice(op(&plane).as_raw());
        }
        Image::new(self.channels, out_height, out_width, data)
    }

    fn flipped_horizontally(&self) -> Result<Image, DataError> {
        self.map_planes(self.height, self.width, "HorizontalFlip", |plane| {
            imageops::flip_horizontal(plane)
        })
    }
}

fn to_u32(value: usize, operation: &str) -> Result<u32, DataError> {
    u32::try_from(value).map_err(|_| {
        DataError::InvalidArgument(format!("{}: dimension {} exceeds u32::MAX", operation, value))
    })
}

/// Per-channel normalization: `(x - mean[c]) / std[c]`.
#[derive(Debug, Clone)]
pub struct Normalize {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl Normalize {
    /// Creates a new `Normalize` transform.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if `mean` and `std` are empty,
    /// have different lengths, or any `std` entry is zero.
    pub fn new(mean: Vec<f32>, std: Vec<f32>) -> Result<Self, DataError> {
        if mean.is_empty() || mean.len() != std.len() {
            return Err(DataError::InvalidArgument(format!(
                "Normalize: mean ({}) and std ({}) must be non-empty and of equal length",
                mean.len(),
                std.len()
            )));
        }
        if std.iter().any(|&s| s == 0.0) {
            return Err(DataError::InvalidArgument(
                "Normalize: std must not contain zeros".to_string(),
            ));
        }
        Ok(Self { mean, std })
    }
}

impl Transform<Image> for Normalize {
    type Output = Image;

    fn apply(&self, image: &Image) -> Result<Image, DataError> {
        if image.channels != self.mean.len() {
            return Err(DataError::ShapeMismatch {
                expected: vec![self.mean.len()],
                actual: vec![image.channels],
                operation: "Normalize".to_string(),
            });
        }
        let plane = image.height * image.width;
        let mut data = Vec::with_capacity(image.data.len());
        for (c, channel) in image.data.chunks(plane.max(1)).enumerate() {
            let (m, s) = (self.mean[c], self.std[c]);
            data.extend(channel.iter().map(|&v| (v - m) / s));
        }
        Image::new(image.channels, image.height, image.width, data)
    }
}

/// Nearest-neighbour resize to a fixed `height x width`, using
/// `imageops::resize` with `FilterType::Nearest`.
#[derive(Debug, Clone, Copy)]
pub struct Resize {
    height: u32,
    width: u32,
}

impl Resize {
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if either dimension is zero or
    /// does not fit in a `u32`.
    pub fn new(height: usize, width: usize) -> Result<Self, DataError> {
        if height == 0 || width == 0 {
            return Err(DataError::InvalidArgument(format!(
                "Resize: target size {}x{} must be non-zero",
                height, width
            )));
        }
        Ok(Self {
            height: to_u32(height, "Resize")?,
            width: to_u32(width, "Resize")?,
        })
    }
}

impl Transform<Image> for Resize {
    type Output = Image;

    fn apply(&self, image: &Image) -> Result<Image, DataError> {
        if image.height == 0 || image.width == 0 {
            return Err(DataError::ShapeMismatch {
                expected: vec![image.channels, 1, 1],
                actual: image.shape().to_vec(),
                operation: "Resize".to_string(),
            });
        }
        image.map_planes(self.height as usize, self.width as usize, "Resize", |plane| {
            imageops::resize(plane, self.width, self.height, FilterType::Nearest)
        })
    }
}

/// Mirrors every row of the image.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalFlip;

impl Transform<Image> for HorizontalFlip {
    type Output = Image;

    fn apply(&self, image: &Image) -> Result<Image, DataError> {
        image.flipped_horizontally()
    }
}

/// Flips the image horizontally with probability `p`.
///
/// Every call draws a fresh random number, so fetching the same sample twice
/// can give two different images. The generator sits behind a `Mutex`, which
/// keeps the transform usable from several loader threads at once.
#[derive(Debug)]
pub struct RandomHorizontalFlip {
    p: f64,
    rng: Mutex<StdRng>,
}

impl RandomHorizontalFlip {
    /// Creates a flip seeded from system entropy.
    pub fn new(p: f64) -> Result<Self, DataError> {
        Self::with_rng(p, StdRng::from_entropy())
    }

    /// Creates a flip with a reproducible sequence of draws.
    pub fn with_seed(p: f64, seed: u64) -> Result<Self, DataError> {
        Self::with_rng(p, StdRng::seed_from_u64(seed))
    }

    fn with_rng(p: f64, rng: StdRng) -> Result<Self, DataError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(DataError::InvalidArgument(format!(
                "RandomHorizontalFlip: probability {} not in [0, 1]",
                p
            )));
        }
        Ok(Self {
            p,
            rng: Mutex::new(rng),
        })
    }

    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl Transform<Image> for RandomHorizontalFlip {
    type Output = Image;

    fn apply(&self, image: &Image) -> Result<Image, DataError> {
        let draw: f64 = match self.rng.lock() {
            Ok(mut rng) => rng.gen(),
            Err(poisoned) => {
                log::warn!("RandomHorizontalFlip: rng mutex was poisoned. Recovering.");
                poisoned.into_inner().gen()
            }
        };
        if draw < self.p {
            debug!("RandomHorizontalFlip: flipping (draw = {})", draw);
            image.flipped_horizontally()
        } else {
            Ok(image.clone())
        }
    }
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
