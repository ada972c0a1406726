use skinset_data::transforms::Image;
use std::sync::Once;

// Helper to initialize logger only once for all tests in this binary
static LOGGER_INIT: Once = Once::new();

#[allow(dead_code)]
pub(crate) fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        // If another test already installed a logger, that's okay.
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

// Builds `count` single-channel 2x2 images; image `i` is filled with `i`.
#[allow(dead_code)]
pub(crate) fn create_test_images(count: usize) -> Vec<Image> {
    (0..count)
        .map(|i| Image::new(1, 2, 2, vec![i as f32; 4]).expect("Test image creation failed"))
        .collect()
}
