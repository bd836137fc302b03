//! icon processing stuff
use {
    super::{ResizeFilter, decode, encode_png},
    crate::error::Result,
    image::{GenericImageView, imageops::FilterType},
};

/// default resampling filter for resizing
const DEFAULT_FILTER: FilterType = FilterType::Lanczos3;

/// resizes raster assets into square png copies
#[derive(Debug, Clone, Copy)]
pub struct RasterProcessor {
    /// the resampling filter to resize with
    filter: FilterType,
}

impl RasterProcessor {
    /// make a new processor with defaults
    pub fn new() -> Self {
        Self {
            filter: DEFAULT_FILTER,
        }
    }

    /// set the resampling filter
    pub fn with_filter(mut self, filter: impl Into<FilterType>) -> Self {
        self.filter = filter.into();
        self
    }

    /// make a processor from the configured filter
    pub fn from_filter(filter: ResizeFilter) -> Self {
        Self::new().with_filter(filter)
    }

    /// the resampling filter in use
    pub fn filter(&self) -> FilterType {
        self.filter
    }

    /// decode `bytes`, stretch to `size` x `size` and encode as png
    ///
    /// an image that is already the right size is only re-encoded
    pub fn resize_square(&self, bytes: &[u8], size: u32) -> Result<Vec<u8>> {
        let img = decode(bytes)?;

        let resized = if img.dimensions() != (size, size) {
            img.resize_exact(size, size, self.filter)
        } else {
            img
        };

        encode_png(&resized)
    }
}

impl Default for RasterProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        image::{DynamicImage, Rgba, RgbaImage},
    };

    #[test]
    fn test_resize_keeps_color() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(128, 128, Rgba([10, 20, 30, 255])));
        let bytes = encode_png(&img).unwrap();

        for filter in [ResizeFilter::Nearest, ResizeFilter::Lanczos3] {
            let out = RasterProcessor::from_filter(filter)
                .resize_square(&bytes, 16)
                .unwrap();
            let small = decode(&out).unwrap().to_rgba8();

            assert_eq!(small.dimensions(), (16, 16));
            assert_eq!(small.get_pixel(8, 8), &Rgba([10, 20, 30, 255]));
        }
    }

    #[test]
    fn test_same_size_is_reencoded_only() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(16, 16));
        let bytes = encode_png(&img).unwrap();

        let out = RasterProcessor::new().resize_square(&bytes, 16).unwrap();
        assert_eq!(decode(&out).unwrap().dimensions(), (16, 16));
    }
}
