//! raster image stuff
pub mod placeholder;
pub mod processor;

pub use {placeholder::placeholder_icon, processor::RasterProcessor};

use {
    crate::error::Result,
    image::{DynamicImage, ImageFormat, ImageReader, imageops::FilterType},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::io::Cursor,
};

/// the resampling filter used when shrinking icons
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    /// nearest neighbour
    Nearest,
    /// linear
    Triangle,
    /// cubic
    CatmullRom,
    /// gaussian
    Gaussian,
    /// lanczos with a window of 3
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(value: ResizeFilter) -> Self {
        match value {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// decode any supported raster format, guessing it from the bytes
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?)
}

/// read the pixel dimensions without decoding the whole image
pub fn dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    Ok(ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?)
}

/// encode an image as png
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// stretch a raster asset into a `target_size` square and re-encode it as png
///
/// the aspect ratio is not preserved
pub fn resize_raster_asset(bytes: &[u8], target_size: u32) -> Result<Vec<u8>> {
    RasterProcessor::new().resize_square(bytes, target_size)
}
