//! placeholder icons for themes that don't ship one
use {
    super::encode_png,
    crate::{color::Rgb, error::Result},
    image::{DynamicImage, Rgba, RgbaImage},
};

/// top left corner of the gradient
const GRADIENT_START: Rgb = Rgb::new(0x42, 0x85, 0xf4);

/// bottom right corner of the gradient
const GRADIENT_END: Rgb = Rgb::new(0x34, 0xa8, 0x53);

/// where the white inset starts, as a fraction of the icon size
const INSET_START: f64 = 0.2;

/// where the white inset ends
const INSET_END: f64 = 0.8;

/// render a `size` x `size` png: a diagonal gradient with a white square in the middle
pub fn placeholder_icon(size: u32) -> Result<Vec<u8>> {
    let extent = f64::from(size);
    let diagonal = (2.0 * (extent - 1.0)).max(1.0);
    let inset = |v: u32| {
        let center = f64::from(v) + 0.5;
        center >= extent * INSET_START && center < extent * INSET_END
    };

    let img = RgbaImage::from_fn(size, size, |x, y| {
        let rgb = if inset(x) && inset(y) {
            Rgb::WHITE
        } else {
            GRADIENT_START.lerp(GRADIENT_END, f64::from(x + y) / diagonal)
        };

        Rgba([rgb.r, rgb.g, rgb.b, 255])
    });

    encode_png(&DynamicImage::ImageRgba8(img))
}

#[cfg(test)]
mod tests {
    use {super::*, crate::raster::decode};

    #[test]
    fn test_placeholder_sizes() {
        for size in [16, 48, 128] {
            let img = decode(&placeholder_icon(size).unwrap()).unwrap().to_rgba8();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_placeholder_layout() {
        let img = decode(&placeholder_icon(128).unwrap()).unwrap().to_rgba8();

        assert_eq!(img.get_pixel(64, 64), &Rgba([255, 255, 255, 255]));

        let corner = img.get_pixel(0, 0);
        assert_eq!(corner, &Rgba([0x42, 0x85, 0xf4, 255]));
        assert_ne!(img.get_pixel(127, 127), corner);
    }
}
