//! Conversions between `image` buffers and the lightweight `rag-core` types.

use image::{DynamicImage, ImageBuffer, Luma};
use rag_core::ScalarImage;

/// Copy a 32-bit float luma image into a [`ScalarImage`].
pub fn scalar_image_from_luma32f(img: &ImageBuffer<Luma<f32>, Vec<f32>>) -> ScalarImage {
    ScalarImage {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw().clone(),
    }
}

/// Any decoded image as float luma in `[0, 1]`.
pub fn scalar_image_from_dynamic(img: &DynamicImage) -> ScalarImage {
    scalar_image_from_luma32f(&img.to_luma32f())
}

/// Read a label map from the luma channel of `img`.
///
/// 8- and 16-bit images keep their raw values; wider formats are converted
/// to 16-bit first.
pub fn labels_from_dynamic(img: &DynamicImage) -> Vec<u32> {
    match img {
        DynamicImage::ImageLuma8(gray) => gray.as_raw().iter().map(|&v| u32::from(v)).collect(),
        DynamicImage::ImageLuma16(gray) => gray.as_raw().iter().map(|&v| u32::from(v)).collect(),
        other => other
            .to_luma16()
            .as_raw()
            .iter()
            .map(|&v| u32::from(v))
            .collect(),
    }
}

/// Pack a label map into a 16-bit luma image.
///
/// `None` when `labels` does not hold `width * height` entries or a label
/// does not fit in 16 bits.
pub fn labels_to_luma16(
    labels: &[u32],
    width: u32,
    height: u32,
) -> Option<ImageBuffer<Luma<u16>, Vec<u16>>> {
    let data = labels
        .iter()
        .map(|&l| u16::try_from(l).ok())
        .collect::<Option<Vec<u16>>>()?;
    ImageBuffer::from_raw(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    #[test]
    fn float_luma_is_copied_row_major() {
        let img = ImageBuffer::from_fn(3, 2, |x, y| Luma([(x + 10 * y) as f32]));
        let scalar = scalar_image_from_luma32f(&img);
        assert_eq!((3, 2), (scalar.width, scalar.height));
        assert_eq!(Some(12.0), scalar.get(2, 1));
    }

    #[test]
    fn gray_labels_keep_raw_values() {
        let gray = GrayImage::from_raw(2, 2, vec![0, 1, 1, 7]).expect("2x2");
        let labels = labels_from_dynamic(&DynamicImage::ImageLuma8(gray));
        assert_eq!(vec![0, 1, 1, 7], labels);
    }

    #[test]
    fn luma16_packing_checks_range_and_size() {
        let img = labels_to_luma16(&[0, 1, 2, 70_000], 2, 2);
        assert!(img.is_none());
        assert!(labels_to_luma16(&[0, 1, 2], 2, 2).is_none());

        let img = labels_to_luma16(&[0, 1, 2, 3], 2, 2).expect("fits");
        assert_eq!(3, img.get_pixel(1, 1).0[0]);
    }
}
