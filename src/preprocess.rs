use crate::tensor::{InputTensor, ShapeMismatch, INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};
use image::{imageops::FilterType, ColorType};
use ndarray::Array;
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvalidImageError {
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("unsupported color type {0:?}: expected a 3-channel RGB image")]
    UnsupportedColor(ColorType),
    #[error("preprocessed image has an invalid shape: {0}")]
    Shape(#[from] ShapeMismatch),
}

/// Turns an uploaded JPEG or PNG into the normalized batch the classifier
/// expects.
///
/// Resampling uses Catmull-Rom. Images without exactly three color
/// channels (grayscale, alpha variants) are rejected rather than converted.
pub fn preprocess(image_data: &[u8]) -> Result<InputTensor, InvalidImageError> {
    let image_reader = image::ImageReader::new(Cursor::new(image_data))
        .with_guessed_format()
        .map_err(|e| InvalidImageError::Decode(e.to_string()))?;

    let img = image_reader
        .decode()
        .map_err(|e| InvalidImageError::Decode(e.to_string()))?;

    if img.color().channel_count() != INPUT_CHANNELS as u8 {
        return Err(InvalidImageError::UnsupportedColor(img.color()));
    }

    let resized = img
        .resize_exact(INPUT_WIDTH as u32, INPUT_HEIGHT as u32, FilterType::CatmullRom)
        .to_rgb8();

    let mut input = Array::zeros((1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS));
    for (x, y, pixel) in resized.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        input[[0, y as usize, x as usize, 0]] = (r as f32) / 255.;
        input[[0, y as usize, x as usize, 1]] = (g as f32) / 255.;
        input[[0, y as usize, x as usize, 2]] = (b as f32) / 255.;
    }

    Ok(InputTensor::new(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::INPUT_SHAPE;
    use image::{ImageBuffer, Luma, Rgb, Rgba};
    use std::io::Cursor;

    #[test]
    fn preprocess_normalizes_any_resolution_to_the_model_shape() {
        let img = ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(100, 37, Rgb([255, 0, 0]));
        let mut image_data: Vec<u8> = Vec::new();
        img.write_to(&mut Cursor::new(&mut image_data), image::ImageFormat::Png)
            .unwrap();

        let tensor = preprocess(&image_data).unwrap();

        assert_eq!(tensor.shape(), &INPUT_SHAPE);
        assert!(tensor.view().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn channel_values_are_scaled_into_unit_range() {
        let img = ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(64, 64, Rgb([255, 0, 0]));
        let mut image_data: Vec<u8> = Vec::new();
        img.write_to(&mut Cursor::new(&mut image_data), image::ImageFormat::Png)
            .unwrap();

        let tensor = preprocess(&image_data).unwrap();
        let view = tensor.view();

        assert!((view[[0, 10, 10, 0]] - 1.0).abs() < f32::EPSILON);
        assert_eq!(view[[0, 10, 10, 1]], 0.0);
        assert_eq!(view[[0, 10, 10, 2]], 0.0);
    }

    #[test]
    fn grayscale_uploads_are_rejected() {
        let img = ImageBuffer::<Luma<u8>, Vec<u8>>::from_pixel(50, 50, Luma([128]));
        let mut image_data: Vec<u8> = Vec::new();
        img.write_to(&mut Cursor::new(&mut image_data), image::ImageFormat::Png)
            .unwrap();

        let err = preprocess(&image_data).unwrap_err();

        assert!(matches!(err, InvalidImageError::UnsupportedColor(_)));
    }

    #[test]
    fn alpha_uploads_are_rejected() {
        let img = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_pixel(32, 32, Rgba([10, 20, 30, 128]));
        let mut image_data: Vec<u8> = Vec::new();
        img.write_to(&mut Cursor::new(&mut image_data), image::ImageFormat::Png)
            .unwrap();

        let err = preprocess(&image_data).unwrap_err();

        assert!(matches!(err, InvalidImageError::UnsupportedColor(_)));
    }

    #[test]
    fn undecodable_bytes_are_rejected() {
        let err = preprocess(b"definitely not an image").unwrap_err();

        assert!(matches!(err, InvalidImageError::Decode(_)));
    }
}
