// batch-resize/src/processors/compressor.rs
use crate::core::{ImageToolError, Result};
use crate::utils::format_file_size;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

pub struct Compressor {
    quality: u8,
}

impl Compressor {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Encodes `image` as `format` and writes it to `path`. Returns the number
    /// of bytes written.
    pub fn save_with_format(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<u64> {
        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        // Encode fully before touching the destination, which may be the source.
        let data = self.compress_to_bytes(image, format)?;
        std::fs::write(path, &data)?;

        let written = data.len() as u64;
        log::info!("Saved image: {} ({})", path.display(), format_file_size(written));
        Ok(written)
    }

    pub fn compress_to_bytes(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        match format {
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
                match image.color() {
                    ColorType::L8 | ColorType::Rgb8 => image.write_with_encoder(encoder)?,
                    _ => DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?,
                }
            }
            _ => image.write_to(&mut buffer, format)?,
        }

        Ok(buffer.into_inner())
    }
}

pub fn detect_format(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path).map_err(|_| {
        ImageToolError::UnsupportedFormat(format!("Cannot encode {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbImage};

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(detect_format(Path::new("a.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(detect_format(Path::new("a.jpeg")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(detect_format(Path::new("a.tiff")).unwrap(), ImageFormat::Tiff);
        assert_eq!(detect_format(Path::new("a.bmp")).unwrap(), ImageFormat::Bmp);
        assert!(matches!(
            detect_format(Path::new("a.unknown")),
            Err(ImageToolError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn sixteen_bit_images_are_narrowed_for_jpeg() {
        let image = DynamicImage::ImageRgb16(image::ImageBuffer::new(8, 8));
        let bytes = Compressor::new(80)
            .compress_to_bytes(&image, ImageFormat::Jpeg)
            .unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));
    }

    #[test]
    fn save_writes_the_encoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = DynamicImage::ImageRgb8(RgbImage::new(3, 2));

        let format = detect_format(&path).unwrap();
        let written = Compressor::new(75)
            .save_with_format(&image, &path, format)
            .unwrap();
        assert_eq!(written, std::fs::metadata(&path).unwrap().len());
        assert_eq!(image::open(&path).unwrap().dimensions(), (3, 2));
    }
}
