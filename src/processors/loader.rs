// batch-resize/src/processors/loader.rs
use crate::core::{ImageToolError, Result, MAX_DIMENSION};
use image::{ColorType, DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Clone)]
pub struct Loader {
    max_dimensions: (u32, u32),
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: (MAX_DIMENSION, MAX_DIMENSION),
        }
    }

    /// Decodes the file at `path`. The file handle lives only inside this call.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| {
                ImageToolError::ProcessingError(format!("Failed to decode image: {}", e))
            })?;

        let (width, height) = image.dimensions();
        let (max_w, max_h) = self.max_dimensions;
        if width > max_w || height > max_h {
            return Err(ImageToolError::ProcessingError(format!(
                "Image dimensions {}x{} exceed maximum {}x{}",
                width, height, max_w, max_h
            )));
        }

        log::info!(
            "Loaded image: {}x{} pixels, color: {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        let metadata = path.metadata()?;
        if metadata.len() == 0 {
            return Err(ImageToolError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops the alpha channel so every supported output format can hold the result.
///
/// Palette images never reach this point as such: the decoders expand them to
/// RGB or RGBA. Images without alpha are returned as-is.
pub fn normalize_color(image: DynamicImage) -> DynamicImage {
    let color = image.color();
    if !color.has_alpha() {
        return image;
    }

    log::debug!("Converting {:?} to RGB", color);

    match color {
        ColorType::La16 | ColorType::Rgba16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}
