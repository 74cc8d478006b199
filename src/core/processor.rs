// batch-resize/src/core/processor.rs
use super::{FileStats, ImageFile, ImageToolError, ProcessingConfig, Result};
use crate::processors::{detect_format, normalize_color, Compressor, Loader, ResizeMode, Resizer};
use image::{GenericImageView, ImageFormat};
use std::path::Path;

/// Runs one file through load, colour normalization, resize and save.
pub struct ImageProcessor {
    mode: ResizeMode,
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(config: &ProcessingConfig) -> Self {
        Self {
            mode: ResizeMode::from_config(
                config.target_width,
                config.target_height,
                config.exact_size_mode,
            ),
            loader: Loader::new(),
            resizer: Resizer::new(config.algorithm),
            compressor: Compressor::new(config.quality),
        }
    }

    /// Output keeps the source extension, so the encoder is picked from it.
    pub fn process_file(&self, file: &ImageFile, output_path: &Path) -> Result<FileStats> {
        log::debug!("Processing {} -> {}", file.file_name, output_path.display());

        let format = ImageFormat::from_extension(&file.extension).ok_or_else(|| {
            ImageToolError::UnsupportedFormat(format!("Cannot encode .{}", file.extension))
        })?;
        self.run(&file.path, output_path, format)
    }

    /// Standalone variant: the output format follows `output_path`'s extension.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<FileStats> {
        let output_path = output_path.as_ref();
        let format = detect_format(output_path)?;
        self.run(input_path.as_ref(), output_path, format)
    }

    fn run(&self, input_path: &Path, output_path: &Path, format: ImageFormat) -> Result<FileStats> {
        let size_before = std::fs::metadata(input_path)?.len();

        let image = self.loader.load(input_path)?;
        let original_dimensions = image.dimensions();

        let image = normalize_color(image);
        let image = self.resizer.resize(image, self.mode);
        let output_dimensions = image.dimensions();

        let size_after = self.compressor.save_with_format(&image, output_path, format)?;

        Ok(FileStats {
            output_path: output_path.to_path_buf(),
            original_dimensions,
            output_dimensions,
            size_before,
            size_after,
        })
    }
}
