// batch-resize/src/core/mod.rs
pub mod processor;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MAX_DIMENSION: u32 = 100_000;
pub const DEFAULT_SUFFIX: &str = "_res";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

/// Settings for one run over a directory. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    pub target_directory: PathBuf,
    pub target_width: u32,
    pub target_height: u32,
    /// Stretch to exactly `target_width` x `target_height` instead of fitting.
    pub exact_size_mode: bool,
    /// `Some` switches to copy mode: results go to `{base}{suffix}.{ext}`.
    pub output_suffix: Option<String>,
    pub quality: u8,
    pub algorithm: ResizeAlgorithm,
    /// 1 runs sequentially, 0 uses every core, anything else sizes a pool.
    pub threads: usize,
}

/// A directory entry that passed the extension filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub base_name: String,
    /// Lower-cased, without the dot.
    pub extension: String,
    /// Extension as it appears on disk, used when naming copies.
    pub raw_extension: String,
}

#[derive(Debug, Default)]
pub struct ProcessingResult {
    pub attempted: usize,
    pub succeeded: usize,
    pub errors: Vec<(String, String)>,
    pub created: Vec<PathBuf>,
    pub total_size_before: u64,
    pub total_size_after: u64,
}

/// Outcome of a single successful file.
#[derive(Debug, Clone)]
pub struct FileStats {
    pub output_path: PathBuf,
    pub original_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
    pub size_before: u64,
    pub size_after: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            target_directory: PathBuf::from("."),
            target_width: 1000,
            target_height: 800,
            exact_size_mode: false,
            output_suffix: None,
            quality: 75,
            algorithm: ResizeAlgorithm::Bicubic,
            threads: 1,
        }
    }
}

impl ProcessingConfig {
    /// Overwrite mode over `dir` with default dimensions.
    pub fn overwrite<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            target_directory: dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Copy mode over `dir`, tagging outputs with `suffix`.
    pub fn copy<P: AsRef<Path>>(dir: P, suffix: impl Into<String>) -> Self {
        Self {
            target_directory: dir.as_ref().to_path_buf(),
            output_suffix: Some(suffix.into()),
            ..Default::default()
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    pub fn with_exact_size(mut self, exact: bool) -> Self {
        self.exact_size_mode = exact;
        self
    }

    pub fn is_copy_mode(&self) -> bool {
        self.output_suffix.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(ImageToolError::InvalidDimensions(
                self.target_width,
                self.target_height,
            ));
        }

        if self.target_width > MAX_DIMENSION || self.target_height > MAX_DIMENSION {
            return Err(ImageToolError::InvalidParameter(
                "Dimensions too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(ImageToolError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        if let Some(suffix) = &self.output_suffix {
            if suffix.is_empty() {
                return Err(ImageToolError::InvalidParameter(
                    "Suffix must not be empty in copy mode".to_string(),
                ));
            }
            if suffix.contains(['/', '\\']) {
                return Err(ImageToolError::InvalidParameter(format!(
                    "Suffix must not contain a path separator: {}",
                    suffix
                )));
            }
        }

        Ok(())
    }
}

impl ProcessingResult {
    pub fn failed(&self) -> usize {
        self.errors.len()
    }
}

#[derive(Error, Debug)]
pub enum ImageToolError {
    #[error("The folder '{}' does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Invalid dimensions {0}x{1}: width and height must be positive")]
    InvalidDimensions(u32, u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, ImageToolError>;
