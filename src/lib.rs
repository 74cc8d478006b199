mod cli;
mod core;
mod processors;
mod utils;

pub use crate::cli::{Algorithm, Cli, Commands, ResizeArgs};
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    FileStats, ImageFile, ImageToolError, ProcessingConfig, ProcessingResult,
    ResizeAlgorithm, Result, DEFAULT_SUFFIX, MAX_DIMENSION,
};
pub use crate::processors::{
    calculate_dimensions, detect_format, normalize_color, BatchProcessor, Compressor, Loader,
    ResizeMode, Resizer,
};
pub use crate::utils::{
    calculate_savings, format_file_size, generate_output_path, is_supported_extension,
    split_file_name, SUPPORTED_EXTENSIONS,
};

pub mod prelude {
    pub use crate::{
        BatchProcessor, ImageProcessor, ProcessingConfig, ProcessingResult, ResizeAlgorithm,
        ResizeMode,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
