use crate::core::{ProcessingConfig, ResizeAlgorithm, DEFAULT_SUFFIX};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "batch-resize", version, about = "Resize every image in a folder")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resize images in place, replacing the originals
    Overwrite {
        #[command(flatten)]
        args: ResizeArgs,
    },
    /// Write resized copies next to the originals
    Copy {
        #[command(flatten)]
        args: ResizeArgs,

        /// Appended to the base name of every copy; files already ending in it are skipped
        #[arg(short, long, default_value = DEFAULT_SUFFIX)]
        suffix: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ResizeArgs {
    /// Folder to process (not recursive)
    #[arg(default_value = ".")]
    pub folder: PathBuf,

    /// Target width in pixels
    #[arg(short = 'W', long, default_value_t = 1000)]
    pub width: u32,

    /// Target height in pixels
    #[arg(short = 'H', long, default_value_t = 800)]
    pub height: u32,

    /// Stretch to exactly WIDTH x HEIGHT instead of fitting inside it
    #[arg(short, long)]
    pub exact: bool,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = 75)]
    pub quality: u8,

    /// Resampling filter
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bicubic)]
    pub algorithm: Algorithm,

    /// Worker threads (1 = sequential, 0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 1)]
    pub threads: usize,

    /// Show a progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl ResizeArgs {
    pub fn to_config(&self, output_suffix: Option<String>) -> ProcessingConfig {
        ProcessingConfig {
            target_directory: self.folder.clone(),
            target_width: self.width,
            target_height: self.height,
            exact_size_mode: self.exact,
            output_suffix,
            quality: self.quality,
            algorithm: self.algorithm.into(),
            threads: self.threads,
        }
    }
}

impl Commands {
    pub fn args(&self) -> &ResizeArgs {
        match self {
            Commands::Overwrite { args } | Commands::Copy { args, .. } => args,
        }
    }

    pub fn to_config(&self) -> ProcessingConfig {
        match self {
            Commands::Overwrite { args } => args.to_config(None),
            Commands::Copy { args, suffix } => args.to_config(Some(suffix.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_defaults_mirror_the_library_defaults() {
        let cli = Cli::try_parse_from(["batch-resize", "overwrite"]).unwrap();
        let config = cli.command.to_config();
        let defaults = ProcessingConfig::default();

        assert_eq!(config.target_directory, defaults.target_directory);
        assert_eq!(config.target_width, defaults.target_width);
        assert_eq!(config.target_height, defaults.target_height);
        assert_eq!(config.exact_size_mode, defaults.exact_size_mode);
        assert_eq!(config.quality, defaults.quality);
        assert_eq!(config.algorithm, defaults.algorithm);
        assert_eq!(config.threads, defaults.threads);
        assert!(config.output_suffix.is_none());
    }

    #[test]
    fn copy_parses_suffix_and_shared_flags() {
        let cli = Cli::try_parse_from([
            "batch-resize", "-v", "copy", "photos", "-W", "640", "-H", "480", "--exact",
            "--suffix", "_small", "-a", "lanczos3", "-j", "4",
        ])
        .unwrap();

        assert!(cli.verbose);
        let config = cli.command.to_config();
        assert_eq!(config.target_directory, PathBuf::from("photos"));
        assert_eq!((config.target_width, config.target_height), (640, 480));
        assert!(config.exact_size_mode);
        assert_eq!(config.output_suffix.as_deref(), Some("_small"));
        assert_eq!(config.algorithm, ResizeAlgorithm::Lanczos3);
        assert_eq!(config.threads, 4);
    }

    #[test]
    fn copy_suffix_defaults_to_res() {
        let cli = Cli::try_parse_from(["batch-resize", "copy"]).unwrap();
        assert_eq!(cli.command.to_config().output_suffix.as_deref(), Some("_res"));
    }
}
