// batch-resize/src/processors/batch.rs
use crate::core::processor::ImageProcessor;
use crate::core::{
    FileStats, ImageFile, ImageToolError, ProcessingConfig, ProcessingResult, Result,
};
use crate::utils::{calculate_savings, generate_output_path};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use walkdir::WalkDir;

/// Resizes every eligible image in one directory, isolating per-file failures.
pub struct BatchProcessor {
    config: ProcessingConfig,
    thread_pool: Option<rayon::ThreadPool>,
    show_progress: bool,
}

impl BatchProcessor {
    pub fn new(config: ProcessingConfig) -> Result<Self> {
        config.validate()?;

        let mut processor = Self {
            config,
            thread_pool: None,
            show_progress: false,
        };

        if processor.config.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(processor.config.threads)
                .build()
                .map_err(|e| {
                    ImageToolError::ProcessingError(format!("Failed to create thread pool: {}", e))
                })?;
            processor.thread_pool = Some(pool);
        }

        Ok(processor)
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Fails only when the target directory is missing or cannot be listed;
    /// every per-file problem ends up in [`ProcessingResult::errors`].
    pub fn process_directory(&self) -> Result<ProcessingResult> {
        let input_dir = self.config.target_directory.as_path();
        self.validate_directory(input_dir)?;

        println!("Processing images in: {}...", input_dir.display());

        let files = self.collect_image_files(input_dir);

        if files.is_empty() {
            log::warn!("No image files found in {}", input_dir.display());
            return Ok(ProcessingResult::default());
        }

        log::info!(
            "Processing {} images from {}",
            files.len(),
            input_dir.display()
        );

        let pb = self.create_progress_bar(files.len());
        let processor = ImageProcessor::new(&self.config);
        let suffix = self.config.output_suffix.as_deref();

        let run = |file: &ImageFile| -> Result<FileStats> {
            let output_path = generate_output_path(file, suffix);
            let outcome = processor.process_file(file, &output_path);
            report_outcome(&pb, file, &outcome, suffix.is_some());
            pb.inc(1);
            outcome
        };

        // Collected in enumeration order in every mode.
        let outcomes: Vec<Result<FileStats>> = match (&self.thread_pool, self.config.threads) {
            (Some(pool), _) => pool.install(|| files.par_iter().map(|file| run(file)).collect()),
            (None, 0) => files.par_iter().map(|file| run(file)).collect(),
            (None, _) => files.iter().map(|file| run(file)).collect(),
        };

        let mut result = ProcessingResult {
            attempted: files.len(),
            ..Default::default()
        };

        for (file, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(stats) => {
                    result.succeeded += 1;
                    result.total_size_before += stats.size_before;
                    result.total_size_after += stats.size_after;
                    if suffix.is_some() {
                        result.created.push(stats.output_path);
                    }
                }
                Err(e) => {
                    result.errors.push((file.file_name.clone(), e.to_string()));
                }
            }
        }

        pb.finish_with_message(format!(
            "Processed {} images ({:.1}% size reduction)",
            result.succeeded,
            calculate_savings(result.total_size_before, result.total_size_after)
        ));

        Ok(result)
    }

    /// Non-recursive listing filtered by the extension allow-list and, in
    /// copy mode, the suffix guard.
    pub fn collect_image_files(&self, input_dir: &Path) -> Vec<ImageFile> {
        let suffix = self.config.output_suffix.as_deref();

        WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| ImageFile::from_path(entry.path()))
            .filter(|file| !suffix.is_some_and(|suffix| file.has_suffix(suffix)))
            .collect()
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    fn validate_directory(&self, input_dir: &Path) -> Result<()> {
        if !input_dir.is_dir() {
            return Err(ImageToolError::DirectoryNotFound(input_dir.to_path_buf()));
        }

        // An unlistable directory would otherwise look like an empty one.
        std::fs::read_dir(input_dir)?;

        Ok(())
    }
}

fn report_outcome(
    pb: &ProgressBar,
    file: &ImageFile,
    outcome: &Result<FileStats>,
    copy_mode: bool,
) {
    match outcome {
        Ok(stats) => {
            log::debug!(
                "{}: {}x{} -> {}x{}",
                file.file_name,
                stats.original_dimensions.0,
                stats.original_dimensions.1,
                stats.output_dimensions.0,
                stats.output_dimensions.1
            );
            if copy_mode {
                let created = stats
                    .output_path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                pb.suspend(|| println!("  [Created] {}", created));
            }
        }
        Err(e) => {
            pb.suspend(|| println!("  [ERROR] {}: {}", file.file_name, e));
        }
    }
}
