// batch-resize/src/utils/mod.rs
use crate::core::ImageFile;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

/// Case-insensitive membership in the extension allow-list.
pub fn is_supported_extension(extension: &str) -> bool {
    let ext_lower = extension.to_lowercase();
    SUPPORTED_EXTENSIONS.contains(&ext_lower.as_str())
}

/// Splits at the last period. `None` when the name has no period at all.
pub fn split_file_name(file_name: &str) -> Option<(&str, &str)> {
    file_name.rsplit_once('.')
}

impl ImageFile {
    /// Builds an `ImageFile` for a path whose extension is on the allow-list.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let (base_name, raw_extension) = split_file_name(file_name)?;
        let extension = raw_extension.to_lowercase();

        if !is_supported_extension(&extension) {
            return None;
        }

        Some(Self {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
            base_name: base_name.to_string(),
            extension,
            raw_extension: raw_extension.to_string(),
        })
    }

    /// True when the base name carries the suffix marker of a generated copy.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.base_name.ends_with(suffix)
    }
}

/// Where a file's result is written: the file itself, or a suffixed sibling.
pub fn generate_output_path(file: &ImageFile, suffix: Option<&str>) -> PathBuf {
    match suffix {
        None => file.path.clone(),
        Some(suffix) => {
            let new_filename = format!("{}{}.{}", file.base_name, suffix, file.raw_extension);
            file.path.with_file_name(new_filename)
        }
    }
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

pub fn calculate_savings(size_before: u64, size_after: u64) -> f64 {
    if size_before == 0 {
        return 0.0;
    }

    let savings = (size_before as f64 - size_after as f64) / size_before as f64 * 100.0;
    savings.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_ignores_case() {
        assert!(is_supported_extension("PNG"));
        assert!(is_supported_extension("Jpeg"));
        assert!(is_supported_extension("tiff"));
        assert!(!is_supported_extension("tif"));
        assert!(!is_supported_extension("webp"));
        assert!(!is_supported_extension("txt"));
    }

    #[test]
    fn split_uses_the_last_period() {
        assert_eq!(split_file_name("photo.final.JPG"), Some(("photo.final", "JPG")));
        assert_eq!(split_file_name("README"), None);
        assert_eq!(split_file_name(".png"), Some(("", "png")));
    }

    #[test]
    fn image_file_keeps_raw_and_lowered_extension() {
        let file = ImageFile::from_path(Path::new("dir/Sunset.JPG")).unwrap();
        assert_eq!(file.file_name, "Sunset.JPG");
        assert_eq!(file.base_name, "Sunset");
        assert_eq!(file.extension, "jpg");
        assert_eq!(file.raw_extension, "JPG");

        assert!(ImageFile::from_path(Path::new("dir/notes.txt")).is_none());
        assert!(ImageFile::from_path(Path::new("dir/Makefile")).is_none());
    }

    #[test]
    fn suffix_guard_matches_the_base_name_only() {
        let copy = ImageFile::from_path(Path::new("cat_res.png")).unwrap();
        assert!(copy.has_suffix("_res"));

        let original = ImageFile::from_path(Path::new("cat.png")).unwrap();
        assert!(!original.has_suffix("_res"));
    }

    #[test]
    fn output_path_is_source_or_suffixed_sibling() {
        let file = ImageFile::from_path(Path::new("pics/cat.PNG")).unwrap();
        assert_eq!(generate_output_path(&file, None), PathBuf::from("pics/cat.PNG"));
        assert_eq!(
            generate_output_path(&file, Some("_res")),
            PathBuf::from("pics/cat_res.PNG")
        );
    }

    #[test]
    fn file_sizes_are_human_readable() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512.00 B");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn savings_are_clamped_to_a_percentage() {
        assert_eq!(calculate_savings(0, 10), 0.0);
        assert_eq!(calculate_savings(100, 25), 75.0);
        assert_eq!(calculate_savings(100, 200), 0.0);
    }
}
