// batch-resize/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeMode {
    /// Fit inside the box, keep the aspect ratio, never upscale.
    Fit(u32, u32),
    /// Stretch to exactly these dimensions.
    Exact(u32, u32),
}

impl ResizeMode {
    pub fn from_config(width: u32, height: u32, exact: bool) -> Self {
        if exact {
            ResizeMode::Exact(width, height)
        } else {
            ResizeMode::Fit(width, height)
        }
    }
}

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Returns the resized image. The input is consumed and handed back
    /// unchanged when no resize is needed.
    pub fn resize(&self, image: DynamicImage, mode: ResizeMode) -> DynamicImage {
        let (width, height) = calculate_dimensions(image.dimensions(), mode);

        if (width, height) == image.dimensions() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image;
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, self.get_filter_type())
    }

    fn get_filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Output dimensions for `original` under `mode`.
pub fn calculate_dimensions(original: (u32, u32), mode: ResizeMode) -> (u32, u32) {
    match mode {
        ResizeMode::Exact(w, h) => (w, h),
        ResizeMode::Fit(w, h) => fit_within(original, (w, h)),
    }
}

fn fit_within(original: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (orig_w, orig_h) = original;
    let (max_w, max_h) = bounds;

    if orig_w <= max_w && orig_h <= max_h {
        return original;
    }

    let ratio_w = max_w as f64 / orig_w as f64;
    let ratio_h = max_h as f64 / orig_h as f64;

    // The tighter side lands exactly on its bound.
    if ratio_w <= ratio_h {
        let new_h = (orig_h as f64 * ratio_w).round() as u32;
        (max_w, new_h.clamp(1, max_h))
    } else {
        let new_w = (orig_w as f64 * ratio_h).round() as u32;
        (new_w.clamp(1, max_w), max_h)
    }
}
