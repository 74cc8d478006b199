// batch-resize/src/processors/mod.rs
mod batch;
mod compressor;
mod loader;
mod resizer;

pub use batch::BatchProcessor;
pub use compressor::{detect_format, Compressor};
pub use loader::{normalize_color, Loader};
pub use resizer::{calculate_dimensions, ResizeMode, Resizer};
