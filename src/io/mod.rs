//! Input/output: image files, reports, progress display and error handling

/// Command-line driver
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// Grayscale loading and plot export
pub mod image;
/// Progress bars for batch evaluation
pub mod progress;
/// Score lines and CSV output
pub mod report;
