//! Spatial operations on image arrays
//!
//! This module contains window-level functionality including:
//! - Exhaustive and random sliding-window extraction
//! - Exact quarter-turn rotations

/// Patch extraction and rotation utilities
pub mod patches;

pub use patches::{extract_patches, rotate_quarter_turns, sample_patches};
