//! Common utilities module
//!
//! This module contains shared utilities used across the color pipeline.

pub mod error;
pub mod file_info;

pub use error::{AnalysisError, Result};
pub use file_info::{FileInfo, format_file_size};
