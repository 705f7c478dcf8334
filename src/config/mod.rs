//! Configuration module for finviz
//!
//! This module provides:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinvizPaths;
pub use settings::Settings;
