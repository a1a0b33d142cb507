//! Configuration module for Money Flow
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MoneyFlowPaths;
pub use settings::Settings;
