//! Error Types
//!
//! This module defines the error type used across the workspace.
//!
//! # Overview
//!
//! The animation step itself never fails. [`SkyringError`] only covers the
//! edges of the system:
//! - Reading and parsing scene configuration
//! - Validating configuration values and colour strings
//! - Validating the asset bundle handed over by the loader
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, SkyringError>`.
//!
//! ```rust,ignore
//! use skyring_core::errors::{Result, SkyringError};
//!
//! fn check(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(SkyringError::InvalidConfig("fleet.count must be > 0".into()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for skyring.
#[derive(Error, Debug)]
pub enum SkyringError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// File I/O error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A configuration value is out of its accepted range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A colour string is not a `#RRGGBB` hex triplet.
    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    // ========================================================================
    // Asset & Scene Errors
    // ========================================================================
    /// A required asset is absent from the bundle supplied by the loader.
    #[error("Asset missing: {0}")]
    AssetMissing(String),

    /// A prefab links nodes out of range or more than once.
    #[error("Invalid prefab: {0}")]
    InvalidPrefab(String),

    /// A node handle no longer refers to a live scene node.
    #[error("Scene node not found")]
    NodeNotFound,
}

/// Alias for `Result<T, SkyringError>`.
pub type Result<T> = std::result::Result<T, SkyringError>;
