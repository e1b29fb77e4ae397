//! # Configuration Management
//!
//! Centralized limits for the wire-format codec.
//!
//! The codec itself is pure and carries no state; the only tunable is the
//! framing layer's payload size cap, which bounds how much memory a single
//! [`core::length_delimited::encode`](crate::core::length_delimited) call may
//! allocate.
//!
//! ## Security Considerations
//! - The default 16 MB payload cap prevents memory exhaustion from oversized frames
//! - Length prefixes are validated against the buffer before any slicing

use crate::error::{Result, WireError};
use serde::{Deserialize, Serialize};

/// Max allowed framed payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Framing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FramerConfig {
    /// Maximum allowed payload size in bytes
    pub max_payload_size: usize,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD_SIZE,
        }
    }
}

impl FramerConfig {
    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_payload_size == 0 {
            errors.push("Max payload size cannot be 0".to_string());
        } else if self.max_payload_size > 100 * 1024 * 1024 {
            errors.push(format!(
                "Max payload size too large: {} bytes (maximum recommended: 100 MB)",
                self.max_payload_size
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(WireError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FramerConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.max_payload_size, MAX_PAYLOAD_SIZE);
    }

    #[test]
    fn test_zero_payload_size_rejected() {
        let config = FramerConfig {
            max_payload_size: 0,
        };
        assert!(!config.validate().is_empty());
        assert!(config.validate_strict().is_err());
    }

    #[test]
    fn test_oversized_payload_cap_rejected() {
        let config = FramerConfig {
            max_payload_size: 200 * 1024 * 1024,
        };
        assert!(!config.validate().is_empty());
    }
}
