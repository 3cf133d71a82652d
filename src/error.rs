//! Error types for electronics-mcp.
//!
//! Tool failures are deterministic input-validation failures: they are
//! returned to the MCP client as tool-error results, never raised out of a
//! handler, and never retried.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Failures a tool can report back to the MCP client.
///
/// This is a closed enumeration: every failure a tool produces maps onto
/// exactly one of these kinds. Messages stay short (a line, not a page) and
/// carry a hint where one exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// A color name does not belong at its band position.
    #[error("'{color}' is not a valid {position} color. {hint}")]
    InvalidColor {
        /// The offending color as supplied by the caller.
        color: String,
        /// Which band slot rejected it ("digit", "multiplier", "tolerance").
        position: &'static str,
        /// Guidance for the caller.
        hint: &'static str,
    },

    /// A band sequence had a length outside {3, 4, 5}.
    #[error("expected 3, 4, or 5 color bands, got {count}")]
    InvalidBandCount {
        /// Number of bands supplied.
        count: usize,
    },

    /// A tolerance percentage with no color mapping.
    #[error("no tolerance band encodes ±{tolerance}%. Standard tolerances: 0.05, 0.1, 0.25, 0.5, 1, 2, 5, 10, 20")]
    InvalidTolerance {
        /// The requested tolerance in percent.
        tolerance: f64,
    },

    /// A physical quantity that must be strictly positive was not.
    #[error("{quantity} must be greater than zero (got {value})")]
    NonPositiveInput {
        /// Human name of the quantity ("capacitance", "frequency", ...).
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A computed value has no reasonable E-series snap.
    #[error("{value:.3e} F is more than a decade outside the 1pF-1000µF standard capacitor range")]
    SnapOutOfRange {
        /// The ideal (unsnappable) value in farads.
        value: f64,
    },

    /// The board identifier is not one of the supported boards.
    #[error("unknown board '{board}'. Supported: ESP32, Arduino UNO, STM32 Blue Pill")]
    UnknownBoard {
        /// The identifier as supplied by the caller.
        board: String,
    },

    /// The pin number is not in the board's pin list.
    #[error("pin {pin} does not exist on {board}")]
    UnknownPin {
        /// Human name of the board.
        board: &'static str,
        /// The requested pin number.
        pin: u32,
    },

    /// The pin is wired to the on-module SPI flash and cannot be used.
    #[error("{label} (pin {pin}) is reserved for the SPI flash chip - using it corrupts flash access and prevents boot")]
    FlashReserved {
        /// Pin label, e.g. "GPIO6".
        label: &'static str,
        /// The pin number.
        pin: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn invalid_color_carries_hint() {
        let error = ToolError::InvalidColor {
            color: "gold".to_string(),
            position: "digit",
            hint: "Gold is only valid as a multiplier or tolerance band, not as a digit band",
        };
        let msg = error.to_string();
        assert!(msg.contains("gold"));
        assert!(msg.contains("digit"));
        assert!(msg.contains("multiplier or tolerance"));
    }

    #[test]
    fn messages_stay_short() {
        // Human messages are capped at 200 characters.
        let errors = [
            ToolError::InvalidBandCount { count: 7 },
            ToolError::InvalidTolerance { tolerance: 3.0 },
            ToolError::NonPositiveInput {
                quantity: "frequency",
                value: -5.0,
            },
            ToolError::SnapOutOfRange { value: 4.2 },
            ToolError::UnknownBoard {
                board: "RP2040".to_string(),
            },
            ToolError::UnknownPin {
                board: "ESP32",
                pin: 99,
            },
            ToolError::FlashReserved {
                label: "GPIO6",
                pin: 6,
            },
        ];
        for error in errors {
            assert!(error.to_string().chars().count() <= 200);
        }
    }
}
