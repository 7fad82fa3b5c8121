//! Configuration for execute-stage front ends.
//!
//! This module defines the configuration structures used by tools built on
//! the execute stage. It provides:
//! 1. **Defaults:** Baseline output and tracing settings.
//! 2. **Structures:** General (tracing) and output (formatting, statistics) sections.
//! 3. **Loading:** JSON parsing from strings or files.
//!
//! The stage itself takes no configuration; nothing here alters its results.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::core::pipeline::stages::execute::AluResult;

/// Text printed in place of a value for [`AluResult::Undefined`].
pub const UNDEFINED_TEXT: &str = "undefined";

/// Rendering of 32-bit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ResultFormat {
    /// Zero-padded hexadecimal (`0x0000000f`).
    #[default]
    #[serde(alias = "hex", alias = "HEX")]
    Hex,
    /// Unsigned decimal.
    #[serde(alias = "unsigned")]
    Unsigned,
    /// Two's-complement signed decimal.
    #[serde(alias = "signed")]
    Signed,
}

impl ResultFormat {
    /// Renders a stage result in this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32ex_core::config::ResultFormat;
    /// use rv32ex_core::core::AluResult;
    ///
    /// assert_eq!(ResultFormat::Hex.render(AluResult::Value(15)), "0x0000000f");
    /// assert_eq!(ResultFormat::Signed.render(AluResult::Value(0xFFFF_FFFD)), "-3");
    /// assert_eq!(ResultFormat::Unsigned.render(AluResult::Undefined), "undefined");
    /// ```
    pub fn render(self, result: AluResult) -> String {
        match (self, result) {
            (_, AluResult::Undefined) => UNDEFINED_TEXT.to_string(),
            (Self::Hex, AluResult::Value(v)) => format!("{v:#010x}"),
            (Self::Unsigned, AluResult::Value(v)) => v.to_string(),
            (Self::Signed, AluResult::Value(v)) => (v as i32).to_string(),
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rv32ex_core::config::{Config, ResultFormat};
///
/// let json = r#"{
///     "general": { "trace_evaluations": true },
///     "output": { "format": "Signed", "print_stats": false }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_evaluations);
/// assert_eq!(config.output.format, ResultFormat::Signed);
/// assert!(config.output.show_mnemonic);
/// assert!(!config.output.print_stats);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Result rendering settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event for every evaluation when `RUST_LOG` is unset.
    #[serde(default)]
    pub trace_evaluations: bool,
}

/// Result rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Number format for results
    #[serde(default)]
    pub format: ResultFormat,

    /// Print the instruction mnemonic next to each result
    #[serde(default = "OutputConfig::default_true")]
    pub show_mnemonic: bool,

    /// Print an evaluation summary after batch runs
    #[serde(default = "OutputConfig::default_true")]
    pub print_stats: bool,
}

impl OutputConfig {
    fn default_true() -> bool {
        true
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ResultFormat::default(),
            show_mnemonic: true,
            print_stats: true,
        }
    }
}
