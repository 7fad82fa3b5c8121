//! Execute-stage and configuration error definitions.
//!
//! This module defines the error handling for the execute stage. It provides:
//! 1. **Decode Errors:** Field triples the ALU dispatcher does not recognise.
//! 2. **Contract Violations:** Bypass selectors and instruction fields outside their encoding width.
//! 3. **Configuration Errors:** Failures while reading or parsing a JSON configuration.

use std::io;

use thiserror::Error;

/// Bypass multiplexer port that a raw selector value was presented to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BypassPort {
    /// Operand A multiplexer (2-bit selector).
    OperandA,
    /// Operand B multiplexer (3-bit selector).
    OperandB,
}

impl std::fmt::Display for BypassPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandA => write!(f, "operand A"),
            Self::OperandB => write!(f, "operand B"),
        }
    }
}

/// Errors raised at the execute-stage boundary.
///
/// The stage itself is total over its typed inputs. These errors only arise
/// when converting raw bus values into typed inputs, or when a caller asks
/// for an undefined decode to be surfaced as an error rather than as
/// [`AluResult::Undefined`](crate::core::pipeline::stages::execute::AluResult::Undefined).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecuteError {
    /// The `(opcode, funct3, funct7)` triple matches no ALU operation.
    #[error(
        "unrecognized encoding: opcode={opcode:#09b} funct3={funct3:#05b} funct7={funct7:#09b}"
    )]
    UnrecognizedEncoding {
        /// Major opcode.
        opcode: u32,
        /// Minor opcode.
        funct3: u32,
        /// Extended function code.
        funct7: u32,
    },

    /// A raw bypass selector value lies outside its enumerated domain.
    ///
    /// This is a caller contract violation: the hazard unit never drives
    /// these encodings.
    #[error("bypass selector {value:#b} out of range for {port}")]
    SelectorOutOfRange {
        /// Port the selector was destined for.
        port: BypassPort,
        /// Offending raw value.
        value: u8,
    },

    /// An instruction field value does not fit in its encoding width.
    #[error("{field} value {value:#x} does not fit in {width} bits")]
    FieldOutOfRange {
        /// Field name (`opcode`, `funct3` or `funct7`).
        field: &'static str,
        /// Offending value.
        value: u32,
        /// Field width in bits.
        width: u32,
    },
}

/// Errors raised while loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
