//! Common types and constants used throughout the execute stage.
//!
//! This module provides the building blocks shared by the bypass network,
//! the ALU dispatcher and the front ends. It includes:
//! 1. **Constants:** Field widths, the RV32 shift mask and the link offset.
//! 2. **Error Handling:** Decode, contract and configuration error types.

/// Common constants used throughout the execute stage.
pub mod constants;

/// Error types for the execute stage and configuration loading.
pub mod error;

pub use constants::{LINK_OFFSET, SHAMT_MASK_RV32};
pub use error::{BypassPort, ConfigError, ExecuteError};
