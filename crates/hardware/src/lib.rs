//! RISC-V RV32I execute-stage library.
//!
//! This crate models the execute stage of an in-order RV32I pipeline as a
//! pure, combinational function of its inputs:
//! 1. **Bypass:** Two operand multiplexers choosing between register file values,
//!    execute/memory forwarding paths, the PC, the immediate and the link constant.
//! 2. **Dispatch:** Decoding `(opcode, funct3, funct7)` into one ALU operation.
//! 3. **ALU:** Wrapping arithmetic, logic, comparisons and shifts on 32-bit operands.
//! 4. **Tooling:** Configuration, mnemonics and caller-held evaluation statistics.
//!
//! Register file, immediate generation, hazard detection and clocking are
//! the surrounding simulator's concern.

/// Common types and constants (field widths, shift mask, errors).
pub mod common;
/// Front-end configuration (tracing, output format).
pub mod config;
/// Execute-stage datapath (signals, bypass, ALU, stage boundary).
pub mod core;
/// Instruction set (RV32I encodings, field triple, mnemonics).
pub mod isa;
/// Caller-held evaluation statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Stage boundary: inputs, output and the evaluating unit.
pub use crate::core::{AluResult, ExecuteInputs, ExecuteStage};
/// Error raised at the stage boundary.
pub use crate::common::error::ExecuteError;
