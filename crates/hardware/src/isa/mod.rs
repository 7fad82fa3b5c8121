//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I encodings the execute stage dispatches on, the field
//! triple handed over by the decoder, and mnemonic lookup.

/// Mnemonic lookup for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and the ALU selector triple.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
