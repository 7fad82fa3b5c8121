//! Global Execute-Stage Constants.
//!
//! This module defines constants shared across the execute stage. It includes:
//! 1. **Field Widths:** Bit widths of the instruction fields the dispatcher consumes.
//! 2. **Shift Constants:** The shift-amount mask for RV32.
//! 3. **Operand Constants:** The fixed literal fed to operand B for link computation.

/// Width of the major opcode field in bits.
pub const OPCODE_WIDTH: u32 = 7;

/// Width of the `funct3` field in bits.
pub const FUNCT3_WIDTH: u32 = 3;

/// Width of the `funct7` field in bits.
pub const FUNCT7_WIDTH: u32 = 7;

/// Bit mask for the shift amount in RV32 (5 bits: 0-31).
///
/// Applies to immediate and register shifts alike; the upper 27 bits of
/// operand B are ignored.
pub const SHAMT_MASK_RV32: u32 = 0x1F;

/// Literal presented on operand B for return-address computation (`pc + 4`).
pub const LINK_OFFSET: u32 = 4;
