//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA) for RV32.
//!
//! Only the low 5 bits of operand B are significant, for the
//! immediate forms and the register forms alike.

use crate::common::constants::SHAMT_MASK_RV32;
use crate::core::pipeline::signals::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (low 5 bits used, upper bits ignored).
///
/// # Returns
///
/// The shifted value, or `None` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> Option<u32> {
    let shamt = b & SHAMT_MASK_RV32;
    match op {
        AluOp::Sll => Some(a << shamt),
        AluOp::Srl => Some(a >> shamt),
        AluOp::Sra => Some(((a as i32) >> shamt) as u32),
        _ => None,
    }
}
