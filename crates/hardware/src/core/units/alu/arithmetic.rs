//! ALU arithmetic operations.
//!
//! Implements RV32I integer addition and subtraction. Both wrap modulo
//! 2^32; no overflow flag is produced and nothing traps.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result, or `None` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> Option<u32> {
    match op {
        AluOp::Add => Some(a.wrapping_add(b)),
        AluOp::Sub => Some(a.wrapping_sub(b)),
        _ => None,
    }
}
