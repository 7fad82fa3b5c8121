//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, and set-less-than (signed and unsigned).
//! Comparison results are always 0 or 1.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result, or `None` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> Option<u32> {
    match op {
        AluOp::Or => Some(a | b),
        AluOp::And => Some(a & b),
        AluOp::Xor => Some(a ^ b),
        // Two's-complement view of both operands.
        AluOp::Slt => Some(((a as i32) < (b as i32)) as u32),
        AluOp::Sltu => Some((a < b) as u32),
        _ => None,
    }
}
