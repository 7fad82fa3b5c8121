//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It handles RV32I arithmetic, logical operations, comparisons and
//! shifts on 32-bit operands.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra
//! - [`control`]:    Decoding `(opcode, funct3, funct7)` into an [`AluOp`]

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Operation dispatch from instruction fields.
pub mod control;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// A stateless unit: the output depends on nothing but the arguments of
/// the current call.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (also used as shift amount)
    ///
    /// # Returns
    ///
    /// The 32-bit result, or `None` for [`AluOp::Undefined`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32ex_core::core::units::alu::Alu;
    /// use rv32ex_core::core::pipeline::signals::AluOp;
    ///
    /// // Addition wraps modulo 2^32
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), Some(0));
    ///
    /// // Logical shift left uses only the low 5 bits of b
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 36), Some(0x10));
    ///
    /// // Signed comparison
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), Some(1));
    ///
    /// assert_eq!(Alu::execute(AluOp::Undefined, 1, 2), None);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> Option<u32> {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),

            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }

            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),

            AluOp::Undefined => None,
        }
    }
}
