//! RISC-V Base Integer Instruction Set (I), 32-bit.
//!
//! Only the encodings the execute-stage ALU dispatches on are defined here.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (OpImm, OpReg, Jal, Jalr, Auipc).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type and shift-immediate instructions.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
