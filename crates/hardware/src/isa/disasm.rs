//! Mnemonic lookup for ALU-dispatched instructions.
//!
//! Names the instruction an `(opcode, funct3, funct7)` triple selects, for
//! debug tracing, CLI output and test diagnostics. Triples that the ALU
//! dispatcher does not recognise are reported as `"unknown"`.
//!
//! # Usage
//!
//! ```
//! use rv32ex_core::isa::disasm::mnemonic;
//! use rv32ex_core::isa::instruction::InstructionFields;
//!
//! let f = InstructionFields::from_word(0x00A0_0513); // addi a0, zero, 10
//! assert_eq!(mnemonic(&f), "addi");
//! ```

use crate::isa::instruction::InstructionFields;
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};

/// Mnemonic reported for triples with no ALU table entry.
pub const UNKNOWN: &str = "unknown";

/// Returns the mnemonic of the instruction selected by `fields`.
pub const fn mnemonic(fields: &InstructionFields) -> &'static str {
    let f3 = fields.funct3;
    let f7 = fields.funct7;
    match fields.opcode {
        i_op::OP_IMM => mnemonic_op_imm(f3, f7),
        i_op::OP_REG => mnemonic_op_reg(f3, f7),
        i_op::OP_JAL => "jal",
        i_op::OP_JALR if f3 == i_f3::JALR => "jalr",
        i_op::OP_AUIPC => "auipc",
        _ => UNKNOWN,
    }
}

/// OP_IMM (I-type immediate arithmetic).
const fn mnemonic_op_imm(f3: u32, f7: u32) -> &'static str {
    match (f3, f7) {
        (i_f3::ADD_SUB, _) => "addi",
        (i_f3::SLT, _) => "slti",
        (i_f3::SLTU, _) => "sltiu",
        (i_f3::XOR, _) => "xori",
        (i_f3::OR, _) => "ori",
        (i_f3::AND, _) => "andi",
        (i_f3::SLL, i_f7::DEFAULT) => "slli",
        (i_f3::SRL_SRA, i_f7::DEFAULT) => "srli",
        (i_f3::SRL_SRA, i_f7::SRA) => "srai",
        _ => UNKNOWN,
    }
}

/// OP_REG (R-type register-register).
const fn mnemonic_op_reg(f3: u32, f7: u32) -> &'static str {
    match (f3, f7) {
        (i_f3::ADD_SUB, i_f7::DEFAULT) => "add",
        (i_f3::ADD_SUB, i_f7::SUB) => "sub",
        (i_f3::SLL, i_f7::DEFAULT) => "sll",
        (i_f3::SLT, i_f7::DEFAULT) => "slt",
        (i_f3::SLTU, i_f7::DEFAULT) => "sltu",
        (i_f3::XOR, i_f7::DEFAULT) => "xor",
        (i_f3::SRL_SRA, i_f7::DEFAULT) => "srl",
        (i_f3::SRL_SRA, i_f7::SRA) => "sra",
        (i_f3::OR, i_f7::DEFAULT) => "or",
        (i_f3::AND, i_f7::DEFAULT) => "and",
        _ => UNKNOWN,
    }
}
