//! ALU Control (operation dispatch).
//!
//! Maps the `(opcode, funct3, funct7)` triple onto an [`AluOp`]. The
//! decode is a nested match: the major opcode first, then `funct3`, and
//! `funct7` only for the rows that need it. Every other field is ignored,
//! so for instance JAL matches whatever its `funct3`/`funct7` bits hold.
//!
//! | opcode  | funct3 | funct7    | op                    |
//! |---------|--------|-----------|-----------------------|
//! | OP_IMM  | 000    | -         | Add                   |
//! | OP_IMM  | 010    | -         | Slt                   |
//! | OP_IMM  | 011    | -         | Sltu                  |
//! | OP_IMM  | 100    | -         | Xor                   |
//! | OP_IMM  | 110    | -         | Or                    |
//! | OP_IMM  | 111    | -         | And                   |
//! | OP_IMM  | 001    | 0000000   | Sll                   |
//! | OP_IMM  | 101    | 0000000   | Srl                   |
//! | OP_IMM  | 101    | 0100000   | Sra                   |
//! | OP_REG  | all    | 0000000   | Add..And              |
//! | OP_REG  | 000    | 0100000   | Sub                   |
//! | OP_REG  | 101    | 0100000   | Sra                   |
//! | OP_JAL  | -      | -         | Add                   |
//! | OP_JALR | 000    | -         | Add                   |
//! | OP_AUIPC| -      | -         | Add                   |
//!
//! Anything else is [`AluOp::Undefined`].

use crate::core::pipeline::signals::AluOp;
use crate::isa::instruction::InstructionFields;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Decodes the ALU operation for an instruction.
///
/// # Examples
///
/// ```
/// use rv32ex_core::core::pipeline::signals::AluOp;
/// use rv32ex_core::core::units::alu::control::decode;
/// use rv32ex_core::isa::instruction::InstructionFields;
///
/// let srai = InstructionFields { opcode: 0b0010011, funct3: 0b101, funct7: 0b0100000 };
/// assert_eq!(decode(&srai), AluOp::Sra);
///
/// let jal = InstructionFields { opcode: 0b1101111, funct3: 0b110, funct7: 0b1111111 };
/// assert_eq!(decode(&jal), AluOp::Add);
/// ```
pub const fn decode(fields: &InstructionFields) -> AluOp {
    match fields.opcode {
        opcodes::OP_IMM => decode_op_imm(fields.funct3, fields.funct7),
        opcodes::OP_REG => decode_op_reg(fields.funct3, fields.funct7),
        opcodes::OP_JAL | opcodes::OP_AUIPC => AluOp::Add,
        opcodes::OP_JALR => match fields.funct3 {
            funct3::JALR => AluOp::Add,
            _ => AluOp::Undefined,
        },
        _ => AluOp::Undefined,
    }
}

/// I-type arithmetic: `funct7` only matters for the shift-immediates.
const fn decode_op_imm(f3: u32, f7: u32) -> AluOp {
    match f3 {
        funct3::ADD_SUB => AluOp::Add,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::OR => AluOp::Or,
        funct3::AND => AluOp::And,
        funct3::SLL => match f7 {
            funct7::DEFAULT => AluOp::Sll,
            _ => AluOp::Undefined,
        },
        funct3::SRL_SRA => match f7 {
            funct7::DEFAULT => AluOp::Srl,
            funct7::SRA => AluOp::Sra,
            _ => AluOp::Undefined,
        },
        _ => AluOp::Undefined,
    }
}

/// R-type arithmetic: every row constrains `funct7`.
const fn decode_op_reg(f3: u32, f7: u32) -> AluOp {
    match f7 {
        funct7::DEFAULT => match f3 {
            funct3::ADD_SUB => AluOp::Add,
            funct3::SLL => AluOp::Sll,
            funct3::SLT => AluOp::Slt,
            funct3::SLTU => AluOp::Sltu,
            funct3::XOR => AluOp::Xor,
            funct3::SRL_SRA => AluOp::Srl,
            funct3::OR => AluOp::Or,
            funct3::AND => AluOp::And,
            _ => AluOp::Undefined,
        },
        funct7::SUB => match f3 {
            funct3::ADD_SUB => AluOp::Sub,
            funct3::SRL_SRA => AluOp::Sra,
            _ => AluOp::Undefined,
        },
        _ => AluOp::Undefined,
    }
}
