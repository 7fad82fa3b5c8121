//! Execute-stage control signals and operation types.
//!
//! This module defines the signals that steer the execute stage. It performs:
//! 1. **Operation Classification:** Names the ALU operations the dispatcher can select.
//! 2. **Operand Selection:** Defines the bypass sources for both ALU inputs.
//! 3. **Raw Encoding:** Converts selectors to and from the bit patterns the hazard unit drives.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::error::{BypassPort, ExecuteError};

/// ALU operation types for RV32I integer instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,

    /// No table entry matched the instruction fields.
    Undefined,
}

impl AluOp {
    /// Every operation, in table order, including [`AluOp::Undefined`].
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
        Self::Undefined,
    ];

    /// Returns the operation's short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Undefined => "undefined",
        }
    }

    /// Returns `true` unless this is [`AluOp::Undefined`].
    #[inline]
    pub const fn is_defined(self) -> bool {
        !matches!(self, Self::Undefined)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source for ALU operand A (2-bit selector).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BypassSelect1 {
    /// Use the `rs1` register file value.
    #[default]
    Reg1,

    /// Use the value forwarded from the execute stage.
    ForwardEx,

    /// Use the program counter.
    Pc,

    /// Use the value forwarded from the memory stage.
    ForwardMem,
}

impl BypassSelect1 {
    /// Every selector value, in encoding order.
    pub const ALL: [Self; 4] = [Self::Reg1, Self::ForwardEx, Self::Pc, Self::ForwardMem];

    /// Returns `true` when the operand comes from a bypass path.
    #[inline]
    pub const fn is_forwarded(self) -> bool {
        matches!(self, Self::ForwardEx | Self::ForwardMem)
    }
}

impl TryFrom<u8> for BypassSelect1 {
    type Error = ExecuteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b00 => Ok(Self::Reg1),
            0b01 => Ok(Self::ForwardEx),
            0b10 => Ok(Self::Pc),
            0b11 => Ok(Self::ForwardMem),
            _ => Err(ExecuteError::SelectorOutOfRange {
                port: BypassPort::OperandA,
                value,
            }),
        }
    }
}

impl From<BypassSelect1> for u8 {
    fn from(sel: BypassSelect1) -> Self {
        match sel {
            BypassSelect1::Reg1 => 0b00,
            BypassSelect1::ForwardEx => 0b01,
            BypassSelect1::Pc => 0b10,
            BypassSelect1::ForwardMem => 0b11,
        }
    }
}

/// Source for ALU operand B (3-bit selector).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BypassSelect2 {
    /// Use the `rs2` register file value.
    #[default]
    Reg2,

    /// Use the value forwarded from the execute stage.
    ForwardEx,

    /// Use the decoded immediate.
    Imm,

    /// Use the literal 4 (link address for JAL/JALR).
    Four,

    /// Use the value forwarded from the memory stage.
    ForwardMem,
}

impl BypassSelect2 {
    /// Every selector value, in encoding order.
    pub const ALL: [Self; 5] = [
        Self::Reg2,
        Self::ForwardEx,
        Self::Imm,
        Self::Four,
        Self::ForwardMem,
    ];

    /// Returns `true` when the operand comes from a bypass path.
    #[inline]
    pub const fn is_forwarded(self) -> bool {
        matches!(self, Self::ForwardEx | Self::ForwardMem)
    }
}

impl TryFrom<u8> for BypassSelect2 {
    type Error = ExecuteError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b000 => Ok(Self::Reg2),
            0b001 => Ok(Self::ForwardEx),
            0b010 => Ok(Self::Imm),
            0b011 => Ok(Self::Four),
            0b100 => Ok(Self::ForwardMem),
            _ => Err(ExecuteError::SelectorOutOfRange {
                port: BypassPort::OperandB,
                value,
            }),
        }
    }
}

impl From<BypassSelect2> for u8 {
    fn from(sel: BypassSelect2) -> Self {
        match sel {
            BypassSelect2::Reg2 => 0b000,
            BypassSelect2::ForwardEx => 0b001,
            BypassSelect2::Imm => 0b010,
            BypassSelect2::Four => 0b011,
            BypassSelect2::ForwardMem => 0b100,
        }
    }
}
