//! Instruction field extraction and the ALU selector triple.
//!
//! Provides bit extraction for the fields the execute stage dispatches on
//! and the [`InstructionFields`] triple handed over by the decoder.

use serde::{Deserialize, Serialize};

use crate::common::constants::{FUNCT3_WIDTH, FUNCT7_WIDTH, OPCODE_WIDTH};
use crate::common::error::ExecuteError;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting ALU selector fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes standard and alternate encodings (e.g., ADD vs SUB).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// The `(opcode, funct3, funct7)` triple that selects an ALU operation.
///
/// Supplied by the instruction decoder once per pipeline slot. Fields are
/// public so the decoder can hand them over directly; values wider than
/// their field never match a table entry and therefore dispatch to
/// [`AluOp::Undefined`](crate::core::pipeline::signals::AluOp::Undefined).
/// Use [`InstructionFields::new`] to reject such values up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFields")]
pub struct InstructionFields {
    /// Major opcode (7 bits).
    pub opcode: u32,
    /// Minor opcode (3 bits).
    pub funct3: u32,
    /// Extended function code (7 bits).
    pub funct7: u32,
}

/// Unvalidated wire form of [`InstructionFields`].
#[derive(Deserialize)]
struct RawFields {
    opcode: u32,
    #[serde(default)]
    funct3: u32,
    #[serde(default)]
    funct7: u32,
}

impl TryFrom<RawFields> for InstructionFields {
    type Error = ExecuteError;

    fn try_from(raw: RawFields) -> Result<Self, Self::Error> {
        Self::new(raw.opcode, raw.funct3, raw.funct7)
    }
}

/// Checks that `value` fits in `width` bits.
fn check_width(field: &'static str, value: u32, width: u32) -> Result<u32, ExecuteError> {
    if value >> width == 0 {
        Ok(value)
    } else {
        Err(ExecuteError::FieldOutOfRange {
            field,
            value,
            width,
        })
    }
}

impl InstructionFields {
    /// Builds a field triple, rejecting values wider than their field.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::FieldOutOfRange`] naming the first field
    /// (in opcode, funct3, funct7 order) that does not fit.
    pub fn new(opcode: u32, funct3: u32, funct7: u32) -> Result<Self, ExecuteError> {
        Ok(Self {
            opcode: check_width("opcode", opcode, OPCODE_WIDTH)?,
            funct3: check_width("funct3", funct3, FUNCT3_WIDTH)?,
            funct7: check_width("funct7", funct7, FUNCT7_WIDTH)?,
        })
    }

    /// Extracts the triple from a raw 32-bit instruction word.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32ex_core::isa::instruction::InstructionFields;
    ///
    /// // sub a0, a1, a2
    /// let f = InstructionFields::from_word(0x40C5_8533);
    /// assert_eq!((f.opcode, f.funct3, f.funct7), (0b0110011, 0b000, 0b0100000));
    /// ```
    #[inline]
    pub fn from_word(inst: u32) -> Self {
        Self {
            opcode: inst.opcode(),
            funct3: inst.funct3(),
            funct7: inst.funct7(),
        }
    }
}
