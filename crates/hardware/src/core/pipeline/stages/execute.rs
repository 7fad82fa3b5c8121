//! Execute (EX) Stage.
//!
//! This module implements the combinational execute stage. It performs the following:
//! 1. **Operand Resolution:** Routes the bypass selectors through both operand multiplexers.
//! 2. **Operation Dispatch:** Decodes `(opcode, funct3, funct7)` into an ALU operation.
//! 3. **Arithmetic Execution:** Applies the operation to the selected operands.
//!
//! Nothing is latched between calls. Evaluating the same [`ExecuteInputs`]
//! twice always yields the same [`AluResult`].

use serde::{Deserialize, Serialize};

use crate::common::error::ExecuteError;
use crate::core::pipeline::bypass::{OperandSources, select_operand_a, select_operand_b};
use crate::core::pipeline::signals::{AluOp, BypassSelect1, BypassSelect2};
use crate::core::units::alu::{Alu, control};
use crate::isa::instruction::InstructionFields;

/// Everything the execute stage consumes for one pipeline slot.
///
/// Deserialises from a flat JSON object with the keys `opcode`, `funct3`,
/// `funct7`, `bypass1`, `bypass2`, `program_counter`, `rs1`, `rs2`,
/// `immediate`, `forward_ex1`, `forward_ex2`, `forward_mem1` and
/// `forward_mem2`. Selectors use their raw encodings. Any other key is
/// rejected, so a misspelled operand never reads as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInputs")]
pub struct ExecuteInputs {
    /// Operation selector fields from the decoder.
    #[serde(flatten)]
    pub fields: InstructionFields,
    /// Operand A bypass selector from the hazard unit.
    pub bypass1: BypassSelect1,
    /// Operand B bypass selector from the hazard unit.
    pub bypass2: BypassSelect2,
    /// Candidate operand values.
    #[serde(flatten)]
    pub operands: OperandSources,
}

/// Unvalidated wire form of [`ExecuteInputs`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInputs {
    opcode: u32,
    #[serde(default)]
    funct3: u32,
    #[serde(default)]
    funct7: u32,
    #[serde(default)]
    bypass1: u8,
    #[serde(default)]
    bypass2: u8,
    #[serde(default)]
    program_counter: u32,
    #[serde(default)]
    rs1: u32,
    #[serde(default)]
    rs2: u32,
    #[serde(default)]
    immediate: u32,
    #[serde(default)]
    forward_ex1: u32,
    #[serde(default)]
    forward_ex2: u32,
    #[serde(default)]
    forward_mem1: u32,
    #[serde(default)]
    forward_mem2: u32,
}

impl TryFrom<RawInputs> for ExecuteInputs {
    type Error = ExecuteError;

    fn try_from(raw: RawInputs) -> Result<Self, Self::Error> {
        let operands = OperandSources {
            program_counter: raw.program_counter,
            rs1: raw.rs1,
            rs2: raw.rs2,
            immediate: raw.immediate,
            forward_ex1: raw.forward_ex1,
            forward_ex2: raw.forward_ex2,
            forward_mem1: raw.forward_mem1,
            forward_mem2: raw.forward_mem2,
        };
        Self::from_raw(
            raw.opcode,
            raw.funct3,
            raw.funct7,
            raw.bypass1,
            raw.bypass2,
            operands,
        )
    }
}

impl ExecuteInputs {
    /// Builds inputs from the raw bit patterns on the stage's input bus.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::FieldOutOfRange`] when an instruction field is
    /// wider than its encoding, or [`ExecuteError::SelectorOutOfRange`] when a
    /// selector holds an unassigned pattern.
    pub fn from_raw(
        opcode: u32,
        funct3: u32,
        funct7: u32,
        bypass1: u8,
        bypass2: u8,
        operands: OperandSources,
    ) -> Result<Self, ExecuteError> {
        Ok(Self {
            fields: InstructionFields::new(opcode, funct3, funct7)?,
            bypass1: BypassSelect1::try_from(bypass1)?,
            bypass2: BypassSelect2::try_from(bypass2)?,
            operands,
        })
    }
}

/// Output of the execute stage.
///
/// An instruction whose fields match no ALU table entry has no defined
/// result; it is reported as [`AluResult::Undefined`] rather than as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluResult {
    /// The computed 32-bit result.
    Value(u32),
    /// No operation matched the instruction fields.
    Undefined,
}

impl AluResult {
    /// Returns the computed value, if any.
    #[inline]
    pub const fn value(self) -> Option<u32> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined => None,
        }
    }

    /// Returns `true` for [`AluResult::Undefined`].
    #[inline]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Converts the result into a `Result`, attributing an undefined output
    /// to the instruction fields that produced it.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::UnrecognizedEncoding`] for [`AluResult::Undefined`].
    pub const fn into_result(self, fields: &InstructionFields) -> Result<u32, ExecuteError> {
        match self {
            Self::Value(v) => Ok(v),
            Self::Undefined => Err(ExecuteError::UnrecognizedEncoding {
                opcode: fields.opcode,
                funct3: fields.funct3,
                funct7: fields.funct7,
            }),
        }
    }
}

impl From<Option<u32>> for AluResult {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Undefined, Self::Value)
    }
}

/// Intermediate signals of one evaluation, for tracing and statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Dispatched operation.
    pub op: AluOp,
    /// Value chosen by the operand A multiplexer.
    pub operand_a: u32,
    /// Value chosen by the operand B multiplexer.
    pub operand_b: u32,
    /// Stage output.
    pub result: AluResult,
}

/// The execute stage: bypass multiplexers followed by the ALU.
#[derive(Debug)]
pub struct ExecuteStage;

impl ExecuteStage {
    /// Evaluates one pipeline slot and returns its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32ex_core::core::pipeline::bypass::OperandSources;
    /// use rv32ex_core::core::pipeline::signals::{BypassSelect1, BypassSelect2};
    /// use rv32ex_core::core::pipeline::stages::execute::{AluResult, ExecuteInputs, ExecuteStage};
    /// use rv32ex_core::isa::instruction::InstructionFields;
    ///
    /// // jal: link address = pc + 4
    /// let inputs = ExecuteInputs {
    ///     fields: InstructionFields { opcode: 0b1101111, funct3: 0, funct7: 0 },
    ///     bypass1: BypassSelect1::Pc,
    ///     bypass2: BypassSelect2::Four,
    ///     operands: OperandSources { program_counter: 0x1000, ..Default::default() },
    /// };
    /// assert_eq!(ExecuteStage::evaluate(&inputs), AluResult::Value(0x1004));
    /// ```
    #[inline]
    pub fn evaluate(inputs: &ExecuteInputs) -> AluResult {
        Self::evaluate_detailed(inputs).result
    }

    /// Evaluates one pipeline slot and returns the intermediate signals too.
    pub fn evaluate_detailed(inputs: &ExecuteInputs) -> Evaluation {
        let operand_a = select_operand_a(inputs.bypass1, &inputs.operands);
        let operand_b = select_operand_b(inputs.bypass2, &inputs.operands);
        let op = control::decode(&inputs.fields);
        let result = AluResult::from(Alu::execute(op, operand_a, operand_b));

        if !op.is_defined() {
            tracing::debug!(
                opcode = inputs.fields.opcode,
                funct3 = inputs.fields.funct3,
                funct7 = inputs.fields.funct7,
                "no ALU operation for instruction fields"
            );
        }
        tracing::trace!(
            opcode = inputs.fields.opcode,
            funct3 = inputs.fields.funct3,
            funct7 = inputs.fields.funct7,
            bypass1 = ?inputs.bypass1,
            bypass2 = ?inputs.bypass2,
            a = operand_a,
            b = operand_b,
            %op,
            result = ?result,
            "execute"
        );

        Evaluation {
            op,
            operand_a,
            operand_b,
            result,
        }
    }

    /// Evaluates one pipeline slot, surfacing an undefined decode as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::UnrecognizedEncoding`] when no ALU operation
    /// matches the instruction fields.
    pub fn try_evaluate(inputs: &ExecuteInputs) -> Result<u32, ExecuteError> {
        Self::evaluate(inputs).into_result(&inputs.fields)
    }

    /// Evaluates every lane of a wide-issue slot independently.
    ///
    /// Lane `i` of the output equals `evaluate(&lanes[i])`.
    pub fn evaluate_bundle(lanes: &[ExecuteInputs]) -> Vec<AluResult> {
        lanes.iter().map(Self::evaluate).collect()
    }
}
