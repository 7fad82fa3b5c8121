//! Operand Bypass Selection.
//!
//! This module implements the two operand multiplexers in front of the ALU.
//! It provides:
//! 1. **Operand A:** Chooses between `rs1`, the execute and memory bypass paths, and the PC.
//! 2. **Operand B:** Chooses between `rs2`, the execute and memory bypass paths, the
//!    immediate, and the link constant.
//!
//! Which path to take is decided by the hazard unit upstream; these functions
//! only honour the selector they are given and never transform the value.

use serde::{Deserialize, Serialize};

use crate::common::constants::LINK_OFFSET;
use crate::core::pipeline::signals::{BypassSelect1, BypassSelect2};

/// Candidate values presented to the operand multiplexers for one pipeline slot.
///
/// `rs1`/`rs2` are the architectural values read from the register file;
/// the `forward_*` fields carry results not yet written back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandSources {
    /// Program counter of the instruction in execute.
    #[serde(default)]
    pub program_counter: u32,
    /// Register file read port 1.
    #[serde(default)]
    pub rs1: u32,
    /// Register file read port 2.
    #[serde(default)]
    pub rs2: u32,
    /// Decoded, sign-extended immediate.
    #[serde(default)]
    pub immediate: u32,
    /// Operand A value bypassed from the execute stage.
    #[serde(default)]
    pub forward_ex1: u32,
    /// Operand B value bypassed from the execute stage.
    #[serde(default)]
    pub forward_ex2: u32,
    /// Operand A value bypassed from the memory stage.
    #[serde(default)]
    pub forward_mem1: u32,
    /// Operand B value bypassed from the memory stage.
    #[serde(default)]
    pub forward_mem2: u32,
}

/// Selects ALU operand A.
///
/// # Arguments
///
/// * `sel` - Selector driven by the hazard unit.
/// * `src` - Candidate values for this slot.
///
/// # Returns
///
/// The chosen source, unchanged.
#[inline]
pub const fn select_operand_a(sel: BypassSelect1, src: &OperandSources) -> u32 {
    match sel {
        BypassSelect1::Reg1 => src.rs1,
        BypassSelect1::ForwardEx => src.forward_ex1,
        BypassSelect1::Pc => src.program_counter,
        BypassSelect1::ForwardMem => src.forward_mem1,
    }
}

/// Selects ALU operand B.
///
/// [`BypassSelect2::Four`] yields [`LINK_OFFSET`] regardless of `src`.
#[inline]
pub const fn select_operand_b(sel: BypassSelect2, src: &OperandSources) -> u32 {
    match sel {
        BypassSelect2::Reg2 => src.rs2,
        BypassSelect2::ForwardEx => src.forward_ex2,
        BypassSelect2::Imm => src.immediate,
        BypassSelect2::Four => LINK_OFFSET,
        BypassSelect2::ForwardMem => src.forward_mem2,
    }
}
