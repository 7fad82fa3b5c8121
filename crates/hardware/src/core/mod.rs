//! Core execute-stage implementation.
//!
//! This module contains the execute-stage datapath: the pipeline-side
//! plumbing (control signals, bypass multiplexers, the stage boundary) and
//! the ALU execution unit it drives.

/// Execute-stage pipeline plumbing (signals, bypass, stages).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::pipeline::stages::execute::{AluResult, ExecuteInputs, ExecuteStage};
