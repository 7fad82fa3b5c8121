//! Execution units and functional components.
//!
//! This module contains the integer execution unit driven by the execute
//! stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
