//! Execute-stage pipeline plumbing.
//!
//! This module contains the pieces that sit between the ID/EX latch and the
//! ALU. It provides:
//! 1. **Signals:** ALU operation and bypass selector types.
//! 2. **Bypass:** The operand A and operand B multiplexers.
//! 3. **Stages:** The execute stage evaluation boundary.

/// Operand bypass multiplexers.
pub mod bypass;

/// Control signals and selector encodings.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;
