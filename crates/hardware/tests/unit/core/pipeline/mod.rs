//! Execute-stage pipeline tests.

/// Operand multiplexers and selector encodings.
pub mod bypass;


/// Randomised stage invariants.
pub mod properties;
