//! Pipeline stage implementations.
//!
//! Only the execute stage is modelled; fetch, decode, memory and writeback
//! are the surrounding simulator's concern.

/// Execute stage: operand bypass and ALU dispatch.
pub mod execute;
