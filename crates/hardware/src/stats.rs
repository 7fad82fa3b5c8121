//! Execute-stage evaluation statistics.
//!
//! This module tracks metrics over a run of evaluations. It provides:
//! 1. **Operation mix:** Counts by dispatched [`AluOp`], including undefined decodes.
//! 2. **Operand sources:** How often each bypass path fed operand A and operand B.
//! 3. **Forwarding rate:** The share of operand reads satisfied by a bypass path.
//!
//! The stage never owns an [`ExecStats`]; callers record each evaluation
//! themselves, so the stage stays stateless.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::pipeline::signals::{AluOp, BypassSelect1, BypassSelect2};
use crate::core::pipeline::stages::execute::{AluResult, ExecuteInputs};

/// Evaluation statistics collected by a caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecStats {
    /// Total evaluations recorded.
    pub evaluations: u64,
    /// Evaluations whose fields matched no ALU operation.
    pub undefined: u64,
    /// Evaluations per dispatched operation.
    pub op_mix: BTreeMap<AluOp, u64>,
    /// Operand A reads per selector, indexed by raw encoding.
    pub operand_a_sources: [u64; BypassSelect1::ALL.len()],
    /// Operand B reads per selector, indexed by raw encoding.
    pub operand_b_sources: [u64; BypassSelect2::ALL.len()],
}

impl ExecStats {
    /// Creates an empty statistics block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one evaluation.
    pub fn record(&mut self, inputs: &ExecuteInputs, op: AluOp, result: AluResult) {
        self.evaluations += 1;
        if result.is_undefined() {
            self.undefined += 1;
        }
        *self.op_mix.entry(op).or_insert(0) += 1;
        self.operand_a_sources[usize::from(u8::from(inputs.bypass1))] += 1;
        self.operand_b_sources[usize::from(u8::from(inputs.bypass2))] += 1;
    }

    /// Returns how many evaluations dispatched to `op`.
    pub fn count(&self, op: AluOp) -> u64 {
        self.op_mix.get(&op).copied().unwrap_or(0)
    }

    /// Number of operand reads (A and B) served by a bypass path.
    pub fn forwarded_reads(&self) -> u64 {
        let a: u64 = BypassSelect1::ALL
            .iter()
            .filter(|s| s.is_forwarded())
            .map(|&s| self.operand_a_sources[usize::from(u8::from(s))])
            .sum();
        let b: u64 = BypassSelect2::ALL
            .iter()
            .filter(|s| s.is_forwarded())
            .map(|&s| self.operand_b_sources[usize::from(u8::from(s))])
            .sum();
        a + b
    }

    /// Fraction of operand reads served by a bypass path, or `0.0` when empty.
    pub fn forwarding_rate(&self) -> f64 {
        if self.evaluations == 0 {
            return 0.0;
        }
        self.forwarded_reads() as f64 / (2 * self.evaluations) as f64
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for ExecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.evaluations.max(1) as f64;
        writeln!(f, "==========================================================")?;
        writeln!(f, "EXECUTE STAGE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "evaluations              {}", self.evaluations)?;
        writeln!(f, "undefined                {}", self.undefined)?;
        writeln!(f, "forwarding_rate          {:.4}", self.forwarding_rate())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "OPERATION MIX")?;
        for (op, n) in &self.op_mix {
            writeln!(
                f,
                "  op.{:<20} {} ({:.2}%)",
                op.name(),
                n,
                (*n as f64 / total) * 100.0
            )?;
        }
        writeln!(f, "OPERAND SOURCES")?;
        for sel in BypassSelect1::ALL {
            writeln!(
                f,
                "  a.{:<21} {}",
                format!("{sel:?}"),
                self.operand_a_sources[usize::from(u8::from(sel))]
            )?;
        }
        for sel in BypassSelect2::ALL {
            writeln!(
                f,
                "  b.{:<21} {}",
                format!("{sel:?}"),
                self.operand_b_sources[usize::from(u8::from(sel))]
            )?;
        }
        write!(f, "==========================================================")
    }
}
