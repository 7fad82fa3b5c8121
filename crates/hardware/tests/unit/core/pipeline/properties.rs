//! Randomised Execute-Stage Invariants.
//!
//! Checks the numeric semantics against Rust's native integer operations
//! and the structural guarantees of the stage (operand selection does not
//! look at the operation, lanes do not interact).

use proptest::prelude::*;
use rv32ex_core::core::pipeline::bypass::{OperandSources, select_operand_a, select_operand_b};
use rv32ex_core::core::pipeline::signals::{AluOp, BypassSelect1, BypassSelect2};
use rv32ex_core::core::pipeline::stages::execute::{AluResult, ExecuteInputs, ExecuteStage};
use rv32ex_core::core::units::alu::Alu;
use rv32ex_core::isa::instruction::InstructionFields;

fn fields() -> impl Strategy<Value = InstructionFields> {
    (0u32..128, 0u32..8, 0u32..128).prop_map(|(opcode, funct3, funct7)| InstructionFields {
        opcode,
        funct3,
        funct7,
    })
}

fn sources() -> impl Strategy<Value = OperandSources> {
    any::<[u32; 8]>().prop_map(|v| OperandSources {
        program_counter: v[0],
        rs1: v[1],
        rs2: v[2],
        immediate: v[3],
        forward_ex1: v[4],
        forward_ex2: v[5],
        forward_mem1: v[6],
        forward_mem2: v[7],
    })
}

fn inputs() -> impl Strategy<Value = ExecuteInputs> {
    (
        fields(),
        prop::sample::select(BypassSelect1::ALL.to_vec()),
        prop::sample::select(BypassSelect2::ALL.to_vec()),
        sources(),
    )
        .prop_map(|(fields, bypass1, bypass2, operands)| ExecuteInputs {
            fields,
            bypass1,
            bypass2,
            operands,
        })
}

fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b).unwrap()
}

proptest! {
    #[test]
    fn add_and_sub_wrap(a: u32, b: u32) {
        prop_assert_eq!(alu(AluOp::Add, a, b), a.wrapping_add(b));
        prop_assert_eq!(alu(AluOp::Sub, a, b), a.wrapping_sub(b));
        prop_assert_eq!(alu(AluOp::Sub, alu(AluOp::Add, a, b), b), a);
    }

    #[test]
    fn comparisons_match_native(a: u32, b: u32) {
        prop_assert_eq!(alu(AluOp::Slt, a, b), u32::from((a as i32) < (b as i32)));
        prop_assert_eq!(alu(AluOp::Sltu, a, b), u32::from(a < b));
    }

    #[test]
    fn shifts_use_low_five_bits(a: u32, b: u32) {
        let shamt = b & 0x1F;
        prop_assert_eq!(alu(AluOp::Sll, a, b), a << shamt);
        prop_assert_eq!(alu(AluOp::Srl, a, b), a >> shamt);
        prop_assert_eq!(alu(AluOp::Sra, a, b), ((a as i32) >> shamt) as u32);
        prop_assert_eq!(alu(AluOp::Sll, a, b), alu(AluOp::Sll, a, shamt));
    }

    #[test]
    fn evaluation_is_referentially_transparent(inp in inputs()) {
        prop_assert_eq!(ExecuteStage::evaluate(&inp), ExecuteStage::evaluate(&inp));
    }

    #[test]
    fn operand_selection_ignores_instruction_fields(inp in inputs(), other in fields()) {
        let a = ExecuteStage::evaluate_detailed(&inp);
        let b = ExecuteStage::evaluate_detailed(&ExecuteInputs { fields: other, ..inp });
        prop_assert_eq!(a.operand_a, b.operand_a);
        prop_assert_eq!(a.operand_b, b.operand_b);
        prop_assert_eq!(a.operand_a, select_operand_a(inp.bypass1, &inp.operands));
        prop_assert_eq!(a.operand_b, select_operand_b(inp.bypass2, &inp.operands));
    }

    #[test]
    fn undefined_exactly_when_dispatch_fails(inp in inputs()) {
        let ev = ExecuteStage::evaluate_detailed(&inp);
        prop_assert_eq!(ev.result == AluResult::Undefined, ev.op == AluOp::Undefined);
        prop_assert_eq!(ExecuteStage::try_evaluate(&inp).is_err(), ev.result.is_undefined());
    }

    #[test]
    fn bundle_matches_per_lane_evaluation(lanes in prop::collection::vec(inputs(), 0..8)) {
        let bundle = ExecuteStage::evaluate_bundle(&lanes);
        prop_assert_eq!(bundle.len(), lanes.len());
        for (lane, result) in lanes.iter().zip(&bundle) {
            prop_assert_eq!(*result, ExecuteStage::evaluate(lane));
        }
    }

    #[test]
    fn raw_selectors_accept_exactly_their_domain(v: u8) {
        prop_assert_eq!(BypassSelect1::try_from(v).is_ok(), v < 4);
        prop_assert_eq!(BypassSelect2::try_from(v).is_ok(), v < 5);
    }
}
