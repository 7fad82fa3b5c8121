//! ALU Logic & Comparison Operation Tests.
//!
//! Bitwise AND, OR, XOR and the set-less-than comparisons. The comparisons
//! always produce exactly 0 or 1.

use rv32ex_core::core::pipeline::signals::AluOp;
use rv32ex_core::core::units::alu::Alu;
use rv32ex_core::core::units::alu::logic;

const ZERO: u32 = 0;
const ONE: u32 = 1;
const NEG1: u32 = u32::MAX;
const I32_MAX: u32 = i32::MAX as u32;
const I32_MIN: u32 = i32::MIN as u32;
const ALTERNATING_A: u32 = 0xAAAA_AAAA;
const ALTERNATING_5: u32 = 0x5555_5555;

fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b).unwrap()
}

// ─── AND ─────────────────────────────────────────────────────────────────────

#[test]
fn and_identity() {
    assert_eq!(alu(AluOp::And, 0xDEAD_BEEF, NEG1), 0xDEAD_BEEF);
}

#[test]
fn and_annihilation() {
    assert_eq!(alu(AluOp::And, 0xDEAD_BEEF, ZERO), 0);
}

#[test]
fn and_disjoint_patterns() {
    assert_eq!(alu(AluOp::And, ALTERNATING_A, ALTERNATING_5), 0);
}

#[test]
fn and_mask_low_byte() {
    assert_eq!(alu(AluOp::And, 0x1234_5678, 0xFF), 0x78);
}

// ─── OR ──────────────────────────────────────────────────────────────────────

#[test]
fn or_identity() {
    assert_eq!(alu(AluOp::Or, 0xDEAD_BEEF, ZERO), 0xDEAD_BEEF);
}

#[test]
fn or_saturation() {
    assert_eq!(alu(AluOp::Or, 0x1234_5678, NEG1), NEG1);
}

#[test]
fn or_complementary_patterns() {
    assert_eq!(alu(AluOp::Or, ALTERNATING_A, ALTERNATING_5), NEG1);
}

// ─── XOR ─────────────────────────────────────────────────────────────────────

#[test]
fn xor_self_is_zero() {
    assert_eq!(alu(AluOp::Xor, 0xDEAD_BEEF, 0xDEAD_BEEF), 0);
}

#[test]
fn xor_with_ones_inverts() {
    assert_eq!(alu(AluOp::Xor, 0x0F0F_0F0F, NEG1), 0xF0F0_F0F0);
}

#[test]
fn xor_complementary_patterns() {
    assert_eq!(alu(AluOp::Xor, ALTERNATING_A, ALTERNATING_5), NEG1);
}

// ─── SLT (signed) ────────────────────────────────────────────────────────────

#[test]
fn slt_negative_less_than_positive() {
    assert_eq!(alu(AluOp::Slt, -5_i32 as u32, 10), 1);
    assert_eq!(alu(AluOp::Slt, 10, -5_i32 as u32), 0);
}

#[test]
fn slt_equal_is_zero() {
    assert_eq!(alu(AluOp::Slt, 7, 7), 0);
    assert_eq!(alu(AluOp::Slt, NEG1, NEG1), 0);
}

#[test]
fn slt_min_less_than_max() {
    assert_eq!(alu(AluOp::Slt, I32_MIN, I32_MAX), 1);
    assert_eq!(alu(AluOp::Slt, I32_MAX, I32_MIN), 0);
}

#[test]
fn slt_minus_one_less_than_zero() {
    assert_eq!(alu(AluOp::Slt, NEG1, ZERO), 1);
}

// ─── SLTU (unsigned) ─────────────────────────────────────────────────────────

#[test]
fn sltu_all_ones_is_largest() {
    assert_eq!(alu(AluOp::Sltu, NEG1, ZERO), 0);
    assert_eq!(alu(AluOp::Sltu, ZERO, NEG1), 1);
}

#[test]
fn sltu_min_above_max() {
    // 0x8000_0000 is larger than 0x7FFF_FFFF when unsigned
    assert_eq!(alu(AluOp::Sltu, I32_MIN, I32_MAX), 0);
    assert_eq!(alu(AluOp::Sltu, I32_MAX, I32_MIN), 1);
}

#[test]
fn sltu_zero_less_than_one() {
    assert_eq!(alu(AluOp::Sltu, ZERO, ONE), 1);
}

#[test]
fn sltu_equal_is_zero() {
    assert_eq!(alu(AluOp::Sltu, 42, 42), 0);
}

// ─── Unit boundary ───────────────────────────────────────────────────────────

#[test]
fn logic_unit_rejects_other_ops() {
    for op in AluOp::ALL {
        let handled = logic::execute(op, 1, 2).is_some();
        let expected = matches!(
            op,
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Slt | AluOp::Sltu
        );
        assert_eq!(handled, expected, "{op}");
    }
}
