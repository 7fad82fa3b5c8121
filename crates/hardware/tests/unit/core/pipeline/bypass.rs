//! Operand Bypass Tests.
//!
//! Every selector value routes exactly one candidate through unchanged.
//! Marker values make a wrong multiplexer choice visible.

use rv32ex_core::common::error::{BypassPort, ExecuteError};
use rv32ex_core::core::pipeline::bypass::{OperandSources, select_operand_a, select_operand_b};
use rv32ex_core::core::pipeline::signals::{BypassSelect1, BypassSelect2};

use crate::common::builder::slot::{
    FWD_EX1, FWD_EX2, FWD_MEM1, FWD_MEM2, IMM, PC, RS1, RS2, marked_sources,
};

#[test]
fn operand_a_routes_each_source() {
    let src = marked_sources();
    assert_eq!(select_operand_a(BypassSelect1::Reg1, &src), RS1);
    assert_eq!(select_operand_a(BypassSelect1::ForwardEx, &src), FWD_EX1);
    assert_eq!(select_operand_a(BypassSelect1::Pc, &src), PC);
    assert_eq!(select_operand_a(BypassSelect1::ForwardMem, &src), FWD_MEM1);
}

#[test]
fn operand_b_routes_each_source() {
    let src = marked_sources();
    assert_eq!(select_operand_b(BypassSelect2::Reg2, &src), RS2);
    assert_eq!(select_operand_b(BypassSelect2::ForwardEx, &src), FWD_EX2);
    assert_eq!(select_operand_b(BypassSelect2::Imm, &src), IMM);
    assert_eq!(select_operand_b(BypassSelect2::Four, &src), 4);
    assert_eq!(select_operand_b(BypassSelect2::ForwardMem, &src), FWD_MEM2);
}

#[test]
fn operand_a_never_reads_operand_b_paths() {
    let src = marked_sources();
    for sel in BypassSelect1::ALL {
        let v = select_operand_a(sel, &src);
        assert!(![RS2, FWD_EX2, FWD_MEM2, IMM].contains(&v), "{sel:?}");
    }
}

#[test]
fn four_ignores_every_source() {
    let src = OperandSources {
        immediate: 0xDEAD_BEEF,
        rs2: 0xDEAD_BEEF,
        ..marked_sources()
    };
    assert_eq!(select_operand_b(BypassSelect2::Four, &src), 4);
    assert_eq!(
        select_operand_b(BypassSelect2::Four, &OperandSources::default()),
        4
    );
}

#[test]
fn selectors_default_to_register_file() {
    assert_eq!(BypassSelect1::default(), BypassSelect1::Reg1);
    assert_eq!(BypassSelect2::default(), BypassSelect2::Reg2);
}

#[test]
fn raw_encodings_follow_table_order() {
    for (i, sel) in BypassSelect1::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(u8::from(sel)), i);
        assert_eq!(BypassSelect1::try_from(u8::from(sel)), Ok(sel));
    }
    for (i, sel) in BypassSelect2::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(u8::from(sel)), i);
        assert_eq!(BypassSelect2::try_from(u8::from(sel)), Ok(sel));
    }
}

#[test]
fn raw_selector_out_of_range() {
    for value in 4u8..=u8::MAX {
        assert_eq!(
            BypassSelect1::try_from(value),
            Err(ExecuteError::SelectorOutOfRange {
                port: BypassPort::OperandA,
                value
            })
        );
    }
    for value in 5u8..=u8::MAX {
        assert_eq!(
            BypassSelect2::try_from(value),
            Err(ExecuteError::SelectorOutOfRange {
                port: BypassPort::OperandB,
                value
            })
        );
    }
}

#[test]
fn forwarded_selectors() {
    let a: Vec<_> = BypassSelect1::ALL
        .into_iter()
        .filter(|s| s.is_forwarded())
        .collect();
    assert_eq!(a, [BypassSelect1::ForwardEx, BypassSelect1::ForwardMem]);
    let b: Vec<_> = BypassSelect2::ALL
        .into_iter()
        .filter(|s| s.is_forwarded())
        .collect();
    assert_eq!(b, [BypassSelect2::ForwardEx, BypassSelect2::ForwardMem]);
}

#[test]
fn selectors_serialize_as_raw_encoding() {
    assert_eq!(serde_json::to_string(&BypassSelect1::Pc).unwrap(), "2");
    assert_eq!(serde_json::to_string(&BypassSelect2::ForwardMem).unwrap(), "4");
    assert_eq!(
        serde_json::from_str::<BypassSelect2>("3").unwrap(),
        BypassSelect2::Four
    );
    assert!(serde_json::from_str::<BypassSelect1>("4").is_err());
}
