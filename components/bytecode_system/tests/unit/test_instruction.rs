//! Tests for Instruction and RawInstruction

use bytecode_system::{Instruction, Opcode, RawInstruction};
use core_types::Exception;

#[test]
fn test_push_carries_operand() {
    let inst = Instruction::Push(420);
    assert_eq!(inst.opcode(), Opcode::Push);
    assert_eq!(inst.operand(), Some(420));
}

#[test]
fn test_binary_ops_have_no_operand() {
    for inst in [
        Instruction::Add,
        Instruction::Subtract,
        Instruction::Multiply,
        Instruction::Divide,
    ] {
        assert_eq!(inst.operand(), None);
        assert!(inst.opcode().is_binary_arithmetic());
    }
}

#[test]
fn test_to_raw() {
    let raw = Instruction::Push(-1).to_raw();
    assert_eq!(raw, RawInstruction::new(0, -1));

    let raw: RawInstruction = Instruction::Subtract.into();
    assert_eq!(raw.tag, Opcode::Subtract.tag());
    assert_eq!(raw.operand, 0);
}

#[test]
fn test_decode_known_tags() {
    assert_eq!(RawInstruction::new(0, 5).decode(), Ok(Instruction::Push(5)));
    assert_eq!(RawInstruction::new(1, 0).decode(), Ok(Instruction::Add));
    assert_eq!(RawInstruction::new(2, 0).decode(), Ok(Instruction::Multiply));
    assert_eq!(RawInstruction::new(3, 0).decode(), Ok(Instruction::Divide));
    assert_eq!(RawInstruction::new(4, 0).decode(), Ok(Instruction::Subtract));
}

#[test]
fn test_decode_unknown_tags() {
    for tag in 5..=u8::MAX {
        assert_eq!(
            RawInstruction::new(tag, 0).decode(),
            Err(Exception::IllegalInstruction),
            "tag {} should be illegal",
            tag
        );
    }
}

#[test]
fn test_instruction_display() {
    assert_eq!(Instruction::Push(69).to_string(), "PUSH 69");
    assert_eq!(Instruction::Add.to_string(), "PLUS");
    assert_eq!(Instruction::Subtract.to_string(), "MINUS");
}
