//! Built-in sample program

use bytecode_system::{Instruction, Program};

/// The demonstration program run by `stack-vm`
///
/// Computes `((69 + 420) - 42) * 2` and then divides by zero, so a run
/// under the default policy ends with a division-by-zero fault.
pub fn sample_program() -> Program {
    Program::from(vec![
        Instruction::Push(69),
        Instruction::Push(420),
        Instruction::Add,
        Instruction::Push(42),
        Instruction::Subtract,
        Instruction::Push(2),
        Instruction::Multiply,
        Instruction::Push(0),
        Instruction::Divide,
    ])
}
