//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - JMP: Jump to address (absolute and indirect)
//! - NOP: No Operation
//!
//! None of these affect flags.

use super::ExecResult;
use crate::addressing::Direction;
use crate::cpu::{tick, Cycles};
use crate::opcodes::OpcodeMetadata;
use crate::{MemoryBus, CPU};

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// JSR pushes the address of its own last byte (PC - 1 after the operand
/// fetch), high byte first, then loads PC with the operand.
///
/// Cycle timing: 6 cycles (fetch, 2 operand bytes, internal, 2 pushes)
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `metadata` - Table entry for this JSR (Absolute)
/// * `cycles` - Cycle budget
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let target = cpu.resolve_address(metadata.addressing_mode, Direction::Read, cycles)?;
    tick(cycles);

    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address, cycles);

    cpu.pc = target;
    Ok(None)
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address JSR pushed and resumes at the byte after it.
///
/// Cycle timing: 6 cycles (fetch, 3 internal, 2 pulls)
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    tick(cycles);
    tick(cycles);

    let return_address = cpu.pull_word(cycles);
    cpu.pc = return_address.wrapping_add(1);
    Ok(None)
}

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234, 3 cycles
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235, 5 cycles
///
/// With the `indirect-jmp-bug` feature, a pointer ending in 0xFF takes its
/// high byte from the start of the same page.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    cpu.pc = cpu.resolve_address(metadata.addressing_mode, Direction::Read, cycles)?;
    Ok(None)
}

/// Executes the NOP (No Operation) instruction. 2 cycles.
pub(crate) fn execute_nop(cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    Ok(None)
}
