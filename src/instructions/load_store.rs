//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads resolve their operand in the Read direction, so indexed modes pay the
//! page-crossing cycle only when the index add leaves the page. Stores resolve
//! in the Write direction and always pay it.

use super::ExecResult;
use crate::addressing::Direction;
use crate::cpu::Cycles;
use crate::opcodes::OpcodeMetadata;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// Z and N from the loaded value (applied by the engine).
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    cpu.a = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    Ok(None)
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    cpu.x = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    Ok(None)
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    cpu.y = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    Ok(None)
}

/// Executes the STA (Store Accumulator) instruction.
///
/// # Flag Behavior
///
/// - No flags affected
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.a;
    store(cpu, metadata, value, cycles)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.x;
    store(cpu, metadata, value, cycles)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.y;
    store(cpu, metadata, value, cycles)
}

fn store<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    value: u8,
    cycles: &mut Cycles,
) -> ExecResult {
    let addr = cpu.resolve_address(metadata.addressing_mode, Direction::Write, cycles)?;
    cpu.write_byte(addr, value, cycles);
    Ok(None)
}
