//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC: Increment Memory
//! - DEC: Decrement Memory
//! - INX, INY: Increment X / Y
//! - DEX, DEY: Decrement X / Y
//!
//! All wrap at 8 bits and set Z and N from the new value. Register forms take
//! one internal cycle; memory forms read, modify (one internal cycle), and
//! write back.

use super::ExecResult;
use crate::addressing::Direction;
use crate::cpu::{tick, Cycles};
use crate::opcodes::OpcodeMetadata;
use crate::status::apply_all;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
///
/// Cycles: 5 (zp), 6 (zp,X), 6 (abs), 7 (abs,X)
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    read_modify_write(cpu, metadata, cycles, |value| value.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Cycles: 5 (zp), 6 (zp,X), 6 (abs), 7 (abs,X)
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    read_modify_write(cpu, metadata, cycles, |value| value.wrapping_sub(1))
}

fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
    modify: impl FnOnce(u8) -> u8,
) -> ExecResult {
    let addr = cpu.resolve_address(metadata.addressing_mode, Direction::Write, cycles)?;
    let value = cpu.read_byte(addr, cycles);

    let result = modify(value);
    tick(cycles);

    cpu.write_byte(addr, result, cycles);
    apply_all(metadata.flag_updates, &mut cpu.flags, result as u16);

    Ok(None)
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.x = cpu.x.wrapping_add(1);
    Ok(None)
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.y = cpu.y.wrapping_add(1);
    Ok(None)
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.x = cpu.x.wrapping_sub(1);
    Ok(None)
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.y = cpu.y.wrapping_sub(1);
    Ok(None)
}
