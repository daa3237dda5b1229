//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! A push writes to 0x0100 | SP and then decrements SP; a pull increments SP and
//! then reads 0x0100 | SP. SP wraps modulo 256 in both directions.
//!
//! Timing: pushes are 3 cycles (fetch, internal, write); pulls are 4 cycles
//! (fetch, internal, SP increment, read).

use super::ExecResult;
use crate::cpu::{tick, Cycles};
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Opcode: 0x48, Cycles: 3, Flags affected: None
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    let value = cpu.a;
    cpu.push_byte(value, cycles);
    Ok(None)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The status byte is pushed exactly as `FlagRegister::to_byte` packs it;
/// no bits are forced.
///
/// Opcode: 0x08, Cycles: 3, Flags affected: None
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    let status = cpu.flags.to_byte();
    cpu.push_byte(status, cycles);
    Ok(None)
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Opcode: 0x68, Cycles: 4, Flags affected: Z, N (applied by the engine)
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    tick(cycles);
    cpu.a = cpu.pull_byte(cycles);
    Ok(None)
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag is restored verbatim from the pulled byte.
///
/// Opcode: 0x28, Cycles: 4
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    tick(cycles);
    let status = cpu.pull_byte(cycles);
    cpu.flags.load_byte(status);
    Ok(None)
}
