//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! SED only records the flag; arithmetic stays binary.

use super::ExecResult;
use crate::cpu::{tick, Cycles};
use crate::status::Flag;
use crate::{MemoryBus, CPU};

fn write_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: Flag,
    value: bool,
    cycles: &mut Cycles,
) -> ExecResult {
    tick(cycles);
    cpu.flags.set(flag, value);
    Ok(None)
}

/// Executes the CLC (Clear Carry Flag) instruction. Opcode 0x18.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    write_flag(cpu, Flag::C, false, cycles)
}

/// Executes the SEC (Set Carry Flag) instruction. Opcode 0x38.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    write_flag(cpu, Flag::C, true, cycles)
}

/// Executes the CLI (Clear Interrupt Disable) instruction. Opcode 0x58.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    write_flag(cpu, Flag::I, false, cycles)
}

/// Executes the SEI (Set Interrupt Disable) instruction. Opcode 0x78.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    write_flag(cpu, Flag::I, true, cycles)
}

/// Executes the CLD (Clear Decimal Mode) instruction. Opcode 0xD8.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    write_flag(cpu, Flag::D, false, cycles)
}

/// Executes the SED (Set Decimal Mode) instruction. Opcode 0xF8.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    write_flag(cpu, Flag::D, true, cycles)
}

/// Executes the CLV (Clear Overflow Flag) instruction. Opcode 0xB8.
///
/// There is no SEV; only BIT sets V in this instruction set.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    write_flag(cpu, Flag::V, false, cycles)
}
