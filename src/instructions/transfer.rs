//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer is 2 cycles: the opcode fetch plus one internal cycle.
//! All but TXS set Z and N from the destination (applied by the engine).

use super::ExecResult;
use crate::cpu::{tick, Cycles};
use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// Opcode: 0xAA, Cycles: 2
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.x = cpu.a;
    Ok(None)
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
///
/// Opcode: 0xA8, Cycles: 2
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.y = cpu.a;
    Ok(None)
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
///
/// Opcode: 0x8A, Cycles: 2
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.a = cpu.x;
    Ok(None)
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
///
/// Opcode: 0x98, Cycles: 2
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.a = cpu.y;
    Ok(None)
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
///
/// Opcode: 0xBA, Cycles: 2
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.x = cpu.sp;
    Ok(None)
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Opcode: 0x9A, Cycles: 2
///
/// Flags affected: None. TXS is the only transfer that leaves Z and N alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) -> ExecResult {
    tick(cycles);
    cpu.sp = cpu.x;
    Ok(None)
}
