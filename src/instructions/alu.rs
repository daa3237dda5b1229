//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - AND, ORA, EOR: bitwise combine with the accumulator
//! - BIT: Bit Test
//! - CMP, CPX, CPY: Compare register with memory
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//!
//! Decimal mode is not honored: ADC and SBC are always binary.

use super::ExecResult;
use crate::cpu::Cycles;
use crate::opcodes::OpcodeMetadata;
use crate::status::Flag;
use crate::{MemoryBus, CPU};

/// Executes the AND (Logical AND) instruction.
///
/// A = A & M. Z and N from the result (applied by the engine).
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    cpu.a &= value;
    Ok(None)
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    cpu.a |= value;
    Ok(None)
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    cpu.a ^= value;
    Ok(None)
}

/// Executes the BIT (Bit Test) instruction.
///
/// The accumulator is not modified.
///
/// # Flag Behavior
///
/// - Z: Set if (A & M) == 0
/// - V: Bit 6 of M
/// - N: Bit 7 of M
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.resolve_value(metadata.addressing_mode, cycles)?;

    cpu.flags.set(Flag::Z, (cpu.a & value) == 0);
    cpu.flags.set(Flag::V, value & 0x40 != 0);
    cpu.flags.set(Flag::N, value & 0x80 != 0);

    Ok(None)
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let register = cpu.a;
    compare(cpu, metadata, register, cycles)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let register = cpu.x;
    compare(cpu, metadata, register, cycles)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let register = cpu.y;
    compare(cpu, metadata, register, cycles)
}

/// Computes register - M without storing it.
///
/// - C: register >= M (unsigned)
/// - Z: register == M
/// - N: bit 7 of the 8-bit difference
fn compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    register: u8,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    let difference = register.wrapping_sub(value);

    cpu.flags.set(Flag::C, register >= value);
    cpu.flags.set(Flag::Z, register == value);
    cpu.flags.set(Flag::N, difference & 0x80 != 0);

    Ok(None)
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C, truncated to 8 bits. The 9-bit sum is returned so the
/// engine's flag list can set Z, N and carry-out.
///
/// The carry rule only ever sets C: clear it with CLC first for a plain add.
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    Ok(Some(add_with_carry(cpu, value)))
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A + !M + C, i.e. A - M - (1 - C). Same flag handling as ADC.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    let value = cpu.resolve_value(metadata.addressing_mode, cycles)?;
    Ok(Some(add_with_carry(cpu, !value)))
}

fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u16 {
    let carry_in = cpu.flags.get(Flag::C) as u16;
    let sum = cpu.a as u16 + value as u16 + carry_in;
    cpu.a = sum as u8;
    sum
}
