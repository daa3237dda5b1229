//! Fuzz target for budgeted CPU execution.
//!
//! Builds an arbitrary register file and memory image, then runs the core
//! with a bounded budget. Unsupported opcodes are expected; panics are not.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{Cycles, FlagRegister, FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at PC (a short program)
    program: [u8; 32],
    /// Zero page contents, including indirect pointers
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(input.cpu_state.pc, &input.memory.program);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_flags(FlagRegister::from_byte(input.cpu_state.status));

    let start: Cycles = input.budget as Cycles;
    let mut budget = start;

    // Unsupported opcodes are fine; we only look for panics
    let result = cpu.exec(&mut budget);

    // No instruction costs more than 7 cycles, so the overshoot is bounded
    if result.is_ok() {
        assert!(budget <= 0 && budget > -7);
    }
    assert_eq!(cpu.cycles(), (start - budget) as u64);
});
