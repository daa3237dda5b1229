//! # 6502 CPU Execution Core
//!
//! A cycle-budgeted execution core for the 8-bit 6502 processor: fetch, decode
//! through a static instruction table, resolve operands with one of eleven
//! addressing modes, execute, update status flags, and charge bus cycles with
//! the hardware's timing rules (including page-crossing penalties).
//!
//! ## Quick Start
//!
//! ```rust
//! use cycle6502::{CPU, FlatMemory, Flag};
//!
//! let mut memory = FlatMemory::new();
//! // The CPU starts executing at the reset vector address itself (0xFFFC)
//! memory.load(0xFFFC, &[0xA9, 0x84]); // LDA #$84
//!
//! let mut cpu = CPU::new(memory);
//! let mut budget = 2;
//! cpu.exec(&mut budget).unwrap();
//!
//! assert_eq!(cpu.a(), 0x84);
//! assert!(cpu.flag(Flag::N));
//! assert!(!cpu.flag(Flag::Z));
//! assert_eq!(budget, 0);
//! ```
//!
//! ## Cycle Budget
//!
//! `CPU::exec` takes the budget by mutable reference. Every bus access (opcode
//! fetch, operand fetch, read, write) costs exactly one cycle, and addressing
//! modes and instructions charge their internal cycles explicitly. The loop
//! stops once the budget is zero or less, checked only between instructions,
//! so the remainder may be negative when the last instruction overran it.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, bus primitives and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - Instruction table and decode
//! - `addressing` - Addressing modes and the operand resolver
//! - `status` - Status register and flag-update functions
//!
//! ## Features
//!
//! - `wasm` - JavaScript bindings (`Emulator6502`)
//! - `indirect-jmp-bug` - JMP ($xxFF) wraps within the pointer's page like NMOS silicon

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Instruction family implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{page_crossed, AddressingMode, Direction};
pub use cpu::{Cycles, Registers, CPU, RESET_VECTOR, STACK_BASE, STACK_TOP};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{lookup, Mnemonic, OpcodeMetadata, Target, INSTRUCTION_SET};
pub use status::{Flag, FlagRegister, FlagUpdate};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte has no entry in the instruction table.
    ///
    /// Fatal for the current run: nothing of the offending instruction has
    /// executed beyond the opcode fetch itself.
    #[error("unsupported opcode 0x{0:02X}")]
    UnsupportedOpcode(u8),

    /// An instruction family was handed an addressing mode it cannot use.
    ///
    /// The shipped instruction table never produces this.
    #[error("addressing mode {0:?} has no operand to resolve")]
    InvalidAddressingMode(AddressingMode),
}
