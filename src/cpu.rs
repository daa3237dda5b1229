//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state,
//! the bus primitives every instruction is built from, and the
//! fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: packed `FlagRegister` (N, V, U, B, D, I, Z, C)
//! - **Cycle tally**: total cycles consumed, for diagnostics only
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction, charging its cycles to the budget
//! - `exec()`: Execute while the budget is positive
//!
//! The budget is threaded by `&mut` through every primitive that touches the
//! bus, so each cycle is charged by exactly one identifiable step.

use log::{debug, error, trace};

use crate::instructions;
use crate::opcodes::{self, Target};
use crate::status::{apply_all, Flag, FlagRegister};
use crate::{ExecutionError, MemoryBus};

/// Signed cycle budget. May go negative when the last instruction overruns it.
pub type Cycles = i64;

/// Address the CPU starts executing at after reset.
///
/// The core does not read a vector from memory: PC is set to this address.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const STACK_TOP: u8 = 0xFF;

/// Charges one internal (non-bus) cycle.
pub(crate) fn tick(cycles: &mut Cycles) {
    *cycles -= 1;
}

/// Snapshot of the register file.
///
/// Two snapshots compare equal when every register and flag matches, which
/// makes determinism checks one `assert_eq!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub status: u8,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The CPU
/// owns its memory exclusively; use `memory_mut()` to load a program.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x1000, &[0xA2, 0x05, 0xE8]); // LDX #$05; INX
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_pc(0x1000);
///
/// let mut budget = 4;
/// cpu.exec(&mut budget).unwrap();
///
/// assert_eq!(cpu.x(), 0x06);
/// assert_eq!(cpu.pc(), 0x1003);
/// assert_eq!(budget, 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (STACK_BASE + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) flags: FlagRegister,

    /// Total CPU cycles consumed since construction or reset
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU in the reset state around the given memory.
    ///
    /// - PC = `RESET_VECTOR` (0xFFFC)
    /// - SP = `STACK_TOP` (0xFF)
    /// - A, X, Y = 0
    /// - All flags cleared
    ///
    /// Unlike `reset()`, the memory contents are left as they are so a program
    /// loaded beforehand survives.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: RESET_VECTOR,
            sp: STACK_TOP,
            flags: FlagRegister::new(),
            cycles: 0,
            memory,
        }
    }

    /// Returns the CPU to the reset state and resets memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_a(0x42);
    /// cpu.set_pc(0x1234);
    /// cpu.memory_mut().write(0x0200, 0x99);
    ///
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.a(), 0x00);
    /// assert_eq!(cpu.pc(), 0xFFFC);
    /// assert_eq!(cpu.sp(), 0xFF);
    /// assert_eq!(cpu.memory().read(0x0200), 0x00);
    /// ```
    pub fn reset(&mut self) {
        self.pc = RESET_VECTOR;
        self.sp = STACK_TOP;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.flags.reset();
        self.cycles = 0;
        self.memory.reset();
        debug!("reset: PC={:04X} SP={:02X}", self.pc, self.sp);
    }

    /// Runs the fetch-decode-execute loop while `cycles` is positive.
    ///
    /// The budget is only checked between instructions: an instruction that
    /// starts with budget left always completes, possibly driving the budget
    /// negative. On return the budget holds whatever was left.
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnsupportedOpcode` aborts the run immediately. State
    /// committed by earlier instructions is kept; the failing fetch has
    /// already advanced PC and charged its cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, ExecutionError};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0xFFFC, &[0xEA, 0x02]); // NOP, then an unsupported byte
    ///
    /// let mut cpu = CPU::new(memory);
    /// let mut budget = 100;
    ///
    /// assert_eq!(cpu.exec(&mut budget), Err(ExecutionError::UnsupportedOpcode(0x02)));
    /// assert_eq!(budget, 97);
    /// ```
    pub fn exec(&mut self, cycles: &mut Cycles) -> Result<(), ExecutionError> {
        debug!("exec: enter with budget {}", *cycles);

        while *cycles > 0 {
            self.step(cycles)?;
        }

        debug!("exec: leave with budget {}", *cycles);
        Ok(())
    }

    /// Executes exactly one instruction, charging its cycles to `cycles`.
    ///
    /// Ignores the sign of the budget; `exec` is the budget-aware loop.
    pub fn step(&mut self, cycles: &mut Cycles) -> Result<(), ExecutionError> {
        let start = *cycles;
        let opcode_addr = self.pc;
        let opcode = self.fetch_byte(cycles);

        let metadata = match opcodes::lookup(opcode) {
            Ok(metadata) => metadata,
            Err(e) => {
                self.cycles += (start - *cycles) as u64;
                error!("{} at {:04X}", e, opcode_addr);
                return Err(e);
            }
        };

        let wide_result = instructions::execute(self, metadata, cycles)?;

        let value = match metadata.target {
            Target::Accumulator => Some(self.a),
            Target::X => Some(self.x),
            Target::Y => Some(self.y),
            Target::Memory | Target::None => None,
        };
        if let Some(value) = value {
            let result = wide_result.unwrap_or(value as u16);
            apply_all(metadata.flag_updates, &mut self.flags, result);
        }

        self.cycles += (start - *cycles) as u64;

        trace!(
            "{:04X} {:<3} budget={:<6} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} PC:{:04X} P:{}",
            opcode_addr,
            metadata.mnemonic,
            *cycles,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.pc,
            self.flags
        );

        Ok(())
    }

    // ========== Bus Primitives ==========

    /// Reads the byte at PC and advances PC. One cycle.
    pub(crate) fn fetch_byte(&mut self, cycles: &mut Cycles) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        tick(cycles);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two. Two cycles.
    pub(crate) fn fetch_word(&mut self, cycles: &mut Cycles) -> u16 {
        let lo = self.fetch_byte(cycles);
        let hi = self.fetch_byte(cycles);
        u16::from_le_bytes([lo, hi])
    }

    /// Reads a byte from memory. One cycle.
    pub(crate) fn read_byte(&self, addr: u16, cycles: &mut Cycles) -> u8 {
        tick(cycles);
        self.memory.read(addr)
    }

    /// Reads a little-endian word; the high byte comes from `addr + 1` (wrapping at 0xFFFF).
    pub(crate) fn read_word(&self, addr: u16, cycles: &mut Cycles) -> u16 {
        let lo = self.read_byte(addr, cycles);
        let hi = self.read_byte(addr.wrapping_add(1), cycles);
        u16::from_le_bytes([lo, hi])
    }

    /// Reads a little-endian pointer from zero page; the high byte wraps to 0x00.
    pub(crate) fn read_zero_page_word(&self, ptr: u8, cycles: &mut Cycles) -> u16 {
        let lo = self.read_byte(ptr as u16, cycles);
        let hi = self.read_byte(ptr.wrapping_add(1) as u16, cycles);
        u16::from_le_bytes([lo, hi])
    }

    /// Writes a byte to memory. One cycle.
    pub(crate) fn write_byte(&mut self, addr: u16, value: u8, cycles: &mut Cycles) {
        self.memory.write(addr, value);
        tick(cycles);
    }

    /// Writes to STACK_BASE + SP, then decrements SP (wrapping). One cycle.
    pub(crate) fn push_byte(&mut self, value: u8, cycles: &mut Cycles) {
        self.write_byte(STACK_BASE | self.sp as u16, value, cycles);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads STACK_BASE + SP. One cycle.
    pub(crate) fn pull_byte(&mut self, cycles: &mut Cycles) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_byte(STACK_BASE | self.sp as u16, cycles)
    }

    /// Pushes high byte then low byte, leaving the word little-endian at SP+1.
    pub(crate) fn push_word(&mut self, value: u16, cycles: &mut Cycles) {
        let [lo, hi] = value.to_le_bytes();
        self.push_byte(hi, cycles);
        self.push_byte(lo, cycles);
    }

    /// Pulls low byte then high byte.
    pub(crate) fn pull_word(&mut self, cycles: &mut Cycles) -> u16 {
        let lo = self.pull_byte(cycles);
        let hi = self.pull_byte(cycles);
        u16::from_le_bytes([lo, hi])
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    pub fn flags(&self) -> &FlagRegister {
        &self.flags
    }

    /// Returns the status register for modification.
    pub fn flags_mut(&mut self) -> &mut FlagRegister {
        &mut self.flags
    }

    /// Returns a single status flag.
    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    /// Returns the status register as a packed byte (bit *i* = flag at offset *i*).
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Returns the total number of cycles consumed since construction or reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns a snapshot of every register.
    pub fn registers(&self) -> Registers {
        Registers {
            pc: self.pc,
            sp: self.sp,
            a: self.a,
            x: self.x,
            y: self.y,
            status: self.flags.to_byte(),
        }
    }

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus for modification (e.g. loading a program).
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_flags(&mut self, flags: FlagRegister) {
        self.flags = flags;
    }

    /// Sets or clears a single status flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.flags.set(flag, value);
    }
}
