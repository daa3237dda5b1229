//! # Addressing Modes
//!
//! This module defines the 11 addressing modes used by the implemented
//! instruction set and the resolver that turns operand bytes into an
//! effective address or value.
//!
//! Every resolver step charges the cycle budget through the CPU bus
//! primitives (one cycle per byte touched) plus the mode-specific extras:
//!
//! | Mode                  | Extra cycles                                   |
//! |-----------------------|------------------------------------------------|
//! | ZeroPageX / ZeroPageY | +1 (index add)                                 |
//! | AbsoluteX / AbsoluteY | Read: +1 on page cross. Write: always +1       |
//! | IndirectX             | +1 (index add)                                 |
//! | IndirectY             | Read: +1 on page cross. Write: always +1       |

use crate::cpu::{tick, Cycles};
use crate::{ExecutionError, MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: TAX, PHA, RTS, NOP
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X with X=$FF reads $007F, not $017F
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($0120) with $0120=$FC, $0121=$BA jumps to $BAFC
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Whether an access reads or writes its effective address.
///
/// Only the indexed absolute and indirect-indexed modes care: a read pays the
/// extra cycle only when the index add crosses a page, a write always pays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Read,
    Write,
}

/// Returns true when `base` and `effective` lie in different 256-byte pages.
pub fn page_crossed(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the effective address of the current instruction's operand.
    ///
    /// Consumes operand bytes at PC (advancing it) and charges cycles for every
    /// byte fetched or dereferenced plus the mode's extra cycles. For
    /// `Immediate` the "address" is the operand byte's own location; for
    /// `Indirect` it is the dereferenced jump target.
    pub(crate) fn resolve_address(
        &mut self,
        mode: AddressingMode,
        direction: Direction,
        cycles: &mut Cycles,
    ) -> Result<u16, ExecutionError> {
        let addr = match mode {
            AddressingMode::Implicit => {
                return Err(ExecutionError::InvalidAddressingMode(mode));
            }
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                addr
            }
            AddressingMode::ZeroPage => self.fetch_byte(cycles) as u16,
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte(cycles);
                tick(cycles);
                base.wrapping_add(self.x) as u16
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte(cycles);
                tick(cycles);
                base.wrapping_add(self.y) as u16
            }
            AddressingMode::Absolute => self.fetch_word(cycles),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(cycles);
                self.index(base, self.x, direction, cycles)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(cycles);
                self.index(base, self.y, direction, cycles)
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word(cycles);
                self.read_indirect_target(ptr, cycles)
            }
            AddressingMode::IndirectX => {
                let operand = self.fetch_byte(cycles);
                tick(cycles);
                let ptr = operand.wrapping_add(self.x);
                self.read_zero_page_word(ptr, cycles)
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte(cycles);
                let base = self.read_zero_page_word(ptr, cycles);
                self.index(base, self.y, direction, cycles)
            }
        };

        Ok(addr)
    }

    /// Resolves the operand and reads the byte it designates.
    ///
    /// Used by read-only instructions (loads, logical ops, compares). Costs
    /// exactly one cycle on top of `resolve_address` in the Read direction.
    pub(crate) fn resolve_value(
        &mut self,
        mode: AddressingMode,
        cycles: &mut Cycles,
    ) -> Result<u8, ExecutionError> {
        let addr = self.resolve_address(mode, Direction::Read, cycles)?;
        Ok(self.read_byte(addr, cycles))
    }

    fn index(&self, base: u16, index: u8, direction: Direction, cycles: &mut Cycles) -> u16 {
        let effective = base.wrapping_add(index as u16);
        match direction {
            Direction::Read if page_crossed(base, effective) => tick(cycles),
            Direction::Read => {}
            Direction::Write => tick(cycles),
        }
        effective
    }

    #[cfg(not(feature = "indirect-jmp-bug"))]
    fn read_indirect_target(&self, ptr: u16, cycles: &mut Cycles) -> u16 {
        self.read_word(ptr, cycles)
    }

    /// NMOS behavior: the high byte never carries out of the pointer's page,
    /// so JMP ($10FF) reads $10FF and $1000.
    #[cfg(feature = "indirect-jmp-bug")]
    fn read_indirect_target(&self, ptr: u16, cycles: &mut Cycles) -> u16 {
        let lo = self.read_byte(ptr, cycles);
        let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
        let hi = self.read_byte(hi_addr, cycles);
        u16::from_le_bytes([lo, hi])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_at(pc: u16, bytes: &[u8]) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load(pc, bytes);
        let mut cpu = CPU::new(memory);
        cpu.set_pc(pc);
        cpu
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Immediate.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Absolute.operand_bytes(), 2);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_page_crossed() {
        assert!(!page_crossed(0x2000, 0x20FF));
        assert!(page_crossed(0x20FF, 0x2100));
        assert!(page_crossed(0xFFFF, 0x0000));
    }

    #[test]
    fn test_immediate_points_at_operand() {
        let mut cpu = cpu_at(0x0400, &[0x42]);
        let mut cycles = 10;

        let addr = cpu
            .resolve_address(AddressingMode::Immediate, Direction::Read, &mut cycles)
            .unwrap();

        assert_eq!(addr, 0x0400);
        assert_eq!(cpu.pc(), 0x0401);
        assert_eq!(cycles, 10); // the read that follows pays for it
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = cpu_at(0x0400, &[0x80]);
        cpu.set_x(0xFF);
        let mut cycles = 10;

        let addr = cpu
            .resolve_address(AddressingMode::ZeroPageX, Direction::Read, &mut cycles)
            .unwrap();

        assert_eq!(addr, 0x007F);
        assert_eq!(cycles, 8);
    }

    #[test]
    fn test_zero_page_y_wraps() {
        let mut cpu = cpu_at(0x0400, &[0xF0]);
        cpu.set_y(0x20);
        let mut cycles = 10;

        let addr = cpu
            .resolve_address(AddressingMode::ZeroPageY, Direction::Write, &mut cycles)
            .unwrap();

        assert_eq!(addr, 0x0010);
    }

    #[test]
    fn test_absolute_x_read_charges_only_on_cross() {
        let mut cpu = cpu_at(0x0400, &[0x10, 0x20, 0xF0, 0x20]);
        cpu.set_x(0x20);

        let mut cycles = 10;
        let same_page = cpu
            .resolve_address(AddressingMode::AbsoluteX, Direction::Read, &mut cycles)
            .unwrap();
        assert_eq!(same_page, 0x2030);
        assert_eq!(cycles, 8);

        let mut cycles = 10;
        let crossed = cpu
            .resolve_address(AddressingMode::AbsoluteX, Direction::Read, &mut cycles)
            .unwrap();
        assert_eq!(crossed, 0x2110);
        assert_eq!(cycles, 7);
    }

    #[test]
    fn test_absolute_y_write_always_charges() {
        let mut cpu = cpu_at(0x0400, &[0x10, 0x20]);
        cpu.set_y(0x01);
        let mut cycles = 10;

        let addr = cpu
            .resolve_address(AddressingMode::AbsoluteY, Direction::Write, &mut cycles)
            .unwrap();

        assert_eq!(addr, 0x2011);
        assert_eq!(cycles, 7);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = cpu_at(0x0400, &[0xFE]);
        cpu.set_x(0x01);
        cpu.memory_mut().write(0x00FF, 0x34);
        cpu.memory_mut().write(0x0000, 0x12);
        let mut cycles = 10;

        let addr = cpu
            .resolve_address(AddressingMode::IndirectX, Direction::Read, &mut cycles)
            .unwrap();

        assert_eq!(addr, 0x1234);
        assert_eq!(cycles, 6); // operand + index + two pointer bytes
    }

    #[test]
    fn test_indirect_y_adds_after_dereference() {
        let mut cpu = cpu_at(0x0400, &[0x40]);
        cpu.set_y(0x10);
        cpu.memory_mut().write(0x0040, 0xF8);
        cpu.memory_mut().write(0x0041, 0x30);
        let mut cycles = 10;

        let addr = cpu
            .resolve_address(AddressingMode::IndirectY, Direction::Read, &mut cycles)
            .unwrap();

        assert_eq!(addr, 0x3108);
        assert_eq!(cycles, 6); // operand + two pointer bytes + page cross
    }

    #[test]
    fn test_indirect_dereferences_pointer() {
        let mut cpu = cpu_at(0x0400, &[0x20, 0x01]);
        cpu.memory_mut().write(0x0120, 0xFC);
        cpu.memory_mut().write(0x0121, 0xBA);
        let mut cycles = 10;

        let addr = cpu
            .resolve_address(AddressingMode::Indirect, Direction::Read, &mut cycles)
            .unwrap();

        assert_eq!(addr, 0xBAFC);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn test_implicit_has_no_address() {
        let mut cpu = cpu_at(0x0400, &[]);
        let mut cycles = 10;

        let result = cpu.resolve_address(AddressingMode::Implicit, Direction::Read, &mut cycles);

        assert_eq!(
            result,
            Err(ExecutionError::InvalidAddressingMode(AddressingMode::Implicit))
        );
        assert_eq!(cycles, 10);
    }

    #[test]
    fn test_resolve_value_reads_operand() {
        let mut cpu = cpu_at(0x0400, &[0x10]);
        cpu.memory_mut().write(0x0010, 0x99);
        let mut cycles = 10;

        let value = cpu
            .resolve_value(AddressingMode::ZeroPage, &mut cycles)
            .unwrap();

        assert_eq!(value, 0x99);
        assert_eq!(cycles, 8);
    }
}
