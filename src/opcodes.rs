//! # Instruction Table
//!
//! This module contains the instruction set table that serves as the single
//! source of truth for decode: every implemented opcode byte maps to its
//! mnemonic, addressing mode, base cycle cost, the ordered flag updates the
//! engine applies after execution, and the register those updates look at.
//!
//! Opcodes absent from the table are not executable; `lookup` reports them as
//! `ExecutionError::UnsupportedOpcode`. The implemented set is deliberately
//! partial: no branches, interrupts, shifts/rotates, decimal mode or illegal
//! opcodes.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::status::{FlagUpdate, NO_FLAGS, ZNC_FLAGS, ZN_FLAGS};
use crate::ExecutionError;

/// Instruction names.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    ADC,
    AND,
    BIT,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,
}

impl Mnemonic {
    /// Three-letter assembler name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::ADC => "ADC",
            Mnemonic::AND => "AND",
            Mnemonic::BIT => "BIT",
            Mnemonic::CLC => "CLC",
            Mnemonic::CLD => "CLD",
            Mnemonic::CLI => "CLI",
            Mnemonic::CLV => "CLV",
            Mnemonic::CMP => "CMP",
            Mnemonic::CPX => "CPX",
            Mnemonic::CPY => "CPY",
            Mnemonic::DEC => "DEC",
            Mnemonic::DEX => "DEX",
            Mnemonic::DEY => "DEY",
            Mnemonic::EOR => "EOR",
            Mnemonic::INC => "INC",
            Mnemonic::INX => "INX",
            Mnemonic::INY => "INY",
            Mnemonic::JMP => "JMP",
            Mnemonic::JSR => "JSR",
            Mnemonic::LDA => "LDA",
            Mnemonic::LDX => "LDX",
            Mnemonic::LDY => "LDY",
            Mnemonic::NOP => "NOP",
            Mnemonic::ORA => "ORA",
            Mnemonic::PHA => "PHA",
            Mnemonic::PHP => "PHP",
            Mnemonic::PLA => "PLA",
            Mnemonic::PLP => "PLP",
            Mnemonic::RTS => "RTS",
            Mnemonic::SBC => "SBC",
            Mnemonic::SEC => "SEC",
            Mnemonic::SED => "SED",
            Mnemonic::SEI => "SEI",
            Mnemonic::STA => "STA",
            Mnemonic::STX => "STX",
            Mnemonic::STY => "STY",
            Mnemonic::TAX => "TAX",
            Mnemonic::TAY => "TAY",
            Mnemonic::TSX => "TSX",
            Mnemonic::TXA => "TXA",
            Mnemonic::TXS => "TXS",
            Mnemonic::TYA => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The value an instruction's flag updates are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The accumulator after execution (loads, logical ops, TXA/TYA, PLA, ADC/SBC).
    Accumulator,
    /// X after execution (LDX, TAX, TSX, INX/DEX).
    X,
    /// Y after execution (LDY, TAY, INY/DEY).
    Y,
    /// The byte written back to memory; the instruction applies the updates itself.
    Memory,
    /// No deferred flag effect.
    None,
}

/// Metadata for a single implemented opcode.
///
/// # Examples
///
/// ```
/// use cycle6502::{lookup, AddressingMode, Mnemonic, Target};
///
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// assert_eq!(lda_imm.target, Target::Accumulator);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte.
    pub opcode: u8,

    /// Instruction name.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this opcode.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    pub base_cycles: u8,

    /// Flag updates applied after execution, in order.
    pub flag_updates: &'static [FlagUpdate],

    /// Value the flag updates look at.
    pub target: Target,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }
}

const fn op(
    opcode: u8,
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    flag_updates: &'static [FlagUpdate],
    target: Target,
) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        mnemonic,
        addressing_mode,
        base_cycles,
        flag_updates,
        target,
    }
}

use AddressingMode::*;
use Mnemonic::*;

/// Every implemented opcode, grouped by instruction family.
pub const INSTRUCTION_SET: &[OpcodeMetadata] = &[
    // Subroutines and jumps
    op(0x20, JSR, Absolute, 6, NO_FLAGS, Target::None),
    op(0x60, RTS, Implicit, 6, NO_FLAGS, Target::None),
    op(0x4C, JMP, Absolute, 3, NO_FLAGS, Target::None),
    op(0x6C, JMP, Indirect, 5, NO_FLAGS, Target::None),
    // LDA
    op(0xA9, LDA, Immediate, 2, ZN_FLAGS, Target::Accumulator),
    op(0xA5, LDA, ZeroPage, 3, ZN_FLAGS, Target::Accumulator),
    op(0xB5, LDA, ZeroPageX, 4, ZN_FLAGS, Target::Accumulator),
    op(0xAD, LDA, Absolute, 4, ZN_FLAGS, Target::Accumulator),
    op(0xBD, LDA, AbsoluteX, 4, ZN_FLAGS, Target::Accumulator),
    op(0xB9, LDA, AbsoluteY, 4, ZN_FLAGS, Target::Accumulator),
    op(0xA1, LDA, IndirectX, 6, ZN_FLAGS, Target::Accumulator),
    op(0xB1, LDA, IndirectY, 5, ZN_FLAGS, Target::Accumulator),
    // LDX
    op(0xA2, LDX, Immediate, 2, ZN_FLAGS, Target::X),
    op(0xA6, LDX, ZeroPage, 3, ZN_FLAGS, Target::X),
    op(0xB6, LDX, ZeroPageY, 4, ZN_FLAGS, Target::X),
    op(0xAE, LDX, Absolute, 4, ZN_FLAGS, Target::X),
    op(0xBE, LDX, AbsoluteY, 4, ZN_FLAGS, Target::X),
    // LDY
    op(0xA0, LDY, Immediate, 2, ZN_FLAGS, Target::Y),
    op(0xA4, LDY, ZeroPage, 3, ZN_FLAGS, Target::Y),
    op(0xB4, LDY, ZeroPageX, 4, ZN_FLAGS, Target::Y),
    op(0xAC, LDY, Absolute, 4, ZN_FLAGS, Target::Y),
    op(0xBC, LDY, AbsoluteX, 4, ZN_FLAGS, Target::Y),
    // STA
    op(0x85, STA, ZeroPage, 3, NO_FLAGS, Target::None),
    op(0x95, STA, ZeroPageX, 4, NO_FLAGS, Target::None),
    op(0x8D, STA, Absolute, 4, NO_FLAGS, Target::None),
    op(0x9D, STA, AbsoluteX, 5, NO_FLAGS, Target::None),
    op(0x99, STA, AbsoluteY, 5, NO_FLAGS, Target::None),
    op(0x81, STA, IndirectX, 6, NO_FLAGS, Target::None),
    op(0x91, STA, IndirectY, 6, NO_FLAGS, Target::None),
    // STX / STY
    op(0x86, STX, ZeroPage, 3, NO_FLAGS, Target::None),
    op(0x96, STX, ZeroPageY, 4, NO_FLAGS, Target::None),
    op(0x8E, STX, Absolute, 4, NO_FLAGS, Target::None),
    op(0x84, STY, ZeroPage, 3, NO_FLAGS, Target::None),
    op(0x94, STY, ZeroPageX, 4, NO_FLAGS, Target::None),
    op(0x8C, STY, Absolute, 4, NO_FLAGS, Target::None),
    // Register transfers
    op(0xAA, TAX, Implicit, 2, ZN_FLAGS, Target::X),
    op(0x8A, TXA, Implicit, 2, ZN_FLAGS, Target::Accumulator),
    op(0xA8, TAY, Implicit, 2, ZN_FLAGS, Target::Y),
    op(0x98, TYA, Implicit, 2, ZN_FLAGS, Target::Accumulator),
    op(0xBA, TSX, Implicit, 2, ZN_FLAGS, Target::X),
    op(0x9A, TXS, Implicit, 2, NO_FLAGS, Target::None),
    // Stack
    op(0x48, PHA, Implicit, 3, NO_FLAGS, Target::None),
    op(0x08, PHP, Implicit, 3, NO_FLAGS, Target::None),
    op(0x68, PLA, Implicit, 4, ZN_FLAGS, Target::Accumulator),
    op(0x28, PLP, Implicit, 4, NO_FLAGS, Target::None),
    // AND
    op(0x29, AND, Immediate, 2, ZN_FLAGS, Target::Accumulator),
    op(0x25, AND, ZeroPage, 3, ZN_FLAGS, Target::Accumulator),
    op(0x35, AND, ZeroPageX, 4, ZN_FLAGS, Target::Accumulator),
    op(0x2D, AND, Absolute, 4, ZN_FLAGS, Target::Accumulator),
    op(0x3D, AND, AbsoluteX, 4, ZN_FLAGS, Target::Accumulator),
    op(0x39, AND, AbsoluteY, 4, ZN_FLAGS, Target::Accumulator),
    op(0x21, AND, IndirectX, 6, ZN_FLAGS, Target::Accumulator),
    op(0x31, AND, IndirectY, 5, ZN_FLAGS, Target::Accumulator),
    // ORA
    op(0x09, ORA, Immediate, 2, ZN_FLAGS, Target::Accumulator),
    op(0x05, ORA, ZeroPage, 3, ZN_FLAGS, Target::Accumulator),
    op(0x15, ORA, ZeroPageX, 4, ZN_FLAGS, Target::Accumulator),
    op(0x0D, ORA, Absolute, 4, ZN_FLAGS, Target::Accumulator),
    op(0x1D, ORA, AbsoluteX, 4, ZN_FLAGS, Target::Accumulator),
    op(0x19, ORA, AbsoluteY, 4, ZN_FLAGS, Target::Accumulator),
    op(0x01, ORA, IndirectX, 6, ZN_FLAGS, Target::Accumulator),
    op(0x11, ORA, IndirectY, 5, ZN_FLAGS, Target::Accumulator),
    // EOR
    op(0x49, EOR, Immediate, 2, ZN_FLAGS, Target::Accumulator),
    op(0x45, EOR, ZeroPage, 3, ZN_FLAGS, Target::Accumulator),
    op(0x55, EOR, ZeroPageX, 4, ZN_FLAGS, Target::Accumulator),
    op(0x4D, EOR, Absolute, 4, ZN_FLAGS, Target::Accumulator),
    op(0x5D, EOR, AbsoluteX, 4, ZN_FLAGS, Target::Accumulator),
    op(0x59, EOR, AbsoluteY, 4, ZN_FLAGS, Target::Accumulator),
    op(0x41, EOR, IndirectX, 6, ZN_FLAGS, Target::Accumulator),
    op(0x51, EOR, IndirectY, 5, ZN_FLAGS, Target::Accumulator),
    // Register increment / decrement
    op(0xCA, DEX, Implicit, 2, ZN_FLAGS, Target::X),
    op(0x88, DEY, Implicit, 2, ZN_FLAGS, Target::Y),
    op(0xE8, INX, Implicit, 2, ZN_FLAGS, Target::X),
    op(0xC8, INY, Implicit, 2, ZN_FLAGS, Target::Y),
    // Memory increment / decrement
    op(0xE6, INC, ZeroPage, 5, ZN_FLAGS, Target::Memory),
    op(0xF6, INC, ZeroPageX, 6, ZN_FLAGS, Target::Memory),
    op(0xEE, INC, Absolute, 6, ZN_FLAGS, Target::Memory),
    op(0xFE, INC, AbsoluteX, 7, ZN_FLAGS, Target::Memory),
    op(0xC6, DEC, ZeroPage, 5, ZN_FLAGS, Target::Memory),
    op(0xD6, DEC, ZeroPageX, 6, ZN_FLAGS, Target::Memory),
    op(0xCE, DEC, Absolute, 6, ZN_FLAGS, Target::Memory),
    op(0xDE, DEC, AbsoluteX, 7, ZN_FLAGS, Target::Memory),
    // Bit test
    op(0x24, BIT, ZeroPage, 3, NO_FLAGS, Target::None),
    op(0x2C, BIT, Absolute, 4, NO_FLAGS, Target::None),
    // Add / subtract with carry
    op(0x69, ADC, Immediate, 2, ZNC_FLAGS, Target::Accumulator),
    op(0xE9, SBC, Immediate, 2, ZNC_FLAGS, Target::Accumulator),
    // Compare
    op(0xC9, CMP, Immediate, 2, NO_FLAGS, Target::None),
    op(0xC5, CMP, ZeroPage, 3, NO_FLAGS, Target::None),
    op(0xCD, CMP, Absolute, 4, NO_FLAGS, Target::None),
    op(0xE0, CPX, Immediate, 2, NO_FLAGS, Target::None),
    op(0xE4, CPX, ZeroPage, 3, NO_FLAGS, Target::None),
    op(0xEC, CPX, Absolute, 4, NO_FLAGS, Target::None),
    op(0xC0, CPY, Immediate, 2, NO_FLAGS, Target::None),
    op(0xC4, CPY, ZeroPage, 3, NO_FLAGS, Target::None),
    op(0xCC, CPY, Absolute, 4, NO_FLAGS, Target::None),
    // Flag set / clear
    op(0x38, SEC, Implicit, 2, NO_FLAGS, Target::None),
    op(0x18, CLC, Implicit, 2, NO_FLAGS, Target::None),
    op(0x78, SEI, Implicit, 2, NO_FLAGS, Target::None),
    op(0x58, CLI, Implicit, 2, NO_FLAGS, Target::None),
    op(0xF8, SED, Implicit, 2, NO_FLAGS, Target::None),
    op(0xD8, CLD, Implicit, 2, NO_FLAGS, Target::None),
    op(0xB8, CLV, Implicit, 2, NO_FLAGS, Target::None),
    // No-op
    op(0xEA, NOP, Implicit, 2, NO_FLAGS, Target::None),
];

const NO_ENTRY: u8 = u8::MAX;

/// Maps each opcode byte to its position in `INSTRUCTION_SET`.
///
/// Built at compile time; a duplicate opcode fails the build.
static DECODE_INDEX: [u8; 256] = build_decode_index();

const fn build_decode_index() -> [u8; 256] {
    assert!(INSTRUCTION_SET.len() < NO_ENTRY as usize);

    let mut index = [NO_ENTRY; 256];
    let mut i = 0;
    while i < INSTRUCTION_SET.len() {
        let opcode = INSTRUCTION_SET[i].opcode as usize;
        if index[opcode] != NO_ENTRY {
            panic!("duplicate opcode in INSTRUCTION_SET");
        }
        index[opcode] = i as u8;
        i += 1;
    }
    index
}

/// Decodes an opcode byte.
///
/// # Errors
///
/// `ExecutionError::UnsupportedOpcode` if the byte is not in the instruction set.
///
/// # Examples
///
/// ```
/// use cycle6502::{lookup, ExecutionError, Mnemonic};
///
/// assert_eq!(lookup(0xEA).unwrap().mnemonic, Mnemonic::NOP);
/// assert_eq!(lookup(0x02), Err(ExecutionError::UnsupportedOpcode(0x02)));
/// ```
pub fn lookup(opcode: u8) -> Result<&'static OpcodeMetadata, ExecutionError> {
    match DECODE_INDEX[opcode as usize] {
        NO_ENTRY => Err(ExecutionError::UnsupportedOpcode(opcode)),
        i => Ok(&INSTRUCTION_SET[i as usize]),
    }
}
