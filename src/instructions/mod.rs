//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of the supported instructions,
//! organized by family. Each instruction is a standalone function taking the
//! CPU, the decoded table entry, and the cycle budget. The opcode fetch has
//! already been charged when these run.
//!
//! Families do not apply the table's flag updates for register targets; the
//! engine does that afterwards against the target register. An instruction
//! whose flag-relevant result is wider than the register (ADC/SBC) returns it
//! as `Some(result)` so the carry rule can see bit 8.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **stack**: PHA, PHP, PLA, PLP
//! - **control**: JSR, RTS, JMP, NOP
//! - **alu**: AND, ORA, EOR, BIT, CMP, CPX, CPY, ADC, SBC
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV

pub mod alu;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod stack;
pub mod transfer;

use crate::cpu::Cycles;
use crate::opcodes::{Mnemonic, OpcodeMetadata};
use crate::{ExecutionError, MemoryBus, CPU};

/// Outcome of one instruction: the un-truncated result when it matters for flags.
pub(crate) type ExecResult = Result<Option<u16>, ExecutionError>;

/// Dispatches a decoded instruction to its family implementation.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    cycles: &mut Cycles,
) -> ExecResult {
    match metadata.mnemonic {
        Mnemonic::LDA => load_store::execute_lda(cpu, metadata, cycles),
        Mnemonic::LDX => load_store::execute_ldx(cpu, metadata, cycles),
        Mnemonic::LDY => load_store::execute_ldy(cpu, metadata, cycles),
        Mnemonic::STA => load_store::execute_sta(cpu, metadata, cycles),
        Mnemonic::STX => load_store::execute_stx(cpu, metadata, cycles),
        Mnemonic::STY => load_store::execute_sty(cpu, metadata, cycles),

        Mnemonic::TAX => transfer::execute_tax(cpu, cycles),
        Mnemonic::TAY => transfer::execute_tay(cpu, cycles),
        Mnemonic::TXA => transfer::execute_txa(cpu, cycles),
        Mnemonic::TYA => transfer::execute_tya(cpu, cycles),
        Mnemonic::TSX => transfer::execute_tsx(cpu, cycles),
        Mnemonic::TXS => transfer::execute_txs(cpu, cycles),

        Mnemonic::PHA => stack::execute_pha(cpu, cycles),
        Mnemonic::PHP => stack::execute_php(cpu, cycles),
        Mnemonic::PLA => stack::execute_pla(cpu, cycles),
        Mnemonic::PLP => stack::execute_plp(cpu, cycles),

        Mnemonic::JSR => control::execute_jsr(cpu, metadata, cycles),
        Mnemonic::RTS => control::execute_rts(cpu, cycles),
        Mnemonic::JMP => control::execute_jmp(cpu, metadata, cycles),
        Mnemonic::NOP => control::execute_nop(cycles),

        Mnemonic::AND => alu::execute_and(cpu, metadata, cycles),
        Mnemonic::ORA => alu::execute_ora(cpu, metadata, cycles),
        Mnemonic::EOR => alu::execute_eor(cpu, metadata, cycles),
        Mnemonic::BIT => alu::execute_bit(cpu, metadata, cycles),
        Mnemonic::CMP => alu::execute_cmp(cpu, metadata, cycles),
        Mnemonic::CPX => alu::execute_cpx(cpu, metadata, cycles),
        Mnemonic::CPY => alu::execute_cpy(cpu, metadata, cycles),
        Mnemonic::ADC => alu::execute_adc(cpu, metadata, cycles),
        Mnemonic::SBC => alu::execute_sbc(cpu, metadata, cycles),

        Mnemonic::INC => inc_dec::execute_inc(cpu, metadata, cycles),
        Mnemonic::DEC => inc_dec::execute_dec(cpu, metadata, cycles),
        Mnemonic::INX => inc_dec::execute_inx(cpu, cycles),
        Mnemonic::INY => inc_dec::execute_iny(cpu, cycles),
        Mnemonic::DEX => inc_dec::execute_dex(cpu, cycles),
        Mnemonic::DEY => inc_dec::execute_dey(cpu, cycles),

        Mnemonic::CLC => flags::execute_clc(cpu, cycles),
        Mnemonic::SEC => flags::execute_sec(cpu, cycles),
        Mnemonic::CLI => flags::execute_cli(cpu, cycles),
        Mnemonic::SEI => flags::execute_sei(cpu, cycles),
        Mnemonic::CLD => flags::execute_cld(cpu, cycles),
        Mnemonic::SED => flags::execute_sed(cpu, cycles),
        Mnemonic::CLV => flags::execute_clv(cpu, cycles),
    }
}
