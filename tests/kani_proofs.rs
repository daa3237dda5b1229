//! Kani formal verification proofs for the 6502 core.
//!
//! These proofs use bounded model checking to verify invariants for every
//! possible input.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! They are ignored when running regular tests.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use cycle6502::{
        lookup, page_crossed, Cycles, Flag, FlagRegister, FlagUpdate, FlatMemory, MemoryBus, CPU,
    };

    fn cpu_at_8000(program: &[u8]) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, program);
        let mut cpu = CPU::new(memory);
        cpu.set_pc(0x8000);
        cpu
    }

    // ========== Status Register Proofs ==========

    /// Proof: packing and unpacking the status register is lossless
    #[kani::proof]
    fn proof_status_round_trip() {
        let byte: u8 = kani::any();
        let flags = FlagRegister::from_byte(byte);

        kani::assert(flags.to_byte() == byte, "status byte must round-trip");
    }

    /// Proof: the carry rule never clears a set carry
    #[kani::proof]
    fn proof_carry_rule_only_sets() {
        let result: u16 = kani::any();
        let mut flags = FlagRegister::new();
        flags.set(Flag::C, true);

        FlagUpdate::CarryIfOverflow.apply(&mut flags, result);

        kani::assert(flags.get(Flag::C), "carry must stay set");
    }

    /// Proof: Z and N only look at the low byte
    #[kani::proof]
    fn proof_zero_negative_use_low_byte() {
        let result: u16 = kani::any();
        let mut flags = FlagRegister::new();

        FlagUpdate::ZeroIfZero.apply(&mut flags, result);
        FlagUpdate::NegativeIfBit7.apply(&mut flags, result);

        kani::assert(flags.get(Flag::Z) == ((result as u8) == 0), "Z from low byte");
        kani::assert(flags.get(Flag::N) == ((result as u8) >= 0x80), "N from bit 7");
    }

    // ========== Decode Proofs ==========

    /// Proof: decode never panics and reports the byte it was given
    #[kani::proof]
    fn proof_lookup_is_total() {
        let opcode: u8 = kani::any();

        match lookup(opcode) {
            Ok(entry) => kani::assert(entry.opcode == opcode, "entry must match opcode"),
            Err(_) => {}
        }
    }

    // ========== Addressing Proofs ==========

    /// Proof: page_crossed is exactly a high-byte comparison
    #[kani::proof]
    fn proof_page_crossed() {
        let base: u16 = kani::any();
        let index: u8 = kani::any();
        let effective = base.wrapping_add(index as u16);

        kani::assert(
            page_crossed(base, effective) == ((base & 0xFF00) != (effective & 0xFF00)),
            "page_crossed compares high bytes",
        );
    }

    /// Proof: ZeroPage,X never leaves page zero
    #[kani::proof]
    #[kani::unwind(3)]
    fn proof_zero_page_x_wraps() {
        let base: u8 = kani::any();
        let x: u8 = kani::any();

        let mut cpu = cpu_at_8000(&[0x95, base]); // STA zp,X
        cpu.set_x(x);
        cpu.set_a(0xA5);

        let mut budget: Cycles = 0;
        let _ = cpu.step(&mut budget);

        let target = base.wrapping_add(x) as u16;
        kani::assert(cpu.memory().read(target) == 0xA5, "store lands in page zero");
        kani::assert(budget == -4, "STA zp,X costs 4 cycles");
    }

    // ========== Stack Proofs ==========

    /// Proof: a push/pull pair restores SP for any starting value
    #[kani::proof]
    #[kani::unwind(5)]
    fn proof_push_pull_restores_sp() {
        let sp: u8 = kani::any();
        let a: u8 = kani::any();

        let mut cpu = cpu_at_8000(&[0x48, 0x68]); // PHA; PLA
        cpu.set_sp(sp);
        cpu.set_a(a);

        let mut budget: Cycles = 0;
        let _ = cpu.step(&mut budget);
        let _ = cpu.step(&mut budget);

        kani::assert(cpu.sp() == sp, "SP restored");
        kani::assert(cpu.a() == a, "A restored");
        kani::assert(budget == -7, "PHA + PLA cost 7 cycles");
    }
}
