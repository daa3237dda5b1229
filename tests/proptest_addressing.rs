//! Property-based tests for addressing mode resolution.
//!
//! Exercised through real instructions so that both the effective address and
//! the cycle charge are observed.

use cycle6502::{page_crossed, Cycles, FlatMemory, MemoryBus, CPU};
use proptest::prelude::*;

fn cpu_at_8000(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x8000, program);
    let mut cpu = CPU::new(memory);
    cpu.set_pc(0x8000);
    cpu
}

fn step(cpu: &mut CPU<FlatMemory>) -> Cycles {
    let mut budget: Cycles = 0;
    cpu.step(&mut budget).unwrap();
    -budget
}

proptest! {
    #[test]
    fn prop_page_crossed_compares_high_bytes(base in any::<u16>(), effective in any::<u16>()) {
        prop_assert_eq!(page_crossed(base, effective), base >> 8 != effective >> 8);
        prop_assert_eq!(page_crossed(base, effective), page_crossed(effective, base));
    }

    #[test]
    fn prop_zero_page_x_stays_in_zero_page(base in any::<u8>(), x in any::<u8>(), marker in 1u8..) {
        let mut cpu = cpu_at_8000(&[0xB5, base]);
        cpu.set_x(x);
        let target = base.wrapping_add(x) as u16;
        cpu.memory_mut().write(target, marker);

        prop_assert_eq!(step(&mut cpu), 4);
        prop_assert_eq!(cpu.a(), marker);
    }

    #[test]
    fn prop_absolute_x_read_pays_only_on_cross(base in 0x0200u16..0x7000, x in any::<u8>()) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = cpu_at_8000(&[0xBD, lo, hi]);
        cpu.set_x(x);
        let effective = base.wrapping_add(x as u16);
        cpu.memory_mut().write(effective, 0x5A);

        let expected = 4 + page_crossed(base, effective) as Cycles;
        prop_assert_eq!(step(&mut cpu), expected);
        prop_assert_eq!(cpu.a(), 0x5A);
    }

    #[test]
    fn prop_absolute_y_write_always_pays(base in 0x0200u16..0x7000, y in any::<u8>(), value in any::<u8>()) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = cpu_at_8000(&[0x99, lo, hi]);
        cpu.set_a(value);
        cpu.set_y(y);

        prop_assert_eq!(step(&mut cpu), 5);
        prop_assert_eq!(cpu.memory().read(base.wrapping_add(y as u16)), value);
    }

    #[test]
    fn prop_indirect_y_pointer_wraps_in_zero_page(ptr in any::<u8>(), y in any::<u8>(), target in 0x0200u16..0x7F00) {
        let mut cpu = cpu_at_8000(&[0xB1, ptr]);
        cpu.set_y(y);
        let [lo, hi] = target.to_le_bytes();
        cpu.memory_mut().write(ptr as u16, lo);
        cpu.memory_mut().write(ptr.wrapping_add(1) as u16, hi);
        let effective = target.wrapping_add(y as u16);
        cpu.memory_mut().write(effective, 0xC3);

        let expected = 5 + page_crossed(target, effective) as Cycles;
        prop_assert_eq!(step(&mut cpu), expected);
        prop_assert_eq!(cpu.a(), 0xC3);
    }

    #[test]
    fn prop_indirect_x_pointer_wraps_in_zero_page(operand in any::<u8>(), x in any::<u8>(), target in 0x0200u16..0x7F00) {
        let mut cpu = cpu_at_8000(&[0xA1, operand]);
        cpu.set_x(x);
        let ptr = operand.wrapping_add(x);
        let [lo, hi] = target.to_le_bytes();
        cpu.memory_mut().write(ptr as u16, lo);
        cpu.memory_mut().write(ptr.wrapping_add(1) as u16, hi);
        cpu.memory_mut().write(target, 0x3C);

        prop_assert_eq!(step(&mut cpu), 6);
        prop_assert_eq!(cpu.a(), 0x3C);
    }
}
