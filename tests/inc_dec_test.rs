//! Tests for INC, DEC, INX, INY, DEX and DEY.
//!
//! Tests cover:
//! - 8-bit wrap in both directions
//! - Z and N from the new value, C and V untouched
//! - Read-modify-write cycle counts for every memory mode

use cycle6502::{Cycles, Flag, FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
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

// ========== INC / DEC memory ==========

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.memory_mut().write(0x0010, 0x41);

    assert_eq!(step(&mut cpu), 5);

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert!(!cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::N));
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.memory_mut().write(0x0010, 0xFF);
    cpu.set_flag(Flag::C, true);

    step(&mut cpu);

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag(Flag::Z));
    // Wrap does not touch carry
    assert!(cpu.flag(Flag::C));
}

#[test]
fn test_inc_does_not_touch_registers() {
    let mut cpu = setup_cpu(&[0xEE, 0x00, 0x20]);
    cpu.set_a(0x00);
    cpu.memory_mut().write(0x2000, 0x7F);

    assert_eq!(step(&mut cpu), 6);

    assert_eq!(cpu.memory().read(0x2000), 0x80);
    assert_eq!(cpu.a(), 0x00);
    // Flags follow memory, not A
    assert!(!cpu.flag(Flag::Z));
    assert!(cpu.flag(Flag::N));
}

#[test]
fn test_inc_zero_page_x_wraps() {
    let mut cpu = setup_cpu(&[0xF6, 0xF0]);
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x0010, 0x01);

    assert_eq!(step(&mut cpu), 6);
    assert_eq!(cpu.memory().read(0x0010), 0x02);
}

#[test]
fn test_inc_absolute_x_always_seven_cycles() {
    let mut cpu = setup_cpu(&[0xFE, 0x00, 0x20, 0xFE, 0xFF, 0x20]);
    cpu.set_x(0x01);

    // Same page
    assert_eq!(step(&mut cpu), 7);
    assert_eq!(cpu.memory().read(0x2001), 0x01);

    // Page crossed
    assert_eq!(step(&mut cpu), 7);
    assert_eq!(cpu.memory().read(0x2100), 0x01);
}

#[test]
fn test_dec_zero_page_wraps_to_ff() {
    let mut cpu = setup_cpu(&[0xC6, 0x10]);

    assert_eq!(step(&mut cpu), 5);

    assert_eq!(cpu.memory().read(0x0010), 0xFF);
    assert!(cpu.flag(Flag::N));
    assert!(!cpu.flag(Flag::Z));
}

#[test]
fn test_dec_to_zero() {
    let mut cpu = setup_cpu(&[0xCE, 0x00, 0x30]);
    cpu.memory_mut().write(0x3000, 0x01);

    assert_eq!(step(&mut cpu), 6);

    assert_eq!(cpu.memory().read(0x3000), 0x00);
    assert!(cpu.flag(Flag::Z));
}

#[test]
fn test_dec_indexed_modes() {
    let mut cpu = setup_cpu(&[0xD6, 0x10, 0xDE, 0x00, 0x30]);
    cpu.set_x(0x02);
    cpu.memory_mut().write(0x0012, 0x10);
    cpu.memory_mut().write(0x3002, 0x20);

    assert_eq!(step(&mut cpu), 6);
    assert_eq!(step(&mut cpu), 7);

    assert_eq!(cpu.memory().read(0x0012), 0x0F);
    assert_eq!(cpu.memory().read(0x3002), 0x1F);
}

// ========== Register forms ==========

#[test]
fn test_inx() {
    let mut cpu = setup_cpu(&[0xE8]);
    cpu.set_x(0x7F);

    assert_eq!(step(&mut cpu), 2);

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag(Flag::N));
}

#[test]
fn test_inx_wraps() {
    let mut cpu = setup_cpu(&[0xE8]);
    cpu.set_x(0xFF);

    step(&mut cpu);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::C));
}

#[test]
fn test_iny_wraps() {
    let mut cpu = setup_cpu(&[0xC8]);
    cpu.set_y(0xFF);

    assert_eq!(step(&mut cpu), 2);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag(Flag::Z));
}

#[test]
fn test_dex_wraps() {
    let mut cpu = setup_cpu(&[0xCA]);

    assert_eq!(step(&mut cpu), 2);

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag(Flag::N));
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu(&[0x88]);
    cpu.set_y(0x01);

    assert_eq!(step(&mut cpu), 2);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag(Flag::Z));
    assert!(!cpu.flag(Flag::N));
}

#[test]
fn test_count_down_loop_body() {
    // LDX #$03; DEX; DEX; DEX
    let mut cpu = setup_cpu(&[0xA2, 0x03, 0xCA, 0xCA, 0xCA]);

    let mut budget: Cycles = 8;
    cpu.exec(&mut budget).unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag(Flag::Z));
    assert_eq!(budget, 0);
}
