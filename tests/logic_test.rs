//! Tests for AND, ORA, EOR, BIT and the compare instructions.

use cpu6502::{Flag, FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000, reset and drained
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);

    let mut cpu = CPU::with_memory(memory);
    cpu.reset().unwrap();
    cpu.run_for_cycles(8).unwrap();
    cpu
}

// ========== Logic ==========

#[test]
fn test_and_ora_eor() {
    // AND #$0F; ORA #$80; EOR #$FF
    let mut cpu = setup_cpu(&[0x29, 0x0F, 0x09, 0x80, 0x49, 0xFF]);
    cpu.set_a(0x3C);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x0C);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x8C);
    assert_eq!(cpu.get_flag(Flag::Negative), 1);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x73);
    assert_eq!(cpu.get_flag(Flag::Negative), 0);
}

#[test]
fn test_and_result_zero() {
    // AND #$00
    let mut cpu = setup_cpu(&[0x29, 0x00]);
    cpu.set_a(0xFF);

    cpu.step().unwrap();
    assert_eq!(cpu.get_flag(Flag::Zero), 1);
}

#[test]
fn test_and_immediate_has_no_extra_cycle() {
    let mut cpu = setup_cpu(&[0x29, 0xFF]);
    assert_eq!(cpu.step().unwrap(), 2);
}

#[test]
fn test_bit_zero_page() {
    // BIT $10
    let mut cpu = setup_cpu(&[0x24, 0x10]);
    cpu.memory_mut().unwrap().write(0x0010, 0b0100_0001);
    cpu.set_a(0x01);

    assert_eq!(cpu.step().unwrap(), 3);

    assert_eq!(cpu.get_flag(Flag::Zero), 0);
    assert_eq!(cpu.get_flag(Flag::Overflow), 1);
    assert_eq!(cpu.get_flag(Flag::Negative), 0);
    assert_eq!(cpu.a(), 0x01);
}

// ========== Compares ==========

#[test]
fn test_cmp_greater_equal_less() {
    // CMP #$10 three times
    let mut cpu = setup_cpu(&[0xC9, 0x10, 0xC9, 0x10, 0xC9, 0x10]);

    cpu.set_a(0x20);
    cpu.step().unwrap();
    assert_eq!(cpu.get_flag(Flag::Carry), 1);
    assert_eq!(cpu.get_flag(Flag::Zero), 0);

    cpu.set_a(0x10);
    cpu.step().unwrap();
    assert_eq!(cpu.get_flag(Flag::Carry), 1);
    assert_eq!(cpu.get_flag(Flag::Zero), 1);

    cpu.set_a(0x08);
    cpu.step().unwrap();
    assert_eq!(cpu.get_flag(Flag::Carry), 0);
    assert_eq!(cpu.get_flag(Flag::Negative), 1);
    assert_eq!(cpu.a(), 0x08);
}

#[test]
fn test_cpx_cpy() {
    // CPX #$05; CPY $10
    let mut cpu = setup_cpu(&[0xE0, 0x05, 0xC4, 0x10]);
    cpu.memory_mut().unwrap().write(0x0010, 0x80);
    cpu.set_x(0x05);
    cpu.set_y(0x7F);

    cpu.step().unwrap();
    assert_eq!(cpu.get_flag(Flag::Zero), 1);
    assert_eq!(cpu.get_flag(Flag::Carry), 1);

    cpu.step().unwrap();
    assert_eq!(cpu.get_flag(Flag::Carry), 0);
    assert_eq!(cpu.get_flag(Flag::Zero), 0);
    assert_eq!(cpu.x(), 0x05);
    assert_eq!(cpu.y(), 0x7F);
}

// ========== Flag Instructions ==========

#[test]
fn test_set_and_clear_flags() {
    // SEC; SED; SEI; CLC; CLD; CLI
    let mut cpu = setup_cpu(&[0x38, 0xF8, 0x78, 0x18, 0xD8, 0x58]);

    for _ in 0..3 {
        assert_eq!(cpu.step().unwrap(), 2);
    }
    assert_eq!(cpu.status(), 0b0010_1101);

    for _ in 0..3 {
        cpu.step().unwrap();
    }
    assert_eq!(cpu.status(), 0b0010_0000);
}

#[test]
fn test_clv() {
    // CLV
    let mut cpu = setup_cpu(&[0xB8]);
    cpu.set_flag(Flag::Overflow, true);

    cpu.step().unwrap();
    assert_eq!(cpu.get_flag(Flag::Overflow), 0);
}
