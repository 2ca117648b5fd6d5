//! Tests for the clock-driven execution model.
//!
//! Tests cover:
//! - Effects land on the first tick, the rest of the window only drains
//! - `is_instruction_complete` marks instruction boundaries
//! - Extra cycle only for page-crossing reads, never for stores or RMW
//! - Undocumented opcodes as 2-cycle no-ops
//! - `cycle_count` telemetry

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

#[test]
fn test_effects_visible_on_first_tick() {
    // LDA $1234 (4 cycles)
    let mut cpu = setup_cpu(&[0xAD, 0x34, 0x12]);
    cpu.memory_mut().unwrap().write(0x1234, 0x99);

    cpu.clock().unwrap();
    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.opcode(), 0xAD);
    assert_eq!(cpu.cycles_remaining(), 3);

    for remaining in (0..3).rev() {
        assert!(!cpu.is_instruction_complete());
        cpu.clock().unwrap();
        assert_eq!(cpu.cycles_remaining(), remaining);
    }
    assert!(cpu.is_instruction_complete());
}

#[test]
fn test_cycle_count_increments_every_tick() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA]);
    assert_eq!(cpu.cycle_count(), 8);

    cpu.clock().unwrap();
    assert_eq!(cpu.cycle_count(), 9);
    cpu.run_for_cycles(3).unwrap();
    assert_eq!(cpu.cycle_count(), 12);
}

#[test]
fn test_run_for_cycles_returns_budget() {
    let mut cpu = setup_cpu(&[0xEA; 16]);
    assert_eq!(cpu.run_for_cycles(10).unwrap(), 10);
    // Five 2-cycle NOPs
    assert_eq!(cpu.pc(), 0x8005);
}

#[test]
fn test_step_finishes_instruction_in_flight() {
    // NOP; INX
    let mut cpu = setup_cpu(&[0xEA, 0xE8]);
    cpu.clock().unwrap();

    // One NOP tick left plus INX
    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.x(), 1);
    assert!(cpu.is_instruction_complete());
}

#[test]
fn test_unused_flag_forced_after_plp() {
    // PLP pulling 0x00
    let mut cpu = setup_cpu(&[0x28]);

    cpu.step().unwrap();
    assert_eq!(cpu.status(), 0x20);
}

#[test]
fn test_undocumented_opcode_is_two_cycle_no_op() {
    let mut cpu = setup_cpu(&[0x02, 0xEA]);
    cpu.set_a(0x11);
    let before = *cpu.state();

    assert_eq!(cpu.step().unwrap(), 2);

    let after = cpu.state();
    assert_eq!(after.pc, 0x8001);
    assert_eq!(after.a, before.a);
    assert_eq!(after.x, before.x);
    assert_eq!(after.y, before.y);
    assert_eq!(after.sp, before.sp);
    assert_eq!(after.status, before.status);
}

// ========== Page-Cross Penalties ==========

#[test]
fn test_lda_absolute_x_page_cross() {
    // LDA $80FF,X
    let mut cpu = setup_cpu(&[0xBD, 0xFF, 0x80, 0xBD, 0x00, 0x80]);
    cpu.set_x(0x01);

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.addr_abs(), 0x8100);
    // LDA $8000,X stays in page 0x80
    assert_eq!(cpu.step().unwrap(), 4);
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    // LDX $10FF,Y
    let mut cpu = setup_cpu(&[0xBE, 0xFF, 0x10]);
    cpu.memory_mut().unwrap().write(0x1100, 0x7F);
    cpu.set_y(0x01);

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.x(), 0x7F);
}

#[test]
fn test_lda_indirect_y_page_cross() {
    // LDA ($20),Y with pointer $10FF
    let mut cpu = setup_cpu(&[0xB1, 0x20]);
    {
        let memory = cpu.memory_mut().unwrap();
        memory.write(0x0020, 0xFF);
        memory.write(0x0021, 0x10);
        memory.write(0x1101, 0x42);
    }
    cpu.set_y(0x02);

    assert_eq!(cpu.step().unwrap(), 6);
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_sta_absolute_x_never_gains_cycle() {
    // STA $80FF,X
    let mut cpu = setup_cpu(&[0x9D, 0xFF, 0x80]);
    cpu.set_x(0x01);

    assert_eq!(cpu.step().unwrap(), 5);
}

#[test]
fn test_inc_absolute_x_never_gains_cycle() {
    // INC $10FF,X
    let mut cpu = setup_cpu(&[0xFE, 0xFF, 0x10]);
    cpu.set_x(0x01);

    assert_eq!(cpu.step().unwrap(), 7);
    assert_eq!(cpu.memory().unwrap().read(0x1100), 0x01);
}

#[test]
fn test_cpx_never_gains_cycle() {
    // CPX $10 costs 3
    let mut cpu = setup_cpu(&[0xE4, 0x10]);
    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.get_flag(Flag::Carry), 1);
}
