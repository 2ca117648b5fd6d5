//! Property-based tests for addressing mode resolution.
//!
//! These tests drive real instructions through the CPU and check where the
//! effective address lands and when the extra cycle is charged.

use cpu6502::{FlatMemory, MemoryBus, CPU};
use proptest::prelude::*;

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

fn crosses_page(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}

proptest! {
    /// Zero-page,X never leaves page 0
    #[test]
    fn prop_zero_page_x_stays_in_page_zero(base in any::<u8>(), x in any::<u8>()) {
        // LDA $base,X
        let mut cpu = setup_cpu(&[0xB5, base]);
        cpu.set_x(x);

        cpu.step().unwrap();

        prop_assert!(cpu.addr_abs() < 0x0100);
        prop_assert_eq!(cpu.addr_abs(), base.wrapping_add(x) as u16);
    }

    /// Zero-page,Y never leaves page 0
    #[test]
    fn prop_zero_page_y_stays_in_page_zero(base in any::<u8>(), y in any::<u8>()) {
        // LDX $base,Y
        let mut cpu = setup_cpu(&[0xB6, base]);
        cpu.set_y(y);

        cpu.step().unwrap();

        prop_assert!(cpu.addr_abs() < 0x0100);
    }

    /// LDA abs,X costs one extra cycle exactly when the index crosses a page
    #[test]
    fn prop_absolute_x_extra_cycle(base in 0x0000u16..0x7F00, x in any::<u8>()) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = setup_cpu(&[0xBD, lo, hi]);
        cpu.set_x(x);

        let cycles = cpu.step().unwrap();

        let addr = base.wrapping_add(x as u16);
        prop_assert_eq!(cpu.addr_abs(), addr);
        prop_assert_eq!(cycles, 4 + crosses_page(base, addr) as u64);
    }

    /// LDA abs,Y follows the same rule with Y
    #[test]
    fn prop_absolute_y_extra_cycle(base in 0x0000u16..0x7F00, y in any::<u8>()) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = setup_cpu(&[0xB9, lo, hi]);
        cpu.set_y(y);

        let cycles = cpu.step().unwrap();

        let addr = base.wrapping_add(y as u16);
        prop_assert_eq!(cycles, 4 + crosses_page(base, addr) as u64);
    }

    /// STA abs,X is always 5 cycles
    #[test]
    fn prop_store_never_pays_page_cross(base in 0x0000u16..0x7F00, x in any::<u8>()) {
        let [lo, hi] = base.to_le_bytes();
        let mut cpu = setup_cpu(&[0x9D, lo, hi]);
        cpu.set_x(x);

        prop_assert_eq!(cpu.step().unwrap(), 5);
    }

    /// (Indirect),Y adds Y after dereferencing the zero-page pointer;
    /// the pointer's high byte wraps to $00 when zp is $FF
    #[test]
    fn prop_indirect_y(zp in any::<u8>(), pointer in 0x0200u16..0x7F00, y in any::<u8>()) {
        let mut cpu = setup_cpu(&[0xB1, zp]);
        {
            let memory = cpu.memory_mut().unwrap();
            let [lo, hi] = pointer.to_le_bytes();
            memory.write(zp as u16, lo);
            memory.write(zp.wrapping_add(1) as u16, hi);
        }
        cpu.set_y(y);

        let cycles = cpu.step().unwrap();

        let addr = pointer.wrapping_add(y as u16);
        prop_assert_eq!(cpu.addr_abs(), addr);
        prop_assert_eq!(cycles, 5 + crosses_page(pointer, addr) as u64);
    }

    /// Taken branches cost 3 within a page, 4 across
    #[test]
    fn prop_branch_cycles(offset in any::<u8>(), origin in 0x1000u16..0x7000) {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, origin as u8);
        memory.write(0xFFFD, (origin >> 8) as u8);
        memory.load(origin, &[0xD0, offset]); // BNE, Z clear after reset

        let mut cpu = CPU::with_memory(memory);
        cpu.reset().unwrap();
        cpu.run_for_cycles(8).unwrap();

        let cycles = cpu.step().unwrap();

        let next = origin.wrapping_add(2);
        let target = next.wrapping_add(offset as i8 as u16);
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cycles, 3 + crosses_page(next, target) as u64);
    }
}
