//! Fuzz target for clocked CPU execution.
//!
//! This target creates arbitrary CPU states and memory contents, then clocks
//! the CPU for a burst of cycles with interrupts sprinkled in. Any panic
//! (overflowing arithmetic, out-of-range table index) is a bug.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the reset target (instructions + operands)
    program: [u8; 64],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
    /// NMI, reset and IRQ vectors
    vectors: [u8; 6],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Cycles to run, each optionally followed by an interrupt
    schedule: Vec<(u8, u8)>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.load(0x8000, &input.memory.program);
    memory.load(0xFFFA, &input.memory.vectors);

    let mut cpu = CPU::with_memory(memory);
    cpu.reset().unwrap();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for &(cycles, line) in input.schedule.iter().take(64) {
        let before = cpu.cycle_count();
        cpu.run_for_cycles(cycles as u64).unwrap();
        assert_eq!(cpu.cycle_count(), before + cycles as u64);

        if cpu.is_instruction_complete() {
            match line % 4 {
                1 => cpu.irq().unwrap(),
                2 => cpu.nmi().unwrap(),
                _ => {}
            }
        }

        // Unused is forced after every instruction
        assert_eq!(cpu.status() & 0x20, 0x20);
    }

    // Memory stays readable after arbitrary writes
    let _ = cpu.memory().map(|m| m.read(cpu.pc()));
});
