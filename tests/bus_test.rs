//! Tests for connecting memory to the CPU.
//!
//! Tests cover:
//! - Every host call fails fast without a bus and changes nothing
//! - Borrowed (`&mut T`), boxed (`Box<dyn MemoryBus>`) and shared (`Rc<RefCell<T>>`) buses
//! - Custom `MemoryBus` implementations

use cpu6502::{CpuState, ExecutionError, FlatMemory, MemoryBus, CPU};
use std::cell::RefCell;
use std::rc::Rc;

fn reset_vector_memory() -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory
}

#[test]
fn test_disconnected_calls_return_error() {
    let mut cpu: CPU<FlatMemory> = CPU::new();

    assert_eq!(cpu.reset(), Err(ExecutionError::BusDisconnected));
    assert_eq!(cpu.clock(), Err(ExecutionError::BusDisconnected));
    assert_eq!(cpu.irq(), Err(ExecutionError::BusDisconnected));
    assert_eq!(cpu.nmi(), Err(ExecutionError::BusDisconnected));
    assert_eq!(cpu.step(), Err(ExecutionError::BusDisconnected));
    assert_eq!(cpu.run_for_cycles(5), Err(ExecutionError::BusDisconnected));

    assert_eq!(*cpu.state(), CpuState::new());
}

#[test]
fn test_disconnect_mid_run_keeps_state() {
    let mut memory = reset_vector_memory();
    memory.write(0x8000, 0xE8); // INX
    let mut cpu = CPU::with_memory(memory);
    cpu.reset().unwrap();
    cpu.step().unwrap();
    let state = *cpu.state();

    let memory = cpu.disconnect();
    assert!(memory.is_some());
    assert_eq!(cpu.clock(), Err(ExecutionError::BusDisconnected));
    assert_eq!(*cpu.state(), state);
}

#[test]
fn test_error_display() {
    let message = ExecutionError::BusDisconnected.to_string();
    assert!(message.contains("No memory bus"));
}

#[test]
fn test_borrowed_bus() {
    let mut memory = reset_vector_memory();
    memory.load(0x8000, &[0xA9, 0x07, 0x85, 0x40]); // LDA #$07; STA $40

    {
        let mut cpu = CPU::with_memory(&mut memory);
        cpu.reset().unwrap();
        cpu.step().unwrap();
        cpu.step().unwrap();
    }

    assert_eq!(memory.read(0x0040), 0x07);
}

#[test]
fn test_boxed_trait_object_bus() {
    let mut memory = reset_vector_memory();
    memory.load(0x8000, &[0xA9, 0x0B, 0x85, 0x42]); // LDA #$0B; STA $42
    let boxed: Box<dyn MemoryBus> = Box::new(memory);

    let mut cpu = CPU::with_memory(boxed);
    cpu.reset().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0B);
    assert_eq!(cpu.memory().unwrap().read(0x0042), 0x0B);
}

#[test]
fn test_shared_bus() {
    let memory = Rc::new(RefCell::new(reset_vector_memory()));
    memory.borrow_mut().load(0x8000, &[0xA9, 0x09, 0x85, 0x41]);

    let mut cpu = CPU::with_memory(Rc::clone(&memory));
    cpu.reset().unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(memory.borrow().read(0x0041), 0x09);
}

/// Bus that mirrors 2KB of RAM across the low half and ignores writes above it.
struct MirroredRam {
    ram: [u8; 0x800],
    rom: [u8; 0x8000],
}

impl MemoryBus for MirroredRam {
    fn read(&self, addr: u16) -> u8 {
        if addr < 0x8000 {
            self.ram[(addr & 0x07FF) as usize]
        } else {
            self.rom[(addr - 0x8000) as usize]
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr < 0x8000 {
            self.ram[(addr & 0x07FF) as usize] = value;
        }
    }
}

#[test]
fn test_custom_bus_controls_address_decoding() {
    let mut rom = [0xEA; 0x8000];
    // LDA #$5A; STA $0900 (mirror of $0100); INC $8000 (ignored)
    rom[..8].copy_from_slice(&[0xA9, 0x5A, 0x8D, 0x00, 0x09, 0xEE, 0x00, 0x80]);
    rom[0x7FFC] = 0x00;
    rom[0x7FFD] = 0x80;

    let mut cpu = CPU::with_memory(MirroredRam {
        ram: [0; 0x800],
        rom,
    });
    cpu.reset().unwrap();
    for _ in 0..3 {
        cpu.step().unwrap();
    }

    let memory = cpu.memory().unwrap();
    assert_eq!(memory.read(0x0100), 0x5A);
    assert_eq!(memory.read(0x8000), 0xA9);
}
