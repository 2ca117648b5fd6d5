//! # 6502 CPU Emulator Core
//!
//! A clock-driven NMOS 6502 interpreter designed for modularity, clarity, and
//! WebAssembly portability.
//!
//! The host owns the memory, connects it to the CPU, and advances the CPU one
//! clock tick at a time. Each instruction's effects are applied on the first
//! tick of its cycle window; the remaining ticks keep the documented cadence.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$05; ADC #$03
//! memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03]);
//!
//! let mut cpu = CPU::new();
//! cpu.connect(memory);
//! cpu.reset().unwrap();
//!
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFC);
//!
//! cpu.step().unwrap(); // drains reset, runs LDA
//! cpu.step().unwrap(); // runs ADC
//! assert_eq!(cpu.a(), 0x08);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via the `MemoryBus` trait
//! - **WebAssembly Portability**: No OS dependencies, deterministic execution
//! - **Cycle Cadence**: Each instruction owes its documented cycle count to the clock
//! - **Table-Driven Design**: All opcode metadata in a single static table
//!
//! ## Modules
//!
//! - `cpu` - Host-facing CPU: clock, reset, interrupts, register access
//! - `state` / `flags` - Register file and status flag bits
//! - `memory` - MemoryBus trait and implementations
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration and operand resolution
//! - `disassembler` - Memory-to-text disassembly
//! - `wasm` - JavaScript bindings (feature `wasm`)

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod state;

mod execute;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use disassembler::{disassemble, Instruction};
pub use execute::{
    INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_CYCLES, RESET_SP, RESET_VECTOR, STACK_BASE,
};
pub use flags::Flag;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use state::CpuState;

/// Errors returned by the host-facing CPU calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// No memory bus is connected.
    ///
    /// Returned before any state is touched; connect a bus with
    /// `CPU::connect` and retry.
    BusDisconnected,
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::BusDisconnected => {
                write!(f, "No memory bus is connected to the CPU")
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
