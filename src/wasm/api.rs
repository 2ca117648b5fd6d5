//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! memory access and disassembly.

use crate::{ExecutionError, Flag, FlatMemory, MemoryBus, CPU, RESET_VECTOR};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct EmulatorError {
    message: String,
}

#[wasm_bindgen]
impl EmulatorError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> EmulatorError {
        EmulatorError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for EmulatorError {
    fn from(err: ExecutionError) -> Self {
        EmulatorError::new(&err.to_string())
    }
}

/// A 6502 CPU wired to 64KB of flat memory.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with zeroed memory. Load a program and call
    /// `reset()` before clocking it.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::with_memory(FlatMemory::new()),
            program_start: 0x0000,
            program_end: 0x0000,
        }
    }

    /// Copy a program into memory and point the reset vector at it
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        if let Some(memory) = self.cpu.memory_mut() {
            memory.load(start_addr, program);
            memory.write(RESET_VECTOR, start_addr as u8);
            memory.write(RESET_VECTOR.wrapping_add(1), (start_addr >> 8) as u8);
        }
        self.program_start = start_addr;
        self.program_end = loaded_end(start_addr, program.len());
    }

    /// Reset the CPU through the reset vector. Memory is preserved.
    pub fn reset(&mut self) -> Result<(), EmulatorError> {
        Ok(self.cpu.reset()?)
    }

    /// Advance one clock cycle
    pub fn clock(&mut self) -> Result<(), EmulatorError> {
        Ok(self.cpu.clock()?)
    }

    /// Execute a single instruction, returning the cycles it took
    pub fn step(&mut self) -> Result<u32, EmulatorError> {
        Ok(self.cpu.step()? as u32)
    }

    /// Run a fixed number of clock cycles
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, EmulatorError> {
        Ok(self.cpu.run_for_cycles(cycles as u64)? as u32)
    }

    pub fn irq(&mut self) -> Result<(), EmulatorError> {
        Ok(self.cpu.irq()?)
    }

    pub fn nmi(&mut self) -> Result<(), EmulatorError> {
        Ok(self.cpu.nmi()?)
    }

    #[wasm_bindgen(getter)]
    pub fn instruction_complete(&self) -> bool {
        self.cpu.is_instruction_complete()
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Total cycles as f64 (JS numbers cannot hold a full u64)
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycle_count() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.get_flag(Flag::Negative) == 1
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.get_flag(Flag::Overflow) == 1
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.get_flag(Flag::Decimal) == 1
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.get_flag(Flag::InterruptDisable) == 1
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.get_flag(Flag::Zero) == 1
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.get_flag(Flag::Carry) == 1
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().map_or(0, |m| m.read(addr))
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        if let Some(memory) = self.cpu.memory_mut() {
            memory.write(addr, value);
        }
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.read_memory(start + i)).collect()
    }

    /// Disassemble `length` bytes starting at `start_addr` into an array of
    /// listing lines
    pub fn disassemble(&self, start_addr: u16, length: u16) -> Result<js_sys::Array, EmulatorError> {
        let lines = self.cpu.disassemble(start_addr, length)?;
        Ok(lines
            .into_iter()
            .map(|(_, line)| JsValue::from_str(&line))
            .collect())
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the address just past the last loaded byte, saturating at 0xFFFF
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

/// End of a load at `start`. Bytes past 0xFFFF are dropped by
/// `FlatMemory::load`, so they do not count.
fn loaded_end(start: u16, len: usize) -> u16 {
    let loaded = len.min(0x10000 - start as usize);
    u16::try_from(start as usize + loaded).unwrap_or(u16::MAX)
}
