//! # CPU Host Interface
//!
//! This module contains the `CPU` struct the host drives: it owns the register
//! state and (optionally) the memory bus, and exposes the clock, reset and
//! interrupt lines.
//!
//! ## Execution Model
//!
//! The CPU is clock driven:
//! - `clock()`: advance exactly one cycle
//! - `step()`: run until one whole instruction has executed and drained
//! - `run_for_cycles()`: call `clock()` a fixed number of times
//!
//! An instruction's effects are applied on the first tick of its cycle window.
//! `is_instruction_complete()` reports the safe points between instructions.
//!
//! ## Memory Connection
//!
//! The bus is attached with `connect()`. Every call that touches memory checks
//! for it first and returns `ExecutionError::BusDisconnected` without changing
//! any state when nothing is connected.

use log::error;

use crate::disassembler;
use crate::execute::Core;
use crate::{CpuState, ExecutionError, Flag, MemoryBus};

/// 6502 CPU context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. Use
/// `&mut T` or `Rc<RefCell<T>>` as `M` when the host needs to keep its own
/// handle on the memory.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
/// memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = CPU::new();
/// cpu.connect(memory);
/// cpu.reset().unwrap();
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFC);
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct CPU<M: MemoryBus> {
    state: CpuState,
    memory: Option<M>,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with zeroed registers and no memory connected.
    ///
    /// Call `connect()` and then `reset()` before clocking it.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
            memory: None,
        }
    }

    /// Creates a CPU already connected to `memory`. The registers are still
    /// zeroed; call `reset()` to load the reset vector.
    pub fn with_memory(memory: M) -> Self {
        Self {
            state: CpuState::new(),
            memory: Some(memory),
        }
    }

    /// Attaches a memory bus, returning the one previously attached.
    pub fn connect(&mut self, memory: M) -> Option<M> {
        self.memory.replace(memory)
    }

    /// Detaches and returns the memory bus.
    pub fn disconnect(&mut self) -> Option<M> {
        self.memory.take()
    }

    pub fn is_connected(&self) -> bool {
        self.memory.is_some()
    }

    pub fn memory(&self) -> Option<&M> {
        self.memory.as_ref()
    }

    pub fn memory_mut(&mut self) -> Option<&mut M> {
        self.memory.as_mut()
    }

    /// Binds the state to the connected bus for one host call.
    fn core(&mut self, call: &str) -> Result<Core<'_, M>, ExecutionError> {
        match self.memory.as_mut() {
            Some(bus) => Ok(Core::new(&mut self.state, bus)),
            None => {
                error!("{} rejected: no memory connected", call);
                Err(ExecutionError::BusDisconnected)
            }
        }
    }

    // ========== Host Lines ==========

    /// Puts the CPU into its power-on state.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - A, X and Y are cleared
    /// - SP is set to 0xFC
    /// - Status holds only the Unused bit
    /// - 8 cycles are owed before the first fetch
    ///
    /// `cycle_count` is not cleared.
    pub fn reset(&mut self) -> Result<(), ExecutionError> {
        self.core("reset")?.reset();
        Ok(())
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored entirely (no state change, no cycles) while the Interrupt
    /// Disable flag is set. Otherwise pushes PC and status, sets I and loads
    /// PC from 0xFFFE/0xFFFF. The sequence costs 7 cycles.
    pub fn irq(&mut self) -> Result<(), ExecutionError> {
        self.core("irq")?.irq();
        Ok(())
    }

    /// Triggers a non-maskable interrupt through 0xFFFA/0xFFFB. Same sequence
    /// as `irq()` but never masked.
    pub fn nmi(&mut self) -> Result<(), ExecutionError> {
        self.core("nmi")?.nmi();
        Ok(())
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// When no cycles are owed, the next instruction is fetched and executed
    /// on this tick and its cost becomes the new debt.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP, 2 cycles
    ///
    /// let mut cpu = CPU::with_memory(mem);
    /// cpu.reset().unwrap();
    /// cpu.run_for_cycles(8).unwrap(); // drain the reset sequence
    ///
    /// cpu.clock().unwrap();
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert!(!cpu.is_instruction_complete());
    ///
    /// cpu.clock().unwrap();
    /// assert!(cpu.is_instruction_complete());
    /// ```
    pub fn clock(&mut self) -> Result<(), ExecutionError> {
        self.core("clock")?.clock();
        Ok(())
    }

    /// True when no cycles are owed, i.e. the next tick fetches a new instruction.
    pub fn is_instruction_complete(&self) -> bool {
        self.state.cycles == 0
    }

    /// Finishes any instruction in flight, then executes exactly one more and
    /// drains its cycles.
    ///
    /// Returns the number of ticks consumed.
    pub fn step(&mut self) -> Result<u64, ExecutionError> {
        let mut core = self.core("step")?;
        let start = core.state.cycle_count;

        while core.state.cycles > 0 {
            core.clock();
        }
        loop {
            core.clock();
            if core.state.cycles == 0 {
                break;
            }
        }

        Ok(core.state.cycle_count - start)
    }

    /// Calls `clock()` `cycle_budget` times.
    ///
    /// Useful for frame-locked hosts that interleave the CPU with other
    /// hardware at a fixed ratio. Returns the number of ticks run.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let mut core = self.core("run_for_cycles")?;
        for _ in 0..cycle_budget {
            core.clock();
        }
        Ok(cycle_budget)
    }

    /// Disassembles `[start, start + length)` from the connected memory.
    ///
    /// See [`crate::disassemble`] for the line format.
    pub fn disassemble(&self, start: u16, length: u16) -> Result<Vec<(u16, String)>, ExecutionError> {
        match self.memory.as_ref() {
            Some(bus) => Ok(disassembler::disassemble(bus, start, length)),
            None => {
                error!("disassemble rejected: no memory connected");
                Err(ExecutionError::BusDisconnected)
            }
        }
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.state.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.state.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.state.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.state.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: U (Unused, forced to 1 whenever flags are touched)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal, stored but never acted upon)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        self.state.status
    }

    /// Returns 1 if `flag` is set, 0 otherwise.
    pub fn get_flag(&self, flag: Flag) -> u8 {
        self.state.get_flag(flag)
    }

    // ========== Telemetry ==========

    /// Total ticks since the CPU was created.
    pub fn cycle_count(&self) -> u64 {
        self.state.cycle_count
    }

    /// Ticks still owed by the instruction or interrupt in flight.
    pub fn cycles_remaining(&self) -> u8 {
        self.state.cycles
    }

    /// The most recently fetched opcode byte.
    pub fn opcode(&self) -> u8 {
        self.state.opcode
    }

    pub fn addr_abs(&self) -> u16 {
        self.state.addr_abs
    }

    pub fn addr_rel(&self) -> u16 {
        self.state.addr_rel
    }

    /// Snapshot of the whole register file.
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.state.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.state.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.state.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.state.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.state.pc = value;
    }

    /// Replaces the status register. The Unused bit is always forced on.
    pub fn set_status(&mut self, value: u8) {
        self.state.status = value | Flag::Unused.mask();
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.state.set_flag(flag, value);
    }
}

impl<M: MemoryBus> Default for CPU<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn connected_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        CPU::with_memory(mem)
    }

    #[test]
    fn test_new_cpu_is_disconnected() {
        let mut cpu: CPU<FlatMemory> = CPU::new();

        assert!(!cpu.is_connected());
        assert_eq!(cpu.reset(), Err(ExecutionError::BusDisconnected));
        assert_eq!(cpu.clock(), Err(ExecutionError::BusDisconnected));
        assert_eq!(*cpu.state(), CpuState::new());
    }

    #[test]
    fn test_reset_state() {
        let mut cpu = connected_cpu();
        cpu.set_a(0x11);
        cpu.set_status(0xFF);

        cpu.reset().unwrap();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFC);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.status(), 0x20);
        assert_eq!(cpu.cycles_remaining(), 8);
    }

    #[test]
    fn test_step_counts_reset_drain_and_instruction() {
        let mut cpu = connected_cpu();
        cpu.memory_mut().unwrap().write(0x8000, 0xEA); // NOP
        cpu.reset().unwrap();

        assert_eq!(cpu.step(), Ok(10));
        assert_eq!(cpu.pc(), 0x8001);
        assert!(cpu.is_instruction_complete());
    }

    #[test]
    fn test_set_status_forces_unused() {
        let mut cpu = connected_cpu();
        cpu.set_status(0x00);
        assert_eq!(cpu.status(), 0x20);
    }

    #[test]
    fn test_connect_returns_previous_bus() {
        let mut cpu = connected_cpu();
        let previous = cpu.connect(FlatMemory::new());

        assert_eq!(previous.map(|m| m.read(0xFFFD)), Some(0x80));
        assert!(cpu.disconnect().is_some());
        assert!(!cpu.is_connected());
    }
}
