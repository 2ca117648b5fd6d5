//! # Clock and Interrupt Sequencing
//!
//! `Core` is a CPU context bound to a connected memory bus for the duration of
//! one host call. Building one requires a live bus, so nothing below this
//! point has to cope with a missing memory reference.
//!
//! ## Clock
//!
//! The clock has two states:
//! - **idle** (`cycles == 0`): fetch, decode, resolve the operand, execute,
//!   and reload `cycles` with the instruction's cost
//! - **draining** (`cycles > 0`): just count down
//!
//! Every tick, including the one that executed an instruction, increments
//! `cycle_count` and decrements `cycles`. The instruction's effects are
//! therefore visible from its first tick; the remaining ticks only keep the
//! documented per-instruction cadence.
//!
//! ## Interrupts
//!
//! Reset, IRQ and NMI run to completion when invoked and then load `cycles`,
//! so the following ticks drain their cost before the next fetch.

use log::{debug, trace};

use crate::addressing::AddressingMode;
use crate::instructions;
use crate::{CpuState, Flag, MemoryBus, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the NMI vector (low byte first).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the reset vector (low byte first).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (low byte first).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFC;

/// Cycles charged by the reset sequence.
pub const RESET_CYCLES: u8 = 8;

/// Cycles charged by the IRQ and NMI sequences.
pub const INTERRUPT_CYCLES: u8 = 7;

pub(crate) struct Core<'a, M: MemoryBus> {
    pub(crate) state: &'a mut CpuState,
    bus: &'a mut M,
    /// Addressing mode of the instruction currently executing
    pub(crate) mode: AddressingMode,
}

impl<'a, M: MemoryBus> Core<'a, M> {
    pub(crate) fn new(state: &'a mut CpuState, bus: &'a mut M) -> Self {
        Self {
            state,
            bus,
            mode: AddressingMode::Implied,
        }
    }

    pub(crate) fn read(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Little-endian word at `addr`, `addr + 1`.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Little-endian word from page 0; the high byte wraps to 0x00 after 0xFF.
    pub(crate) fn read_zero_page_word(&self, zp: u8) -> u16 {
        let lo = self.read(zp as u16) as u16;
        let hi = self.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Reads the byte at `pc` and advances past it.
    pub(crate) fn next_byte(&mut self) -> u8 {
        let value = self.read(self.state.pc);
        self.state.pc = self.state.pc.wrapping_add(1);
        value
    }

    pub(crate) fn next_word(&mut self) -> u16 {
        let lo = self.next_byte() as u16;
        let hi = self.next_byte() as u16;
        (hi << 8) | lo
    }

    /// Operand of the current instruction: the accumulator under implied
    /// addressing, otherwise the byte at `addr_abs`.
    pub(crate) fn fetch(&self) -> u8 {
        if self.mode == AddressingMode::Implied {
            self.state.a
        } else {
            self.read(self.state.addr_abs)
        }
    }

    pub(crate) fn push(&mut self, value: u8) {
        let addr = STACK_BASE | self.state.sp as u16;
        self.write(addr, value);
        self.state.sp = self.state.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.state.sp = self.state.sp.wrapping_add(1);
        self.read(STACK_BASE | self.state.sp as u16)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls low byte then high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    pub(crate) fn get_flag(&self, flag: Flag) -> u8 {
        self.state.get_flag(flag)
    }

    pub(crate) fn set_flag(&mut self, flag: Flag, value: bool) {
        self.state.set_flag(flag, value);
    }

    /// Advances the clock by one tick.
    pub(crate) fn clock(&mut self) {
        if self.state.cycles == 0 {
            let instruction_pc = self.state.pc;
            let opcode = self.next_byte();
            self.state.opcode = opcode;
            self.set_flag(Flag::Unused, true);

            let metadata = &OPCODE_TABLE[opcode as usize];
            self.mode = metadata.addressing_mode;
            self.state.cycles = metadata.base_cycles;

            let mode_extra = metadata.addressing_mode.resolve(self);
            let operation_extra = instructions::execute(self, metadata.operation);
            self.state.cycles += mode_extra & operation_extra;

            self.set_flag(Flag::Unused, true);

            trace!(
                "{:>10} {:04X}  {:02X}  {} ({} cycles)  {}",
                self.state.cycle_count,
                instruction_pc,
                opcode,
                metadata.mnemonic,
                self.state.cycles,
                self.state
            );
        }

        self.state.cycle_count += 1;
        self.state.cycles -= 1;
    }

    pub(crate) fn reset(&mut self) {
        self.state.addr_abs = RESET_VECTOR;
        self.state.pc = self.read_word(RESET_VECTOR);

        self.state.a = 0;
        self.state.x = 0;
        self.state.y = 0;
        self.state.sp = RESET_SP;
        self.state.status = Flag::Unused.mask();

        self.state.addr_abs = 0x0000;
        self.state.addr_rel = 0x0000;

        self.state.cycles = RESET_CYCLES;
        self.mode = AddressingMode::Implied;

        debug!("reset: pc={:04X}", self.state.pc);
    }

    pub(crate) fn irq(&mut self) {
        if self.get_flag(Flag::InterruptDisable) == 1 {
            debug!("irq masked at pc={:04X}", self.state.pc);
            return;
        }
        self.interrupt(IRQ_VECTOR);
        debug!("irq: pc={:04X}", self.state.pc);
    }

    pub(crate) fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR);
        debug!("nmi: pc={:04X}", self.state.pc);
    }

    /// Shared IRQ/NMI sequence: push pc and status, then jump through `vector`.
    fn interrupt(&mut self, vector: u16) {
        let pc = self.state.pc;
        self.push_word(pc);

        self.set_flag(Flag::Break, false);
        self.set_flag(Flag::InterruptDisable, true);
        self.set_flag(Flag::Unused, true);
        let status = self.state.status;
        self.push(status);

        self.state.addr_abs = vector;
        self.state.pc = self.read_word(vector);
        self.state.cycles = INTERRUPT_CYCLES;
    }
}
