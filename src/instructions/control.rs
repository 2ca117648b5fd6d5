//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//! - The `???` placeholder used for every undocumented opcode
//!
//! JSR pushes the address of its own last byte (return address - 1), high byte
//! first; RTS pulls it back and adds one.

use crate::execute::{Core, IRQ_VECTOR};
use crate::{Flag, MemoryBus};

/// JMP: pc = effective address. The indirect page-wrap quirk lives in the
/// addressing mode, not here.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.state.pc = cpu.state.addr_abs;
    0
}

pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let return_address = cpu.state.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.state.pc = cpu.state.addr_abs;
    0
}

pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let return_address = cpu.pull_word();
    cpu.state.pc = return_address.wrapping_add(1);
    0
}

/// BRK: push pc and status (with B set), set I, jump through the IRQ vector.
///
/// The table gives BRK immediate addressing, so `pc` already skips the
/// padding byte and the pushed return address is BRK's address + 2.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let return_address = cpu.state.pc;
    cpu.push_word(return_address);

    let status = cpu.state.status | Flag::Break.mask() | Flag::Unused.mask();
    cpu.push(status);

    cpu.set_flag(Flag::InterruptDisable, true);
    cpu.state.pc = cpu.read_word(IRQ_VECTOR);
    0
}

/// RTI: pull status (B cleared, U set), then pc.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.state.status = cpu.pull();
    cpu.set_flag(Flag::Break, false);
    cpu.set_flag(Flag::Unused, true);

    cpu.state.pc = cpu.pull_word();
    0
}

pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut Core<'_, M>) -> u8 {
    0
}

pub(crate) fn execute_unknown<M: MemoryBus>(_cpu: &mut Core<'_, M>) -> u8 {
    0
}
