//! # Increment and Decrement Instructions
//!
//! - INC / DEC: read-modify-write on the effective address
//! - INX / INY / DEX / DEY: index registers
//!
//! All wrap modulo 256 and update only Z and N.

use crate::execute::Core;
use crate::MemoryBus;

fn modify_memory<M: MemoryBus>(cpu: &mut Core<'_, M>, delta: fn(u8) -> u8) {
    let addr = cpu.state.addr_abs;
    let result = delta(cpu.read(addr));
    cpu.write(addr, result);
    cpu.state.set_zn(result);
}

fn increment(value: u8) -> u8 {
    value.wrapping_add(1)
}

fn decrement(value: u8) -> u8 {
    value.wrapping_sub(1)
}

/// Executes the INC (Increment Memory) instruction.
///
/// Read-modify-write on the effective address, wrapping 0xFF to 0x00.
/// Updates Zero and Negative from the stored value.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    modify_memory(cpu, increment);
    0
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Read-modify-write on the effective address, wrapping 0x00 to 0xFF.
/// Updates Zero and Negative from the stored value.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    modify_memory(cpu, decrement);
    0
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let result = increment(cpu.state.x);
    cpu.state.x = result;
    cpu.state.set_zn(result);
    0
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let result = increment(cpu.state.y);
    cpu.state.y = result;
    cpu.state.set_zn(result);
    0
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let result = decrement(cpu.state.x);
    cpu.state.x = result;
    cpu.state.set_zn(result);
    0
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let result = decrement(cpu.state.y);
    cpu.state.y = result;
    cpu.state.set_zn(result);
    0
}
