//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Under implied addressing (`ASL A`) the accumulator is shifted in place;
//! otherwise the byte at the effective address is read, shifted and written
//! back. Carry always receives the bit shifted out.

use crate::addressing::AddressingMode;
use crate::execute::Core;
use crate::{Flag, MemoryBus};

/// Stores a shift result where the operand came from and updates C, Z, N.
fn write_back<M: MemoryBus>(cpu: &mut Core<'_, M>, result: u8, carry_out: bool) {
    cpu.set_flag(Flag::Carry, carry_out);
    cpu.state.set_zn(result);

    if cpu.mode == AddressingMode::Implied {
        cpu.state.a = result;
    } else {
        let addr = cpu.state.addr_abs;
        cpu.write(addr, result);
    }
}

pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    write_back(cpu, value << 1, value & 0x80 != 0);
    0
}

pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    write_back(cpu, value >> 1, value & 0x01 != 0);
    0
}

pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    let carry_in = cpu.get_flag(Flag::Carry);
    write_back(cpu, (value << 1) | carry_in, value & 0x80 != 0);
    0
}

pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    let carry_in = cpu.get_flag(Flag::Carry);
    write_back(cpu, (value >> 1) | (carry_in << 7), value & 0x01 != 0);
    0
}
