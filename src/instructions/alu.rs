//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: Add/Subtract with Carry (binary only; the D flag is ignored)
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register compares
//! - BIT: Bit test

use crate::execute::Core;
use crate::{Flag, MemoryBus};

/// Adds `value` and the carry flag to the accumulator, updating C, Z, V, N.
///
/// Overflow is set when both inputs share a sign that the result does not:
/// `(A ^ result) & (M ^ result) & 0x80`.
fn add_with_carry<M: MemoryBus>(cpu: &mut Core<'_, M>, value: u8) {
    let a = cpu.state.a;
    let sum = a as u16 + value as u16 + cpu.get_flag(Flag::Carry) as u16;
    let result = sum as u8;

    cpu.set_flag(Flag::Carry, sum > 0xFF);
    cpu.set_flag(Flag::Overflow, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.state.set_zn(result);

    cpu.state.a = result;
}

/// Sets flags as if `register - value` had been computed. Nothing is stored.
fn compare<M: MemoryBus>(cpu: &mut Core<'_, M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.set_flag(Flag::Carry, register >= value);
    cpu.state.set_zn(result);
}

/// ADC: A = A + M + C
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    add_with_carry(cpu, value);
    1
}

/// SBC: A = A - M - (1 - C), computed as A + !M + C.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    add_with_carry(cpu, !value);
    1
}

pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let result = cpu.state.a & cpu.fetch();
    cpu.state.a = result;
    cpu.state.set_zn(result);
    1
}

pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let result = cpu.state.a | cpu.fetch();
    cpu.state.a = result;
    cpu.state.set_zn(result);
    1
}

pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let result = cpu.state.a ^ cpu.fetch();
    cpu.state.a = result;
    cpu.state.set_zn(result);
    1
}

pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    let a = cpu.state.a;
    compare(cpu, a, value);
    1
}

pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    let x = cpu.state.x;
    compare(cpu, x, value);
    0
}

pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    let y = cpu.state.y;
    compare(cpu, y, value);
    0
}

/// BIT: Z from `A & M`, N and V copied from bits 7 and 6 of M.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    let result = cpu.state.a & value;

    cpu.set_flag(Flag::Zero, result == 0);
    cpu.set_flag(Flag::Negative, value & 0x80 != 0);
    cpu.set_flag(Flag::Overflow, value & 0x40 != 0);
    0
}
