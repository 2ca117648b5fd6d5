//! # Load and Store Instructions
//!
//! - LDA / LDX / LDY: load a register from the operand, updating Z and N.
//!   These take the extra cycle on an indexed page cross.
//! - STA / STX / STY: store a register to the effective address. No flags are
//!   touched and the base cycle count already covers indexed forms.

use crate::execute::Core;
use crate::MemoryBus;

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator A. Reports 1 so an indexed read that
/// crosses a page costs one extra cycle.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    cpu.state.a = value;
    cpu.state.set_zn(value);
    1
}

/// Executes the LDX (Load X Register) instruction.
///
/// Loads a byte of memory into register X. Reports 1 so an indexed read that
/// crosses a page costs one extra cycle.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if X = 0
/// - Negative (N): Set if bit 7 of X is set
/// - Other flags: Not affected
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    cpu.state.x = value;
    cpu.state.set_zn(value);
    1
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Loads a byte of memory into register Y. Reports 1 so an indexed read that
/// crosses a page costs one extra cycle.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if Y = 0
/// - Negative (N): Set if bit 7 of Y is set
/// - Other flags: Not affected
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.fetch();
    cpu.state.y = value;
    cpu.state.set_zn(value);
    1
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Writes the accumulator to the effective address. No flags are affected, and the
/// base cycle count already covers indexed forms.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let addr = cpu.state.addr_abs;
    let value = cpu.state.a;
    cpu.write(addr, value);
    0
}

/// Executes the STX (Store X Register) instruction.
///
/// Writes register X to the effective address. No flags are affected, and the
/// base cycle count already covers indexed forms.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let addr = cpu.state.addr_abs;
    let value = cpu.state.x;
    cpu.write(addr, value);
    0
}

/// Executes the STY (Store Y Register) instruction.
///
/// Writes register Y to the effective address. No flags are affected, and the
/// base cycle count already covers indexed forms.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let addr = cpu.state.addr_abs;
    let value = cpu.state.y;
    cpu.write(addr, value);
    0
}
