//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! SED only records the flag; arithmetic stays binary.

use crate::execute::Core;
use crate::{Flag, MemoryBus};

/// Executes the CLC (Clear Carry) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.set_flag(Flag::Carry, false);
    0
}

/// Executes the SEC (Set Carry) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.set_flag(Flag::Carry, true);
    0
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.set_flag(Flag::InterruptDisable, false);
    0
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.set_flag(Flag::InterruptDisable, true);
    0
}

/// Executes the CLV (Clear Overflow) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.set_flag(Flag::Overflow, false);
    0
}

/// Executes the CLD (Clear Decimal) instruction.
///
/// Only the flag changes; arithmetic is always binary.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.set_flag(Flag::Decimal, false);
    0
}

/// Executes the SED (Set Decimal) instruction.
///
/// Only the flag changes; ADC and SBC ignore it.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.set_flag(Flag::Decimal, true);
    0
}
