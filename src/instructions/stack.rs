//! # Stack Instructions
//!
//! This module implements stack operations:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack lives in page 0x01 and grows downward. Push writes at
//! `0x0100 + SP` then decrements SP; pull increments SP then reads.

use crate::execute::Core;
use crate::{Flag, MemoryBus};

pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.state.a;
    cpu.push(value);
    0
}

/// PHP pushes a copy with B and U set; the live register is unchanged.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.state.status | Flag::Break.mask() | Flag::Unused.mask();
    cpu.push(value);
    0
}

pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.pull();
    cpu.state.a = value;
    cpu.state.set_zn(value);
    0
}

pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.state.status = cpu.pull();
    cpu.set_flag(Flag::Unused, true);
    0
}
