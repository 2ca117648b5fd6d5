//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA, TSX: copy and update Z and N from the copied value
//! - TXS: copy X into SP without touching any flag

use crate::execute::Core;
use crate::MemoryBus;

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// Copies A into X, updating Zero and Negative.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.state.a;
    cpu.state.x = value;
    cpu.state.set_zn(value);
    0
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
///
/// Copies A into Y, updating Zero and Negative.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.state.a;
    cpu.state.y = value;
    cpu.state.set_zn(value);
    0
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
///
/// Copies X into A, updating Zero and Negative.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.state.x;
    cpu.state.a = value;
    cpu.state.set_zn(value);
    0
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
///
/// Copies Y into A, updating Zero and Negative.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.state.y;
    cpu.state.a = value;
    cpu.state.set_zn(value);
    0
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
///
/// Copies SP into X, updating Zero and Negative.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let value = cpu.state.sp;
    cpu.state.x = value;
    cpu.state.set_zn(value);
    0
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Copies X into SP. No flags are affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    cpu.state.sp = cpu.state.x;
    0
}
