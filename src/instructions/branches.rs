//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry clear / set
//! - BNE / BEQ: Branch on Zero clear / set
//! - BPL / BMI: Branch on Negative clear / set
//! - BVC / BVS: Branch on Overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! already sign-extended into `addr_rel` by the time they run.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! The taken/page-cross cycles are added to the pending counter directly, so
//! every branch reports 0 for the shared page-cross signal.

use crate::addressing::page_crossed;
use crate::execute::Core;
use crate::{Flag, MemoryBus};

fn branch_if<M: MemoryBus>(cpu: &mut Core<'_, M>, condition: bool) -> u8 {
    if condition {
        // pc already points past the operand
        let pc = cpu.state.pc;
        let target = pc.wrapping_add(cpu.state.addr_rel);

        cpu.state.cycles += 1;
        if page_crossed(pc, target) {
            cpu.state.cycles += 1;
        }

        cpu.state.addr_abs = target;
        cpu.state.pc = target;
    }
    0
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// Taken when Carry is 0.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let condition = cpu.get_flag(Flag::Carry) == 0;
    branch_if(cpu, condition)
}

/// Executes the BCS (Branch if Carry Set) instruction.
///
/// Taken when Carry is 1.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let condition = cpu.get_flag(Flag::Carry) == 1;
    branch_if(cpu, condition)
}

/// Executes the BNE (Branch if Not Equal) instruction.
///
/// Taken when Zero is 0.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let condition = cpu.get_flag(Flag::Zero) == 0;
    branch_if(cpu, condition)
}

/// Executes the BEQ (Branch if Equal) instruction.
///
/// Taken when Zero is 1.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let condition = cpu.get_flag(Flag::Zero) == 1;
    branch_if(cpu, condition)
}

/// Executes the BPL (Branch if Plus) instruction.
///
/// Taken when Negative is 0.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let condition = cpu.get_flag(Flag::Negative) == 0;
    branch_if(cpu, condition)
}

/// Executes the BMI (Branch if Minus) instruction.
///
/// Taken when Negative is 1.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let condition = cpu.get_flag(Flag::Negative) == 1;
    branch_if(cpu, condition)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
///
/// Taken when Overflow is 0.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let condition = cpu.get_flag(Flag::Overflow) == 0;
    branch_if(cpu, condition)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
///
/// Taken when Overflow is 1.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut Core<'_, M>) -> u8 {
    let condition = cpu.get_flag(Flag::Overflow) == 1;
    branch_if(cpu, condition)
}
