//! 6502 Disassembler Module
//!
//! Converts machine code held in a memory bus into human-readable lines.
//!
//! Each line reads `$<address>: <MNEMONIC> <operand> {<MODE>}`, for example
//! `$8000: LDA #$42 {IMM}` or `$8004: BNE $FC [$8002] {REL}`. The mode tag
//! makes the output easy to diff against reference listings.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::MemoryBus;

/// A single decoded instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "???")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

/// Disassembles every instruction that starts in `[start, start + length)`.
///
/// The range end is computed without wrapping, so a range reaching past
/// 0xFFFF simply stops at the top of memory. An instruction starting inside
/// the range is decoded in full even if its operands lie beyond it.
///
/// Reads go through `MemoryBus::read` only; memory is never modified.
///
/// # Returns
///
/// `(address, line)` pairs in ascending address order.
///
/// # Examples
///
/// ```
/// use cpu6502::{disassemble, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x8000, &[0xA2, 0x0A, 0xCA, 0xD0, 0xFD]);
///
/// let lines = disassemble(&mem, 0x8000, 5);
/// assert_eq!(lines[0], (0x8000, "$8000: LDX #$0A {IMM}".to_string()));
/// assert_eq!(lines[1], (0x8002, "$8002: DEX {IMP}".to_string()));
/// assert_eq!(lines[2], (0x8003, "$8003: BNE $FD [$8002] {REL}".to_string()));
/// ```
pub fn disassemble<M: MemoryBus + ?Sized>(bus: &M, start: u16, length: u16) -> Vec<(u16, String)> {
    let end = start as u32 + length as u32;
    let mut lines = Vec::new();
    let mut addr = start as u32;

    while addr < end && addr <= 0xFFFF {
        let instr = decoder::decode_instruction(bus, addr as u16);
        lines.push((instr.address, formatter::format_line(&instr)));
        addr += instr.size_bytes as u32;
    }

    lines
}
