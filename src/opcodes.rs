//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that the clock,
//! the disassembler, and the instruction implementations all read from.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - Mapped to the `???` placeholder, which
//!   executes as a 2-cycle no-op with implied addressing
//!
//! Each entry pairs an addressing mode with an operation tag; the clock
//! dispatches on both with a `match`, so no entry is ever missing and no
//! function pointers are involved.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;
use Operation::*;

/// The behaviour half of an opcode: which instruction semantics to run once
/// the operand address has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Placeholder for undocumented opcodes. Changes nothing.
    Unknown,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for undocumented opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Instruction semantics.
    pub operation: Operation,

    /// Base cycle cost, before page-crossing and branch-taken penalties.
    pub base_cycles: u8,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        self.addressing_mode.size_bytes()
    }

    /// Returns true for official NMOS 6502 opcodes.
    pub fn is_documented(&self) -> bool {
        self.operation != Operation::Unknown
    }
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        operation,
        base_cycles,
    }
}

const UNKNOWN: OpcodeMetadata = op("???", Unknown, Implied, 2);

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Built once at compile time and shared by every CPU instance.
///
/// # Examples
///
/// ```
/// use cpu6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let undocumented = &OPCODE_TABLE[0x02];
/// assert_eq!(undocumented.mnemonic, "???");
/// assert_eq!(undocumented.base_cycles, 2);
/// ```
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op("BRK", Brk, Immediate, 7),
    op("ORA", Ora, IndirectX, 6),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("ORA", Ora, ZeroPage, 3),
    op("ASL", Asl, ZeroPage, 5),
    UNKNOWN,
    op("PHP", Php, Implied, 3),
    op("ORA", Ora, Immediate, 2),
    op("ASL", Asl, Implied, 2),
    UNKNOWN,
    UNKNOWN,
    op("ORA", Ora, Absolute, 4),
    op("ASL", Asl, Absolute, 6),
    UNKNOWN,
    // 0x10
    op("BPL", Bpl, Relative, 2),
    op("ORA", Ora, IndirectY, 5),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("ORA", Ora, ZeroPageX, 4),
    op("ASL", Asl, ZeroPageX, 6),
    UNKNOWN,
    op("CLC", Clc, Implied, 2),
    op("ORA", Ora, AbsoluteY, 4),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("ORA", Ora, AbsoluteX, 4),
    op("ASL", Asl, AbsoluteX, 7),
    UNKNOWN,
    // 0x20
    op("JSR", Jsr, Absolute, 6),
    op("AND", And, IndirectX, 6),
    UNKNOWN,
    UNKNOWN,
    op("BIT", Bit, ZeroPage, 3),
    op("AND", And, ZeroPage, 3),
    op("ROL", Rol, ZeroPage, 5),
    UNKNOWN,
    op("PLP", Plp, Implied, 4),
    op("AND", And, Immediate, 2),
    op("ROL", Rol, Implied, 2),
    UNKNOWN,
    op("BIT", Bit, Absolute, 4),
    op("AND", And, Absolute, 4),
    op("ROL", Rol, Absolute, 6),
    UNKNOWN,
    // 0x30
    op("BMI", Bmi, Relative, 2),
    op("AND", And, IndirectY, 5),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("AND", And, ZeroPageX, 4),
    op("ROL", Rol, ZeroPageX, 6),
    UNKNOWN,
    op("SEC", Sec, Implied, 2),
    op("AND", And, AbsoluteY, 4),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("AND", And, AbsoluteX, 4),
    op("ROL", Rol, AbsoluteX, 7),
    UNKNOWN,
    // 0x40
    op("RTI", Rti, Implied, 6),
    op("EOR", Eor, IndirectX, 6),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("EOR", Eor, ZeroPage, 3),
    op("LSR", Lsr, ZeroPage, 5),
    UNKNOWN,
    op("PHA", Pha, Implied, 3),
    op("EOR", Eor, Immediate, 2),
    op("LSR", Lsr, Implied, 2),
    UNKNOWN,
    op("JMP", Jmp, Absolute, 3),
    op("EOR", Eor, Absolute, 4),
    op("LSR", Lsr, Absolute, 6),
    UNKNOWN,
    // 0x50
    op("BVC", Bvc, Relative, 2),
    op("EOR", Eor, IndirectY, 5),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("EOR", Eor, ZeroPageX, 4),
    op("LSR", Lsr, ZeroPageX, 6),
    UNKNOWN,
    op("CLI", Cli, Implied, 2),
    op("EOR", Eor, AbsoluteY, 4),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("EOR", Eor, AbsoluteX, 4),
    op("LSR", Lsr, AbsoluteX, 7),
    UNKNOWN,
    // 0x60
    op("RTS", Rts, Implied, 6),
    op("ADC", Adc, IndirectX, 6),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("ADC", Adc, ZeroPage, 3),
    op("ROR", Ror, ZeroPage, 5),
    UNKNOWN,
    op("PLA", Pla, Implied, 4),
    op("ADC", Adc, Immediate, 2),
    op("ROR", Ror, Implied, 2),
    UNKNOWN,
    op("JMP", Jmp, Indirect, 5),
    op("ADC", Adc, Absolute, 4),
    op("ROR", Ror, Absolute, 6),
    UNKNOWN,
    // 0x70
    op("BVS", Bvs, Relative, 2),
    op("ADC", Adc, IndirectY, 5),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("ADC", Adc, ZeroPageX, 4),
    op("ROR", Ror, ZeroPageX, 6),
    UNKNOWN,
    op("SEI", Sei, Implied, 2),
    op("ADC", Adc, AbsoluteY, 4),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("ADC", Adc, AbsoluteX, 4),
    op("ROR", Ror, AbsoluteX, 7),
    UNKNOWN,
    // 0x80
    UNKNOWN,
    op("STA", Sta, IndirectX, 6),
    UNKNOWN,
    UNKNOWN,
    op("STY", Sty, ZeroPage, 3),
    op("STA", Sta, ZeroPage, 3),
    op("STX", Stx, ZeroPage, 3),
    UNKNOWN,
    op("DEY", Dey, Implied, 2),
    UNKNOWN,
    op("TXA", Txa, Implied, 2),
    UNKNOWN,
    op("STY", Sty, Absolute, 4),
    op("STA", Sta, Absolute, 4),
    op("STX", Stx, Absolute, 4),
    UNKNOWN,
    // 0x90
    op("BCC", Bcc, Relative, 2),
    op("STA", Sta, IndirectY, 6),
    UNKNOWN,
    UNKNOWN,
    op("STY", Sty, ZeroPageX, 4),
    op("STA", Sta, ZeroPageX, 4),
    op("STX", Stx, ZeroPageY, 4),
    UNKNOWN,
    op("TYA", Tya, Implied, 2),
    op("STA", Sta, AbsoluteY, 5),
    op("TXS", Txs, Implied, 2),
    UNKNOWN,
    UNKNOWN,
    op("STA", Sta, AbsoluteX, 5),
    UNKNOWN,
    UNKNOWN,
    // 0xA0
    op("LDY", Ldy, Immediate, 2),
    op("LDA", Lda, IndirectX, 6),
    op("LDX", Ldx, Immediate, 2),
    UNKNOWN,
    op("LDY", Ldy, ZeroPage, 3),
    op("LDA", Lda, ZeroPage, 3),
    op("LDX", Ldx, ZeroPage, 3),
    UNKNOWN,
    op("TAY", Tay, Implied, 2),
    op("LDA", Lda, Immediate, 2),
    op("TAX", Tax, Implied, 2),
    UNKNOWN,
    op("LDY", Ldy, Absolute, 4),
    op("LDA", Lda, Absolute, 4),
    op("LDX", Ldx, Absolute, 4),
    UNKNOWN,
    // 0xB0
    op("BCS", Bcs, Relative, 2),
    op("LDA", Lda, IndirectY, 5),
    UNKNOWN,
    UNKNOWN,
    op("LDY", Ldy, ZeroPageX, 4),
    op("LDA", Lda, ZeroPageX, 4),
    op("LDX", Ldx, ZeroPageY, 4),
    UNKNOWN,
    op("CLV", Clv, Implied, 2),
    op("LDA", Lda, AbsoluteY, 4),
    op("TSX", Tsx, Implied, 2),
    UNKNOWN,
    op("LDY", Ldy, AbsoluteX, 4),
    op("LDA", Lda, AbsoluteX, 4),
    op("LDX", Ldx, AbsoluteY, 4),
    UNKNOWN,
    // 0xC0
    op("CPY", Cpy, Immediate, 2),
    op("CMP", Cmp, IndirectX, 6),
    UNKNOWN,
    UNKNOWN,
    op("CPY", Cpy, ZeroPage, 3),
    op("CMP", Cmp, ZeroPage, 3),
    op("DEC", Dec, ZeroPage, 5),
    UNKNOWN,
    op("INY", Iny, Implied, 2),
    op("CMP", Cmp, Immediate, 2),
    op("DEX", Dex, Implied, 2),
    UNKNOWN,
    op("CPY", Cpy, Absolute, 4),
    op("CMP", Cmp, Absolute, 4),
    op("DEC", Dec, Absolute, 6),
    UNKNOWN,
    // 0xD0
    op("BNE", Bne, Relative, 2),
    op("CMP", Cmp, IndirectY, 5),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("CMP", Cmp, ZeroPageX, 4),
    op("DEC", Dec, ZeroPageX, 6),
    UNKNOWN,
    op("CLD", Cld, Implied, 2),
    op("CMP", Cmp, AbsoluteY, 4),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("CMP", Cmp, AbsoluteX, 4),
    op("DEC", Dec, AbsoluteX, 7),
    UNKNOWN,
    // 0xE0
    op("CPX", Cpx, Immediate, 2),
    op("SBC", Sbc, IndirectX, 6),
    UNKNOWN,
    UNKNOWN,
    op("CPX", Cpx, ZeroPage, 3),
    op("SBC", Sbc, ZeroPage, 3),
    op("INC", Inc, ZeroPage, 5),
    UNKNOWN,
    op("INX", Inx, Implied, 2),
    op("SBC", Sbc, Immediate, 2),
    op("NOP", Nop, Implied, 2),
    UNKNOWN,
    op("CPX", Cpx, Absolute, 4),
    op("SBC", Sbc, Absolute, 4),
    op("INC", Inc, Absolute, 6),
    UNKNOWN,
    // 0xF0
    op("BEQ", Beq, Relative, 2),
    op("SBC", Sbc, IndirectY, 5),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("SBC", Sbc, ZeroPageX, 4),
    op("INC", Inc, ZeroPageX, 6),
    UNKNOWN,
    op("SED", Sed, Implied, 2),
    op("SBC", Sbc, AbsoluteY, 4),
    UNKNOWN,
    UNKNOWN,
    UNKNOWN,
    op("SBC", Sbc, AbsoluteX, 4),
    op("INC", Inc, AbsoluteX, 7),
    UNKNOWN,
];
