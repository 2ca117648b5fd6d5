//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a full listing line: `$<address>: <instruction> {<MODE>}`.
pub fn format_line(instr: &Instruction) -> String {
    format!(
        "${:04X}: {} {{{}}}",
        instr.address,
        format_instruction(instr),
        instr.addressing_mode.tag()
    )
}

/// Format a single instruction as assembly text, without address or mode tag
///
/// # Returns
///
/// The mnemonic followed by the operand in conventional 6502 syntax
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

fn byte(instr: &Instruction) -> u8 {
    instr.operand_bytes.first().copied().unwrap_or(0)
}

fn word(instr: &Instruction) -> u16 {
    match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        [lo] => *lo as u16,
        [] => 0,
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    match instr.addressing_mode {
        Implied => String::new(),
        Immediate => format!("#${:02X}", byte(instr)),
        ZeroPage => format!("${:02X}", byte(instr)),
        ZeroPageX => format!("${:02X}, X", byte(instr)),
        ZeroPageY => format!("${:02X}, Y", byte(instr)),
        IndirectX => format!("(${:02X}, X)", byte(instr)),
        IndirectY => format!("(${:02X}), Y", byte(instr)),
        Relative => {
            // Target is relative to the byte after the operand
            let offset = byte(instr);
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add(offset as i8 as u16);
            format!("${:02X} [${:04X}]", offset, target)
        }
        Absolute => format!("${:04X}", word(instr)),
        AbsoluteX => format!("${:04X}, X", word(instr)),
        AbsoluteY => format!("${:04X}, Y", word(instr)),
        Indirect => format!("(${:04X})", word(instr)),
    }
}
