//! # Addressing Modes
//!
//! This module defines the 12 addressing modes of the 6502 and the resolvers
//! that turn the operand bytes following an opcode into an effective address
//! (`addr_abs`) or a branch offset (`addr_rel`).
//!
//! Every resolver consumes its operand bytes at `pc`, advancing it, and returns
//! 1 when the resolution crossed a page boundary and the instruction may owe an
//! extra cycle, 0 otherwise. The cycle is only charged when the operation
//! agrees (the clock ANDs both signals).

use crate::execute::Core;
use crate::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand. Shifts and rotates in this mode act on the accumulator.
    ///
    /// Examples: CLC, RTS, ASL
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(self) -> u8 {
        1 + self.operand_bytes()
    }

    /// Three-letter tag shown in braces by the disassembler.
    pub const fn tag(self) -> &'static str {
        match self {
            AddressingMode::Implied => "IMP",
            AddressingMode::Immediate => "IMM",
            AddressingMode::ZeroPage => "ZP0",
            AddressingMode::ZeroPageX => "ZPX",
            AddressingMode::ZeroPageY => "ZPY",
            AddressingMode::Relative => "REL",
            AddressingMode::Absolute => "ABS",
            AddressingMode::AbsoluteX => "ABX",
            AddressingMode::AbsoluteY => "ABY",
            AddressingMode::Indirect => "IND",
            AddressingMode::IndirectX => "IZX",
            AddressingMode::IndirectY => "IZY",
        }
    }

    /// Runs this mode's resolver against the CPU, returning the extra-cycle signal.
    pub(crate) fn resolve<M: MemoryBus>(self, cpu: &mut Core<'_, M>) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate => {
                cpu.state.addr_abs = cpu.state.pc;
                cpu.state.pc = cpu.state.pc.wrapping_add(1);
                0
            }
            AddressingMode::ZeroPage => {
                cpu.state.addr_abs = cpu.next_byte() as u16;
                0
            }
            AddressingMode::ZeroPageX => {
                let base = cpu.next_byte();
                cpu.state.addr_abs = base.wrapping_add(cpu.state.x) as u16;
                0
            }
            AddressingMode::ZeroPageY => {
                let base = cpu.next_byte();
                cpu.state.addr_abs = base.wrapping_add(cpu.state.y) as u16;
                0
            }
            AddressingMode::Relative => {
                let offset = cpu.next_byte() as i8;
                cpu.state.addr_rel = offset as i16 as u16;
                0
            }
            AddressingMode::Absolute => {
                cpu.state.addr_abs = cpu.next_word();
                0
            }
            AddressingMode::AbsoluteX => {
                let base = cpu.next_word();
                let index = cpu.state.x;
                indexed(cpu, base, index)
            }
            AddressingMode::AbsoluteY => {
                let base = cpu.next_word();
                let index = cpu.state.y;
                indexed(cpu, base, index)
            }
            AddressingMode::Indirect => {
                let ptr = cpu.next_word();
                let lo = cpu.read(ptr) as u16;
                // NMOS bug: the high byte never carries into the next page
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = cpu.read(hi_addr) as u16;
                cpu.state.addr_abs = (hi << 8) | lo;
                0
            }
            AddressingMode::IndirectX => {
                let zp = cpu.next_byte().wrapping_add(cpu.state.x);
                cpu.state.addr_abs = cpu.read_zero_page_word(zp);
                0
            }
            AddressingMode::IndirectY => {
                let zp = cpu.next_byte();
                let base = cpu.read_zero_page_word(zp);
                let index = cpu.state.y;
                indexed(cpu, base, index)
            }
        }
    }
}

/// Adds an index register to `base`, storing the result in `addr_abs` and
/// reporting whether the high byte changed.
fn indexed<M: MemoryBus>(cpu: &mut Core<'_, M>, base: u16, index: u8) -> u8 {
    let addr = base.wrapping_add(index as u16);
    cpu.state.addr_abs = addr;
    u8::from(page_crossed(base, addr))
}

/// True when `a` and `b` lie in different 256-byte pages.
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CpuState, FlatMemory};

    fn resolve(mode: AddressingMode, state: &mut CpuState, mem: &mut FlatMemory) -> u8 {
        let mut cpu = Core::new(state, mem);
        mode.resolve(&mut cpu)
    }

    fn state_at(pc: u16) -> CpuState {
        let mut state = CpuState::new();
        state.pc = pc;
        state
    }

    #[test]
    fn test_sizes() {
        assert_eq!(AddressingMode::Implied.size_bytes(), 1);
        assert_eq!(AddressingMode::Relative.size_bytes(), 2);
        assert_eq!(AddressingMode::Indirect.size_bytes(), 3);
    }

    #[test]
    fn test_immediate_points_at_operand() {
        let mut mem = FlatMemory::new();
        let mut state = state_at(0x8001);

        assert_eq!(resolve(AddressingMode::Immediate, &mut state, &mut mem), 0);
        assert_eq!(state.addr_abs, 0x8001);
        assert_eq!(state.pc, 0x8002);
    }

    #[test]
    fn test_zero_page_x_wraps_within_page() {
        let mut mem = FlatMemory::new();
        mem.write(0x8001, 0xF0);
        let mut state = state_at(0x8001);
        state.x = 0x20;

        resolve(AddressingMode::ZeroPageX, &mut state, &mut mem);
        assert_eq!(state.addr_abs, 0x0010);
    }

    #[test]
    fn test_relative_sign_extends() {
        let mut mem = FlatMemory::new();
        mem.write(0x8001, 0xFE);
        let mut state = state_at(0x8001);

        resolve(AddressingMode::Relative, &mut state, &mut mem);
        assert_eq!(state.addr_rel, 0xFFFE);
        assert_eq!(state.pc, 0x8002);
    }

    #[test]
    fn test_absolute_x_page_cross_signal() {
        let mut mem = FlatMemory::new();
        mem.load(0x8001, &[0xF0, 0x12]);

        let mut state = state_at(0x8001);
        state.x = 0x0F;
        assert_eq!(resolve(AddressingMode::AbsoluteX, &mut state, &mut mem), 0);
        assert_eq!(state.addr_abs, 0x12FF);

        let mut state = state_at(0x8001);
        state.x = 0x10;
        assert_eq!(resolve(AddressingMode::AbsoluteX, &mut state, &mut mem), 1);
        assert_eq!(state.addr_abs, 0x1300);
    }

    #[test]
    fn test_indirect_page_wrap_bug() {
        let mut mem = FlatMemory::new();
        mem.load(0x8001, &[0xFF, 0x10]);
        mem.write(0x10FF, 0x34);
        mem.write(0x1000, 0x12);
        mem.write(0x1100, 0x56);
        let mut state = state_at(0x8001);

        resolve(AddressingMode::Indirect, &mut state, &mut mem);
        assert_eq!(state.addr_abs, 0x1234);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut mem = FlatMemory::new();
        mem.write(0x8001, 0xFE);
        mem.write(0x00FF, 0x00);
        mem.write(0x0000, 0x20);
        let mut state = state_at(0x8001);
        state.x = 0x01;

        resolve(AddressingMode::IndirectX, &mut state, &mut mem);
        assert_eq!(state.addr_abs, 0x2000);
    }

    #[test]
    fn test_indirect_y_page_cross_signal() {
        let mut mem = FlatMemory::new();
        mem.write(0x8001, 0x40);
        mem.write(0x0040, 0xFF);
        mem.write(0x0041, 0x20);
        let mut state = state_at(0x8001);
        state.y = 0x01;

        assert_eq!(resolve(AddressingMode::IndirectY, &mut state, &mut mem), 1);
        assert_eq!(state.addr_abs, 0x2100);
    }
}
