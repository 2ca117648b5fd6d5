//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function over the bound CPU core. By the time it runs,
//! the addressing mode has already placed the operand address in `addr_abs` (or the branch
//! offset in `addr_rel`) and advanced `pc` past the operand bytes.
//!
//! Every function returns 1 if the instruction takes the extra cycle on an indexed page
//! cross, 0 otherwise. The clock ANDs this with the addressing mode's own signal.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::execute::Core;
use crate::opcodes::Operation;
use crate::MemoryBus;

/// Runs `operation` against the core, returning its extra-cycle signal.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut Core<'_, M>, operation: Operation) -> u8 {
    match operation {
        Operation::Adc => alu::execute_adc(cpu),
        Operation::And => alu::execute_and(cpu),
        Operation::Asl => shifts::execute_asl(cpu),
        Operation::Bcc => branches::execute_bcc(cpu),
        Operation::Bcs => branches::execute_bcs(cpu),
        Operation::Beq => branches::execute_beq(cpu),
        Operation::Bit => alu::execute_bit(cpu),
        Operation::Bmi => branches::execute_bmi(cpu),
        Operation::Bne => branches::execute_bne(cpu),
        Operation::Bpl => branches::execute_bpl(cpu),
        Operation::Brk => control::execute_brk(cpu),
        Operation::Bvc => branches::execute_bvc(cpu),
        Operation::Bvs => branches::execute_bvs(cpu),
        Operation::Clc => flags::execute_clc(cpu),
        Operation::Cld => flags::execute_cld(cpu),
        Operation::Cli => flags::execute_cli(cpu),
        Operation::Clv => flags::execute_clv(cpu),
        Operation::Cmp => alu::execute_cmp(cpu),
        Operation::Cpx => alu::execute_cpx(cpu),
        Operation::Cpy => alu::execute_cpy(cpu),
        Operation::Dec => inc_dec::execute_dec(cpu),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),
        Operation::Eor => alu::execute_eor(cpu),
        Operation::Inc => inc_dec::execute_inc(cpu),
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Jmp => control::execute_jmp(cpu),
        Operation::Jsr => control::execute_jsr(cpu),
        Operation::Lda => load_store::execute_lda(cpu),
        Operation::Ldx => load_store::execute_ldx(cpu),
        Operation::Ldy => load_store::execute_ldy(cpu),
        Operation::Lsr => shifts::execute_lsr(cpu),
        Operation::Nop => control::execute_nop(cpu),
        Operation::Ora => alu::execute_ora(cpu),
        Operation::Pha => stack::execute_pha(cpu),
        Operation::Php => stack::execute_php(cpu),
        Operation::Pla => stack::execute_pla(cpu),
        Operation::Plp => stack::execute_plp(cpu),
        Operation::Rol => shifts::execute_rol(cpu),
        Operation::Ror => shifts::execute_ror(cpu),
        Operation::Rti => control::execute_rti(cpu),
        Operation::Rts => control::execute_rts(cpu),
        Operation::Sbc => alu::execute_sbc(cpu),
        Operation::Sec => flags::execute_sec(cpu),
        Operation::Sed => flags::execute_sed(cpu),
        Operation::Sei => flags::execute_sei(cpu),
        Operation::Sta => load_store::execute_sta(cpu),
        Operation::Stx => load_store::execute_stx(cpu),
        Operation::Sty => load_store::execute_sty(cpu),
        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Txs => transfer::execute_txs(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Unknown => control::execute_unknown(cpu),
    }
}
