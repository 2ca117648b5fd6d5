//! # CPU Context
//!
//! The mutable register file of the 6502 together with the scratch values the
//! clock uses while an instruction is in flight.
//!
//! All 8-bit fields wrap modulo 256 and `pc` wraps modulo 65536; every
//! arithmetic update in the crate goes through `wrapping_*` to keep that true.

use std::fmt;

use crate::Flag;

/// Register, flag, and scratch state of one 6502.
///
/// The flag byte is only ever changed bit-by-bit through [`CpuState::set_flag`],
/// except for the whole-byte loads performed by reset, PLP, and RTI.
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuState, Flag};
///
/// let mut state = CpuState::new();
/// state.set_flag(Flag::Carry, true);
/// assert_eq!(state.get_flag(Flag::Carry), 1);
/// assert_eq!(state.get_flag(Flag::Zero), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (offset into page 0x01)
    pub sp: u8,

    /// Program counter, always the address of the next byte to fetch
    pub pc: u16,

    /// Packed status flags (NV-BDIZC)
    pub status: u8,

    /// Effective address produced by the last addressing-mode resolution
    pub addr_abs: u16,

    /// Sign-extended branch offset produced by relative addressing
    pub addr_rel: u16,

    /// Most recently fetched opcode
    pub opcode: u8,

    /// Ticks still owed by the in-flight instruction or interrupt sequence
    pub cycles: u8,

    /// Total ticks since construction (telemetry only)
    pub cycle_count: u64,
}

impl CpuState {
    /// Creates a zeroed context with only the Unused flag set.
    ///
    /// This is not the reset state: `pc` and `sp` are only meaningful after
    /// [`CPU::reset`](crate::CPU::reset) has loaded them.
    pub const fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0x00,
            pc: 0x0000,
            status: Flag::Unused.mask(),
            addr_abs: 0x0000,
            addr_rel: 0x0000,
            opcode: 0x00,
            cycles: 0,
            cycle_count: 0,
        }
    }

    /// Returns 1 if `flag` is set, 0 otherwise.
    pub fn get_flag(&self, flag: Flag) -> u8 {
        u8::from(self.status & flag.mask() != 0)
    }

    /// Sets or clears exactly one bit of the status register.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.status |= flag.mask();
        } else {
            self.status &= !flag.mask();
        }
    }

    /// Updates Zero and Negative from an 8-bit result.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set_flag(Flag::Zero, value == 0);
        self.set_flag(Flag::Negative, value & 0x80 != 0);
    }
}

impl Default for CpuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the state as a single trace line, e.g.
/// `A:00 X:00 Y:00 SP:FC PC:8000 P:--1-----`.
impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} PC:{:04X} P:",
            self.a, self.x, self.y, self.sp, self.pc
        )?;
        for flag in Flag::ALL.iter().rev() {
            let c = match (flag, self.get_flag(*flag)) {
                (Flag::Unused, 1) => '1',
                (_, 1) => flag.letter(),
                _ => '-',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
