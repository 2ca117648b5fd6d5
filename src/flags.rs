//! # Processor Status Flags
//!
//! The 6502 status register packs eight single-bit conditions into one byte.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: U (unused, forced to 1 whenever flags are touched)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal, stored but never acted upon)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

/// A single bit of the status register.
///
/// The discriminant of each variant is its bit mask, so `flag as u8` can be
/// combined directly with a raw status byte.
///
/// # Examples
///
/// ```
/// use cpu6502::Flag;
///
/// assert_eq!(Flag::Carry.mask(), 0x01);
/// assert_eq!(Flag::Negative.mask(), 0x80);
/// assert_eq!(Flag::ALL.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    /// Set on unsigned carry out of bit 7, or "no borrow" after subtraction.
    Carry = 1 << 0,

    /// Set when the 8-bit result is zero.
    Zero = 1 << 1,

    /// Blocks maskable interrupts (IRQ) while set.
    InterruptDisable = 1 << 2,

    /// Decimal mode. Present for completeness; arithmetic always runs in binary.
    Decimal = 1 << 3,

    /// Only meaningful in status copies pushed by BRK/PHP.
    Break = 1 << 4,

    /// Unused bit, always reads as 1.
    Unused = 1 << 5,

    /// Signed (two's complement) overflow from ADC/SBC, or bit 6 of the BIT operand.
    Overflow = 1 << 6,

    /// Bit 7 of the result.
    Negative = 1 << 7,
}

impl Flag {
    /// Every flag, lowest bit first.
    pub const ALL: [Flag; 8] = [
        Flag::Carry,
        Flag::Zero,
        Flag::InterruptDisable,
        Flag::Decimal,
        Flag::Break,
        Flag::Unused,
        Flag::Overflow,
        Flag::Negative,
    ];

    /// Returns the bit mask of this flag within the status byte.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Single-letter name used in status dumps (`NV-BDIZC`).
    pub const fn letter(self) -> char {
        match self {
            Flag::Carry => 'C',
            Flag::Zero => 'Z',
            Flag::InterruptDisable => 'I',
            Flag::Decimal => 'D',
            Flag::Break => 'B',
            Flag::Unused => '-',
            Flag::Overflow => 'V',
            Flag::Negative => 'N',
        }
    }
}
