//! # Status Register
//!
//! The 6502 status register packs eight condition flags into one byte:
//!
//! ```text
//! bit  7 6 5 4 3 2 1 0
//!      N V U B D I Z C
//! ```
//!
//! Each flag is an independent boolean keyed by its bit offset. Unlike real
//! silicon, bits 4 (B) and 5 (U) are stored like any other flag so that
//! `FlagRegister::from_byte(b).to_byte() == b` holds for every byte; PHP/PLP
//! move the register verbatim.
//!
//! This module also holds the flag-update functions that the instruction
//! table attaches to each opcode and the engine applies after execution.

use std::fmt;

/// A single processor status flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Carry
    C,
    /// Zero
    Z,
    /// Interrupt disable
    I,
    /// Decimal mode
    D,
    /// Break
    B,
    /// Unused
    U,
    /// Overflow
    V,
    /// Negative
    N,
}

impl Flag {
    /// All flags in bit order (bit 0 first).
    pub const ALL: [Flag; 8] = [
        Flag::C,
        Flag::Z,
        Flag::I,
        Flag::D,
        Flag::B,
        Flag::U,
        Flag::V,
        Flag::N,
    ];

    /// Bit offset of this flag within the packed status byte.
    pub const fn offset(self) -> u8 {
        match self {
            Flag::C => 0,
            Flag::Z => 1,
            Flag::I => 2,
            Flag::D => 3,
            Flag::B => 4,
            Flag::U => 5,
            Flag::V => 6,
            Flag::N => 7,
        }
    }

    const fn mask(self) -> u8 {
        1 << self.offset()
    }

    const fn letter(self) -> char {
        match self {
            Flag::C => 'C',
            Flag::Z => 'Z',
            Flag::I => 'I',
            Flag::D => 'D',
            Flag::B => 'B',
            Flag::U => 'U',
            Flag::V => 'V',
            Flag::N => 'N',
        }
    }
}

/// The packed processor status register.
///
/// # Examples
///
/// ```
/// use cycle6502::{Flag, FlagRegister};
///
/// let mut flags = FlagRegister::new();
/// flags.set(Flag::N, true);
/// flags.set(Flag::C, true);
///
/// assert_eq!(flags.to_byte(), 0b1000_0001);
/// assert_eq!(FlagRegister::from_byte(0b1000_0001), flags);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlagRegister {
    bits: u8,
}

impl FlagRegister {
    /// Creates a register with every flag cleared.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Builds a register whose flag at offset *i* equals bit *i* of `value`.
    pub const fn from_byte(value: u8) -> Self {
        Self { bits: value }
    }

    /// Sets or clears a flag.
    pub fn set(&mut self, flag: Flag, value: bool) {
        if value {
            self.bits |= flag.mask();
        } else {
            self.bits &= !flag.mask();
        }
    }

    /// Returns the current value of a flag.
    pub fn get(&self, flag: Flag) -> bool {
        self.bits & flag.mask() != 0
    }

    /// Clears every flag.
    pub fn reset(&mut self) {
        self.bits = 0;
    }

    /// Packs the register into a byte, bit *i* holding the flag at offset *i*.
    pub const fn to_byte(&self) -> u8 {
        self.bits
    }

    /// Overwrites every flag from the corresponding bit of `value`.
    pub fn load_byte(&mut self, value: u8) {
        self.bits = value;
    }
}

impl From<u8> for FlagRegister {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<FlagRegister> for u8 {
    fn from(flags: FlagRegister) -> Self {
        flags.to_byte()
    }
}

impl fmt::Display for FlagRegister {
    /// Renders the register as an `NVUBDIZC` strip, `-` for clear flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in Flag::ALL.iter().rev() {
            let c = if self.get(*flag) { flag.letter() } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// A post-execution flag update, applied to an instruction's result.
///
/// The result is passed un-truncated (`u16`) so that `CarryIfOverflow` can see
/// bit 8 of an addition. Zero and Negative only look at the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagUpdate {
    /// Z = (result & 0xFF) == 0
    ZeroIfZero,
    /// N = bit 7 of result
    NegativeIfBit7,
    /// C |= result > 0xFF. Never clears an already-set carry.
    CarryIfOverflow,
}

impl FlagUpdate {
    /// Applies this update to `flags` for the given result.
    pub fn apply(self, flags: &mut FlagRegister, result: u16) {
        match self {
            FlagUpdate::ZeroIfZero => flags.set(Flag::Z, result & 0xFF == 0),
            FlagUpdate::NegativeIfBit7 => flags.set(Flag::N, result & 0x80 != 0),
            FlagUpdate::CarryIfOverflow => {
                if !flags.get(Flag::C) {
                    flags.set(Flag::C, result > 0xFF);
                }
            }
        }
    }
}

/// Instructions with no deferred flag effect.
pub const NO_FLAGS: &[FlagUpdate] = &[];

/// Zero and Negative from the result.
pub const ZN_FLAGS: &[FlagUpdate] = &[FlagUpdate::ZeroIfZero, FlagUpdate::NegativeIfBit7];

/// Zero, Negative, and carry-out for ADC/SBC.
pub const ZNC_FLAGS: &[FlagUpdate] = &[
    FlagUpdate::ZeroIfZero,
    FlagUpdate::NegativeIfBit7,
    FlagUpdate::CarryIfOverflow,
];

/// Runs an ordered list of flag updates against `result`.
pub fn apply_all(updates: &[FlagUpdate], flags: &mut FlagRegister, result: u16) {
    for update in updates {
        update.apply(flags, result);
    }
}
