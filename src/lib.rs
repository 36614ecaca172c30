//! Conversion of IEEE-754 floats into a 32-bit custom format with a 1-bit
//! sign, a 10-bit exponent biased by 511 and a 21-bit fractional mantissa.
//!
//! Unlike IEEE-754 there is no hidden bit: the mantissa field holds the
//! fractional part of a significand in [1.0, 2.0). Zero is encoded as the
//! all-zero word regardless of its sign.

mod encode;
mod error;
mod format;
mod util;

pub use encode::{classify, encode, encode_or_zero, Encoding};
pub use error::Error;
pub use format::{describe, format, Report};

pub type Result<T> = std::result::Result<T, Error>;

pub const BIAS: i32 = 511;
pub const EXP_WIDTH: u32 = 10;
pub const SIG_WIDTH: u32 = 21;
pub const EXP_MAX: u32 = (1 << EXP_WIDTH) - 1;
pub const SIG_MASK: u32 = (1 << SIG_WIDTH) - 1;
const SIGN_SHIFT: u32 = EXP_WIDTH + SIG_WIDTH;

/// A word of the custom format split into its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Custom {
    sign: bool,
    exp: u32,
    sig: u32,
}

impl Custom {
    pub fn zero() -> Custom {
        Custom {
            sign: false,
            exp: 0,
            sig: 0,
        }
    }

    pub fn new(value: u32) -> Custom {
        let sign = (value >> SIGN_SHIFT) & 1 != 0;
        let exp = (value >> SIG_WIDTH) & EXP_MAX;
        let sig = value & SIG_MASK;

        Custom { sign, exp, sig }
    }

    /// Builds a word from raw fields. `exp` and `sig` are masked to their
    /// widths, so overflowing bits are dropped instead of carried.
    pub fn from_parts(sign: bool, exp: u32, sig: u32) -> Custom {
        Custom {
            sign,
            exp: exp & EXP_MAX,
            sig: sig & SIG_MASK,
        }
    }

    pub fn sign(self) -> bool {
        self.sign
    }

    pub fn exp(self) -> u32 {
        self.exp
    }

    pub fn sig(self) -> u32 {
        self.sig
    }

    pub fn to_bits(self) -> u32 {
        ((self.sign as u32) << SIGN_SHIFT) | (self.exp << SIG_WIDTH) | self.sig
    }
}

impl From<u32> for Custom {
    fn from(u: u32) -> Custom {
        Custom::new(u)
    }
}

impl Into<u32> for Custom {
    fn into(self) -> u32 {
        self.to_bits()
    }
}
