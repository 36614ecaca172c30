use crate::util::frexp;
use crate::{Custom, Error, Result, BIAS, EXP_MAX, SIG_WIDTH};
use log::{trace, warn};

/// Outcome of encoding a single value.
///
/// `Zero` and `OutOfRange` both pack to the all-zero word in
/// [`encode_or_zero`], so this type keeps them apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Encoding {
    Zero,
    Encoded(Custom),
    OutOfRange(Error),
}

impl Encoding {
    pub fn to_bits(self) -> Option<u32> {
        match self {
            Encoding::Zero => Some(0),
            Encoding::Encoded(c) => Some(c.to_bits()),
            Encoding::OutOfRange(_) => None,
        }
    }
}

/// Encodes `value` into the custom 32-bit format.
///
/// Any value comparing equal to zero, `-0.0` included, gives `0`. The
/// mantissa is truncated toward zero, never rounded.
pub fn encode<F: Into<f64>>(value: F) -> Result<u32> {
    match classify(value) {
        Encoding::Zero => Ok(0),
        Encoding::Encoded(c) => Ok(c.to_bits()),
        Encoding::OutOfRange(err) => Err(err),
    }
}

/// Like [`encode`], but reports failures through `log` and falls back to
/// the all-zero word.
pub fn encode_or_zero<F: Into<f64>>(value: F) -> u32 {
    let value: f64 = value.into();

    encode(value).unwrap_or_else(|err| {
        warn!("cannot encode {}: {}", value, err);
        0
    })
}

pub fn classify<F: Into<f64>>(value: F) -> Encoding {
    let value: f64 = value.into();

    if value == 0.0 {
        return Encoding::Zero;
    }
    if !value.is_finite() {
        return Encoding::OutOfRange(Error::NotFinite);
    }

    let sign = value.is_sign_negative();
    let (norm, exp) = frexp(value.abs());

    let biased = exp + (BIAS - 1);
    if biased < 0 || biased > EXP_MAX as i32 {
        return Encoding::OutOfRange(Error::ExponentOutOfRange { exponent: biased });
    }

    // [0.5, 1.0) -> [0.0, 1.0)
    let mantissa = norm * 2.0 - 1.0;
    let sig = (mantissa * (1u32 << SIG_WIDTH) as f64) as u32;

    let custom = Custom::from_parts(sign, biased as u32, sig);
    trace!("encoded {} as 0x{:08x}", value, custom.to_bits());

    Encoding::Encoded(custom)
}
