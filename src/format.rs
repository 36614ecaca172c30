use std::fmt;

use crate::{encode_or_zero, Custom};

/// Printable breakdown of an encoded word next to the value it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report<F> {
    value: F,
    word: u32,
}

pub fn format<F>(value: F, encoded: u32) -> Report<F> {
    Report {
        value,
        word: encoded,
    }
}

/// Encodes `value` and formats the result. Values that cannot be encoded
/// are logged and reported as the all-zero word.
pub fn describe<F: Into<f64> + Copy>(value: F) -> Report<F> {
    format(value, encode_or_zero(value))
}

impl<F> Report<F> {
    pub fn value(&self) -> &F {
        &self.value
    }

    pub fn word(&self) -> u32 {
        self.word
    }

    pub fn sign(&self) -> u32 {
        Custom::new(self.word).sign() as u32
    }

    pub fn exponent(&self) -> u32 {
        Custom::new(self.word).exp()
    }

    pub fn mantissa(&self) -> u32 {
        Custom::new(self.word).sig()
    }

    pub fn binary(&self) -> String {
        format!("{:032b}", self.word)
    }

    /// Lowercase, without prefix or leading zeros.
    pub fn mantissa_hex(&self) -> String {
        format!("{:x}", self.mantissa())
    }

    pub fn mantissa_binary(&self) -> String {
        format!("{:021b}", self.mantissa())
    }
}

impl<F: fmt::Display> fmt::Display for Report<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Value:           {}", self.value)?;
        writeln!(f, "Binary:          {}", self.binary())?;
        writeln!(f, "Sign:            {}", self.sign())?;
        writeln!(f, "Exponent (bias): {}", self.exponent())?;
        writeln!(f, "Mantissa (hex):  0x{}", self.mantissa_hex())?;
        writeln!(f, "Mantissa (bin):  {}", self.mantissa_binary())
    }
}

#[cfg(test)]
mod test {
    extern crate regex;

    use super::*;
    use crate::encode;
    use regex::Regex;

    #[test]
    fn one() {
        let r = format(1.0f32, encode(1.0f32).unwrap());
        assert_eq!(r.word(), 0x3FE0_0000);
        assert_eq!(r.binary(), "00111111111000000000000000000000");
        assert_eq!(r.sign(), 0);
        assert_eq!(r.exponent(), 511);
        assert_eq!(r.mantissa(), 0);
        assert_eq!(r.mantissa_hex(), "0");
        assert_eq!(r.mantissa_binary(), "000000000000000000000");
    }

    #[test]
    fn minus_two() {
        let r = describe(-2.0f32);
        assert_eq!(r.sign(), 1);
        assert_eq!(r.exponent(), 512);
        assert_eq!(r.mantissa_hex(), "0");
        assert_eq!(r.binary(), "11000000000000000000000000000000");
    }

    #[test]
    fn mantissa_renderings() {
        // 1.75 = 0.875 * 2^1, mantissa 0.75 -> 0b11 << 19
        let r = describe(1.75f32);
        assert_eq!(r.mantissa(), 0x18_0000);
        assert_eq!(r.mantissa_hex(), "180000");
        assert_eq!(r.mantissa_binary(), "110000000000000000000");

        let r = format(0.0, 0xFFFF_FFFF);
        assert_eq!(r.mantissa_hex(), "1fffff");
        assert_eq!(r.mantissa_binary(), "1".repeat(21));
        assert_eq!(r.exponent(), 1023);
        assert_eq!(r.sign(), 1);
    }

    #[test]
    fn keeps_value_as_given() {
        let r = describe(0.1f32);
        assert_eq!(*r.value(), 0.1f32);
        assert!(r.to_string().starts_with("Value:           0.1\n"));
    }

    #[test]
    fn out_of_range_renders_zero_word() {
        let r = describe(1.0e300f64);
        assert_eq!(r.word(), 0);
        assert_eq!(r.exponent(), 0);
        assert_eq!(r.binary(), "0".repeat(32));
    }

    #[test]
    fn display_layout() {
        let text = describe(-2.0f32).to_string();
        let expected = "\
Value:           -2
Binary:          11000000000000000000000000000000
Sign:            1
Exponent (bias): 512
Mantissa (hex):  0x0
Mantissa (bin):  000000000000000000000
";
        assert_eq!(text, expected);
    }

    #[test]
    fn rendered_fields_are_well_formed() {
        use rand::Rng;

        let re = Regex::new(
            r"(?m)^Binary:          ([01]{32})\nSign:            ([01])\nExponent \(bias\): ([0-9]+)\nMantissa \(hex\):  0x([0-9a-f]+)\nMantissa \(bin\):  ([01]{21})$",
        )
        .unwrap();

        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let v: f32 = rng.gen_range(-1.0e6f32, 1.0e6);
            let r = describe(v);
            let text = r.to_string();
            let caps = re.captures(&text).unwrap();

            let binary = u32::from_str_radix(&caps[1], 2).unwrap();
            let sign: u32 = caps[2].parse().unwrap();
            let exp: u32 = caps[3].parse().unwrap();
            let hex = u32::from_str_radix(&caps[4], 16).unwrap();
            let bin = u32::from_str_radix(&caps[5], 2).unwrap();

            assert_eq!(binary, r.word());
            assert_eq!(sign, (r.word() >> 31) & 1);
            assert_eq!(exp, (r.word() >> 21) & 0x3FF);
            assert_eq!(hex, r.word() & 0x1F_FFFF);
            assert_eq!(hex, bin);
            assert!(!caps[4].starts_with('0') || &caps[4] == "0");
        }
    }
}
