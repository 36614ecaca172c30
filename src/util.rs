use either::Either;

const F64_EXP_MASK: u64 = 0x7FF0_0000_0000_0000;
const F64_SIG_WIDTH: u32 = 52;
// exponent field of 0.5
const F64_HALF_EXP: u64 = 1022;
// 2^64, used to lift subnormals into the normal range
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Splits a finite, nonzero `v` into `(norm, exp)` with `v == norm * 2^exp`
/// and `0.5 <= |norm| < 1.0`. The sign of `v` is carried by `norm`.
pub(crate) fn frexp(v: f64) -> (f64, i32) {
    debug_assert!(v != 0.0 && v.is_finite(), "frexp(): got {}", v);

    match split_exp(v) {
        Either::Left(exp) => {
            let bits = v.to_bits();
            let norm = f64::from_bits((bits & !F64_EXP_MASK) | (F64_HALF_EXP << F64_SIG_WIDTH));
            (norm, exp)
        }
        Either::Right(scaled) => {
            let (norm, exp) = frexp(scaled);
            (norm, exp - 64)
        }
    }
}

// Left is the frexp exponent of a normal value,
// Right is a subnormal value rescaled into the normal range.
fn split_exp(v: f64) -> Either<i32, f64> {
    let raw_exp = ((v.to_bits() & F64_EXP_MASK) >> F64_SIG_WIDTH) as i32;

    if raw_exp == 0 {
        Either::Right(v * TWO_POW_64)
    } else {
        Either::Left(raw_exp - F64_HALF_EXP as i32)
    }
}
