use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The biased exponent does not fit in the 10-bit field.
    #[error("exponent {exponent} is out of the 10-bit range [0, 1023]")]
    ExponentOutOfRange { exponent: i32 },

    #[error("NaN and infinity cannot be encoded")]
    NotFinite,
}
