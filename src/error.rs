use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// More limbs would be needed than a `Vec` can index.
    #[error("too many limbs required to store this value")]
    LimbCountOverflow,
}

pub type Result<T> = core::result::Result<T, BigIntError>;
