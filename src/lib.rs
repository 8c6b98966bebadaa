//! Arbitrary-magnitude unsigned integers stored as a sequence of fixed-width
//! limbs, generic over the limb type.
//!
//! ```
//! use limb_bigint::BigIntU8;
//!
//! let sum = BigIntU8::new(200) + BigIntU8::new(100);
//! assert_eq!(sum.limbs(), &[44, 1]);
//! assert_eq!(format!("{:?}", sum), "BigInt<u8>(2 limbs)");
//! ```

pub mod bigint;
pub mod error;

pub use bigint::{
    BigInt, BigIntU128, BigIntU16, BigIntU32, BigIntU64, BigIntU8, BigIntUsize, BoundedInteger,
    Limb,
};
pub use error::{BigIntError, Result};
