use crate::bigint::{BigInt, BoundedInteger, Limb};
use crate::error::{BigIntError, Result};
use core::any::type_name;
use num_bigint::BigUint;
use tracing::{debug, trace};

impl<L: Limb> BigInt<L> {
    /// Build a `BigInt` from any primitive integer.
    ///
    /// Only the magnitude is stored, a negative input loses its sign. Values
    /// below [`Self::MAX_LIMB_MAGNITUDE`] take a single limb; larger ones are
    /// split into base `2^L::BIT_WIDTH` digits, least significant first.
    ///
    /// # Panics
    ///
    /// Panics with [`BigIntError::LimbCountOverflow`] if the limb count would
    /// not fit in a `usize`.
    pub fn new<S: BoundedInteger>(value: S) -> Self {
        Self::try_new(value).unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_new<S: BoundedInteger>(value: S) -> Result<Self> {
        if value.is_negative() {
            debug!(
                limb = type_name::<L>(),
                "negative input, storing its magnitude only"
            );
        }

        let magnitude = value.magnitude();
        if magnitude < Self::MAX_LIMB_MAGNITUDE {
            return Ok(Self {
                limbs: vec![L::truncate_from(magnitude)],
            });
        }

        let mut limbs = Vec::new();
        let mut count: usize = 0;
        let mut remainder = magnitude;
        while remainder != 0 {
            count = count
                .checked_add(1)
                .ok_or(BigIntError::LimbCountOverflow)?;
            limbs.push(L::truncate_from(remainder));
            // a shift by the full u128 width leaves nothing behind
            remainder = remainder.checked_shr(L::BIT_WIDTH).unwrap_or(0);
        }
        trace!(limb = type_name::<L>(), count, "split input into limbs");

        Ok(Self { limbs })
    }

    /// The empty limb sequence. Adding it to anything is a no-op.
    pub fn new_empty() -> Self {
        Self { limbs: Vec::new() }
    }

    /// The single limb `[0]`.
    pub fn zero() -> Self {
        Self::new(0u8)
    }

    /// Wrap little-endian limbs as they are, without trimming.
    pub fn from_limbs(limbs: Vec<L>) -> Self {
        Self { limbs }
    }

    /// Zero becomes `[0]`, like [`Self::zero`].
    pub fn from_biguint(value: &BigUint) -> Self {
        let limb_bytes = (L::BIT_WIDTH / 8) as usize;
        let limbs = value
            .to_bytes_le()
            .chunks(limb_bytes)
            .map(L::from_le_slice)
            .collect();
        Self { limbs }
    }

    pub fn limbs(&self) -> &[L] {
        &self.limbs
    }

    pub fn into_limbs(self) -> Vec<L> {
        self.limbs
    }

    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }
}

impl<L: Limb> Default for BigInt<L> {
    fn default() -> Self {
        Self::new_empty()
    }
}

macro_rules! impl_from_bounded {
    ($($t:ty),*) => {
        $(
            impl<L: Limb> From<$t> for BigInt<L> {
                fn from(value: $t) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

impl_from_bounded!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<L: Limb> From<&BigInt<L>> for BigUint {
    fn from(value: &BigInt<L>) -> Self {
        let bytes: Vec<u8> = value
            .limbs
            .iter()
            .flat_map(|limb| limb.to_le_vec())
            .collect();
        BigUint::from_bytes_le(&bytes)
    }
}
