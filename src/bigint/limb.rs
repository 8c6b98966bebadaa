use core::fmt;
use num_traits::ops::overflowing::OverflowingAdd;
use num_traits::{PrimInt, Unsigned};

/// An unsigned machine word usable as one digit of a [`BigInt`](super::BigInt).
pub trait Limb: PrimInt + Unsigned + OverflowingAdd + fmt::Debug + Send + Sync + 'static {
    const BIT_WIDTH: u32;

    /// Keep the low `BIT_WIDTH` bits of `value`.
    fn truncate_from(value: u128) -> Self;

    fn to_le_vec(self) -> Vec<u8>;

    /// Read a limb from at most `BIT_WIDTH / 8` little-endian bytes, zero
    /// extending a short slice.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_limb {
    ($($t:ty),*) => {
        $(
            impl Limb for $t {
                const BIT_WIDTH: u32 = <$t>::BITS;

                fn truncate_from(value: u128) -> Self {
                    value as $t
                }

                fn to_le_vec(self) -> Vec<u8> {
                    self.to_le_bytes().to_vec()
                }

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; core::mem::size_of::<$t>()];
                    buf[..bytes.len()].copy_from_slice(bytes);
                    <$t>::from_le_bytes(buf)
                }
            }
        )*
    };
}

impl_limb!(u8, u16, u32, u64, u128, usize);

/// A fixed-size primitive integer a [`BigInt`](super::BigInt) can be built
/// from. Only the magnitude is kept.
pub trait BoundedInteger: Copy {
    fn magnitude(self) -> u128;

    fn is_negative(self) -> bool;
}

macro_rules! impl_bounded_unsigned {
    ($($t:ty),*) => {
        $(
            impl BoundedInteger for $t {
                fn magnitude(self) -> u128 {
                    self as u128
                }

                fn is_negative(self) -> bool {
                    false
                }
            }
        )*
    };
}

macro_rules! impl_bounded_signed {
    ($($t:ty),*) => {
        $(
            impl BoundedInteger for $t {
                fn magnitude(self) -> u128 {
                    self.unsigned_abs() as u128
                }

                fn is_negative(self) -> bool {
                    self < 0
                }
            }
        )*
    };
}

impl_bounded_unsigned!(u8, u16, u32, u64, u128, usize);
impl_bounded_signed!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod test {
    use super::{BoundedInteger, Limb};

    #[test]
    fn test_bit_width() {
        assert_eq!(u8::BIT_WIDTH, 8);
        assert_eq!(u16::BIT_WIDTH, 16);
        assert_eq!(u32::BIT_WIDTH, 32);
        assert_eq!(u64::BIT_WIDTH, 64);
        assert_eq!(u128::BIT_WIDTH, 128);
        assert_eq!(usize::BIT_WIDTH, usize::BITS);
    }

    #[test]
    fn test_truncate_from() {
        assert_eq!(u8::truncate_from(0x1234), 0x34);
        assert_eq!(u16::truncate_from(0x1_0002), 2);
        assert_eq!(u128::truncate_from(u128::MAX), u128::MAX);
    }

    #[test]
    fn test_le_bytes() {
        assert_eq!(0x0201u16.to_le_vec(), vec![1, 2]);
        assert_eq!(u32::from_le_slice(&[1, 2]), 0x0201);
        assert_eq!(u64::from_le_slice(&[]), 0);
        assert_eq!(u8::from_le_slice(&[0xff]), 0xff);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(5u8.magnitude(), 5);
        assert_eq!((-5i8).magnitude(), 5);
        assert_eq!(i8::MIN.magnitude(), 128);
        assert_eq!(i128::MIN.magnitude(), 1u128 << 127);
        assert_eq!(u128::MAX.magnitude(), u128::MAX);
        assert!((-1i64).is_negative());
        assert!(!0i64.is_negative());
        assert!(!u64::MAX.is_negative());
    }
}
