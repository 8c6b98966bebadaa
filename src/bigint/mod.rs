mod add;
mod limb;
mod std;

use core::any::type_name;
use core::fmt;

pub use limb::{BoundedInteger, Limb};

/// An arbitrary-magnitude unsigned integer stored as little-endian limbs of
/// type `L`.
///
/// The value is positional with radix `2^L::BIT_WIDTH`: limb `i` is worth
/// `limbs[i] << (i * L::BIT_WIDTH)`. An empty limb buffer is a valid zero,
/// distinct from the single limb `[0]`.
///
/// Cloning deep copies the limb buffer, so clones never observe each other's
/// additions.
#[derive(Clone)]
pub struct BigInt<L: Limb> {
    limbs: Vec<L>,
}

impl<L: Limb> BigInt<L> {
    pub const BIT_WIDTH: u32 = L::BIT_WIDTH;
    /// Bits of a limb used for magnitude. The two top bits are headroom.
    pub const MAGNITUDE_BITS: u32 = L::BIT_WIDTH - 2;
    /// Inputs below this are stored as a single limb without splitting.
    pub const MAX_LIMB_MAGNITUDE: u128 = 1u128 << (Self::MAGNITUDE_BITS - 1);

    pub fn debug_description(&self) -> String {
        format!("{:?}", self)
    }
}

impl<L: Limb> fmt::Debug for BigInt<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt<{}>({} limbs)", type_name::<L>(), self.limbs.len())
    }
}

pub type BigIntU8 = BigInt<u8>;
pub type BigIntU16 = BigInt<u16>;
pub type BigIntU32 = BigInt<u32>;
pub type BigIntU64 = BigInt<u64>;
pub type BigIntU128 = BigInt<u128>;
pub type BigIntUsize = BigInt<usize>;
