#![no_main]

use arbitrary::{Arbitrary, Result, Unstructured};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use limb_bigint::{BigInt, Limb};

pub const LIMB_TYPE_LAST_INDEX: u32 = 4;

#[derive(Debug, Clone, Copy)]
pub enum LimbType {
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl LimbType {
    pub fn from_index(idx: u32) -> Self {
        match idx {
            0 => Self::U8,
            1 => Self::U16,
            2 => Self::U32,
            3 => Self::U64,
            4 => Self::U128,
            _ => panic!("Invalid LimbType index"),
        }
    }
}

macro_rules! match_limb_type {
    ($limb_type:expr, $func:ident $(, $args:expr)* ) => {
        match $limb_type {
            LimbType::U8 => $func::<u8>($($args),*),
            LimbType::U16 => $func::<u16>($($args),*),
            LimbType::U32 => $func::<u32>($($args),*),
            LimbType::U64 => $func::<u64>($($args),*),
            LimbType::U128 => $func::<u128>($($args),*),
        }
    };
}

/// Two operands as raw bytes, reinterpreted as little-endian limbs of the
/// chosen width, plus a signed seed that goes through the primitive
/// constructor.
#[derive(Debug)]
pub struct AddConfig {
    pub limb_type: LimbType,
    pub lhs: Vec<u8>,
    pub rhs: Vec<u8>,
    pub seed: i128,
}

impl<'a> Arbitrary<'a> for AddConfig {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(AddConfig {
            limb_type: LimbType::from_index(u.int_in_range(0..=LIMB_TYPE_LAST_INDEX)?),
            lhs: u.arbitrary()?,
            rhs: u.arbitrary()?,
            seed: u.arbitrary()?,
        })
    }
}

fn limbs_from_bytes<L: Limb>(bytes: &[u8]) -> BigInt<L> {
    let limb_bytes = (L::BIT_WIDTH / 8) as usize;
    BigInt::from_limbs(bytes.chunks(limb_bytes).map(L::from_le_slice).collect())
}

fn check_add<L: Limb>(config: &AddConfig) {
    let a = limbs_from_bytes::<L>(&config.lhs);
    let b = limbs_from_bytes::<L>(&config.rhs);
    let c = BigInt::<L>::new(config.seed);

    let sum = &a + &b;
    let max_len = a.len().max(b.len());
    assert!(sum.len() == max_len || sum.len() == max_len + 1);
    assert_eq!(BigUint::from(&sum), BigUint::from(&a) + BigUint::from(&b));

    let sum = sum + &c;
    assert_eq!(
        BigUint::from(&sum),
        BigUint::from(&a) + BigUint::from(&b) + BigUint::from(config.seed.unsigned_abs())
    );
}

fuzz_target!(|config: AddConfig| {
    match_limb_type!(config.limb_type, check_add, &config);
});

