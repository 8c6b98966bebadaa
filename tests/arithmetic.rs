#[cfg(test)]
mod test {
    use limb_bigint::{BigInt, BigIntError, BigIntU16, BigIntU32, BigIntU64, BigIntU8, Limb};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::{One, Zero};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_u8_walkthrough() {
        let zero = BigIntU8::new(0);
        let one = BigIntU8::new(1);
        assert_eq!(zero.limbs(), &[0]);
        assert_eq!(one.limbs(), &[1]);
        assert_eq!((zero + one).limbs(), &[1]);

        let forty = BigIntU8::new(40);
        assert_eq!(forty.limbs(), &[40]);
        assert_eq!(format!("{:?}", forty), "BigInt<u8>(1 limbs)");

        let sum = BigIntU8::new(32) + BigIntU8::new(1);
        assert_eq!(sum.limbs(), &[33]);
    }

    #[test]
    fn test_accumulate_u64() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        let mut expected: u128 = 0;
        let mut acc = BigIntU8::new_empty();
        for _ in 0..1000 {
            let v: u64 = prng.gen();
            expected += v as u128;
            acc += BigIntU8::new(v);
        }
        assert_eq!(BigUint::from(&acc), BigUint::from(expected));
        assert_eq!(BigIntU8::new(expected).limbs(), acc.limbs());
    }

    #[test]
    fn test_signed_inputs_add_magnitudes() {
        let sum = BigIntU16::new(-70_000i32) + BigIntU16::new(70_000i64);
        assert_eq!(BigUint::from(&sum), BigUint::from(140_000u32));

        let sum = BigIntU64::new(i128::MIN) + BigIntU64::new(i128::MIN);
        assert_eq!(sum.limbs(), &[0, 0, 1]);
    }

    fn check_growth_bound<L: Limb>(prng: &mut ChaCha20Rng) {
        for _ in 0..200 {
            let a_len = prng.gen_range(0..8);
            let b_len = prng.gen_range(0..8);
            let a = BigInt::<L>::from_limbs((0..a_len).map(|_| L::truncate_from(prng.gen())).collect());
            let b = BigInt::<L>::from_limbs((0..b_len).map(|_| L::truncate_from(prng.gen())).collect());
            let max_len = a.len().max(b.len());

            let sum = &a + &b;
            assert!(sum.len() >= a.len());
            assert!(sum.len() >= b.len());
            assert!(sum.len() <= max_len + 1);
            assert_eq!(BigUint::from(&sum), BigUint::from(&a) + BigUint::from(&b));

            let mut in_place = a.clone();
            in_place += &b;
            assert_eq!(in_place.limbs(), sum.limbs());
        }
    }

    #[test]
    fn test_growth_bound() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        check_growth_bound::<u8>(&mut prng);
        check_growth_bound::<u16>(&mut prng);
        check_growth_bound::<u32>(&mut prng);
        check_growth_bound::<u64>(&mut prng);
        check_growth_bound::<u128>(&mut prng);
    }

    #[test]
    fn test_all_ones_plus_one() {
        for n_limbs in 1..20 {
            let a = BigIntU32::from_limbs(vec![u32::MAX; n_limbs]);
            let sum = a + BigIntU32::new(1);
            assert_eq!(sum.len(), n_limbs + 1);
            assert!(sum.limbs()[..n_limbs].iter().all(|limb| *limb == 0));
            assert_eq!(sum.limbs()[n_limbs], 1);
            assert_eq!(BigUint::from(&sum), BigUint::one() << (32 * n_limbs));
        }
    }

    #[test]
    fn test_large_biguint_sum() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..50 {
            let a: BigUint = prng.sample(RandomBits::new(2048));
            let b: BigUint = prng.sample(RandomBits::new(1024));
            let sum = BigIntU16::from_biguint(&a) + BigIntU16::from_biguint(&b);
            assert_eq!(BigUint::from(&sum), a + b);
        }
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let empty = BigIntU64::new_empty() + BigIntU64::new_empty();
        assert!(empty.is_empty());
        assert!(BigUint::from(&empty).is_zero());
        assert_eq!(format!("{:?}", empty), "BigInt<u64>(0 limbs)");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            BigIntError::LimbCountOverflow.to_string(),
            "too many limbs required to store this value"
        );
        assert!(BigIntU8::try_new(u128::MAX).is_ok());
    }
}
