use crate::bigint::{BigInt, Limb};
use core::any::type_name;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use num_traits::ops::overflowing::OverflowingAdd;
use tracing::trace;

impl<L: Limb> BigInt<L> {
    /// Add `other_digit` and the incoming carry to limb `i`.
    ///
    /// Returns the outgoing carry, set when the sum wraps the full limb width.
    fn add_digit(&mut self, i: usize, other_digit: L, carry_in: bool) -> bool {
        let (mut digit, mut carry_out) = self.limbs[i].overflowing_add(&other_digit);
        if carry_in {
            let (sum, overflow) = digit.overflowing_add(&L::one());
            digit = sum;
            carry_out |= overflow;
        }
        self.limbs[i] = digit;
        carry_out
    }

    /// Schoolbook addition of `other` into `self`.
    ///
    /// The result has `max(self.len(), other.len())` limbs, plus one when a
    /// carry leaves the top limb. Limbs are not renormalized below
    /// `MAX_LIMB_MAGNITUDE`.
    fn add_digits(&mut self, other: &Self) {
        let other_len = other.limbs.len();
        if other_len == 0 {
            return;
        }

        let self_len = self.limbs.len();
        if self_len == 0 {
            self.limbs.clone_from(&other.limbs);
            return;
        }

        let common_len = self_len.min(other_len);
        let mut carry = false;
        for (i, &digit) in other.limbs[..common_len].iter().enumerate() {
            carry = self.add_digit(i, digit, carry);
        }

        // Any higher limbs of `other` are taken over as is, and the carry then
        // ripples through whichever operand was longer.
        if self_len < other_len {
            self.limbs.extend_from_slice(&other.limbs[common_len..]);
        }
        let mut i = common_len;
        while carry && i < self.limbs.len() {
            carry = self.add_digit(i, L::zero(), true);
            i += 1;
        }

        if carry {
            self.limbs.push(L::one());
            trace!(
                limb = type_name::<L>(),
                count = self.limbs.len(),
                "carry out of the top limb"
            );
        }
    }
}

impl<L: Limb> AddAssign<&BigInt<L>> for BigInt<L> {
    fn add_assign(&mut self, rhs: &BigInt<L>) {
        self.add_digits(rhs);
    }
}

impl<L: Limb> AddAssign for BigInt<L> {
    fn add_assign(&mut self, rhs: BigInt<L>) {
        if self.limbs.is_empty() {
            *self = rhs;
        } else {
            self.add_digits(&rhs);
        }
    }
}

impl<L: Limb> Add<&BigInt<L>> for BigInt<L> {
    type Output = BigInt<L>;

    fn add(mut self, rhs: &BigInt<L>) -> BigInt<L> {
        self += rhs;
        self
    }
}

impl<L: Limb> Add for BigInt<L> {
    type Output = BigInt<L>;

    fn add(mut self, rhs: BigInt<L>) -> BigInt<L> {
        self += rhs;
        self
    }
}

impl<L: Limb> Add for &BigInt<L> {
    type Output = BigInt<L>;

    fn add(self, rhs: &BigInt<L>) -> BigInt<L> {
        let mut value = self.clone();
        value += rhs;
        value
    }
}

impl<L: Limb> Sum for BigInt<L> {
    fn sum<I: Iterator<Item = BigInt<L>>>(iter: I) -> Self {
        iter.fold(BigInt::new_empty(), |acc, x| acc + x)
    }
}

impl<'a, L: Limb> Sum<&'a BigInt<L>> for BigInt<L> {
    fn sum<I: Iterator<Item = &'a BigInt<L>>>(iter: I) -> Self {
        iter.fold(BigInt::new_empty(), |acc, x| acc + x)
    }
}
