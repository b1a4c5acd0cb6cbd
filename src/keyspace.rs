//! Arbitrary-precision nonnegative integer facade.
//!
//! Per-chain keyspaces and the global cursor routinely exceed 64 bits (a
//! handful of long, common input words is enough to overflow `u64` once
//! raised to the 8th power). `Count` wraps [`num_bigint::BigUint`] and
//! exposes only the operations the enumeration engine actually needs —
//! `+`, `-`, `*` by a `u64` radix, floor-division and remainder by a `u64`
//! radix, ordering, and base-10 parse/print.
//!
//! Callers outside this module never need to name `num_bigint` directly.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// An arbitrary-precision nonnegative integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Count(BigUint);

impl Count {
    /// The additive identity, `0`.
    pub fn zero() -> Self {
        Count(BigUint::zero())
    }

    /// Build a `Count` from a `u64`.
    pub fn from_u64(v: u64) -> Self {
        Count(BigUint::from(v))
    }

    /// `true` if this value is `0`.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `self + other`.
    pub fn add(&self, other: &Count) -> Count {
        Count(&self.0 + &other.0)
    }

    /// `self += other`, in place.
    pub fn add_assign(&mut self, other: &Count) {
        self.0 += &other.0;
    }

    /// `self - other`. Panics if `other > self` — the engine never
    /// subtracts past zero because every caller first establishes
    /// `other <= self` before calling this.
    pub fn sub(&self, other: &Count) -> Count {
        Count(&self.0 - &other.0)
    }

    /// `self * radix`, for a `u64` radix (bucket sizes always fit in `u64`).
    pub fn mul_u64(&self, radix: u64) -> Count {
        Count(&self.0 * radix)
    }

    /// Floor-divide and take the remainder by a `u64` radix in one step —
    /// the mixed-radix decode step the materializer performs against each
    /// bucket size in turn. Returns `(quotient, remainder)`.
    pub fn div_rem_u64(&self, radix: u64) -> (Count, u64) {
        debug_assert!(radix > 0, "division by zero radix");
        let radix_big = BigUint::from(radix);
        let quotient = &self.0 / &radix_big;
        let remainder = &self.0 % &radix_big;
        let remainder = remainder
            .to_u64()
            .expect("remainder of a u64 divisor fits in u64");
        (Count(quotient), remainder)
    }

    /// Three-way compare. `Count` also implements `Ord` directly; this
    /// method exists so call sites that sort chains (see `elements.rs`)
    /// can spell out the comparator explicitly rather than relying on
    /// operator sugar.
    pub fn cmp_count(&self, other: &Count) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Attempt to downcast to `u64`. Used only where the caller has
    /// already bounded the value (e.g. a per-round batch size capped by
    /// `min()` against quantities that do fit in `u64`).
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Count {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Count(BigUint::from_str(s)?))
    }
}

impl From<u64> for Count {
    fn from(v: u64) -> Self {
        Count::from_u64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_round_trip() {
        let a = Count::from_u64(1000);
        let b = Count::from_u64(3);
        assert_eq!(a.add(&b), Count::from_u64(1003));
        assert_eq!(a.sub(&b), Count::from_u64(997));
        assert_eq!(a.mul_u64(4), Count::from_u64(4000));
    }

    #[test]
    fn div_rem_matches_u64_semantics() {
        let a = Count::from_u64(17);
        let (q, r) = a.div_rem_u64(5);
        assert_eq!(q, Count::from_u64(3));
        assert_eq!(r, 2);
    }

    #[test]
    fn exceeds_u64_without_overflow() {
        // 2^64 as a product of two u32-ish factors, done via repeated mul_u64.
        let mut c = Count::from_u64(1);
        for _ in 0..70 {
            c = c.mul_u64(2);
        }
        assert!(c.to_u64().is_none());
        assert_eq!(c.to_string(), (1u128 << 70).to_string());
    }

    #[test]
    fn decimal_parse_and_print_round_trip() {
        let s = "123456789012345678901234567890";
        let c: Count = s.parse().unwrap();
        assert_eq!(c.to_string(), s);
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        let small = Count::from_u64(9);
        let big = Count::from_u64(10);
        assert_eq!(small.cmp_count(&big), Ordering::Less);
    }
}
