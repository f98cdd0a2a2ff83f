//! Arbitrary-precision unsigned integer (spec §4.4 "Big-integer
//! fallback"), used only when the Eisel-Lemire-style fast path lands on
//! an ambiguous rounding boundary. Base-2^64 chunks, fixed capacity
//! (64 chunks is enough for any value this reader ever constructs: a
//! 768-bit decimal significand scaled by at most 2^1100 or 10^400).

const MAX_CHUNKS: usize = 64;

/// Decimal powers of ten up to `10^19`, the largest that fits in a
/// `u64` (`U64_SAFE_DIG`/`U64_POW10_MAX_EXP` in the reference reader).
const U64_POW10_TABLE: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];
const U64_POW10_MAX_EXP: i32 = 19;

#[derive(Clone)]
pub struct BigInt {
    used: usize,
    bits: [u64; MAX_CHUNKS],
}

impl BigInt {
    pub fn from_u64(val: u64) -> Self {
        BigInt { used: 1, bits: { let mut b = [0u64; MAX_CHUNKS]; b[0] = val; b } }
    }

    pub fn add_u64(&mut self, val: u64) {
        let (sum, mut carry) = self.bits[0].overflowing_add(val);
        self.bits[0] = sum;
        if !carry {
            return;
        }
        let mut idx = 1;
        while idx < self.used {
            if self.bits[idx] != u64::MAX {
                self.bits[idx] += 1;
                carry = false;
                break;
            }
            self.bits[idx] = 0;
            idx += 1;
        }
        if carry {
            self.bits[self.used] = 1;
            self.used += 1;
        }
    }

    pub fn mul_u64(&mut self, val: u64) {
        debug_assert!(val != 0);
        let mut carry = 0u64;
        for idx in 0..self.used {
            let prod = (self.bits[idx] as u128) * (val as u128) + carry as u128;
            self.bits[idx] = prod as u64;
            carry = (prod >> 64) as u64;
        }
        if carry != 0 {
            self.bits[self.used] = carry;
            self.used += 1;
        }
    }

    pub fn mul_pow10(&mut self, mut exp: i32) {
        while exp >= U64_POW10_MAX_EXP {
            self.mul_u64(U64_POW10_TABLE[U64_POW10_MAX_EXP as usize]);
            exp -= U64_POW10_MAX_EXP;
        }
        if exp > 0 {
            self.mul_u64(U64_POW10_TABLE[exp as usize]);
        }
    }

    pub fn mul_pow2(&mut self, exp: u32) {
        let shift = exp % 64;
        let moved = (exp / 64) as usize;
        if shift == 0 {
            for idx in (0..self.used).rev() {
                self.bits[idx + moved] = self.bits[idx];
            }
            for b in &mut self.bits[..moved] {
                *b = 0;
            }
            self.used += moved;
        } else {
            let mut top = self.bits[self.used - 1] >> (64 - shift);
            for idx in (1..self.used).rev() {
                let num = (self.bits[idx] << shift) | (self.bits[idx - 1] >> (64 - shift));
                self.bits[idx + moved] = num;
            }
            self.bits[moved] = self.bits[0] << shift;
            for b in &mut self.bits[..moved] {
                *b = 0;
            }
            self.used += moved;
            if top != 0 {
                self.bits[self.used] = top;
                self.used += 1;
            }
            top = 0;
            let _ = top;
        }
    }

    pub fn cmp(&self, other: &BigInt) -> std::cmp::Ordering {
        if self.used != other.used {
            return self.used.cmp(&other.used);
        }
        for idx in (0..self.used).rev() {
            let ord = self.bits[idx].cmp(&other.bits[idx]);
            if ord != std::cmp::Ordering::Equal {
                return ord;
            }
        }
        std::cmp::Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_and_add() {
        let mut b = BigInt::from_u64(123);
        b.mul_u64(1_000_000);
        b.add_u64(456);
        assert_eq!(b.bits[0], 123_000_456);
        assert_eq!(b.used, 1);
    }

    #[test]
    fn mul_pow10_carries_chunks() {
        let mut b = BigInt::from_u64(u64::MAX);
        b.mul_pow10(5);
        // u64::MAX * 10^5 overflows one 64-bit chunk.
        assert!(b.used >= 2);
    }

    #[test]
    fn cmp_orders_by_magnitude() {
        let a = BigInt::from_u64(5);
        let b = BigInt::from_u64(10);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(b.cmp(&a), std::cmp::Ordering::Greater);
    }

    #[test]
    fn mul_pow2_matches_shift() {
        let mut a = BigInt::from_u64(1);
        a.mul_pow2(65);
        let mut b = BigInt::from_u64(2);
        b.mul_pow2(64);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }
}
