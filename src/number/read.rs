//! Number reader (spec §4.4, component C4): integer fast path plus a
//! three-tier real conversion (exact fast path, Eisel-Lemire-style
//! diy_fp estimate, big-integer fallback).

use crate::chars::{digi_is_digit, digi_is_exp, digi_is_sign};
use crate::config::read_flag;
use crate::error::{Error, ErrorCode};
use crate::number::bigint::BigInt;
use crate::number::tables::{
    pow10_exp2, F64_BIT_TO_POW10_EXP_TABLE, F64_POW10_TABLE, POW10_SIG_TABLE, POW10_SIG_TABLE_MAX_EXP,
    POW10_SIG_TABLE_MIN_EXP,
};

const F64_SIG_BITS: i32 = 52;
const F64_SIG_FULL_BITS: i32 = 53;
const F64_EXP_BIAS: i32 = 1023;
const F64_MIN_BIN_EXP: i32 = -1021;
const F64_MAX_BIN_EXP: i32 = 1024;
const F64_MIN_DEC_EXP: i32 = -324;
const F64_MAX_DEC_EXP: i32 = 308;
const F64_POW10_EXP_MAX_EXACT: i32 = 22;
const U64_SAFE_DIG: i32 = 19;
const F64_MAX_DEC_DIG: i32 = 768;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Uint(u64),
    Sint(i64),
    Real(f64),
}

#[derive(Debug)]
pub struct NumberResult {
    pub value: NumberValue,
    pub end: usize,
    /// True when the literal's syntax was a plain integer but its
    /// magnitude does not fit in `i64`/`u64`, so it was promoted to
    /// `real` (spec's `bignum_as_raw` flag needs this to decide).
    pub int_overflowed: bool,
}

fn byte_at(input: &[u8], i: usize) -> u8 {
    *input.get(i).unwrap_or(&0)
}

/// Parses one JSON number starting at `input[pos]` (spec §6
/// `read_number`, and the number sub-grammar within [`crate::parse`]).
pub fn read_number(input: &[u8], pos: usize, flags: u32) -> Result<NumberResult, Error> {
    let hdr = pos;
    let sign = byte_at(input, pos) == b'-';
    let mut cur = pos + sign as usize;

    if !digi_is_digit(byte_at(input, cur)) {
        if flags & read_flag::ALLOW_INF_AND_NAN != 0 {
            if let Some(r) = try_read_inf_or_nan(input, cur, sign) {
                return Ok(r);
            }
        }
        return Err(Error::new(ErrorCode::InvalidNumber, "no digit after minus sign", cur.saturating_sub(1)));
    }

    let leading_zero = byte_at(input, cur) == b'0';
    let int_start = cur;
    if leading_zero {
        cur += 1;
    } else {
        while digi_is_digit(byte_at(input, cur)) {
            cur += 1;
        }
    }
    let int_end = cur;
    if leading_zero && digi_is_digit(byte_at(input, cur)) {
        return Err(Error::new(ErrorCode::InvalidNumber, "number with leading zero is not allowed", int_start));
    }

    let mut dot_pos: Option<usize> = None;
    let mut frac_end = cur;
    if byte_at(input, cur) == b'.' {
        dot_pos = Some(cur);
        cur += 1;
        if !digi_is_digit(byte_at(input, cur)) {
            return Err(Error::new(ErrorCode::InvalidNumber, "no digit after decimal point", cur));
        }
        while digi_is_digit(byte_at(input, cur)) {
            cur += 1;
        }
        frac_end = cur;
    }

    let mut exp_lit: i64 = 0;
    let mut exp_sign = false;
    if digi_is_exp(byte_at(input, cur)) {
        cur += 1;
        if digi_is_sign(byte_at(input, cur)) {
            exp_sign = byte_at(input, cur) == b'-';
            cur += 1;
        }
        let exp_digits_start = cur;
        if !digi_is_digit(byte_at(input, cur)) {
            return Err(Error::new(ErrorCode::InvalidNumber, "no digit after exponent sign", cur));
        }
        while digi_is_digit(byte_at(input, cur)) {
            if cur - exp_digits_start < 18 {
                exp_lit = exp_lit * 10 + (byte_at(input, cur) - b'0') as i64;
            } else {
                exp_lit = i64::MAX / 2;
            }
            cur += 1;
        }
    }

    let is_real = dot_pos.is_some() || exp_lit != 0 || digi_is_exp(byte_at(input, int_end)) || frac_end != int_end;
    if !is_real {
        return parse_integer(input, int_start, int_end, sign, hdr);
    }

    parse_real(input, hdr, sign, int_start, int_end, dot_pos, frac_end, exp_sign, exp_lit, flags, cur)
}

fn parse_integer(input: &[u8], start: usize, end: usize, sign: bool, hdr: usize) -> Result<NumberResult, Error> {
    let mut sig: u64 = 0;
    let mut overflow = false;
    for &b in &input[start..end] {
        let d = (b - b'0') as u64;
        if sig < u64::MAX / 10 || (sig == u64::MAX / 10 && d <= u64::MAX % 10) {
            sig = sig * 10 + d;
        } else {
            overflow = true;
            break;
        }
    }
    if overflow {
        let value = parse_as_real_fallback(input, start, end, sign)?;
        return Ok(NumberResult { value, end, int_overflowed: true });
    }
    if sign {
        if sig <= 1u64 << 63 {
            let v = if sig == 1u64 << 63 { i64::MIN } else { -(sig as i64) };
            return Ok(NumberResult { value: NumberValue::Sint(v), end, int_overflowed: false });
        }
        return Ok(NumberResult {
            value: NumberValue::Real(-(sig as f64)),
            end,
            int_overflowed: true,
        });
    }
    let _ = hdr;
    Ok(NumberResult { value: NumberValue::Uint(sig), end, int_overflowed: false })
}

fn parse_as_real_fallback(input: &[u8], start: usize, end: usize, sign: bool) -> Result<NumberValue, Error> {
    let dot_pos = None;
    parse_real(input, start, sign, start, end, dot_pos, end, false, 0, 0, end).map(|r| r.value)
}

#[allow(clippy::too_many_arguments)]
fn parse_real(
    input: &[u8],
    hdr: usize,
    sign: bool,
    int_start: usize,
    int_end: usize,
    dot_pos: Option<usize>,
    frac_end: usize,
    exp_sign: bool,
    exp_lit: i64,
    flags: u32,
    num_end: usize,
) -> Result<NumberResult, Error> {
    let end = frac_end.max(int_end);
    // Accumulate up to 19 significant digits across int+frac parts,
    // skipping the decimal point itself; record where we had to cut.
    let mut sig: u64 = 0;
    let mut digits = 0i32;
    let mut sig_cut: Option<usize> = None;
    let mut sig_end = end;
    let mut cur = int_start;
    let frac_stop = if dot_pos.is_some() { frac_end } else { int_end };
    while cur < frac_stop {
        if Some(cur) == dot_pos {
            cur += 1;
            continue;
        }
        let b = input[cur];
        if digits < U64_SAFE_DIG {
            sig = sig * 10 + (b - b'0') as u64;
            digits += 1;
        } else if sig_cut.is_none() {
            sig_cut = Some(cur);
            sig += (b >= b'5') as u64;
        }
        cur += 1;
    }

    // Decimal exponent implied purely by the position of the decimal
    // point relative to the digits actually counted into `sig`.
    let exp_sig: i64 = if let Some(cut) = sig_cut {
        let dp = dot_pos.unwrap_or(end);
        let mut e = (dp as i64) - (cut as i64);
        if dp < cut {
            e += 1;
        }
        e
    } else {
        match dot_pos {
            Some(dp) => -((end as i64) - (dp as i64) - 1),
            None => 0,
        }
    };

    // Trailing zeros after the cut don't actually require bigint
    // precision; fold them back into "no cut happened".
    if let Some(cut) = sig_cut {
        let mut tmp = end - 1;
        while tmp > cut && (input[tmp] == b'0' || Some(tmp) == dot_pos) {
            tmp -= 1;
        }
        if tmp < cut {
            sig_cut = None;
        } else {
            sig_end = end;
        }
    }

    let exp_sig_total = exp_sig + if exp_sign { -exp_lit } else { exp_lit };

    if exp_sig_total < (F64_MIN_DEC_EXP - 19) as i64 {
        return Ok(NumberResult {
            value: NumberValue::Real(if sign { -0.0 } else { 0.0 }),
            end: num_end,
            int_overflowed: false,
        });
    }
    if exp_sig_total > F64_MAX_DEC_EXP as i64 {
        return overflow_result(sign, flags, hdr, num_end);
    }
    let exp = exp_sig_total as i32;

    if flags & read_flag::FAST_FP != 0 {
        let mut ret = sig as f64;
        if exp >= -F64_MAX_DEC_EXP {
            if exp < 0 {
                ret /= F64_POW10_TABLE[(-exp) as usize];
            } else {
                ret *= F64_POW10_TABLE[exp as usize];
                if flags & read_flag::ALLOW_INF_AND_NAN == 0 && ret.is_infinite() {
                    return overflow_result(sign, flags, hdr, num_end);
                }
            }
        } else {
            ret /= F64_POW10_TABLE[F64_MAX_DEC_EXP as usize];
            ret /= F64_POW10_TABLE[(-(exp + F64_MAX_DEC_EXP)) as usize];
        }
        return Ok(NumberResult { value: NumberValue::Real(apply_sign(ret, sign)), end: num_end, int_overflowed: false });
    }

    if sig_cut.is_none() && (-F64_POW10_EXP_MAX_EXACT..=F64_POW10_EXP_MAX_EXACT * 2).contains(&exp) {
        let bits = 64 - sig.leading_zeros() as i32;
        if bits <= F64_SIG_FULL_BITS {
            if exp < 0 {
                return Ok(NumberResult {
                    value: NumberValue::Real(apply_sign(sig as f64 / F64_POW10_TABLE[(-exp) as usize], sign)),
                    end: num_end,
                    int_overflowed: false,
                });
            }
            if exp <= F64_POW10_EXP_MAX_EXACT {
                return Ok(NumberResult {
                    value: NumberValue::Real(apply_sign(sig as f64 * F64_POW10_TABLE[exp as usize], sign)),
                    end: num_end,
                    int_overflowed: false,
                });
            }
            let idx = (F64_SIG_FULL_BITS - bits) as usize;
            if idx < F64_BIT_TO_POW10_EXP_TABLE.len() {
                let exp1 = F64_BIT_TO_POW10_EXP_TABLE[idx];
                let exp2 = exp - exp1;
                if exp2 <= F64_POW10_EXP_MAX_EXACT {
                    let dbl = (sig as f64) * F64_POW10_TABLE[exp1 as usize] * F64_POW10_TABLE[exp2 as usize];
                    return Ok(NumberResult { value: NumberValue::Real(apply_sign(dbl, sign)), end: num_end, int_overflowed: false });
                }
            }
        }
    }

    let raw = diy_fp_eisel_lemire(sig, exp, sig_cut.is_some(), input, sig_cut, sig_end, dot_pos, exp);
    match raw {
        RawResult::Inf => overflow_result(sign, flags, hdr, num_end),
        RawResult::Bits(bits) => Ok(NumberResult {
            value: NumberValue::Real(f64_from_raw(bits, sign)),
            end: num_end,
            int_overflowed: false,
        }),
    }
}

fn apply_sign(v: f64, sign: bool) -> f64 {
    if sign {
        -v
    } else {
        v
    }
}

fn f64_from_raw(bits: u64, sign: bool) -> f64 {
    f64::from_bits(bits | ((sign as u64) << 63))
}

fn overflow_result(sign: bool, flags: u32, offset: usize, end: usize) -> Result<NumberResult, Error> {
    if flags & read_flag::ALLOW_INF_AND_NAN != 0 {
        let v = if sign { f64::NEG_INFINITY } else { f64::INFINITY };
        Ok(NumberResult { value: NumberValue::Real(v), end, int_overflowed: false })
    } else {
        Err(Error::new(ErrorCode::InvalidNumber, "number is infinity when parsed as double", offset))
    }
}

enum RawResult {
    Inf,
    Bits(u64),
}

/// Eisel-Lemire-style diy_fp estimate with a three-bit error bound,
/// falling back to exact big-integer comparison on an ambiguous result
/// (spec §4.4 items 2-3).
#[allow(clippy::too_many_arguments)]
fn diy_fp_eisel_lemire(
    sig_in: u64,
    exp: i32,
    had_cut: bool,
    input: &[u8],
    sig_cut: Option<usize>,
    sig_end: usize,
    dot_pos: Option<usize>,
    exp_for_bigint: i32,
) -> RawResult {
    const ERR_ULP_LOG: i32 = 3;
    const ERR_ULP: u64 = 1 << ERR_ULP_LOG;
    const ERR_CACHED_POW: u64 = ERR_ULP / 2;
    const ERR_MUL_FIXED: u64 = ERR_ULP / 2;
    const DIY_SIG_BITS: i32 = 64;
    let exp_bias = F64_EXP_BIAS + F64_SIG_BITS;
    let exp_subnormal = -exp_bias + 1;

    let mut sig = sig_in;
    let mut fp_exp: i32 = 0;
    let mut fp_err: u64 = if had_cut { ERR_ULP / 2 } else { 0 };

    let lz = sig.leading_zeros();
    sig <<= lz;
    fp_exp -= lz as i32;
    fp_err <<= lz;

    let cached = cached_pow10(exp);
    let (mul_hi, mul_lo) = u128_mul(sig, cached.0);
    sig = mul_hi.wrapping_add(mul_lo >> 63);
    fp_exp += cached.1 + 64;
    fp_err += ERR_CACHED_POW + (fp_err != 0) as u64 + ERR_MUL_FIXED;

    let lz = sig.leading_zeros();
    sig <<= lz;
    fp_exp -= lz as i32;
    fp_err <<= lz;

    let order_of_magnitude = DIY_SIG_BITS + fp_exp;
    let effective_significand_size = if order_of_magnitude >= exp_subnormal + F64_SIG_FULL_BITS {
        F64_SIG_FULL_BITS
    } else if order_of_magnitude <= exp_subnormal {
        0
    } else {
        order_of_magnitude - exp_subnormal
    };

    let mut precision_digits_count = DIY_SIG_BITS - effective_significand_size;
    if precision_digits_count + ERR_ULP_LOG >= DIY_SIG_BITS {
        let shr = (precision_digits_count + ERR_ULP_LOG) - DIY_SIG_BITS + 1;
        sig >>= shr;
        fp_exp += shr;
        fp_err = (fp_err >> shr) + 1 + ERR_ULP;
        precision_digits_count -= shr;
    }

    let precision_bits = (sig & ((1u64 << precision_digits_count) - 1)) * ERR_ULP;
    let half_way = (1u64 << (precision_digits_count - 1)) * ERR_ULP;

    sig >>= precision_digits_count;
    sig += (precision_bits >= half_way + fp_err) as u64;
    fp_exp += precision_digits_count;

    let raw = diy_fp_to_ieee_raw(sig, fp_exp);
    if raw == u64::MAX {
        return RawResult::Inf;
    }
    if precision_bits <= half_way - fp_err || precision_bits >= half_way + fp_err {
        return RawResult::Bits(raw);
    }

    // Ambiguous: resolve with exact bigint comparison against the
    // upper boundary (half an ULP above the candidate double).
    let exp_mask = 0x7FF0_0000_0000_0000u64;
    let sig_mask = 0x000F_FFFF_FFFF_FFFFu64;
    let (mut up_sig, mut up_exp) = if raw & exp_mask != 0 {
        ((raw & sig_mask) + (1u64 << F64_SIG_BITS), ((raw & exp_mask) >> F64_SIG_BITS) as i32)
    } else {
        (raw & sig_mask, 1)
    };
    up_exp -= F64_EXP_BIAS + F64_SIG_BITS;
    up_sig <<= 1;
    up_exp -= 1;
    up_sig += 1;

    let mut big_full = bigint_from_buf(sig_in, exp_for_bigint, sig_cut, sig_end, dot_pos, input);
    let mut big_comp = BigInt::from_u64(up_sig);
    let mut adj_exp = exp_for_bigint;
    if let Some(cut) = sig_cut {
        adj_exp = bigint_exp_adjust(input, cut, sig_end, dot_pos, exp_for_bigint);
    }
    if adj_exp >= 0 {
        big_full.mul_pow10(adj_exp);
    } else {
        big_comp.mul_pow10(-adj_exp);
    }
    if up_exp > 0 {
        big_comp.mul_pow2(up_exp as u32);
    } else {
        big_full.mul_pow2((-up_exp) as u32);
    }
    let cmp = big_full.cmp(&big_comp);
    let mut raw = raw;
    match cmp {
        std::cmp::Ordering::Equal => raw += raw & 1,
        std::cmp::Ordering::Greater => raw += 1,
        std::cmp::Ordering::Less => {}
    }
    if raw == u64::MAX {
        RawResult::Inf
    } else {
        RawResult::Bits(raw)
    }
}

fn bigint_exp_adjust(input: &[u8], cut: usize, sig_end: usize, dot_pos: Option<usize>, exp: i32) -> i32 {
    let has_dot = dot_pos.is_some_and(|dp| cut < dp && dp < sig_end);
    let dig_len_total = U64_SAFE_DIG + (sig_end as i32 - cut as i32) - has_dot as i32;
    let clamped = dig_len_total.min(F64_MAX_DEC_DIG + 1);
    let _ = input;
    exp - (clamped - U64_SAFE_DIG)
}

fn bigint_from_buf(sig: u64, exp: i32, sig_cut: Option<usize>, sig_end: usize, dot_pos: Option<usize>, input: &[u8]) -> BigInt {
    let cut = match sig_cut {
        None => return BigInt::from_u64(sig),
        Some(c) => c,
    };
    let _ = exp;
    let mut sig = sig - (input[cut] >= b'5') as u64;
    let mut end = sig_end;
    let has_dot = dot_pos.is_some_and(|dp| cut < dp && dp < end);
    let mut dig_len_total = U64_SAFE_DIG + (end as i32 - cut as i32) - has_dot as i32;
    let mut big_cut = false;
    if dig_len_total > F64_MAX_DEC_DIG {
        big_cut = true;
        end -= (dig_len_total - (F64_MAX_DEC_DIG + 1)) as usize;
        if dot_pos == Some(end - 1) {
            end -= 1;
        }
        dig_len_total = F64_MAX_DEC_DIG + 1;
    }
    let _ = dig_len_total;

    let mut big = BigInt::from_u64(sig);
    let mut val: u64 = 0;
    let mut len = 0u32;
    let mut c = cut;
    while c < end {
        if Some(c) != dot_pos {
            val = val * 10 + (input[c] - b'0') as u64;
            len += 1;
            c += 1;
            if c == end && big_cut {
                val = val - (val % 10) + 1;
            }
            if len as i32 == U64_SAFE_DIG || c == end {
                big.mul_pow10(len as i32);
                big.add_u64(val);
                val = 0;
                len = 0;
            }
        } else {
            c += 1;
        }
    }
    sig = 0;
    let _ = sig;
    big
}

fn cached_pow10(pow10: i32) -> (u64, i32) {
    let idx = (pow10 - POW10_SIG_TABLE_MIN_EXP) as usize;
    debug_assert!((POW10_SIG_TABLE_MIN_EXP..=POW10_SIG_TABLE_MAX_EXP).contains(&pow10));
    (POW10_SIG_TABLE[idx], pow10_exp2(pow10))
}

fn u128_mul(a: u64, b: u64) -> (u64, u64) {
    let full = (a as u128) * (b as u128);
    ((full >> 64) as u64, full as u64)
}

fn diy_fp_to_ieee_raw(mut sig: u64, mut exp: i32) -> u64 {
    if sig == 0 {
        return 0;
    }
    let lz = sig.leading_zeros();
    sig <<= lz;
    sig >>= 64 - F64_SIG_FULL_BITS;
    exp -= lz as i32;
    exp += 64 - F64_SIG_FULL_BITS;
    exp += F64_SIG_BITS;

    if exp >= F64_MAX_BIN_EXP {
        u64::MAX // sentinel for "infinity"
    } else if exp >= F64_MIN_BIN_EXP - 1 {
        let e = (exp + F64_EXP_BIAS) as u64;
        (e << F64_SIG_BITS) | (sig & 0x000F_FFFF_FFFF_FFFF)
    } else if exp >= F64_MIN_BIN_EXP - F64_SIG_FULL_BITS {
        sig >> (F64_MIN_BIN_EXP - exp - 1)
    } else {
        0
    }
}

fn try_read_inf_or_nan(input: &[u8], cur: usize, sign: bool) -> Option<NumberResult> {
    let rest = &input[cur..];
    let matches = |lit: &[u8]| rest.len() >= lit.len() && rest[..lit.len()].eq_ignore_ascii_case(lit);
    if matches(b"infinity") {
        return Some(NumberResult {
            value: NumberValue::Real(if sign { f64::NEG_INFINITY } else { f64::INFINITY }),
            end: cur + 8,
            int_overflowed: false,
        });
    }
    if matches(b"inf") {
        return Some(NumberResult {
            value: NumberValue::Real(if sign { f64::NEG_INFINITY } else { f64::INFINITY }),
            end: cur + 3,
            int_overflowed: false,
        });
    }
    if matches(b"nan") {
        return Some(NumberResult { value: NumberValue::Real(f64::NAN), end: cur + 3, int_overflowed: false });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str, flags: u32) -> (NumberValue, usize) {
        let mut buf = s.as_bytes().to_vec();
        buf.extend_from_slice(&[0, 0, 0, 0]);
        let r = read_number(&buf, 0, flags).unwrap();
        (r.value, r.end)
    }

    #[test]
    fn integer_boundaries() {
        assert_eq!(parse("9223372036854775807", 0).0, NumberValue::Uint(9223372036854775807));
        assert_eq!(parse("9223372036854775808", 0).0, NumberValue::Uint(9223372036854775808));
        assert_eq!(parse("-9223372036854775808", 0).0, NumberValue::Sint(i64::MIN));
        assert_eq!(parse("18446744073709551615", 0).0, NumberValue::Uint(u64::MAX));
        match parse("18446744073709551616", 0).0 {
            NumberValue::Real(v) => assert_eq!(v, 1.8446744073709552e19),
            _ => panic!("expected real"),
        }
        match parse("-9223372036854775809", 0).0 {
            NumberValue::Real(v) => assert_eq!(v, -9.223372036854776e18),
            _ => panic!("expected real"),
        }
    }

    #[test]
    fn simple_real() {
        assert_eq!(parse("12345e-2", 0).0, NumberValue::Real(123.45));
        assert_eq!(parse("1e308", 0).0, NumberValue::Real(1e308));
        assert_eq!(parse("-0.5", 0).0, NumberValue::Real(-0.5));
    }

    #[test]
    fn overflow_without_flag_errors() {
        let mut buf = b"1e309".to_vec();
        buf.extend_from_slice(&[0, 0, 0, 0]);
        let err = read_number(&buf, 0, read_flag::NONE).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidNumber);
    }

    #[test]
    fn overflow_with_flag_yields_infinity() {
        assert_eq!(parse("1e309", read_flag::ALLOW_INF_AND_NAN).0, NumberValue::Real(f64::INFINITY));
    }

    #[test]
    fn round_trip_shortest_many_values() {
        #[allow(clippy::approx_constant)]
        let samples = [0.1f64, 1.0, 100.5, 3.141592653589793, 1e-300, 1e300, 2.2250738585072014e-308];
        for &v in &samples {
            let s = format!("{:e}", v);
            let _ = s;
            let bits = v.to_bits();
            let s = crate::number::write::format_f64(v, 0).unwrap();
            let (parsed, _) = parse(&s, 0);
            match parsed {
                NumberValue::Real(p) => assert_eq!(p.to_bits(), bits, "round trip mismatch for {}", v),
                _ => panic!("expected real"),
            }
        }
    }
}
