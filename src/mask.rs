//! Elementary mask construction, predicates and mutations on `u64` indices.
//!
//! Bit positions are 1-based and counted from the least significant bit
//! ("array order"): position 1 is bit 0 of the word. Out-of-range positions
//! are a caller contract violation and are only checked in debug builds.

use std::ops::RangeInclusive;

/// Return a mask with bits set at the given 1-based positions.
///
/// An empty slice returns the empty mask `0`.
///
/// # Examples
///
/// ```
/// assert_eq!(bit_basis::bmask(&[1, 3, 4]), 0b1101);
/// assert_eq!(bit_basis::bmask(&[]), 0);
/// ```
pub fn bmask(positions: &[usize]) -> u64 {
    positions.iter().fold(0, |mask, &pos| {
        debug_assert!((1..=64).contains(&pos), "bit position {} is out of [1, 64]", pos);
        mask | 1 << (pos - 1)
    })
}

/// Return a mask with bits set at every position in the given 1-based range.
///
/// An empty range returns the empty mask `0`.
pub fn bmask_range(range: RangeInclusive<usize>) -> u64 {
    let (lo, hi) = (*range.start(), *range.end());
    if lo > hi {
        return 0;
    }
    debug_assert!(lo >= 1 && hi <= 64, "bit range {}..={} is out of [1, 64]", lo, hi);
    (u64::MAX >> (64 - (hi - lo + 1))) << (lo - 1)
}

/// Return the 1-based positions of the set bits of `mask`, in ascending order.
///
/// Inverse operation of [`bmask`].
pub fn baddrs(mask: u64) -> Vec<usize> {
    let mut positions = Vec::with_capacity(mask.count_ones() as usize);
    let mut rest = mask;
    while rest != 0 {
        positions.push(rest.trailing_zeros() as usize + 1);
        rest &= rest - 1;
    }
    positions
}

/// Read the single bit of `index` at a 1-based position, as `0` or `1`.
#[inline]
pub fn take_bit(index: u64, position: usize) -> u64 {
    debug_assert!((1..=64).contains(&position), "bit position {} is out of [1, 64]", position);
    (index >> (position - 1)) & 1
}

/// Whether every masked position of `index` is 1.
///
/// The empty mask is trivially all set.
#[inline]
pub fn all_set(index: u64, mask: u64) -> bool {
    index & mask == mask
}

/// Whether any masked position of `index` is 1.
#[inline]
pub fn any_set(index: u64, mask: u64) -> bool {
    index & mask != 0
}

/// Whether `index` equals `target` at every masked position.
///
/// Bits of `target` outside the mask are ignored.
///
/// # Examples
///
/// ```
/// assert!(bit_basis::matches(0b11001, 0b10100, 0b10000));
/// assert!(!bit_basis::matches(0b11001, 0b10100, 0b00100));
/// ```
#[inline]
pub fn matches(index: u64, mask: u64, target: u64) -> bool {
    (index ^ target) & mask == 0
}

/// Flip the bits of `index` at every masked position.
#[inline]
pub fn flip(index: u64, mask: u64) -> u64 {
    index ^ mask
}

/// Set the bits of `index` at every masked position to 1.
#[inline]
pub fn set_bits(index: u64, mask: u64) -> u64 {
    index | mask
}

/// Exchange the bits of `index` at 1-based positions `i` and `j`.
///
/// Equal bits are a no-op; only differing bits are flipped.
#[inline]
pub fn swap_bits(index: u64, i: usize, j: usize) -> u64 {
    debug_assert!((1..=64).contains(&i), "bit position {} is out of [1, 64]", i);
    debug_assert!((1..=64).contains(&j), "bit position {} is out of [1, 64]", j);
    let diff = ((index >> (i - 1)) ^ (index >> (j - 1))) & 1;
    index ^ (diff << (i - 1)) ^ (diff << (j - 1))
}

/// Exchange the two bits of `index` selected by a two-bit mask.
///
/// Precondition: `mask_ij` has exactly two set bits. This is not checked in
/// release builds.
#[inline]
pub fn swap_bits_masked(index: u64, mask_ij: u64) -> u64 {
    debug_assert!(mask_ij.count_ones() == 2, "swap mask {:#b} must have exactly two set bits", mask_ij);
    let taken = index & mask_ij;
    if taken != 0 && taken != mask_ij {
        index ^ mask_ij
    } else {
        index
    }
}

/// Number of differing bits between `a` and `b` (Hamming distance).
#[inline]
pub fn distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// Negate the low `n` bits of `index`; higher bits are cleared.
#[inline]
pub fn negate_bits(index: u64, n: usize) -> u64 {
    !index & bmask_range(1..=n)
}

/// Truncate `index` to its low `n` bits.
#[inline]
pub fn truncate_bits(index: u64, n: usize) -> u64 {
    index & bmask_range(1..=n)
}

/// Reverse the order of the low `n` bits of `index`; higher bits are cleared.
///
/// # Examples
///
/// ```
/// assert_eq!(bit_basis::reflect_bits(4, 0b0011), 0b1100);
/// assert_eq!(bit_basis::reflect_bits(5, 0b00110), 0b01100);
/// ```
pub fn reflect_bits(n: usize, index: u64) -> u64 {
    debug_assert!(n <= 64, "bit width {} is out of [0, 64]", n);
    let mut reflected = truncate_bits(index, n);
    for i in 1..=n / 2 {
        reflected = swap_bits(reflected, i, n + 1 - i);
    }
    reflected
}

/// Length of the binary representation of `value`, at least 1.
#[inline]
pub fn bit_len(value: u64) -> usize {
    match value {
        0 => 1,
        _ => 64 - value.leading_zeros() as usize,
    }
}

/// Exact base-2 logarithm of `value`.
///
/// Precondition: `value` is a power of two. This is not checked in release
/// builds.
#[inline]
pub fn log2i(value: u64) -> usize {
    debug_assert!(value.is_power_of_two(), "log2i argument {} is not a power of two", value);
    value.trailing_zeros() as usize
}
