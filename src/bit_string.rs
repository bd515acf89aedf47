//! A fixed-length, integer-backed basis label.

use std::ops::{Add, BitAnd, BitOr, BitXor, Shl, Shr, Sub};

use thiserror::Error;

use crate::mask::{bmask_range, reflect_bits, take_bit};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitStringError {
    #[error("value {value:#b} does not fit in {len} bits")]
    ValueTooWide { value: u64, len: usize },
    #[error("bit string length ({len}) exceeds the 64-bit word size")]
    LengthTooLarge { len: usize },
}

/// An immutable bit string of fixed length.
///
/// The length is fixed at construction and every arithmetic result is
/// truncated back into it, so the invariant `value < 2^len` always holds.
/// Bit positions are 1-based from the least significant bit.
///
/// # Examples
///
/// ```
/// use bit_basis::BitString;
///
/// let b = BitString::new(0b1101, 4).unwrap();
/// assert!(b.bit(1));
/// assert!(!b.bit(2));
/// assert_eq!((b + 0b0011).value(), 0b0000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitString {
    value: u64,
    len: usize,
}

impl BitString {
    /// Construct a bit string, checking that `value` fits in `len` bits.
    pub fn new(value: u64, len: usize) -> Result<Self, BitStringError> {
        if len > 64 {
            return Err(BitStringError::LengthTooLarge { len });
        }
        if value & !bmask_range(1..=len) != 0 {
            return Err(BitStringError::ValueTooWide { value, len });
        }
        Ok(BitString { value, len })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bit at a 1-based position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0 or greater than the length.
    pub fn bit(&self, position: usize) -> bool {
        assert!(
            position >= 1 && position <= self.len,
            "bit position {} is out of [1, {}]",
            position,
            self.len
        );
        take_bit(self.value, position) == 1
    }

    /// Integer view of the raw value.
    pub fn to_int(&self) -> u64 {
        self.value
    }

    /// Integer view with the bits read in reverse order.
    pub fn to_int_reflected(&self) -> u64 {
        reflect_bits(self.len, self.value)
    }

    /// Fractional view in `[0, 1)` with bit 1 as the most significant digit.
    pub fn to_float(&self) -> f64 {
        self.to_int_reflected() as f64 / (1u128 << self.len) as f64
    }

    /// Fractional view in `[0, 1)` with the bits read in reverse order.
    pub fn to_float_reflected(&self) -> f64 {
        self.value as f64 / (1u128 << self.len) as f64
    }

    /// Concatenate two bit strings; `other` occupies the low positions.
    ///
    /// Precondition: the combined length fits in 64 bits. This is not
    /// checked in release builds.
    pub fn concat(self, other: BitString) -> BitString {
        debug_assert!(self.len + other.len <= 64, "concatenated length {} exceeds 64", self.len + other.len);
        BitString {
            value: (((self.value as u128) << other.len) as u64) | other.value,
            len: self.len + other.len,
        }
    }

    /// Concatenate `n` copies of this bit string.
    pub fn repeat(self, n: usize) -> BitString {
        (0..n).fold(BitString { value: 0, len: 0 }, |acc, _| acc.concat(self))
    }

    #[inline]
    fn truncated(self, value: u64) -> BitString {
        BitString {
            value: value & bmask_range(1..=self.len),
            len: self.len,
        }
    }
}

impl Add<u64> for BitString {
    type Output = BitString;

    fn add(self, rhs: u64) -> BitString {
        self.truncated(self.value.wrapping_add(rhs))
    }
}

impl Sub<u64> for BitString {
    type Output = BitString;

    fn sub(self, rhs: u64) -> BitString {
        self.truncated(self.value.wrapping_sub(rhs))
    }
}

impl Shl<usize> for BitString {
    type Output = BitString;

    fn shl(self, rhs: usize) -> BitString {
        debug_assert!(rhs < 64, "shift amount {} is out of [0, 63]", rhs);
        self.truncated(self.value << rhs)
    }
}

impl Shr<usize> for BitString {
    type Output = BitString;

    fn shr(self, rhs: usize) -> BitString {
        debug_assert!(rhs < 64, "shift amount {} is out of [0, 63]", rhs);
        self.truncated(self.value >> rhs)
    }
}

impl BitAnd for BitString {
    type Output = BitString;

    fn bitand(self, rhs: BitString) -> BitString {
        debug_assert_eq!(self.len, rhs.len, "bitwise ops require equal lengths");
        self.truncated(self.value & rhs.value)
    }
}

impl BitOr for BitString {
    type Output = BitString;

    fn bitor(self, rhs: BitString) -> BitString {
        debug_assert_eq!(self.len, rhs.len, "bitwise ops require equal lengths");
        self.truncated(self.value | rhs.value)
    }
}

impl BitXor for BitString {
    type Output = BitString;

    fn bitxor(self, rhs: BitString) -> BitString {
        debug_assert_eq!(self.len, rhs.len, "bitwise ops require equal lengths");
        self.truncated(self.value ^ rhs.value)
    }
}

/// The `2^nbits`-element unit vector with a 1.0 at entry `index`.
pub fn onehot(nbits: usize, index: u64) -> Vec<f64> {
    debug_assert!(nbits < 64, "bit width {} is out of [0, 63]", nbits);
    debug_assert!(index < 1u64 << nbits, "index {} is out of the 2^{} space", index, nbits);
    let mut vector = vec![0.0; 1 << nbits];
    vector[index as usize] = 1.0;
    vector
}
