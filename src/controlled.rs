//! Enumeration of controlled subspaces.
//!
//! A control fixes the bit at one position to a required value; the iterator
//! produced by [`itercontrol`] walks every index of the full space whose
//! controlled bits match, in ascending order, without scanning the
//! uncontrolled part of the range.

use itertools::Itertools;
use thiserror::Error;

use crate::mask::{bmask, bmask_range, matches};

/// Controlled subspaces larger than this bit width cannot be enumerated with
/// a 64-bit counter.
pub const MAX_CONTROL_BITS: usize = 63;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("total bit count ({total_bits}) exceeds the supported maximum of 63")]
    TooManyBits { total_bits: usize },
    #[error("control position {position} is outside [1, {total_bits}]")]
    PositionOutOfRange { position: usize, total_bits: usize },
    #[error("control position {position} is repeated")]
    DuplicatePosition { position: usize },
    #[error("got {values} control values for {positions} control positions")]
    ValueCountMismatch { positions: usize, values: usize },
    #[error("control value {value} is not a bit (expected 0 or 1)")]
    InvalidBitValue { value: u64 },
}

/// One maximal run of contiguous control positions.
///
/// `mask` selects the counter bits that are already in their final place;
/// everything above it shifts left by `shift` to leave room for the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ShiftGroup {
    mask: u64,
    shift: u32,
}

/// Configuration for iterating a controlled subspace.
///
/// Each element is a pure function of a counter in `0..len`, so the
/// configuration is freely restartable and can back any number of
/// independent cursors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterControl {
    base: u64,
    groups: Vec<ShiftGroup>,
    len: u64,
}

/// Build an iterator configuration over the subspace of `total_bits`-wide
/// indices whose bits at `positions` (1-based) equal `values` (0 or 1 each).
///
/// The enumeration is ascending, each matching index appears exactly once,
/// and its length is `2^(total_bits - positions.len())`.
///
/// # Examples
///
/// To iterate through all 7-bit indices satisfying `0xx10x1` (read in array
/// order, position 1 rightmost):
///
/// ```
/// use bit_basis::itercontrol;
///
/// let it = itercontrol(7, &[1, 3, 4, 7], &[1, 0, 1, 0]).unwrap();
/// let indices: Vec<u64> = it.iter().collect();
/// assert_eq!(indices[0], 0b0001001);
/// assert_eq!(indices[7], 0b0111011);
/// ```
pub fn itercontrol(total_bits: usize, positions: &[usize], values: &[u64]) -> Result<IterControl, ControlError> {
    if total_bits > MAX_CONTROL_BITS {
        return Err(ControlError::TooManyBits { total_bits });
    }
    if values.len() != positions.len() {
        return Err(ControlError::ValueCountMismatch {
            positions: positions.len(),
            values: values.len(),
        });
    }
    let mut base = 0u64;
    for (&position, &value) in positions.iter().zip(values) {
        if position < 1 || position > total_bits {
            return Err(ControlError::PositionOutOfRange { position, total_bits });
        }
        if value > 1 {
            return Err(ControlError::InvalidBitValue { value });
        }
        base |= value << (position - 1);
    }
    if let Some(&position) = positions.iter().duplicates().next() {
        return Err(ControlError::DuplicatePosition { position });
    }
    let groups = group_shift(positions);
    let len = 1u64 << (total_bits - positions.len());
    Ok(IterControl { base, groups, len })
}

/// Fold sorted control positions into maximal contiguous runs.
///
/// For a run starting at position `p` with length `l`, counter bits below `p`
/// are final and everything above them moves left by `l`. Runs are emitted in
/// ascending order so that each step works on already-final low bits.
fn group_shift(positions: &[usize]) -> Vec<ShiftGroup> {
    let mut groups: Vec<ShiftGroup> = Vec::new();
    let mut previous = usize::MAX - 1;
    for position in positions.iter().copied().sorted() {
        if position == previous + 1 {
            groups.last_mut().expect("runs start with a non-adjacent position").shift += 1;
        } else {
            groups.push(ShiftGroup {
                mask: bmask_range(1..=position - 1),
                shift: 1,
            });
        }
        previous = position;
    }
    groups
}

/// Keep the bits of `index` under `mask`, shift the rest left by `shift`.
#[inline]
fn lmove(index: u64, mask: u64, shift: u32) -> u64 {
    ((index & !mask) << shift) | (index & mask)
}

impl IterControl {
    /// Number of indices in the subspace.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `i`-th index of the subspace in ascending order.
    ///
    /// Precondition: `i < self.len()`. This is not checked in release builds.
    #[inline]
    pub fn get(&self, i: u64) -> u64 {
        debug_assert!(i < self.len, "counter {} is out of the subspace of size {}", i, self.len);
        let mut index = i;
        for group in &self.groups {
            index = lmove(index, group.mask, group.shift);
        }
        index | self.base
    }

    /// A fresh cursor over the subspace.
    pub fn iter(&self) -> ControlledIndices<'_> {
        ControlledIndices { config: self, counter: 0 }
    }

    /// Apply `f` to every index of the subspace in ascending order.
    ///
    /// Equivalent to draining [`iter`](Self::iter), without the per-element
    /// iterator plumbing.
    pub fn for_each<F: FnMut(u64)>(&self, mut f: F) {
        for i in 0..self.len {
            f(self.get(i));
        }
    }
}

/// Cursor over a controlled subspace. See [`IterControl::iter`].
#[derive(Clone, Debug)]
pub struct ControlledIndices<'a> {
    config: &'a IterControl,
    counter: u64,
}

impl Iterator for ControlledIndices<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.counter == self.config.len {
            return None;
        }
        let index = self.config.get(self.counter);
        self.counter += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.config.len - self.counter) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ControlledIndices<'_> {}

impl<'a> IntoIterator for &'a IterControl {
    type Item = u64;
    type IntoIter = ControlledIndices<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a membership predicate for the subspace controlled by `positions`
/// and `values`, without fixing a total bit width.
pub fn controller(positions: &[usize], values: &[u64]) -> Result<impl Fn(u64) -> bool, ControlError> {
    if values.len() != positions.len() {
        return Err(ControlError::ValueCountMismatch {
            positions: positions.len(),
            values: values.len(),
        });
    }
    let mut target = 0u64;
    for (&position, &value) in positions.iter().zip(values) {
        if position < 1 || position > 64 {
            return Err(ControlError::PositionOutOfRange { position, total_bits: 64 });
        }
        if value > 1 {
            return Err(ControlError::InvalidBitValue { value });
        }
        target |= value << (position - 1);
    }
    if let Some(&position) = positions.iter().duplicates().next() {
        return Err(ControlError::DuplicatePosition { position });
    }
    let mask = bmask(positions);
    Ok(move |index: u64| matches(index, mask, target))
}
