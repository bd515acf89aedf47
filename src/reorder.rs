//! Reordering of basis-indexed arrays under bit-group permutations.
//!
//! An array of length `2^N` is indexed by `N` bit groups (one bit per group).
//! Given a permutation `orders` of `1..=N`, the group at result position
//! `orders[i]` takes its value from source position `i`, so entry `b` of the
//! input lands at entry `permute(b, orders)` of the output. The lazy engine
//! walks the permuted indices with an incremental odometer step instead of
//! recomputing the full permutation per index.

use thiserror::Error;

use crate::mask::{log2i, take_bit};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    #[error("cannot reorder {groups} bit groups with a 64-bit index")]
    TooManyGroups { groups: usize },
    #[error("array length ({len}) is not a power of two")]
    LengthNotPowerOfTwo { len: usize },
    #[error("got {orders} group orders for an array of {groups} bit groups")]
    OrderCountMismatch { orders: usize, groups: usize },
    #[error("order entry {position} does not form a permutation of 1..={groups}")]
    NotAPermutation { position: usize, groups: usize },
}

/// Lazy sequence of reordered basis indices.
///
/// For a permutation of `N` groups, iteration yields `permute(b, orders)` for
/// every source index `b` in `0..2^N`. The configuration is immutable and
/// restartable; each [`iter`](Self::iter) call starts an independent pass.
#[derive(Clone, Debug)]
pub struct ReorderedBasis {
    orders: Vec<usize>,
    takers: Vec<u64>,
    differ: Vec<u64>,
    len: u64,
}

/// Build a lazy reordered basis from 1-based group orders.
pub fn reorder_lazy(orders: &[usize]) -> Result<ReorderedBasis, ReorderError> {
    validate_orders(orders)?;
    Ok(ReorderedBasis::from_orders(orders))
}

fn validate_orders(orders: &[usize]) -> Result<(), ReorderError> {
    let groups = orders.len();
    if groups > 63 {
        return Err(ReorderError::TooManyGroups { groups });
    }
    let mut seen = 0u64;
    for &position in orders {
        if position < 1 || position > groups || seen & (1 << (position - 1)) != 0 {
            return Err(ReorderError::NotAPermutation { position, groups });
        }
        seen |= 1 << (position - 1);
    }
    Ok(())
}

impl ReorderedBasis {
    /// Precondition: `orders` is a permutation of `1..=orders.len()`.
    fn from_orders(orders: &[usize]) -> Self {
        debug_assert!(validate_orders(orders).is_ok());
        let mut takers = Vec::with_capacity(orders.len());
        let mut differ = Vec::with_capacity(orders.len());
        let mut turned = 0u64;
        for &position in orders {
            let taker = 1u64 << (position - 1);
            // stepping over source bit i clears every lower source bit; in
            // destination coordinates that subtracts all previous takers
            differ.push(taker.wrapping_sub(turned));
            takers.push(taker);
            turned |= taker;
        }
        ReorderedBasis {
            orders: orders.to_vec(),
            takers,
            differ,
            len: 1u64 << orders.len(),
        }
    }

    /// Number of basis indices, `2^N`.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The group orders this basis was built from.
    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    /// The reordered index of a single source basis, computed from scratch.
    ///
    /// One full pass over the groups; iteration is cheaper for consecutive
    /// indices.
    pub fn permuted(&self, basis: u64) -> u64 {
        self.orders
            .iter()
            .enumerate()
            .fold(0, |out, (i, &position)| out | take_bit(basis, i + 1) << (position - 1))
    }

    /// A fresh pass over the reordered indices.
    pub fn iter(&self) -> ReorderedIndices<'_> {
        ReorderedIndices {
            config: self,
            basis: 0,
            produced: 0,
        }
    }
}

/// Cursor of one reordering pass. See [`ReorderedBasis::iter`].
#[derive(Clone, Debug)]
pub struct ReorderedIndices<'a> {
    config: &'a ReorderedBasis,
    basis: u64,
    produced: u64,
}

impl ReorderedIndices<'_> {
    /// Incremental odometer step: the first destination bit whose taker is
    /// clear is the turnover group; adding its differ clears every lower
    /// taker and sets it.
    fn next_basis(&self, basis: u64) -> u64 {
        for (&taker, &differ) in self.config.takers.iter().zip(&self.config.differ) {
            if basis & taker == 0 {
                return basis.wrapping_add(differ);
            }
        }
        basis
    }
}

impl Iterator for ReorderedIndices<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.produced == self.config.len {
            return None;
        }
        let index = self.basis;
        self.produced += 1;
        if self.produced < self.config.len {
            self.basis = self.next_basis(index);
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.config.len - self.produced) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ReorderedIndices<'_> {}

impl<'a> IntoIterator for &'a ReorderedBasis {
    type Item = u64;
    type IntoIter = ReorderedIndices<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reorder `data` according to 1-based group `orders`.
///
/// Entry `b` of `data` moves to entry `permute(b, orders)` of the result.
///
/// # Examples
///
/// ```
/// use bit_basis::reorder;
///
/// // swap the two bit groups of a 4-entry array
/// let reordered = reorder(&[0, 1, 2, 3], &[2, 1]).unwrap();
/// assert_eq!(reordered, vec![0, 2, 1, 3]);
/// ```
pub fn reorder<T: Clone>(data: &[T], orders: &[usize]) -> Result<Vec<T>, ReorderError> {
    if !data.len().is_power_of_two() {
        return Err(ReorderError::LengthNotPowerOfTwo { len: data.len() });
    }
    let groups = log2i(data.len() as u64);
    if orders.len() != groups {
        return Err(ReorderError::OrderCountMismatch {
            orders: orders.len(),
            groups,
        });
    }
    validate_orders(orders)?;
    // shapes are validated above
    Ok(unsafe { reorder_unchecked(data, orders) })
}

/// Reorder `data` according to group `orders`, skipping shape validation.
///
/// Exists for hot paths where the caller has validated the shapes once and
/// reorders many arrays with the same permutation.
///
/// # Safety
///
/// `data.len()` must be `2^orders.len()` and `orders` must be a permutation
/// of `1..=orders.len()`. Violations are only caught in debug builds.
pub unsafe fn reorder_unchecked<T: Clone>(data: &[T], orders: &[usize]) -> Vec<T> {
    debug_assert!(data.len().is_power_of_two());
    debug_assert_eq!(data.len(), 1 << orders.len());
    // entry d of the output is the source entry mapped onto d, which is the
    // permutation of d under the inverse orders
    let inverse = inverse_orders(orders);
    ReorderedBasis::from_orders(&inverse)
        .iter()
        .map(|source| data[source as usize].clone())
        .collect()
}

/// Reorder `data` with the fully reversed group order `(N, N-1, .., 1)`.
///
/// For binary groups this reflects the bits of every index, and it is its own
/// inverse.
pub fn invorder<T: Clone>(data: &[T]) -> Result<Vec<T>, ReorderError> {
    if !data.len().is_power_of_two() {
        return Err(ReorderError::LengthNotPowerOfTwo { len: data.len() });
    }
    let groups = log2i(data.len() as u64);
    let orders: Vec<usize> = (1..=groups).rev().collect();
    reorder(data, &orders)
}

fn inverse_orders(orders: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; orders.len()];
    for (i, &position) in orders.iter().enumerate() {
        inverse[position - 1] = i + 1;
    }
    inverse
}
