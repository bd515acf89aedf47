//! Bit-level indexing for basis states of power-of-two linear spaces.
//!
//! A linear space over `n` bits has `2^n` basis states, each labelled by an
//! integer index. This crate provides the primitives simulation kernels need
//! to manipulate those labels without materializing the exponential index
//! sets: mask algebra over `u64` indices, a fixed-length [`BitString`] value,
//! lazy enumeration of controlled subspaces and reordering of basis-indexed
//! arrays under bit-group permutations.
//!
//! Bit positions are 1-based in array order: position 1 is the least
//! significant bit.
//!
//! Basic usage:
//!
//! ```
//! use bit_basis::{bmask, itercontrol, reorder};
//!
//! // positions 1, 3 and 4, counted from the least significant bit
//! assert_eq!(bmask(&[1, 3, 4]), 0b1101);
//!
//! // every 7-bit index matching 0xx10x1, in ascending order
//! let it = itercontrol(7, &[1, 3, 4, 7], &[1, 0, 1, 0]).unwrap();
//! assert_eq!(it.len(), 8);
//! assert_eq!(it.iter().next(), Some(0b0001001));
//!
//! // re-express a 2-bit state vector with its groups swapped
//! let swapped = reorder(&[0.0, 0.1, 0.2, 0.3], &[2, 1]).unwrap();
//! assert_eq!(swapped, vec![0.0, 0.2, 0.1, 0.3]);
//! ```

pub mod bit_string;
pub mod controlled;
pub mod mask;
pub mod reorder;

pub use bit_string::{onehot, BitString, BitStringError};
pub use controlled::{controller, itercontrol, ControlError, ControlledIndices, IterControl};
pub use mask::{
    all_set, any_set, baddrs, bit_len, bmask, bmask_range, distance, flip, log2i, matches, negate_bits, reflect_bits,
    set_bits, swap_bits, swap_bits_masked, take_bit, truncate_bits,
};
pub use reorder::{invorder, reorder, reorder_lazy, reorder_unchecked, ReorderError, ReorderedBasis, ReorderedIndices};
