//! # Large-Gap Gray Codes
//!
//! Construction of cyclic binary Gray codes whose transition sequences
//! keep successive uses of the same bit position far apart (large-gap
//! Gray codes, LGGC). Long low-frequency bit runs make these codes
//! attractive wherever bit flips are error-prone, e.g. structured-light
//! stripe patterns.
//!
//! A [`LargeGapGrayCode`] table is seeded with hand-built and
//! backtracking-derived base codes and grown by two combination
//! theorems, which weave the transition sequences of smaller codes
//! together along a ratio-balanced interleaving word.
//!
//! ## Example
//!
//! ```
//! use largegap_rs::LargeGapGrayCode;
//!
//! let code = LargeGapGrayCode::new();
//!
//! // Widths 1 through 20 are populated by the reference construction.
//! let seq = code.transition_sequence(7);
//! assert_eq!(seq.len(), 128);
//!
//! // The 7-bit code never reuses a bit position within 5 steps.
//! let stats = code.stats(7).unwrap();
//! assert_eq!(stats.min_gap, 5);
//! assert_eq!(stats.max_gap, 11);
//! ```

mod balanced;
mod code;
mod codeword;
mod combine;
mod stats;
mod table;

#[cfg(test)]
mod tests;

pub use code::{LargeGapGrayCode, DEFAULT_CAPACITY};
pub use codeword::{Codeword, CodewordIter};
pub use combine::ConstraintViolation;
pub use stats::{gap_histogram, gap_variance, max_gap, min_gap, CodeStats, GapHistogram};
