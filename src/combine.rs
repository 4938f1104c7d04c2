use crate::balanced::{balanced_word, relabel_last, replicate, Component};
use crate::code::LargeGapGrayCode;
use std::error::Error;
use std::fmt;

/// A combinator precondition that did not hold.
///
/// Reported to the caller instead of mutating the table; the entry for
/// the target bit-width is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Component widths must satisfy n >= m (>= r) >= 1.
    Ordering,
    /// The interleaving counts s and t must be positive and odd.
    OddPositive { value: u32 },
    /// s + t must equal 2^w for the smallest component width w.
    SymbolSum { sum: u32, expected: u32 },
    /// The combined width does not fit the table.
    Capacity { width: u32, capacity: u32 },
    /// No code has been constructed for a component width.
    MissingComponent { width: u32 },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Ordering => {
                write!(f, "component widths must be ordered n >= m >= r >= 1")
            }
            ConstraintViolation::OddPositive { value } => {
                write!(f, "interleaving count {value} is not a positive odd integer")
            }
            ConstraintViolation::SymbolSum { sum, expected } => {
                write!(f, "s + t = {sum}, expected {expected}")
            }
            ConstraintViolation::Capacity { width, capacity } => {
                write!(f, "combined width {width} exceeds table capacity {capacity}")
            }
            ConstraintViolation::MissingComponent { width } => {
                write!(f, "no code available for component width {width}")
            }
        }
    }
}

impl Error for ConstraintViolation {}

fn check_odd_positive(value: u32) -> Result<(), ConstraintViolation> {
    if value > 0 && value % 2 == 1 {
        Ok(())
    } else {
        Err(ConstraintViolation::OddPositive { value })
    }
}

fn check_symbol_sum(s: u32, t: u32, expected: u32) -> Result<(), ConstraintViolation> {
    let sum = s as u64 + t as u64;
    if sum == u64::from(expected) {
        Ok(())
    } else {
        Err(ConstraintViolation::SymbolSum {
            sum: u32::try_from(sum).unwrap_or(u32::MAX),
            expected,
        })
    }
}

/// Walks the interleaving word, drawing each transition from the
/// component code its symbol names.
///
/// Cursors advance independently and wrap cyclically, so each component
/// is traversed whole-passes-at-a-time across the replicated blocks.
/// Second- and third-component indices are shifted past the widths below
/// them, keeping the three index ranges disjoint.
fn interleave(word: &[Component], a: &[u32], b: &[u32], c: &[u32], n: u32, m: u32) -> Vec<u32> {
    let mut merged = Vec::with_capacity(word.len());
    let (mut idx_a, mut idx_b, mut idx_c) = (0usize, 0usize, 0usize);

    for &component in word {
        match component {
            Component::First => {
                merged.push(a[idx_a % a.len()]);
                idx_a += 1;
            }
            Component::Second => {
                merged.push(b[idx_b % b.len()] + n);
                idx_b += 1;
            }
            Component::Third => {
                merged.push(c[idx_c % c.len()] + n + m);
                idx_c += 1;
            }
        }
    }

    merged
}

impl LargeGapGrayCode {
    /// Combines the width-n and width-m codes into a width-(n+m) code.
    ///
    /// Preconditions: `n >= m >= 1`; `s` and `t` positive odd with
    /// `s + t = 2^m`; `n + m` within capacity; both component codes
    /// present. On violation the table is left unchanged.
    ///
    /// The balanced word over `{First, Second}` is replicated 2^n times
    /// and each slot draws the next transition from its component, with
    /// the second component's bit positions shifted up by `n`.
    pub fn combine_theorem1(
        &mut self,
        n: u32,
        m: u32,
        s: u32,
        t: u32,
    ) -> Result<(), ConstraintViolation> {
        if !(n >= m && m >= 1) {
            return Err(ConstraintViolation::Ordering);
        }
        check_odd_positive(s)?;
        check_odd_positive(t)?;
        // Capacity first: it bounds m before the 2^m computation.
        let width = self.check_capacity(n as u64 + m as u64)?;
        check_symbol_sum(s, t, 1u32 << m)?;

        let word = replicate(&balanced_word(s, t), 1usize << n);
        let merged = {
            let a = self.component(n)?;
            let b = self.component(m)?;
            interleave(&word, a, b, &[], n, m)
        };

        self.table.put(width, merged, format!("({n} + {m})"));
        Ok(())
    }

    /// Combines the width-n, width-m and width-r codes into a
    /// width-(n+m+r) code.
    ///
    /// Preconditions: `n >= m >= r >= 1`; `s` and `t` positive odd with
    /// `s + t = 2^r`; `n + m + r` within capacity; all three component
    /// codes present. On violation the table is left unchanged.
    ///
    /// The two smaller codes are interleaved as in Theorem 1, except the
    /// last `Second` slot of each replicated block is relabeled to carve
    /// out exactly one slot per block for the third component.
    pub fn combine_theorem2(
        &mut self,
        n: u32,
        m: u32,
        r: u32,
        s: u32,
        t: u32,
    ) -> Result<(), ConstraintViolation> {
        if !(n >= m && m >= r && r >= 1) {
            return Err(ConstraintViolation::Ordering);
        }
        check_odd_positive(s)?;
        check_odd_positive(t)?;
        let width = self.check_capacity(n as u64 + m as u64 + r as u64)?;
        check_symbol_sum(s, t, 1u32 << r)?;

        let mut block = replicate(&balanced_word(s, t), 1usize << n);
        relabel_last(&mut block, Component::Second, Component::Third);
        let word = replicate(&block, 1usize << m);

        let merged = {
            let a = self.component(n)?;
            let b = self.component(m)?;
            let c = self.component(r)?;
            interleave(&word, a, b, c, n, m)
        };

        self.table
            .put(width, merged, format!("({n} + {m} + {r})"));
        Ok(())
    }

    fn check_capacity(&self, width: u64) -> Result<u32, ConstraintViolation> {
        let capacity = self.table.capacity();
        if width > capacity as u64 {
            Err(ConstraintViolation::Capacity {
                width: u32::try_from(width).unwrap_or(u32::MAX),
                capacity,
            })
        } else {
            Ok(width as u32)
        }
    }

    fn component(&self, width: u32) -> Result<&[u32], ConstraintViolation> {
        self.table
            .get(width)
            .map(|entry| entry.transitions.as_slice())
            .ok_or(ConstraintViolation::MissingComponent { width })
    }
}
