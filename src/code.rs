use crate::codeword::Codeword;
use crate::stats::{gap_histogram, gap_variance, max_gap, min_gap, CodeStats};
use crate::table::CodeTable;

/// Capacity of the reference construction: every width up to 20 bits.
pub const DEFAULT_CAPACITY: u32 = 20;

// Base codes supplied as fixed data. Widths 1-4 were derived by hand,
// width 6 by an offline backtracking search; none of them are computed
// here.
const SEED_WIDTH_1: &[u32] = &[0, 0];
const SEED_WIDTH_2: &[u32] = &[0, 1, 0, 1];
const SEED_WIDTH_3: &[u32] = &[0, 1, 0, 2, 0, 1, 0, 2];
const SEED_WIDTH_4: &[u32] = &[0, 1, 2, 3, 2, 1, 0, 2, 0, 3, 0, 1, 3, 2, 3, 1];
#[rustfmt::skip]
const SEED_WIDTH_6: &[u32] = &[
    0, 1, 2, 3, 4, 5, 0, 2, 4, 1, 3, 2, 0, 5, 4, 2,
    3, 1, 4, 0, 2, 5, 3, 4, 2, 1, 0, 4, 3, 5, 2, 4,
    0, 1, 2, 3, 4, 5, 0, 2, 4, 1, 3, 2, 0, 5, 4, 2,
    3, 1, 4, 0, 2, 5, 3, 4, 2, 1, 0, 4, 3, 5, 2, 4,
];

const HAND_SEEDS: &[(u32, &[u32])] = &[
    (1, SEED_WIDTH_1),
    (2, SEED_WIDTH_2),
    (3, SEED_WIDTH_3),
    (4, SEED_WIDTH_4),
];

/// Theorem-1 parameter tuples (n, m, s, t) of the reference construction,
/// in dependency order; together with the width-5 Theorem-2 code they
/// populate every width from 7 through 20.
const THEOREM1_SCHEDULE: &[(u32, u32, u32, u32)] = &[
    (5, 2, 3, 1),
    (6, 2, 3, 1),
    (7, 2, 3, 1),
    (5, 5, 17, 15),
    (9, 2, 3, 1),
    (7, 5, 17, 15),
    (8, 5, 19, 13),
    (7, 7, 65, 63),
    (10, 5, 21, 11),
    (11, 5, 21, 11),
    (10, 7, 73, 55),
    (11, 7, 75, 53),
    (14, 5, 23, 9),
    (10, 10, 513, 511),
];

/// Large-gap Gray codes: one cyclic Gray code per bit-width, constructed
/// so that successive uses of the same bit position are far apart.
///
/// Seeded with base codes for the smallest widths, then grown by the two
/// combination theorems. Reads are pure; the only mutation is an explicit
/// combinator call replacing one width's entry.
pub struct LargeGapGrayCode {
    pub(crate) table: CodeTable,
}

impl LargeGapGrayCode {
    /// Builds the reference construction: seeds plus the combination
    /// schedule populating every width from 1 through 20.
    pub fn new() -> Self {
        let mut code = Self::with_capacity(DEFAULT_CAPACITY);

        code.combine_theorem2(2, 2, 1, 1, 1)
            .expect("width-5 construction parameters are valid");
        for &(n, m, s, t) in THEOREM1_SCHEDULE {
            code.combine_theorem1(n, m, s, t)
                .expect("schedule parameters are valid");
        }

        code
    }

    /// Builds a table holding only the seeded base codes (widths 1-4 and
    /// 6, as far as they fit), leaving all combination to the caller.
    ///
    /// `capacity` bounds every width reachable by combinators and must
    /// not exceed [`Codeword::MAX_WIDTH`].
    pub fn with_capacity(capacity: u32) -> Self {
        assert!(
            capacity <= Codeword::MAX_WIDTH,
            "capacity {capacity} exceeds the codeword width"
        );

        let mut table = CodeTable::new(capacity);
        for &(width, transitions) in HAND_SEEDS {
            if width <= capacity {
                table.put(width, transitions.to_vec(), "by hand".to_string());
            }
        }
        if capacity >= 6 {
            table.put(6, SEED_WIDTH_6.to_vec(), "backtrack".to_string());
        }

        Self { table }
    }

    /// The largest bit-width this table can hold.
    pub fn capacity(&self) -> u32 {
        self.table.capacity()
    }

    /// The transition sequence of the width-`bit_width` code.
    ///
    /// Empty when `bit_width` is 0, beyond capacity, or not yet
    /// populated. For an unmodified width, repeated calls return
    /// identical data.
    pub fn transition_sequence(&self, bit_width: u32) -> &[u32] {
        self.table
            .get(bit_width)
            .map(|entry| entry.transitions.as_slice())
            .unwrap_or(&[])
    }

    /// Gap statistics for the width-`bit_width` code, or None when that
    /// width is unpopulated or its gap histogram is empty.
    pub fn stats(&self, bit_width: u32) -> Option<CodeStats> {
        let entry = self.table.get(bit_width)?;
        let histogram = gap_histogram(&entry.transitions);

        let (min_gap, min_count) = min_gap(&histogram)?;
        let (max_gap, max_count) = max_gap(&histogram)?;
        let gap_variance = gap_variance(&histogram)?;

        Some(CodeStats {
            bit_width,
            provenance: entry.provenance.clone(),
            min_gap,
            min_count,
            max_gap,
            max_count,
            gap_variance,
        })
    }
}

impl Default for LargeGapGrayCode {
    fn default() -> Self {
        Self::new()
    }
}
