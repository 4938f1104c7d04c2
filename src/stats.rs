use ahash::AHashMap as HashMap;

/// Gap length (cyclic distance between successive uses of the same bit
/// position) mapped to its occurrence count.
pub type GapHistogram = HashMap<u32, u32>;

/// Computes the cyclic gap histogram of a transition sequence.
///
/// The sequence is scanned twice back to back so wrap-around gaps are
/// seen, and only gaps observed during the second pass are recorded:
/// by then every bit position carries a real predecessor, so the
/// non-periodic start-up boundary cannot contaminate the counts. Each
/// position's latest occurrence is tracked at `pass * len + i`; the
/// very first sighting is recorded bare, which makes the first
/// second-pass gap span the cycle boundary correctly.
pub fn gap_histogram(transitions: &[u32]) -> GapHistogram {
    let positions = transitions.iter().map(|&t| t + 1).max().unwrap_or(0);
    let mut last_seen: Vec<Option<usize>> = vec![None; positions as usize];
    let mut histogram = GapHistogram::default();

    let len = transitions.len();
    for pass in 1..=2usize {
        for (i, &position) in transitions.iter().enumerate() {
            let slot = &mut last_seen[position as usize];
            match *slot {
                None => *slot = Some(i),
                Some(previous) => {
                    let here = pass * len + i;
                    let gap = (here - previous) as u32;
                    *slot = Some(here);
                    if pass == 2 {
                        *histogram.entry(gap).or_insert(0) += 1;
                    }
                }
            }
        }
    }

    histogram
}

/// Smallest gap present, with its occurrence count. None when empty.
pub fn min_gap(histogram: &GapHistogram) -> Option<(u32, u32)> {
    histogram
        .iter()
        .min_by_key(|&(gap, _)| *gap)
        .map(|(&gap, &count)| (gap, count))
}

/// Largest gap present, with its occurrence count. None when empty.
pub fn max_gap(histogram: &GapHistogram) -> Option<(u32, u32)> {
    histogram
        .iter()
        .max_by_key(|&(gap, _)| *gap)
        .map(|(&gap, &count)| (gap, count))
}

/// Count-weighted variance of the gap lengths. None when empty.
pub fn gap_variance(histogram: &GapHistogram) -> Option<f64> {
    let runs: u64 = histogram.values().map(|&c| c as u64).sum();
    if runs == 0 {
        return None;
    }

    let sum: u64 = histogram
        .iter()
        .map(|(&gap, &count)| gap as u64 * count as u64)
        .sum();
    let mean = sum as f64 / runs as f64;

    let squared_diff: f64 = histogram
        .iter()
        .map(|(&gap, &count)| (gap as f64 - mean).powi(2) * count as f64)
        .sum();

    Some(squared_diff / runs as f64)
}

/// One row of gap statistics for a constructed code.
///
/// Everything a tabular report needs: the width, how the code was
/// produced, and the gap distribution summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeStats {
    /// Width of the code these statistics describe.
    pub bit_width: u32,
    /// How the code was produced ("by hand", "backtrack", "(5 + 2)", ...).
    pub provenance: String,
    /// Smallest gap between reuses of a bit position.
    pub min_gap: u32,
    /// Number of times the smallest gap occurs.
    pub min_count: u32,
    /// Largest gap between reuses of a bit position.
    pub max_gap: u32,
    /// Number of times the largest gap occurs.
    pub max_count: u32,
    /// Count-weighted variance of the gap lengths.
    pub gap_variance: f64,
}
