use crate::balanced::{balanced_word, Component};
use crate::code::LargeGapGrayCode;
use crate::tests::cyclic_gray_defect;
use proptest::prelude::*;

/// Strategy for a positive odd integer below 200.
fn odd() -> impl Strategy<Value = u32> {
    (0u32..100).prop_map(|k| 2 * k + 1)
}

/// Strategy for a bit-width the seeded table already holds a code for.
fn base_width() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(2), Just(3), Just(4), Just(6)]
}

/// Valid Theorem-1 parameters (n, m, s, t) over the seeded base codes.
fn theorem1_params() -> impl Strategy<Value = (u32, u32, u32, u32)> {
    (base_width(), base_width()).prop_flat_map(|(a, b)| {
        let (n, m) = (a.max(b), a.min(b));
        (0..1u32 << (m - 1)).prop_map(move |k| {
            let s = 2 * k + 1;
            (n, m, s, (1 << m) - s)
        })
    })
}

/// Valid Theorem-2 parameters (n, m, r, s, t); widths capped at 4 so the
/// combined code stays small.
fn theorem2_params() -> impl Strategy<Value = (u32, u32, u32, u32, u32)> {
    prop::collection::vec(1u32..=4, 3).prop_flat_map(|mut widths| {
        widths.sort_unstable_by(|a, b| b.cmp(a));
        let (n, m, r) = (widths[0], widths[1], widths[2]);
        (0..1u32 << (r - 1)).prop_map(move |k| {
            let s = 2 * k + 1;
            (n, m, r, s, (1 << r) - s)
        })
    })
}

proptest! {
    /// Property 1: Balanced word symbol counts are exact.
    /// Any positive odd s, t yield exactly s Firsts and t Seconds.
    #[test]
    fn prop_balanced_counts(s in odd(), t in odd()) {
        let word = balanced_word(s, t);

        prop_assert_eq!(word.len() as u32, s + t);
        let firsts = word.iter().filter(|&&c| c == Component::First).count();
        let seconds = word.iter().filter(|&&c| c == Component::Second).count();
        prop_assert_eq!(firsts as u32, s);
        prop_assert_eq!(seconds as u32, t);
    }

    /// Property 2: The greedy rule only emits a Second while the running
    /// ratio of Seconds is still strictly below the target t/s.
    #[test]
    fn prop_balanced_prefix_ratio(s in odd(), t in odd()) {
        let word = balanced_word(s, t);

        let mut firsts: u64 = 0;
        let mut seconds: u64 = 0;
        for &c in &word {
            if c == Component::Second {
                prop_assert!(
                    seconds * (s as u64) < (t as u64) * (firsts + 1),
                    "Second emitted at or past the target ratio"
                );
                seconds += 1;
            } else {
                firsts += 1;
            }
        }
    }

    /// Property 3: Theorem 1 over any two seeded codes yields a cyclic
    /// Gray code of the combined width.
    #[test]
    fn prop_theorem1_yields_cyclic_gray((n, m, s, t) in theorem1_params()) {
        let mut code = LargeGapGrayCode::with_capacity(12);
        code.combine_theorem1(n, m, s, t).expect("parameters are valid");

        let width = n + m;
        let defect = cyclic_gray_defect(code.transition_sequence(width), width);
        prop_assert!(defect.is_none(), "width {}: {}", width, defect.unwrap());
    }

    /// Property 4: Theorem 2 over any three seeded codes yields a cyclic
    /// Gray code of the combined width.
    #[test]
    fn prop_theorem2_yields_cyclic_gray((n, m, r, s, t) in theorem2_params()) {
        let mut code = LargeGapGrayCode::with_capacity(12);
        code.combine_theorem2(n, m, r, s, t).expect("parameters are valid");

        let width = n + m + r;
        let defect = cyclic_gray_defect(code.transition_sequence(width), width);
        prop_assert!(defect.is_none(), "width {}: {}", width, defect.unwrap());
    }

    /// Property 5: A rejected combination never mutates the table.
    #[test]
    fn prop_rejected_combination_is_pure(
        n in 0u32..16, m in 0u32..16, s in 0u32..40, t in 0u32..40,
    ) {
        let mut code = LargeGapGrayCode::with_capacity(12);
        let snapshot: Vec<Vec<u32>> = (1..=12)
            .map(|w| code.transition_sequence(w).to_vec())
            .collect();

        if code.combine_theorem1(n, m, s, t).is_err() {
            for (i, before) in snapshot.iter().enumerate() {
                prop_assert_eq!(
                    code.transition_sequence(i as u32 + 1),
                    before.as_slice()
                );
            }
        }
    }
}

/// Bolero fuzz test: combinators never panic, whatever the parameters.
#[test]
fn fuzz_combinators_no_panic() {
    bolero::check!()
        .with_type::<(u8, u8, u8, u8, u8)>()
        .for_each(|&(n, m, r, s, t)| {
            let mut code = LargeGapGrayCode::with_capacity(8);
            let _ = code.combine_theorem1(n as u32, m as u32, s as u32, t as u32);
            let _ = code.combine_theorem2(n as u32, m as u32, r as u32, s as u32, t as u32);

            // Reads stay total afterwards.
            for width in 0..=9 {
                let _ = code.transition_sequence(width);
                let _ = code.stats(width);
            }
        });
}

/// Bolero fuzz test: gap statistics are defined for every populated width.
#[test]
fn fuzz_stats_defined_for_populated_widths() {
    let code = LargeGapGrayCode::new();
    bolero::check!().with_type::<u8>().for_each(|&width| {
        let width = width as u32;
        let stats = code.stats(width);
        if !code.transition_sequence(width).is_empty() {
            let stats = stats.expect("populated width has statistics");
            assert!(stats.min_gap <= stats.max_gap);
            assert!(stats.gap_variance >= 0.0);
        } else {
            assert!(stats.is_none());
        }
    });
}
