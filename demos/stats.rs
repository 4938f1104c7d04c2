//! Demonstrates large-gap Gray code construction:
//!
//! 1. Gap statistics for the reference codes from 3 to 20 bits
//! 2. Four alternative 16-bit constructions and their statistics
//! 3. The 7-bit code printed bit-row by bit-row; note the run lengths

use largegap_rs::{CodeStats, LargeGapGrayCode, DEFAULT_CAPACITY};

fn print_header() {
    println!(
        "{:>5} {:>12} {:>8} {:>8} {:>10} {:>10} {:>13}",
        "n", "method", "min gap", "max gap", "min count", "max count", "gap variance"
    );
    println!("{}", "-".repeat(72));
}

fn print_row(stats: &CodeStats) {
    println!(
        "{:>5} {:>12} {:>8} {:>8} {:>10} {:>10} {:>13.4}",
        stats.bit_width,
        stats.provenance,
        stats.min_gap,
        stats.max_gap,
        stats.min_count,
        stats.max_count,
        stats.gap_variance
    );
}

fn main() {
    let mut code = LargeGapGrayCode::new();

    println!("Statistics for all large-gap Gray codes\n");
    print_header();
    for width in 3..=DEFAULT_CAPACITY {
        if let Some(stats) = code.stats(width) {
            print_row(&stats);
        }
    }

    println!("\nAlternative 16-bit constructions\n");
    print_header();
    for (n, m, s, t) in [(14, 2, 3, 1), (8, 8, 129, 127), (9, 7, 65, 63), (11, 5, 21, 11)] {
        code.combine_theorem1(n, m, s, t).expect("valid parameters");
        print_row(&code.stats(16).expect("width 16 is populated"));
    }

    println!("\nThe 7-bit code, one row per bit (min gap 5, max gap 11)\n");
    let words = code.codewords(7);
    for bit in 0..7 {
        let row: String = words
            .iter()
            .map(|w| if w.bit(bit) { '1' } else { '0' })
            .collect();
        println!("{row}");
    }
}
