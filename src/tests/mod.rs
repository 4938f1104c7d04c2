mod properties;

use crate::codeword::CodewordIter;
use ahash::AHashSet;

/// Checks every cyclic-Gray-code property of a width-`width` transition
/// sequence, returning a description of the first defect found.
pub(crate) fn cyclic_gray_defect(transitions: &[u32], width: u32) -> Option<String> {
    let expected_len = 1usize << width;
    if transitions.len() != expected_len {
        return Some(format!(
            "length {} != 2^{width}",
            transitions.len()
        ));
    }
    if let Some(&bad) = transitions.iter().find(|&&p| p >= width) {
        return Some(format!("transition index {bad} out of range for width {width}"));
    }

    let words: Vec<u32> = CodewordIter::new(transitions).map(|w| w.bits()).collect();
    let distinct: AHashSet<u32> = words.iter().copied().collect();
    if distinct.len() != words.len() {
        return Some(format!(
            "only {} distinct codewords of {}",
            distinct.len(),
            words.len()
        ));
    }

    for i in 0..words.len() {
        let next = words[(i + 1) % words.len()];
        let distance = (words[i] ^ next).count_ones();
        if distance != 1 {
            return Some(format!(
                "codewords {i} and {} differ in {distance} bits",
                (i + 1) % words.len()
            ));
        }
    }

    None
}
