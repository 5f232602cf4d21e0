//! Per-record metrics used by the filters.
//!
//! Empty inputs never divide by zero: an empty sequence has 0% GC content, and an
//! empty quality string has a mean quality of 0.

/// Offset of the Sanger/Illumina 1.8+ quality encoding.
pub const PHRED_OFFSET: u8 = 33;

/// Percentage (0 to 100) of bases which are `G` or `C`, ignoring case.
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    let gc = seq
        .iter()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();

    100.0 * (gc as f64) / (seq.len() as f64)
}

#[inline]
pub fn length(seq: &[u8]) -> usize {
    seq.len()
}

/// Decodes a stored quality string into Phred scores.
pub fn decode_phred(qual: &[u8]) -> impl Iterator<Item = u8> + '_ {
    qual.iter().map(|q| q.saturating_sub(PHRED_OFFSET))
}

/// Arithmetic mean of already-decoded Phred scores.
pub fn mean_quality(scores: impl IntoIterator<Item = u8>) -> f64 {
    let (total, count) = scores
        .into_iter()
        .fold((0u64, 0usize), |(t, c), q| (t + q as u64, c + 1));

    if count == 0 {
        0.0
    } else {
        (total as f64) / (count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gc_of_balanced_sequence() {
        assert_eq!(gc_content("ATGC".repeat(10).as_bytes()), 50.0);
        assert_eq!(gc_content(b"AAAA"), 0.0);
        assert_eq!(gc_content(b"GCGC"), 100.0);
    }

    #[test]
    fn gc_ignores_case() {
        assert_eq!(gc_content(b"atgc"), gc_content(b"ATGC"));
    }

    #[test]
    fn empty_inputs_are_zero() {
        assert_eq!(gc_content(b""), 0.0);
        assert_eq!(length(b""), 0);
        assert_eq!(mean_quality(decode_phred(b"")), 0.0);
    }

    #[test]
    fn phred_decoding() {
        // '5' = 20, 'I' = 40, '+' = 10
        assert_eq!(decode_phred(b"5I+").collect::<Vec<_>>(), vec![20, 40, 10]);
        assert_eq!(mean_quality(decode_phred(b"5I+")), 70.0 / 3.0);
    }

    #[test]
    fn mean_of_scores() {
        assert_eq!(mean_quality([20, 40]), 30.0);
        assert_eq!(mean_quality(vec![40; 40]), 40.0);
    }
}
