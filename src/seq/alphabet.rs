/// The fixed symbol set of one kind of sequence, and its complement table if the kind
/// has base-pairing semantics.
pub trait Alphabet {
    /// Name of the sequence type, used in errors and `Debug` output.
    const NAME: &'static str;

    /// Valid (uppercase) symbols.
    const SYMBOLS: &'static [u8];

    /// Base pairs as `(symbol, complement)`.
    const COMPLEMENT: Option<&'static [(u8, u8)]> = None;

    #[inline(always)]
    fn is_valid(symbol: u8) -> bool {
        Self::SYMBOLS.contains(&symbol)
    }

    fn complement_of(symbol: u8) -> Option<u8> {
        Self::COMPLEMENT?
            .iter()
            .find(|(from, _)| *from == symbol)
            .map(|(_, to)| *to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dna;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rna;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protein;

impl Alphabet for Dna {
    const NAME: &'static str = "DNASequence";
    const SYMBOLS: &'static [u8] = b"ATGC";
    const COMPLEMENT: Option<&'static [(u8, u8)]> =
        Some(&[(b'A', b'T'), (b'T', b'A'), (b'G', b'C'), (b'C', b'G')]);
}

impl Alphabet for Rna {
    const NAME: &'static str = "RNASequence";
    const SYMBOLS: &'static [u8] = b"AUGC";
    const COMPLEMENT: Option<&'static [(u8, u8)]> =
        Some(&[(b'A', b'U'), (b'U', b'A'), (b'G', b'C'), (b'C', b'G')]);
}

impl Alphabet for Protein {
    const NAME: &'static str = "AminoAcidSequence";
    const SYMBOLS: &'static [u8] = b"ARNDCQEGHILKMFPSTWYV";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_bijective<A: Alphabet>() -> bool {
        A::SYMBOLS
            .iter()
            .all(|&s| A::complement_of(s).and_then(A::complement_of) == Some(s))
    }

    #[test]
    fn complements_are_bijective() {
        assert!(is_bijective::<Dna>());
        assert!(is_bijective::<Rna>());
    }

    #[test]
    fn protein_has_no_complement() {
        assert_eq!(Protein::complement_of(b'A'), None);
        assert_eq!(Protein::SYMBOLS.len(), 20);
    }
}
