//! Immutable DNA, RNA and protein sequences. Construction validates the alphabet, and
//! every transform returns a new value.

pub mod alphabet;
pub mod protein;

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};
use std::str::FromStr;

pub use self::alphabet::{Alphabet, Dna, Protein, Rna};
pub use self::protein::{AminoAcidCategory, AminoAcidComposition};
use crate::error::SequenceError;

pub type DnaSequence = Sequence<Dna>;
pub type RnaSequence = Sequence<Rna>;
pub type AminoAcidSequence = Sequence<Protein>;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<A: Alphabet> {
    seq: String,
    alphabet: PhantomData<A>,
}

impl<A: Alphabet> Sequence<A> {
    /// Uppercases `seq` and checks every symbol against the alphabet of `A`.
    pub fn new(seq: &str) -> Result<Self, SequenceError> {
        let seq = seq.to_uppercase();

        if let Some((pos, symbol)) = seq
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii() || !A::is_valid(*c as u8))
        {
            return Err(SequenceError::InvalidAlphabet {
                kind: A::NAME,
                symbol,
                pos,
            });
        }

        Ok(Self::from_valid(seq))
    }

    // `seq` must already be uppercase and within the alphabet
    fn from_valid(seq: String) -> Self {
        Self {
            seq,
            alphabet: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.seq
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<char> {
        self.seq.as_bytes().get(i).map(|b| *b as char)
    }

    /// A sub-sequence of the same type.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Self, SequenceError> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s
                .checked_add(1)
                .ok_or(SequenceError::OutOfRange { start: s, end: len, len })?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e
                .checked_add(1)
                .ok_or(SequenceError::OutOfRange { start, end: e, len })?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };

        if start > end || end > len {
            return Err(SequenceError::OutOfRange { start, end, len });
        }

        Ok(Self::from_valid(self.seq[start..end].to_string()))
    }

    pub fn is_valid_alphabet(&self) -> bool {
        self.seq.bytes().all(A::is_valid)
    }

    pub fn reverse(&self) -> Self {
        Self::from_valid(self.seq.chars().rev().collect())
    }

    /// Substitutes every symbol with its pair.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::UnsupportedOperation`] if the alphabet has no complement
    /// table, as for protein sequences.
    pub fn complement(&self) -> Result<Self, SequenceError> {
        let unsupported = || SequenceError::UnsupportedOperation {
            kind: A::NAME,
            operation: "complement",
        };

        if A::COMPLEMENT.is_none() {
            return Err(unsupported());
        }

        let seq = self
            .seq
            .bytes()
            .map(|b| A::complement_of(b).map(char::from).ok_or_else(unsupported))
            .collect::<Result<String, _>>()?;

        Ok(Self::from_valid(seq))
    }

    /// The complement, then reversed.
    pub fn reverse_complement(&self) -> Result<Self, SequenceError> {
        Ok(self.complement()?.reverse())
    }
}

impl Sequence<Dna> {
    /// Replaces every `T` with `U`.
    pub fn transcribe(&self) -> RnaSequence {
        Sequence::from_valid(self.seq.replace('T', "U"))
    }
}

impl<A: Alphabet> FromStr for Sequence<A> {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<A: Alphabet> AsRef<str> for Sequence<A> {
    fn as_ref(&self) -> &str {
        &self.seq
    }
}

impl<A: Alphabet> fmt::Display for Sequence<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seq)
    }
}

impl<A: Alphabet> fmt::Debug for Sequence<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", A::NAME, self.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_on_construction() {
        let s = DnaSequence::new("atgc").unwrap();
        assert_eq!(s.as_str(), "ATGC");
        assert!(s.is_valid_alphabet());
    }

    #[test]
    fn rejects_invalid_symbols() {
        assert_eq!(
            DnaSequence::new("ATGU").unwrap_err(),
            SequenceError::InvalidAlphabet { kind: "DNASequence", symbol: 'U', pos: 3 }
        );
        assert!(RnaSequence::new("ATG").is_err());
        assert!(AminoAcidSequence::new("MKB").is_err());
        assert!(DnaSequence::new("AT\u{e9}").is_err());
    }

    #[test]
    fn complement_and_reverse() {
        let s = DnaSequence::new("AATGC").unwrap();
        assert_eq!(s.complement().unwrap().as_str(), "TTACG");
        assert_eq!(s.reverse().as_str(), "CGTAA");
        assert_eq!(s.reverse_complement().unwrap().as_str(), "GCATT");
    }

    #[test]
    fn rna_complement() {
        let s = RnaSequence::new("AUGC").unwrap();
        assert_eq!(s.complement().unwrap().as_str(), "UACG");
    }

    #[test]
    fn protein_complement_is_unsupported() {
        let s = AminoAcidSequence::new("MKV").unwrap();
        assert_eq!(
            s.complement().unwrap_err(),
            SequenceError::UnsupportedOperation { kind: "AminoAcidSequence", operation: "complement" }
        );
        assert!(s.reverse_complement().is_err());
        assert_eq!(s.reverse().as_str(), "VKM");
    }

    #[test]
    fn transcribe_to_rna() {
        let rna: RnaSequence = DnaSequence::new("ATTGC").unwrap().transcribe();
        assert_eq!(rna.as_str(), "AUUGC");
    }

    #[test]
    fn transforms_do_not_mutate() {
        let s = DnaSequence::new("ATGC").unwrap();
        let _ = s.reverse_complement().unwrap();
        assert_eq!(s.as_str(), "ATGC");
    }

    #[test]
    fn indexing_and_slicing() {
        let s: DnaSequence = "ATGCA".parse().unwrap();
        assert_eq!(s.get(2), Some('G'));
        assert_eq!(s.get(5), None);
        assert_eq!(s.slice(1..3).unwrap().as_str(), "TG");
        assert_eq!(s.slice(..).unwrap(), s);
        assert_eq!(
            s.slice(3..9).unwrap_err(),
            SequenceError::OutOfRange { start: 3, end: 9, len: 5 }
        );
    }

    #[test]
    fn slicing_at_usize_max_is_out_of_range() {
        let s = DnaSequence::new("ACGT").unwrap();
        assert_eq!(
            s.slice(..=usize::MAX).unwrap_err(),
            SequenceError::OutOfRange { start: 0, end: usize::MAX, len: 4 }
        );
        assert_eq!(
            s.slice((Bound::Excluded(usize::MAX), Bound::Unbounded)).unwrap_err(),
            SequenceError::OutOfRange { start: usize::MAX, end: 4, len: 4 }
        );
    }

    #[test]
    fn formatting() {
        let s = DnaSequence::new("ATG").unwrap();
        assert_eq!(s.to_string(), "ATG");
        assert_eq!(format!("{:?}", s), "DNASequence(\"ATG\")");
    }
}
