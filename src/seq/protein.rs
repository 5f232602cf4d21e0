use std::fmt;

use super::Sequence;
use crate::seq::alphabet::Protein;

/// Side-chain classes of the 20 standard amino acids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AminoAcidCategory {
    NonPolar,
    PolarUncharged,
    PolarNegative,
    PolarPositive,
}

impl AminoAcidCategory {
    /// Every category, in display order.
    pub const ALL: [AminoAcidCategory; 4] = [
        AminoAcidCategory::NonPolar,
        AminoAcidCategory::PolarUncharged,
        AminoAcidCategory::PolarNegative,
        AminoAcidCategory::PolarPositive,
    ];

    pub fn of(symbol: u8) -> Option<Self> {
        match symbol {
            b'G' | b'A' | b'L' | b'I' | b'V' | b'P' | b'M' | b'W' | b'F' => Some(Self::NonPolar),
            b'N' | b'Q' | b'S' | b'T' | b'Y' | b'C' => Some(Self::PolarUncharged),
            b'D' | b'E' => Some(Self::PolarNegative),
            b'R' | b'H' | b'K' => Some(Self::PolarPositive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NonPolar => "non-polar",
            Self::PolarUncharged => "polar uncharged",
            Self::PolarNegative => "polar negatively charged",
            Self::PolarPositive => "polar positively charged",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AminoAcidCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category counts over a protein sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AminoAcidComposition {
    counts: [usize; 4],
    total: usize,
}

impl AminoAcidComposition {
    pub fn count(&self, category: AminoAcidCategory) -> usize {
        self.counts[category.index()]
    }

    /// Share of the sequence in `category`, from 0 to 100. An empty sequence gives 0.
    pub fn percentage(&self, category: AminoAcidCategory) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * (self.count(category) as f64) / (self.total as f64)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `(category, count, percentage)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AminoAcidCategory, usize, f64)> + '_ {
        AminoAcidCategory::ALL
            .into_iter()
            .map(|c| (c, self.count(c), self.percentage(c)))
    }
}

impl fmt::Display for AminoAcidComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(|(c, n, pc)| format!("{c}: Count = {n}, Percentage = {pc:.2}%"))
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

impl Sequence<Protein> {
    pub fn classify_amino_acids(&self) -> AminoAcidComposition {
        let mut counts = [0usize; 4];

        self.as_str()
            .bytes()
            .filter_map(AminoAcidCategory::of)
            .for_each(|c| counts[c.index()] += 1);

        AminoAcidComposition {
            counts,
            total: self.len(),
        }
    }
}
