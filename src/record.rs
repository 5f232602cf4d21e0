use anyhow::Result;
use needletail::parser::SequenceRecord;

use crate::metrics;

/// A single FASTQ read. The quality string is kept in its stored (Phred+33) form so
/// that a record can be written back out unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub seq: String,
    pub qual: String,
}

impl Record {
    pub fn new(id: impl Into<String>, seq: impl Into<String>, qual: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
            qual: qual.into(),
        }
    }

    pub fn len(&self) -> usize {
        metrics::length(self.seq.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn gc_content(&self) -> f64 {
        metrics::gc_content(self.seq.as_bytes())
    }

    pub fn phred_quality_avg(&self) -> f64 {
        metrics::mean_quality(metrics::decode_phred(self.qual.as_bytes()))
    }
}

impl TryFrom<SequenceRecord<'_>> for Record {
    type Error = anyhow::Error;

    fn try_from(rec: SequenceRecord<'_>) -> Result<Self> {
        Ok(Record {
            id: String::from_utf8(rec.id().to_vec())?,
            seq: String::from_utf8(rec.seq().to_vec())?,
            qual: String::from_utf8(rec.qual().unwrap_or(&[]).to_vec())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_of_record() {
        let rec = Record::new("read1", "ATGC".repeat(10), "5".repeat(40));
        assert_eq!(rec.len(), 40);
        assert_eq!(rec.gc_content(), 50.0);
        assert_eq!(rec.phred_quality_avg(), 20.0);
    }

    #[test]
    fn empty_record() {
        let rec = Record::new("empty", "", "");
        assert!(rec.is_empty());
        assert_eq!(rec.gc_content(), 0.0);
        assert_eq!(rec.phred_quality_avg(), 0.0);
    }
}
