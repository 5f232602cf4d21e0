use std::path::Path;

use anyhow::Result;

use crate::bounds::{normalize, Bounds, Range};
use crate::error::FilterError;
use crate::io::{
    check_destination, create_destination, open_fastq, resolve_destination, until_err,
    FastqWriter, RecordSink, SequenceMap,
};
use crate::record::Record;
use crate::report::FilterReport;

/// Accepts every GC percentage.
pub const DEFAULT_GC_RANGE: Range<f64> = Range {
    lower: 0.0,
    upper: 100.0,
};

/// Accepts every read up to 2^32 bases.
pub const DEFAULT_LENGTH_RANGE: Range<u64> = Range {
    lower: 0,
    upper: 1 << 32,
};

/// The three predicates applied to every record. Immutable once built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FilterConfig {
    pub gc: Range<f64>,
    pub len: Range<u64>,
    pub quality: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gc: DEFAULT_GC_RANGE,
            len: DEFAULT_LENGTH_RANGE,
            quality: 0.0,
        }
    }
}

/// The outcome of evaluating a single record, naming the first failed check.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Verdict {
    Pass,
    GcOutOfRange(f64),
    LengthOutOfRange(usize),
    LowQuality(f64),
}

impl FilterConfig {
    /// Builds a config from user-supplied bounds, rejecting malformed ones. Missing
    /// bounds fall back to the defaults; the quality threshold is used as given.
    pub fn from_bounds(
        gc: Option<&Bounds<f64>>,
        len: Option<&Bounds<u64>>,
        quality: f64,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            gc: normalize(gc, DEFAULT_GC_RANGE, "gc_content")?,
            len: normalize(len, DEFAULT_LENGTH_RANGE, "length")?,
            quality,
        })
    }

    /// Checks GC content, then length, then mean quality, stopping at the first
    /// failure. The quality threshold is an inclusive lower bound.
    pub fn evaluate(&self, rec: &Record) -> Verdict {
        let gc = rec.gc_content();
        if !self.gc.contains(gc) {
            return Verdict::GcOutOfRange(gc);
        }

        let len = rec.len();
        if !self.len.contains(len as u64) {
            return Verdict::LengthOutOfRange(len);
        }

        let quality = rec.phred_quality_avg();
        if quality < self.quality {
            return Verdict::LowQuality(quality);
        }

        Verdict::Pass
    }
}

/// Runs every record through `config`, handing the ones which pass to `sink` unchanged
/// and in input order. Iteration stops at the first error from either side.
pub fn filter_records<I, S>(records: I, config: &FilterConfig, sink: &mut S) -> Result<FilterReport>
where
    I: IntoIterator<Item = Result<Record>>,
    S: RecordSink + ?Sized,
{
    // Start with a placeholder error object. This will be mutated if there are errors during
    // iteration through the reads.
    let mut err = Ok(());
    let mut report = FilterReport::default();

    records
        .into_iter()
        .scan(&mut err, until_err)
        .try_for_each(|rec| -> Result<()> {
            report.total_seen += 1;

            match config.evaluate(&rec) {
                Verdict::Pass => {
                    sink.accept(rec)?;
                    report.total_passed += 1;
                }
                Verdict::GcOutOfRange(gc) => {
                    debug!("{}: GC content {gc:.2}% outside {}", rec.id, config.gc);
                    report.rejected_gc += 1;
                }
                Verdict::LengthOutOfRange(len) => {
                    debug!("{}: length {len} outside {}", rec.id, config.len);
                    report.rejected_length += 1;
                }
                Verdict::LowQuality(q) => {
                    debug!("{}: mean quality {q:.2} below {}", rec.id, config.quality);
                    report.rejected_quality += 1;
                }
            }

            Ok(())
        })?;

    err?;
    Ok(report)
}

/// Filters a FASTQ file into a new FASTQ file.
///
/// The destination must not exist; when `output` is `None` the reads are written to
/// `filtered/filtered_sequences.fastq` in the current directory. Records are streamed
/// one at a time. Every failure is logged before being returned.
///
/// # Errors
///
/// This function will return an error if:
/// * The destination already exists ([`FilterError::DestinationExists`]).
/// * The input cannot be opened or contains an invalid FASTQ record.
/// * The output cannot be created or written to.
pub fn filter_fastq(input: &Path, output: Option<&Path>, config: &FilterConfig) -> Result<FilterReport> {
    run_file_filter(input, output, config).inspect_err(|e| error!("Error during filtering: {e:#}"))
}

fn run_file_filter(input: &Path, output: Option<&Path>, config: &FilterConfig) -> Result<FilterReport> {
    let output = resolve_destination(output)?;
    check_destination(&output)?;

    let records = open_fastq(input)?;
    let mut writer = FastqWriter::new(create_destination(&output)?);

    let report = filter_records(records, config, &mut writer)?;
    writer.into_inner()?;

    info!(
        "Filtering completed. Total: {}, passed: {} ({:.1}%)",
        report.total_seen,
        report.total_passed,
        report.percentage()
    );

    Ok(report)
}

/// Filters an in-memory set of reads, failing on malformed bounds.
pub fn try_filter_map(
    seqs: &SequenceMap,
    gc: Option<&Bounds<f64>>,
    len: Option<&Bounds<u64>>,
    quality: f64,
) -> Result<SequenceMap> {
    let config = FilterConfig::from_bounds(gc, len, quality)?;

    let records = seqs
        .iter()
        .map(|(id, (seq, qual))| Ok(Record::new(id.as_str(), seq.as_str(), qual.as_str())));

    let mut passed = SequenceMap::new();
    filter_records(records, &config, &mut passed)?;
    Ok(passed)
}

/// Filters an in-memory set of reads. Malformed bounds produce an empty result rather
/// than an error; use [`try_filter_map`] to have them reported.
pub fn filter_map(
    seqs: &SequenceMap,
    gc: Option<&Bounds<f64>>,
    len: Option<&Bounds<u64>>,
    quality: f64,
) -> SequenceMap {
    try_filter_map(seqs, gc, len, quality).unwrap_or_else(|e| {
        warn!("Returning an empty result: {e}");
        SequenceMap::new()
    })
}
