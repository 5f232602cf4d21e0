use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use needletail::{parser::FastqReader, FastxReader};

use crate::error::FilterError;
use crate::record::Record;

/// Directory used for the output when no destination is given.
pub const DEFAULT_OUTPUT_DIR: &str = "filtered";
/// File name used for the output when no destination is given.
pub const DEFAULT_OUTPUT_FILE: &str = "filtered_sequences.fastq";

/// The in-memory representation of a set of reads: read ID to `(sequence, quality)`,
/// with the quality in its stored Phred+33 form. Insertion order is preserved.
pub type SequenceMap = IndexMap<String, (String, String)>;

/// A destination for records which pass the filters.
pub trait RecordSink {
    fn accept(&mut self, record: Record) -> Result<()>;
}

impl RecordSink for SequenceMap {
    fn accept(&mut self, record: Record) -> Result<()> {
        self.insert(record.id, (record.seq, record.qual));
        Ok(())
    }
}

#[cfg(test)]
impl RecordSink for Vec<Record> {
    fn accept(&mut self, record: Record) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Writes records in FASTQ format.
pub struct FastqWriter<W: Write> {
    inner: W,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W, FilterError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> RecordSink for FastqWriter<W> {
    fn accept(&mut self, record: Record) -> Result<()> {
        write_read(&mut self.inner, &record).map_err(FilterError::Io)?;
        Ok(())
    }
}

/// Formats a record as a FASTQ read and writes it to the provided writer.
///
/// Since this is `std::io::Write` and *not* `std::fmt::Write`, this does not accept
/// Strings. It is acceptable to use a `std::io::Cursor` instead.
pub fn write_read(writer: &mut impl Write, record: &Record) -> std::io::Result<()> {
    writeln!(writer, "@{}\n{}\n+\n{}", record.id, record.seq, record.qual)
}

/// A lazy iterator of records over a FASTQ stream. Only one record is held at a time.
pub struct FastqRecords<R: Read + Send> {
    reader: FastqReader<R>,
}

impl<R: Read + Send> FastqRecords<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: FastqReader::new(inner),
        }
    }
}

impl<R: Read + Send> Iterator for FastqRecords<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let rec = self.reader.next()?;
        Some(
            rec.context("Invalid FASTQ record")
                .and_then(Record::try_from),
        )
    }
}

/// Opens a FASTQ file for streaming.
pub fn open_fastq(path: &Path) -> Result<FastqRecords<File>> {
    let file = File::open(path)
        .with_context(|| format!("Unable to open file {}", path.display()))?;
    Ok(FastqRecords::new(file))
}

/// Resolves the output path. When none is given, `filtered/filtered_sequences.fastq`
/// under the current directory is used.
pub fn resolve_destination(output: Option<&Path>) -> Result<PathBuf> {
    match output {
        Some(p) if !p.as_os_str().is_empty() => Ok(p.to_path_buf()),
        _ => {
            let dir = std::env::current_dir()
                .context("Unable to determine the current directory")?
                .join(DEFAULT_OUTPUT_DIR);
            Ok(dir.join(DEFAULT_OUTPUT_FILE))
        }
    }
}

/// Fails if the destination already exists. Nothing is written to an existing file.
pub fn check_destination(path: &Path) -> Result<(), FilterError> {
    if path.exists() {
        return Err(FilterError::DestinationExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Creates the destination file, along with any missing parent directories. The file
/// must not already exist.
pub fn create_destination(path: &Path) -> Result<BufWriter<File>> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(FilterError::Io)
                .with_context(|| format!("Unable to create directory {}", dir.display()))?;
            info!("Created directory: {}", dir.display());
        }
    }

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(FilterError::DestinationExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => {
            return Err(FilterError::Io(e))
                .with_context(|| format!("Unable to create file {}", path.display()));
        }
    };

    Ok(BufWriter::new(file))
}

/// Utility function to extract the error from an iterator and stop iteration immediately. Useful
/// for iterators which yield a Result<T>.
///
/// # Returns
///
/// This function returns an `Option<T>`. If the item is `Ok`, it returns `Some(T)`.
/// If the item is `Err`, it updates `err` with the error and returns `None`.
///
/// # Example
/// ```
/// use anyhow::anyhow;
/// use fqsieve::io::until_err;
///
/// let mut err = Ok(());
/// let items = vec![Ok(1), Ok(2), Err(anyhow!("error")), Ok(3)];
/// let results: Vec<_> = items
///   .into_iter()
///   .scan(&mut err, until_err)
///   .collect();
/// assert_eq!(results, vec![1, 2]);
/// assert!(err.is_err());
/// ```
pub fn until_err<T>(err: &mut &mut Result<()>, item: Result<T>) -> Option<T> {
    match item {
        Ok(item) => Some(item),
        Err(e) => {
            **err = Err(e);
            None
        }
    }
}
