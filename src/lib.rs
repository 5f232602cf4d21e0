#[macro_use]
extern crate log;

pub mod bounds;
pub mod cli;
pub mod error;
pub mod filter;
pub mod io;
pub mod metrics;
pub mod record;
pub mod report;
pub mod seq;

pub use bounds::{Bounds, Range};
pub use error::{FilterError, SequenceError};
pub use filter::{filter_fastq, filter_map, try_filter_map, FilterConfig};
pub use record::Record;
pub use report::FilterReport;
