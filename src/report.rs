use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Counts produced by one run of the filter.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub total_seen: usize,
    pub total_passed: usize,
    pub rejected_gc: usize,
    pub rejected_length: usize,
    pub rejected_quality: usize,
}

impl FilterReport {
    /// Percentage of seen records which passed, or 0 if nothing was seen.
    pub fn percentage(&self) -> f64 {
        if self.total_seen == 0 {
            0.0
        } else {
            100.0 * (self.total_passed as f64) / (self.total_seen as f64)
        }
    }
}

/// Metadata describing a file-mode run, written out with `--report`.
#[derive(Serialize, Deserialize, Default)]
pub struct RunSummary {
    pub fqsieve_version: String,
    pub input_path: String,
    pub output_path: String,
    pub run_date: String,
    pub elapsed: f64,
    #[serde(flatten)]
    pub report: FilterReport,
}

impl RunSummary {
    /// Writes the summary as pretty-printed JSON. The report file follows the same
    /// rule as the FASTQ output and is never overwritten.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        crate::io::check_destination(path)?;
        let mut file = crate::io::create_destination(path)?;
        serde_json::to_writer_pretty(&mut file, self).context("Could not serialize run summary")?;
        file.flush()?;
        info!("Wrote run summary to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_empty_run_is_zero() {
        assert_eq!(FilterReport::default().percentage(), 0.0);
    }

    #[test]
    fn percentage() {
        let report = FilterReport {
            total_seen: 4,
            total_passed: 3,
            ..FilterReport::default()
        };
        assert_eq!(report.percentage(), 75.0);
    }

    #[test]
    fn summary_flattens_report() {
        let summary = RunSummary {
            report: FilterReport {
                total_seen: 3,
                total_passed: 1,
                ..FilterReport::default()
            },
            ..RunSummary::default()
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_seen"], 3);
        assert_eq!(value["total_passed"], 1);
    }
}
