#[macro_use]
extern crate log;

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use fqsieve::cli::{self, Cli};
use fqsieve::filter::{filter_fastq, FilterConfig};
use fqsieve::report::RunSummary;

/// Sets up `env_logger`, logging at `info` unless `RUST_LOG` says otherwise. If
/// `log_file` is given, the log is written there instead of to stderr.
fn init_logger(log_file: &Option<String>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_target(false);

    if let Some(path) = log_file {
        let file =
            File::create(path).with_context(|| format!("Unable to create log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn try_main(cli: &Cli) -> Result<()> {
    info!("fqsieve v{}", cli::VERSION);

    let config = FilterConfig::from_bounds(
        cli.gc_bounds().as_ref(),
        cli.length_bounds().as_ref(),
        cli.quality,
    )?;

    // time everything!
    let now = std::time::Instant::now();
    let output = Path::new(&cli.output);
    let report = filter_fastq(Path::new(&cli.input), Some(output), &config)?;

    if let Some(path) = &cli.report {
        let summary = RunSummary {
            fqsieve_version: cli::VERSION.to_string(),
            input_path: cli.input.clone(),
            output_path: cli.output.clone(),
            run_date: format!("{:?}", chrono::offset::Local::now()),
            elapsed: now.elapsed().as_secs_f64(),
            report,
        };
        summary.write_json(Path::new(path))?;
    }

    info!("Completed successfully.");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logger(&cli.log_file) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }

    if let Err(err) = try_main(&cli) {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
