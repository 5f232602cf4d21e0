use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

use crate::bounds::Bounds;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 fqsieve version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   filter .fastq reads by GC content, length and mean quality";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    styles = STYLES
)]
pub struct Cli {
    /// the input .fastq file
    #[arg(short, long)]
    pub input: String,

    /// the output .fastq file, which must not already exist
    #[arg(short, long)]
    pub output: String,

    /// length bounds, as either one value (upper, with a lower bound of 0) or two values
    /// (lower upper). both ends are inclusive. for example:
    ///   --length 150
    ///   --length 50 150
    /// default: 0 4294967296
    #[arg(
        short,
        long,
        num_args = 1..,
        value_delimiter = ',',
        verbatim_doc_comment
    )]
    pub length: Option<Vec<u64>>,

    /// GC content bounds in percent, given the same way as `--length`.
    /// default: 0 100
    #[arg(
        short,
        long = "gc_content",
        visible_alias = "gc-content",
        num_args = 1..,
        value_delimiter = ',',
        allow_negative_numbers = true,
        verbatim_doc_comment
    )]
    pub gc_content: Option<Vec<f64>>,

    /// minimum mean Phred quality of a read (inclusive)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub quality: f64,

    /// write a JSON summary of the run to this file
    #[arg(long)]
    pub report: Option<String>,

    /// write log messages to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<String>,
}

impl Cli {
    pub fn gc_bounds(&self) -> Option<Bounds<f64>> {
        self.gc_content.clone().map(Bounds::from)
    }

    pub fn length_bounds(&self) -> Option<Bounds<u64>> {
        self.length.clone().map(Bounds::from)
    }
}
