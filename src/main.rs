//! # Hermano CLI
//!
//! Command-line front end for ESC/P job encoding.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a styled text label
//! hermano text "PARCEL 42" --size 32 --font helsinki --bold --align center \
//!     --cut --out label.bin
//!
//! # Two-column text with a carriage-return terminator
//! hermano text "Weight" --second "1.2kg" --carriage-return --out line.bin
//!
//! # Encode a barcode label
//! hermano barcode 4212345678 --symbology code128 --height 70 --cut --out code.bin
//!
//! # Encode a JSON job document
//! hermano document job.json --out job.bin
//! ```
//!
//! On any encoding error the process reports it and exits without writing
//! an output file.

use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use hermano::{
    display::escape_bytes,
    document::{
        self, parse_alignment, parse_bar_width, parse_font, parse_ratio, parse_spacing,
        parse_symbology, parse_underline,
    },
    job::{assemble, JobOptions},
    protocol::{barcode, text},
    HermanoError,
};

/// Hermano - ESC/P label printer encoding utility
#[derive(Parser, Debug)]
#[command(name = "hermano")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output and job-level flags shared by all subcommands.
#[derive(Args, Debug)]
struct JobArgs {
    /// Output file (stdout if omitted)
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Cut the paper after the last fragment
    #[arg(long)]
    cut: bool,

    /// Landscape orientation
    #[arg(long)]
    landscape: bool,

    /// Page length in lines
    #[arg(long)]
    page_length: Option<u8>,

    /// Left margin in columns
    #[arg(long)]
    left_margin: Option<u8>,

    /// Right margin in columns
    #[arg(long)]
    right_margin: Option<u8>,

    /// Print the escaped command bytes to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl JobArgs {
    fn job_options(&self) -> JobOptions {
        JobOptions {
            cut_paper: self.cut,
            landscape: self.landscape,
            page_length: self.page_length,
            left_margin: self.left_margin,
            right_margin: self.right_margin,
            ..Default::default()
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a styled text label
    Text {
        /// Text to print (left column when --second is given)
        content: String,

        /// Right column text (two-column run)
        #[arg(long)]
        second: Option<String>,

        /// Font size in points
        #[arg(long, default_value = "24")]
        size: u32,

        /// Font name (brougham, lettergothic, brussels, helsinki, sandiego)
        #[arg(long, default_value = "brougham")]
        font: String,

        #[arg(long)]
        bold: bool,

        #[arg(long)]
        italic: bool,

        /// Underline mode (none, single, double)
        #[arg(long, default_value = "none")]
        underline: String,

        /// Alignment (left, center, right)
        #[arg(long, default_value = "left")]
        align: String,

        /// Intercharacter spacing (normal, wide)
        #[arg(long, default_value = "normal")]
        spacing: String,

        /// Terminate a two-column run with CR instead of LF
        #[arg(long)]
        carriage_return: bool,

        #[command(flatten)]
        job: JobArgs,
    },

    /// Encode a barcode label
    Barcode {
        /// Barcode data
        data: String,

        /// Symbology (code39, itf, ean8, ean13, upca, upce, codabar,
        /// code128, gs1-128, rss, code93, postnet, msi)
        #[arg(long, default_value = "code39")]
        symbology: String,

        /// Bar height in dots (0-99)
        #[arg(long, default_value = "50")]
        height: i32,

        /// Bar width (extra-small, small, medium, large)
        #[arg(long, default_value = "small")]
        width: String,

        /// Wide-to-narrow ratio (3:1, 2.5:1, 2:1)
        #[arg(long, default_value = "3:1")]
        ratio: String,

        /// Omit the human-readable characters below the bars
        #[arg(long)]
        no_text: bool,

        /// Alignment (left, center, right)
        #[arg(long, default_value = "left")]
        align: String,

        #[command(flatten)]
        job: JobArgs,
    },

    /// Encode a JSON job document
    Document {
        /// Path to the JSON document
        file: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Print the escaped command bytes to stderr
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HermanoError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Text {
            content,
            second,
            size,
            font,
            bold,
            italic,
            underline,
            align,
            spacing,
            carriage_return,
            job,
        } => {
            let style = text::StyleOptions {
                font_size: size,
                font: parse_font(&font)?,
                bold,
                italic,
                underline: parse_underline(&underline)?,
                alignment: parse_alignment(&align)?,
                spacing: parse_spacing(&spacing)?,
            };
            let fragment = match &second {
                Some(right) => text::encode_columns(&content, right, &style, carriage_return)?,
                None => text::encode(&content, &style)?,
            };
            let data = assemble(&[fragment], &job.job_options());
            write_output(&data, job.out.as_deref(), job.verbose)
        }

        Commands::Barcode {
            data,
            symbology,
            height,
            width,
            ratio,
            no_text,
            align,
            job,
        } => {
            let opts = barcode::BarcodeOptions {
                symbology: parse_symbology(&symbology)?,
                height,
                width: parse_bar_width(&width)?,
                ratio: parse_ratio(&ratio)?,
                human_readable: !no_text,
                alignment: parse_alignment(&align)?,
            };
            let fragment = barcode::encode(&data, &opts)?;
            let buffer = assemble(&[fragment], &job.job_options());
            write_output(&buffer, job.out.as_deref(), job.verbose)
        }

        Commands::Document { file, out, verbose } => {
            let json = std::fs::read_to_string(&file)?;
            let doc = document::Document::from_json(&json)?;
            let data = doc.build()?;
            write_output(&data, out.as_deref(), verbose)
        }
    }
}

/// Write the finished buffer to the output file or stdout.
///
/// Called only after encoding succeeded, so a failed job never leaves a
/// partial output file behind.
fn write_output(
    data: &[u8],
    out: Option<&std::path::Path>,
    verbose: bool,
) -> Result<(), HermanoError> {
    if verbose {
        eprintln!("{}", escape_bytes(data));
    }
    match out {
        Some(path) => {
            std::fs::write(path, data)?;
            eprintln!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => {
            std::io::stdout().write_all(data)?;
        }
    }
    Ok(())
}
