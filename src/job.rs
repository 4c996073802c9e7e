//! # Print Job Assembly
//!
//! This module concatenates encoded fragments with the job-level
//! setup/teardown commands, in the strict order the firmware requires:
//!
//! 1. Initialization (always)
//! 2. Landscape orientation (if requested)
//! 3. Page format, page length, margins, print positions (each only if set)
//! 4. Fragments, verbatim, in caller order, with no added separators
//! 5. Paper cut (if requested)
//! 6. Form feed (always)
//!
//! Fragments are opaque: any line terminator is already embedded by the
//! text or barcode encoder, and the assembler never inspects their bytes.
//!
//! Every optional layout field is an `Option`; an absent field emits no
//! bytes at all, not an empty placeholder. Because all parameter values are
//! `u8` by type, assembly itself cannot fail.

use crate::protocol::barcode::{self, BarcodeOptions};
use crate::protocol::commands;
use crate::protocol::text::{self, StyleOptions};
use crate::HermanoError;

// ============================================================================
// JOB OPTIONS
// ============================================================================

/// Job-level options for one assembled print job
///
/// The default assembles to the minimal valid job: `ESC @`, the fragments,
/// and a form feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobOptions {
    /// Cut the paper after the last fragment.
    pub cut_paper: bool,
    /// Print the whole job in landscape orientation.
    pub landscape: bool,
    /// Page (width, height) in printer units, sent as raw bytes.
    pub page_format: Option<(u8, u8)>,
    /// Page length in lines.
    pub page_length: Option<u8>,
    /// Left margin in columns.
    pub left_margin: Option<u8>,
    /// Right margin in columns.
    pub right_margin: Option<u8>,
    /// Horizontal print position.
    pub horizontal_position: Option<u8>,
    /// Vertical print position.
    pub vertical_position: Option<u8>,
}

// ============================================================================
// ASSEMBLY
// ============================================================================

/// # Assemble a Print Job
///
/// Concatenates setup commands, fragments and teardown commands into one
/// byte buffer ready to be written verbatim to a printer-facing stream.
///
/// ## Example
///
/// ```
/// use hermano::job::{assemble, JobOptions};
///
/// let fragment = vec![0xAA, 0xBB];
/// let opts = JobOptions {
///     cut_paper: true,
///     landscape: true,
///     ..Default::default()
/// };
/// assert_eq!(
///     assemble(&[fragment], &opts),
///     vec![0x1B, 0x40, 0x1B, 0x69, 0x4C, 0xAA, 0xBB, 0x1B, 0x69, 0x43, 0x0C],
/// );
/// ```
pub fn assemble(fragments: &[Vec<u8>], options: &JobOptions) -> Vec<u8> {
    let payload: usize = fragments.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(payload + 32);

    out.extend(commands::init());
    if options.landscape {
        out.extend(commands::landscape());
    }
    if let Some((width, height)) = options.page_format {
        out.extend(commands::page_format(width, height));
    }
    if let Some(n) = options.page_length {
        out.extend(commands::page_length(n));
    }
    if let Some(n) = options.left_margin {
        out.extend(commands::left_margin(n));
    }
    if let Some(n) = options.right_margin {
        out.extend(commands::right_margin(n));
    }
    if let Some(n) = options.horizontal_position {
        out.extend(commands::horizontal_position(n));
    }
    if let Some(n) = options.vertical_position {
        out.extend(commands::vertical_position(n));
    }

    for fragment in fragments {
        out.extend_from_slice(fragment);
    }

    if options.cut_paper {
        out.extend(commands::cut());
    }
    out.extend(commands::form_feed());
    out
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent builder over [`assemble`]
///
/// Collects encoded fragments in order, then assembles them with the job
/// options. Encoder errors surface immediately from the pushing method, so
/// a failed fragment never reaches the assembled output.
///
/// ## Example
///
/// ```
/// use hermano::job::PrintJob;
/// use hermano::protocol::{barcode::BarcodeOptions, text::StyleOptions};
///
/// let data = PrintJob::new()
///     .text("PARCEL 42", &StyleOptions::default())?
///     .barcode("4212345", &BarcodeOptions::default())?
///     .cut()
///     .build();
/// assert!(data.starts_with(&[0x1B, 0x40]));
/// assert_eq!(data.last(), Some(&0x0C));
/// # Ok::<(), hermano::HermanoError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrintJob {
    fragments: Vec<Vec<u8>>,
    options: JobOptions,
}

impl PrintJob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit job options.
    pub fn with_options(options: JobOptions) -> Self {
        Self {
            fragments: Vec::new(),
            options,
        }
    }

    /// Append a styled text run fragment.
    pub fn text(mut self, content: &str, style: &StyleOptions) -> Result<Self, HermanoError> {
        self.fragments.push(text::encode(content, style)?);
        Ok(self)
    }

    /// Append a two-column text run fragment.
    pub fn columns(
        mut self,
        left: &str,
        right: &str,
        style: &StyleOptions,
        carriage_return: bool,
    ) -> Result<Self, HermanoError> {
        self.fragments
            .push(text::encode_columns(left, right, style, carriage_return)?);
        Ok(self)
    }

    /// Append a barcode fragment.
    pub fn barcode(mut self, data: &str, opts: &BarcodeOptions) -> Result<Self, HermanoError> {
        self.fragments.push(barcode::encode(data, opts)?);
        Ok(self)
    }

    /// Append a pre-encoded fragment verbatim.
    pub fn fragment(mut self, bytes: Vec<u8>) -> Self {
        self.fragments.push(bytes);
        self
    }

    /// Cut the paper after the last fragment.
    pub fn cut(mut self) -> Self {
        self.options.cut_paper = true;
        self
    }

    /// Print the job in landscape orientation.
    pub fn landscape(mut self) -> Self {
        self.options.landscape = true;
        self
    }

    /// Assemble the job into one byte buffer.
    pub fn build(self) -> Vec<u8> {
        assemble(&self.fragments, &self.options)
    }
}

// ============================================================================
// TESTS
// ============================================================================
