//! # ESC/P Barcode Encoding
//!
//! This module encodes a barcode block into the single `ESC i` command the
//! printer expects: a run of parameter fields, the `B` data marker, the raw
//! data bytes, and a backslash terminator.
//!
//! ## Command Layout
//!
//! | Field | Prefix | Encoding |
//! |-------|--------|----------|
//! | Symbology | `t` | type code character |
//! | Human-readable text | `r` | ASCII '0'/'1' |
//! | Height | `h` | exactly two zero-padded ASCII digits |
//! | Bar width | `w` | ASCII digit '0'-'3' |
//! | Wide-to-narrow ratio | `z` | ASCII digit '0'-'2' |
//! | Alignment | `a` | ASCII digit '0'-'2' |
//! | Data | `B` | raw bytes, then terminator |
//!
//! ## Terminator Asymmetry
//!
//! The data terminator is a single backslash (0x5C) for most symbologies.
//! Code128 and GS1-128 accept arbitrary byte codes in their data, so a
//! literal backslash must be escaped; for those two types the terminator is
//! a doubled backslash. The firmware requires this asymmetry exactly.
//!
//! ## Example
//!
//! ```
//! use hermano::protocol::barcode::{self, BarcodeOptions, Symbology};
//!
//! let opts = BarcodeOptions {
//!     symbology: Symbology::Code39,
//!     ..Default::default()
//! };
//! let cmd = barcode::encode("HELLO-123", &opts)?;
//! assert!(cmd.starts_with(&[0x1B, b'i', b't', b'0']));
//! assert!(cmd.ends_with(b"HELLO-123\\"));
//! # Ok::<(), hermano::HermanoError>(())
//! ```

use super::commands::ESC;
use super::text::Alignment;
use crate::error::HermanoError;

// ============================================================================
// SYMBOLOGY
// ============================================================================

/// Supported barcode symbologies
///
/// Each symbology maps to the type code character sent after the `t` field
/// prefix. EAN-8, EAN-13 and UPC-A share one firmware type code; the printer
/// distinguishes them by data length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symbology {
    /// Code39 (A-Z, 0-9, space, `- . $ / % +`)
    #[default]
    Code39,
    /// ITF (Interleaved 2 of 5, numeric pairs)
    Itf,
    /// EAN-8 / JAN-8 (8 digits)
    Ean8,
    /// EAN-13 / JAN-13 (13 digits)
    Ean13,
    /// UPC-A (12 digits)
    UpcA,
    /// UPC-E (6 digits, compressed UPC-A)
    UpcE,
    /// Codabar / NW-7
    Codabar,
    /// Code128 (full ASCII, byte codes)
    Code128,
    /// GS1-128 / EAN-128 (Code128 with application identifiers)
    Gs1_128,
    /// GS1 DataBar / RSS
    Rss,
    /// Code93 (full ASCII, more compact than Code39)
    Code93,
    /// POSTNET (postal, numeric)
    Postnet,
    /// MSI / modified Plessey (numeric)
    Msi,
}

impl Symbology {
    /// Type code character for the `t` parameter field.
    pub const fn type_code(self) -> u8 {
        match self {
            Symbology::Code39 => b'0',
            Symbology::Itf => b'1',
            Symbology::Ean8 => b'5',
            Symbology::Ean13 => b'5',
            Symbology::UpcA => b'5',
            Symbology::UpcE => b'6',
            Symbology::Codabar => b'9',
            Symbology::Code128 => b'a',
            Symbology::Gs1_128 => b'b',
            Symbology::Rss => b'c',
            Symbology::Code93 => b'd',
            Symbology::Postnet => b'e',
            Symbology::Msi => b'f',
        }
    }

    /// Whether the data terminator must be an escaped (doubled) backslash.
    ///
    /// Code128-family data may contain byte codes, so the closing backslash
    /// is itself backslash-escaped.
    pub const fn escaped_terminator(self) -> bool {
        matches!(self, Symbology::Code128 | Symbology::Gs1_128)
    }
}

// ============================================================================
// BAR GEOMETRY
// ============================================================================

/// Narrow bar width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarWidth {
    ExtraSmall,
    #[default]
    Small,
    Medium,
    Large,
}

impl BarWidth {
    /// ASCII digit for the `w` parameter field.
    pub const fn code(self) -> u8 {
        match self {
            BarWidth::ExtraSmall => b'0',
            BarWidth::Small => b'1',
            BarWidth::Medium => b'2',
            BarWidth::Large => b'3',
        }
    }
}

/// Wide-to-narrow bar ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WideRatio {
    /// 3:1 (default)
    #[default]
    ThreeToOne,
    /// 2.5:1
    FiveToTwo,
    /// 2:1
    TwoToOne,
}

impl WideRatio {
    /// ASCII digit for the `z` parameter field.
    pub const fn code(self) -> u8 {
        match self {
            WideRatio::ThreeToOne => b'0',
            WideRatio::FiveToTwo => b'1',
            WideRatio::TwoToOne => b'2',
        }
    }
}

// ============================================================================
// BARCODE OPTIONS
// ============================================================================

/// Options for one barcode block
///
/// Plain value type; construct one per call. The default is a 50-dot Code39
/// with human-readable text, small bars, 3:1 ratio, left aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeOptions {
    pub symbology: Symbology,
    /// Bar height in dots, 0-99. The firmware's height field is fixed at
    /// two digits, so larger values are a caller error.
    pub height: i32,
    pub width: BarWidth,
    pub ratio: WideRatio,
    /// Print the human-readable characters below the bars.
    pub human_readable: bool,
    pub alignment: Alignment,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            symbology: Symbology::default(),
            height: 50,
            width: BarWidth::default(),
            ratio: WideRatio::default(),
            human_readable: true,
            alignment: Alignment::default(),
        }
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// # Encode a Barcode Block (ESC i t.. r.. h.. w.. z.. a.. B data \)
///
/// Produces the full byte sequence for one barcode. Fails with
/// [`HermanoError::InvalidArgument`] for empty data or a height outside
/// 0-99; no bytes are produced on failure.
///
/// ## Example
///
/// ```
/// use hermano::protocol::barcode::{self, BarcodeOptions, Symbology};
///
/// let opts = BarcodeOptions {
///     symbology: Symbology::Code128,
///     height: 70,
///     ..Default::default()
/// };
/// let cmd = barcode::encode("123456789", &opts)?;
/// // Code128 terminates with an escaped backslash
/// assert!(cmd.ends_with(&[0x5C, 0x5C]));
/// # Ok::<(), hermano::HermanoError>(())
/// ```
pub fn encode(data: &str, opts: &BarcodeOptions) -> Result<Vec<u8>, HermanoError> {
    if data.is_empty() {
        return Err(HermanoError::InvalidArgument(
            "barcode data must not be empty".to_string(),
        ));
    }
    if !(0..=99).contains(&opts.height) {
        return Err(HermanoError::InvalidArgument(format!(
            "barcode height {} out of range 0-99",
            opts.height
        )));
    }

    let mut cmd = Vec::with_capacity(16 + data.len() + 2);
    cmd.extend([ESC, b'i']);
    cmd.extend([b't', opts.symbology.type_code()]);
    cmd.extend([b'r', if opts.human_readable { b'1' } else { b'0' }]);

    // Height is always exactly two zero-padded digits
    cmd.push(b'h');
    cmd.push(b'0' + (opts.height / 10) as u8);
    cmd.push(b'0' + (opts.height % 10) as u8);

    cmd.extend([b'w', opts.width.code()]);
    cmd.extend([b'z', opts.ratio.code()]);
    cmd.extend([b'a', opts.alignment.code()]);

    cmd.push(b'B');
    cmd.extend_from_slice(data.as_bytes());
    cmd.push(b'\\');
    if opts.symbology.escaped_terminator() {
        cmd.push(b'\\');
    }
    Ok(cmd)
}

// ============================================================================
// TESTS
// ============================================================================
