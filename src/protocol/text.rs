//! # ESC/P Text Styling and Encoding
//!
//! This module encodes a styled text run into the byte sequence the printer
//! expects: a text segment header, one escape sequence per style attribute
//! in a fixed order, the payload, and a line terminator.
//!
//! ## Styled Run Layout
//!
//! | Step | Command | Encoding |
//! |------|---------|----------|
//! | Segment header | ESC S O H | fixed four bytes |
//! | Font size | ESC X | decimal ASCII digits |
//! | Font | ESC k n | raw byte |
//! | Bold | ESC E / ESC F | on / off |
//! | Italic | ESC 4 / ESC 5 | on / off |
//! | Underline | ESC - n | ASCII digit '0'-'2' |
//! | Alignment | ESC a n | ASCII digit '0'-'2' |
//! | Spacing | ESC SP n | ASCII digit '0'/'1' |
//!
//! Every step always emits: disabled styles send their explicit off
//! sequence rather than being skipped, so a run never inherits state from a
//! previous fragment.
//!
//! ## Terminators
//!
//! A single-text run ends with LF. A two-column run joins its halves with
//! HT and ends with CR when requested, LF otherwise.
//!
//! ## Example
//!
//! ```
//! use hermano::protocol::text::{self, StyleOptions};
//!
//! let style = StyleOptions::default();
//! let run = text::encode("TOTAL", &style)?;
//! assert!(run.starts_with(&[0x1B, b'S', b'O', b'H']));
//! assert!(run.ends_with(b"TOTAL\n"));
//! # Ok::<(), hermano::HermanoError>(())
//! ```

use super::commands::{CR, ESC, HT, LF};
use crate::error::HermanoError;

/// Text segment header (ESC S O H)
///
/// Marks the start of a styled text run. The firmware treats everything
/// between this marker and the line terminator as one formatted segment.
const SEGMENT_HEADER: [u8; 4] = [ESC, b'S', b'O', b'H'];

// ============================================================================
// STYLE ENUMS
// ============================================================================

/// Built-in printer fonts
///
/// Selected with `ESC k n`; the parameter is the raw font number, not an
/// ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Brougham (power-on default)
    #[default]
    Brougham,
    /// Letter Gothic Bold
    LetterGothicBold,
    /// Brussels (serif)
    Brussels,
    /// Helsinki (sans-serif)
    Helsinki,
    /// San Diego (script)
    SanDiego,
}

impl Font {
    /// Raw parameter byte for `ESC k`.
    pub const fn code(self) -> u8 {
        match self {
            Font::Brougham => 0,
            Font::LetterGothicBold => 1,
            Font::Brussels => 2,
            Font::Helsinki => 3,
            Font::SanDiego => 4,
        }
    }
}

/// Text alignment options
///
/// Selected with `ESC a n`; the parameter is an ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// ASCII digit parameter for `ESC a`.
    pub const fn code(self) -> u8 {
        match self {
            Alignment::Left => b'0',
            Alignment::Center => b'1',
            Alignment::Right => b'2',
        }
    }
}

/// Underline mode
///
/// Selected with `ESC - n`; the parameter is an ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    /// No underline
    #[default]
    None,
    /// Single underline (1 dot thick)
    Single,
    /// Double underline
    Double,
}

impl Underline {
    /// ASCII digit parameter for `ESC -`.
    pub const fn code(self) -> u8 {
        match self {
            Underline::None => b'0',
            Underline::Single => b'1',
            Underline::Double => b'2',
        }
    }
}

/// Intercharacter spacing
///
/// Selected with `ESC SP n`; the parameter is an ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    #[default]
    Normal,
    Wide,
}

impl Spacing {
    /// ASCII digit parameter for `ESC SP`.
    pub const fn code(self) -> u8 {
        match self {
            Spacing::Normal => b'0',
            Spacing::Wide => b'1',
        }
    }
}

// ============================================================================
// STYLE OPTIONS
// ============================================================================

/// Style attributes for one text run
///
/// Plain value type with no identity beyond its fields; construct one per
/// call. The default is 24-point Brougham, no emphasis, left aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOptions {
    /// Font size in points; must be positive. Encoded as decimal ASCII
    /// digits after `ESC X` (the firmware accepts multi-digit sizes).
    pub font_size: u32,
    pub font: Font,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub alignment: Alignment,
    pub spacing: Spacing,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            font_size: 24,
            font: Font::default(),
            bold: false,
            italic: false,
            underline: Underline::default(),
            alignment: Alignment::default(),
            spacing: Spacing::default(),
        }
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// Build the style preamble shared by both run variants.
///
/// Emission order is fixed by the firmware: header, size, font, bold,
/// italic, underline, alignment, spacing.
fn style_prefix(style: &StyleOptions) -> Result<Vec<u8>, HermanoError> {
    if style.font_size == 0 {
        return Err(HermanoError::InvalidArgument(
            "font size must be positive".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(32);
    out.extend_from_slice(&SEGMENT_HEADER);

    // ESC X + decimal digits
    out.push(ESC);
    out.push(b'X');
    out.extend(style.font_size.to_string().into_bytes());

    out.extend([ESC, b'k', style.font.code()]);
    out.extend(if style.bold { [ESC, b'E'] } else { [ESC, b'F'] });
    out.extend(if style.italic { [ESC, b'4'] } else { [ESC, b'5'] });
    out.extend([ESC, b'-', style.underline.code()]);
    out.extend([ESC, b'a', style.alignment.code()]);
    out.extend([ESC, b' ', style.spacing.code()]);
    Ok(out)
}

/// # Encode a Single Styled Text Run
///
/// Produces the full byte sequence for one line of styled text, terminated
/// with LF. Fails with [`HermanoError::InvalidArgument`] for empty text or a
/// zero font size; no bytes are produced on failure.
///
/// ## Example
///
/// ```
/// use hermano::protocol::text::{self, Alignment, StyleOptions};
///
/// let style = StyleOptions {
///     bold: true,
///     alignment: Alignment::Center,
///     ..Default::default()
/// };
/// let run = text::encode("RECEIPT", &style)?;
/// assert!(run.ends_with(&[b'T', 0x0A]));
/// # Ok::<(), hermano::HermanoError>(())
/// ```
pub fn encode(text: &str, style: &StyleOptions) -> Result<Vec<u8>, HermanoError> {
    if text.is_empty() {
        return Err(HermanoError::InvalidArgument(
            "text must not be empty".to_string(),
        ));
    }

    let mut out = style_prefix(style)?;
    out.extend_from_slice(text.as_bytes());
    out.push(LF);
    Ok(out)
}

/// # Encode a Two-Column Styled Text Run
///
/// Produces the byte sequence for a left/right column pair: the same style
/// preamble as [`encode`], then `left HT right`. The terminator is CR when
/// `carriage_return` is set, LF otherwise. Both halves must be non-empty.
///
/// ## Example
///
/// ```
/// use hermano::protocol::text::{self, StyleOptions};
///
/// let run = text::encode_columns("Qty", "3", &StyleOptions::default(), false)?;
/// assert!(run.ends_with(&[b'Q', b't', b'y', 0x09, b'3', 0x0A]));
/// # Ok::<(), hermano::HermanoError>(())
/// ```
pub fn encode_columns(
    left: &str,
    right: &str,
    style: &StyleOptions,
    carriage_return: bool,
) -> Result<Vec<u8>, HermanoError> {
    if left.is_empty() || right.is_empty() {
        return Err(HermanoError::InvalidArgument(
            "both column texts must be non-empty".to_string(),
        ));
    }

    let mut out = style_prefix(style)?;
    out.extend_from_slice(left.as_bytes());
    out.push(HT);
    out.extend_from_slice(right.as_bytes());
    out.push(if carriage_return { CR } else { LF });
    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> StyleOptions {
        StyleOptions::default()
    }

    #[test]
    fn test_segment_header_and_order() {
        let run = encode("A", &style()).unwrap();
        assert_eq!(
            run,
            vec![
                0x1B, b'S', b'O', b'H', // segment header
                0x1B, b'X', b'2', b'4', // size 24 as ASCII digits
                0x1B, b'k', 0x00, // Brougham
                0x1B, b'F', // bold off
                0x1B, b'5', // italic off
                0x1B, b'-', b'0', // no underline
                0x1B, b'a', b'0', // left
                0x1B, b' ', b'0', // normal spacing
                b'A', 0x0A,
            ]
        );
    }

    #[test]
    fn test_font_size_multi_digit() {
        let s = StyleOptions {
            font_size: 128,
            ..style()
        };
        let run = encode("x", &s).unwrap();
        // ESC X '1' '2' '8'
        let pos = run.windows(2).position(|w| w == [0x1B, b'X']).unwrap();
        assert_eq!(&run[pos..pos + 5], &[0x1B, b'X', b'1', b'2', b'8']);
    }

    #[test]
    fn test_bold_italic_toggle() {
        let s = StyleOptions {
            bold: true,
            italic: true,
            ..style()
        };
        let run = encode("x", &s).unwrap();
        assert!(run.windows(2).any(|w| w == [0x1B, b'E']));
        assert!(run.windows(2).any(|w| w == [0x1B, b'4']));
        assert!(!run.windows(2).any(|w| w == [0x1B, b'F']));
    }

    #[test]
    fn test_spec_worked_example() {
        // "Hello" HT "World", size 24 Helsinki, bold, single underline,
        // centered, wide spacing, CR terminator
        let s = StyleOptions {
            font_size: 24,
            font: Font::Helsinki,
            bold: true,
            italic: false,
            underline: Underline::Single,
            alignment: Alignment::Center,
            spacing: Spacing::Wide,
        };
        let run = encode_columns("Hello", "World", &s, true).unwrap();
        assert_eq!(
            run,
            vec![
                0x1B, 0x53, 0x4F, 0x48, // header
                0x1B, 0x58, 0x32, 0x34, // ESC X "24"
                0x1B, 0x6B, 0x03, // ESC k Helsinki
                0x1B, 0x45, // bold on
                0x1B, 0x35, // italic off
                0x1B, 0x2D, 0x31, // underline single
                0x1B, 0x61, 0x31, // align center
                0x1B, 0x20, 0x31, // spacing wide
                0x48, 0x65, 0x6C, 0x6C, 0x6F, // "Hello"
                0x09, // HT
                0x57, 0x6F, 0x72, 0x6C, 0x64, // "World"
                0x0D, // CR
            ]
        );
    }

    #[test]
    fn test_columns_lf_terminator() {
        let run = encode_columns("a", "b", &style(), false).unwrap();
        assert_eq!(run.last(), Some(&0x0A));
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            encode("", &style()),
            Err(HermanoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_column_rejected() {
        assert!(encode_columns("", "b", &style(), false).is_err());
        assert!(encode_columns("a", "", &style(), true).is_err());
    }

    #[test]
    fn test_zero_font_size_rejected() {
        let s = StyleOptions {
            font_size: 0,
            ..style()
        };
        assert!(matches!(
            encode("x", &s),
            Err(HermanoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let s = StyleOptions {
            bold: true,
            ..style()
        };
        assert_eq!(encode("same", &s).unwrap(), encode("same", &s).unwrap());
    }
}
