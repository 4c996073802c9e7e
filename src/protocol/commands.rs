//! # ESC/P Job-Level Commands
//!
//! This module implements the document-level ESC/P commands used by Brother
//! label and dot-matrix printers (page setup, orientation, margins, cutting).
//!
//! ## Protocol Overview
//!
//! ESC/P is a control-code language where commands are byte sequences
//! starting with escape characters. The subset implemented here covers:
//!
//! - **Job setup**: Initialization, landscape orientation
//! - **Page layout**: Page format, page length, margins, print position
//! - **Job teardown**: Paper cut, form feed
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `FF`, `LF`, `HT`
//! - Two bytes: `ESC @`
//! - Vendor extension: `ESC i <letter>`, optionally followed by parameters
//!
//! ## Parameter Encoding
//!
//! Job-level parameters (margins, page dimensions, positions) are sent as
//! **raw bytes** — the direct value of the integer, one byte per parameter.
//! Only text font sizes and barcode heights use ASCII-digit encoding; those
//! live in [`super::text`] and [`super::barcode`].
//!
//! ## Reference
//!
//! Based on the Brother "ESC/P Command Reference" for QL/PT-series printers.

// ============================================================================
// CONTROL BYTE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Every multi-byte ESC/P command begins with ESC (0x1B). This byte signals
/// the start of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// HT (Horizontal Tab) - Advance to next tab position
///
/// Used as the separator between the two halves of a two-column text run.
pub const HT: u8 = 0x09;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// CR (Carriage Return) - Print and return to line start without advancing
pub const CR: u8 = 0x0D;

/// FF (Form Feed) - Print the page and eject
///
/// Every assembled job ends with a single FF byte.
pub const FF: u8 = 0x0C;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Emitted at the start of
/// every assembled job to ensure consistent behavior.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Text formatting (bold, italic, underline) disabled
/// - Character size and font reset to defaults
/// - Alignment reset to left
/// - Margins and print position cleared
///
/// ## Example
///
/// ```
/// use hermano::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// ORIENTATION
// ============================================================================

/// # Landscape Orientation (ESC i L)
///
/// Rotates the page 90 degrees so that text runs along the long edge of the
/// label. Takes effect for the whole job; there is no per-fragment rotation.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC i L   |
/// | Hex     | 1B 69 4C  |
/// | Decimal | 27 105 76 |
///
/// ## Example
///
/// ```
/// use hermano::protocol::commands;
///
/// assert_eq!(commands::landscape(), vec![0x1B, 0x69, 0x4C]);
/// ```
#[inline]
pub fn landscape() -> Vec<u8> {
    vec![ESC, b'i', b'L']
}

// ============================================================================
// PAGE LAYOUT
// ============================================================================

/// # Set Page Format (ESC i P w h)
///
/// Sets the page width and height for the job. Both dimensions are sent as
/// raw parameter bytes, not ASCII digits.
///
/// ## Protocol Details
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | ESC i P w h  |
/// | Hex     | 1B 69 50 w h |
///
/// ## Parameters
///
/// - `width`: Page width in printer units (0-255)
/// - `height`: Page height in printer units (0-255)
#[inline]
pub fn page_format(width: u8, height: u8) -> Vec<u8> {
    vec![ESC, b'i', b'P', width, height]
}

/// # Set Page Length (ESC C n)
///
/// Sets the page length in lines. One raw parameter byte.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC C n |
/// | Hex     | 1B 43 n |
#[inline]
pub fn page_length(n: u8) -> Vec<u8> {
    vec![ESC, b'C', n]
}

/// # Set Left Margin (ESC l n)
///
/// Sets the left margin in columns. One raw parameter byte.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC l n |
/// | Hex     | 1B 6C n |
#[inline]
pub fn left_margin(n: u8) -> Vec<u8> {
    vec![ESC, b'l', n]
}

/// # Set Right Margin (ESC Q n)
///
/// Sets the right margin in columns. One raw parameter byte.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC Q n |
/// | Hex     | 1B 51 n |
#[inline]
pub fn right_margin(n: u8) -> Vec<u8> {
    vec![ESC, b'Q', n]
}

/// # Set Horizontal Print Position (ESC i X n)
///
/// Moves the print position horizontally. One raw parameter byte.
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | ESC i X n  |
/// | Hex     | 1B 69 58 n |
#[inline]
pub fn horizontal_position(n: u8) -> Vec<u8> {
    vec![ESC, b'i', b'X', n]
}

/// # Set Vertical Print Position (ESC i Y n)
///
/// Moves the print position vertically. One raw parameter byte.
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | ESC i Y n  |
/// | Hex     | 1B 69 59 n |
#[inline]
pub fn vertical_position(n: u8) -> Vec<u8> {
    vec![ESC, b'i', b'Y', n]
}

// ============================================================================
// JOB TEARDOWN
// ============================================================================

/// # Cut Paper (ESC i C)
///
/// Cuts the label at the current position. Emitted after all fragments when
/// the job requests a cut.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC i C   |
/// | Hex     | 1B 69 43  |
/// | Decimal | 27 105 67 |
///
/// ## Example
///
/// ```
/// use hermano::protocol::commands;
///
/// assert_eq!(commands::cut(), vec![0x1B, 0x69, 0x43]);
/// ```
#[inline]
pub fn cut() -> Vec<u8> {
    vec![ESC, b'i', b'C']
}

/// # Form Feed (FF)
///
/// Prints the page and ejects. Always the final byte of an assembled job.
#[inline]
pub fn form_feed() -> Vec<u8> {
    vec![FF]
}

// ============================================================================
// TESTS
// ============================================================================
