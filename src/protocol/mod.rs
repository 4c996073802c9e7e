//! # ESC/P Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/P control
//! codes understood by Brother label and dot-matrix printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Job-level commands (init, orientation, margins, cut)
//! - [`text`]: Styled text run encoding
//! - [`barcode`]: Barcode block encoding
//!
//! ## Usage Example
//!
//! ```
//! use hermano::protocol::{barcode, commands, text};
//!
//! // Build a print sequence by hand
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::encode("PARCEL 42", &text::StyleOptions::default())?);
//! data.extend(barcode::encode("4212345", &barcode::BarcodeOptions::default())?);
//! data.extend(commands::cut());
//! data.extend(commands::form_feed());
//!
//! // Write `data` verbatim to the printer-facing stream...
//! # Ok::<(), hermano::HermanoError>(())
//! ```
//!
//! Most callers should use [`crate::job`] instead, which emits the
//! job-level commands in the order the firmware requires.

pub mod barcode;
pub mod commands;
pub mod text;
