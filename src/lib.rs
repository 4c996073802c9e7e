//! # Hermano - ESC/P Label Printer Command Encoding
//!
//! Hermano encodes printer formatting directives into the ESC/P binary
//! control-code sequences consumed by Brother-style label and dot-matrix
//! printers. It provides:
//!
//! - **Text encoding**: Styled text runs (font, size, bold, italic,
//!   underline, alignment, spacing)
//! - **Barcode encoding**: 1D symbologies from Code39 to GS1-128
//! - **Job assembly**: Setup/teardown commands (orientation, margins,
//!   page format, paper cut) around caller-ordered fragments
//! - **Documents**: A serde-friendly JSON job description
//!
//! Everything is a pure function from typed inputs to bytes: identical
//! inputs always produce identical output, and a validation failure never
//! emits partial bytes. The crate performs no I/O; callers write the
//! finished buffer verbatim to their printer-facing stream.
//!
//! ## Quick Start
//!
//! ```
//! use hermano::{
//!     job::PrintJob,
//!     protocol::{barcode::{BarcodeOptions, Symbology}, text::StyleOptions},
//! };
//!
//! let data = PrintJob::new()
//!     .text("PARCEL 42", &StyleOptions { bold: true, ..Default::default() })?
//!     .barcode("4212345678", &BarcodeOptions {
//!         symbology: Symbology::Code128,
//!         height: 70,
//!         ..Default::default()
//!     })?
//!     .cut()
//!     .build();
//!
//! // `data` starts with ESC @ and ends with the form feed
//! assert!(data.starts_with(&[0x1B, 0x40]));
//! assert_eq!(data.last(), Some(&0x0C));
//! # Ok::<(), hermano::HermanoError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/P command builders (text, barcode, job-level) |
//! | [`job`] | Fragment assembly and the `PrintJob` builder |
//! | [`document`] | Declarative JSON job descriptions |
//! | [`display`] | Control-character-escaped diagnostics rendering |
//! | [`error`] | Error types |

pub mod display;
pub mod document;
pub mod error;
pub mod job;
pub mod protocol;

// Re-exports for convenience
pub use document::Document;
pub use error::HermanoError;
pub use job::{assemble, JobOptions, PrintJob};
