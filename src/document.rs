//! # Declarative Job Documents
//!
//! A JSON-friendly description of a print job: an ordered list of text and
//! barcode segments plus the job-level layout options. Documents are the
//! front door for the CLI and for callers that keep their jobs as data.
//!
//! ## Example Document
//!
//! ```json
//! {
//!   "segments": [
//!     { "type": "text", "content": "PARCEL 42", "bold": true, "align": "center" },
//!     { "type": "columns", "left": "Weight", "right": "1.2kg" },
//!     { "type": "barcode", "data": "4212345678", "symbology": "code128", "height": 70 }
//!   ],
//!   "cut": true,
//!   "landscape": false
//! }
//! ```
//!
//! Styling fields are optional strings and numbers; unknown values fail
//! with [`HermanoError::InvalidArgument`] rather than being silently
//! defaulted, so a typo in a document never changes the printed output.

use serde::{Deserialize, Serialize};

use crate::job::{assemble, JobOptions};
use crate::protocol::barcode::{self, BarWidth, BarcodeOptions, Symbology, WideRatio};
use crate::protocol::text::{self, Alignment, Font, Spacing, StyleOptions, Underline};
use crate::HermanoError;

// ============================================================================
// DATA MODEL
// ============================================================================

/// One printable segment of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Single styled text line
    Text {
        content: String,
        #[serde(flatten)]
        style: StyleSpec,
    },
    /// Two-column text line (left HT right)
    Columns {
        left: String,
        right: String,
        #[serde(flatten)]
        style: StyleSpec,
        /// Terminate with CR instead of LF
        #[serde(default)]
        carriage_return: bool,
    },
    /// Barcode block
    Barcode {
        data: String,
        #[serde(default)]
        symbology: Option<String>,
        #[serde(default)]
        height: Option<i32>,
        #[serde(default)]
        width: Option<String>,
        #[serde(default)]
        ratio: Option<String>,
        #[serde(default)]
        human_readable: Option<bool>,
        #[serde(default)]
        align: Option<String>,
    },
}

/// Optional style fields for a text segment; absent fields take the
/// [`StyleOptions`] defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleSpec {
    pub size: Option<u32>,
    pub font: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<String>,
    pub align: Option<String>,
    pub spacing: Option<String>,
}

/// A complete declarative print job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub cut: bool,
    #[serde(default)]
    pub landscape: bool,
    /// Page [width, height] in printer units
    pub page_format: Option<[u8; 2]>,
    pub page_length: Option<u8>,
    pub left_margin: Option<u8>,
    pub right_margin: Option<u8>,
    pub horizontal_position: Option<u8>,
    pub vertical_position: Option<u8>,
}

// ============================================================================
// NAME RESOLUTION
// ============================================================================

/// Resolve a font name (case-insensitive).
pub fn parse_font(name: &str) -> Result<Font, HermanoError> {
    match name.to_lowercase().as_str() {
        "brougham" => Ok(Font::Brougham),
        "lettergothic" | "lettergothicbold" | "letter-gothic-bold" => Ok(Font::LetterGothicBold),
        "brussels" => Ok(Font::Brussels),
        "helsinki" => Ok(Font::Helsinki),
        "sandiego" | "san-diego" => Ok(Font::SanDiego),
        other => Err(HermanoError::InvalidArgument(format!(
            "unknown font '{other}'"
        ))),
    }
}

/// Resolve an alignment name.
pub fn parse_alignment(name: &str) -> Result<Alignment, HermanoError> {
    match name.to_lowercase().as_str() {
        "left" => Ok(Alignment::Left),
        "center" | "centre" => Ok(Alignment::Center),
        "right" => Ok(Alignment::Right),
        other => Err(HermanoError::InvalidArgument(format!(
            "unknown alignment '{other}'"
        ))),
    }
}

/// Resolve an underline mode name.
pub fn parse_underline(name: &str) -> Result<Underline, HermanoError> {
    match name.to_lowercase().as_str() {
        "none" => Ok(Underline::None),
        "single" => Ok(Underline::Single),
        "double" => Ok(Underline::Double),
        other => Err(HermanoError::InvalidArgument(format!(
            "unknown underline mode '{other}'"
        ))),
    }
}

/// Resolve a spacing name.
pub fn parse_spacing(name: &str) -> Result<Spacing, HermanoError> {
    match name.to_lowercase().as_str() {
        "normal" => Ok(Spacing::Normal),
        "wide" => Ok(Spacing::Wide),
        other => Err(HermanoError::InvalidArgument(format!(
            "unknown spacing '{other}'"
        ))),
    }
}

/// Resolve a symbology name.
pub fn parse_symbology(name: &str) -> Result<Symbology, HermanoError> {
    match name.to_lowercase().replace('_', "-").as_str() {
        "code39" => Ok(Symbology::Code39),
        "itf" => Ok(Symbology::Itf),
        "ean8" | "ean-8" => Ok(Symbology::Ean8),
        "ean13" | "ean-13" => Ok(Symbology::Ean13),
        "upca" | "upc-a" => Ok(Symbology::UpcA),
        "upce" | "upc-e" => Ok(Symbology::UpcE),
        "codabar" => Ok(Symbology::Codabar),
        "code128" => Ok(Symbology::Code128),
        "gs1-128" | "gs1128" | "ean128" | "ean-128" => Ok(Symbology::Gs1_128),
        "rss" => Ok(Symbology::Rss),
        "code93" => Ok(Symbology::Code93),
        "postnet" => Ok(Symbology::Postnet),
        "msi" => Ok(Symbology::Msi),
        other => Err(HermanoError::InvalidArgument(format!(
            "unknown symbology '{other}'"
        ))),
    }
}

/// Resolve a bar width name.
pub fn parse_bar_width(name: &str) -> Result<BarWidth, HermanoError> {
    match name.to_lowercase().replace('_', "-").as_str() {
        "extra-small" | "xsmall" | "xs" => Ok(BarWidth::ExtraSmall),
        "small" => Ok(BarWidth::Small),
        "medium" => Ok(BarWidth::Medium),
        "large" => Ok(BarWidth::Large),
        other => Err(HermanoError::InvalidArgument(format!(
            "unknown bar width '{other}'"
        ))),
    }
}

/// Resolve a wide-to-narrow ratio name.
pub fn parse_ratio(name: &str) -> Result<WideRatio, HermanoError> {
    match name {
        "3:1" => Ok(WideRatio::ThreeToOne),
        "2.5:1" => Ok(WideRatio::FiveToTwo),
        "2:1" => Ok(WideRatio::TwoToOne),
        other => Err(HermanoError::InvalidArgument(format!(
            "unknown ratio '{other}' (expected 3:1, 2.5:1 or 2:1)"
        ))),
    }
}

impl StyleSpec {
    /// Resolve the optional fields into concrete [`StyleOptions`].
    pub fn resolve(&self) -> Result<StyleOptions, HermanoError> {
        let defaults = StyleOptions::default();
        Ok(StyleOptions {
            font_size: self.size.unwrap_or(defaults.font_size),
            font: match &self.font {
                Some(name) => parse_font(name)?,
                None => defaults.font,
            },
            bold: self.bold.unwrap_or(defaults.bold),
            italic: self.italic.unwrap_or(defaults.italic),
            underline: match &self.underline {
                Some(name) => parse_underline(name)?,
                None => defaults.underline,
            },
            alignment: match &self.align {
                Some(name) => parse_alignment(name)?,
                None => defaults.alignment,
            },
            spacing: match &self.spacing {
                Some(name) => parse_spacing(name)?,
                None => defaults.spacing,
            },
        })
    }
}

// ============================================================================
// ENCODING
// ============================================================================

impl Segment {
    /// Encode this segment into one fragment.
    pub fn encode(&self) -> Result<Vec<u8>, HermanoError> {
        match self {
            Segment::Text { content, style } => text::encode(content, &style.resolve()?),
            Segment::Columns {
                left,
                right,
                style,
                carriage_return,
            } => text::encode_columns(left, right, &style.resolve()?, *carriage_return),
            Segment::Barcode {
                data,
                symbology,
                height,
                width,
                ratio,
                human_readable,
                align,
            } => {
                let defaults = BarcodeOptions::default();
                let opts = BarcodeOptions {
                    symbology: match symbology {
                        Some(name) => parse_symbology(name)?,
                        None => defaults.symbology,
                    },
                    height: height.unwrap_or(defaults.height),
                    width: match width {
                        Some(name) => parse_bar_width(name)?,
                        None => defaults.width,
                    },
                    ratio: match ratio {
                        Some(name) => parse_ratio(name)?,
                        None => defaults.ratio,
                    },
                    human_readable: human_readable.unwrap_or(defaults.human_readable),
                    alignment: match align {
                        Some(name) => parse_alignment(name)?,
                        None => defaults.alignment,
                    },
                };
                barcode::encode(data, &opts)
            }
        }
    }
}

impl Document {
    /// Parse a document from its JSON rendering.
    pub fn from_json(json: &str) -> Result<Self, HermanoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Job-level options carried by this document.
    pub fn job_options(&self) -> JobOptions {
        JobOptions {
            cut_paper: self.cut,
            landscape: self.landscape,
            page_format: self.page_format.map(|[w, h]| (w, h)),
            page_length: self.page_length,
            left_margin: self.left_margin,
            right_margin: self.right_margin,
            horizontal_position: self.horizontal_position,
            vertical_position: self.vertical_position,
        }
    }

    /// Encode every segment and assemble the finished job.
    ///
    /// Any segment error aborts the whole build before assembly, so a bad
    /// document never produces partial printer output.
    pub fn build(&self) -> Result<Vec<u8>, HermanoError> {
        let fragments = self
            .segments
            .iter()
            .map(Segment::encode)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(assemble(&fragments, &self.job_options()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
