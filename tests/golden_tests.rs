//! # Golden Tests
//!
//! These tests pin the wire format: the exact byte sequences the printer
//! firmware expects. Every expected buffer here is written out in full, so
//! a change to any escape sequence shows up as a byte-level diff.

use pretty_assertions::assert_eq;

use hermano::document::Document;
use hermano::job::{assemble, JobOptions, PrintJob};
use hermano::protocol::barcode::{self, BarWidth, BarcodeOptions, Symbology, WideRatio};
use hermano::protocol::text::{self, Alignment, Font, Spacing, StyleOptions, Underline};

// ============================================================================
// TEXT RUNS
// ============================================================================

#[test]
fn two_column_run_full_sequence() {
    // "Hello" HT "World": 24pt Helsinki, bold, single underline, centered,
    // wide spacing, CR-terminated.
    let style = StyleOptions {
        font_size: 24,
        font: Font::Helsinki,
        bold: true,
        italic: false,
        underline: Underline::Single,
        alignment: Alignment::Center,
        spacing: Spacing::Wide,
    };
    let run = text::encode_columns("Hello", "World", &style, true).unwrap();
    assert_eq!(
        run,
        vec![
            0x1B, 0x53, 0x4F, 0x48, // segment header
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
fn single_run_default_style() {
    let run = text::encode("Hi", &StyleOptions::default()).unwrap();
    assert_eq!(
        run,
        vec![
            0x1B, 0x53, 0x4F, 0x48, // segment header
            0x1B, 0x58, 0x32, 0x34, // ESC X "24"
            0x1B, 0x6B, 0x00, // ESC k Brougham
            0x1B, 0x46, // bold off
            0x1B, 0x35, // italic off
            0x1B, 0x2D, 0x30, // no underline
            0x1B, 0x61, 0x30, // align left
            0x1B, 0x20, 0x30, // normal spacing
            0x48, 0x69, // "Hi"
            0x0A, // LF
        ]
    );
}

// ============================================================================
// BARCODES
// ============================================================================

#[test]
fn code128_full_sequence() {
    let opts = BarcodeOptions {
        symbology: Symbology::Code128,
        height: 70,
        width: BarWidth::Medium,
        ratio: WideRatio::TwoToOne,
        human_readable: true,
        alignment: Alignment::Center,
    };
    let cmd = barcode::encode("123456789", &opts).unwrap();
    assert_eq!(
        cmd,
        vec![
            0x1B, 0x69, // ESC i
            0x74, 0x61, // t a (Code128)
            0x72, 0x31, // r 1 (chars below)
            0x68, 0x37, 0x30, // h 7 0
            0x77, 0x32, // w 2 (medium)
            0x7A, 0x32, // z 2 (2:1)
            0x61, 0x31, // a 1 (center)
            0x42, // B marker
            0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, // data
            0x5C, 0x5C, // escaped terminator
        ]
    );
}

#[test]
fn terminator_asymmetry() {
    // The doubled backslash belongs only to the Code128 family.
    let single = [
        Symbology::Code39,
        Symbology::Itf,
        Symbology::Ean8,
        Symbology::Ean13,
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Codabar,
        Symbology::Rss,
        Symbology::Code93,
        Symbology::Postnet,
        Symbology::Msi,
    ];
    for sym in single {
        let opts = BarcodeOptions {
            symbology: sym,
            ..Default::default()
        };
        let cmd = barcode::encode("0123", &opts).unwrap();
        assert_eq!(cmd.last(), Some(&0x5C), "{sym:?}");
        assert_ne!(cmd[cmd.len() - 2], 0x5C, "{sym:?} must not double");
    }
    for sym in [Symbology::Code128, Symbology::Gs1_128] {
        let opts = BarcodeOptions {
            symbology: sym,
            ..Default::default()
        };
        let cmd = barcode::encode("0123", &opts).unwrap();
        assert_eq!(&cmd[cmd.len() - 2..], &[0x5C, 0x5C][..], "{sym:?}");
    }
}

#[test]
fn height_zero_padded_to_two_digits() {
    let at = |h: i32| {
        let opts = BarcodeOptions {
            height: h,
            ..Default::default()
        };
        let cmd = barcode::encode("1", &opts).unwrap();
        let pos = cmd.iter().position(|&b| b == b'h').unwrap();
        [cmd[pos + 1], cmd[pos + 2]]
    };
    assert_eq!(at(7), [b'0', b'7']);
    assert_eq!(at(70), [b'7', b'0']);
    assert_eq!(at(0), [b'0', b'0']);
    assert_eq!(at(99), [b'9', b'9']);
}

// ============================================================================
// ASSEMBLY
// ============================================================================

#[test]
fn assemble_cut_landscape() {
    let fragment = vec![0xAA, 0xBB, 0xCC];
    let opts = JobOptions {
        cut_paper: true,
        landscape: true,
        ..Default::default()
    };
    assert_eq!(
        assemble(&[fragment], &opts),
        vec![
            0x1B, 0x40, // init
            0x1B, 0x69, 0x4C, // landscape
            0xAA, 0xBB, 0xCC, // fragment, verbatim
            0x1B, 0x69, 0x43, // cut
            0x0C, // form feed
        ]
    );
}

#[test]
fn assemble_all_layout_options() {
    let opts = JobOptions {
        cut_paper: true,
        landscape: true,
        page_format: Some((120, 240)),
        page_length: Some(66),
        left_margin: Some(4),
        right_margin: Some(76),
        horizontal_position: Some(10),
        vertical_position: Some(20),
    };
    assert_eq!(
        assemble(&[vec![b'x']], &opts),
        vec![
            0x1B, 0x40, // init
            0x1B, 0x69, 0x4C, // landscape
            0x1B, 0x69, 0x50, 120, 240, // page format
            0x1B, 0x43, 66, // page length
            0x1B, 0x6C, 4, // left margin
            0x1B, 0x51, 76, // right margin
            0x1B, 0x69, 0x58, 10, // horizontal position
            0x1B, 0x69, 0x59, 20, // vertical position
            b'x', // fragment
            0x1B, 0x69, 0x43, // cut
            0x0C, // form feed
        ]
    );
}

#[test]
fn absent_options_leave_no_trace() {
    let out = assemble(&[], &JobOptions::default());
    assert_eq!(out, vec![0x1B, 0x40, 0x0C]);
}

#[test]
fn fragments_concatenated_without_separators() {
    let a = text::encode("a", &StyleOptions::default()).unwrap();
    let b = barcode::encode("1", &BarcodeOptions::default()).unwrap();
    let out = assemble(&[a.clone(), b.clone()], &JobOptions::default());

    let mut expected = vec![0x1B, 0x40];
    expected.extend(a);
    expected.extend(b);
    expected.push(0x0C);
    assert_eq!(out, expected);
}

// ============================================================================
// PURITY
// ============================================================================

#[test]
fn encoding_is_deterministic() {
    let style = StyleOptions {
        font_size: 36,
        bold: true,
        ..Default::default()
    };
    let barcode_opts = BarcodeOptions {
        symbology: Symbology::Gs1_128,
        height: 42,
        ..Default::default()
    };
    let build = || {
        PrintJob::new()
            .text("INVOICE", &style)
            .unwrap()
            .barcode("0109501101", &barcode_opts)
            .unwrap()
            .cut()
            .landscape()
            .build()
    };
    assert_eq!(build(), build());
}

// ============================================================================
// DOCUMENTS
// ============================================================================

#[test]
fn document_matches_hand_built_job() {
    let doc = Document::from_json(
        r#"{
            "segments": [
                { "type": "text", "content": "PARCEL 42", "bold": true, "align": "center" },
                { "type": "barcode", "data": "4212345", "symbology": "code128", "height": 70 }
            ],
            "cut": true,
            "landscape": true
        }"#,
    )
    .unwrap();

    let style = StyleOptions {
        bold: true,
        alignment: Alignment::Center,
        ..Default::default()
    };
    let barcode_opts = BarcodeOptions {
        symbology: Symbology::Code128,
        height: 70,
        ..Default::default()
    };
    let manual = PrintJob::new()
        .text("PARCEL 42", &style)
        .unwrap()
        .barcode("4212345", &barcode_opts)
        .unwrap()
        .cut()
        .landscape()
        .build();

    assert_eq!(doc.build().unwrap(), manual);
}

#[test]
fn document_error_produces_no_bytes() {
    let doc = Document::from_json(
        r#"{
            "segments": [
                { "type": "text", "content": "ok" },
                { "type": "barcode", "data": "1", "height": 100 }
            ]
        }"#,
    )
    .unwrap();
    assert!(doc.build().is_err());
}
