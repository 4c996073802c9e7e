//! # Diagnostic Rendering
//!
//! Human-readable rendering of command buffers for logs and debugging.
//! Kept entirely outside the encoders: the encode path never depends on
//! whether anything is rendered or logged.

/// Render a command buffer with control characters escaped.
///
/// Printable ASCII passes through unchanged; backslash is doubled so the
/// rendering stays unambiguous; everything else becomes a `\xNN` escape.
///
/// ## Example
///
/// ```
/// use hermano::display::escape_bytes;
///
/// assert_eq!(escape_bytes(&[0x1B, 0x40, b'H', b'i', 0x0A]), r"\x1B@Hi\x0A");
/// assert_eq!(escape_bytes(b"a\\b"), r"a\\b");
/// ```
pub fn escape_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for &byte in data {
        match byte {
            b'\\' => out.push_str(r"\\"),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!(r"\x{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_passthrough() {
        assert_eq!(escape_bytes(b"Hello World!"), "Hello World!");
    }

    #[test]
    fn test_control_bytes_escaped() {
        assert_eq!(escape_bytes(&[0x00, 0x1B, 0xFF]), r"\x00\x1B\xFF");
    }

    #[test]
    fn test_backslash_doubled() {
        assert_eq!(escape_bytes(&[0x5C]), r"\\");
    }

    #[test]
    fn test_empty() {
        assert_eq!(escape_bytes(&[]), "");
    }
}
