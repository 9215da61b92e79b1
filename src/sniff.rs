//! Read the dimensions of a Base64-encoded PNG without a full decode.
//!
//! The IHDR chunk is mandatory and always first, so the width and height
//! of any PNG sit at bytes 16-24 of the raw stream. This is a convenience
//! reader for foreign PNGs; images built by this crate already know their
//! dimensions.

use base64::Engine;

use crate::error::{Error, Result};

/// Decode Base64 PNG text and return its `(width, height)`.
///
/// Fails with [`Error::MalformedText`] on an invalid character or bad
/// padding, or when the decoded stream is too short to hold an IHDR.
pub fn dimensions_from_base64(text: &str) -> Result<(u32, u32)> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(|err| Error::MalformedText(err.to_string()))?;

    if bytes.len() < 24 {
        return Err(Error::MalformedText(format!(
            "stream too short for an IHDR: {} bytes",
            bytes.len()
        )));
    }

    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;

    #[test]
    fn test_reads_own_output() {
        let mut image = Image::new(320, 200, 8).unwrap();
        let text = image.to_base64();
        assert_eq!(dimensions_from_base64(&text).unwrap(), (320, 200));
    }

    #[test]
    fn test_rejects_invalid_character() {
        assert!(matches!(
            dimensions_from_base64("not*base64!"),
            Err(Error::MalformedText(_))
        ));
    }

    #[test]
    fn test_rejects_bad_padding() {
        assert!(matches!(
            dimensions_from_base64("AAA=AAAA"),
            Err(Error::MalformedText(_))
        ));
    }

    #[test]
    fn test_rejects_short_stream() {
        let short = base64::engine::general_purpose::STANDARD.encode([0u8; 16]);
        assert!(matches!(
            dimensions_from_base64(&short),
            Err(Error::MalformedText(_))
        ));
    }
}
