// SentiView - platform/fs.rs
//
// Filesystem helpers used by the preview loader and the CLI.

use std::io;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Read the full content of a file as a string.
///
/// A leading byte-order mark selects the encoding (UTF-8, UTF-16LE or
/// UTF-16BE) and is removed. Files without one are read as UTF-8. Invalid
/// sequences become U+FFFD so a stray byte in an export never blocks the
/// preview.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_lossy(&bytes))
}

/// Decode raw file bytes, honouring a leading byte-order mark.
pub fn decode_lossy(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        String::from_utf8_lossy(rest).into_owned()
    } else if let Some(rest) = bytes.strip_prefix(UTF16LE_BOM) {
        decode_utf16_lossy(rest, u16::from_le_bytes)
    } else if let Some(rest) = bytes.strip_prefix(UTF16BE_BOM) {
        decode_utf16_lossy(rest, u16::from_be_bytes)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// A trailing odd byte is a truncated code unit and decodes to U+FFFD.
fn decode_utf16_lossy(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let truncated = !chunks.remainder().is_empty();
    let units: Vec<u16> = chunks.map(|c| unit([c[0], c[1]])).collect();
    let mut text = String::from_utf16_lossy(&units);
    if truncated {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

/// Write `content` to `path` atomically (write temp, then rename).
///
/// Creates parent directories as needed. A crash between write and rename
/// loses the new content but never corrupts the previous file.
pub fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_lossy_replaces_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, b"Hit Sentence\tSentiment\ncaf\xe9,positive\n").unwrap();
        let text = read_file_lossy(&path).unwrap();
        assert!(text.contains("caf\u{fffd},positive"));
    }

    #[test]
    fn test_read_file_lossy_strips_utf8_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bom.csv");
        std::fs::write(&path, b"\xEF\xBB\xBFHit Sentence\tSentiment\n").unwrap();
        assert_eq!(read_file_lossy(&path).unwrap(), "Hit Sentence\tSentiment\n");
    }

    #[test]
    fn test_read_file_lossy_decodes_utf16le_with_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("utf16le.csv");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "Hit Sentence\tSentiment\naño,positive\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        std::fs::write(&path, bytes).unwrap();
        assert_eq!(
            read_file_lossy(&path).unwrap(),
            "Hit Sentence\tSentiment\naño,positive\n"
        );
    }

    #[test]
    fn test_decode_lossy_utf16be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "Sentiment".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_lossy(&bytes), "Sentiment");
    }

    #[test]
    fn test_decode_lossy_utf16_odd_trailing_byte() {
        assert_eq!(decode_lossy(&[0xFF, 0xFE, b'a', 0x00, b'b']), "a\u{fffd}");
    }

    #[test]
    fn test_decode_lossy_without_bom_is_utf8() {
        assert_eq!(decode_lossy("año".as_bytes()), "año");
    }

    #[test]
    fn test_write_atomic_creates_parents_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        write_atomic(&path, b"one").unwrap();
        write_atomic(&path, b"two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
        assert!(!path.with_extension("tmp").exists());
    }
}
