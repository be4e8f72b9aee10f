//! Router dump text input.

use std::error::Error;
use std::path::Path;

/// Decode bytes as UTF-8, dropping undecodable sequences, and translate
/// `\r\n` / `\r` line endings to `\n`.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0usize;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }
    if dropped > 0 {
        log::debug!("decode_lossy() dropped {dropped} undecodable byte(s)");
    }
    if text.contains('\r') {
        text = text.replace("\r\n", "\n").replace('\r', "\n");
    }
    text
}

/// Read a text file, tolerating bad bytes.
pub fn read_text_lossy(path: &Path) -> Result<String, Box<dyn Error>> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    Ok(decode_lossy(&bytes))
}
