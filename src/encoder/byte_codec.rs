/// ISO-8859-1 byte extraction
use crate::error::{QrError, Result};

/// Convert text to one byte per character and keep at most `max_len` bytes
///
/// Characters above U+00FF have no ISO-8859-1 byte and are rejected. Bytes
/// beyond `max_len` are dropped without error.
pub fn encode(input: &str, max_len: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(input.len().min(max_len));

    for (index, ch) in input.chars().enumerate() {
        if bytes.len() == max_len {
            log::debug!(
                "input truncated to {} bytes at character {}",
                max_len,
                index
            );
            break;
        }
        let byte = u8::try_from(u32::from(ch))
            .map_err(|_| QrError::UnencodableCharacter { ch, index })?;
        bytes.push(byte);
    }

    Ok(bytes)
}
