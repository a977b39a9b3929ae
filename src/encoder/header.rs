/// Byte-mode header construction and pad-codeword filling
use crate::error::{QrError, Result};

/// Mode indicator for 8-bit byte mode (0100)
pub const BYTE_MODE: u8 = 0b0100;

/// Pad codewords appended alternately after the terminator
pub const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Prefix the mode nibble and 8-bit count, shifting the payload by a nibble
///
/// Layout: `mode(4) | count(8) | payload(8n) | terminator(4)`, so the output
/// is exactly two bytes longer than `bytes`.
pub fn add_header(bytes: &[u8]) -> Result<Vec<u8>> {
    let (first, last) = match (bytes.first(), bytes.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Err(QrError::EmptyInput),
    };
    let count = bytes.len();

    let mut data = Vec::with_capacity(count + 2);
    data.push((BYTE_MODE << 4) | ((count as u8 & 0xF0) >> 4));
    data.push(((count as u8 & 0x0F) << 4) | (first >> 4));
    for pair in bytes.windows(2) {
        data.push(((pair[0] & 0x0F) << 4) | (pair[1] >> 4));
    }
    // Low nibble of the last byte, then the 0000 terminator
    data.push((last & 0x0F) << 4);

    Ok(data)
}

/// Append 0xEC, 0x11, ... until `target_len`; longer input is returned as-is
pub fn pad(sequence: &[u8], target_len: usize) -> Vec<u8> {
    let mut padded = sequence.to_vec();
    if padded.len() >= target_len {
        return padded;
    }
    let missing = target_len - padded.len();
    padded.extend(PAD_BYTES.iter().cycle().take(missing));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_single_byte() {
        // 0100 | 00000001 | 0100 0001 | 0000
        assert_eq!(add_header(&[0x41]).unwrap(), vec![0x40, 0x14, 0x10]);
    }

    #[test]
    fn test_header_hello() {
        let header = add_header(b"HELLO").unwrap();
        assert_eq!(header, vec![0x40, 0x54, 0x84, 0x54, 0xC4, 0xC4, 0xF0]);
    }

    #[test]
    fn test_header_empty() {
        assert!(matches!(add_header(&[]), Err(QrError::EmptyInput)));
    }

    #[test]
    fn test_header_length() {
        for len in 1..=78usize {
            let bytes: Vec<u8> = (0..len).map(|i| i as u8).collect();
            assert_eq!(add_header(&bytes).unwrap().len(), len + 2);
        }
    }

    #[test]
    fn test_pad() {
        assert_eq!(
            pad(&[0x10, 0x20], 6),
            vec![0x10, 0x20, 0xEC, 0x11, 0xEC, 0x11]
        );
        assert_eq!(pad(&[0x10, 0x20], 3), vec![0x10, 0x20, 0xEC]);
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad(&[1, 2, 3], 2), vec![1, 2, 3]);
        assert_eq!(pad(&[1, 2, 3], 3), vec![1, 2, 3]);
        assert!(pad(&[], 0).is_empty());
    }
}
