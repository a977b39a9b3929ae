/// Error correction codewords appended after the padded data
use crate::encoder::reed_solomon::ReedSolomonEncoder;

/// Return `padded ++ parity` with exactly `ecc_len` parity codewords
pub fn append_ecc(padded: &[u8], ecc_len: usize) -> Vec<u8> {
    let rs = ReedSolomonEncoder::new(ecc_len);
    let parity = rs.encode(padded);

    let mut codewords = Vec::with_capacity(padded.len() + rs.ecc_len());
    codewords.extend_from_slice(padded);
    codewords.extend_from_slice(&parity);
    codewords
}
