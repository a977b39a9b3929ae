//! Data encoding pipeline
//!
//! Turns text into the final codeword bit sequence for one symbol:
//! - ISO-8859-1 extraction and truncation to capacity
//! - Byte-mode header and pad codewords
//! - Reed-Solomon parity
//! - MSB-first bit expansion

/// Bit expansion of codewords
pub mod bits;
/// ISO-8859-1 byte extraction
pub mod byte_codec;
/// Parity codeword concatenation
pub mod ecc;
/// Mode/count header and padding
pub mod header;
/// GF(256) Reed-Solomon encoder
pub mod reed_solomon;

use crate::error::Result;
use crate::tables;

/// Encode `input` for `version` into data + ECC codewords
pub fn encode_codewords(input: &str, version: u8) -> Result<Vec<u8>> {
    let cap = tables::capacity(version)?;

    let payload = byte_codec::encode(input, cap.max_input_len)?;
    let with_header = header::add_header(&payload)?;
    let padded = header::pad(&with_header, cap.data_codewords);
    let codewords = ecc::append_ecc(&padded, cap.ecc_codewords);

    log::debug!(
        "version {}: {} payload bytes, {} data codewords, {} ECC codewords",
        version,
        payload.len(),
        padded.len(),
        cap.ecc_codewords
    );

    Ok(codewords)
}

/// Encode `input` for `version` into the bit sequence placed in the matrix
pub fn byte_mode_encode(input: &str, version: u8) -> Result<Vec<bool>> {
    let codewords = encode_codewords(input, version)?;
    Ok(bits::to_bits(&codewords))
}
