//! Integration tests for the data encoding pipeline
//!
//! Covers the length contract of every stage, header round-trips over the
//! full capacity range, and padding behavior.

use proptest::prelude::*;
use qr_forge::encoder::bits::{bits_to_codewords, to_bits};
use qr_forge::encoder::header::{BYTE_MODE, add_header, pad};
use qr_forge::encoder::reed_solomon::ReedSolomonEncoder;
use qr_forge::encoder::{byte_mode_encode, encode_codewords};
use qr_forge::tables;

/// Read `count` bits starting at `offset` as an unsigned value
fn read_bits(bits: &[bool], offset: usize, count: usize) -> u32 {
    bits[offset..offset + count]
        .iter()
        .fold(0u32, |acc, &b| (acc << 1) | b as u32)
}

/// Undo `add_header`: (mode, count, payload)
fn parse_header(codewords: &[u8]) -> (u8, usize, Vec<u8>) {
    let bits = to_bits(codewords);
    let mode = read_bits(&bits, 0, 4) as u8;
    let count = read_bits(&bits, 4, 8) as usize;
    let payload = (0..count)
        .map(|i| read_bits(&bits, 12 + 8 * i, 8) as u8)
        .collect();
    (mode, count, payload)
}

#[test]
fn test_pad_scenario() {
    assert_eq!(
        pad(&[0x10, 0x20], 6),
        vec![0x10, 0x20, 0xEC, 0x11, 0xEC, 0x11]
    );
}

#[test]
fn test_to_bits_scenario() {
    assert_eq!(
        to_bits(&[0b10110000]),
        vec![true, false, true, true, false, false, false, false]
    );
}

#[test]
fn test_header_roundtrip_full_capacity() {
    for version in 1..=4u8 {
        let max = tables::capacity(version).unwrap().max_input_len;
        for len in 1..=max {
            let payload: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let header = add_header(&payload).unwrap();
            let (mode, count, decoded) = parse_header(&header);
            assert_eq!(mode, BYTE_MODE);
            assert_eq!(count, len);
            assert_eq!(decoded, payload);
            // Terminator nibble is zero
            assert_eq!(header[header.len() - 1] & 0x0F, 0);
        }
    }
}

#[test]
fn test_codewords_are_rs_codewords() {
    for version in 1..=4u8 {
        let cap = tables::capacity(version).unwrap();
        let codewords = encode_codewords("integration", version).unwrap();
        assert_eq!(codewords.len(), cap.total_codewords());
        assert!(ReedSolomonEncoder::new(cap.ecc_codewords).is_codeword(&codewords));
    }
}

#[test]
fn test_bits_pack_back_to_codewords() {
    let codewords = encode_codewords("pack me", 2).unwrap();
    let bits = byte_mode_encode("pack me", 2).unwrap();
    assert_eq!(bits_to_codewords(&bits), codewords);
}

#[test]
fn test_latin1_payload() {
    let codewords = encode_codewords("\u{E9}", 1).unwrap();
    let (_, count, payload) = parse_header(&codewords);
    assert_eq!(count, 1);
    assert_eq!(payload, vec![0xE9]);
}

proptest! {
    #[test]
    fn prop_encoded_length(version in 1u8..=4, text in "[ -~]{1,100}") {
        let cap = tables::capacity(version).unwrap();
        let bits = byte_mode_encode(&text, version).unwrap();
        prop_assert_eq!(bits.len(), 8 * cap.total_codewords());
    }

    #[test]
    fn prop_payload_truncated_to_capacity(version in 1u8..=4, text in "[a-z]{1,100}") {
        let cap = tables::capacity(version).unwrap();
        let codewords = encode_codewords(&text, version).unwrap();
        let (_, count, payload) = parse_header(&codewords);
        let expected = text.len().min(cap.max_input_len);
        prop_assert_eq!(count, expected);
        prop_assert_eq!(&payload[..], &text.as_bytes()[..expected]);
    }

    #[test]
    fn prop_pad_idempotent(data in proptest::collection::vec(any::<u8>(), 0..40), target in 0usize..60) {
        let once = pad(&data, target);
        prop_assert_eq!(pad(&once, target), once.clone());
        prop_assert_eq!(once.len(), data.len().max(target));
        prop_assert_eq!(&once[..data.len()], &data[..]);
    }
}
