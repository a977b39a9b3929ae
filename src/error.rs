use thiserror::Error;

/// Errors raised while encoding or rendering a QR symbol
#[derive(Debug, Error)]
pub enum QrError {
    #[error("unsupported QR version {0} (byte mode supports 1-4)")]
    UnsupportedVersion(u8),

    #[error("cannot build a byte-mode header over an empty payload")]
    EmptyInput,

    #[error("character {ch:?} at index {index} is outside ISO-8859-1")]
    UnencodableCharacter { ch: char, index: usize },

    #[error("{len} characters exceed the largest byte-mode capacity of {max}")]
    PayloadTooLong { len: usize, max: usize },

    #[error("{bits} data bits do not fit in {capacity} data modules")]
    DataOverflow { bits: usize, capacity: usize },

    #[error("invalid mask id {0} (expected 0-7)")]
    InvalidMask(u8),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, QrError>;
