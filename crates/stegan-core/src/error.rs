use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a JPEG or a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a pixel layout other than 1, 3 or 4 channels of 8 bits
    #[error("Pixel mode is not supported: {channels} channel(s) per pixel")]
    UnsupportedPixelMode { channels: usize },

    /// Represents an output format that cannot keep a pixel layout as is. For example grayscale as BMP, which is stored with a palette
    #[error("A {layout} image cannot be saved losslessly as {format}")]
    LossyOutputFormat {
        layout: &'static str,
        format: &'static str,
    },

    /// Represents a raw pixel buffer whose length does not match its dimensions
    #[error("Pixel data of {actual} bytes does not match the expected {expected} bytes")]
    PixelDataMismatch { expected: usize, actual: usize },

    /// Represents a bit depth outside of 1..=4
    #[error("Invalid bit depth {0}, only 1 to 4 least significant bits can be used")]
    InvalidBitDepth(u8),

    /// Represents an unknown numeric cipher variant tag
    #[error("Invalid Vigenere variant: {0}")]
    InvalidCipherVariant(u8),

    /// Represents a cipher that was constructed without usable key material
    #[error("Cipher key is missing or contains no usable symbols")]
    MissingCipherKey,

    /// Represents a key of the wrong kind, for example a text key for the byte oriented variant
    #[error("Invalid cipher key type for the chosen variant")]
    InvalidCipherKeyType,

    /// Represents the error of invalid UTF-8 text data produced or consumed by a text cipher
    #[error("Invalid text data found")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an error caused by an invalid filename, for example characters beyond Latin-1 or an empty filename
    #[error("A file with an invalid file name was provided")]
    InvalidFileName,

    /// Represents a filename or content length that does not fit its envelope header field
    #[error("The {field} length {len} does not fit into the envelope header")]
    FieldOverflow { field: &'static str, len: usize },

    /// Represents a payload that is bigger than the carrier can hold
    #[error(
        "Capacity Error: The payload requires {required} bits but the image can only hold {available} bits at the chosen bit depth"
    )]
    PayloadTooLarge { required: usize, available: usize },

    /// Represents two images that cannot be compared pixel by pixel
    #[error("Size mismatch: {0}x{1} cannot be compared with {2}x{3}")]
    SizeMismatch(u32, u32, u32, u32),

    /// Represents an unveil of no secret data. For example when a media did not contain any secrets
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message or file")]
    MissingMessage,

    #[error("API Error: Missing reference or candidate image")]
    MissingComparison,
}
