use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffstegoError {
    /// Represents a bitstream that does not fit into the carrier image
    #[error("Capacity Error: {required} bits need to be hidden, but the carrier only holds {capacity} bits")]
    CapacityExceeded { required: usize, capacity: usize },

    /// Represents two images with different dimensions that cannot be compared
    #[error("Size mismatch: {0}x{1} cannot be compared to {2}x{3}")]
    SizeMismatch(u32, u32, u32, u32),

    /// Represents a symbol that has no code in the code table
    #[error("Symbol {0:?} has no Huffman code")]
    UnknownSymbol(char),

    /// Represents a bitstream that ended inside the tree, or a bit without a matching branch
    #[error("Malformed bitstream at bit {position}")]
    MalformedStream { position: usize },

    /// Represents a character in a textual bitstream other than `0` or `1`
    #[error("Invalid bit {0:?}, only '0' and '1' are allowed")]
    InvalidBit(char),

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents a message key that is truncated or carries invalid content
    #[error("Message key is invalid: {0}")]
    InvalidKey(String),

    /// Represents a message key written by an unknown format version
    #[error("Unsupported message key version: {0}")]
    UnsupportedKeyVersion(u8),

    /// Represents an embedding that changed the carrier more than allowed
    #[error("Distortion of {actual:.4}% exceeds the allowed {allowed:.4}%")]
    DistortionExceeded { actual: f64, allowed: f64 },

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("No message key set")]
    KeyNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
