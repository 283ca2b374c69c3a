use crate::kind::MessageType;

/// Errors that can occur while encoding or decoding DCW messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The leading byte is not one of the known message tags.
    #[error("unknown message tag 0x{0:02X}")]
    UnknownTag(u8),

    /// The input ended before a declared field or element was complete.
    #[error("truncated input ({needed} bytes needed, {remaining} remaining)")]
    Truncated { needed: usize, remaining: usize },

    /// An element count exceeds the fixed list capacity.
    #[error("entry count too large ({count}, max {max})")]
    CountTooLarge { count: usize, max: usize },

    /// A length-prefixed field exceeds its fixed capacity.
    #[error("field too large ({len} bytes, max {max})")]
    FieldTooLarge { len: usize, max: usize },

    /// The destination buffer cannot hold the encoded message.
    #[error("destination buffer too small ({needed} bytes needed, {remaining} remaining)")]
    BufferTooSmall { needed: usize, remaining: usize },

    /// A construction helper was handed an empty list.
    #[error("{0} requires at least one entry")]
    EmptyList(MessageType),

    /// The message decoded fine but is not the kind the caller asked for.
    #[error("unexpected message type (expected {expected}, got {actual})")]
    UnexpectedType {
        expected: MessageType,
        actual: MessageType,
    },
}

pub type Result<T> = std::result::Result<T, CodecError>;
