use std::fmt;
use std::io;

use dcwproto_msg::CodecError;

// Exit codes follow sysexits where one fits.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const NO_INPUT: i32 = 66;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => NO_INPUT,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

/// Map a codec failure on input the user supplied.
pub fn decode_error(context: &str, err: CodecError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

/// Map a codec failure while building or encoding a message from arguments.
pub fn encode_error(context: &str, err: CodecError) -> CliError {
    let code = match err {
        CodecError::EmptyList(_)
        | CodecError::CountTooLarge { .. }
        | CodecError::FieldTooLarge { .. } => USAGE,
        CodecError::BufferTooSmall { .. } => INTERNAL,
        _ => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcwproto_msg::MessageType;

    #[test]
    fn encode_argument_errors_are_usage() {
        let err = encode_error("encode", CodecError::EmptyList(MessageType::StationJoin));
        assert_eq!(err.code, USAGE);
        assert!(err.message.starts_with("encode: "));
    }

    #[test]
    fn decode_errors_are_data_invalid() {
        let err = decode_error("decode", CodecError::UnknownTag(0x7F));
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(err.to_string(), "decode: unknown message tag 0x7F");
    }

    #[test]
    fn missing_file_is_no_input() {
        let err = io_error("read", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.code, NO_INPUT);
    }
}
