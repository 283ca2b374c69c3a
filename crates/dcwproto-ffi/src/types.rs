#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DcwResult {
    Ok = 0,
    InvalidArgument = 1,
    UnknownTag = 2,
    Truncated = 3,
    CountTooLarge = 4,
    FieldTooLarge = 5,
    BufferTooSmall = 6,
    EmptyList = 7,
    UnexpectedType = 8,
    Internal = 99,
}

#[allow(dead_code)]
pub const DCW_OK: DcwResult = DcwResult::Ok;
#[allow(dead_code)]
pub const DCW_ERR_INVALID_ARGUMENT: DcwResult = DcwResult::InvalidArgument;
#[allow(dead_code)]
pub const DCW_ERR_UNKNOWN_TAG: DcwResult = DcwResult::UnknownTag;
#[allow(dead_code)]
pub const DCW_ERR_TRUNCATED: DcwResult = DcwResult::Truncated;
#[allow(dead_code)]
pub const DCW_ERR_COUNT_TOO_LARGE: DcwResult = DcwResult::CountTooLarge;
#[allow(dead_code)]
pub const DCW_ERR_FIELD_TOO_LARGE: DcwResult = DcwResult::FieldTooLarge;
#[allow(dead_code)]
pub const DCW_ERR_BUFFER_TOO_SMALL: DcwResult = DcwResult::BufferTooSmall;
#[allow(dead_code)]
pub const DCW_ERR_EMPTY_LIST: DcwResult = DcwResult::EmptyList;
#[allow(dead_code)]
pub const DCW_ERR_UNEXPECTED_TYPE: DcwResult = DcwResult::UnexpectedType;
#[allow(dead_code)]
pub const DCW_ERR_INTERNAL: DcwResult = DcwResult::Internal;

pub const DCW_MSG_STA_JOIN: u8 = dcwproto_msg::kind::STA_JOIN;
pub const DCW_MSG_STA_UNJOIN: u8 = dcwproto_msg::kind::STA_UNJOIN;
pub const DCW_MSG_STA_ACK: u8 = dcwproto_msg::kind::STA_ACK;
pub const DCW_MSG_STA_NACK: u8 = dcwproto_msg::kind::STA_NACK;
pub const DCW_MSG_AP_ACCEPT_STA: u8 = dcwproto_msg::kind::AP_ACCEPT_STA;
pub const DCW_MSG_AP_REJECT_STA: u8 = dcwproto_msg::kind::AP_REJECT_STA;
pub const DCW_MSG_AP_ACK_DISCONNECT: u8 = dcwproto_msg::kind::AP_ACK_DISCONNECT;
pub const DCW_MSG_AP_QUIT: u8 = dcwproto_msg::kind::AP_QUIT;

/// Largest buffer any encode export can need.
pub const DCW_MAX_MESSAGE_SIZE: usize = dcwproto_msg::MAX_MESSAGE_SIZE;
