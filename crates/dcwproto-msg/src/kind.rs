//! Message type tags.
//!
//! The tag is the first byte of every message. Values are fixed by the
//! protocol and are not sequential.

use std::fmt;

use crate::error::CodecError;

/// Station asks to join bonded data channels.
pub const STA_JOIN: u8 = 0x01;

/// Station asks to leave bonded data channels.
pub const STA_UNJOIN: u8 = 0x02;

/// Station acknowledges the channels it bonded.
pub const STA_ACK: u8 = 0x11;

/// Station refuses a set of data channels.
pub const STA_NACK: u8 = 0x12;

/// Access point accepts a station and lists usable SSIDs.
pub const AP_ACCEPT_STA: u8 = 0x21;

/// Access point rejects a set of station data channels.
pub const AP_REJECT_STA: u8 = 0x22;

/// Access point acknowledges a station disconnect.
pub const AP_ACK_DISCONNECT: u8 = 0x41;

/// Access point is shutting down.
pub const AP_QUIT: u8 = 0x99;

/// The eight message kinds carried on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    StationJoin = STA_JOIN,
    StationUnjoin = STA_UNJOIN,
    StationAck = STA_ACK,
    StationNack = STA_NACK,
    ApAcceptStation = AP_ACCEPT_STA,
    ApRejectStation = AP_REJECT_STA,
    ApAckDisconnect = AP_ACK_DISCONNECT,
    ApQuit = AP_QUIT,
}

impl MessageType {
    /// Every known kind, in tag order.
    pub const ALL: [MessageType; 8] = [
        MessageType::StationJoin,
        MessageType::StationUnjoin,
        MessageType::StationAck,
        MessageType::StationNack,
        MessageType::ApAcceptStation,
        MessageType::ApRejectStation,
        MessageType::ApAckDisconnect,
        MessageType::ApQuit,
    ];

    /// The wire tag byte.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            MessageType::StationJoin => "Station Join",
            MessageType::StationUnjoin => "Station Unjoin",
            MessageType::StationAck => "Station Acknowledgement",
            MessageType::StationNack => "Station Negative Acknowledgement",
            MessageType::ApAcceptStation => "AP Accept Station",
            MessageType::ApRejectStation => "AP Reject Station",
            MessageType::ApAckDisconnect => "AP ACK Station Disconnect",
            MessageType::ApQuit => "AP Quit",
        }
    }

    /// Returns true for kinds whose payload is empty.
    pub fn is_tag_only(self) -> bool {
        matches!(self, MessageType::ApAckDisconnect | MessageType::ApQuit)
    }
}

impl TryFrom<u8> for MessageType {
    type Error = CodecError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            STA_JOIN => Ok(MessageType::StationJoin),
            STA_UNJOIN => Ok(MessageType::StationUnjoin),
            STA_ACK => Ok(MessageType::StationAck),
            STA_NACK => Ok(MessageType::StationNack),
            AP_ACCEPT_STA => Ok(MessageType::ApAcceptStation),
            AP_REJECT_STA => Ok(MessageType::ApRejectStation),
            AP_ACK_DISCONNECT => Ok(MessageType::ApAckDisconnect),
            AP_QUIT => Ok(MessageType::ApQuit),
            other => Err(CodecError::UnknownTag(other)),
        }
    }
}

impl From<MessageType> for u8 {
    fn from(kind: MessageType) -> Self {
        kind.tag()
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip_through_try_from() {
        for kind in MessageType::ALL {
            assert_eq!(MessageType::try_from(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        let known: Vec<u8> = MessageType::ALL.iter().map(|k| k.tag()).collect();
        for tag in 0..=u8::MAX {
            if known.contains(&tag) {
                continue;
            }
            assert_eq!(
                MessageType::try_from(tag),
                Err(CodecError::UnknownTag(tag))
            );
        }
    }

    #[test]
    fn only_disconnect_and_quit_are_tag_only() {
        let tag_only: Vec<MessageType> = MessageType::ALL
            .into_iter()
            .filter(|k| k.is_tag_only())
            .collect();
        assert_eq!(
            tag_only,
            vec![MessageType::ApAckDisconnect, MessageType::ApQuit]
        );
    }
}
