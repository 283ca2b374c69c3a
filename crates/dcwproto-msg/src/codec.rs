use bytes::BytesMut;
use tracing::{debug, trace};

use crate::error::{CodecError, Result};
use crate::kind::MessageType;
use crate::message::Message;
use crate::reader::MessageReader;
use crate::types::{MACADDR_LEN, MAX_ENTRIES, SSID_CAPACITY};
use crate::writer::{check_count, MessageWriter};

/// Largest possible encoded message: a full station acknowledgement.
pub const MAX_MESSAGE_SIZE: usize = 2 + MAX_ENTRIES * (MACADDR_LEN + 1 + SSID_CAPACITY);

/// Decoder behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Reject list messages whose entry count is zero. Off by default: an
    /// empty list is structurally valid on the wire.
    pub reject_empty_lists: bool,
}

impl CodecConfig {
    /// Configuration that rejects empty lists on decode.
    pub fn strict() -> Self {
        Self {
            reject_empty_lists: true,
        }
    }
}

/// Decode one message from an already-delimited buffer.
///
/// Wire format (all integers are single bytes):
/// ```text
/// message  := tag payload
/// 0x01 0x02 0x12 0x22 : count (addr[6]){count}
/// 0x11                : count (addr[6] len ssid[len]){count}
/// 0x21                : count (len ssid[len]){count}
/// 0x41 0x99           : (empty)
/// ```
/// `count` and `len` are at most 32. Bytes after the payload are ignored.
pub fn decode(buf: &[u8]) -> Result<Message> {
    decode_with_config(buf, &CodecConfig::default())
}

/// Decode with explicit configuration.
pub fn decode_with_config(buf: &[u8], config: &CodecConfig) -> Result<Message> {
    let mut reader = MessageReader::new(buf);
    match reader.read_message(config) {
        Ok(msg) => {
            trace!(
                kind = %msg.kind(),
                consumed = buf.len() - reader.remaining(),
                trailing = reader.remaining(),
                "decoded message"
            );
            Ok(msg)
        }
        Err(err) => {
            debug!(error = %err, len = buf.len(), "rejected message");
            Err(err)
        }
    }
}

/// Decode and require a specific message kind.
pub fn decode_expecting(buf: &[u8], expected: MessageType) -> Result<Message> {
    let msg = decode(buf)?;
    if msg.kind() != expected {
        return Err(CodecError::UnexpectedType {
            expected,
            actual: msg.kind(),
        });
    }
    Ok(msg)
}

/// Fully decode a buffer and report only its kind.
pub fn read_message_type(buf: &[u8]) -> Result<MessageType> {
    decode(buf).map(|msg| msg.kind())
}

/// Encode `msg` into `dst`, returning the number of bytes written.
///
/// On error the contents of `dst` are unspecified and must not be used.
pub fn encode(msg: &Message, dst: &mut [u8]) -> Result<usize> {
    let capacity = dst.len();
    match MessageWriter::new(dst).write_message(msg) {
        Ok(written) => {
            trace!(kind = %msg.kind(), written, "encoded message");
            Ok(written)
        }
        Err(err) => {
            debug!(kind = %msg.kind(), error = %err, capacity, "failed to encode message");
            Err(err)
        }
    }
}

/// Exact number of bytes [`encode`] needs for `msg`.
pub fn encoded_len(msg: &Message) -> Result<usize> {
    let payload = match msg {
        Message::StationJoin { data_macaddrs }
        | Message::StationUnjoin { data_macaddrs }
        | Message::StationNack { data_macaddrs }
        | Message::ApRejectStation { data_macaddrs } => {
            check_count(data_macaddrs.len())?;
            1 + data_macaddrs.len() * MACADDR_LEN
        }
        Message::StationAck {
            bonded_data_channels,
        } => {
            check_count(bonded_data_channels.len())?;
            1 + bonded_data_channels
                .iter()
                .map(|c| MACADDR_LEN + 1 + c.ssid.wire_bytes().len())
                .sum::<usize>()
        }
        Message::ApAcceptStation { data_ssids } => {
            check_count(data_ssids.len())?;
            1 + data_ssids
                .iter()
                .map(|s| 1 + s.wire_bytes().len())
                .sum::<usize>()
        }
        Message::ApAckDisconnect | Message::ApQuit => 0,
    };
    Ok(1 + payload)
}

/// Append the encoding of `msg` to a growable buffer.
///
/// `dst` is left unchanged on error.
pub fn encode_to(msg: &Message, dst: &mut BytesMut) -> Result<usize> {
    let len = encoded_len(msg)?;
    let start = dst.len();
    dst.resize(start + len, 0);
    match encode(msg, &mut dst[start..]) {
        Ok(written) => Ok(written),
        Err(err) => {
            dst.truncate(start);
            Err(err)
        }
    }
}

/// Encode into a freshly allocated vector.
pub fn encode_to_vec(msg: &Message) -> Result<Vec<u8>> {
    let mut buf = BytesMut::new();
    encode_to(msg, &mut buf)?;
    Ok(buf.to_vec())
}
