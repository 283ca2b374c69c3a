//! Wire codec for the DCW (dual channel Wi-Fi) control protocol.
//!
//! Stations and access points exchange small control messages to join and
//! leave bonded data channels. Every message is a one-byte tag followed by a
//! payload built only from single-byte counts and lengths:
//! - hardware address lists (up to 32 addresses of 6 bytes)
//! - SSID lists (up to 32 length-prefixed SSIDs of at most 32 bytes)
//! - bonded channel lists (address + SSID pairs)
//!
//! The codec works on one already-delimited buffer per call. Capacities are
//! checked before every read and write; no partial result is ever returned.

pub mod codec;
pub mod dump;
pub mod error;
pub mod kind;
pub mod message;
pub mod reader;
pub mod types;
pub mod writer;

pub use codec::{
    decode, decode_expecting, decode_with_config, encode, encode_to, encode_to_vec, encoded_len,
    read_message_type, CodecConfig, MAX_MESSAGE_SIZE,
};
pub use dump::render;
pub use error::{CodecError, Result};
pub use kind::MessageType;
pub use message::Message;
pub use reader::MessageReader;
pub use types::{
    BondedChannel, MacAddr, ParseMacAddrError, Ssid, MACADDR_LEN, MAX_ENTRIES, SSID_CAPACITY,
};
pub use writer::MessageWriter;
