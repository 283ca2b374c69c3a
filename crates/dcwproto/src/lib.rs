//! Codec for the DCW station / access point bonding control protocol.
//!
//! Stations and access points use a handful of one-byte-tagged messages to
//! join, acknowledge and leave bonded data channels. This crate re-exports the
//! message codec; the `cli` feature adds the `dcwproto` command-line tool for
//! encoding, decoding and dumping messages by hand.
//!
//! # Crate Structure
//!
//! - [`msg`]: message catalog, wire decoder and encoder, diagnostic dump

/// Re-export message codec types.
pub mod msg {
    pub use dcwproto_msg::*;
}

pub use dcwproto_msg::{decode, encode, render, CodecError, Message, MessageType};
