//! Build a station acknowledgement, put it on the wire and read it back.
//!
//! Run with:
//!   cargo run --example roundtrip

use dcwproto::msg::{encode_to_vec, BondedChannel, MacAddr, Ssid};
use dcwproto::{decode, render, Message};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let channels = [
        BondedChannel::new("02:00:00:00:00:01".parse::<MacAddr>()?, Ssid::try_from("dcw-5g")?),
        BondedChannel::new("02:00:00:00:00:02".parse::<MacAddr>()?, Ssid::try_from("dcw-2g")?),
    ];
    let ack = Message::station_ack(&channels)?;

    let wire = encode_to_vec(&ack)?;
    eprintln!("{} bytes on the wire", wire.len());

    let decoded = decode(&wire)?;
    assert_eq!(decoded, ack);
    print!("{}", render(&decoded));

    Ok(())
}
