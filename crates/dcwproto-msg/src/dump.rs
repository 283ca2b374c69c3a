//! Human-readable rendering of decoded messages for logs and diagnostics.

use std::fmt::{self, Write};

use crate::message::Message;
use crate::types::{MacAddr, MAX_ENTRIES};

/// Render a message as a multi-line diagnostic dump.
///
/// List counts are re-checked against [`MAX_ENTRIES`]; an oversized list
/// (only possible for a hand-built value) stops the dump with a marker line.
pub fn render(msg: &Message) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dump(&mut out, msg);
    out
}

fn write_dump(out: &mut impl Write, msg: &Message) -> fmt::Result {
    writeln!(out, "DCW Message Dump:")?;
    writeln!(out, "  Type: {}", msg.kind().name())?;

    match msg {
        Message::StationJoin { data_macaddrs }
        | Message::StationUnjoin { data_macaddrs }
        | Message::StationNack { data_macaddrs } => {
            write_macaddrs(out, "Data Channel MAC Address", data_macaddrs)
        }
        Message::ApRejectStation { data_macaddrs } => {
            write_macaddrs(out, "Data Channel MAC Addresses", data_macaddrs)
        }
        Message::StationAck {
            bonded_data_channels,
        } => {
            if !write_count(out, "Bonded Data Channel", bonded_data_channels.len())? {
                return Ok(());
            }
            writeln!(out, "  Bonded Data Channels:")?;
            for channel in bonded_data_channels {
                writeln!(out, "    . {} -> '{}'", channel.macaddr, channel.ssid)?;
            }
            Ok(())
        }
        Message::ApAcceptStation { data_ssids } => {
            if !write_count(out, "Data Channel SSID", data_ssids.len())? {
                return Ok(());
            }
            writeln!(out, "  Data Channel SSIDs:")?;
            for ssid in data_ssids {
                writeln!(out, "    . {ssid}")?;
            }
            Ok(())
        }
        Message::ApAckDisconnect | Message::ApQuit => Ok(()),
    }
}

fn write_macaddrs(out: &mut impl Write, heading: &str, macaddrs: &[MacAddr]) -> fmt::Result {
    if !write_count(out, "Data Channel MAC Address", macaddrs.len())? {
        return Ok(());
    }
    writeln!(out, "  {heading}:")?;
    for macaddr in macaddrs {
        writeln!(out, "    . {macaddr}")?;
    }
    Ok(())
}

/// Writes the count line; returns false when the count is over capacity.
fn write_count(out: &mut impl Write, label: &str, count: usize) -> Result<bool, fmt::Error> {
    writeln!(out, "  {label} Count: {count}")?;
    if count > MAX_ENTRIES {
        writeln!(out, "  (Count too high)")?;
        return Ok(false);
    }
    Ok(true)
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dump(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BondedChannel, Ssid};

    #[test]
    fn renders_station_join() {
        let msg = Message::station_join(&["AA:BB:CC:DD:EE:FF".parse().unwrap()]).unwrap();
        assert_eq!(
            render(&msg),
            "DCW Message Dump:\n  Type: Station Join\n  Data Channel MAC Address Count: 1\n  \
             Data Channel MAC Address:\n    . AA-BB-CC-DD-EE-FF\n"
        );
    }

    #[test]
    fn renders_station_ack_with_quoted_ssid() {
        let msg = Message::station_ack(&[BondedChannel::new(
            MacAddr::new([0, 0, 0, 0, 0, 1]),
            Ssid::try_from("net").unwrap(),
        )])
        .unwrap();
        let text = render(&msg);
        assert!(text.contains("  Type: Station Acknowledgement\n"));
        assert!(text.contains("  Bonded Data Channel Count: 1\n"));
        assert!(text.contains("    . 00-00-00-00-00-01 -> 'net'\n"));
    }

    #[test]
    fn renders_accept_ssids() {
        let msg = Message::ap_accept_station(&[
            Ssid::try_from("one").unwrap(),
            Ssid::try_from("two").unwrap(),
        ])
        .unwrap();
        let text = render(&msg);
        assert!(text.contains("  Data Channel SSID Count: 2\n"));
        assert!(text.ends_with("    . one\n    . two\n"));
    }

    #[test]
    fn tag_only_kinds_render_type_line_only() {
        assert_eq!(
            render(&Message::ApQuit),
            "DCW Message Dump:\n  Type: AP Quit\n"
        );
        assert_eq!(
            Message::ApAckDisconnect.to_string(),
            "DCW Message Dump:\n  Type: AP ACK Station Disconnect\n"
        );
    }

    #[test]
    fn oversized_hand_built_list_aborts_dump() {
        let msg = Message::ApRejectStation {
            data_macaddrs: vec![MacAddr::default(); 40],
        };
        let text = render(&msg);
        assert!(text.ends_with("  Data Channel MAC Address Count: 40\n  (Count too high)\n"));
        assert!(!text.contains("    . "));
    }
}
