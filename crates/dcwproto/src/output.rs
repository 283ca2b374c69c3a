use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use dcwproto_msg::{render, Message, MessageType};
use serde::Serialize;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ChannelOutput {
    macaddr: String,
    ssid: String,
}

#[derive(Serialize)]
struct MessageOutput {
    kind: &'static str,
    tag: String,
    length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry_count: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    macaddrs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ssids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bonded_channels: Vec<ChannelOutput>,
}

impl MessageOutput {
    fn new(msg: &Message, length: usize) -> Self {
        let kind = msg.kind();
        let mut out = Self {
            kind: kind.name(),
            tag: tag_hex(kind),
            length,
            entry_count: msg.entry_count(),
            macaddrs: Vec::new(),
            ssids: Vec::new(),
            bonded_channels: Vec::new(),
        };
        match msg {
            Message::StationAck {
                bonded_data_channels,
            } => {
                out.bonded_channels = bonded_data_channels
                    .iter()
                    .map(|c| ChannelOutput {
                        macaddr: c.macaddr.to_string(),
                        ssid: c.ssid.to_string(),
                    })
                    .collect();
            }
            Message::ApAcceptStation { data_ssids } => {
                out.ssids = data_ssids.iter().map(ToString::to_string).collect();
            }
            other => {
                if let Some(macaddrs) = other.macaddrs() {
                    out.macaddrs = macaddrs.iter().map(ToString::to_string).collect();
                }
            }
        }
        out
    }
}

#[derive(Serialize)]
struct EncodedOutput<'a> {
    kind: &'static str,
    tag: String,
    length: usize,
    hex: &'a str,
}

/// Print a decoded message. `wire` is the exact input that produced it.
pub fn print_message(msg: &Message, wire: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = MessageOutput::new(msg, wire.len());
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            println!("{}", message_table(msg));
        }
        OutputFormat::Pretty => {
            print!("{}", render(msg));
        }
        OutputFormat::Raw => {
            print_raw(wire);
        }
    }
}

/// Print the wire encoding of a message built from arguments.
pub fn print_encoded(kind: MessageType, wire: &[u8], format: OutputFormat) {
    let hex = hex::encode_upper(wire);
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                kind: kind.name(),
                tag: tag_hex(kind),
                length: wire.len(),
                hex: &hex,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TYPE", "TAG", "LENGTH", "BYTES"])
                .add_row(vec![
                    kind.name().to_string(),
                    tag_hex(kind),
                    wire.len().to_string(),
                    spaced_hex(wire),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{}", spaced_hex(wire));
        }
        OutputFormat::Raw => {
            print_raw(wire);
        }
    }
}

fn message_table(msg: &Message) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["TYPE", "#", "MAC ADDRESS", "SSID"]);

    let name = msg.kind().name().to_string();
    let rows: Vec<(String, String)> = match msg {
        Message::StationAck {
            bonded_data_channels,
        } => bonded_data_channels
            .iter()
            .map(|c| (c.macaddr.to_string(), c.ssid.to_string()))
            .collect(),
        Message::ApAcceptStation { data_ssids } => data_ssids
            .iter()
            .map(|s| ("-".to_string(), s.to_string()))
            .collect(),
        other => other
            .macaddrs()
            .unwrap_or_default()
            .iter()
            .map(|m| (m.to_string(), "-".to_string()))
            .collect(),
    };

    if rows.is_empty() {
        table.add_row(vec![name, "-".to_string(), "-".to_string(), "-".to_string()]);
        return table;
    }
    for (index, (macaddr, ssid)) in rows.into_iter().enumerate() {
        table.add_row(vec![name.clone(), index.to_string(), macaddr, ssid]);
    }
    table
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn tag_hex(kind: MessageType) -> String {
    format!("0x{:02X}", kind.tag())
}

/// Upper-case hex octets separated by single spaces.
pub fn spaced_hex(bytes: &[u8]) -> String {
    bytes
        .chunks(1)
        .map(hex::encode_upper)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex text, ignoring whitespace and ':' / '-' separators.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    let compact = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(compact)
}
