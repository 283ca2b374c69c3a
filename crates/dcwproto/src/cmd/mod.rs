use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use dcwproto_msg::MessageType;

use crate::exit::{io_error, CliError, CliResult, DATA_INVALID};
use crate::output::{parse_hex, OutputFormat};

pub mod decode;
pub mod dump;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a message from arguments and print its wire bytes.
    Encode(EncodeArgs),
    /// Decode wire bytes and print the message fields.
    Decode(DecodeArgs),
    /// Decode wire bytes and print the diagnostic dump.
    ///
    /// Always prints the dump text; `--format` does not apply.
    Dump(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Dump(args) => dump::run(args),
        Command::Version(args) => version::run(args),
    }
}

/// Message kinds as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    StaJoin,
    StaUnjoin,
    StaAck,
    StaNack,
    ApAcceptSta,
    ApRejectSta,
    ApAckDisconnect,
    ApQuit,
}

impl From<KindArg> for MessageType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::StaJoin => MessageType::StationJoin,
            KindArg::StaUnjoin => MessageType::StationUnjoin,
            KindArg::StaAck => MessageType::StationAck,
            KindArg::StaNack => MessageType::StationNack,
            KindArg::ApAcceptSta => MessageType::ApAcceptStation,
            KindArg::ApRejectSta => MessageType::ApRejectStation,
            KindArg::ApAckDisconnect => MessageType::ApAckDisconnect,
            KindArg::ApQuit => MessageType::ApQuit,
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Message kind to build.
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Data channel hardware address (repeatable).
    #[arg(long = "mac", value_name = "ADDR")]
    pub macaddrs: Vec<String>,
    /// Data channel SSID (repeatable).
    #[arg(long = "ssid", value_name = "SSID")]
    pub ssids: Vec<String>,
    /// Bonded data channel as ADDR=SSID (repeatable).
    #[arg(long = "channel", value_name = "ADDR=SSID")]
    pub channels: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Message bytes as hex. Read from stdin when neither this nor --file is given.
    #[arg(conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read raw message bytes from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Reject address and SSID lists with a zero count.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Resolve the input bytes for `decode` and `dump`.
pub(crate) fn read_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(path) = &args.file {
        return std::fs::read(path).map_err(|e| io_error(&format!("read {}", path.display()), e));
    }

    let text = match &args.hex {
        Some(text) => text.clone(),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| io_error("read stdin", e))?;
            text
        }
    };
    parse_hex(&text).map_err(|e| CliError::new(DATA_INVALID, format!("invalid hex input: {e}")))
}
