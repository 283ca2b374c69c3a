use dcwproto_msg::{encode_to_vec, BondedChannel, MacAddr, Message, MessageType, Ssid};

use crate::cmd::EncodeArgs;
use crate::exit::{encode_error, CliError, CliResult, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let msg = build_message(&args)?;
    let wire = encode_to_vec(&msg).map_err(|e| encode_error("encode", e))?;
    tracing::debug!(kind = %msg.kind(), len = wire.len(), "encoded message");

    print_encoded(msg.kind(), &wire, format);
    Ok(SUCCESS)
}

fn build_message(args: &EncodeArgs) -> CliResult<Message> {
    let kind = MessageType::from(args.kind);
    let wants_macs = matches!(
        kind,
        MessageType::StationJoin
            | MessageType::StationUnjoin
            | MessageType::StationNack
            | MessageType::ApRejectStation
    );

    if !wants_macs && !args.macaddrs.is_empty() {
        return Err(CliError::usage(format!("--mac is not valid for {kind}")));
    }
    if kind != MessageType::ApAcceptStation && !args.ssids.is_empty() {
        return Err(CliError::usage(format!("--ssid is not valid for {kind}")));
    }
    if kind != MessageType::StationAck && !args.channels.is_empty() {
        return Err(CliError::usage(format!("--channel is not valid for {kind}")));
    }

    let built = match kind {
        MessageType::StationJoin => Message::station_join(&parse_macaddrs(&args.macaddrs)?),
        MessageType::StationUnjoin => Message::station_unjoin(&parse_macaddrs(&args.macaddrs)?),
        MessageType::StationNack => Message::station_nack(&parse_macaddrs(&args.macaddrs)?),
        MessageType::ApRejectStation => {
            Message::ap_reject_station(&parse_macaddrs(&args.macaddrs)?)
        }
        MessageType::StationAck => Message::station_ack(&parse_channels(&args.channels)?),
        MessageType::ApAcceptStation => Message::ap_accept_station(&parse_ssids(&args.ssids)?),
        MessageType::ApAckDisconnect => Ok(Message::ApAckDisconnect),
        MessageType::ApQuit => Ok(Message::ApQuit),
    };
    built.map_err(|e| encode_error("build message", e))
}

fn parse_macaddr(text: &str) -> CliResult<MacAddr> {
    text.trim()
        .parse::<MacAddr>()
        .map_err(|e| CliError::usage(e.to_string()))
}

fn parse_macaddrs(values: &[String]) -> CliResult<Vec<MacAddr>> {
    values.iter().map(|v| parse_macaddr(v)).collect()
}

fn parse_ssid(text: &str) -> CliResult<Ssid> {
    Ssid::try_from(text).map_err(|e| encode_error(&format!("ssid {text:?}"), e))
}

fn parse_ssids(values: &[String]) -> CliResult<Vec<Ssid>> {
    values.iter().map(|v| parse_ssid(v)).collect()
}

fn parse_channels(values: &[String]) -> CliResult<Vec<BondedChannel>> {
    values
        .iter()
        .map(|value| {
            let (addr, ssid) = value
                .split_once('=')
                .ok_or_else(|| CliError::usage(format!("expected ADDR=SSID, got {value:?}")))?;
            Ok(BondedChannel::new(parse_macaddr(addr)?, parse_ssid(ssid)?))
        })
        .collect()
}
