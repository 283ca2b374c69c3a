use crate::error::{CodecError, Result};
use crate::kind::MessageType;
use crate::types::{BondedChannel, MacAddr, Ssid, MAX_ENTRIES};

/// A single DCW control message.
///
/// List fields are plain vectors; their length is validated against
/// [`MAX_ENTRIES`] whenever a message crosses the wire boundary, so a
/// hand-built value with too many entries is rejected by the encoder rather
/// than truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    StationJoin { data_macaddrs: Vec<MacAddr> },
    StationUnjoin { data_macaddrs: Vec<MacAddr> },
    StationAck { bonded_data_channels: Vec<BondedChannel> },
    StationNack { data_macaddrs: Vec<MacAddr> },
    ApAcceptStation { data_ssids: Vec<Ssid> },
    ApRejectStation { data_macaddrs: Vec<MacAddr> },
    ApAckDisconnect,
    ApQuit,
}

impl Message {
    /// Build a station join request.
    pub fn station_join(macaddrs: &[MacAddr]) -> Result<Self> {
        let data_macaddrs = checked_list(MessageType::StationJoin, macaddrs)?;
        Ok(Message::StationJoin { data_macaddrs })
    }

    /// Build a station unjoin request.
    pub fn station_unjoin(macaddrs: &[MacAddr]) -> Result<Self> {
        let data_macaddrs = checked_list(MessageType::StationUnjoin, macaddrs)?;
        Ok(Message::StationUnjoin { data_macaddrs })
    }

    /// Build a station acknowledgement listing the bonded channels.
    pub fn station_ack(channels: &[BondedChannel]) -> Result<Self> {
        let bonded_data_channels = checked_list(MessageType::StationAck, channels)?;
        Ok(Message::StationAck {
            bonded_data_channels,
        })
    }

    /// Build a station negative acknowledgement.
    pub fn station_nack(macaddrs: &[MacAddr]) -> Result<Self> {
        let data_macaddrs = checked_list(MessageType::StationNack, macaddrs)?;
        Ok(Message::StationNack { data_macaddrs })
    }

    /// Build an access point accept listing the data channel SSIDs.
    pub fn ap_accept_station(ssids: &[Ssid]) -> Result<Self> {
        let data_ssids = checked_list(MessageType::ApAcceptStation, ssids)?;
        Ok(Message::ApAcceptStation { data_ssids })
    }

    /// Build an access point reject for the given data channel addresses.
    pub fn ap_reject_station(macaddrs: &[MacAddr]) -> Result<Self> {
        let data_macaddrs = checked_list(MessageType::ApRejectStation, macaddrs)?;
        Ok(Message::ApRejectStation { data_macaddrs })
    }

    pub fn kind(&self) -> MessageType {
        match self {
            Message::StationJoin { .. } => MessageType::StationJoin,
            Message::StationUnjoin { .. } => MessageType::StationUnjoin,
            Message::StationAck { .. } => MessageType::StationAck,
            Message::StationNack { .. } => MessageType::StationNack,
            Message::ApAcceptStation { .. } => MessageType::ApAcceptStation,
            Message::ApRejectStation { .. } => MessageType::ApRejectStation,
            Message::ApAckDisconnect => MessageType::ApAckDisconnect,
            Message::ApQuit => MessageType::ApQuit,
        }
    }

    /// Number of list entries, or `None` for tag-only kinds.
    pub fn entry_count(&self) -> Option<usize> {
        match self {
            Message::StationJoin { data_macaddrs }
            | Message::StationUnjoin { data_macaddrs }
            | Message::StationNack { data_macaddrs }
            | Message::ApRejectStation { data_macaddrs } => Some(data_macaddrs.len()),
            Message::StationAck {
                bonded_data_channels,
            } => Some(bonded_data_channels.len()),
            Message::ApAcceptStation { data_ssids } => Some(data_ssids.len()),
            Message::ApAckDisconnect | Message::ApQuit => None,
        }
    }

    /// The hardware address list of the address-list kinds.
    pub fn macaddrs(&self) -> Option<&[MacAddr]> {
        match self {
            Message::StationJoin { data_macaddrs }
            | Message::StationUnjoin { data_macaddrs }
            | Message::StationNack { data_macaddrs }
            | Message::ApRejectStation { data_macaddrs } => Some(data_macaddrs),
            _ => None,
        }
    }

    /// Consume an AP accept and return its SSIDs.
    pub fn into_accepted_ssids(self) -> Result<Vec<Ssid>> {
        match self {
            Message::ApAcceptStation { data_ssids } => Ok(data_ssids),
            other => Err(CodecError::UnexpectedType {
                expected: MessageType::ApAcceptStation,
                actual: other.kind(),
            }),
        }
    }

    /// Consume an AP reject and return the rejected data channel addresses.
    pub fn into_rejected_macaddrs(self) -> Result<Vec<MacAddr>> {
        match self {
            Message::ApRejectStation { data_macaddrs } => Ok(data_macaddrs),
            other => Err(CodecError::UnexpectedType {
                expected: MessageType::ApRejectStation,
                actual: other.kind(),
            }),
        }
    }
}

fn checked_list<T: Clone>(kind: MessageType, entries: &[T]) -> Result<Vec<T>> {
    if entries.is_empty() {
        return Err(CodecError::EmptyList(kind));
    }
    if entries.len() > MAX_ENTRIES {
        return Err(CodecError::CountTooLarge {
            count: entries.len(),
            max: MAX_ENTRIES,
        });
    }
    Ok(entries.to_vec())
}
