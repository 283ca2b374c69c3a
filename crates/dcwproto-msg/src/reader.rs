use bytes::Buf;

use crate::codec::CodecConfig;
use crate::error::{CodecError, Result};
use crate::kind::MessageType;
use crate::message::Message;
use crate::types::{BondedChannel, MacAddr, Ssid, MACADDR_LEN, MAX_ENTRIES, SSID_CAPACITY};

/// Bounds-checked cursor over a single, already-delimited message buffer.
///
/// Every read checks the remaining input before consuming it, so a malformed
/// length never causes a read past the end of the slice.
pub struct MessageReader<'a> {
    buf: &'a [u8],
}

impl<'a> MessageReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        if self.buf.remaining() < needed {
            return Err(CodecError::Truncated {
                needed,
                remaining: self.buf.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// Read the tag byte and map it to a known kind.
    pub fn read_kind(&mut self) -> Result<MessageType> {
        MessageType::try_from(self.read_u8()?)
    }

    /// Read a one-byte entry count, rejecting anything above [`MAX_ENTRIES`].
    pub fn read_count(&mut self) -> Result<usize> {
        let count = self.read_u8()? as usize;
        if count > MAX_ENTRIES {
            return Err(CodecError::CountTooLarge {
                count,
                max: MAX_ENTRIES,
            });
        }
        Ok(count)
    }

    pub fn read_macaddr(&mut self) -> Result<MacAddr> {
        self.ensure(MACADDR_LEN)?;
        let mut octets = [0u8; MACADDR_LEN];
        self.buf.copy_to_slice(&mut octets);
        Ok(MacAddr(octets))
    }

    /// Read a length-prefixed SSID into a zero-filled fixed field.
    pub fn read_ssid(&mut self) -> Result<Ssid> {
        let len = self.read_u8()? as usize;
        if len > SSID_CAPACITY {
            return Err(CodecError::FieldTooLarge {
                len,
                max: SSID_CAPACITY,
            });
        }
        self.ensure(len)?;
        let ssid = Ssid::new(&self.buf[..len])?;
        self.buf.advance(len);
        Ok(ssid)
    }

    /// Decode one message. Bytes left after the payload are not consumed.
    pub fn read_message(&mut self, config: &CodecConfig) -> Result<Message> {
        let kind = self.read_kind()?;
        let msg = match kind {
            MessageType::StationJoin => Message::StationJoin {
                data_macaddrs: self.read_macaddr_list(kind, config)?,
            },
            MessageType::StationUnjoin => Message::StationUnjoin {
                data_macaddrs: self.read_macaddr_list(kind, config)?,
            },
            MessageType::StationNack => Message::StationNack {
                data_macaddrs: self.read_macaddr_list(kind, config)?,
            },
            MessageType::ApRejectStation => Message::ApRejectStation {
                data_macaddrs: self.read_macaddr_list(kind, config)?,
            },
            MessageType::StationAck => {
                let count = self.read_list_count(kind, config)?;
                let mut bonded_data_channels = Vec::with_capacity(count);
                for _ in 0..count {
                    let macaddr = self.read_macaddr()?;
                    let ssid = self.read_ssid()?;
                    bonded_data_channels.push(BondedChannel { macaddr, ssid });
                }
                Message::StationAck {
                    bonded_data_channels,
                }
            }
            MessageType::ApAcceptStation => {
                let count = self.read_list_count(kind, config)?;
                let mut data_ssids = Vec::with_capacity(count);
                for _ in 0..count {
                    data_ssids.push(self.read_ssid()?);
                }
                Message::ApAcceptStation { data_ssids }
            }
            // ID-only messages; anything after the tag belongs to the caller.
            MessageType::ApAckDisconnect => Message::ApAckDisconnect,
            MessageType::ApQuit => Message::ApQuit,
        };
        Ok(msg)
    }

    fn read_list_count(&mut self, kind: MessageType, config: &CodecConfig) -> Result<usize> {
        let count = self.read_count()?;
        if count == 0 && config.reject_empty_lists {
            return Err(CodecError::EmptyList(kind));
        }
        Ok(count)
    }

    fn read_macaddr_list(
        &mut self,
        kind: MessageType,
        config: &CodecConfig,
    ) -> Result<Vec<MacAddr>> {
        let count = self.read_list_count(kind, config)?;
        self.ensure(count * MACADDR_LEN)?;
        (0..count).map(|_| self.read_macaddr()).collect()
    }
}
