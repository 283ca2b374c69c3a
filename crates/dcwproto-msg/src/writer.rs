use bytes::BufMut;

use crate::error::{CodecError, Result};
use crate::message::Message;
use crate::types::{MacAddr, Ssid, MACADDR_LEN, MAX_ENTRIES};

/// Bounds-checked cursor over a caller-owned destination buffer.
///
/// Each write checks the remaining capacity first and fails with
/// [`CodecError::BufferTooSmall`] instead of writing a partial field. Bytes
/// written before a failure are left in place and are not meaningful.
pub struct MessageWriter<'a> {
    dst: &'a mut [u8],
    written: usize,
}

impl<'a> MessageWriter<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, written: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Capacity left in the destination.
    pub fn remaining(&self) -> usize {
        self.dst.remaining_mut()
    }

    fn reserve(&self, needed: usize) -> Result<()> {
        if self.dst.remaining_mut() < needed {
            return Err(CodecError::BufferTooSmall {
                needed,
                remaining: self.dst.remaining_mut(),
            });
        }
        Ok(())
    }

    pub fn put_u8(&mut self, value: u8) -> Result<()> {
        self.reserve(1)?;
        self.dst.put_u8(value);
        self.written += 1;
        Ok(())
    }

    pub fn put_slice(&mut self, src: &[u8]) -> Result<()> {
        self.reserve(src.len())?;
        self.dst.put_slice(src);
        self.written += src.len();
        Ok(())
    }

    pub fn put_macaddr(&mut self, macaddr: &MacAddr) -> Result<()> {
        self.put_slice(macaddr.octets())
    }

    /// Write an SSID as a length prefix followed by its wire bytes (no padding).
    pub fn put_ssid(&mut self, ssid: &Ssid) -> Result<()> {
        let bytes = ssid.wire_bytes();
        self.put_u8(bytes.len() as u8)?;
        self.put_slice(bytes)
    }

    /// Encode one message, returning the total bytes written by this writer.
    pub fn write_message(&mut self, msg: &Message) -> Result<usize> {
        self.put_u8(msg.kind().tag())?;

        match msg {
            Message::StationJoin { data_macaddrs }
            | Message::StationUnjoin { data_macaddrs }
            | Message::StationNack { data_macaddrs }
            | Message::ApRejectStation { data_macaddrs } => {
                check_count(data_macaddrs.len())?;
                self.reserve(1 + data_macaddrs.len() * MACADDR_LEN)?;
                self.put_u8(data_macaddrs.len() as u8)?;
                for macaddr in data_macaddrs {
                    self.put_macaddr(macaddr)?;
                }
            }
            Message::StationAck {
                bonded_data_channels,
            } => {
                check_count(bonded_data_channels.len())?;
                self.put_u8(bonded_data_channels.len() as u8)?;
                for channel in bonded_data_channels {
                    self.put_macaddr(&channel.macaddr)?;
                    self.put_ssid(&channel.ssid)?;
                }
            }
            Message::ApAcceptStation { data_ssids } => {
                check_count(data_ssids.len())?;
                self.put_u8(data_ssids.len() as u8)?;
                for ssid in data_ssids {
                    self.put_ssid(ssid)?;
                }
            }
            Message::ApAckDisconnect | Message::ApQuit => {}
        }

        Ok(self.written)
    }
}

pub(crate) fn check_count(count: usize) -> Result<()> {
    if count > MAX_ENTRIES {
        return Err(CodecError::CountTooLarge {
            count,
            max: MAX_ENTRIES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u8_into_zero_capacity() {
        let mut dst = [0u8; 0];
        let mut writer = MessageWriter::new(&mut dst);
        assert_eq!(
            writer.put_u8(1),
            Err(CodecError::BufferTooSmall {
                needed: 1,
                remaining: 0
            })
        );
        assert_eq!(writer.written(), 0);
    }

    #[test]
    fn put_ssid_writes_prefix_and_logical_bytes_only() {
        let mut dst = [0xFFu8; 8];
        let mut writer = MessageWriter::new(&mut dst);
        writer.put_ssid(&Ssid::try_from("ab").unwrap()).unwrap();
        assert_eq!(writer.written(), 3);
        assert_eq!(writer.remaining(), 5);
        assert_eq!(&dst[..4], &[2, b'a', b'b', 0xFF]);
    }

    #[test]
    fn put_slice_does_not_write_partially() {
        let mut dst = [0u8; 4];
        let mut writer = MessageWriter::new(&mut dst);
        let err = writer.put_slice(&[1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, CodecError::BufferTooSmall { needed: 5, .. }));
        assert_eq!(writer.written(), 0);
        assert_eq!(dst, [0; 4]);
    }

    #[test]
    fn oversized_hand_built_list_rejected_after_tag() {
        let msg = Message::StationJoin {
            data_macaddrs: vec![MacAddr::default(); 33],
        };
        let mut dst = [0u8; 512];
        let mut writer = MessageWriter::new(&mut dst);
        assert_eq!(
            writer.write_message(&msg),
            Err(CodecError::CountTooLarge { count: 33, max: 32 })
        );
        assert_eq!(writer.written(), 1);
    }
}
