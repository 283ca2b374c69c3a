//! Fixed-capacity field types shared by the encoder and decoder.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Result};

/// Maximum number of entries in any list payload.
pub const MAX_ENTRIES: usize = 32;

/// Size of a hardware address on the wire.
pub const MACADDR_LEN: usize = 6;

/// Capacity of an SSID field.
pub const SSID_CAPACITY: usize = 32;

/// A 6-byte hardware address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct MacAddr(pub [u8; MACADDR_LEN]);

impl MacAddr {
    pub const fn new(octets: [u8; MACADDR_LEN]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> &[u8; MACADDR_LEN] {
        &self.0
    }
}

impl From<[u8; MACADDR_LEN]> for MacAddr {
    fn from(octets: [u8; MACADDR_LEN]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}-{b:02X}-{c:02X}-{d:02X}-{e:02X}-{g:02X}")
    }
}

impl fmt::Debug for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddr({self})")
    }
}

/// Error returned when parsing a textual hardware address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hardware address {0:?} (expected six hex octets separated by ':' or '-')")]
pub struct ParseMacAddrError(pub String);

impl FromStr for MacAddr {
    type Err = ParseMacAddrError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ParseMacAddrError(s.to_string());
        let mut octets = [0u8; MACADDR_LEN];
        let mut parts = s.split([':', '-']);
        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self(octets))
    }
}

/// An SSID held in a fixed 32-byte field with an explicit logical length.
///
/// The wire format does not guarantee a terminator: an SSID that uses all 32
/// bytes has none. Bytes past the logical length are always zero, so readers
/// must bound by [`Ssid::len`] rather than scan for a zero byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ssid {
    bytes: [u8; SSID_CAPACITY],
    len: u8,
}

impl Ssid {
    /// Build an SSID from its raw bytes.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > SSID_CAPACITY {
            return Err(CodecError::FieldTooLarge {
                len: bytes.len(),
                max: SSID_CAPACITY,
            });
        }
        let mut field = [0u8; SSID_CAPACITY];
        field[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: field,
            len: bytes.len() as u8,
        })
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The logical bytes, exactly as decoded or constructed.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The bytes the encoder emits: the logical bytes up to the first zero.
    pub fn wire_bytes(&self) -> &[u8] {
        let bytes = self.as_bytes();
        &bytes[..terminated_len(bytes)]
    }

    /// The full zero-padded field.
    pub fn as_fixed(&self) -> &[u8; SSID_CAPACITY] {
        &self.bytes
    }
}

fn terminated_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

impl TryFrom<&[u8]> for Ssid {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

impl TryFrom<&str> for Ssid {
    type Error = CodecError;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text.as_bytes())
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.wire_bytes()))
    }
}

impl fmt::Debug for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ssid({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

/// One bonded data channel: the data interface address and the SSID it joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BondedChannel {
    pub macaddr: MacAddr,
    pub ssid: Ssid,
}

impl BondedChannel {
    pub fn new(macaddr: MacAddr, ssid: Ssid) -> Self {
        Self { macaddr, ssid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macaddr_display_is_hyphenated_upper_hex() {
        let mac = MacAddr::new([0xAA, 0xBB, 0x0C, 0xDD, 0xEE, 0x01]);
        assert_eq!(mac.to_string(), "AA-BB-0C-DD-EE-01");
    }

    #[test]
    fn macaddr_parses_colon_and_hyphen_forms() {
        let expected = MacAddr::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!("AA:BB:CC:DD:EE:FF".parse::<MacAddr>().unwrap(), expected);
        assert_eq!("aa-bb-cc-dd-ee-ff".parse::<MacAddr>().unwrap(), expected);
    }

    #[test]
    fn macaddr_rejects_malformed_text() {
        for bad in [
            "",
            "AA:BB:CC:DD:EE",
            "AA:BB:CC:DD:EE:FF:00",
            "AA:BB:CC:DD:EE:GG",
            "A:BB:CC:DD:EE:FF",
            "AAA:BB:CC:DD:EE:F",
        ] {
            assert!(bad.parse::<MacAddr>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn ssid_capacity_boundary() {
        assert_eq!(Ssid::new(&[b'x'; 32]).unwrap().len(), 32);
        assert_eq!(
            Ssid::new(&[b'x'; 33]),
            Err(CodecError::FieldTooLarge { len: 33, max: 32 })
        );
    }

    #[test]
    fn ssid_full_field_has_no_terminator() {
        let ssid = Ssid::new(&[b'z'; 32]).unwrap();
        assert_eq!(ssid.wire_bytes().len(), 32);
        assert!(ssid.as_fixed().iter().all(|&b| b == b'z'));
    }

    #[test]
    fn ssid_wire_bytes_truncate_at_embedded_zero() {
        let ssid = Ssid::new(b"ab\0cd").unwrap();
        assert_eq!(ssid.as_bytes(), b"ab\0cd");
        assert_eq!(ssid.wire_bytes(), b"ab");
        assert_eq!(ssid.to_string(), "ab");
    }
}
