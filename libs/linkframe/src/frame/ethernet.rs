use std::fmt;

use byteorder::{BigEndian, ByteOrder};

use crate::checksum::FCS_LEN;
use crate::error::Error;
use crate::frame::components::{MacAddress, Tag8021Q};
use crate::frame_types::EtherType;
use crate::options::ParseOptions;
use crate::parsers::parse_ethernet_frame;
use crate::traits::{Addresses, WireFrame};

/// Smallest payload of an untagged frame. Shorter payloads are padded with zeroes.
pub const MIN_PAYLOAD_SIZE: usize = 46;
/// Largest payload of a standard (non jumbo) frame.
pub const MAX_PAYLOAD_SIZE: usize = 1500;
/// Smallest untagged frame on the wire, FCS included.
pub const MIN_FRAME_SIZE: usize = 64;

/// Destination and source address.
const ADDRESSES_LEN: usize = 12;
const ETHER_TYPE_LEN: usize = 2;
const TAG_LEN: usize = 4;

/// An Ethernet II frame.
///
/// Structure on the wire:
///
/// - **Bytes 0-5**: Destination address.
/// - **Bytes 6-11**: Source address.
/// - **Bytes 12-15** (optional): 802.1Q tag. Present if bytes 12-13 are `0x8100`.
/// - **2 bytes**: [EtherType] of the payload.
/// - **Payload**: 46 to 1500 bytes, 42 to 1500 if tagged.
/// - **Last 4 bytes**: CRC-32 frame check sequence over everything before it.
///
/// Only the tag and the FCS can change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EthernetFrame {
    pub(crate) destination: MacAddress,
    pub(crate) source: MacAddress,
    pub(crate) tag: Option<Tag8021Q>,
    pub(crate) ether_type: EtherType,
    pub(crate) payload: Vec<u8>,
    pub(crate) fcs: [u8; 4],
}

impl EthernetFrame {
    /// Build an untagged frame.
    ///
    /// Payloads shorter than [MIN_PAYLOAD_SIZE] are padded with zeroes, longer ones are kept
    /// as they are. The FCS stays zero until the frame is marshaled.
    pub fn new(
        source: MacAddress,
        destination: MacAddress,
        ether_type: EtherType,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        let mut payload = payload.into();
        if payload.len() < MIN_PAYLOAD_SIZE {
            payload.resize(MIN_PAYLOAD_SIZE, 0);
        }

        EthernetFrame {
            destination,
            source,
            tag: None,
            ether_type,
            payload,
            fcs: [0; 4],
        }
    }

    /// Decode a frame from raw bytes, FCS included.
    ///
    /// The FCS is copied as is and not checked, use
    /// [verify_fcs](crate::checksum::verify_fcs) or [EthernetFrame::unmarshal_with] for that.
    pub fn unmarshal(input: &[u8]) -> Result<Self, Error> {
        parse_ethernet_frame(input, &ParseOptions::default())
    }

    pub fn unmarshal_with(input: &[u8], options: &ParseOptions) -> Result<Self, Error> {
        parse_ethernet_frame(input, options)
    }

    pub fn source(&self) -> MacAddress {
        self.source
    }

    pub fn destination(&self) -> MacAddress {
        self.destination
    }

    pub fn ether_type(&self) -> EtherType {
        self.ether_type
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn tag(&self) -> Option<&Tag8021Q> {
        self.tag.as_ref()
    }

    /// Attach or remove the 802.1Q tag. A tag adds 4 bytes to the frame.
    pub fn set_tag(&mut self, tag: Option<Tag8021Q>) {
        self.tag = tag;
    }

    /// Advisory sanity check, marshal and unmarshal never call this.
    pub fn check(&self) -> Result<(), Error> {
        if self.source.is_broadcast() {
            return Err(Error::InvalidFrame(
                "source address is the broadcast address".to_string(),
            ));
        }
        if self.source == self.destination {
            return Err(Error::InvalidFrame(format!(
                "source address equals destination address {}",
                self.destination
            )));
        }

        Ok(())
    }

    fn header_len(&self) -> usize {
        let tag_len = if self.tag.is_some() { TAG_LEN } else { 0 };
        ADDRESSES_LEN + tag_len + ETHER_TYPE_LEN
    }
}

impl WireFrame for EthernetFrame {
    fn size(&self) -> usize {
        self.header_len() + self.payload.len() + FCS_LEN
    }

    fn encode_body(&self, buf: &mut Vec<u8>) {
        let start = buf.len();
        buf.resize(start + self.header_len(), 0);

        let header = &mut buf[start..];
        header[0..6].copy_from_slice(&self.destination.encode());
        header[6..12].copy_from_slice(&self.source.encode());

        let mut offset = ADDRESSES_LEN;
        if let Some(tag) = &self.tag {
            BigEndian::write_u16(&mut header[offset..offset + 2], tag.tpid);
            BigEndian::write_u16(&mut header[offset + 2..offset + 4], tag.tci);
            offset += TAG_LEN;
        }
        BigEndian::write_u16(&mut header[offset..offset + 2], self.ether_type.0);

        buf.extend_from_slice(&self.payload);
    }

    fn fcs(&self) -> [u8; 4] {
        self.fcs
    }

    fn set_fcs(&mut self, fcs: [u8; 4]) {
        self.fcs = fcs;
    }
}

impl Addresses for EthernetFrame {
    fn src(&self) -> Option<&MacAddress> {
        Some(&self.source)
    }

    fn dest(&self) -> &MacAddress {
        &self.destination
    }

    fn bssid(&self) -> Option<&MacAddress> {
        None
    }
}

impl fmt::Display for EthernetFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.source, self.destination)?;
        if let Some(tag) = &self.tag {
            write!(f, ", vlan {} pcp {}", tag.vlan_id(), tag.pcp())?;
            if tag.dei() {
                write!(f, " dei")?;
            }
        }
        write!(
            f,
            ", ethertype {}, payload {} bytes",
            self.ether_type,
            self.payload.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(payload: &[u8]) -> EthernetFrame {
        EthernetFrame::new(
            MacAddress([127, 127, 127, 50, 50, 50]),
            MacAddress([255, 255, 255, 50, 50, 50]),
            EtherType::IPV4,
            payload,
        )
    }

    #[test]
    fn test_padding() {
        let frame = frame(b"HELLO");

        assert_eq!(frame.payload().len(), MIN_PAYLOAD_SIZE);
        assert_eq!(&frame.payload()[..5], b"HELLO");
        assert!(frame.payload()[5..].iter().all(|byte| *byte == 0));
        assert_eq!(frame.fcs(), [0; 4]);
    }

    #[test]
    fn test_no_truncation() {
        let payload = vec![0xAB; 1600];
        let frame = frame(&payload);

        assert_eq!(frame.payload(), &payload[..]);
        assert_eq!(frame.size(), 12 + 2 + 1600 + 4);
    }

    #[test]
    fn test_size_follows_tag() {
        let mut frame = frame(b"HELLO");
        assert_eq!(frame.size(), MIN_FRAME_SIZE);

        frame.set_tag(Some(Tag8021Q::new(1, false, 7)));
        assert_eq!(frame.size(), MIN_FRAME_SIZE + 4);
        assert_eq!(frame.marshal().len(), frame.size());

        frame.set_tag(None);
        assert_eq!(frame.marshal().len(), MIN_FRAME_SIZE);
    }

    #[test]
    fn test_marshal_stores_fcs() {
        let mut frame = frame(b"HELLO");
        let expected = frame.compute_fcs();
        let bytes = frame.marshal();

        assert_eq!(frame.fcs(), expected);
        assert_eq!(bytes[bytes.len() - 4..], expected);
    }

    #[test]
    fn test_marshal_into_appends() {
        let mut frame = frame(b"HELLO");
        let mut buf = vec![0xEE; 3];
        frame.marshal_into(&mut buf);

        assert_eq!(buf.len(), 3 + MIN_FRAME_SIZE);
        assert_eq!(buf[..3], [0xEE; 3]);
        assert_eq!(buf[3..], frame.marshal()[..]);
    }

    #[test]
    fn test_check() {
        assert!(frame(b"").check().is_ok());

        let broadcast = EthernetFrame::new(
            MacAddress::broadcast(),
            MacAddress([1, 2, 3, 4, 5, 6]),
            EtherType::IPV4,
            Vec::<u8>::new(),
        );
        assert!(matches!(broadcast.check(), Err(Error::InvalidFrame(_))));

        let looped = EthernetFrame::new(
            MacAddress([2, 2, 3, 4, 5, 6]),
            MacAddress([2, 2, 3, 4, 5, 6]),
            EtherType::IPV4,
            Vec::<u8>::new(),
        );
        assert!(matches!(looped.check(), Err(Error::InvalidFrame(_))));
    }

    #[test]
    fn test_display() {
        let mut frame = frame(b"");
        frame.set_tag(Some(Tag8021Q::new(3, true, 1024)));

        assert_eq!(
            frame.to_string(),
            "7f:7f:7f:32:32:32 > ff:ff:ff:32:32:32, vlan 1024 pcp 3 dei, \
             ethertype IPv4 (0x0800), payload 46 bytes"
        );
    }
}
