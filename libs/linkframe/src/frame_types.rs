use std::fmt;

use strum_macros::Display;

/// Enum with all 802.11 frame types, as encoded in bits 2-3 of the frame control word.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
#[repr(u8)]
pub enum FrameType {
    Management = 0,
    Control = 1,
    Data = 2,
    Reserved = 3,
}

impl FrameType {
    /// Interpret the lowest two bits of `bits`. Every value maps to a variant.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => FrameType::Management,
            1 => FrameType::Control,
            2 => FrameType::Data,
            _ => FrameType::Reserved,
        }
    }

    pub fn bits(&self) -> u8 {
        *self as u8
    }
}

/// The two-octet protocol discriminator of an Ethernet II frame.
///
/// The same field doubles as a length field in 802.3 frames, which is why this is an open
/// newtype rather than a closed enum.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct EtherType(pub u16);

impl EtherType {
    /// Frame payload is an Ipv4 packet.
    pub const IPV4: EtherType = EtherType(0x0800);
    /// Frame payload is an Arp packet.
    pub const ARP: EtherType = EtherType(0x0806);
    /// An 802.1Q tag follows; the real EtherType comes 4 bytes later.
    pub const VLAN: EtherType = EtherType(0x8100);
    /// Frame payload is an Ipv6 packet.
    pub const IPV6: EtherType = EtherType(0x86DD);

    pub fn name(&self) -> Option<&'static str> {
        match *self {
            EtherType::IPV4 => Some("IPv4"),
            EtherType::ARP => Some("ARP"),
            EtherType::VLAN => Some("802.1Q"),
            EtherType::IPV6 => Some("IPv6"),
            _ => None,
        }
    }
}

impl Default for EtherType {
    fn default() -> Self {
        EtherType::IPV4
    }
}

impl From<u16> for EtherType {
    fn from(value: u16) -> Self {
        EtherType(value)
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} (0x{:04x})", self.0),
            None => write!(f, "0x{:04x}", self.0),
        }
    }
}

/// IEEE 802.1P traffic classes carried in the PCP bits of an 802.1Q tag.
///
/// Ordered from the lowest class (`BestEffort`) to the highest (`NetworkControl`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, PartialOrd, Ord)]
#[repr(u8)]
pub enum Priority {
    BestEffort = 0,
    Background = 1,
    ExcellentEffort = 2,
    CriticalApplications = 3,
    /// Video, < 100 ms latency and jitter
    Video = 4,
    /// Voice, < 10 ms latency and jitter
    Voice = 5,
    InternetworkControl = 6,
    NetworkControl = 7,
}

impl Priority {
    /// Interpret the lowest three bits of `pcp`.
    pub fn from_pcp(pcp: u8) -> Self {
        match pcp & 0b111 {
            0 => Priority::BestEffort,
            1 => Priority::Background,
            2 => Priority::ExcellentEffort,
            3 => Priority::CriticalApplications,
            4 => Priority::Video,
            5 => Priority::Voice,
            6 => Priority::InternetworkControl,
            _ => Priority::NetworkControl,
        }
    }

    pub fn pcp(&self) -> u8 {
        *self as u8
    }
}

/// The link layer a byte buffer should be decoded as.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display)]
pub enum LinkType {
    Ethernet,
    Ieee80211,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(Priority::BestEffort < Priority::Background);
        assert!(Priority::InternetworkControl < Priority::NetworkControl);
        assert_eq!(Priority::NetworkControl.pcp(), 7);

        for pcp in 0..8 {
            assert_eq!(Priority::from_pcp(pcp).pcp(), pcp);
        }
    }

    #[test]
    fn test_ether_type_display() {
        assert_eq!(EtherType::IPV4.to_string(), "IPv4 (0x0800)");
        assert_eq!(EtherType(0x88cc).to_string(), "0x88cc");
        assert_eq!(EtherType::default(), EtherType::IPV4);
    }

    #[test]
    fn test_frame_type_bits() {
        for bits in 0..4 {
            assert_eq!(FrameType::from_bits(bits).bits(), bits);
        }
        assert_eq!(FrameType::Data.to_string(), "Data");
    }
}
