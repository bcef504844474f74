use enum_dispatch::enum_dispatch;

/// Contains structs representing recurring sets of structured data.
/// For instance, MAC-Addresses, frame control words, VLAN tags, etc.
pub mod components;

/// Ethernet II frames, optionally 802.1Q tagged
mod ethernet;
/// IEEE 802.11 MAC frames
mod ieee80211;

pub use ethernet::*;
pub use ieee80211::*;

use crate::frame_types::LinkType;
use crate::traits::{Addresses, WireFrame};

#[enum_dispatch(Addresses, WireFrame)]
#[derive(Clone, Debug, PartialEq, Eq)]
/// Any frame this library can marshal or unmarshal.
pub enum Frame {
    Ethernet(EthernetFrame),
    Ieee80211(Frame80211),
}

impl Frame {
    pub fn link_type(&self) -> LinkType {
        match self {
            Frame::Ethernet(_) => LinkType::Ethernet,
            Frame::Ieee80211(_) => LinkType::Ieee80211,
        }
    }
}
