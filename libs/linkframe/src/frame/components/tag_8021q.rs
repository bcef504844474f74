use crate::frame_types::{EtherType, Priority};

/// VLAN id of ports which don't belong to any VLAN.
pub const NATIVE_VLAN: u16 = 0;

const PCP_MASK: u16 = 0b111;
const DEI_MASK: u16 = 0b1;
const VLAN_MASK: u16 = 0x0FFF;

/// Pack priority code point, drop eligible indicator and VLAN id into a TCI word.
///
/// Layout: bits 0-2 PCP, bit 3 DEI, bits 4-15 VLAN id.
/// Inputs wider than their field are masked, so they can't corrupt a neighbouring field.
///
/// ```
/// use linkframe::frame::components::encode_8021q_tci;
///
/// assert_eq!(encode_8021q_tci(3, false, 1024), 0x4003);
/// ```
pub fn encode_8021q_tci(pcp: u8, dei: bool, vlan: u16) -> u16 {
    (vlan & VLAN_MASK) << 4 | (dei as u16 & DEI_MASK) << 3 | (pcp as u16 & PCP_MASK)
}

/// Returns `(pcp, dei, vlan)`.
pub fn decode_8021q_tci(tci: u16) -> (u8, bool, u16) {
    (
        (tci & PCP_MASK) as u8,
        (tci >> 3) & DEI_MASK == 1,
        (tci >> 4) & VLAN_MASK,
    )
}

/// IEEE 802.1Q, often referred to as Dot1q, tag of an Ethernet frame.
///
/// It consists of the tag protocol identifier (usually [EtherType::VLAN]) and the
/// tag control information, which also carries the 802.1P priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag8021Q {
    pub tpid: u16,
    pub tci: u16,
}

impl Tag8021Q {
    /// Create a tag with the standard VLAN tag protocol identifier.
    pub fn new(pcp: u8, dei: bool, vlan: u16) -> Self {
        Tag8021Q {
            tpid: EtherType::VLAN.0,
            tci: encode_8021q_tci(pcp, dei, vlan),
        }
    }

    pub fn pcp(&self) -> u8 {
        decode_8021q_tci(self.tci).0
    }

    pub fn priority(&self) -> Priority {
        Priority::from_pcp(self.pcp())
    }

    pub fn dei(&self) -> bool {
        decode_8021q_tci(self.tci).1
    }

    pub fn vlan_id(&self) -> u16 {
        decode_8021q_tci(self.tci).2
    }

    pub fn is_native(&self) -> bool {
        self.vlan_id() == NATIVE_VLAN
    }

    /// Encode for the wire: TPID followed by TCI, both big-endian.
    pub fn encode(&self) -> [u8; 4] {
        let [tpid_high, tpid_low] = self.tpid.to_be_bytes();
        let [tci_high, tci_low] = self.tci.to_be_bytes();
        [tpid_high, tpid_low, tci_high, tci_low]
    }
}
