use crate::checksum::FCS_LEN;
use crate::error::Error;
use crate::frame::components::{FrameControl, MacAddress, SequenceControl};
use crate::options::ParseOptions;
use crate::parsers::parse_80211_frame;
use crate::traits::{Addresses, WireFrame};

/// 802.11 frames are capable of transporting an MSDU payload of 2304 bytes of upper layer data.
pub const MAX_MSDU_SIZE: usize = 2304;

/// Frame control, duration and the three mandatory addresses.
pub const BASE_HEADER_LEN: usize = 2 + 2 + 6 + 6 + 6;
/// The header with sequence control and the fourth address, but without QoS and HT control.
pub const SUPERSET_HEADER_LEN: usize = BASE_HEADER_LEN + 2 + 6;

/// An IEEE 802.11 MAC frame.
///
/// Structure on the wire:
///
/// **Bytes 0-1** \
/// The [FrameControl] word.
///
/// **Bytes 2-3** \
/// Duration, the value of the network allocation vector (NAV).
///
/// **Bytes 4-21** \
/// Address 1 to 3. Always present.
///
/// **Optional fields** \
/// In this order, each only if set on the frame:
/// sequence control (2), address 4 (6), QoS control (2), HT control (4).
///
/// **Payload** \
/// Up to [MAX_MSDU_SIZE] bytes.
///
/// **Last 4 bytes** \
/// CRC-32 frame check sequence over everything before it.
///
/// A field that is set to `Some(0)` is still written. Absent fields are `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame80211 {
    pub(crate) frame_control: FrameControl,
    pub(crate) duration: u16,
    pub(crate) address_1: MacAddress,
    pub(crate) address_2: MacAddress,
    pub(crate) address_3: MacAddress,
    pub(crate) sequence_control: Option<SequenceControl>,
    pub(crate) address_4: Option<MacAddress>,
    pub(crate) qos_control: Option<u16>,
    pub(crate) ht_control: Option<u32>,
    pub(crate) payload: Vec<u8>,
    pub(crate) fcs: [u8; 4],
}

impl Frame80211 {
    /// Build a frame from its addresses and payload.
    ///
    /// Frame control and duration start as zero, all optional fields as absent.
    pub fn new(
        address_1: MacAddress,
        address_2: MacAddress,
        address_3: MacAddress,
        address_4: Option<MacAddress>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Frame80211 {
            frame_control: FrameControl::default(),
            duration: 0,
            address_1,
            address_2,
            address_3,
            sequence_control: None,
            address_4,
            qos_control: None,
            ht_control: None,
            payload: payload.into(),
            fcs: [0; 4],
        }
    }

    /// Decode a frame with the [HeaderLayout::Superset](crate::HeaderLayout::Superset) layout.
    ///
    /// Sequence control and the fourth address are always read, even if the sender omitted
    /// them. Use [Frame80211::unmarshal_with] to derive the layout from the frame control.
    pub fn unmarshal(input: &[u8]) -> Result<Self, Error> {
        parse_80211_frame(input, &ParseOptions::default())
    }

    pub fn unmarshal_with(input: &[u8], options: &ParseOptions) -> Result<Self, Error> {
        parse_80211_frame(input, options)
    }

    pub fn frame_control(&self) -> FrameControl {
        self.frame_control
    }

    pub fn set_frame_control(&mut self, frame_control: impl Into<FrameControl>) {
        self.frame_control = frame_control.into();
    }

    /// Duration field carries the value of the Network Allocation Vector (NAV).
    /// Access to the medium is restricted for the time specified by the NAV.
    pub fn duration(&self) -> u16 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: u16) {
        self.duration = duration;
    }

    pub fn address_1(&self) -> MacAddress {
        self.address_1
    }

    pub fn address_2(&self) -> MacAddress {
        self.address_2
    }

    pub fn address_3(&self) -> MacAddress {
        self.address_3
    }

    pub fn address_4(&self) -> Option<MacAddress> {
        self.address_4
    }

    pub fn set_address_4(&mut self, address_4: Option<MacAddress>) {
        self.address_4 = address_4;
    }

    pub fn sequence_control(&self) -> Option<SequenceControl> {
        self.sequence_control
    }

    pub fn set_sequence_control(&mut self, sequence_control: Option<SequenceControl>) {
        self.sequence_control = sequence_control;
    }

    pub fn qos_control(&self) -> Option<u16> {
        self.qos_control
    }

    pub fn set_qos_control(&mut self, qos_control: Option<u16>) {
        self.qos_control = qos_control;
    }

    /// The HT control field follows QoS control on QoS data and management frames with the
    /// order bit set, and on control wrapper frames.
    pub fn ht_control(&self) -> Option<u32> {
        self.ht_control
    }

    pub fn set_ht_control(&mut self, ht_control: Option<u32>) {
        self.ht_control = ht_control;
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Receiver address (RA), always address 1.
    pub fn receiver(&self) -> MacAddress {
        self.address_1
    }

    /// Transmitter address (TA), always address 2.
    pub fn transmitter(&self) -> MacAddress {
        self.address_2
    }

    /// Source address (SA). Which address field holds it depends on `to_ds` and `from_ds`:
    ///
    /// | to_ds | from_ds | source    |
    /// |-------|---------|-----------|
    /// | 0     | 0       | address 2 |
    /// | 0     | 1       | address 3 |
    /// | 1     | 0       | address 2 |
    /// | 1     | 1       | address 4 |
    ///
    /// A WDS frame without a fourth address has no source, the zeroed address is returned.
    pub fn source(&self) -> MacAddress {
        self.src().copied().unwrap_or_default()
    }

    /// Destination address (DA). Address 1, unless `to_ds` is set, then address 3.
    pub fn destination(&self) -> MacAddress {
        *self.dest()
    }

    /// Advisory sanity check, marshal and unmarshal never call this.
    pub fn check(&self) -> Result<(), Error> {
        if self.payload.len() > MAX_MSDU_SIZE {
            return Err(Error::InvalidFrame(format!(
                "payload of {} bytes exceeds the {MAX_MSDU_SIZE} byte MSDU limit",
                self.payload.len()
            )));
        }

        Ok(())
    }

    fn header_len(&self) -> usize {
        let mut len = BASE_HEADER_LEN;
        if self.sequence_control.is_some() {
            len += 2;
        }
        if self.address_4.is_some() {
            len += 6;
        }
        if self.qos_control.is_some() {
            len += 2;
        }
        if self.ht_control.is_some() {
            len += 4;
        }
        len
    }
}

impl WireFrame for Frame80211 {
    fn size(&self) -> usize {
        self.header_len() + self.payload.len() + FCS_LEN
    }

    fn encode_body(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.frame_control.encode());
        bytes.extend_from_slice(&self.duration.to_be_bytes());
        bytes.extend_from_slice(&self.address_1.encode());
        bytes.extend_from_slice(&self.address_2.encode());
        bytes.extend_from_slice(&self.address_3.encode());

        if let Some(sequence_control) = &self.sequence_control {
            bytes.extend_from_slice(&sequence_control.encode());
        }
        if let Some(address_4) = &self.address_4 {
            bytes.extend_from_slice(&address_4.encode());
        }
        if let Some(qos_control) = self.qos_control {
            bytes.extend_from_slice(&qos_control.to_be_bytes());
        }
        if let Some(ht_control) = self.ht_control {
            bytes.extend_from_slice(&ht_control.to_be_bytes());
        }

        bytes.extend_from_slice(&self.payload);
    }

    fn fcs(&self) -> [u8; 4] {
        self.fcs
    }

    fn set_fcs(&mut self, fcs: [u8; 4]) {
        self.fcs = fcs;
    }
}

/// Which address is used in which way depends on the `to_ds` and `from_ds` flags.
///
/// **Address 1:** \
/// The receiver. The destination, unless the frame goes to the distribution system.
///
/// **Address 2:** \
/// The transmitter. The source, unless the frame comes from the distribution system.
///
/// **Address 3:** \
/// The BSSID if neither flag is set, the source or destination otherwise.
///
/// **Address 4:** \
/// Only used in wireless distribution systems, where both flags are set. Holds the source.
impl Addresses for Frame80211 {
    fn src(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        match (frame_control.to_ds(), frame_control.from_ds()) {
            (false, false) => Some(&self.address_2),
            (false, true) => Some(&self.address_3),
            (true, false) => Some(&self.address_2),
            (true, true) => self.address_4.as_ref(),
        }
    }

    fn dest(&self) -> &MacAddress {
        if self.frame_control.to_ds() {
            &self.address_3
        } else {
            &self.address_1
        }
    }

    fn bssid(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        match (frame_control.to_ds(), frame_control.from_ds()) {
            (false, false) => Some(&self.address_3),
            (false, true) => Some(&self.address_2),
            (true, false) => Some(&self.address_1),
            (true, true) => None,
        }
    }
}
