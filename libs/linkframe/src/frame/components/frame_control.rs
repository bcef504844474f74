use crate::frame_types::FrameType;

/// Flag bits of the upper frame control byte, see [FrameControl::flags].
pub mod flags {
    pub const TO_DS: u8 = 1 << 0;
    pub const FROM_DS: u8 = 1 << 1;
    pub const MORE_FRAG: u8 = 1 << 2;
    pub const RETRY: u8 = 1 << 3;
    pub const PWR_MGMT: u8 = 1 << 4;
    pub const MORE_DATA: u8 = 1 << 5;
    pub const PROTECTED: u8 = 1 << 6;
    pub const ORDER: u8 = 1 << 7;
}

#[inline]
/// Mini helper to check, whether a bit is set or not.
fn flag_is_set(data: u8, mask: u8) -> bool {
    (data & mask) > 0
}

#[inline]
fn bit(value: bool, shift: u16) -> u16 {
    (value as u16) << shift
}

/// All eleven frame control sub-fields, ordered from bit 0 upwards:
///
/// `(protocol_version, frame_type, frame_subtype, to_ds, from_ds, more_frag, retry,
/// pwr_mgmt, more_data, protected, order)`
pub type FrameControlFields = (u8, FrameType, u8, bool, bool, bool, bool, bool, bool, bool, bool);

/// The first two bytes of every 802.11 frame.
///
/// The word is handled as a big-endian `u16`. Counting from the least significant bit:
///
/// - **bit_0-1**: Protocol version. Until now, this has always been 0.
/// - **bit_2-3**: [FrameType]
/// - **bit_4-7**: Frame subtype. Its meaning depends on the [FrameType].
///
/// The upper byte holds the flags:
/// - **bit_8** `to_ds`: Set if the frame is to be sent by the AP to the distribution system.
/// - **bit_9** `from_ds`: Set if the frame is from the distribution system.
/// - **bit_10** `more_frag`: Set if more fragments of the same MSDU follow.
/// - **bit_11** `retry`: Set if this frame is a retransmission.
/// - **bit_12** `pwr_mgmt`: Power mode the station will be in once the frame has been sent.
/// - **bit_13** `more_data`: Set by the AP when more frames are buffered for a dozing station.
/// - **bit_14** `protected`: Set if the frame body is encrypted (formerly `wep`).
/// - **bit_15** `order`: Strictly ordered service class, or HT control present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameControl {
    pub protocol_version: u8,
    pub frame_type: FrameType,
    pub frame_subtype: u8,
    pub flags: u8,
}

impl Default for FrameControl {
    fn default() -> Self {
        FrameControl::from_bits(0)
    }
}

impl FrameControl {
    pub fn new(frame_type: FrameType, frame_subtype: u8) -> Self {
        FrameControl {
            protocol_version: 0,
            frame_type,
            frame_subtype: frame_subtype & 0b1111,
            flags: 0,
        }
    }

    pub fn with_flags(mut self, flags: u8) -> Self {
        self.flags |= flags;
        self
    }

    pub fn from_bits(word: u16) -> Self {
        FrameControl {
            protocol_version: (word & 0b11) as u8,
            frame_type: FrameType::from_bits((word >> 2) as u8),
            frame_subtype: ((word >> 4) & 0b1111) as u8,
            flags: (word >> 8) as u8,
        }
    }

    pub fn bits(&self) -> u16 {
        (self.flags as u16) << 8
            | ((self.frame_subtype & 0b1111) as u16) << 4
            | (self.frame_type.bits() as u16) << 2
            | (self.protocol_version & 0b11) as u16
    }

    /// Encode for the wire (big-endian).
    pub fn encode(&self) -> [u8; 2] {
        self.bits().to_be_bytes()
    }

    pub fn from_fields(fields: FrameControlFields) -> Self {
        let (
            version,
            frame_type,
            subtype,
            to_ds,
            from_ds,
            more_frag,
            retry,
            pwr_mgmt,
            more_data,
            protected,
            order,
        ) = fields;

        let word = bit(order, 15)
            | bit(protected, 14)
            | bit(more_data, 13)
            | bit(pwr_mgmt, 12)
            | bit(retry, 11)
            | bit(more_frag, 10)
            | bit(from_ds, 9)
            | bit(to_ds, 8)
            | ((subtype & 0b1111) as u16) << 4
            | (frame_type.bits() as u16) << 2
            | (version & 0b11) as u16;

        FrameControl::from_bits(word)
    }

    pub fn fields(&self) -> FrameControlFields {
        (
            self.protocol_version,
            self.frame_type,
            self.frame_subtype,
            self.to_ds(),
            self.from_ds(),
            self.more_frag(),
            self.retry(),
            self.pwr_mgmt(),
            self.more_data(),
            self.protected(),
            self.order(),
        )
    }

    pub fn to_ds(&self) -> bool {
        flag_is_set(self.flags, flags::TO_DS)
    }

    pub fn from_ds(&self) -> bool {
        flag_is_set(self.flags, flags::FROM_DS)
    }

    pub fn more_frag(&self) -> bool {
        flag_is_set(self.flags, flags::MORE_FRAG)
    }

    pub fn retry(&self) -> bool {
        flag_is_set(self.flags, flags::RETRY)
    }

    pub fn pwr_mgmt(&self) -> bool {
        flag_is_set(self.flags, flags::PWR_MGMT)
    }

    pub fn more_data(&self) -> bool {
        flag_is_set(self.flags, flags::MORE_DATA)
    }

    pub fn protected(&self) -> bool {
        flag_is_set(self.flags, flags::PROTECTED)
    }

    pub fn order(&self) -> bool {
        flag_is_set(self.flags, flags::ORDER)
    }

    /// QoS data subtypes are the data subtypes with the high subtype bit set.
    pub fn is_qos(&self) -> bool {
        self.frame_type == FrameType::Data && self.frame_subtype & 0b1000 != 0
    }
}

impl From<u16> for FrameControl {
    fn from(word: u16) -> Self {
        FrameControl::from_bits(word)
    }
}

/// Pack the eleven frame control sub-fields into a single word.
pub fn encode_80211_frame_control(fields: FrameControlFields) -> u16 {
    FrameControl::from_fields(fields).bits()
}

/// Unpack a frame control word, see [FrameControlFields] for the order.
pub fn decode_80211_frame_control(word: u16) -> FrameControlFields {
    FrameControl::from_bits(word).fields()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_for_bit(bit: u8, frame_control: &FrameControl) -> bool {
        match bit {
            0 => frame_control.to_ds(),
            1 => frame_control.from_ds(),
            2 => frame_control.more_frag(),
            3 => frame_control.retry(),
            4 => frame_control.pwr_mgmt(),
            5 => frame_control.more_data(),
            6 => frame_control.protected(),
            7 => frame_control.order(),
            _ => panic!("Unhandled bit {bit}"),
        }
    }

    #[test]
    /// Set each flag once and ensure that only that bit is set.
    fn test_flags() {
        for bit in 0..8 {
            let word = 1u16 << (8 + bit);
            let frame_control = FrameControl::from_bits(word);

            for check_bit in 0..8 {
                assert_eq!(flag_for_bit(check_bit, &frame_control), bit == check_bit);
            }
        }
    }

    #[test]
    /// A Management-Beacon frame control: type `00`, subtype `1000`.
    fn test_beacon() {
        let frame_control = FrameControl::from_bits(0b0000_0000_1000_0000);

        assert_eq!(frame_control.frame_type, FrameType::Management);
        assert_eq!(frame_control.frame_subtype, 8);
        assert_eq!(frame_control.encode(), [0x00, 0x80]);
    }

    #[test]
    fn test_field_positions() {
        let word = encode_80211_frame_control((
            0b11,
            FrameType::Data,
            0b1010,
            true,
            false,
            false,
            false,
            false,
            false,
            false,
            true,
        ));

        assert_eq!(word, 0b1000_0001_1010_1011);
    }

    #[test]
    /// Every combination of the sub-fields has to survive an encode/decode cycle.
    fn test_roundtrip_all_fields() {
        for version in 0..4u8 {
            for frame_type in 0..4u8 {
                for subtype in 0..16u8 {
                    for flag_bits in 0..=255u8 {
                        let flag = |mask: u8| flag_bits & mask != 0;
                        let fields = (
                            version,
                            FrameType::from_bits(frame_type),
                            subtype,
                            flag(flags::TO_DS),
                            flag(flags::FROM_DS),
                            flag(flags::MORE_FRAG),
                            flag(flags::RETRY),
                            flag(flags::PWR_MGMT),
                            flag(flags::MORE_DATA),
                            flag(flags::PROTECTED),
                            flag(flags::ORDER),
                        );

                        let word = encode_80211_frame_control(fields);
                        assert_eq!(decode_80211_frame_control(word), fields);
                        assert_eq!(FrameControl::from_bits(word).bits(), word);
                    }
                }
            }
        }
    }

    #[test]
    fn test_is_qos() {
        assert!(FrameControl::new(FrameType::Data, 8).is_qos());
        assert!(FrameControl::new(FrameType::Data, 12).is_qos());
        assert!(!FrameControl::new(FrameType::Data, 0).is_qos());
        assert!(!FrameControl::new(FrameType::Management, 8).is_qos());
    }
}
