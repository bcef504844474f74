/// Fragment and sequence number of an 802.11 frame.
///
/// The fragment number occupies the lower 4 bits of the word, the sequence number the upper 12.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SequenceControl {
    /// The 4 bit fragment number from a sequence control field.
    pub fragment_number: u8,
    /// The 12 bit sequence number from a sequence control field.
    pub sequence_number: u16,
}

impl SequenceControl {
    pub fn new(fragment_number: u8, sequence_number: u16) -> Self {
        SequenceControl {
            fragment_number: fragment_number & 0x0F,
            sequence_number: sequence_number & 0x0FFF,
        }
    }

    pub fn from_bits(word: u16) -> Self {
        SequenceControl {
            fragment_number: (word & 0x0F) as u8,
            sequence_number: word >> 4,
        }
    }

    pub fn bits(&self) -> u16 {
        let sequence_number_bits = (self.sequence_number & 0x0FFF) << 4;
        let fragment_number_bits = (self.fragment_number & 0x0F) as u16;

        sequence_number_bits | fragment_number_bits
    }

    /// Encode for the wire (big-endian).
    pub fn encode(&self) -> [u8; 2] {
        self.bits().to_be_bytes()
    }
}

impl From<u16> for SequenceControl {
    fn from(word: u16) -> Self {
        SequenceControl::from_bits(word)
    }
}

pub fn encode_sequence_control(fragment_number: u8, sequence_number: u16) -> u16 {
    SequenceControl::new(fragment_number, sequence_number).bits()
}

/// Returns `(fragment_number, sequence_number)`.
pub fn decode_sequence_control(word: u16) -> (u8, u16) {
    let control = SequenceControl::from_bits(word);
    (control.fragment_number, control.sequence_number)
}
