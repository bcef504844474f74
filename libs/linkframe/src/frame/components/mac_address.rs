use std::fmt;

use rand::{thread_rng, Rng, RngCore};

/// This is our representation of a hardware (MAC) address.
///
/// ```
/// use linkframe::frame::components::MacAddress;
///
/// let address = MacAddress([255, 255, 255, 255, 255, 255]);
/// assert!(address.is_broadcast());
/// assert_eq!(address.to_string(), "ff:ff:ff:ff:ff:ff");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Copy, Hash, Ord, PartialOrd)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// The all-ones address every station accepts.
    pub const BROADCAST: MacAddress = MacAddress([0xff; 6]);
    /// The all-zero address, used to mean "not set".
    pub const ZEROED: MacAddress = MacAddress([0; 6]);

    pub fn broadcast() -> Self {
        Self::BROADCAST
    }

    pub fn zeroed() -> Self {
        Self::ZEROED
    }

    pub fn from_slice(slice: &[u8]) -> Option<MacAddress> {
        let bytes: [u8; 6] = slice.try_into().ok()?;
        Some(MacAddress(bytes))
    }

    /// Generate random valid mac
    pub fn random() -> Self {
        loop {
            let mut bytes = [0u8; 6];
            thread_rng().fill_bytes(&mut bytes);
            // Clear the group bit, we want a unicast address.
            bytes[0] &= 0xFE;

            let mac = MacAddress(bytes);
            if !mac.is_empty() {
                return mac;
            }
        }
    }

    /// Generate a random MAC address using the same OUI as the given MAC address
    pub fn random_with_oui(other: &MacAddress) -> Self {
        let mut rng = thread_rng();
        let mut new_mac = other.0;
        new_mac[3..6].fill_with(|| rng.gen());
        MacAddress(new_mac)
    }

    /// Organisationally unique identifier, the vendor part.
    pub fn oui(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// The device specific part, assigned by the vendor.
    pub fn nic(&self) -> [u8; 3] {
        [self.0[3], self.0[4], self.0[5]]
    }

    /// Encode mac address for network.
    pub fn encode(&self) -> [u8; 6] {
        self.0
    }

    /// Check whether this address has only zeroes.
    pub fn is_empty(&self) -> bool {
        *self == Self::ZEROED
    }

    /// Check whether this MAC addresses the whole network.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Check if this is a multicast address (group bit set).
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Check if this is a private address (locally set bit)
    pub fn is_private(&self) -> bool {
        self.0[0] & 0x02 != 0
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MacParseError {
    InvalidDigit,
    InvalidLength,
}

impl fmt::Display for MacParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacParseError::InvalidDigit => write!(f, "Invalid hex digit in mac address"),
            MacParseError::InvalidLength => write!(f, "A mac address consists of 6 bytes"),
        }
    }
}

impl std::error::Error for MacParseError {}

impl std::str::FromStr for MacAddress {
    type Err = MacParseError;

    /// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` and `aabbccddeeff`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut array = [0u8; 6];

        let input_lower = input.to_lowercase();
        let bytes: Vec<&str> = if input_lower.contains(':') {
            input_lower.split(':').collect()
        } else if input_lower.contains('-') {
            input_lower.split('-').collect()
        } else if input_lower.len() == 12 && input_lower.is_ascii() {
            (0..12)
                .step_by(2)
                .map(|start| &input_lower[start..start + 2])
                .collect()
        } else {
            return Err(MacParseError::InvalidLength);
        };

        if bytes.len() != 6 {
            return Err(MacParseError::InvalidLength);
        }

        for (count, byte) in bytes.iter().enumerate() {
            if byte.is_empty() || byte.len() > 2 {
                return Err(MacParseError::InvalidDigit);
            }
            array[count] = u8::from_str_radix(byte, 16).map_err(|_| MacParseError::InvalidDigit)?;
        }

        Ok(MacAddress(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        let expected = MacAddress([0x8c, 0x8e, 0xc4, 0xaa, 0x4e, 0xf1]);

        assert_eq!("8c:8e:c4:aa:4e:f1".parse::<MacAddress>(), Ok(expected));
        assert_eq!("8C-8E-C4-AA-4E-F1".parse::<MacAddress>(), Ok(expected));
        assert_eq!("8c8ec4aa4ef1".parse::<MacAddress>(), Ok(expected));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "8c:8e:c4:aa:4e".parse::<MacAddress>(),
            Err(MacParseError::InvalidLength)
        );
        assert_eq!(
            "8c:8e:c4:aa:4e:zz".parse::<MacAddress>(),
            Err(MacParseError::InvalidDigit)
        );
        assert_eq!(
            "8c:8e:c4:aa:4e:123".parse::<MacAddress>(),
            Err(MacParseError::InvalidDigit)
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let address = MacAddress([0x8c, 0x8e, 0xc4, 0xff, 0x9e, 0xa2]);
        assert_eq!(address.to_string(), "8c:8e:c4:ff:9e:a2");
        assert_eq!(address.to_string().parse::<MacAddress>(), Ok(address));
    }

    #[test]
    fn test_views() {
        let address = MacAddress([1, 2, 3, 4, 5, 6]);
        assert_eq!(address.oui(), [1, 2, 3]);
        assert_eq!(address.nic(), [4, 5, 6]);
        assert!(MacAddress::zeroed().is_empty());
        assert!(!address.is_empty());
        assert_eq!(MacAddress::from_slice(&[1, 2, 3]), None);
    }

    #[test]
    fn test_random() {
        for _ in 0..32 {
            let mac = MacAddress::random();
            assert!(!mac.is_multicast());
            assert!(!mac.is_broadcast());
            assert!(!mac.is_empty());

            let sibling = MacAddress::random_with_oui(&mac);
            assert_eq!(sibling.oui(), mac.oui());
        }
    }
}
