use crc::{Crc, CRC_32_ISO_HDLC};
use log::debug;

use crate::error::Error;

/// Length of the frame check sequence that terminates every frame.
pub const FCS_LEN: usize = 4;

// CRC-32/ISO-HDLC is the IEEE 802.3 polynomial used for both Ethernet and 802.11.
const CRC_32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Compute the FCS over `data`, in the big-endian order it's written to the wire.
///
/// ```
/// use linkframe::checksum::compute_fcs;
///
/// assert_eq!(compute_fcs(b"123456789"), [0xcb, 0xf4, 0x39, 0x26]);
/// ```
pub fn compute_fcs(data: &[u8]) -> [u8; 4] {
    CRC_32.checksum(data).to_be_bytes()
}

/// Check the trailing FCS of a complete, marshaled frame.
///
/// Unmarshaling never does this on its own. Call it on the raw bytes (or enable
/// [ParseOptions::verify_fcs](crate::ParseOptions)) when integrity matters.
pub fn verify_fcs(frame: &[u8]) -> Result<(), Error> {
    if frame.len() < FCS_LEN {
        return Err(Error::Truncated {
            needed: FCS_LEN,
            actual: frame.len(),
        });
    }

    let (data, fcs_bytes) = frame.split_at(frame.len() - FCS_LEN);
    let expected = CRC_32.checksum(data);
    let actual = u32::from_be_bytes([fcs_bytes[0], fcs_bytes[1], fcs_bytes[2], fcs_bytes[3]]);

    if expected != actual {
        debug!("FCS mismatch on {} byte frame: {expected:08x} != {actual:08x}", frame.len());
        return Err(Error::FcsMismatch { expected, actual });
    }

    Ok(())
}
