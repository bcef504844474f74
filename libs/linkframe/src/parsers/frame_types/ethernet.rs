use nom::combinator::{map, peek};
use nom::number::complete::be_u16;
use nom::sequence::pair;

use super::split_fcs;
use crate::error::Error;
use crate::frame::{EthernetFrame, MIN_FRAME_SIZE};
use crate::frame_types::EtherType;
use crate::options::ParseOptions;
use crate::parsers::{parse_mac, parse_tag_8021q};

/// Parse an [EthernetFrame] from raw bytes, FCS included.
///
/// After the two addresses comes a 16 bit discriminator. If it is [EtherType::VLAN], it is the
/// TPID of an 802.1Q tag and the real EtherType follows the TCI. Otherwise it is the EtherType.
/// Everything between the EtherType and the last 4 bytes is payload.
pub fn parse_ethernet_frame(input: &[u8], options: &ParseOptions) -> Result<EthernetFrame, Error> {
    let (body, fcs) = split_fcs(input, MIN_FRAME_SIZE, options)?;

    let (remaining, (destination, source)) = pair(parse_mac, parse_mac)(body)?;

    let (_, discriminator) = peek(be_u16)(remaining)?;
    let (remaining, tag) = if discriminator == EtherType::VLAN.0 {
        map(parse_tag_8021q, Some)(remaining)?
    } else {
        (remaining, None)
    };

    let (payload, ether_type) = be_u16(remaining)?;

    Ok(EthernetFrame {
        destination,
        source,
        tag,
        ether_type: EtherType(ether_type),
        payload: payload.to_vec(),
        fcs,
    })
}
