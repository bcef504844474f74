use nom::number::complete::be_u16;
use nom::sequence::pair;
use nom::IResult;

use crate::frame::components::Tag8021Q;

/// Parse a 4 byte 802.1Q tag: TPID followed by TCI.
pub fn parse_tag_8021q(input: &[u8]) -> IResult<&[u8], Tag8021Q> {
    let (remaining, (tpid, tci)) = pair(be_u16, be_u16)(input)?;
    Ok((remaining, Tag8021Q { tpid, tci }))
}
