use nom::combinator::map;
use nom::number::complete::be_u16;
use nom::IResult;

use crate::frame::components::SequenceControl;

/// Parse a [SequenceControl] word: fragment number in the low 4 bits, sequence number above.
pub fn parse_sequence_control(input: &[u8]) -> IResult<&[u8], SequenceControl> {
    map(be_u16, SequenceControl::from_bits)(input)
}
