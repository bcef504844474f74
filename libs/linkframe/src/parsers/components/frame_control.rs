use nom::combinator::map;
use nom::number::complete::be_u16;
use nom::IResult;

use crate::frame::components::FrameControl;

/// Parse the frame control of a frame.
/// The format is the same for ALL 802.11 frames and decides how the rest is laid out.
pub fn parse_frame_control(input: &[u8]) -> IResult<&[u8], FrameControl> {
    map(be_u16, FrameControl::from_bits)(input)
}
