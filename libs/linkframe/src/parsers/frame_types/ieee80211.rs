use nom::combinator::cond;
use nom::number::complete::{be_u16, be_u32};
use nom::sequence::tuple;

use super::split_fcs;
use crate::checksum::FCS_LEN;
use crate::error::Error;
use crate::frame::components::FrameControl;
use crate::frame::{Frame80211, BASE_HEADER_LEN};
use crate::frame_types::FrameType;
use crate::options::{HeaderLayout, ParseOptions};
use crate::parsers::{parse_frame_control, parse_mac, parse_sequence_control};

/// Which of the optional header fields are expected on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OptionalFields {
    sequence_control: bool,
    address_4: bool,
    qos_control: bool,
    ht_control: bool,
}

impl OptionalFields {
    fn new(layout: HeaderLayout, frame_control: &FrameControl) -> Self {
        match layout {
            HeaderLayout::Superset => OptionalFields {
                sequence_control: true,
                address_4: true,
                qos_control: false,
                ht_control: false,
            },
            HeaderLayout::FrameControl => {
                let qos_control = frame_control.is_qos();
                OptionalFields {
                    sequence_control: frame_control.frame_type != FrameType::Control,
                    address_4: frame_control.to_ds() && frame_control.from_ds(),
                    qos_control,
                    ht_control: frame_control.order()
                        && (qos_control || frame_control.frame_type == FrameType::Management),
                }
            }
        }
    }

    fn header_len(&self) -> usize {
        let mut len = BASE_HEADER_LEN;
        if self.sequence_control {
            len += 2;
        }
        if self.address_4 {
            len += 6;
        }
        if self.qos_control {
            len += 2;
        }
        if self.ht_control {
            len += 4;
        }
        len
    }
}

/// Parse a [Frame80211] from raw bytes, FCS included.
///
/// With the default [HeaderLayout::Superset] sequence control and the fourth address are
/// always decoded, which makes the smallest accepted frame 34 bytes long.
pub fn parse_80211_frame(input: &[u8], options: &ParseOptions) -> Result<Frame80211, Error> {
    // The frame control decides the header length, but it needs to be there first.
    let (_, frame_control) = match parse_frame_control(input) {
        Ok(parsed) => parsed,
        Err(_) => {
            return Err(Error::Truncated {
                needed: BASE_HEADER_LEN + FCS_LEN,
                actual: input.len(),
            })
        }
    };
    let fields = OptionalFields::new(options.layout, &frame_control);

    let (body, fcs) = split_fcs(input, fields.header_len() + FCS_LEN, options)?;

    let (remaining, (frame_control, duration, address_1, address_2, address_3)) = tuple((
        parse_frame_control,
        be_u16,
        parse_mac,
        parse_mac,
        parse_mac,
    ))(body)?;

    let (remaining, sequence_control) =
        cond(fields.sequence_control, parse_sequence_control)(remaining)?;
    let (remaining, address_4) = cond(fields.address_4, parse_mac)(remaining)?;
    let (remaining, qos_control) = cond(fields.qos_control, be_u16)(remaining)?;
    let (payload, ht_control) = cond(fields.ht_control, be_u32)(remaining)?;

    Ok(Frame80211 {
        frame_control,
        duration,
        address_1,
        address_2,
        address_3,
        sequence_control,
        address_4,
        qos_control,
        ht_control,
        payload: payload.to_vec(),
        fcs,
    })
}
