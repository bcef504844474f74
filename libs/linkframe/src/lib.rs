/// Frame check sequence computation and verification.
pub mod checksum;
/// Linkframe's own [Error](error::Error) implementation
pub mod error;
/// The [Frame](frame::Frame) enum, both frame structs and their components.
pub mod frame;
/// Enums and newtypes for frame types, EtherTypes and priorities.
mod frame_types;
/// Decoding knobs for the unmarshal functions.
mod options;
/// [nom] parsers for internal usage.
pub mod parsers;
/// All traits used or provided by this library.
mod traits;

use crate::error::Error;
use crate::parsers::*;

// Re-exports for user convenience
pub use crate::checksum::{compute_fcs, verify_fcs};
pub use crate::frame::Frame;
pub use crate::frame_types::*;
pub use crate::options::{HeaderLayout, ParseOptions};
pub use crate::traits::*;

/// Parse a frame of the given link type from raw bytes, FCS included.
///
/// The FCS isn't verified, see [parse_frame_with] and [ParseOptions::verify_fcs].
pub fn parse_frame(input: &[u8], link_type: LinkType) -> Result<Frame, Error> {
    parse_frame_with(input, link_type, &ParseOptions::default())
}

pub fn parse_frame_with(
    input: &[u8],
    link_type: LinkType,
    options: &ParseOptions,
) -> Result<Frame, Error> {
    match link_type {
        LinkType::Ethernet => Ok(Frame::Ethernet(parse_ethernet_frame(input, options)?)),
        LinkType::Ieee80211 => Ok(Frame::Ieee80211(parse_80211_frame(input, options)?)),
    }
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
