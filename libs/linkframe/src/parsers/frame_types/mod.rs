use log::debug;

use crate::checksum::{verify_fcs, FCS_LEN};
use crate::error::Error;
use crate::options::ParseOptions;

use super::clone_slice;

mod ethernet;
mod ieee80211;

pub use ethernet::parse_ethernet_frame;
pub use ieee80211::parse_80211_frame;

/// Make sure `input` holds at least `needed` bytes, then split off the trailing FCS.
///
/// The FCS is only compared against the content if the options ask for it.
fn split_fcs<'a>(
    input: &'a [u8],
    needed: usize,
    options: &ParseOptions,
) -> Result<(&'a [u8], [u8; 4]), Error> {
    if input.len() < needed {
        debug!(
            "Rejecting truncated frame: {} bytes, at least {needed} required",
            input.len()
        );
        return Err(Error::Truncated {
            needed,
            actual: input.len(),
        });
    }

    if options.verify_fcs {
        verify_fcs(input)?;
    }

    let (body, fcs) = input.split_at(input.len() - FCS_LEN);
    Ok((body, clone_slice::<4>(fcs)))
}
