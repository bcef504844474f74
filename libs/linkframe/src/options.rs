use derive_setters::Setters;

/// How the optional 802.11 header fields are located when decoding.
///
/// Marshaling always writes exactly the fields that are present on the frame. Decoding can't
/// see which ones were written, so it has to assume a layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeaderLayout {
    /// Sequence control and the fourth address are always read, QoS and HT control never.
    /// This is the 30 byte header every frame with all four addresses has.
    #[default]
    Superset,
    /// Derive presence from the frame control word:
    /// - sequence control unless it's a control frame
    /// - the fourth address if both `to_ds` and `from_ds` are set
    /// - QoS control for QoS data subtypes
    /// - HT control if the order bit is set on a QoS data or management frame
    FrameControl,
}

/// Knobs for the unmarshal functions.
///
/// The default decodes exactly like [EthernetFrame::unmarshal](crate::frame::EthernetFrame::unmarshal)
/// and [Frame80211::unmarshal](crate::frame::Frame80211::unmarshal).
///
/// ```
/// use linkframe::{HeaderLayout, ParseOptions};
///
/// let options = ParseOptions::default()
///     .layout(HeaderLayout::FrameControl)
///     .verify_fcs(true);
/// assert!(options.verify_fcs);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Setters)]
pub struct ParseOptions {
    /// Only used for 802.11 frames.
    pub layout: HeaderLayout,
    /// Reject frames whose trailing FCS doesn't match their content.
    pub verify_fcs: bool,
}
