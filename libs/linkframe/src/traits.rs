use enum_dispatch::enum_dispatch;
use log::trace;

use crate::checksum::compute_fcs;
use crate::frame::components::MacAddress;
use crate::frame::*;

/// Helper trait to easily access source, destination and bssid on frames.
#[enum_dispatch]
pub trait Addresses {
    /// Returns the sender of the Frame.
    /// A 802.11 WDS frame without a fourth address has none.
    fn src(&self) -> Option<&MacAddress>;

    /// Returns the final destination of the Frame.
    /// A full `ff:ff:..` usually indicates a undirected broadcast.
    fn dest(&self) -> &MacAddress;

    /// Only 802.11 frames belong to a BSS.
    fn bssid(&self) -> Option<&MacAddress>;
}

/// Everything that can be turned into wire bytes terminated by an FCS.
///
/// Implementors only describe their layout, the checksum placement is shared.
#[enum_dispatch]
pub trait WireFrame {
    /// Exact number of bytes [WireFrame::marshal] produces, FCS included.
    fn size(&self) -> usize;

    /// Append every byte that precedes the FCS to `buf`.
    fn encode_body(&self, buf: &mut Vec<u8>);

    /// The FCS as last marshaled or unmarshaled. Not verified.
    fn fcs(&self) -> [u8; 4];

    fn set_fcs(&mut self, fcs: [u8; 4]);

    /// Compute the FCS of the current field values without touching the stored one.
    fn compute_fcs(&self) -> [u8; 4] {
        let mut buf = Vec::with_capacity(self.size());
        self.encode_body(&mut buf);
        compute_fcs(&buf)
    }

    /// Append the complete frame to a caller owned buffer.
    ///
    /// The freshly computed FCS is written to the wire and stored on the frame.
    /// Reusing `buf` between calls avoids an allocation per frame.
    fn marshal_into(&mut self, buf: &mut Vec<u8>) {
        let start = buf.len();
        buf.reserve(self.size());

        self.encode_body(buf);
        let fcs = compute_fcs(&buf[start..]);
        buf.extend_from_slice(&fcs);
        self.set_fcs(fcs);

        trace!("Marshaled {} byte frame, fcs {:02x?}", buf.len() - start, fcs);
    }

    /// Serialize the frame into a new buffer, see [WireFrame::marshal_into].
    fn marshal(&mut self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.size());
        self.marshal_into(&mut buf);
        buf
    }
}
