mod frame_control;
mod mac_address;
mod sequence_control;
mod tag_8021q;

pub use frame_control::{
    decode_80211_frame_control, encode_80211_frame_control, flags, FrameControl,
    FrameControlFields,
};
pub use mac_address::*;
pub use sequence_control::{decode_sequence_control, encode_sequence_control, SequenceControl};
pub use tag_8021q::{decode_8021q_tci, encode_8021q_tci, Tag8021Q, NATIVE_VLAN};
