//! Helpers that only lean on the standard library plus a couple of small encoding crates:
//! bit and byte conversions, base64/hex, sequence padding, text cleanup, rounding, version
//! strings and a few small collections.

#![forbid(unsafe_code)]

pub mod binary;
pub mod bind;
pub mod collections;
pub mod encoding;
pub mod fsutil;
pub mod number;
pub mod seq;
pub mod text;
pub mod version;

pub use binary::{BinaryError, BitField};
pub use bind::{Accessors, AccessorsBuilder, BindError, bind};
pub use collections::{CaseInsensitiveMap, DictSerializer, PrioQueue};
pub use encoding::Base64;
pub use fsutil::TempChdir;
pub use version::Version;
