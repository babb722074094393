//! Byte-exact Universal Format structures (Appendix C of the 1980 AMS report).
//!
//! Every structure here maps directly onto a fixed run of big-endian 16-bit
//! words, decoded with [`byteorder`]. Offsets recorded inside these
//! structures are 1-based word offsets from the start of the record; callers
//! convert with [`word_offset_to_byte_index`] and bounds-check before
//! dereferencing, as spec §4.2 requires.

mod field_header;
mod fsi;
mod headers;

pub use field_header::{FieldHeader, FieldPosition};
pub use fsi::Fsi;
pub use headers::{DataHeader, MandatoryHeader, OptionalHeader};

/// Convert a 1-based 16-bit-word offset into a 0-based byte index.
pub fn word_offset_to_byte_index(word_offset: i16) -> Option<usize> {
    if word_offset < 1 {
        return None;
    }
    Some((word_offset as usize - 1) * 2)
}
