//! Aggregation of decoded [`crate::ray::Ray`]s into the produced volume
//! (spec §4.3 "VolumeAssembler"), generalized from `radish`'s per-format
//! backend trait down to this single format's assembler.

mod volume;

pub use volume::assemble;
