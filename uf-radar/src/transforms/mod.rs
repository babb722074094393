//! Geometric transforms used by (or layered on top of) the decoder.
//!
//! `dms` is load-bearing: the mandatory header's latitude/longitude are
//! decoded through it on every ray. `georeference` is supplemental — it is
//! never called by [`crate::read_uf`] itself, but is kept available for
//! callers who want per-gate geographic coordinates from the polar geometry
//! the decoder already exposes.

pub mod dms;
pub mod georeference;

pub use georeference::{beam_height_and_ground_range, gate_lat_lon};
