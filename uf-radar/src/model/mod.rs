//! The decoded, caller-facing data model: what [`crate::read_uf`] returns.
//!
//! Structured after CfRadial2-style volume/sweep/moment layering (spec §6's
//! "Produced object" contract): a [`VolumeData`] owns a sequence of
//! [`SweepData`], each carrying its own [`Coordinates`] and a name-keyed map
//! of [`MomentData`].

mod coordinates;
mod instrument;
mod moment;
mod sweep;
mod volume;

pub use coordinates::Coordinates;
pub use instrument::InstrumentParameters;
pub use moment::MomentData;
pub use sweep::{SweepData, SweepMetadata};
pub use volume::{VolumeData, VolumeMetadata};
