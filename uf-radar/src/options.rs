//! Read options and the `UfSource` input abstraction (spec §4.4, §6).

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Result, UfError};

/// Where [`crate::read_uf`] reads bytes from: a filesystem path, or any
/// already-open readable stream.
///
/// Grounded in the dual path/stream constructor pattern `gadomski-las-rs`
/// uses for its own `Reader`.
pub enum UfSource {
    Path(PathBuf),
    Reader(Box<dyn Read>),
}

impl UfSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }

    /// Resolve to a boxed `Read`, opening the file if this is a path.
    pub(crate) fn into_reader(self) -> Result<Box<dyn Read>> {
        match self {
            Self::Path(path) => Ok(Box::new(File::open(&path)?)),
            Self::Reader(reader) => Ok(reader),
        }
    }
}

/// Options controlling how a volume is assembled from decoded rays.
///
/// Deliberately small: UF carries no per-file configuration of its own, so
/// these mirror what the reference Python implementation exposes as keyword
/// arguments (spec §6).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ReadOptions {
    /// Maps a raw 2-character UF tag to a friendlier field name in the
    /// produced [`crate::model::MomentData`] map.
    pub field_names: HashMap<String, String>,

    /// When `true`, every field is keyed by its raw 2-byte UF tag and
    /// `field_names` is ignored entirely (spec §6).
    pub file_field_names: bool,

    /// Tags to drop entirely from the produced moments map.
    pub exclude_fields: HashSet<String>,

    /// Accepted and parsed, but not otherwise interpreted — mirrors the
    /// reference implementation's no-op `**kwargs` acceptance.
    pub additional_metadata: Option<serde_json::Value>,
}

impl ReadOptions {
    /// Parse options from an untyped JSON-like value, rejecting unknown
    /// keys so a caller building options dynamically gets `InvalidOption`
    /// instead of a silently ignored typo.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| UfError::InvalidOption(e.to_string()))
    }

    /// The field name to expose a decoded tag under, honoring
    /// `file_field_names` and `field_names`.
    pub fn resolve_name<'a>(&'a self, tag: &'a str) -> &'a str {
        if self.file_field_names {
            return tag;
        }
        self.field_names.get(tag).map(String::as_str).unwrap_or(tag)
    }

    pub fn is_excluded(&self, tag: &str) -> bool {
        self.exclude_fields.contains(tag)
    }
}
