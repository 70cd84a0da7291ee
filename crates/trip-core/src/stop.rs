//! The `Stop` value type and its partial-update companion.

use std::collections::BTreeMap;

use crate::GeoPoint;

/// One delivery destination.
///
/// `metadata` is free-form string→string data carried verbatim through the
/// trip and into the final summary (package id, customer name, phone,
/// delivery window, …).  `BTreeMap` keeps iteration order deterministic so
/// summaries compare structurally equal across runs.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub title: String,
    pub position: GeoPoint,
    pub metadata: BTreeMap<String, String>,
}

impl Stop {
    pub fn new(title: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            title: title.into(),
            position,
            metadata: BTreeMap::new(),
        }
    }

    /// Builder-style metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A partial update to an existing [`Stop`].
///
/// Present fields overwrite; absent fields are retained.  Metadata is merged
/// key-by-key (patch keys overwrite, other keys survive), matching the
/// upstream SDK's merge semantics for destination updates.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopPatch {
    pub title: Option<String>,
    pub position: Option<GeoPoint>,
    pub metadata: Option<BTreeMap<String, String>>,
}

impl StopPatch {
    /// A patch that only moves the stop.
    pub fn position(position: GeoPoint) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// A patch that only merges metadata.
    pub fn metadata(metadata: BTreeMap<String, String>) -> Self {
        Self {
            metadata: Some(metadata),
            ..Self::default()
        }
    }

    /// Apply the patch to `stop` in place.
    pub fn apply_to(&self, stop: &mut Stop) {
        if let Some(title) = &self.title {
            stop.title = title.clone();
        }
        if let Some(position) = self.position {
            stop.position = position;
        }
        if let Some(metadata) = &self.metadata {
            for (k, v) in metadata {
                stop.metadata.insert(k.clone(), v.clone());
            }
        }
    }
}
