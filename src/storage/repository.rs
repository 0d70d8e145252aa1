//! Typed access to the persisted counter state and marker.
//!
//! Stored layout:
//! - `buttonData`: `{ "counts": [n, n, n, n], "timestamps": { "0": [..], "1": [..], "2": [..], "3": [..] } }`
//! - `videoMarker`: the marker time as a decimal string
//!
//! Counts may be written as whole floats (`1.0`) and `timestamps` may be
//! `null`; anything else malformed loads as defaults.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

use super::{KeyValueStore, StoreError};
use crate::state::{Marker, Tally, CATEGORY_COUNT};

pub const COUNTS_KEY: &str = "buttonData";
pub const MARKER_KEY: &str = "videoMarker";

#[derive(Debug, Serialize, Deserialize)]
struct StoredTally {
    counts: Vec<Number>,
    #[serde(default)]
    timestamps: Option<BTreeMap<String, Vec<f64>>>,
}

impl From<&Tally> for StoredTally {
    fn from(tally: &Tally) -> Self {
        let counts = tally.counts().iter().map(|&count| Number::from(count)).collect();
        let timestamps = crate::state::Category::ALL
            .iter()
            .map(|&category| (category.index().to_string(), tally.timestamps(category).to_vec()))
            .collect();
        Self {
            counts,
            timestamps: Some(timestamps),
        }
    }
}

/// A count must be a non-negative whole number that fits in `u32`.
fn count_from_number(value: &Number) -> Option<u32> {
    if let Some(count) = value.as_u64() {
        return u32::try_from(count).ok();
    }
    let float = value.as_f64()?;
    if float.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&float) {
        Some(float as u32)
    } else {
        None
    }
}

impl StoredTally {
    fn into_tally(self) -> Result<Tally, String> {
        if self.counts.len() != CATEGORY_COUNT {
            return Err(format!("expected {} counts, found {}", CATEGORY_COUNT, self.counts.len()));
        }
        let mut counts = [0u32; CATEGORY_COUNT];
        for (slot, value) in counts.iter_mut().zip(&self.counts) {
            *slot = count_from_number(value).ok_or_else(|| format!("count out of range: {}", value))?;
        }

        let mut timestamps: [Vec<f64>; CATEGORY_COUNT] = Default::default();
        for (key, times) in self.timestamps.unwrap_or_default() {
            match key.parse::<usize>().ok().filter(|&index| index < CATEGORY_COUNT) {
                Some(index) => timestamps[index] = times,
                None => tracing::warn!(key = %key, "Ignoring unknown timestamp category"),
            }
        }
        Ok(Tally::from_parts(counts, timestamps))
    }
}

/// Owns the durable store; the only place that knows the storage keys.
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Load counts and timestamps, falling back to an empty tally.
    pub fn load_tally(&self) -> Tally {
        let Some(json) = self.store.get(COUNTS_KEY) else {
            return Tally::default();
        };
        let parsed = serde_json::from_str::<StoredTally>(&json)
            .map_err(|err| err.to_string())
            .and_then(StoredTally::into_tally);
        match parsed {
            Ok(tally) => tally,
            Err(reason) => {
                tracing::warn!(key = COUNTS_KEY, %reason, "Stored counts are malformed; starting from zero");
                Tally::default()
            }
        }
    }

    pub fn save_tally(&mut self, tally: &Tally) -> Result<(), StoreError> {
        let json = serde_json::to_string(&StoredTally::from(tally))
            .map_err(|source| StoreError::Serialize { source })?;
        self.store.set(COUNTS_KEY, json)
    }

    pub fn load_marker(&self) -> Option<Marker> {
        let value = self.store.get(MARKER_KEY)?;
        let marker = Marker::parse(&value);
        if marker.is_none() {
            tracing::warn!(key = MARKER_KEY, value = %value, "Stored marker is not a number; ignoring it");
        }
        marker
    }

    pub fn save_marker(&mut self, marker: Marker) -> Result<(), StoreError> {
        self.store.set(MARKER_KEY, marker.encode())
    }

    pub fn clear_marker(&mut self) -> Result<(), StoreError> {
        self.store.remove(MARKER_KEY)
    }
}
