use std::{collections::BTreeMap, fmt::Write, path::Path};

use tracing::debug;

use crate::{
    error::{NotFound, StoreError},
    location::Location,
};

/// Named locations, kept sorted by name so listings are stable.
///
/// The file format is a single JSON object mapping each name to `{"X": .., "Y": .., "Z": ..}`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LocationStore {
    locations: BTreeMap<String, Location>,
}

impl LocationStore {
    pub fn new() -> LocationStore {
        LocationStore {
            locations: BTreeMap::new(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<LocationStore, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_owned(),
            source,
        })?;
        let store = serde_json::from_str::<LocationStore>(&json).map_err(|source| StoreError::Decode {
            path: path.to_owned(),
            source,
        })?;
        debug!("loaded {} locations from {}", store.len(), path.display());
        Ok(store)
    }

    /// Overwrites the file in place. A crash halfway through the write leaves a truncated file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some((name, _)) = self.locations.iter().find(|(_, location)| !location.is_finite()) {
            return Err(StoreError::NonFinite { name: name.clone() });
        }
        let json = serde_json::to_string_pretty(self).map_err(StoreError::Encode)?;
        std::fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.to_owned(),
            source,
        })?;
        debug!("saved {} locations to {}", self.len(), path.display());
        Ok(())
    }

    /// Inserts or overwrites, returning the previous location stored under `name`.
    pub fn set(&mut self, name: impl Into<String>, location: Location) -> Option<Location> {
        self.locations.insert(name.into(), location)
    }

    pub fn delete(&mut self, name: &str) -> Result<Location, NotFound> {
        self.locations.remove(name).ok_or_else(|| NotFound { name: name.to_owned() })
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.locations.iter().map(|(name, location)| (name.as_str(), location))
    }

    /// One fixed-width line per location, e.g. `"         A:    1.00,    2.00,    3.00\n"`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, location) in self.iter() {
            // writing into a String cannot fail
            let _ = writeln!(out, "{name:>10}: {:>7.2}, {:>7.2}, {:>7.2}", location.x, location.y, location.z);
        }
        out
    }
}
