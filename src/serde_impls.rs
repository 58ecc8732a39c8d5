//! `serde` integration.
//!
//! A bare `LifeCell<T>` cannot be serialized: it does not know whether it
//! holds a value. The occupancy views can, and serialize exactly as `T`.
//! Deserializing a `LifeCell<T>` always produces an occupied cell; on error no
//! cell is produced.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{LifeCell, Occupied, OccupiedRef};

impl<T: Serialize> Serialize for OccupiedRef<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<T: Serialize> Serialize for Occupied<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LifeCell<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        LifeCell::try_new_with(|| T::deserialize(deserializer))
    }
}

impl<T> LifeCell<T> {
    /// Starts the lifetime of a value read from `deserializer`.
    ///
    /// # Errors
    /// Returns the deserializer's error; the cell is untouched.
    pub fn construct_deserialized<'de, D>(
        &mut self,
        deserializer: D,
    ) -> Result<Occupied<'_, T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        self.try_construct_with(|| T::deserialize(deserializer))
    }
}
