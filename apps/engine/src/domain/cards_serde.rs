//! Serialization for faces (compact 2-character tokens like "QC", "TH").
//!
//! Suits, ranks and variants derive SCREAMING_SNAKE_CASE names; cards
//! serialize as `{ "id", "suit", "rank" }`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Face;

impl Serialize for Face {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Face {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Face>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
