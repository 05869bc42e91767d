use progbook_types::RoomName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room naming rules applied while normalizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizerConfig {
    /// Whole-name replacements, e.g. `Janson` → `J.Janson`.
    pub room_aliases: BTreeMap<String, String>,
    /// Prefix replacements, e.g. `AW1` → `AW` turns `AW1.120` into `AW.120`.
    pub room_prefix_aliases: BTreeMap<String, String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            room_aliases: BTreeMap::from([("Janson".to_string(), "J.Janson".to_string())]),
            room_prefix_aliases: BTreeMap::from([("AW1".to_string(), "AW".to_string())]),
        }
    }
}

impl NormalizerConfig {
    /// The building-map name of `room`. Exact aliases win over prefixes; the
    /// longest matching prefix is used.
    pub fn canonical_room(&self, room: &str) -> RoomName {
        let room = room.trim();
        if let Some(alias) = self.room_aliases.get(room) {
            return RoomName::from(alias.as_str());
        }
        let prefix = self
            .room_prefix_aliases
            .iter()
            .filter(|(prefix, _)| room.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len());
        match prefix {
            Some((from, to)) => RoomName::from(format!("{}{}", to, &room[from.len()..])),
            None => RoomName::from(room),
        }
    }
}
