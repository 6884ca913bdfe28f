use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier as sent by the backend. Slot ids are integers today and
/// vehicle ids are free-form strings, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{n}"),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub slot_id: Identifier,
    pub is_occupied: bool,
    #[serde(default)]
    pub vehicle_id: Option<Identifier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotStatus {
    Occupied,
    Vacant,
}

impl SlotStatus {
    pub fn label(self) -> &'static str {
        match self {
            SlotStatus::Occupied => "Occupied",
            SlotStatus::Vacant => "Vacant",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SlotStatus::Occupied => "slot occupied",
            SlotStatus::Vacant => "slot vacant",
        }
    }
}

/// Display model for one slot, independent of any markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardModel {
    pub heading: String,
    pub status: SlotStatus,
    pub vehicle_id: Option<String>,
    pub detail_path: Option<String>,
}
