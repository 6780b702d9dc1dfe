//! Daily punch records: up to two in/out pairs plus a free-text note.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

use crate::time::interval_minutes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The four daily punch slots, in the fixed order they are filled.
pub enum PunchSlot {
    In1,
    Out1,
    In2,
    Out2,
}

/// Fill order for the punch action.
pub const PUNCH_SLOTS: [PunchSlot; 4] = [
    PunchSlot::In1,
    PunchSlot::Out1,
    PunchSlot::In2,
    PunchSlot::Out2,
];

impl PunchSlot {
    pub fn label(self) -> &'static str {
        match self {
            PunchSlot::In1 => "Entrada 1",
            PunchSlot::Out1 => "Saída 1",
            PunchSlot::In2 => "Entrada 2",
            PunchSlot::Out2 => "Saída 2",
        }
    }
}

impl fmt::Display for PunchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// What a punch does once all four slots of the day are filled.
#[derive(Default)]
pub enum PunchPolicy {
    /// Refuse the punch and report the day as complete.
    #[default]
    Reject,
    /// Replace the last out-time with the new punch.
    Overwrite,
}

impl PunchPolicy {
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "overwrite" => PunchPolicy::Overwrite,
            _ => PunchPolicy::Reject,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PunchPolicy::Reject => "rejeitar",
            PunchPolicy::Overwrite => "sobrescrever última saída",
        }
    }
}

impl fmt::Display for PunchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PunchPolicy::Reject => "reject",
            PunchPolicy::Overwrite => "overwrite",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for PunchPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|v| PunchPolicy::from_str(&v))
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Punches for one (employee, date). Times are kept as the raw `HH:MM` text
/// that was entered; values that fail to parse count as absent in
/// calculations but are preserved for display and correction.
pub struct DayRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DayRecord {
    pub fn slot(&self, slot: PunchSlot) -> Option<&str> {
        match slot {
            PunchSlot::In1 => self.in1.as_deref(),
            PunchSlot::Out1 => self.out1.as_deref(),
            PunchSlot::In2 => self.in2.as_deref(),
            PunchSlot::Out2 => self.out2.as_deref(),
        }
    }

    pub fn set_slot(&mut self, slot: PunchSlot, value: Option<String>) {
        let target = match slot {
            PunchSlot::In1 => &mut self.in1,
            PunchSlot::Out1 => &mut self.out1,
            PunchSlot::In2 => &mut self.in2,
            PunchSlot::Out2 => &mut self.out2,
        };
        *target = value.filter(|v| !v.trim().is_empty());
    }

    /// The next unfilled slot in punch order, or `None` when the day is
    /// complete.
    pub fn next_slot(&self) -> Option<PunchSlot> {
        PUNCH_SLOTS.into_iter().find(|slot| self.slot(*slot).is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.next_slot().is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.in1.is_none()
            && self.out1.is_none()
            && self.in2.is_none()
            && self.out2.is_none()
            && self.note.is_none()
    }

    /// Minutes covered by the two interval pairs. A day with a single punched
    /// interval contributes only that interval.
    pub fn worked_minutes(&self) -> i64 {
        interval_minutes(self.in1.as_deref(), self.out1.as_deref())
            + interval_minutes(self.in2.as_deref(), self.out2.as_deref())
    }
}
