//! Per-date adjustments that replace the schedule-derived expectation.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Why the expectation for a date was replaced.
///
/// The category variants zero the expected minutes; `Ajuste` pins them to an
/// explicit value.
pub enum AdjustmentKind {
    Folga,
    Ferias,
    Atestado,
    Falta,
    Compensacao,
    Ajuste { minutes: u32 },
}

/// The category tags offered by the adjustments menu.
pub const ADJUSTMENT_CATEGORIES: [AdjustmentKind; 5] = [
    AdjustmentKind::Folga,
    AdjustmentKind::Ferias,
    AdjustmentKind::Atestado,
    AdjustmentKind::Falta,
    AdjustmentKind::Compensacao,
];

impl AdjustmentKind {
    /// Stable lowercase tag, as persisted and as exported in CSV.
    pub fn tag(&self) -> &'static str {
        match self {
            AdjustmentKind::Folga => "folga",
            AdjustmentKind::Ferias => "ferias",
            AdjustmentKind::Atestado => "atestado",
            AdjustmentKind::Falta => "falta",
            AdjustmentKind::Compensacao => "compensacao",
            AdjustmentKind::Ajuste { .. } => "ajuste",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentKind::Folga => "Folga",
            AdjustmentKind::Ferias => "Férias",
            AdjustmentKind::Atestado => "Atestado",
            AdjustmentKind::Falta => "Falta",
            AdjustmentKind::Compensacao => "Compensação",
            AdjustmentKind::Ajuste { .. } => "Ajuste de previsto",
        }
    }
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Overrides the expected minutes for one (employee, date).
pub struct DayAdjustment {
    #[serde(flatten)]
    pub kind: AdjustmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DayAdjustment {
    pub fn new(kind: AdjustmentKind) -> Self {
        Self { kind, note: None }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = (!note.trim().is_empty()).then_some(note);
        self
    }

    /// The expectation this adjustment imposes: 0 for category tags, the
    /// stored value for an explicit override.
    pub fn expected_minutes(&self) -> i64 {
        match self.kind {
            AdjustmentKind::Ajuste { minutes } => i64::from(minutes),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_zero_the_expectation() {
        for kind in ADJUSTMENT_CATEGORIES {
            assert_eq!(DayAdjustment::new(kind).expected_minutes(), 0);
        }
    }

    #[test]
    fn explicit_override_keeps_its_value() {
        let adjustment = DayAdjustment::new(AdjustmentKind::Ajuste { minutes: 240 });
        assert_eq!(adjustment.expected_minutes(), 240);
    }

    #[test]
    fn category_serializes_as_a_tag_object() {
        let adjustment = DayAdjustment::new(AdjustmentKind::Falta).with_note("sem aviso");
        let json = serde_json::to_value(&adjustment).unwrap();
        assert_eq!(json["type"], "falta");
        assert_eq!(json["note"], "sem aviso");

        let back: DayAdjustment = serde_json::from_value(json).unwrap();
        assert_eq!(back, adjustment);
    }

    #[test]
    fn override_serializes_with_minutes() {
        let adjustment = DayAdjustment::new(AdjustmentKind::Ajuste { minutes: 300 });
        let json = serde_json::to_value(&adjustment).unwrap();
        assert_eq!(json["type"], "ajuste");
        assert_eq!(json["minutes"], 300);
    }

    #[test]
    fn blank_notes_are_dropped() {
        let adjustment = DayAdjustment::new(AdjustmentKind::Folga).with_note("   ");
        assert_eq!(adjustment.note, None);
    }
}
