//! Penalty structures and the penalty kind catalog

use serde::{Deserialize, Serialize};

/// Kind of infraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PenaltyKind {
    Warning,
    LateArrival,
    ZoneViolation,
    EquipmentViolation,
    CatchViolation,
    SafetyViolation,
    Unsportsmanlike,
    RuleViolation,
    Disqualification,
}

impl PenaltyKind {
    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "WARNING" => Some(PenaltyKind::Warning),
            "LATE_ARRIVAL" => Some(PenaltyKind::LateArrival),
            "ZONE_VIOLATION" => Some(PenaltyKind::ZoneViolation),
            "EQUIPMENT_VIOLATION" => Some(PenaltyKind::EquipmentViolation),
            "CATCH_VIOLATION" => Some(PenaltyKind::CatchViolation),
            "SAFETY_VIOLATION" => Some(PenaltyKind::SafetyViolation),
            "UNSPORTSMANLIKE" => Some(PenaltyKind::Unsportsmanlike),
            "RULE_VIOLATION" => Some(PenaltyKind::RuleViolation),
            "DISQUALIFICATION" => Some(PenaltyKind::Disqualification),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            PenaltyKind::Warning => "WARNING",
            PenaltyKind::LateArrival => "LATE_ARRIVAL",
            PenaltyKind::ZoneViolation => "ZONE_VIOLATION",
            PenaltyKind::EquipmentViolation => "EQUIPMENT_VIOLATION",
            PenaltyKind::CatchViolation => "CATCH_VIOLATION",
            PenaltyKind::SafetyViolation => "SAFETY_VIOLATION",
            PenaltyKind::Unsportsmanlike => "UNSPORTSMANLIKE",
            PenaltyKind::RuleViolation => "RULE_VIOLATION",
            PenaltyKind::Disqualification => "DISQUALIFICATION",
        }
    }

    /// Default point deduction per the race regulations
    pub fn default_points(&self) -> i32 {
        match self {
            PenaltyKind::Warning => 0,
            PenaltyKind::LateArrival => 10,
            PenaltyKind::ZoneViolation => 25,
            PenaltyKind::EquipmentViolation => 15,
            PenaltyKind::CatchViolation => 20,
            PenaltyKind::SafetyViolation => 30,
            PenaltyKind::Unsportsmanlike => 50,
            PenaltyKind::RuleViolation => 20,
            PenaltyKind::Disqualification => 0,
        }
    }

    /// Disqualification excludes the participant outright
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, PenaltyKind::Disqualification)
    }
}

/// Lifecycle of an issued penalty (penalties can be appealed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PenaltyStatus {
    #[default]
    Active,
    Appealed,
    Upheld,
    Overturned,
}

impl PenaltyStatus {
    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Some(PenaltyStatus::Active),
            "APPEALED" => Some(PenaltyStatus::Appealed),
            "UPHELD" => Some(PenaltyStatus::Upheld),
            "OVERTURNED" => Some(PenaltyStatus::Overturned),
            _ => None,
        }
    }

    /// Only active and upheld penalties count against standings
    #[inline]
    pub fn counts_against_standings(&self) -> bool {
        matches!(self, PenaltyStatus::Active | PenaltyStatus::Upheld)
    }
}

/// An issued penalty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    pub participant_id: String,
    pub kind: PenaltyKind,
    /// Deducted points; defaults to the kind's regulation value
    pub points: i32,
    #[serde(default)]
    pub status: PenaltyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Catalog entry describing a penalty kind to the host UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyPreset {
    pub kind: PenaltyKind,
    pub label: &'static str,
    pub description: &'static str,
    pub default_points: i32,
    pub is_terminal: bool,
}

/// The full penalty kind catalog, in regulation order
pub const PENALTY_PRESETS: &[PenaltyPreset] = &[
    PenaltyPreset {
        kind: PenaltyKind::Warning,
        label: "Ammonizione",
        description: "Avvertimento formale senza detrazione punti",
        default_points: 0,
        is_terminal: false,
    },
    PenaltyPreset {
        kind: PenaltyKind::LateArrival,
        label: "Ritardo Partenza",
        description: "Ritardo all'orario di partenza della gara",
        default_points: 10,
        is_terminal: false,
    },
    PenaltyPreset {
        kind: PenaltyKind::ZoneViolation,
        label: "Violazione Zona",
        description: "Pesca fuori dalla zona consentita",
        default_points: 25,
        is_terminal: false,
    },
    PenaltyPreset {
        kind: PenaltyKind::EquipmentViolation,
        label: "Attrezzatura Non Conforme",
        description: "Utilizzo di attrezzatura non regolamentare",
        default_points: 15,
        is_terminal: false,
    },
    PenaltyPreset {
        kind: PenaltyKind::CatchViolation,
        label: "Cattura Non Conforme",
        description: "Cattura sottomisura o specie non ammessa",
        default_points: 20,
        is_terminal: false,
    },
    PenaltyPreset {
        kind: PenaltyKind::SafetyViolation,
        label: "Violazione Sicurezza",
        description: "Mancato rispetto norme di sicurezza",
        default_points: 30,
        is_terminal: false,
    },
    PenaltyPreset {
        kind: PenaltyKind::Unsportsmanlike,
        label: "Comportamento Antisportivo",
        description: "Condotta non conforme allo spirito sportivo",
        default_points: 50,
        is_terminal: false,
    },
    PenaltyPreset {
        kind: PenaltyKind::RuleViolation,
        label: "Violazione Regolamento",
        description: "Altra violazione del regolamento di gara",
        default_points: 20,
        is_terminal: false,
    },
    PenaltyPreset {
        kind: PenaltyKind::Disqualification,
        label: "Squalifica",
        description: "Esclusione dalla gara per grave infrazione",
        default_points: 0,
        is_terminal: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_catalog_consistent() {
        assert_eq!(PENALTY_PRESETS.len(), 9);
        for preset in PENALTY_PRESETS {
            assert_eq!(preset.default_points, preset.kind.default_points());
            assert_eq!(preset.is_terminal, preset.kind.is_terminal());
        }
    }

    #[test]
    fn test_status_counting() {
        assert!(PenaltyStatus::Active.counts_against_standings());
        assert!(PenaltyStatus::Upheld.counts_against_standings());
        assert!(!PenaltyStatus::Appealed.counts_against_standings());
        assert!(!PenaltyStatus::Overturned.counts_against_standings());
    }

    #[test]
    fn test_kind_keys() {
        assert_eq!(
            PenaltyKind::from_key("zone_violation"),
            Some(PenaltyKind::ZoneViolation)
        );
        assert_eq!(PenaltyKind::from_key("FINE"), None);
        assert!(PenaltyKind::Disqualification.is_terminal());
    }

    #[test]
    fn test_penalty_serde() {
        let json = r#"{"participantId":"team-7","kind":"LATE_ARRIVAL","points":10}"#;
        let p: Penalty = serde_json::from_str(json).unwrap();
        assert_eq!(p.kind, PenaltyKind::LateArrival);
        assert_eq!(p.status, PenaltyStatus::Active);
    }
}
