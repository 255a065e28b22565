//! Catch record structures

use serde::{Deserialize, Serialize};

/// Review status of a submitted catch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatchStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CatchStatus {
    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(CatchStatus::Pending),
            "APPROVED" => Some(CatchStatus::Approved),
            "REJECTED" => Some(CatchStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            CatchStatus::Pending => "PENDING",
            CatchStatus::Approved => "APPROVED",
            CatchStatus::Rejected => "REJECTED",
        }
    }
}

/// A catch submitted by a participant
///
/// `release_verified` means a judge confirmed the release video; the bonus
/// multiplier only applies when both `released` and `release_verified` hold.
/// `points` is frozen at approval time and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchRecord {
    pub id: String,
    pub participant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_name: Option<String>,
    pub species_id: String,
    pub length_cm: f64,
    #[serde(default)]
    pub released: bool,
    #[serde(default)]
    pub release_verified: bool,
    #[serde(default)]
    pub status: CatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
}
