//! Species scoring entry structures

use serde::{Deserialize, Serialize};

/// Default catch & release bonus multiplier (+50% on a verified release)
pub const DEFAULT_CATCH_RELEASE_BONUS: f64 = 1.5;

fn default_catch_release_bonus() -> f64 {
    DEFAULT_CATCH_RELEASE_BONUS
}

/// Size class of a measured catch (S/M/L/XL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeClass {
    pub fn as_key(&self) -> &'static str {
        match self {
            SizeClass::Small => "S",
            SizeClass::Medium => "M",
            SizeClass::Large => "L",
            SizeClass::ExtraLarge => "XL",
        }
    }
}

/// Per-species scoring configuration for a catch & release tournament
///
/// Serialized with the field names the host backend stores (`speciesId`,
/// `pointsSmall`, ...). Point tiers are expected to ascend S ≤ M ≤ L ≤ XL and
/// thresholds to ascend S < M < L, but neither ordering is enforced:
/// operators may author non-monotonic curves and the backend accepts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesScoring {
    pub species_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_name: Option<String>,
    pub points_small: i32,
    pub points_medium: i32,
    pub points_large: i32,
    pub points_extra_large: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_small_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_medium_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_large_cm: Option<f64>,
    #[serde(default = "default_catch_release_bonus")]
    pub catch_release_bonus: f64,
    #[serde(default)]
    pub is_custom: bool,
}

impl SpeciesScoring {
    /// Point value for a size class
    #[inline]
    pub fn points_for(&self, class: SizeClass) -> i32 {
        match class {
            SizeClass::Small => self.points_small,
            SizeClass::Medium => self.points_medium,
            SizeClass::Large => self.points_large,
            SizeClass::ExtraLarge => self.points_extra_large,
        }
    }

    /// Boundary a catch must reach to be promoted OUT of a size class.
    /// ExtraLarge has no upper boundary.
    #[inline]
    pub fn threshold_for(&self, class: SizeClass) -> Option<f64> {
        match class {
            SizeClass::Small => self.threshold_small_cm,
            SizeClass::Medium => self.threshold_medium_cm,
            SizeClass::Large => self.threshold_large_cm,
            SizeClass::ExtraLarge => None,
        }
    }
}

/// Editable numeric field of a scoring entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringField {
    PointsSmall,
    PointsMedium,
    PointsLarge,
    PointsExtraLarge,
    ThresholdSmallCm,
    ThresholdMediumCm,
    ThresholdLargeCm,
    CatchReleaseBonus,
}

impl ScoringField {
    /// Parse a host-supplied field name; both camelCase and snake_case are
    /// accepted, matching what the dashboards send.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "pointsSmall" | "points_small" => Some(ScoringField::PointsSmall),
            "pointsMedium" | "points_medium" => Some(ScoringField::PointsMedium),
            "pointsLarge" | "points_large" => Some(ScoringField::PointsLarge),
            "pointsExtraLarge" | "points_extra_large" => Some(ScoringField::PointsExtraLarge),
            "thresholdSmallCm" | "threshold_small_cm" => Some(ScoringField::ThresholdSmallCm),
            "thresholdMediumCm" | "threshold_medium_cm" => Some(ScoringField::ThresholdMediumCm),
            "thresholdLargeCm" | "threshold_large_cm" => Some(ScoringField::ThresholdLargeCm),
            "catchReleaseBonus" | "catch_release_bonus" => Some(ScoringField::CatchReleaseBonus),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            ScoringField::PointsSmall => "pointsSmall",
            ScoringField::PointsMedium => "pointsMedium",
            ScoringField::PointsLarge => "pointsLarge",
            ScoringField::PointsExtraLarge => "pointsExtraLarge",
            ScoringField::ThresholdSmallCm => "thresholdSmallCm",
            ScoringField::ThresholdMediumCm => "thresholdMediumCm",
            ScoringField::ThresholdLargeCm => "thresholdLargeCm",
            ScoringField::CatchReleaseBonus => "catchReleaseBonus",
        }
    }

    /// Apply a numeric value to the field on an entry. Point fields round to
    /// whole points; threshold fields become set.
    pub fn apply(&self, entry: &mut SpeciesScoring, value: f64) {
        match self {
            ScoringField::PointsSmall => entry.points_small = value.round() as i32,
            ScoringField::PointsMedium => entry.points_medium = value.round() as i32,
            ScoringField::PointsLarge => entry.points_large = value.round() as i32,
            ScoringField::PointsExtraLarge => entry.points_extra_large = value.round() as i32,
            ScoringField::ThresholdSmallCm => entry.threshold_small_cm = Some(value),
            ScoringField::ThresholdMediumCm => entry.threshold_medium_cm = Some(value),
            ScoringField::ThresholdLargeCm => entry.threshold_large_cm = Some(value),
            ScoringField::CatchReleaseBonus => entry.catch_release_bonus = value,
        }
    }

    /// Clear an optional threshold field. Point fields and the bonus are
    /// mandatory and are left untouched; returns false in that case.
    pub fn clear(&self, entry: &mut SpeciesScoring) -> bool {
        match self {
            ScoringField::ThresholdSmallCm => {
                entry.threshold_small_cm = None;
                true
            }
            ScoringField::ThresholdMediumCm => {
                entry.threshold_medium_cm = None;
                true
            }
            ScoringField::ThresholdLargeCm => {
                entry.threshold_large_cm = None;
                true
            }
            _ => false,
        }
    }
}
