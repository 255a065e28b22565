//! Size-tier classification

use crate::config::{SizeClass, SpeciesScoring};

/// Classify a measured length against an entry's size thresholds.
///
/// A catch starts Small and is promoted across every boundary it reaches:
/// `threshold_small_cm` into Medium, `threshold_medium_cm` into Large,
/// `threshold_large_cm` into ExtraLarge. A missing boundary cannot be
/// crossed, so an entry with no thresholds classifies every length Small.
#[inline]
pub fn classify_length(entry: &SpeciesScoring, length_cm: f64) -> SizeClass {
    match entry.threshold_for(SizeClass::Small) {
        Some(t) if length_cm >= t => {}
        _ => return SizeClass::Small,
    }
    match entry.threshold_for(SizeClass::Medium) {
        Some(t) if length_cm >= t => {}
        _ => return SizeClass::Medium,
    }
    match entry.threshold_for(SizeClass::Large) {
        Some(t) if length_cm >= t => SizeClass::ExtraLarge,
        _ => SizeClass::Large,
    }
}
