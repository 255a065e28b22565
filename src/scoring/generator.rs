//! Scoring sheet generation from the discipline catalogs

use crate::catalog::{presets_for_key, SpeciesPreset};
use crate::config::{SpeciesScoring, DEFAULT_CATCH_RELEASE_BONUS};

/// Expand one catalog preset into a fully-populated scoring entry
pub fn entry_from_preset(preset: &SpeciesPreset) -> SpeciesScoring {
    SpeciesScoring {
        species_id: preset.id.to_string(),
        species_name: Some(preset.name.to_string()),
        points_small: preset.points[0],
        points_medium: preset.points[1],
        points_large: preset.points[2],
        points_extra_large: preset.points[3],
        threshold_small_cm: Some(preset.thresholds_cm[0]),
        threshold_medium_cm: Some(preset.thresholds_cm[1]),
        threshold_large_cm: Some(preset.thresholds_cm[2]),
        catch_release_bonus: DEFAULT_CATCH_RELEASE_BONUS,
        is_custom: false,
    }
}

/// Generate the pre-filled scoring sheet for a tournament discipline.
///
/// Pure and deterministic: catalog order is preserved, every entry carries
/// the default release bonus and is marked as a catalog species. Unknown
/// discipline keys yield the generic fallback catalog.
pub fn generate_for_discipline(discipline: &str) -> Vec<SpeciesScoring> {
    presets_for_key(discipline)
        .iter()
        .map(entry_from_preset)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bolentino() {
        let entries = generate_for_discipline("BOLENTINO");
        assert_eq!(entries.len(), 6);

        let cernia = entries.iter().find(|e| e.species_id == "cernia").unwrap();
        assert_eq!(cernia.points_small, 2126);
        assert_eq!(cernia.points_medium, 4890);
        assert_eq!(cernia.points_large, 9330);
        assert_eq!(cernia.points_extra_large, 12512);
        assert_eq!(cernia.threshold_small_cm, Some(45.0));
        assert_eq!(cernia.threshold_medium_cm, Some(60.0));
        assert_eq!(cernia.threshold_large_cm, Some(75.0));
        assert!(!cernia.is_custom);
        assert_eq!(cernia.catch_release_bonus, DEFAULT_CATCH_RELEASE_BONUS);
    }

    #[test]
    fn test_generate_unknown_discipline() {
        let entries = generate_for_discipline("ICE_FISHING");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].species_id, "generic_1");
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(
            generate_for_discipline("SURF_CASTING"),
            generate_for_discipline("SURF_CASTING")
        );
    }
}
