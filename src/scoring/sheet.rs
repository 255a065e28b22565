//! Scoring sheet builder
//!
//! Owns the in-progress species scoring list for one tournament. Every
//! mutating operation rebuilds the list immutably, bumps the revision
//! counter and hands the updated list back to the caller, who is
//! responsible for persisting it. The sheet itself holds no storage.

use crate::catalog::{find_preset, presets_for_key, SpeciesPreset};
use crate::config::{
    entry_to_dict, extract_scoring_entry, ScoringField, SpeciesScoring,
    DEFAULT_CATCH_RELEASE_BONUS,
};
use crate::error::{Result, ScoringError};
use crate::scoring::generator::{entry_from_preset, generate_for_discipline};
use crate::scoring::ident::mint_custom_id;
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict, PyList};

/// Form values for a new custom species (the add-custom dialog state)
#[derive(Debug, Clone)]
pub struct CustomSpecies {
    pub name: String,
    /// Point tiers [small, medium, large, extra_large]
    pub points: [i32; 4],
    /// Optional tier boundaries in cm
    pub thresholds_cm: [Option<f64>; 3],
    pub catch_release_bonus: f64,
}

impl Default for CustomSpecies {
    fn default() -> Self {
        Self {
            name: String::new(),
            points: [100, 200, 400, 800],
            thresholds_cm: [None, None, None],
            catch_release_bonus: DEFAULT_CATCH_RELEASE_BONUS,
        }
    }
}

/// The species scoring list for one tournament, under edit
#[pyclass]
#[derive(Debug, Clone)]
pub struct ScoringSheet {
    discipline: String,
    entries: Vec<SpeciesScoring>,
    /// Constructed from caller-supplied scoring (editing an existing
    /// tournament); such sheets are never regenerated on a discipline change.
    seeded: bool,
    revision: u64,
}

impl ScoringSheet {
    /// New sheet pre-filled from the discipline catalog
    pub fn for_discipline(discipline: &str) -> Self {
        Self {
            discipline: discipline.to_string(),
            entries: generate_for_discipline(discipline),
            seeded: false,
            revision: 0,
        }
    }

    /// Sheet seeded with scoring loaded from the backend
    pub fn from_initial(discipline: &str, initial: Vec<SpeciesScoring>) -> Self {
        Self {
            discipline: discipline.to_string(),
            entries: initial,
            seeded: true,
            revision: 0,
        }
    }

    /// Sheet seeded from a backend JSON payload
    pub fn from_json(discipline: &str, json: &str) -> Result<Self> {
        let initial: Vec<SpeciesScoring> = serde_json::from_str(json)
            .map_err(|e| ScoringError::DeserializationError(e.to_string()))?;
        Ok(Self::from_initial(discipline, initial))
    }

    /// The entry list the backend persists, as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries)
            .map_err(|e| ScoringError::DeserializationError(e.to_string()))
    }

    pub fn discipline(&self) -> &str {
        &self.discipline
    }

    pub fn entries(&self) -> &[SpeciesScoring] {
        &self.entries
    }

    /// Bumped on every mutation; lets the host detect unsaved edits
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, species_id: &str) -> bool {
        self.entries.iter().any(|e| e.species_id == species_id)
    }

    pub fn get(&self, species_id: &str) -> Option<&SpeciesScoring> {
        self.entries.iter().find(|e| e.species_id == species_id)
    }

    /// Catalog species not yet on the sheet (candidates for the add dialog)
    pub fn available_presets(&self) -> Vec<&'static SpeciesPreset> {
        presets_for_key(&self.discipline)
            .iter()
            .filter(|p| !self.contains(p.id))
            .collect()
    }

    /// Pre-fill a scoring entry from the catalog for the operator to edit
    /// before confirming the add
    pub fn prefill_catalog_entry(&self, species_id: &str) -> Result<SpeciesScoring> {
        find_preset(&self.discipline, species_id)
            .map(entry_from_preset)
            .ok_or_else(|| ScoringError::SpeciesNotInCatalog(species_id.to_string()))
    }

    /// Append a confirmed entry. Rejects ids already on the sheet; the add
    /// dialog only offers unused species, so this is the defensive
    /// double-check behind it.
    pub fn add_entry(&mut self, entry: SpeciesScoring) -> Result<&[SpeciesScoring]> {
        if self.contains(&entry.species_id) {
            return Err(ScoringError::DuplicateSpecies(entry.species_id));
        }

        let mut updated = self.entries.clone();
        updated.push(entry);
        self.commit(updated);
        Ok(&self.entries)
    }

    /// Add a catalog species with its preset values unchanged
    pub fn add_catalog_species(&mut self, species_id: &str) -> Result<&[SpeciesScoring]> {
        let entry = self.prefill_catalog_entry(species_id)?;
        self.add_entry(entry)
    }

    /// Add a user-authored species with a freshly minted identifier.
    /// No uniqueness check is needed: minted ids are always fresh.
    pub fn add_custom_species(&mut self, custom: CustomSpecies) -> Result<&[SpeciesScoring]> {
        let name = custom.name.trim();
        if name.is_empty() {
            return Err(ScoringError::BlankSpeciesName);
        }

        let entry = SpeciesScoring {
            species_id: mint_custom_id(),
            species_name: Some(name.to_string()),
            points_small: custom.points[0],
            points_medium: custom.points[1],
            points_large: custom.points[2],
            points_extra_large: custom.points[3],
            threshold_small_cm: custom.thresholds_cm[0],
            threshold_medium_cm: custom.thresholds_cm[1],
            threshold_large_cm: custom.thresholds_cm[2],
            catch_release_bonus: custom.catch_release_bonus,
            is_custom: true,
        };

        let mut updated = self.entries.clone();
        updated.push(entry);
        self.commit(updated);
        Ok(&self.entries)
    }

    /// Replace one numeric field of one entry, preserving list order
    pub fn update_field(
        &mut self,
        species_id: &str,
        field: ScoringField,
        value: f64,
    ) -> Result<&[SpeciesScoring]> {
        if !self.contains(species_id) {
            return Err(ScoringError::SpeciesNotConfigured(species_id.to_string()));
        }

        let updated = self
            .entries
            .iter()
            .map(|e| {
                if e.species_id == species_id {
                    let mut next = e.clone();
                    field.apply(&mut next, value);
                    next
                } else {
                    e.clone()
                }
            })
            .collect();
        self.commit(updated);
        Ok(&self.entries)
    }

    /// Unset an optional threshold field of one entry
    pub fn clear_threshold(
        &mut self,
        species_id: &str,
        field: ScoringField,
    ) -> Result<&[SpeciesScoring]> {
        if !self.contains(species_id) {
            return Err(ScoringError::SpeciesNotConfigured(species_id.to_string()));
        }

        let mut updated = self.entries.clone();
        for e in updated.iter_mut() {
            if e.species_id == species_id && !field.clear(e) {
                return Err(ScoringError::InvalidField(field.as_key().to_string()));
            }
        }
        self.commit(updated);
        Ok(&self.entries)
    }

    /// Drop the entry with the given id. Removing an absent id is a no-op
    /// on the list but still counts as a mutation.
    pub fn remove(&mut self, species_id: &str) -> &[SpeciesScoring] {
        let updated = self
            .entries
            .iter()
            .filter(|e| e.species_id != species_id)
            .cloned()
            .collect();
        self.commit(updated);
        &self.entries
    }

    /// Re-point the sheet at a new discipline.
    ///
    /// Sheets generated from the catalog are regenerated wholesale,
    /// discarding every edit made under the previous discipline. Sheets
    /// seeded from caller-supplied scoring keep their entries: loaded data
    /// takes precedence over the catalog.
    pub fn resync_discipline(&mut self, discipline: &str) -> &[SpeciesScoring] {
        self.discipline = discipline.to_string();
        if !self.seeded {
            let regenerated = generate_for_discipline(discipline);
            self.commit(regenerated);
        }
        &self.entries
    }

    fn commit(&mut self, updated: Vec<SpeciesScoring>) {
        self.entries = updated;
        self.revision += 1;
    }

    /// The updated entry list as Python dicts; every mutating binding method
    /// hands this back for the host to persist
    fn entries_to_list(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for entry in &self.entries {
            list.append(entry_to_dict(py, entry)?)?;
        }
        Ok(list.into())
    }
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl ScoringSheet {
    /// Open a sheet: seeded from `initial_scoring` when editing an existing
    /// tournament, otherwise pre-filled from the discipline catalog
    #[new]
    #[pyo3(signature = (discipline, initial_scoring=None))]
    fn py_new(discipline: &str, initial_scoring: Option<&Bound<'_, PyList>>) -> PyResult<Self> {
        match initial_scoring {
            Some(list) => {
                let mut initial = Vec::with_capacity(list.len());
                for item in list.iter() {
                    initial.push(extract_scoring_entry(&item)?);
                }
                Ok(Self::from_initial(discipline, initial))
            }
            None => Ok(Self::for_discipline(discipline)),
        }
    }

    /// Open a sheet seeded from a backend JSON payload
    #[staticmethod]
    #[pyo3(name = "from_json")]
    fn py_from_json(discipline: &str, json: &str) -> PyResult<Self> {
        Ok(Self::from_json(discipline, json)?)
    }

    #[getter(discipline)]
    fn py_discipline(&self) -> String {
        self.discipline.clone()
    }

    #[getter(revision)]
    fn py_revision(&self) -> u64 {
        self.revision
    }

    #[getter(entry_count)]
    fn py_entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Current entry list as dicts
    fn get_entries(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.entries_to_list(py)
    }

    /// Catalog species not yet on the sheet, for the add dialog
    fn available_species(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for preset in self.available_presets() {
            let dict = PyDict::new(py);
            dict.set_item("id", preset.id)?;
            dict.set_item("name", preset.name)?;
            dict.set_item("scientificName", preset.scientific_name)?;
            list.append(dict)?;
        }
        Ok(list.into())
    }

    /// Catalog prefill for the add dialog, as a dict the operator can edit
    fn prefill(&self, py: Python<'_>, species_id: &str) -> PyResult<Py<PyAny>> {
        let entry = self.prefill_catalog_entry(species_id)?;
        Ok(entry_to_dict(py, &entry)?.into())
    }

    /// Add a catalog species; `overrides` carries any operator edits to the
    /// prefilled values. Returns the updated entry list.
    #[pyo3(signature = (species_id, overrides=None))]
    fn add_species(
        &mut self,
        py: Python<'_>,
        species_id: &str,
        overrides: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<Py<PyAny>> {
        match overrides {
            Some(obj) => {
                let mut entry = extract_scoring_entry(obj)?;
                entry.species_id = species_id.to_string();
                entry.is_custom = false;
                self.add_entry(entry)?;
            }
            None => {
                self.add_catalog_species(species_id)?;
            }
        }
        self.entries_to_list(py)
    }

    /// Add a user-authored species. Returns the updated entry list.
    #[pyo3(name = "add_custom_species")]
    #[pyo3(signature = (name, points=None, thresholds_cm=None, catch_release_bonus=None))]
    fn py_add_custom_species(
        &mut self,
        py: Python<'_>,
        name: &str,
        points: Option<[i32; 4]>,
        thresholds_cm: Option<[Option<f64>; 3]>,
        catch_release_bonus: Option<f64>,
    ) -> PyResult<Py<PyAny>> {
        let defaults = CustomSpecies::default();
        self.add_custom_species(CustomSpecies {
            name: name.to_string(),
            points: points.unwrap_or(defaults.points),
            thresholds_cm: thresholds_cm.unwrap_or(defaults.thresholds_cm),
            catch_release_bonus: catch_release_bonus.unwrap_or(defaults.catch_release_bonus),
        })?;
        self.entries_to_list(py)
    }

    /// Replace one numeric field of one entry. Returns the updated entry list.
    #[pyo3(name = "update_field")]
    fn py_update_field(
        &mut self,
        py: Python<'_>,
        species_id: &str,
        field: &str,
        value: f64,
    ) -> PyResult<Py<PyAny>> {
        let field = ScoringField::from_key(field)
            .ok_or_else(|| ScoringError::InvalidField(field.to_string()))?;
        self.update_field(species_id, field, value)?;
        self.entries_to_list(py)
    }

    /// Unset an optional threshold. Returns the updated entry list.
    #[pyo3(name = "clear_threshold")]
    fn py_clear_threshold(
        &mut self,
        py: Python<'_>,
        species_id: &str,
        field: &str,
    ) -> PyResult<Py<PyAny>> {
        let field = ScoringField::from_key(field)
            .ok_or_else(|| ScoringError::InvalidField(field.to_string()))?;
        self.clear_threshold(species_id, field)?;
        self.entries_to_list(py)
    }

    /// Drop a species from the sheet. Returns the updated entry list.
    fn remove_species(&mut self, py: Python<'_>, species_id: &str) -> PyResult<Py<PyAny>> {
        self.remove(species_id);
        self.entries_to_list(py)
    }

    /// Re-point the sheet at a new discipline (regenerates unless the sheet
    /// was seeded from caller data). Returns the updated entry list.
    #[pyo3(name = "resync_discipline")]
    fn py_resync_discipline(&mut self, py: Python<'_>, discipline: &str) -> PyResult<Py<PyAny>> {
        self.resync_discipline(discipline);
        self.entries_to_list(py)
    }

    /// The entry list as JSON for the persistence handoff
    #[pyo3(name = "to_json")]
    fn py_to_json(&self) -> PyResult<String> {
        Ok(self.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_discipline_seeds_catalog() {
        let sheet = ScoringSheet::for_discipline("EGING");
        assert_eq!(sheet.len(), 3);
        assert!(sheet.contains("totano"));
        assert_eq!(sheet.revision(), 0);
    }

    #[test]
    fn test_add_catalog_species_duplicate_rejected() {
        let mut sheet = ScoringSheet::for_discipline("BOLENTINO");
        let before = sheet.entries().to_vec();
        let revision = sheet.revision();

        let err = sheet.add_catalog_species("cernia").unwrap_err();
        assert!(matches!(err, ScoringError::DuplicateSpecies(ref id) if id == "cernia"));

        // List unchanged, no notification
        assert_eq!(sheet.entries(), before.as_slice());
        assert_eq!(sheet.revision(), revision);
    }

    #[test]
    fn test_add_catalog_species_after_remove() {
        let mut sheet = ScoringSheet::for_discipline("BOLENTINO");
        sheet.remove("cernia");
        assert_eq!(sheet.len(), 5);
        assert!(!sheet.contains("cernia"));

        sheet.add_catalog_species("cernia").unwrap();
        assert_eq!(sheet.len(), 6);
        // Re-added at the end, prefilled from the catalog
        assert_eq!(sheet.entries().last().unwrap().species_id, "cernia");
        assert_eq!(sheet.entries().last().unwrap().points_small, 2126);
    }

    #[test]
    fn test_prefill_can_be_edited_before_add() {
        let mut sheet = ScoringSheet::from_initial("BOLENTINO", vec![]);
        let mut entry = sheet.prefill_catalog_entry("orata_bo").unwrap();
        entry.points_small = 123;
        sheet.add_entry(entry).unwrap();

        assert_eq!(sheet.get("orata_bo").unwrap().points_small, 123);
    }

    #[test]
    fn test_prefill_unknown_species() {
        let sheet = ScoringSheet::for_discipline("EGING");
        let err = sheet.prefill_catalog_entry("tonno_rosso").unwrap_err();
        assert!(matches!(err, ScoringError::SpeciesNotInCatalog(_)));
    }

    #[test]
    fn test_add_custom_species() {
        let mut sheet = ScoringSheet::for_discipline("SURF_CASTING");
        let before = sheet.len();

        sheet
            .add_custom_species(CustomSpecies {
                name: "  Pesce Balestra ".to_string(),
                ..Default::default()
            })
            .unwrap();

        let added = sheet.entries().last().unwrap();
        assert_eq!(sheet.len(), before + 1);
        assert!(added.is_custom);
        assert!(added.species_id.starts_with("custom_"));
        // Name is trimmed
        assert_eq!(added.species_name.as_deref(), Some("Pesce Balestra"));
    }

    #[test]
    fn test_add_custom_species_blank_name() {
        let mut sheet = ScoringSheet::for_discipline("SURF_CASTING");
        let err = sheet
            .add_custom_species(CustomSpecies {
                name: "   ".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ScoringError::BlankSpeciesName));
    }

    #[test]
    fn test_custom_ids_stay_distinct() {
        let mut sheet = ScoringSheet::from_initial("default", vec![]);
        for i in 0..50 {
            sheet
                .add_custom_species(CustomSpecies {
                    name: format!("Specie {}", i),
                    ..Default::default()
                })
                .unwrap();
        }
        let mut seen = std::collections::HashSet::new();
        for e in sheet.entries() {
            assert!(seen.insert(e.species_id.clone()));
        }
    }

    #[test]
    fn test_update_field_touches_one_entry() {
        let mut sheet = ScoringSheet::for_discipline("BOLENTINO");
        let before = sheet.entries().to_vec();

        sheet
            .update_field("pagello", ScoringField::PointsLarge, 200.0)
            .unwrap();

        for (old, new) in before.iter().zip(sheet.entries()) {
            assert_eq!(old.species_id, new.species_id, "order preserved");
            if old.species_id == "pagello" {
                assert_eq!(new.points_large, 200);
                // Everything else on the touched entry is unchanged
                assert_eq!(new.points_small, old.points_small);
                assert_eq!(new.points_medium, old.points_medium);
                assert_eq!(new.points_extra_large, old.points_extra_large);
                assert_eq!(new.threshold_small_cm, old.threshold_small_cm);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_update_field_unknown_species() {
        let mut sheet = ScoringSheet::for_discipline("BOLENTINO");
        let err = sheet
            .update_field("spigola", ScoringField::PointsSmall, 1.0)
            .unwrap_err();
        assert!(matches!(err, ScoringError::SpeciesNotConfigured(_)));
    }

    #[test]
    fn test_clear_threshold() {
        let mut sheet = ScoringSheet::for_discipline("BOLENTINO");
        sheet
            .clear_threshold("tanuta", ScoringField::ThresholdMediumCm)
            .unwrap();
        assert_eq!(sheet.get("tanuta").unwrap().threshold_medium_cm, None);

        let err = sheet
            .clear_threshold("tanuta", ScoringField::PointsSmall)
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidField(_)));
    }

    #[test]
    fn test_remove() {
        let mut sheet = ScoringSheet::for_discipline("BOLENTINO");
        sheet.remove("cernia");

        assert_eq!(sheet.len(), 5);
        assert!(sheet.entries().iter().all(|e| e.species_id != "cernia"));
    }

    #[test]
    fn test_resync_discipline_regenerates_unseeded() {
        let mut sheet = ScoringSheet::for_discipline("BOLENTINO");
        sheet
            .update_field("cernia", ScoringField::PointsSmall, 1.0)
            .unwrap();
        sheet
            .add_custom_species(CustomSpecies {
                name: "Murena".to_string(),
                ..Default::default()
            })
            .unwrap();

        sheet.resync_discipline("EGING");

        // Edits discarded, fresh EGING catalog
        assert_eq!(sheet.discipline(), "EGING");
        assert_eq!(sheet.entries(), generate_for_discipline("EGING").as_slice());
    }

    #[test]
    fn test_resync_discipline_keeps_seeded() {
        let initial = generate_for_discipline("BOLENTINO");
        let mut sheet = ScoringSheet::from_initial("BOLENTINO", initial.clone());

        sheet.resync_discipline("EGING");

        // Caller-supplied data takes precedence
        assert_eq!(sheet.discipline(), "EGING");
        assert_eq!(sheet.entries(), initial.as_slice());
    }

    #[test]
    fn test_available_presets_excludes_configured() {
        let mut sheet = ScoringSheet::for_discipline("EGING");
        assert!(sheet.available_presets().is_empty());

        sheet.remove("seppia");
        let available = sheet.available_presets();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "seppia");
    }

    #[test]
    fn test_revision_counts_mutations() {
        let mut sheet = ScoringSheet::for_discipline("EGING");
        sheet.remove("seppia");
        sheet.add_catalog_species("seppia").unwrap();
        sheet
            .update_field("seppia", ScoringField::CatchReleaseBonus, 2.0)
            .unwrap();
        assert_eq!(sheet.revision(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let mut sheet = ScoringSheet::for_discipline("SHORE");
        sheet
            .add_custom_species(CustomSpecies {
                name: "Aguglia".to_string(),
                ..Default::default()
            })
            .unwrap();

        let json = sheet.to_json().unwrap();
        let restored = ScoringSheet::from_json("SHORE", &json).unwrap();
        assert_eq!(restored.entries(), sheet.entries());

        // Restored sheets count as seeded
        let entries = restored.entries().to_vec();
        let mut restored = restored;
        restored.resync_discipline("EGING");
        assert_eq!(restored.entries(), entries.as_slice());
    }
}
