//! Configuration module for tournament data structures
//!
//! This module handles deserialization of tournament configuration from
//! Python dicts.

mod catch;
mod penalty;
mod scoring;

pub use catch::*;
pub use penalty::*;
pub use scoring::*;

use crate::error::ScoringError;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods};
use pyo3::Bound;

/// Helper to get attribute from either dict or object
fn get_attr<'py>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
) -> pyo3::PyResult<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> Option<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

/// Deserialize the scoring sheet from a tournament config dict
/// Expected format: {"scoring": [entry, ...]}
pub fn deserialize_scoring(config: &Bound<'_, PyDict>) -> pyo3::PyResult<Vec<SpeciesScoring>> {
    let scoring_list = config
        .get_item("scoring")?
        .ok_or_else(|| ScoringError::DeserializationError("scoring not found".to_string()))?;

    let scoring_list: Bound<'_, PyList> = scoring_list.extract()?;
    let mut entries = Vec::with_capacity(scoring_list.len());

    for item in scoring_list.iter() {
        entries.push(extract_scoring_entry(&item)?);
    }

    Ok(entries)
}

/// Extract one scoring entry from a dict or object.
/// Both camelCase and snake_case field names are supported.
pub fn extract_scoring_entry(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<SpeciesScoring> {
    let species_id: String = get_attr(obj, "speciesId")
        .or_else(|_| get_attr(obj, "species_id"))?
        .extract()?;
    let species_name: Option<String> = get_attr_opt(obj, "speciesName")
        .or_else(|| get_attr_opt(obj, "species_name"))
        .and_then(|v| v.extract().ok());

    let points_small: i32 = get_attr(obj, "pointsSmall")
        .or_else(|_| get_attr(obj, "points_small"))?
        .extract()?;
    let points_medium: i32 = get_attr(obj, "pointsMedium")
        .or_else(|_| get_attr(obj, "points_medium"))?
        .extract()?;
    let points_large: i32 = get_attr(obj, "pointsLarge")
        .or_else(|_| get_attr(obj, "points_large"))?
        .extract()?;
    let points_extra_large: i32 = get_attr(obj, "pointsExtraLarge")
        .or_else(|_| get_attr(obj, "points_extra_large"))?
        .extract()?;

    let threshold_small_cm: Option<f64> = get_attr_opt(obj, "thresholdSmallCm")
        .or_else(|| get_attr_opt(obj, "threshold_small_cm"))
        .and_then(|v| v.extract().ok());
    let threshold_medium_cm: Option<f64> = get_attr_opt(obj, "thresholdMediumCm")
        .or_else(|| get_attr_opt(obj, "threshold_medium_cm"))
        .and_then(|v| v.extract().ok());
    let threshold_large_cm: Option<f64> = get_attr_opt(obj, "thresholdLargeCm")
        .or_else(|| get_attr_opt(obj, "threshold_large_cm"))
        .and_then(|v| v.extract().ok());

    let catch_release_bonus: f64 = get_attr_opt(obj, "catchReleaseBonus")
        .or_else(|| get_attr_opt(obj, "catch_release_bonus"))
        .and_then(|v| v.extract().ok())
        .unwrap_or(DEFAULT_CATCH_RELEASE_BONUS);
    let is_custom: bool = get_attr_opt(obj, "isCustom")
        .or_else(|| get_attr_opt(obj, "is_custom"))
        .and_then(|v| v.extract().ok())
        .unwrap_or(false);

    Ok(SpeciesScoring {
        species_id,
        species_name,
        points_small,
        points_medium,
        points_large,
        points_extra_large,
        threshold_small_cm,
        threshold_medium_cm,
        threshold_large_cm,
        catch_release_bonus,
        is_custom,
    })
}

/// Deserialize a list of penalties (standings input)
pub fn deserialize_penalty_list(list: &Bound<'_, PyList>) -> pyo3::PyResult<Vec<Penalty>> {
    let mut penalties = Vec::with_capacity(list.len());
    for item in list.iter() {
        penalties.push(extract_penalty(&item)?);
    }
    Ok(penalties)
}

fn extract_penalty(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<Penalty> {
    let participant_id: String = get_attr(obj, "participantId")
        .or_else(|_| get_attr(obj, "participant_id"))
        .or_else(|_| get_attr(obj, "teamId"))?
        .extract()?;

    let kind_key: String = get_attr(obj, "kind")
        .or_else(|_| get_attr(obj, "type"))?
        .extract()?;
    let kind = PenaltyKind::from_key(&kind_key).ok_or_else(|| {
        ScoringError::DeserializationError(format!("unknown penalty kind: {}", kind_key))
    })?;

    // Points fall back to the regulation default for the kind
    let points: i32 = get_attr_opt(obj, "points")
        .and_then(|v| v.extract().ok())
        .unwrap_or_else(|| kind.default_points());

    let status = match get_attr_opt(obj, "status").and_then(|v| v.extract::<String>().ok()) {
        Some(key) => PenaltyStatus::from_key(&key).ok_or_else(|| {
            ScoringError::DeserializationError(format!("unknown penalty status: {}", key))
        })?,
        None => PenaltyStatus::Active,
    };

    let reason: Option<String> = get_attr_opt(obj, "reason").and_then(|v| v.extract().ok());

    Ok(Penalty {
        participant_id,
        kind,
        points,
        status,
        reason,
    })
}

/// Convert a scoring entry to a Python dict, using the backend field names
pub fn entry_to_dict<'py>(
    py: pyo3::Python<'py>,
    entry: &SpeciesScoring,
) -> pyo3::PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("speciesId", &entry.species_id)?;
    dict.set_item("speciesName", entry.species_name.as_deref())?;
    dict.set_item("pointsSmall", entry.points_small)?;
    dict.set_item("pointsMedium", entry.points_medium)?;
    dict.set_item("pointsLarge", entry.points_large)?;
    dict.set_item("pointsExtraLarge", entry.points_extra_large)?;
    dict.set_item("thresholdSmallCm", entry.threshold_small_cm)?;
    dict.set_item("thresholdMediumCm", entry.threshold_medium_cm)?;
    dict.set_item("thresholdLargeCm", entry.threshold_large_cm)?;
    dict.set_item("catchReleaseBonus", entry.catch_release_bonus)?;
    dict.set_item("isCustom", entry.is_custom)?;
    Ok(dict)
}

/// Convert a catch record to a Python dict, using the backend field names
pub fn catch_to_dict<'py>(
    py: pyo3::Python<'py>,
    record: &CatchRecord,
) -> pyo3::PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("id", &record.id)?;
    dict.set_item("participantId", &record.participant_id)?;
    dict.set_item("participantName", record.participant_name.as_deref())?;
    dict.set_item("speciesId", &record.species_id)?;
    dict.set_item("lengthCm", record.length_cm)?;
    dict.set_item("released", record.released)?;
    dict.set_item("releaseVerified", record.release_verified)?;
    dict.set_item("status", record.status.as_key())?;
    dict.set_item("points", record.points)?;
    dict.set_item("reviewerId", record.reviewer_id.as_deref())?;
    dict.set_item("reviewNotes", record.review_notes.as_deref())?;
    Ok(dict)
}

/// Deserialize a list of catch records (standings input)
pub fn deserialize_catches(list: &Bound<'_, PyList>) -> pyo3::PyResult<Vec<CatchRecord>> {
    let mut catches = Vec::with_capacity(list.len());
    for item in list.iter() {
        catches.push(extract_catch(&item)?);
    }
    Ok(catches)
}

/// Extract one catch record from a dict or object
pub fn extract_catch(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<CatchRecord> {
    let id: String = get_attr(obj, "id")?.extract()?;
    let participant_id: String = get_attr(obj, "participantId")
        .or_else(|_| get_attr(obj, "participant_id"))
        .or_else(|_| get_attr(obj, "userId"))?
        .extract()?;
    let participant_name: Option<String> = get_attr_opt(obj, "participantName")
        .or_else(|| get_attr_opt(obj, "participant_name"))
        .and_then(|v| v.extract().ok());
    let species_id: String = get_attr(obj, "speciesId")
        .or_else(|_| get_attr(obj, "species_id"))?
        .extract()?;
    let length_cm: f64 = get_attr(obj, "lengthCm")
        .or_else(|_| get_attr(obj, "length_cm"))?
        .extract()?;
    let released: bool = get_attr_opt(obj, "released")
        .and_then(|v| v.extract().ok())
        .unwrap_or(false);
    let release_verified: bool = get_attr_opt(obj, "releaseVerified")
        .or_else(|| get_attr_opt(obj, "release_verified"))
        .and_then(|v| v.extract().ok())
        .unwrap_or(false);

    let status = match get_attr_opt(obj, "status").and_then(|v| v.extract::<String>().ok()) {
        Some(key) => CatchStatus::from_key(&key).ok_or_else(|| {
            ScoringError::DeserializationError(format!("unknown catch status: {}", key))
        })?,
        None => CatchStatus::Pending,
    };

    let points: Option<f64> = get_attr_opt(obj, "points").and_then(|v| v.extract().ok());
    let reviewer_id: Option<String> = get_attr_opt(obj, "reviewerId")
        .or_else(|| get_attr_opt(obj, "reviewer_id"))
        .and_then(|v| v.extract().ok());
    let review_notes: Option<String> = get_attr_opt(obj, "reviewNotes")
        .or_else(|| get_attr_opt(obj, "review_notes"))
        .and_then(|v| v.extract().ok());

    Ok(CatchRecord {
        id,
        participant_id,
        participant_name,
        species_id,
        length_cm,
        released,
        release_verified,
        status,
        points,
        reviewer_id,
        review_notes,
    })
}
