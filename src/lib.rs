//! Catch & Release Core - tournament scoring engine
//!
//! This crate provides the Rust scoring core of the tournament platform
//! with Python bindings via PyO3.

use pyo3::prelude::*;

pub mod catalog;
pub mod catch;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod scoring;

use crate::error::ScoringError;
use crate::leaderboard::{default_medal_map, LeaderboardSession, StandingsEngine};
use crate::scoring::ScoringSheet;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::types::{PyAny, PyDict, PyList};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Cached Configuration
// ============================================================================

/// Cached tournament configuration containing engine and medal map
struct CachedConfig {
    engine: StandingsEngine,
    medal_map: Arc<HashMap<usize, String>>,
}

/// Global cached configuration
static CACHED_CONFIG: OnceCell<Arc<RwLock<CachedConfig>>> = OnceCell::new();

// ============================================================================
// Helper Functions
// ============================================================================

/// Deserialize medal map from Python dict
fn deserialize_medal_map(dict: &Bound<'_, PyDict>) -> PyResult<HashMap<usize, String>> {
    let mut map = HashMap::new();
    for (key, value) in dict.iter() {
        let rank: usize = key.extract()?;
        let medal: String = value.extract()?;
        map.insert(rank, medal);
    }
    Ok(map)
}

fn cached_config() -> PyResult<Arc<RwLock<CachedConfig>>> {
    CACHED_CONFIG
        .get()
        .cloned()
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                "Tournament config not initialized. Call init_tournament_config() first.",
            )
        })
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the tournament scoring configuration (call once per tournament)
///
/// This caches the scoring sheet in Rust memory, eliminating the need to
/// deserialize it on every scoring call. Call it again to switch tournaments.
///
/// # Arguments
/// * `config` - Tournament configuration containing the scoring entry list
/// * `medal_map` - Optional rank-to-medal map for board rendering
///   (default: {1: "🥇", 2: "🥈", 3: "🥉"})
#[pyfunction]
#[pyo3(signature = (config, medal_map=None))]
fn init_tournament_config(
    config: &Bound<'_, PyDict>,
    medal_map: Option<&Bound<'_, PyDict>>,
) -> PyResult<()> {
    let scoring = config::deserialize_scoring(config)?;
    let engine = StandingsEngine::new(scoring);

    // Parse medal map or use defaults
    let medals = if let Some(map) = medal_map {
        deserialize_medal_map(map)?
    } else {
        default_medal_map()
    };

    let cached = CachedConfig {
        engine,
        medal_map: Arc::new(medals),
    };

    // If already initialized, update the config
    if let Some(existing) = CACHED_CONFIG.get() {
        let mut guard = existing.write();
        *guard = cached;
    } else {
        let _ = CACHED_CONFIG.set(Arc::new(RwLock::new(cached)));
    }

    Ok(())
}

/// Check if the tournament config is initialized
#[pyfunction]
fn is_config_initialized() -> bool {
    CACHED_CONFIG.get().is_some()
}

/// Generate the pre-filled scoring sheet for a discipline
///
/// Pure catalog expansion; does not touch the cached config. Unknown
/// discipline keys yield the generic fallback catalog.
#[pyfunction]
fn generate_scoring(py: Python<'_>, discipline: &str) -> PyResult<Py<PyAny>> {
    let list = PyList::empty(py);
    for entry in scoring::generate_for_discipline(discipline) {
        list.append(config::entry_to_dict(py, &entry)?)?;
    }
    Ok(list.into())
}

/// The penalty kind catalog, for the penalties dialog
#[pyfunction]
fn penalty_types(py: Python<'_>) -> PyResult<Py<PyAny>> {
    let list = PyList::empty(py);
    for preset in config::PENALTY_PRESETS {
        let dict = PyDict::new(py);
        dict.set_item("type", preset.kind.as_key())?;
        dict.set_item("label", preset.label)?;
        dict.set_item("description", preset.description)?;
        dict.set_item("defaultPoints", preset.default_points)?;
        dict.set_item("isTerminal", preset.is_terminal)?;
        list.append(dict)?;
    }
    Ok(list.into())
}

/// Score a measured catch against the cached scoring sheet
///
/// # Returns
/// A dict with the size class, base tier points, whether the release bonus
/// applied and the final award
///
/// # Raises
/// RuntimeError if `init_tournament_config` was not called first;
/// KeyError if the species is not on the sheet
#[pyfunction]
#[pyo3(signature = (species_id, length_cm, released=false, release_verified=false))]
fn score_catch(
    py: Python<'_>,
    species_id: &str,
    length_cm: f64,
    released: bool,
    release_verified: bool,
) -> PyResult<Py<PyAny>> {
    let config_arc = cached_config()?;
    let config = config_arc.read();

    let entry = config
        .engine
        .entry(species_id)
        .ok_or_else(|| ScoringError::SpeciesNotConfigured(species_id.to_string()))?;
    let award = catch::award_for(entry, length_cm, released, release_verified);

    let dict = PyDict::new(py);
    dict.set_item("sizeClass", award.size_class.as_key())?;
    dict.set_item("basePoints", award.base_points)?;
    dict.set_item("bonusApplied", award.bonus_applied)?;
    dict.set_item("points", award.points)?;
    Ok(dict.into())
}

/// Approve a pending catch (judges only): computes and freezes the award
#[pyfunction]
#[pyo3(signature = (catch, reviewer_id, review_notes=None))]
fn approve_catch(
    py: Python<'_>,
    catch: &Bound<'_, PyAny>,
    reviewer_id: &str,
    review_notes: Option<String>,
) -> PyResult<Py<PyAny>> {
    let record = config::extract_catch(catch)?;

    let config_arc = cached_config()?;
    let config = config_arc.read();

    let approved = config.engine.approve(&record, reviewer_id, review_notes)?;
    Ok(config::catch_to_dict(py, &approved)?.into())
}

/// Reject a pending catch (judges only): no points are awarded
#[pyfunction]
#[pyo3(signature = (catch, reviewer_id, review_notes=None))]
fn reject_catch(
    py: Python<'_>,
    catch: &Bound<'_, PyAny>,
    reviewer_id: &str,
    review_notes: Option<String>,
) -> PyResult<Py<PyAny>> {
    let record = config::extract_catch(catch)?;
    let rejected = catch::reject_catch(&record, reviewer_id, review_notes)?;
    Ok(config::catch_to_dict(py, &rejected)?.into())
}

/// Compute ranked standings from catches and penalties
///
/// # Arguments
/// * `catches` - All catch records for the tournament (only approved ones score)
/// * `penalties` - Issued penalties (only active/upheld ones count)
///
/// # Returns
/// A LeaderboardSession holding the pre-rendered board
///
/// # Raises
/// RuntimeError if `init_tournament_config` was not called first
#[pyfunction]
#[pyo3(signature = (catches, penalties=None))]
fn compute_standings(
    catches: &Bound<'_, PyList>,
    penalties: Option<&Bound<'_, PyList>>,
) -> PyResult<LeaderboardSession> {
    let catches = config::deserialize_catches(catches)?;
    let penalties = match penalties {
        Some(list) => config::deserialize_penalty_list(list)?,
        None => Vec::new(),
    };

    let config_arc = cached_config()?;
    let config = config_arc.read();

    let standings = config.engine.compute_standings(&catches, &penalties);
    let stats = config.engine.tournament_stats(&catches, &penalties);
    Ok(LeaderboardSession::new(
        standings,
        stats,
        config.medal_map.clone(),
    ))
}

/// Compute standings asynchronously
///
/// Runs the aggregation in a background thread using Tokio's spawn_blocking,
/// keeping Python's asyncio event loop responsive while a large board is
/// computed. The GIL is automatically released during the computation.
///
/// # Raises
/// RuntimeError if `init_tournament_config` was not called first
///
/// # Example (Python)
/// ```python
/// board = await compute_standings_async(catches, penalties)
/// print(board.leader_name)
/// ```
#[pyfunction]
#[pyo3(signature = (catches, penalties=None))]
fn compute_standings_async<'py>(
    py: Python<'py>,
    catches: &Bound<'py, PyList>,
    penalties: Option<&Bound<'py, PyList>>,
) -> PyResult<Bound<'py, PyAny>> {
    // Extract inputs and grab the cached config before entering async context
    let catches = config::deserialize_catches(catches)?;
    let penalties = match penalties {
        Some(list) => config::deserialize_penalty_list(list)?,
        None => Vec::new(),
    };
    let config_arc = cached_config()?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let session = tokio::task::spawn_blocking(move || {
            let config = config_arc.read();

            let standings = config.engine.compute_standings(&catches, &penalties);
            let stats = config.engine.tournament_stats(&catches, &penalties);
            LeaderboardSession::new(standings, stats, config.medal_map.clone())
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Standings task panicked: {}",
                e
            ))
        })?;

        Ok(session)
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn catch_release_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_tournament_config, m)?)?;
    m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(generate_scoring, m)?)?;
    m.add_function(wrap_pyfunction!(penalty_types, m)?)?;
    m.add_function(wrap_pyfunction!(score_catch, m)?)?;
    m.add_function(wrap_pyfunction!(approve_catch, m)?)?;
    m.add_function(wrap_pyfunction!(reject_catch, m)?)?;
    m.add_function(wrap_pyfunction!(compute_standings, m)?)?;
    m.add_function(wrap_pyfunction!(compute_standings_async, m)?)?;
    m.add_class::<ScoringSheet>()?;
    m.add_class::<LeaderboardSession>()?;
    Ok(())
}
