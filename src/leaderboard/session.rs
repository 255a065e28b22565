//! LeaderboardSession - Stateful session for the Python-Rust boundary
//!
//! Holds computed standings in Rust heap memory so the host can page
//! through them lazily instead of serializing the whole board upfront.

use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict, PyList};
use std::collections::HashMap;
use std::sync::Arc;

use super::{Standings, StandingsRow, TournamentStats};

/// Default page size, matching the board endpoint's page limit
pub const ROWS_PER_PAGE: usize = 50;

// ============================================================================
// Pre-rendered Data Structures
// ============================================================================

/// Pre-rendered standings row - optimized for display
#[derive(Debug, Clone)]
pub struct RenderedRow {
    pub rank: usize,
    /// Pre-formatted display line, e.g. "🥇 Lampara Due — 13995 pt (3 catture)"
    pub display_text: String,
    pub participant_id: String,
    pub participant_name: Option<String>,
    pub total_points: f64,
    pub catch_count: usize,
    pub biggest_catch: Option<f64>,
    pub penalty_points: i32,
    pub disqualified: bool,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Default medal map for podium ranks
pub fn default_medal_map() -> HashMap<usize, String> {
    let mut map = HashMap::with_capacity(3);
    map.insert(1, "🥇".to_string());
    map.insert(2, "🥈".to_string());
    map.insert(3, "🥉".to_string());
    map
}

/// Format a point total, dropping the fraction when it is whole
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{:.0}", points)
    } else {
        format!("{:.1}", points)
    }
}

fn render_row(row: &StandingsRow, medal_map: &HashMap<usize, String>) -> String {
    let name = row
        .participant_name
        .as_deref()
        .unwrap_or(row.participant_id.as_str());

    if row.disqualified {
        return format!("{:>2}. {} — SQUALIFICATO", row.rank, name);
    }

    let marker = match medal_map.get(&row.rank) {
        Some(medal) => medal.clone(),
        None => format!("{:>2}.", row.rank),
    };

    format!(
        "{} {} — {} pt ({} catture)",
        marker,
        name,
        format_points(row.total_points),
        row.catch_count
    )
}

// ============================================================================
// LeaderboardSession PyClass
// ============================================================================

/// LeaderboardSession - standings held in Rust heap, paged lazily from Python
#[pyclass]
pub struct LeaderboardSession {
    /// Pre-rendered rows in rank order
    rows: Vec<RenderedRow>,
    /// Tournament statistics computed alongside the board
    stats: TournamentStats,
    /// Medal map (shared reference to avoid copying)
    #[allow(dead_code)]
    medal_map: Arc<HashMap<usize, String>>,
}

impl LeaderboardSession {
    /// Create a new LeaderboardSession with pre-rendering
    pub fn new(
        standings: Standings,
        stats: TournamentStats,
        medal_map: Arc<HashMap<usize, String>>,
    ) -> Self {
        let rows: Vec<RenderedRow> = standings
            .rows
            .iter()
            .map(|row| RenderedRow {
                rank: row.rank,
                display_text: render_row(row, &medal_map),
                participant_id: row.participant_id.clone(),
                participant_name: row.participant_name.clone(),
                total_points: row.total_points,
                catch_count: row.catch_count,
                biggest_catch: row.biggest_catch,
                penalty_points: row.penalty_points,
                disqualified: row.disqualified,
            })
            .collect();

        Self {
            rows,
            stats,
            medal_map,
        }
    }
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl LeaderboardSession {
    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    /// Number of rows on the board
    #[getter]
    fn entry_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of pages (50 rows per page by default)
    #[getter]
    fn total_pages(&self) -> usize {
        (self.rows.len() + ROWS_PER_PAGE - 1) / ROWS_PER_PAGE
    }

    /// Name of the current leader, if anyone has scored
    #[getter]
    fn leader_name(&self) -> Option<String> {
        self.leader().map(|r| {
            r.participant_name
                .clone()
                .unwrap_or_else(|| r.participant_id.clone())
        })
    }

    /// Points of the current leader
    #[getter]
    fn leader_points(&self) -> Option<f64> {
        self.leader().map(|r| r.total_points)
    }

    // ------------------------------------------------------------------------
    // Lazy Data Access Methods
    // ------------------------------------------------------------------------

    /// Get one page of the board
    ///
    /// # Arguments
    /// * `page` - Page number (1-indexed)
    /// * `rows_per_page` - Rows per page (default: 50)
    ///
    /// # Returns
    /// List of row dicts for the requested page, or empty list if out of bounds
    #[pyo3(signature = (page, rows_per_page=None))]
    fn get_page_data(
        &self,
        py: Python<'_>,
        page: usize,
        rows_per_page: Option<usize>,
    ) -> PyResult<Py<PyAny>> {
        let per_page = rows_per_page.unwrap_or(ROWS_PER_PAGE);

        let list = PyList::empty(py);
        for row in self.page_slice(page, per_page) {
            list.append(self.row_to_dict(py, row)?)?;
        }

        Ok(list.into())
    }

    /// Get a single row by board position (0-indexed), or None
    fn get_entry(&self, py: Python<'_>, index: usize) -> PyResult<Py<PyAny>> {
        match self.rows.get(index) {
            Some(row) => Ok(self.row_to_dict(py, row)?.into()),
            None => Ok(py.None()),
        }
    }

    /// Get the top N rows (the podium widget)
    fn get_top(&self, py: Python<'_>, n: usize) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for row in self.rows.iter().take(n) {
            list.append(self.row_to_dict(py, row)?)?;
        }
        Ok(list.into())
    }

    /// Find a participant's row plus the board size, or None
    fn get_participant_position(
        &self,
        py: Python<'_>,
        participant_id: &str,
    ) -> PyResult<Py<PyAny>> {
        match self.rows.iter().find(|r| r.participant_id == participant_id) {
            Some(row) => {
                let dict = self.row_to_dict(py, row)?;
                dict.set_item("total_participants", self.rows.len())?;
                Ok(dict.into())
            }
            None => Ok(py.None()),
        }
    }

    /// Pre-formatted display line for a row, or None
    fn get_row_formatted(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|r| r.display_text.clone())
    }

    /// Get the tournament statistics panel
    fn get_stats(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let dict = PyDict::new(py);
        dict.set_item("participant_count", self.stats.participant_count)?;
        dict.set_item("total_catches", self.stats.total_catches)?;
        dict.set_item("approved_catches", self.stats.approved_catches)?;
        dict.set_item("pending_catches", self.stats.pending_catches)?;
        dict.set_item("rejected_catches", self.stats.rejected_catches)?;
        dict.set_item("total_points", self.stats.total_points)?;
        dict.set_item("biggest_catch", self.stats.biggest_catch)?;

        match &self.stats.leader {
            Some(leader) => {
                let leader_dict = PyDict::new(py);
                leader_dict.set_item("participant_id", &leader.participant_id)?;
                leader_dict.set_item("participant_name", leader.participant_name.as_deref())?;
                leader_dict.set_item("total_points", leader.total_points)?;
                leader_dict.set_item("catch_count", leader.catch_count)?;
                dict.set_item("leader", leader_dict)?;
            }
            None => dict.set_item("leader", py.None())?,
        }

        Ok(dict.into())
    }
}

// ============================================================================
// Private Helper Methods
// ============================================================================

impl LeaderboardSession {
    fn leader(&self) -> Option<&RenderedRow> {
        self.rows.first().filter(|r| !r.disqualified)
    }

    fn page_slice(&self, page: usize, per_page: usize) -> &[RenderedRow] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let start = (page - 1) * per_page;
        if start >= self.rows.len() {
            return &[];
        }
        let end = (start + per_page).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Convert a RenderedRow to a Python dict
    fn row_to_dict<'py>(&self, py: Python<'py>, row: &RenderedRow) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("rank", row.rank)?;
        dict.set_item("display_text", &row.display_text)?;
        dict.set_item("participant_id", &row.participant_id)?;
        dict.set_item("participant_name", row.participant_name.as_deref())?;
        dict.set_item("total_points", row.total_points)?;
        dict.set_item("catch_count", row.catch_count)?;
        dict.set_item("biggest_catch", row.biggest_catch)?;
        dict.set_item("penalty_points", row.penalty_points)?;
        dict.set_item("disqualified", row.disqualified)?;
        Ok(dict)
    }
}

// ============================================================================
// Test Helper Methods (crate-visible for tests)
// ============================================================================

impl LeaderboardSession {
    #[cfg(test)]
    pub(crate) fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub(crate) fn page_slice_test(&self, page: usize, per_page: usize) -> &[RenderedRow] {
        self.page_slice(page, per_page)
    }

    #[cfg(test)]
    pub(crate) fn row_at(&self, index: usize) -> Option<&RenderedRow> {
        self.rows.get(index)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
