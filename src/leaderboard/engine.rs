//! Standings computation engine

use crate::catch::{approve_catch, award_for, CatchAward};
use crate::config::{CatchRecord, CatchStatus, Penalty, SpeciesScoring};
use crate::error::{Result, ScoringError};
use ahash::AHashMap;
use smallvec::SmallVec;

/// One participant's standings line
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    pub participant_id: String,
    pub participant_name: Option<String>,
    /// 1-based position after ranking
    pub rank: usize,
    /// Awarded points minus counting penalty deductions, floored at zero
    pub total_points: f64,
    pub catch_count: usize,
    /// Largest single catch award
    pub biggest_catch: Option<f64>,
    pub penalty_points: i32,
    pub disqualified: bool,
}

/// Ranked standings for a tournament
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Standings {
    pub rows: Vec<StandingsRow>,
}

/// Per-participant penalty roll-up
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltySummary {
    pub participant_id: String,
    pub total_points: i32,
    pub penalty_count: usize,
    pub disqualified: bool,
}

/// Current leader, for the tournament stats panel
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderInfo {
    pub participant_id: String,
    pub participant_name: Option<String>,
    pub total_points: f64,
    pub catch_count: usize,
}

/// Aggregate tournament statistics
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TournamentStats {
    pub participant_count: usize,
    pub total_catches: usize,
    pub approved_catches: usize,
    pub pending_catches: usize,
    pub rejected_catches: usize,
    pub total_points: f64,
    pub biggest_catch: Option<f64>,
    pub leader: Option<LeaderInfo>,
}

/// Per-participant accumulator while sweeping catches
#[derive(Debug, Default)]
struct Accumulator {
    name: Option<String>,
    // Typically a handful of catches per participant
    awards: SmallVec<[f64; 8]>,
}

/// Standings engine for one tournament's scoring configuration
pub struct StandingsEngine {
    scoring: AHashMap<String, SpeciesScoring>,
}

impl StandingsEngine {
    pub fn new(scoring: Vec<SpeciesScoring>) -> Self {
        let mut map = AHashMap::with_capacity(scoring.len());
        for entry in scoring {
            map.insert(entry.species_id.clone(), entry);
        }
        Self { scoring: map }
    }

    pub fn entry(&self, species_id: &str) -> Option<&SpeciesScoring> {
        self.scoring.get(species_id)
    }

    /// Score a catch against the configured sheet
    pub fn score(&self, record: &CatchRecord) -> Result<CatchAward> {
        let entry = self
            .scoring
            .get(&record.species_id)
            .ok_or_else(|| ScoringError::SpeciesNotConfigured(record.species_id.clone()))?;
        Ok(award_for(
            entry,
            record.length_cm,
            record.released,
            record.release_verified,
        ))
    }

    /// Approve a pending catch, freezing its award on the record
    pub fn approve(
        &self,
        record: &CatchRecord,
        reviewer_id: &str,
        review_notes: Option<String>,
    ) -> Result<CatchRecord> {
        let entry = self
            .scoring
            .get(&record.species_id)
            .ok_or_else(|| ScoringError::SpeciesNotConfigured(record.species_id.clone()))?;
        approve_catch(entry, record, reviewer_id, review_notes)
    }

    /// Points an approved catch contributes to standings: the frozen award,
    /// or a recomputed one when the backend row predates approval scoring.
    /// Unknown species contribute nothing, matching how the backend sums
    /// `points || 0`.
    fn standings_points(&self, record: &CatchRecord) -> f64 {
        if let Some(points) = record.points {
            return points;
        }
        self.score(record).map(|award| award.points).unwrap_or(0.0)
    }

    /// Compute ranked standings from catches and penalties.
    ///
    /// Only approved catches and counting (active or upheld) penalties
    /// participate. Participants that only appear through penalties still
    /// get a row, so disqualifications are visible on the board.
    pub fn compute_standings(&self, catches: &[CatchRecord], penalties: &[Penalty]) -> Standings {
        let mut accumulators: AHashMap<String, Accumulator> = AHashMap::new();

        for record in catches {
            if record.status != CatchStatus::Approved {
                continue;
            }
            let acc = accumulators.entry(record.participant_id.clone()).or_default();
            if acc.name.is_none() {
                acc.name = record.participant_name.clone();
            }
            acc.awards.push(self.standings_points(record));
        }

        let deductions = Self::penalty_summary(penalties);
        for summary in &deductions {
            accumulators.entry(summary.participant_id.clone()).or_default();
        }

        let mut rows: Vec<StandingsRow> = accumulators
            .into_iter()
            .map(|(participant_id, acc)| {
                let summary = deductions
                    .iter()
                    .find(|s| s.participant_id == participant_id);
                let penalty_points = summary.map(|s| s.total_points).unwrap_or(0);
                let disqualified = summary.map(|s| s.disqualified).unwrap_or(false);

                let gross: f64 = acc.awards.iter().sum();
                let total_points = (gross - penalty_points as f64).max(0.0);
                let biggest_catch = acc
                    .awards
                    .iter()
                    .copied()
                    .max_by(f64::total_cmp);

                StandingsRow {
                    participant_id,
                    participant_name: acc.name,
                    rank: 0,
                    total_points,
                    catch_count: acc.awards.len(),
                    biggest_catch,
                    penalty_points,
                    disqualified,
                }
            })
            .collect();

        // Disqualified entries sink to the bottom; everyone else ranks by
        // points, then biggest catch, then catch count. Participant id is
        // the final key so equal lines order deterministically.
        rows.sort_by(|a, b| {
            a.disqualified
                .cmp(&b.disqualified)
                .then_with(|| b.total_points.total_cmp(&a.total_points))
                .then_with(|| {
                    b.biggest_catch
                        .unwrap_or(0.0)
                        .total_cmp(&a.biggest_catch.unwrap_or(0.0))
                })
                .then_with(|| b.catch_count.cmp(&a.catch_count))
                .then_with(|| a.participant_id.cmp(&b.participant_id))
        });

        for (i, row) in rows.iter_mut().enumerate() {
            row.rank = i + 1;
        }

        Standings { rows }
    }

    /// Roll counting penalties up per participant, heaviest totals first
    pub fn penalty_summary(penalties: &[Penalty]) -> Vec<PenaltySummary> {
        let mut by_participant: AHashMap<String, PenaltySummary> = AHashMap::new();

        for penalty in penalties {
            if !penalty.status.counts_against_standings() {
                continue;
            }
            let summary = by_participant
                .entry(penalty.participant_id.clone())
                .or_insert_with(|| PenaltySummary {
                    participant_id: penalty.participant_id.clone(),
                    total_points: 0,
                    penalty_count: 0,
                    disqualified: false,
                });
            summary.total_points += penalty.points;
            summary.penalty_count += 1;
            summary.disqualified = summary.disqualified || penalty.kind.is_terminal();
        }

        let mut summaries: Vec<PenaltySummary> = by_participant.into_values().collect();
        summaries.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.participant_id.cmp(&b.participant_id))
        });
        summaries
    }

    /// Aggregate statistics for the tournament dashboard
    pub fn tournament_stats(
        &self,
        catches: &[CatchRecord],
        penalties: &[Penalty],
    ) -> TournamentStats {
        let standings = self.compute_standings(catches, penalties);

        let approved = catches
            .iter()
            .filter(|c| c.status == CatchStatus::Approved)
            .count();
        let pending = catches
            .iter()
            .filter(|c| c.status == CatchStatus::Pending)
            .count();
        let rejected = catches.len() - approved - pending;

        let total_points = standings.rows.iter().map(|r| r.total_points).sum();
        let biggest_catch = standings
            .rows
            .iter()
            .filter_map(|r| r.biggest_catch)
            .max_by(f64::total_cmp);

        let leader = standings
            .rows
            .first()
            .filter(|r| !r.disqualified)
            .map(|r| LeaderInfo {
                participant_id: r.participant_id.clone(),
                participant_name: r.participant_name.clone(),
                total_points: r.total_points,
                catch_count: r.catch_count,
            });

        TournamentStats {
            participant_count: standings.rows.len(),
            total_catches: catches.len(),
            approved_catches: approved,
            pending_catches: pending,
            rejected_catches: rejected,
            total_points,
            biggest_catch,
            leader,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PenaltyKind, PenaltyStatus};
    use crate::scoring::generate_for_discipline;

    fn engine() -> StandingsEngine {
        StandingsEngine::new(generate_for_discipline("BOLENTINO"))
    }

    fn approved(id: &str, participant: &str, species: &str, length: f64, bonus: bool) -> CatchRecord {
        CatchRecord {
            id: id.to_string(),
            participant_id: participant.to_string(),
            participant_name: Some(format!("Team {}", participant)),
            species_id: species.to_string(),
            length_cm: length,
            released: bonus,
            release_verified: bonus,
            status: CatchStatus::Approved,
            points: None,
            reviewer_id: Some("judge-1".to_string()),
            review_notes: None,
        }
    }

    fn penalty(participant: &str, kind: PenaltyKind, points: i32, status: PenaltyStatus) -> Penalty {
        Penalty {
            participant_id: participant.to_string(),
            kind,
            points,
            status,
            reason: None,
        }
    }

    #[test]
    fn test_standings_rank_by_points() {
        let catches = vec![
            // u1: Large cernia with bonus = 9330 * 1.5 = 13995
            approved("c1", "u1", "cernia", 62.0, true),
            // u2: two smaller catches = 4890 + 150 = 5040
            approved("c2", "u2", "cernia", 50.0, false),
            approved("c3", "u2", "dentice_bo", 20.0, false),
        ];

        let standings = engine().compute_standings(&catches, &[]);
        assert_eq!(standings.rows.len(), 2);
        assert_eq!(standings.rows[0].participant_id, "u1");
        assert_eq!(standings.rows[0].rank, 1);
        assert_eq!(standings.rows[0].total_points, 13995.0);
        assert_eq!(standings.rows[1].participant_id, "u2");
        assert_eq!(standings.rows[1].total_points, 5040.0);
        assert_eq!(standings.rows[1].catch_count, 2);
    }

    #[test]
    fn test_standings_tiebreak_biggest_catch() {
        fn frozen(id: &str, participant: &str, points: f64) -> CatchRecord {
            let mut record = approved(id, participant, "cernia", 50.0, false);
            record.points = Some(points);
            record
        }

        // Equal totals; u2's single best catch is larger
        let catches = vec![
            frozen("c1", "u1", 2500.0),
            frozen("c2", "u1", 2500.0),
            frozen("c3", "u2", 3000.0),
            frozen("c4", "u2", 2000.0),
        ];

        let standings = engine().compute_standings(&catches, &[]);
        assert_eq!(standings.rows[0].participant_id, "u2");
        assert_eq!(standings.rows[1].participant_id, "u1");
    }

    #[test]
    fn test_penalty_deduction_and_floor() {
        let catches = vec![approved("c1", "u1", "pagello", 10.0, false)]; // 50 points
        let penalties = vec![penalty(
            "u1",
            PenaltyKind::Unsportsmanlike,
            50,
            PenaltyStatus::Active,
        )];

        let standings = engine().compute_standings(&catches, &penalties);
        assert_eq!(standings.rows[0].total_points, 0.0);
        assert_eq!(standings.rows[0].penalty_points, 50);

        // Deductions never push a total negative
        let heavy = vec![penalty(
            "u1",
            PenaltyKind::Unsportsmanlike,
            5_000,
            PenaltyStatus::Upheld,
        )];
        let standings = engine().compute_standings(&catches, &heavy);
        assert_eq!(standings.rows[0].total_points, 0.0);
    }

    #[test]
    fn test_overturned_penalty_ignored() {
        let catches = vec![approved("c1", "u1", "pagello", 10.0, false)];
        let penalties = vec![penalty(
            "u1",
            PenaltyKind::ZoneViolation,
            25,
            PenaltyStatus::Overturned,
        )];

        let standings = engine().compute_standings(&catches, &penalties);
        assert_eq!(standings.rows[0].total_points, 50.0);
        assert_eq!(standings.rows[0].penalty_points, 0);
    }

    #[test]
    fn test_disqualified_sinks() {
        let catches = vec![
            approved("c1", "u1", "cernia", 80.0, true), // huge score
            approved("c2", "u2", "pagello", 10.0, false),
        ];
        let penalties = vec![penalty(
            "u1",
            PenaltyKind::Disqualification,
            0,
            PenaltyStatus::Active,
        )];

        let standings = engine().compute_standings(&catches, &penalties);
        assert_eq!(standings.rows[0].participant_id, "u2");
        assert_eq!(standings.rows[0].rank, 1);
        assert!(standings.rows[1].disqualified);
        assert_eq!(standings.rows[1].rank, 2);
    }

    #[test]
    fn test_penalty_only_participant_gets_row() {
        let penalties = vec![penalty(
            "u9",
            PenaltyKind::Disqualification,
            0,
            PenaltyStatus::Upheld,
        )];
        let standings = engine().compute_standings(&[], &penalties);
        assert_eq!(standings.rows.len(), 1);
        assert_eq!(standings.rows[0].participant_id, "u9");
        assert!(standings.rows[0].disqualified);
        assert_eq!(standings.rows[0].catch_count, 0);
    }

    #[test]
    fn test_pending_and_rejected_do_not_score() {
        let mut pending = approved("c1", "u1", "cernia", 62.0, false);
        pending.status = CatchStatus::Pending;
        let mut rejected = approved("c2", "u1", "cernia", 62.0, false);
        rejected.status = CatchStatus::Rejected;

        let standings = engine().compute_standings(&[pending, rejected], &[]);
        assert!(standings.rows.is_empty());
    }

    #[test]
    fn test_frozen_points_take_precedence() {
        let mut record = approved("c1", "u1", "cernia", 62.0, false);
        record.points = Some(111.0);

        let standings = engine().compute_standings(&[record], &[]);
        assert_eq!(standings.rows[0].total_points, 111.0);
    }

    #[test]
    fn test_unknown_species_scores_zero() {
        let record = approved("c1", "u1", "luccio", 62.0, false);
        let standings = engine().compute_standings(&[record], &[]);
        assert_eq!(standings.rows[0].total_points, 0.0);
        assert_eq!(standings.rows[0].catch_count, 1);
    }

    #[test]
    fn test_penalty_summary_ordering() {
        let penalties = vec![
            penalty("u1", PenaltyKind::LateArrival, 10, PenaltyStatus::Active),
            penalty("u2", PenaltyKind::Unsportsmanlike, 50, PenaltyStatus::Upheld),
            penalty("u1", PenaltyKind::ZoneViolation, 25, PenaltyStatus::Active),
            penalty("u3", PenaltyKind::Warning, 0, PenaltyStatus::Overturned),
        ];

        let summary = StandingsEngine::penalty_summary(&penalties);
        assert_eq!(summary.len(), 2); // u3's only penalty does not count
        assert_eq!(summary[0].participant_id, "u2");
        assert_eq!(summary[0].total_points, 50);
        assert_eq!(summary[1].participant_id, "u1");
        assert_eq!(summary[1].total_points, 35);
        assert_eq!(summary[1].penalty_count, 2);
    }

    #[test]
    fn test_tournament_stats() {
        let mut pending = approved("c3", "u2", "orata_bo", 30.0, false);
        pending.status = CatchStatus::Pending;
        let catches = vec![
            approved("c1", "u1", "cernia", 62.0, true),
            approved("c2", "u2", "pagello", 20.0, false),
            pending,
        ];

        let stats = engine().tournament_stats(&catches, &[]);
        assert_eq!(stats.participant_count, 2);
        assert_eq!(stats.total_catches, 3);
        assert_eq!(stats.approved_catches, 2);
        assert_eq!(stats.pending_catches, 1);
        assert_eq!(stats.rejected_catches, 0);

        let leader = stats.leader.unwrap();
        assert_eq!(leader.participant_id, "u1");
        assert_eq!(leader.total_points, 13995.0);
        assert_eq!(stats.biggest_catch, Some(13995.0));
    }
}
