//! Catch award computation and the judge review flow

use crate::catch::size::classify_length;
use crate::config::{CatchRecord, CatchStatus, SizeClass, SpeciesScoring};
use crate::error::{Result, ScoringError};

/// Result of scoring one catch against a scoring entry
#[derive(Debug, Clone, PartialEq)]
pub struct CatchAward {
    pub size_class: SizeClass,
    pub base_points: i32,
    /// Release bonus granted (caught, released and release verified)
    pub bonus_applied: bool,
    /// Final award, base points times the bonus multiplier when it applies
    pub points: f64,
}

/// Score a measured catch against its species entry.
///
/// The release bonus multiplies the tier points exactly once, and only when
/// the fish was released AND a judge verified the release footage.
pub fn award_for(
    entry: &SpeciesScoring,
    length_cm: f64,
    released: bool,
    release_verified: bool,
) -> CatchAward {
    let size_class = classify_length(entry, length_cm);
    let base_points = entry.points_for(size_class);
    let bonus_applied = released && release_verified;

    let points = if bonus_applied {
        base_points as f64 * entry.catch_release_bonus
    } else {
        base_points as f64
    };

    CatchAward {
        size_class,
        base_points,
        bonus_applied,
        points,
    }
}

/// Approve a pending catch: compute the award and freeze it on the record
pub fn approve_catch(
    entry: &SpeciesScoring,
    record: &CatchRecord,
    reviewer_id: &str,
    review_notes: Option<String>,
) -> Result<CatchRecord> {
    if record.status != CatchStatus::Pending {
        return Err(ScoringError::CatchAlreadyReviewed(record.id.clone()));
    }

    let award = award_for(entry, record.length_cm, record.released, record.release_verified);

    let mut approved = record.clone();
    approved.status = CatchStatus::Approved;
    approved.points = Some(award.points);
    approved.reviewer_id = Some(reviewer_id.to_string());
    approved.review_notes = review_notes;
    Ok(approved)
}

/// Reject a pending catch; no points are awarded
pub fn reject_catch(
    record: &CatchRecord,
    reviewer_id: &str,
    review_notes: Option<String>,
) -> Result<CatchRecord> {
    if record.status != CatchStatus::Pending {
        return Err(ScoringError::CatchAlreadyReviewed(record.id.clone()));
    }

    let mut rejected = record.clone();
    rejected.status = CatchStatus::Rejected;
    rejected.points = None;
    rejected.reviewer_id = Some(reviewer_id.to_string());
    rejected.review_notes = review_notes;
    Ok(rejected)
}
