//! Punch pairing.
//!
//! Pairs a chronologically ordered stream of IN/OUT punches for one day into
//! shift pairs. Malformed sequences (double INs, stray OUTs, trailing open
//! shifts, negative durations) are tolerated and reported as anomalies, never
//! rejected: a single bad punch must not block computing hours for the rest
//! of the day.

use serde::{Deserialize, Serialize};

use crate::models::{AnomalyKind, PunchAnomaly, PunchDirection, PunchEvent, ShiftPair};

/// The outcome of pairing one day's punches.
///
/// `pairs` holds completed pairs (strictly positive duration) and unmatched
/// open pairs (`out_event` = `None`). Every irregularity that produced an
/// unmatched or voided pair is also recorded in `anomalies`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PairingResult {
    /// The shift pairs built from the input, in chronological order.
    pub pairs: Vec<ShiftPair>,
    /// Structured records of every irregularity found.
    pub anomalies: Vec<PunchAnomaly>,
}

impl PairingResult {
    /// Returns `true` when any irregularity was found.
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }

    /// The completed pairs, skipping unmatched open shifts.
    pub fn closed_pairs(&self) -> impl Iterator<Item = &ShiftPair> {
        self.pairs.iter().filter(|p| p.is_closed())
    }
}

/// Pairs one day's punches by positional alternation.
///
/// Input must be sorted ascending by timestamp (the caller's responsibility;
/// this function does not re-sort across day boundaries). A linear scan keeps
/// at most one open IN:
///
/// - IN with no open shift opens one; IN over an open shift reports the
///   earlier IN as unmatched and takes its place.
/// - OUT over an open shift closes it; a non-positive duration voids the
///   pair (zero contribution) instead of producing negative hours. OUT with
///   no open shift is itself an anomaly.
/// - A shift still open at end of input is emitted as an unmatched pair.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::pair_punches;
/// use timeclock_engine::models::{PunchDirection, PunchEvent};
/// use chrono::{TimeZone, Utc};
///
/// let punch = |direction, hour| PunchEvent {
///     employee_id: "emp_001".to_string(),
///     location_id: "loc_001".to_string(),
///     direction,
///     timestamp: Utc.with_ymd_and_hms(2024, 3, 14, hour, 0, 0).unwrap(),
/// };
///
/// let result = pair_punches(&[
///     punch(PunchDirection::In, 8),
///     punch(PunchDirection::Out, 12),
///     punch(PunchDirection::In, 13),
///     punch(PunchDirection::Out, 17),
/// ]);
/// assert_eq!(result.pairs.len(), 2);
/// assert!(!result.has_anomalies());
/// ```
pub fn pair_punches(punches: &[PunchEvent]) -> PairingResult {
    let mut result = PairingResult::default();
    let mut open_in: Option<PunchEvent> = None;

    for punch in punches {
        match punch.direction {
            PunchDirection::In => {
                if let Some(previous) = open_in.replace(punch.clone()) {
                    // Double IN: the earlier IN never closed.
                    result.anomalies.push(PunchAnomaly {
                        kind: AnomalyKind::UnmatchedIn,
                        punch: previous.clone(),
                    });
                    result.pairs.push(ShiftPair::open(previous));
                }
            }
            PunchDirection::Out => match open_in.take() {
                Some(in_event) => {
                    let duration = (punch.timestamp - in_event.timestamp).num_seconds();
                    if duration > 0 {
                        result.pairs.push(ShiftPair::closed(in_event, punch.clone()));
                    } else {
                        // Clock skew or bad data: void the pair entirely.
                        result.anomalies.push(PunchAnomaly {
                            kind: AnomalyKind::NonPositiveDuration,
                            punch: in_event,
                        });
                    }
                }
                None => {
                    result.anomalies.push(PunchAnomaly {
                        kind: AnomalyKind::UnmatchedOut,
                        punch: punch.clone(),
                    });
                }
            },
        }
    }

    if let Some(trailing) = open_in {
        result.anomalies.push(PunchAnomaly {
            kind: AnomalyKind::UnmatchedIn,
            punch: trailing.clone(),
        });
        result.pairs.push(ShiftPair::open(trailing));
    }

    result
}
