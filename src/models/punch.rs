//! Punch event model and anomaly reporting types.
//!
//! A punch is a single clock action recorded by a kiosk (face recognition,
//! PIN, or manual entry). Punches for one employee are conceptually
//! alternating IN/OUT, but the data model does not enforce this: malformed
//! sequences must be tolerated and reported, not rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The direction of a punch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchDirection {
    /// A clock-in, opening a shift.
    In,
    /// A clock-out, closing the open shift.
    Out,
}

impl std::fmt::Display for PunchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunchDirection::In => write!(f, "IN"),
            PunchDirection::Out => write!(f, "OUT"),
        }
    }
}

/// A single clock-in or clock-out event.
///
/// Punches are immutable once recorded. Timestamps are UTC instants; the
/// calendar day a punch belongs to is derived from the UTC date of its
/// timestamp.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{PunchDirection, PunchEvent};
/// use chrono::{TimeZone, Utc};
///
/// let punch = PunchEvent {
///     employee_id: "emp_001".to_string(),
///     location_id: "loc_001".to_string(),
///     direction: PunchDirection::In,
///     timestamp: Utc.with_ymd_and_hms(2024, 3, 14, 8, 0, 0).unwrap(),
/// };
/// assert_eq!(punch.direction, PunchDirection::In);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    /// The employee who punched.
    pub employee_id: String,
    /// The location (kiosk site) where the punch was recorded.
    pub location_id: String,
    /// Whether this punch is a clock-in or a clock-out.
    pub direction: PunchDirection,
    /// The UTC instant of the punch.
    pub timestamp: DateTime<Utc>,
}

/// The kind of irregularity found while pairing punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// An IN punch with no matching OUT (double-IN or trailing open shift).
    UnmatchedIn,
    /// An OUT punch arriving while no shift was open.
    UnmatchedOut,
    /// A matched pair whose duration was zero or negative (clock skew or
    /// bad data); the pair is voided and contributes zero hours.
    NonPositiveDuration,
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnomalyKind::UnmatchedIn => write!(f, "unmatched IN"),
            AnomalyKind::UnmatchedOut => write!(f, "unmatched OUT"),
            AnomalyKind::NonPositiveDuration => write!(f, "non-positive duration"),
        }
    }
}

/// A structured record of one punch-data irregularity.
///
/// Anomalies are data, not errors: a report can flag them to a human while
/// the rest of the computation proceeds normally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchAnomaly {
    /// What kind of irregularity was found.
    pub kind: AnomalyKind,
    /// The punch that triggered the anomaly (the IN for unmatched or voided
    /// shifts, the OUT for stray clock-outs).
    pub punch: PunchEvent,
}
