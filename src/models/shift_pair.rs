//! Shift pair model.
//!
//! A shift pair is one IN punch matched with the next OUT punch by the
//! punch pairer. A pair with no OUT event represents an unmatched or still
//! open shift; it contributes zero hours but is carried through so reports
//! can surface it.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PunchEvent;

/// One matched IN/OUT pair within a day.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{PunchDirection, PunchEvent, ShiftPair};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let clock_in = PunchEvent {
///     employee_id: "emp_001".to_string(),
///     location_id: "loc_001".to_string(),
///     direction: PunchDirection::In,
///     timestamp: Utc.with_ymd_and_hms(2024, 3, 14, 8, 0, 0).unwrap(),
/// };
/// let clock_out = PunchEvent {
///     direction: PunchDirection::Out,
///     timestamp: Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap(),
///     ..clock_in.clone()
/// };
///
/// let pair = ShiftPair::closed(clock_in, clock_out);
/// assert_eq!(pair.exact_seconds(), Some(14_400));
/// assert_eq!(pair.exact_hours(), Some(Decimal::new(40, 1))); // 4.0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPair {
    /// The clock-in event opening the shift.
    pub in_event: PunchEvent,
    /// The clock-out event closing the shift, or `None` for an unmatched
    /// open shift.
    pub out_event: Option<PunchEvent>,
}

impl ShiftPair {
    /// Creates a completed pair from an IN and its matching OUT.
    pub fn closed(in_event: PunchEvent, out_event: PunchEvent) -> Self {
        Self {
            in_event,
            out_event: Some(out_event),
        }
    }

    /// Creates an unmatched pair for an IN that never closed.
    pub fn open(in_event: PunchEvent) -> Self {
        Self {
            in_event,
            out_event: None,
        }
    }

    /// Returns `true` when the pair has a matching OUT event.
    pub fn is_closed(&self) -> bool {
        self.out_event.is_some()
    }

    /// The exact worked duration in seconds, or `None` for an open pair.
    ///
    /// The pairer only emits closed pairs with strictly positive durations,
    /// so this is non-negative for any pair it produces.
    pub fn exact_seconds(&self) -> Option<i64> {
        self.out_event
            .as_ref()
            .map(|out| (out.timestamp - self.in_event.timestamp).num_seconds())
    }

    /// The exact worked duration in minutes, or `None` for an open pair.
    pub fn exact_minutes(&self) -> Option<Decimal> {
        self.exact_seconds()
            .map(|secs| Decimal::new(secs, 0) / Decimal::new(60, 0))
    }

    /// The exact worked duration in hours, or `None` for an open pair.
    pub fn exact_hours(&self) -> Option<Decimal> {
        self.exact_seconds()
            .map(|secs| Decimal::new(secs, 0) / Decimal::new(3600, 0))
    }

    /// The UTC instant the shift started.
    pub fn started_at(&self) -> chrono::DateTime<Utc> {
        self.in_event.timestamp
    }
}
