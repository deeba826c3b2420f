//! Core data models for the hours engine.
//!
//! This module contains all the domain models used throughout the engine.

mod punch;
mod shift_pair;
mod totals;

pub use punch::{AnomalyKind, PunchAnomaly, PunchDirection, PunchEvent};
pub use shift_pair::ShiftPair;
pub use totals::{DailyTotals, EmployeePeriodTotals, LocationSummary, PeriodTotals, round_hours};
