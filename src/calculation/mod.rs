//! Calculation logic for the timeclock engine.
//!
//! This module contains the computation pipeline: pay-period resolution for
//! the four supported period schemes, punch pairing with anomaly tolerance,
//! the daily hours calculator (auto-lunch deduction and the regular/overtime/
//! doubletime split), and period/range aggregation across days and employees.

mod aggregate;
mod daily_hours;
mod pay_period;
mod punch_pairing;

pub use aggregate::{aggregate_employee_range, aggregate_location, aggregate_pay_period};
pub use daily_hours::compute_daily_totals;
pub use pay_period::{ResolvedPeriod, resolve_period};
pub use punch_pairing::{PairingResult, pair_punches};
