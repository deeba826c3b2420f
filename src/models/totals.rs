//! Daily and period totals models.
//!
//! These are the output structures of the hours engine. Hour fields are kept
//! at full precision internally; rounding to two decimal places happens only
//! at presentation time, so summing days never compounds rounding error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PunchAnomaly;

/// Rounds an hours value to two decimal places for display.
pub fn round_hours(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// Computed hours for one employee on one calendar day (UTC).
///
/// The invariant `regular_hours + overtime_hours + doubletime_hours ==
/// net_hours` holds exactly, since all three buckets are carved from the same
/// net figure.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::DailyTotals;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = DailyTotals::zero(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
/// assert_eq!(day.net_hours, Decimal::ZERO);
/// assert!(!day.missing_punch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// The calendar day these totals cover.
    pub date: NaiveDate,
    /// Exact worked duration in seconds, before any deduction.
    pub exact_seconds: i64,
    /// Sum of valid pair durations, in hours (full precision).
    pub raw_hours: Decimal,
    /// Auto-lunch deduction applied, in hours (zero when not triggered).
    pub auto_lunch_hours: Decimal,
    /// Hours after the auto-lunch deduction, floored at zero.
    pub net_hours: Decimal,
    /// Net hours at or below the overtime threshold.
    pub regular_hours: Decimal,
    /// Net hours above the overtime threshold, up to the doubletime threshold.
    pub overtime_hours: Decimal,
    /// Net hours above the doubletime threshold.
    pub doubletime_hours: Decimal,
    /// Net hours rounded to two decimals for display.
    pub decimal_hours: Decimal,
    /// Set when any punch anomaly was found for this day.
    pub missing_punch: bool,
    /// Structured records of the day's punch irregularities.
    pub anomalies: Vec<PunchAnomaly>,
}

impl DailyTotals {
    /// All-zero totals for a day with no punches.
    pub fn zero(date: NaiveDate) -> Self {
        Self {
            date,
            exact_seconds: 0,
            raw_hours: Decimal::ZERO,
            auto_lunch_hours: Decimal::ZERO,
            net_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            doubletime_hours: Decimal::ZERO,
            decimal_hours: Decimal::ZERO,
            missing_punch: false,
            anomalies: Vec::new(),
        }
    }
}

/// Sum of [`DailyTotals`] across a date range for one employee.
///
/// Accumulation is full precision; callers round with [`round_hours`] when
/// presenting the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Total raw hours over the range.
    pub raw_hours: Decimal,
    /// Total auto-lunch hours deducted over the range.
    pub auto_lunch_hours: Decimal,
    /// Total net hours over the range.
    pub net_hours: Decimal,
    /// Total regular hours over the range.
    pub regular_hours: Decimal,
    /// Total overtime hours over the range.
    pub overtime_hours: Decimal,
    /// Total doubletime hours over the range.
    pub doubletime_hours: Decimal,
    /// Set when any day in the range carries a punch anomaly.
    pub missing_punch: bool,
    /// The per-day breakdown, one entry per calendar day in the range.
    pub days: Vec<DailyTotals>,
}

impl PeriodTotals {
    /// Creates zeroed totals for the given range.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            raw_hours: Decimal::ZERO,
            auto_lunch_hours: Decimal::ZERO,
            net_hours: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            doubletime_hours: Decimal::ZERO,
            missing_punch: false,
            days: Vec::new(),
        }
    }

    /// Folds one day into the period, accumulating at full precision.
    pub fn push_day(&mut self, day: DailyTotals) {
        self.raw_hours += day.raw_hours;
        self.auto_lunch_hours += day.auto_lunch_hours;
        self.net_hours += day.net_hours;
        self.regular_hours += day.regular_hours;
        self.overtime_hours += day.overtime_hours;
        self.doubletime_hours += day.doubletime_hours;
        self.missing_punch |= day.missing_punch;
        self.days.push(day);
    }

    /// Adds another period's sums into this one, without taking its per-day
    /// breakdown. Used for location grand totals.
    pub fn absorb(&mut self, other: &PeriodTotals) {
        self.raw_hours += other.raw_hours;
        self.auto_lunch_hours += other.auto_lunch_hours;
        self.net_hours += other.net_hours;
        self.regular_hours += other.regular_hours;
        self.overtime_hours += other.overtime_hours;
        self.doubletime_hours += other.doubletime_hours;
        self.missing_punch |= other.missing_punch;
    }
}

/// One employee's row in a location summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePeriodTotals {
    /// The employee this row covers.
    pub employee_id: String,
    /// The employee's totals over the range.
    pub totals: PeriodTotals,
}

/// Per-employee totals plus a grand-total row for a whole location or
/// payroll period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSummary {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// One row per employee, in the order employees were supplied.
    pub rows: Vec<EmployeePeriodTotals>,
    /// Sums across all rows; its per-day breakdown is empty.
    pub grand_total: PeriodTotals,
}
