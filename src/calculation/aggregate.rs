//! Period and range aggregation.
//!
//! Walks a date range day by day, pairs each day's punches, runs the daily
//! calculator, and rolls the results up for an employee or a whole location.
//! Days are computed independently: a day's auto-lunch and tier split never
//! depend on a neighboring day's totals, so aggregation parallelizes across
//! both employees and days with no shared state.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::config::EffectiveSettings;
use crate::error::EngineResult;
use crate::models::{EmployeePeriodTotals, LocationSummary, PeriodTotals, PunchEvent};
use crate::sources::PunchSource;

use super::daily_hours::compute_daily_totals;
use super::pay_period::{ResolvedPeriod, resolve_period};
use super::punch_pairing::pair_punches;

/// Aggregates one employee's hours over an inclusive date range.
///
/// Punches are fetched over the cutoff-shifted half-open instant window and
/// bucketed by work day: a punch before the cutoff belongs to the previous
/// calendar day, so an overnight shift that closes at 02:00 under a 04:00
/// cutoff still lands on the day it started. Every day in the range gets
/// a totals entry, including days with zero punches, so the result is a
/// complete calendar. Accumulation is full precision; rounding is left to
/// the presentation layer.
///
/// The only failure mode is the punch source itself; malformed punch data
/// degrades to per-day anomaly records.
pub fn aggregate_employee_range<S: PunchSource + ?Sized>(
    employee_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    settings: &EffectiveSettings,
    punch_source: &S,
) -> EngineResult<PeriodTotals> {
    let query_start = Utc.from_utc_datetime(&start_date.and_time(settings.cutoff_time));
    let query_end =
        Utc.from_utc_datetime(&(end_date + Days::new(1)).and_time(settings.cutoff_time));

    let punches = punch_source.list_punches(employee_id, query_start, query_end)?;

    let cutoff_offset = settings.cutoff_time - NaiveTime::MIN;
    let mut by_day: BTreeMap<NaiveDate, Vec<PunchEvent>> = BTreeMap::new();
    for punch in punches {
        let work_day = (punch.timestamp.naive_utc() - cutoff_offset).date();
        by_day.entry(work_day).or_default().push(punch);
    }

    let mut totals = PeriodTotals::new(start_date, end_date);
    let mut day = start_date;
    while day <= end_date {
        let pairing = match by_day.get(&day) {
            Some(day_punches) => pair_punches(day_punches),
            None => Default::default(),
        };
        totals.push_day(compute_daily_totals(day, &pairing, settings));
        day = day + Days::new(1);
    }

    Ok(totals)
}

/// Resolves the pay period containing `target_date` and aggregates the
/// employee's hours over it.
pub fn aggregate_pay_period<S: PunchSource + ?Sized>(
    employee_id: &str,
    target_date: NaiveDate,
    settings: &EffectiveSettings,
    punch_source: &S,
) -> EngineResult<(ResolvedPeriod, PeriodTotals)> {
    let period = resolve_period(settings, target_date);
    let totals = aggregate_employee_range(
        employee_id,
        period.start_date,
        period.end_date,
        settings,
        punch_source,
    )?;
    Ok((period, totals))
}

/// Aggregates a set of employees over a range and adds a grand-total row.
///
/// Rows come back in the order employees were supplied; the grand total
/// carries sums only, with no per-day breakdown.
pub fn aggregate_location<S: PunchSource + ?Sized>(
    employee_ids: &[String],
    start_date: NaiveDate,
    end_date: NaiveDate,
    settings: &EffectiveSettings,
    punch_source: &S,
) -> EngineResult<LocationSummary> {
    let mut rows = Vec::with_capacity(employee_ids.len());
    let mut grand_total = PeriodTotals::new(start_date, end_date);

    for employee_id in employee_ids {
        let totals =
            aggregate_employee_range(employee_id, start_date, end_date, settings, punch_source)?;
        grand_total.absorb(&totals);
        rows.push(EmployeePeriodTotals {
            employee_id: employee_id.clone(),
            totals,
        });
    }

    Ok(LocationSummary {
        start_date,
        end_date,
        rows,
        grand_total,
    })
}
