//! Pay-period boundary resolution.
//!
//! Given effective settings and a target date, computes the calendar window
//! of the pay period containing that date under the four period schemes.
//! Resolution is pure calendar arithmetic with no failure mode: a biweekly
//! configuration with no anchor date degrades to weekly (documented
//! fallback, never an error).

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{EffectiveSettings, PeriodType};

/// The resolved boundaries of one pay period.
///
/// `start_date` and `end_date` are inclusive calendar dates.
/// `query_start_utc`/`query_end_utc` incorporate the cutoff time and form a
/// half-open instant window `[start, end)` suitable for punch queries, so a
/// boundary instant is never counted twice.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::resolve_period;
/// use timeclock_engine::config::{EffectiveSettings, PeriodType};
/// use chrono::NaiveDate;
///
/// let mut settings = EffectiveSettings::with_defaults(PeriodType::Weekly);
/// settings.week_start_day = 1; // Monday
///
/// let period = resolve_period(&settings, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
/// assert_eq!(period.label, "2024-03-11 to 2024-03-17");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPeriod {
    /// The scheme that produced this period.
    pub period_type: PeriodType,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Start of the punch query window: `start_date` at the cutoff time.
    pub query_start_utc: DateTime<Utc>,
    /// End of the punch query window (exclusive): the day after `end_date`
    /// at the cutoff time.
    pub query_end_utc: DateTime<Utc>,
    /// Human-readable range label, "YYYY-MM-DD to YYYY-MM-DD".
    pub label: String,
}

/// Resolves the pay period containing `target` under the given settings.
pub fn resolve_period(settings: &EffectiveSettings, target: NaiveDate) -> ResolvedPeriod {
    let (period_type, start, end) = match settings.pay_period_type {
        PeriodType::Weekly => weekly_bounds(settings.week_start_day, target),
        PeriodType::Biweekly => match settings.biweekly_anchor_date {
            Some(anchor) => biweekly_bounds(anchor, target),
            None => {
                warn!(
                    target_date = %target,
                    "biweekly period requested without an anchor date, falling back to weekly"
                );
                weekly_bounds(settings.week_start_day, target)
            }
        },
        PeriodType::Semimonthly => {
            semimonthly_bounds(settings.semi_month_cut_1, settings.semi_month_cut_2, target)
        }
        PeriodType::Monthly => monthly_bounds(settings.monthly_cut_day, target),
    };

    let query_start_utc = Utc.from_utc_datetime(&start.and_time(settings.cutoff_time));
    let query_end_utc = Utc.from_utc_datetime(
        &(end + Days::new(1)).and_time(settings.cutoff_time),
    );

    ResolvedPeriod {
        period_type,
        start_date: start,
        end_date: end,
        query_start_utc,
        query_end_utc,
        label: format!("{} to {}", start, end),
    }
}

/// Seven-day window starting on the configured weekday at or before target.
fn weekly_bounds(week_start_day: u8, target: NaiveDate) -> (PeriodType, NaiveDate, NaiveDate) {
    let target_weekday = target.weekday().num_days_from_sunday() as u8;
    let offset = (target_weekday + 7 - week_start_day % 7) % 7;
    let start = target - Days::new(u64::from(offset));
    (PeriodType::Weekly, start, start + Days::new(6))
}

/// Fourteen-day window aligned to the anchor date.
///
/// The offset stays non-negative even for targets before the anchor, so the
/// cycle extends backward in time as well.
fn biweekly_bounds(anchor: NaiveDate, target: NaiveDate) -> (PeriodType, NaiveDate, NaiveDate) {
    let diff_days = (target - anchor).num_days();
    let offset = ((diff_days % 14) + 14) % 14;
    let start = target - Days::new(offset as u64);
    (PeriodType::Biweekly, start, start + Days::new(13))
}

/// Two windows per month split at the configured cut days.
fn semimonthly_bounds(
    cut_1: u32,
    cut_2: u32,
    target: NaiveDate,
) -> (PeriodType, NaiveDate, NaiveDate) {
    // Clamp cut days to the month's length so short months keep every day
    // inside exactly one window.
    let cut_1_date = date_with_clamped_day(target.year(), target.month(), cut_1);
    let cut_2_date = date_with_clamped_day(target.year(), target.month(), cut_2);

    let (start, end) = if target < cut_1_date {
        // Tail of the previous month's second window.
        let prev = month_before(target);
        let start = date_with_clamped_day(prev.year(), prev.month(), cut_2);
        (start, cut_1_date - Days::new(1))
    } else if target < cut_2_date {
        (cut_1_date, cut_2_date - Days::new(1))
    } else {
        // The second window runs up to the next month's first cut, so a
        // first cut later than day 1 pulls the boundary past month end.
        let next = month_after(target);
        let next_cut_1 = date_with_clamped_day(next.year(), next.month(), cut_1);
        (cut_2_date, next_cut_1 - Days::new(1))
    };

    (PeriodType::Semimonthly, start, end)
}

/// One window per month, cut-day to cut-day. A cut day of 1 or less is the
/// calendar month.
fn monthly_bounds(cut_day: u32, target: NaiveDate) -> (PeriodType, NaiveDate, NaiveDate) {
    if cut_day <= 1 {
        let start = date_with_clamped_day(target.year(), target.month(), 1);
        let end = end_of_month(target.year(), target.month());
        return (PeriodType::Monthly, start, end);
    }

    let cut_date = date_with_clamped_day(target.year(), target.month(), cut_day);
    let (start, end) = if target >= cut_date {
        let next = month_after(target);
        let next_cut = date_with_clamped_day(next.year(), next.month(), cut_day);
        (cut_date, next_cut - Days::new(1))
    } else {
        let prev = month_before(target);
        let prev_cut = date_with_clamped_day(prev.year(), prev.month(), cut_day);
        (prev_cut, cut_date - Days::new(1))
    };

    (PeriodType::Monthly, start, end)
}

/// The given day-of-month, clamped to the month's last day.
fn date_with_clamped_day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day.max(1))
        .unwrap_or_else(|| end_of_month(year, month))
}

/// The last day of the given month.
fn end_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // The first of the following month always exists.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid")
        - Days::new(1)
}

/// Some day in the month before the target's month.
fn month_before(target: NaiveDate) -> NaiveDate {
    date_with_clamped_day(target.year(), target.month(), 1) - Days::new(1)
}

/// Some day in the month after the target's month.
fn month_after(target: NaiveDate) -> NaiveDate {
    end_of_month(target.year(), target.month()) + Days::new(1)
}
