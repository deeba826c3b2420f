//! Settings resolution.
//!
//! The one place where location-over-organization precedence is decided.
//! Every consumer works from the [`EffectiveSettings`] produced here instead
//! of re-deriving "location, else organization, else default" inline.

use chrono::NaiveTime;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::types::{
    DEFAULT_AUTO_LUNCH_MINIMUM_SHIFT_HOURS, DEFAULT_AUTO_LUNCH_MINUTES,
    DEFAULT_DAILY_DOUBLETIME_THRESHOLD, DEFAULT_DAILY_OVERTIME_THRESHOLD,
    DEFAULT_MONTHLY_CUT_DAY, DEFAULT_SEMI_MONTH_CUT_1, DEFAULT_SEMI_MONTH_CUT_2,
    DEFAULT_WEEK_START_DAY, DEFAULT_WEEKLY_OVERTIME_THRESHOLD, EffectiveSettings,
    LocationSettings, OrganizationSettings,
};

/// Resolves effective settings from an organization and an optional location.
///
/// For every field the precedence is: location value if present, otherwise
/// organization value, otherwise the built-in default. The single error
/// condition is a missing `pay_period_type` at both levels; everything else
/// always resolves.
///
/// # Example
///
/// ```
/// use timeclock_engine::config::{resolve_settings, OrganizationSettings, PeriodType};
///
/// let mut org = OrganizationSettings::bare("org_001", PeriodType::Weekly);
/// org.week_start_day = Some(1);
///
/// let settings = resolve_settings(&org, None).unwrap();
/// assert_eq!(settings.pay_period_type, PeriodType::Weekly);
/// assert_eq!(settings.week_start_day, 1);
/// ```
pub fn resolve_settings(
    org: &OrganizationSettings,
    location: Option<&LocationSettings>,
) -> EngineResult<EffectiveSettings> {
    let pay_period_type = location
        .and_then(|l| l.pay_period_type)
        .or(org.pay_period_type)
        .ok_or_else(|| EngineError::MissingPayPeriodType {
            organization_id: org.id.clone(),
        })?;

    let cutoff_raw = location
        .and_then(|l| l.cutoff_time.clone())
        .or_else(|| org.cutoff_time.clone());

    Ok(EffectiveSettings {
        pay_period_type,
        week_start_day: location
            .and_then(|l| l.week_start_day)
            .or(org.week_start_day)
            .unwrap_or(DEFAULT_WEEK_START_DAY),
        biweekly_anchor_date: location
            .and_then(|l| l.biweekly_anchor_date)
            .or(org.biweekly_anchor_date),
        semi_month_cut_1: location
            .and_then(|l| l.semi_month_cut_1)
            .or(org.semi_month_cut_1)
            .unwrap_or(DEFAULT_SEMI_MONTH_CUT_1),
        semi_month_cut_2: location
            .and_then(|l| l.semi_month_cut_2)
            .or(org.semi_month_cut_2)
            .unwrap_or(DEFAULT_SEMI_MONTH_CUT_2),
        monthly_cut_day: location
            .and_then(|l| l.monthly_cut_day)
            .or(org.monthly_cut_day)
            .unwrap_or(DEFAULT_MONTHLY_CUT_DAY),
        cutoff_time: parse_cutoff_time(cutoff_raw),
        auto_lunch_enabled: location
            .and_then(|l| l.auto_lunch_enabled)
            .or(org.auto_lunch_enabled)
            .unwrap_or(false),
        auto_lunch_minutes: location
            .and_then(|l| l.auto_lunch_minutes)
            .or(org.auto_lunch_minutes)
            .unwrap_or(DEFAULT_AUTO_LUNCH_MINUTES),
        auto_lunch_minimum_shift_hours: location
            .and_then(|l| l.auto_lunch_minimum_shift_hours)
            .or(org.auto_lunch_minimum_shift_hours)
            .unwrap_or(DEFAULT_AUTO_LUNCH_MINIMUM_SHIFT_HOURS),
        auto_lunch_deduct_once: location
            .and_then(|l| l.auto_lunch_deduct_once)
            .or(org.auto_lunch_deduct_once)
            .unwrap_or(true),
        auto_lunch_ignore_if_break: location
            .and_then(|l| l.auto_lunch_ignore_if_break)
            .or(org.auto_lunch_ignore_if_break)
            .unwrap_or(false),
        overtime_daily_enabled: location
            .and_then(|l| l.overtime_daily_enabled)
            .or(org.overtime_daily_enabled)
            .unwrap_or(false),
        overtime_daily_threshold_hours: location
            .and_then(|l| l.overtime_daily_threshold_hours)
            .or(org.overtime_daily_threshold_hours)
            .unwrap_or(DEFAULT_DAILY_OVERTIME_THRESHOLD),
        doubletime_daily_enabled: location
            .and_then(|l| l.doubletime_daily_enabled)
            .or(org.doubletime_daily_enabled)
            .unwrap_or(false),
        doubletime_daily_threshold_hours: location
            .and_then(|l| l.doubletime_daily_threshold_hours)
            .or(org.doubletime_daily_threshold_hours)
            .unwrap_or(DEFAULT_DAILY_DOUBLETIME_THRESHOLD),
        overtime_weekly_enabled: location
            .and_then(|l| l.overtime_weekly_enabled)
            .or(org.overtime_weekly_enabled)
            .unwrap_or(false),
        overtime_weekly_threshold_hours: location
            .and_then(|l| l.overtime_weekly_threshold_hours)
            .or(org.overtime_weekly_threshold_hours)
            .unwrap_or(DEFAULT_WEEKLY_OVERTIME_THRESHOLD),
    })
}

/// Parses an "HH:MM" cutoff string, degrading to midnight on bad input.
///
/// A broken cutoff string must not block payroll computation; the midnight
/// fallback matches the default and is logged for operators.
fn parse_cutoff_time(raw: Option<String>) -> NaiveTime {
    match raw {
        None => NaiveTime::MIN,
        Some(s) => NaiveTime::parse_from_str(&s, "%H:%M").unwrap_or_else(|_| {
            warn!(cutoff_time = %s, "unparseable cutoff time, falling back to 00:00");
            NaiveTime::MIN
        }),
    }
}
