//! Configuration types for pay-period and hours computation.
//!
//! Raw organization and location settings mirror what a settings source
//! returns: every field optional, with location values overriding
//! organization values field-by-field. [`EffectiveSettings`] is the fully
//! resolved record the calculation modules consume.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recurring calendar scheme a pay period follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    /// Seven-day periods starting on a configured weekday.
    Weekly,
    /// Fourteen-day periods aligned to an anchor date.
    Biweekly,
    /// Two periods per month, split at two configured cut days.
    Semimonthly,
    /// One period per month, starting at a configured cut day.
    Monthly,
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodType::Weekly => write!(f, "weekly"),
            PeriodType::Biweekly => write!(f, "biweekly"),
            PeriodType::Semimonthly => write!(f, "semimonthly"),
            PeriodType::Monthly => write!(f, "monthly"),
        }
    }
}

/// Default week start day (0 = Sunday).
pub const DEFAULT_WEEK_START_DAY: u8 = 0;

/// Default first semimonthly cut day of the month.
pub const DEFAULT_SEMI_MONTH_CUT_1: u32 = 1;

/// Default second semimonthly cut day of the month.
pub const DEFAULT_SEMI_MONTH_CUT_2: u32 = 16;

/// Default monthly cut day (1 = calendar month).
pub const DEFAULT_MONTHLY_CUT_DAY: u32 = 1;

/// Default auto-lunch deduction in minutes.
pub const DEFAULT_AUTO_LUNCH_MINUTES: i64 = 30;

/// Default minimum shift length, in hours, before auto-lunch applies.
pub const DEFAULT_AUTO_LUNCH_MINIMUM_SHIFT_HOURS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default daily doubletime threshold in hours.
pub const DEFAULT_DAILY_DOUBLETIME_THRESHOLD: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Default weekly overtime threshold in hours.
pub const DEFAULT_WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Raw organization-level settings, as returned by a settings source.
///
/// Every field except the id may be absent; absent fields fall through to
/// built-in defaults during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSettings {
    /// Unique identifier for the organization.
    pub id: String,
    /// The pay period scheme. Required at some level: resolution fails when
    /// neither the organization nor the location provides it.
    #[serde(default)]
    pub pay_period_type: Option<PeriodType>,
    /// Week start day for weekly periods (0 = Sunday .. 6 = Saturday).
    #[serde(default)]
    pub week_start_day: Option<u8>,
    /// Anchor date defining the 14-day biweekly cycle.
    #[serde(default)]
    pub biweekly_anchor_date: Option<NaiveDate>,
    /// First semimonthly cut day of the month.
    #[serde(default)]
    pub semi_month_cut_1: Option<u32>,
    /// Second semimonthly cut day of the month.
    #[serde(default)]
    pub semi_month_cut_2: Option<u32>,
    /// Monthly cut day; 1 or less means the calendar month.
    #[serde(default)]
    pub monthly_cut_day: Option<u32>,
    /// Day boundary time as "HH:MM"; punches before this time count toward
    /// the previous period day.
    #[serde(default)]
    pub cutoff_time: Option<String>,
    /// Whether auto-lunch deduction is on.
    #[serde(default)]
    pub auto_lunch_enabled: Option<bool>,
    /// Minutes deducted when auto-lunch triggers.
    #[serde(default)]
    pub auto_lunch_minutes: Option<i64>,
    /// Minimum raw hours in a day before auto-lunch triggers.
    #[serde(default)]
    pub auto_lunch_minimum_shift_hours: Option<Decimal>,
    /// Deduct once per day (true) or once per qualifying shift (false).
    #[serde(default)]
    pub auto_lunch_deduct_once: Option<bool>,
    /// Skip the deduction when the employee already took a break that day.
    #[serde(default)]
    pub auto_lunch_ignore_if_break: Option<bool>,
    /// Whether daily overtime applies.
    #[serde(default)]
    pub overtime_daily_enabled: Option<bool>,
    /// Daily overtime threshold in hours.
    #[serde(default)]
    pub overtime_daily_threshold_hours: Option<Decimal>,
    /// Whether daily doubletime applies.
    #[serde(default)]
    pub doubletime_daily_enabled: Option<bool>,
    /// Daily doubletime threshold in hours.
    #[serde(default)]
    pub doubletime_daily_threshold_hours: Option<Decimal>,
    /// Whether weekly overtime applies.
    #[serde(default)]
    pub overtime_weekly_enabled: Option<bool>,
    /// Weekly overtime threshold in hours.
    #[serde(default)]
    pub overtime_weekly_threshold_hours: Option<Decimal>,
}

impl OrganizationSettings {
    /// An organization with only an id and a pay period type set.
    pub fn bare(id: impl Into<String>, pay_period_type: PeriodType) -> Self {
        Self {
            id: id.into(),
            pay_period_type: Some(pay_period_type),
            week_start_day: None,
            biweekly_anchor_date: None,
            semi_month_cut_1: None,
            semi_month_cut_2: None,
            monthly_cut_day: None,
            cutoff_time: None,
            auto_lunch_enabled: None,
            auto_lunch_minutes: None,
            auto_lunch_minimum_shift_hours: None,
            auto_lunch_deduct_once: None,
            auto_lunch_ignore_if_break: None,
            overtime_daily_enabled: None,
            overtime_daily_threshold_hours: None,
            doubletime_daily_enabled: None,
            doubletime_daily_threshold_hours: None,
            overtime_weekly_enabled: None,
            overtime_weekly_threshold_hours: None,
        }
    }
}

/// Raw location-level settings, as returned by a settings source.
///
/// Identical shape to [`OrganizationSettings`]; any non-null field here
/// overrides the organization's value for computations at this location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSettings {
    /// Unique identifier for the location.
    pub id: String,
    /// The organization this location belongs to.
    pub organization_id: String,
    /// Overrides the organization's pay period scheme.
    #[serde(default)]
    pub pay_period_type: Option<PeriodType>,
    /// Overrides the organization's week start day.
    #[serde(default)]
    pub week_start_day: Option<u8>,
    /// Overrides the organization's biweekly anchor date.
    #[serde(default)]
    pub biweekly_anchor_date: Option<NaiveDate>,
    /// Overrides the organization's first semimonthly cut day.
    #[serde(default)]
    pub semi_month_cut_1: Option<u32>,
    /// Overrides the organization's second semimonthly cut day.
    #[serde(default)]
    pub semi_month_cut_2: Option<u32>,
    /// Overrides the organization's monthly cut day.
    #[serde(default)]
    pub monthly_cut_day: Option<u32>,
    /// Overrides the organization's cutoff time.
    #[serde(default)]
    pub cutoff_time: Option<String>,
    /// Overrides whether auto-lunch deduction is on.
    #[serde(default)]
    pub auto_lunch_enabled: Option<bool>,
    /// Overrides the auto-lunch deduction minutes.
    #[serde(default)]
    pub auto_lunch_minutes: Option<i64>,
    /// Overrides the auto-lunch minimum shift hours.
    #[serde(default)]
    pub auto_lunch_minimum_shift_hours: Option<Decimal>,
    /// Overrides the once-per-day deduction flag.
    #[serde(default)]
    pub auto_lunch_deduct_once: Option<bool>,
    /// Overrides the skip-when-break-taken flag.
    #[serde(default)]
    pub auto_lunch_ignore_if_break: Option<bool>,
    /// Overrides whether daily overtime applies.
    #[serde(default)]
    pub overtime_daily_enabled: Option<bool>,
    /// Overrides the daily overtime threshold.
    #[serde(default)]
    pub overtime_daily_threshold_hours: Option<Decimal>,
    /// Overrides whether daily doubletime applies.
    #[serde(default)]
    pub doubletime_daily_enabled: Option<bool>,
    /// Overrides the daily doubletime threshold.
    #[serde(default)]
    pub doubletime_daily_threshold_hours: Option<Decimal>,
    /// Overrides whether weekly overtime applies.
    #[serde(default)]
    pub overtime_weekly_enabled: Option<bool>,
    /// Overrides the weekly overtime threshold.
    #[serde(default)]
    pub overtime_weekly_threshold_hours: Option<Decimal>,
}

impl LocationSettings {
    /// A location with only ids set, inheriting everything from its
    /// organization.
    pub fn bare(id: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            organization_id: organization_id.into(),
            pay_period_type: None,
            week_start_day: None,
            biweekly_anchor_date: None,
            semi_month_cut_1: None,
            semi_month_cut_2: None,
            monthly_cut_day: None,
            cutoff_time: None,
            auto_lunch_enabled: None,
            auto_lunch_minutes: None,
            auto_lunch_minimum_shift_hours: None,
            auto_lunch_deduct_once: None,
            auto_lunch_ignore_if_break: None,
            overtime_daily_enabled: None,
            overtime_daily_threshold_hours: None,
            doubletime_daily_enabled: None,
            doubletime_daily_threshold_hours: None,
            overtime_weekly_enabled: None,
            overtime_weekly_threshold_hours: None,
        }
    }
}

/// The fully resolved configuration consumed by the calculation modules.
///
/// Computed fresh per request by the settings resolver; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    /// The pay period scheme in effect.
    pub pay_period_type: PeriodType,
    /// Week start day for weekly periods (0 = Sunday .. 6 = Saturday).
    pub week_start_day: u8,
    /// Anchor date for the biweekly cycle. When absent, biweekly resolution
    /// degrades to weekly (documented fallback, never an error).
    pub biweekly_anchor_date: Option<NaiveDate>,
    /// First semimonthly cut day.
    pub semi_month_cut_1: u32,
    /// Second semimonthly cut day.
    pub semi_month_cut_2: u32,
    /// Monthly cut day; 1 or less means the calendar month.
    pub monthly_cut_day: u32,
    /// Day boundary time applied when converting period dates to query
    /// instants.
    pub cutoff_time: NaiveTime,
    /// Whether auto-lunch deduction is on.
    pub auto_lunch_enabled: bool,
    /// Minutes deducted when auto-lunch triggers.
    pub auto_lunch_minutes: i64,
    /// Minimum raw hours in a day before auto-lunch triggers.
    pub auto_lunch_minimum_shift_hours: Decimal,
    /// Deduct once per day (true) or once per qualifying shift (false).
    pub auto_lunch_deduct_once: bool,
    /// Skip the deduction when the day already contains a real break.
    pub auto_lunch_ignore_if_break: bool,
    /// Whether daily overtime applies.
    pub overtime_daily_enabled: bool,
    /// Daily overtime threshold in hours.
    pub overtime_daily_threshold_hours: Decimal,
    /// Whether daily doubletime applies.
    pub doubletime_daily_enabled: bool,
    /// Daily doubletime threshold in hours.
    pub doubletime_daily_threshold_hours: Decimal,
    /// Whether weekly overtime applies. Carried for callers; the aggregator
    /// computes days independently and applies no weekly reclassification.
    pub overtime_weekly_enabled: bool,
    /// Weekly overtime threshold in hours.
    pub overtime_weekly_threshold_hours: Decimal,
}

impl EffectiveSettings {
    /// Built-in defaults for the given period type, as produced by resolving
    /// an organization that sets nothing but `pay_period_type`.
    pub fn with_defaults(pay_period_type: PeriodType) -> Self {
        Self {
            pay_period_type,
            week_start_day: DEFAULT_WEEK_START_DAY,
            biweekly_anchor_date: None,
            semi_month_cut_1: DEFAULT_SEMI_MONTH_CUT_1,
            semi_month_cut_2: DEFAULT_SEMI_MONTH_CUT_2,
            monthly_cut_day: DEFAULT_MONTHLY_CUT_DAY,
            cutoff_time: NaiveTime::MIN,
            auto_lunch_enabled: false,
            auto_lunch_minutes: DEFAULT_AUTO_LUNCH_MINUTES,
            auto_lunch_minimum_shift_hours: DEFAULT_AUTO_LUNCH_MINIMUM_SHIFT_HOURS,
            auto_lunch_deduct_once: true,
            auto_lunch_ignore_if_break: false,
            overtime_daily_enabled: false,
            overtime_daily_threshold_hours: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            doubletime_daily_enabled: false,
            doubletime_daily_threshold_hours: DEFAULT_DAILY_DOUBLETIME_THRESHOLD,
            overtime_weekly_enabled: false,
            overtime_weekly_threshold_hours: DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
        }
    }
}
