//! Settings types, resolution, and tenant loading.
//!
//! This module contains the raw organization/location settings shapes, the
//! resolver that merges them into one effective record, and the YAML-backed
//! tenant directory.

mod loader;
mod resolver;
mod types;

pub use loader::TenantDirectory;
pub use resolver::resolve_settings;
pub use types::{
    DEFAULT_AUTO_LUNCH_MINIMUM_SHIFT_HOURS, DEFAULT_AUTO_LUNCH_MINUTES,
    DEFAULT_DAILY_DOUBLETIME_THRESHOLD, DEFAULT_DAILY_OVERTIME_THRESHOLD,
    DEFAULT_MONTHLY_CUT_DAY, DEFAULT_SEMI_MONTH_CUT_1, DEFAULT_SEMI_MONTH_CUT_2,
    DEFAULT_WEEK_START_DAY, DEFAULT_WEEKLY_OVERTIME_THRESHOLD, EffectiveSettings,
    LocationSettings, OrganizationSettings, PeriodType,
};
