//! Daily hours calculation.
//!
//! Turns one day's shift pairs into raw, net, and tiered hours: auto-lunch
//! deduction first, then doubletime carved off the top, then overtime, with
//! the remainder regular. The three buckets always sum exactly to the net
//! figure. Never fails: a day with zero pairs yields all-zero totals.

use rust_decimal::Decimal;

use crate::config::EffectiveSettings;
use crate::models::{DailyTotals, round_hours};

use super::punch_pairing::PairingResult;

use chrono::NaiveDate;

const SIXTY: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Computes one employee's totals for one calendar day.
///
/// # Example
///
/// ```
/// use timeclock_engine::calculation::{compute_daily_totals, pair_punches};
/// use timeclock_engine::config::{EffectiveSettings, PeriodType};
/// use timeclock_engine::models::{PunchDirection, PunchEvent};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let punch = |direction, hour| PunchEvent {
///     employee_id: "emp_001".to_string(),
///     location_id: "loc_001".to_string(),
///     direction,
///     timestamp: Utc.with_ymd_and_hms(2024, 3, 14, hour, 0, 0).unwrap(),
/// };
///
/// let pairing = pair_punches(&[
///     punch(PunchDirection::In, 8),
///     punch(PunchDirection::Out, 16),
/// ]);
/// let settings = EffectiveSettings::with_defaults(PeriodType::Weekly);
/// let day = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
///
/// let totals = compute_daily_totals(day, &pairing, &settings);
/// assert_eq!(totals.net_hours, Decimal::new(8, 0));
/// assert_eq!(totals.regular_hours, Decimal::new(8, 0));
/// ```
pub fn compute_daily_totals(
    date: NaiveDate,
    pairing: &PairingResult,
    settings: &EffectiveSettings,
) -> DailyTotals {
    let raw_seconds: i64 = pairing
        .closed_pairs()
        .filter_map(|pair| pair.exact_seconds())
        .sum();
    let raw_minutes = Decimal::new(raw_seconds, 0) / SIXTY;
    let raw_hours = raw_minutes / SIXTY;

    let lunch_minutes = auto_lunch_minutes(pairing, raw_hours, settings);
    let net_minutes = (raw_minutes - lunch_minutes).max(Decimal::ZERO);
    let net_hours = net_minutes / SIXTY;

    let (regular_hours, overtime_hours, doubletime_hours) = split_tiers(net_hours, settings);

    DailyTotals {
        date,
        exact_seconds: raw_seconds,
        raw_hours,
        auto_lunch_hours: lunch_minutes / SIXTY,
        net_hours,
        regular_hours,
        overtime_hours,
        doubletime_hours,
        decimal_hours: round_hours(net_hours),
        missing_punch: pairing.has_anomalies(),
        anomalies: pairing.anomalies.clone(),
    }
}

/// The auto-lunch deduction for the day, in minutes.
fn auto_lunch_minutes(
    pairing: &PairingResult,
    raw_hours: Decimal,
    settings: &EffectiveSettings,
) -> Decimal {
    if !settings.auto_lunch_enabled {
        return Decimal::ZERO;
    }

    // Two or more completed pairs mean the employee clocked out for a real
    // break; the deduction would double-count it.
    if settings.auto_lunch_ignore_if_break && pairing.closed_pairs().count() >= 2 {
        return Decimal::ZERO;
    }

    let deduction = Decimal::new(settings.auto_lunch_minutes, 0);
    if settings.auto_lunch_deduct_once {
        if raw_hours >= settings.auto_lunch_minimum_shift_hours {
            deduction
        } else {
            Decimal::ZERO
        }
    } else {
        // Per-shift mode: each pair qualifies on its own duration.
        let qualifying = pairing
            .closed_pairs()
            .filter_map(|pair| pair.exact_hours())
            .filter(|hours| *hours >= settings.auto_lunch_minimum_shift_hours)
            .count();
        deduction * Decimal::new(qualifying as i64, 0)
    }
}

/// Splits net hours into (regular, overtime, doubletime).
///
/// Doubletime is carved first from above its threshold, then overtime from
/// the remainder; disabled tiers leave their hours in the lower bucket.
/// Subtraction only, so the three buckets sum back to net exactly.
fn split_tiers(net_hours: Decimal, settings: &EffectiveSettings) -> (Decimal, Decimal, Decimal) {
    let (doubletime, remaining) = if settings.doubletime_daily_enabled {
        let threshold = settings.doubletime_daily_threshold_hours;
        if net_hours > threshold {
            (net_hours - threshold, threshold)
        } else {
            (Decimal::ZERO, net_hours)
        }
    } else {
        (Decimal::ZERO, net_hours)
    };

    let (overtime, regular) = if settings.overtime_daily_enabled {
        let threshold = settings.overtime_daily_threshold_hours;
        if remaining > threshold {
            (remaining - threshold, threshold)
        } else {
            (Decimal::ZERO, remaining)
        }
    } else {
        (Decimal::ZERO, remaining)
    };

    (regular, overtime, doubletime)
}
