//! External collaborator interfaces.
//!
//! The engine never owns a data-access client. Punch retrieval, settings
//! lookup, and payroll-lock checks are ports injected by the caller, which
//! keeps every calculation testable against in-memory fixtures.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::{LocationSettings, OrganizationSettings, TenantDirectory};
use crate::error::{EngineError, EngineResult};
use crate::models::PunchEvent;

/// Source of punch events for one employee over an instant range.
///
/// Implementations must return punches ascending by timestamp, scoped to the
/// half-open range `[start, end)`.
pub trait PunchSource {
    /// Lists the employee's punches within `[start, end)`.
    fn list_punches(
        &self,
        employee_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Vec<PunchEvent>>;
}

/// Source of raw organization and location settings.
pub trait SettingsSource {
    /// Returns the organization's raw settings, or `None` when unknown.
    fn organization_settings(
        &self,
        organization_id: &str,
    ) -> EngineResult<Option<OrganizationSettings>>;

    /// Returns the location's raw settings, or `None` when unknown.
    fn location_settings(&self, location_id: &str) -> EngineResult<Option<LocationSettings>>;
}

/// Advisory check for APPROVED/LOCKED payroll periods.
///
/// The engine's outputs are always computed; enforcing "no new punches once
/// locked" is the caller's responsibility before writing a punch.
pub trait PeriodLockCheck {
    /// Returns whether the date falls inside a locked payroll period.
    fn is_locked(
        &self,
        organization_id: &str,
        location_id: Option<&str>,
        date: NaiveDate,
    ) -> EngineResult<bool>;
}

/// In-memory punch source backed by a vector, for tests and request-scoped
/// computation over punches already in hand.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPunchSource {
    punches: Vec<PunchEvent>,
}

impl InMemoryPunchSource {
    /// Creates a source over the given punches. Input order does not matter;
    /// punches are sorted by timestamp once here.
    pub fn new(mut punches: Vec<PunchEvent>) -> Self {
        punches.sort_by_key(|p| p.timestamp);
        Self { punches }
    }
}

impl PunchSource for InMemoryPunchSource {
    fn list_punches(
        &self,
        employee_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Vec<PunchEvent>> {
        Ok(self
            .punches
            .iter()
            .filter(|p| {
                p.employee_id == employee_id && p.timestamp >= start && p.timestamp < end
            })
            .cloned()
            .collect())
    }
}

impl SettingsSource for TenantDirectory {
    fn organization_settings(
        &self,
        organization_id: &str,
    ) -> EngineResult<Option<OrganizationSettings>> {
        match self.organization(organization_id) {
            Ok(org) => Ok(Some(org.clone())),
            Err(EngineError::OrganizationNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn location_settings(&self, location_id: &str) -> EngineResult<Option<LocationSettings>> {
        match self.location(location_id) {
            Ok(loc) => Ok(Some(loc.clone())),
            Err(EngineError::LocationNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// A lock check that never reports a locked period.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocks;

impl PeriodLockCheck for NoLocks {
    fn is_locked(&self, _: &str, _: Option<&str>, _: NaiveDate) -> EngineResult<bool> {
        Ok(false)
    }
}

/// One locked payroll window held by [`InMemoryLockCheck`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedRange {
    /// The organization the lock belongs to.
    pub organization_id: String,
    /// Scope the lock to one location, or `None` for the whole organization.
    pub location_id: Option<String>,
    /// First locked day (inclusive).
    pub start_date: NaiveDate,
    /// Last locked day (inclusive).
    pub end_date: NaiveDate,
}

/// In-memory lock check backed by a list of locked ranges.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLockCheck {
    ranges: Vec<LockedRange>,
}

impl InMemoryLockCheck {
    /// Creates a check over the given locked ranges.
    pub fn new(ranges: Vec<LockedRange>) -> Self {
        Self { ranges }
    }
}

impl PeriodLockCheck for InMemoryLockCheck {
    fn is_locked(
        &self,
        organization_id: &str,
        location_id: Option<&str>,
        date: NaiveDate,
    ) -> EngineResult<bool> {
        Ok(self.ranges.iter().any(|range| {
            if range.organization_id != organization_id {
                return false;
            }
            // An organization-wide lock covers every location.
            if let Some(lock_location) = &range.location_id
                && location_id != Some(lock_location.as_str())
            {
                return false;
            }
            date >= range.start_date && date <= range.end_date
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PunchDirection;
    use chrono::TimeZone;

    fn punch(employee_id: &str, direction: PunchDirection, hour: u32) -> PunchEvent {
        PunchEvent {
            employee_id: employee_id.to_string(),
            location_id: "loc_001".to_string(),
            direction,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 14, hour, 0, 0).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_in_memory_source_filters_by_employee() {
        let source = InMemoryPunchSource::new(vec![
            punch("emp_001", PunchDirection::In, 8),
            punch("emp_002", PunchDirection::In, 9),
        ]);

        let start = Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let punches = source.list_punches("emp_001", start, end).unwrap();
        assert_eq!(punches.len(), 1);
        assert_eq!(punches[0].employee_id, "emp_001");
    }

    #[test]
    fn test_in_memory_source_half_open_range() {
        let source = InMemoryPunchSource::new(vec![
            punch("emp_001", PunchDirection::In, 8),
            punch("emp_001", PunchDirection::Out, 12),
        ]);

        // End exactly at the OUT punch's instant excludes it.
        let start = Utc.with_ymd_and_hms(2024, 3, 14, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap();
        let punches = source.list_punches("emp_001", start, end).unwrap();
        assert_eq!(punches.len(), 1);
        assert_eq!(punches[0].direction, PunchDirection::In);
    }

    #[test]
    fn test_in_memory_source_sorts_input() {
        let source = InMemoryPunchSource::new(vec![
            punch("emp_001", PunchDirection::Out, 12),
            punch("emp_001", PunchDirection::In, 8),
        ]);

        let start = Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let punches = source.list_punches("emp_001", start, end).unwrap();
        assert_eq!(punches[0].direction, PunchDirection::In);
        assert_eq!(punches[1].direction, PunchDirection::Out);
    }

    #[test]
    fn test_no_locks_never_locked() {
        assert!(!NoLocks
            .is_locked("org_001", None, date(2024, 3, 14))
            .unwrap());
    }

    #[test]
    fn test_lock_check_matches_org_and_range() {
        let check = InMemoryLockCheck::new(vec![LockedRange {
            organization_id: "org_001".to_string(),
            location_id: None,
            start_date: date(2024, 3, 11),
            end_date: date(2024, 3, 17),
        }]);

        assert!(check.is_locked("org_001", None, date(2024, 3, 14)).unwrap());
        // Org-wide lock covers any location.
        assert!(check
            .is_locked("org_001", Some("loc_009"), date(2024, 3, 14))
            .unwrap());
        assert!(!check.is_locked("org_001", None, date(2024, 3, 18)).unwrap());
        assert!(!check.is_locked("org_002", None, date(2024, 3, 14)).unwrap());
    }

    #[test]
    fn test_location_scoped_lock() {
        let check = InMemoryLockCheck::new(vec![LockedRange {
            organization_id: "org_001".to_string(),
            location_id: Some("loc_001".to_string()),
            start_date: date(2024, 3, 11),
            end_date: date(2024, 3, 17),
        }]);

        assert!(check
            .is_locked("org_001", Some("loc_001"), date(2024, 3, 14))
            .unwrap());
        assert!(!check
            .is_locked("org_001", Some("loc_002"), date(2024, 3, 14))
            .unwrap());
        assert!(!check.is_locked("org_001", None, date(2024, 3, 14)).unwrap());
    }

    #[test]
    fn test_tenant_directory_settings_source() {
        use crate::config::{OrganizationSettings, PeriodType};

        let tenants = TenantDirectory::from_parts(
            vec![OrganizationSettings::bare("org_001", PeriodType::Weekly)],
            Vec::new(),
        );

        let org = tenants.organization_settings("org_001").unwrap();
        assert!(org.is_some());
        assert!(tenants.organization_settings("nope").unwrap().is_none());
        assert!(tenants.location_settings("nope").unwrap().is_none());
    }
}
