//! Request types for the timeclock engine API.
//!
//! This module defines the JSON request structures for the `/period/resolve`
//! and `/timesheet/calculate` endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PunchDirection, PunchEvent};

/// Caller identity and tenant scope attached to every request.
///
/// The organization id here selects whose settings apply; the core
/// calculation code never sees this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// The organization the caller is acting within.
    pub organization_id: String,
    /// The authenticated user making the request.
    pub user_id: String,
    /// The caller's role, when the gateway forwards one.
    #[serde(default)]
    pub role: Option<String>,
}

/// Raw tenant settings supplied inline instead of looked up by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineSettingsRequest {
    /// Organization-level settings.
    pub organization: crate::config::OrganizationSettings,
    /// Optional location-level overrides.
    #[serde(default)]
    pub location: Option<crate::config::LocationSettings>,
}

/// Request body for the `/period/resolve` endpoint.
///
/// Settings come either inline via `settings` or by lookup using
/// `auth.organization_id` and the optional `location_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodResolveRequest {
    /// Caller identity and tenant scope.
    pub auth: AuthContext,
    /// The date whose containing pay period is wanted.
    pub target_date: NaiveDate,
    /// Optional location whose overrides apply.
    #[serde(default)]
    pub location_id: Option<String>,
    /// Inline settings, bypassing the tenant directory.
    #[serde(default)]
    pub settings: Option<InlineSettingsRequest>,
}

/// One punch in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// Whether this is a clock-in or clock-out.
    pub direction: PunchDirection,
    /// The instant the punch was recorded, UTC.
    pub timestamp: DateTime<Utc>,
    /// Where the punch happened, when it differs from the request's location.
    #[serde(default)]
    pub location_id: Option<String>,
}

/// Request body for the `/timesheet/calculate` endpoint.
///
/// The computation window is either the pay period containing `target_date`
/// or the explicit `start_date`/`end_date` range; exactly one form must be
/// supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// Caller identity and tenant scope.
    pub auth: AuthContext,
    /// The employee whose hours are computed.
    pub employee_id: String,
    /// Optional location whose overrides apply.
    #[serde(default)]
    pub location_id: Option<String>,
    /// Resolve the pay period containing this date and compute over it.
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Explicit range start (inclusive), used with `end_date`.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Explicit range end (inclusive), used with `start_date`.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Inline settings, bypassing the tenant directory.
    #[serde(default)]
    pub settings: Option<InlineSettingsRequest>,
    /// The employee's punches; order does not matter.
    pub punches: Vec<PunchRequest>,
}

impl TimesheetRequest {
    /// Converts the request's punches into domain punch events for the
    /// request's employee. Punches without their own location inherit the
    /// request-level one.
    pub fn punch_events(&self) -> Vec<PunchEvent> {
        let default_location = self.location_id.clone().unwrap_or_default();
        self.punches
            .iter()
            .map(|p| PunchEvent {
                employee_id: self.employee_id.clone(),
                location_id: p
                    .location_id
                    .clone()
                    .unwrap_or_else(|| default_location.clone()),
                direction: p.direction,
                timestamp: p.timestamp,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_period_resolve_request() {
        let json = r#"{
            "auth": {
                "organization_id": "org_001",
                "user_id": "usr_001",
                "role": "manager"
            },
            "target_date": "2024-03-14",
            "location_id": "loc_001"
        }"#;

        let request: PeriodResolveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.auth.organization_id, "org_001");
        assert_eq!(request.location_id.as_deref(), Some("loc_001"));
        assert!(request.settings.is_none());
    }

    #[test]
    fn test_deserialize_timesheet_request_with_inline_settings() {
        let json = r#"{
            "auth": {
                "organization_id": "org_001",
                "user_id": "usr_001"
            },
            "employee_id": "emp_001",
            "target_date": "2024-03-14",
            "settings": {
                "organization": {
                    "id": "org_001",
                    "pay_period_type": "weekly",
                    "week_start_day": 1
                }
            },
            "punches": [
                { "direction": "in", "timestamp": "2024-03-14T09:00:00Z" },
                { "direction": "out", "timestamp": "2024-03-14T17:00:00Z" }
            ]
        }"#;

        let request: TimesheetRequest = serde_json::from_str(json).unwrap();
        assert!(request.auth.role.is_none());
        assert_eq!(request.punches.len(), 2);
        let settings = request.settings.as_ref().unwrap();
        assert_eq!(settings.organization.week_start_day, Some(1));
        assert!(settings.location.is_none());
    }

    #[test]
    fn test_punch_events_inherit_request_location() {
        let request = TimesheetRequest {
            auth: AuthContext {
                organization_id: "org_001".to_string(),
                user_id: "usr_001".to_string(),
                role: None,
            },
            employee_id: "emp_001".to_string(),
            location_id: Some("loc_001".to_string()),
            target_date: None,
            start_date: None,
            end_date: None,
            settings: None,
            punches: vec![
                PunchRequest {
                    direction: PunchDirection::In,
                    timestamp: Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap(),
                    location_id: None,
                },
                PunchRequest {
                    direction: PunchDirection::Out,
                    timestamp: Utc.with_ymd_and_hms(2024, 3, 14, 17, 0, 0).unwrap(),
                    location_id: Some("loc_002".to_string()),
                },
            ],
        };

        let events = request.punch_events();
        assert_eq!(events[0].employee_id, "emp_001");
        assert_eq!(events[0].location_id, "loc_001");
        assert_eq!(events[1].location_id, "loc_002");
    }
}
