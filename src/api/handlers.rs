//! HTTP request handlers for the timeclock engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ResolvedPeriod, aggregate_employee_range, aggregate_pay_period, resolve_period};
use crate::config::{EffectiveSettings, resolve_settings};
use crate::error::EngineResult;
use crate::models::PeriodTotals;
use crate::sources::InMemoryPunchSource;

use super::request::{InlineSettingsRequest, PeriodResolveRequest, TimesheetRequest};
use super::response::{ApiError, ApiErrorResponse, TimesheetResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/period/resolve", post(period_resolve_handler))
        .route("/timesheet/calculate", post(timesheet_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into the API error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Resolves effective settings from inline request settings or the tenant
/// directory.
fn settings_for_request(
    state: &AppState,
    organization_id: &str,
    location_id: Option<&str>,
    inline: Option<&InlineSettingsRequest>,
) -> EngineResult<EffectiveSettings> {
    match inline {
        Some(settings) => resolve_settings(&settings.organization, settings.location.as_ref()),
        None => state.tenants().effective_settings(organization_id, location_id),
    }
}

/// Handler for the POST /period/resolve endpoint.
///
/// Resolves the pay period containing the requested date under the
/// caller's effective settings.
async fn period_resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodResolveRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period resolve request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(json_rejection_error(correlation_id, rejection)),
            )
                .into_response();
        }
    };

    let settings = match settings_for_request(
        &state,
        &request.auth.organization_id,
        request.location_id.as_deref(),
        request.settings.as_ref(),
    ) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                organization_id = %request.auth.organization_id,
                error = %err,
                "Settings resolution failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let period = resolve_period(&settings, request.target_date);
    info!(
        correlation_id = %correlation_id,
        organization_id = %request.auth.organization_id,
        period = %period.label,
        "Period resolved"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(period),
    )
        .into_response()
}

/// Handler for the POST /timesheet/calculate endpoint.
///
/// Computes period totals with a daily breakdown from the punches in the
/// request, over either the resolved pay period or an explicit date range.
async fn timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(json_rejection_error(correlation_id, rejection)),
            )
                .into_response();
        }
    };

    let settings = match settings_for_request(
        &state,
        &request.auth.organization_id,
        request.location_id.as_deref(),
        request.settings.as_ref(),
    ) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                organization_id = %request.auth.organization_id,
                error = %err,
                "Settings resolution failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let source = InMemoryPunchSource::new(request.punch_events());
    let start_time = Instant::now();

    let computed: EngineResult<(Option<ResolvedPeriod>, PeriodTotals)> =
        match (request.target_date, request.start_date, request.end_date) {
            (Some(target), None, None) => {
                aggregate_pay_period(&request.employee_id, target, &settings, &source)
                    .map(|(period, totals)| (Some(period), totals))
            }
            (None, Some(start), Some(end)) if start <= end => {
                aggregate_employee_range(&request.employee_id, start, end, &settings, &source)
                    .map(|totals| (None, totals))
            }
            _ => {
                warn!(correlation_id = %correlation_id, "Invalid computation window");
                return (
                    StatusCode::BAD_REQUEST,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(ApiError::validation_error(
                        "Provide either target_date, or start_date and end_date with start_date <= end_date",
                    )),
                )
                    .into_response();
            }
        };

    match computed {
        Ok((period, totals)) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                punches_count = request.punches.len(),
                net_hours = %totals.net_hours,
                duration_us = duration.as_micros(),
                "Timesheet computed successfully"
            );
            let response = TimesheetResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id: request.employee_id,
                period,
                totals,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timesheet computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{AuthContext, PunchRequest};
    use crate::config::{LocationSettings, OrganizationSettings, PeriodType, TenantDirectory};
    use crate::models::PunchDirection;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let mut org = OrganizationSettings::bare("org_001", PeriodType::Weekly);
        org.week_start_day = Some(1);
        org.overtime_daily_enabled = Some(true);
        let location = LocationSettings::bare("loc_001", "org_001");
        AppState::new(TenantDirectory::from_parts(vec![org], vec![location]))
    }

    fn auth() -> AuthContext {
        AuthContext {
            organization_id: "org_001".to_string(),
            user_id: "usr_001".to_string(),
            role: None,
        }
    }

    fn punch(direction: PunchDirection, day: u32, hour: u32) -> PunchRequest {
        PunchRequest {
            direction,
            timestamp: Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap(),
            location_id: None,
        }
    }

    async fn post(router: Router, uri: &str, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_period_resolve_returns_200() {
        let router = create_router(create_test_state());
        let request = PeriodResolveRequest {
            auth: auth(),
            target_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            location_id: None,
            settings: None,
        };

        let response = post(
            router,
            "/period/resolve",
            serde_json::to_string(&request).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let period: ResolvedPeriod = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            period.start_date,
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
        assert_eq!(
            period.end_date,
            NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()
        );
    }

    #[tokio::test]
    async fn test_period_resolve_unknown_org_returns_404() {
        let router = create_router(create_test_state());
        let request = PeriodResolveRequest {
            auth: AuthContext {
                organization_id: "org_missing".to_string(),
                user_id: "usr_001".to_string(),
                role: None,
            },
            target_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            location_id: None,
            settings: None,
        };

        let response = post(
            router,
            "/period/resolve",
            serde_json::to_string(&request).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "ORGANIZATION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_timesheet_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = post(router, "/timesheet/calculate", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_timesheet_missing_window_returns_400() {
        let router = create_router(create_test_state());
        let request = TimesheetRequest {
            auth: auth(),
            employee_id: "emp_001".to_string(),
            location_id: None,
            target_date: None,
            start_date: None,
            end_date: None,
            settings: None,
            punches: Vec::new(),
        };

        let response = post(
            router,
            "/timesheet/calculate",
            serde_json::to_string(&request).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_timesheet_target_date_returns_period_totals() {
        let router = create_router(create_test_state());
        let request = TimesheetRequest {
            auth: auth(),
            employee_id: "emp_001".to_string(),
            location_id: Some("loc_001".to_string()),
            target_date: NaiveDate::from_ymd_opt(2024, 3, 14),
            start_date: None,
            end_date: None,
            settings: None,
            punches: vec![
                punch(PunchDirection::In, 14, 9),
                punch(PunchDirection::Out, 14, 19),
            ],
        };

        let response = post(
            router,
            "/timesheet/calculate",
            serde_json::to_string(&request).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: TimesheetResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.employee_id, "emp_001");
        let period = result.period.unwrap();
        assert_eq!(
            period.start_date,
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
        assert_eq!(result.totals.days.len(), 7);
        assert_eq!(result.totals.net_hours, Decimal::new(10, 0));
        // Daily overtime enabled at the default 8h threshold.
        assert_eq!(result.totals.overtime_hours, Decimal::new(2, 0));
        assert_eq!(result.totals.regular_hours, Decimal::new(8, 0));
    }

    #[tokio::test]
    async fn test_timesheet_explicit_range() {
        let router = create_router(create_test_state());
        let request = TimesheetRequest {
            auth: auth(),
            employee_id: "emp_001".to_string(),
            location_id: None,
            target_date: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 14),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            settings: None,
            punches: vec![
                punch(PunchDirection::In, 14, 9),
                punch(PunchDirection::Out, 14, 17),
                punch(PunchDirection::In, 15, 9),
                punch(PunchDirection::Out, 15, 13),
            ],
        };

        let response = post(
            router,
            "/timesheet/calculate",
            serde_json::to_string(&request).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: TimesheetResponse = serde_json::from_slice(&body).unwrap();

        assert!(result.period.is_none());
        assert_eq!(result.totals.days.len(), 2);
        assert_eq!(result.totals.net_hours, Decimal::new(12, 0));
    }

    #[tokio::test]
    async fn test_timesheet_missing_punch_flagged() {
        let router = create_router(create_test_state());
        let request = TimesheetRequest {
            auth: auth(),
            employee_id: "emp_001".to_string(),
            location_id: None,
            target_date: NaiveDate::from_ymd_opt(2024, 3, 14),
            start_date: None,
            end_date: None,
            settings: None,
            punches: vec![punch(PunchDirection::In, 14, 9)],
        };

        let response = post(
            router,
            "/timesheet/calculate",
            serde_json::to_string(&request).unwrap(),
        )
        .await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: TimesheetResponse = serde_json::from_slice(&body).unwrap();

        assert!(result.totals.missing_punch);
        assert_eq!(result.totals.net_hours, Decimal::ZERO);
    }
}
