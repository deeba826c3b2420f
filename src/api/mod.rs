//! HTTP API module for the timeclock engine.
//!
//! This module provides the REST API endpoints for resolving pay periods
//! and computing timesheet hours.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AuthContext, InlineSettingsRequest, PeriodResolveRequest, PunchRequest, TimesheetRequest};
pub use response::{ApiError, TimesheetResponse};
pub use state::AppState;
