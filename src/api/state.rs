//! Application state for the timeclock engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TenantDirectory;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded tenant settings directory.
#[derive(Clone)]
pub struct AppState {
    /// The loaded organization and location settings.
    tenants: Arc<TenantDirectory>,
}

impl AppState {
    /// Creates a new application state over the given tenant directory.
    pub fn new(tenants: TenantDirectory) -> Self {
        Self {
            tenants: Arc::new(tenants),
        }
    }

    /// Returns a reference to the tenant directory.
    pub fn tenants(&self) -> &TenantDirectory {
        &self.tenants
    }
}
