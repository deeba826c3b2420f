//! Tenant settings loading.
//!
//! This module provides the [`TenantDirectory`] type for loading
//! organization and location settings from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::resolver::resolve_settings;
use super::types::{EffectiveSettings, LocationSettings, OrganizationSettings};

#[derive(Debug, Deserialize)]
struct OrganizationsFile {
    organizations: Vec<OrganizationSettings>,
}

#[derive(Debug, Deserialize)]
struct LocationsFile {
    #[serde(default)]
    locations: Vec<LocationSettings>,
}

/// Loads and provides access to per-tenant settings.
///
/// The `TenantDirectory` reads YAML settings files from a directory and
/// provides lookup by organization or location id.
///
/// # Directory Structure
///
/// ```text
/// tenants/
/// ├── organizations.yaml   # One entry per organization
/// └── locations.yaml       # One entry per location (optional overrides)
/// ```
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::TenantDirectory;
///
/// let tenants = TenantDirectory::load("./tenants").unwrap();
/// let settings = tenants.effective_settings("org_001", Some("loc_001")).unwrap();
/// println!("Period type: {}", settings.pay_period_type);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TenantDirectory {
    organizations: HashMap<String, OrganizationSettings>,
    locations: HashMap<String, LocationSettings>,
}

impl TenantDirectory {
    /// Loads settings from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tenants directory (e.g., "./tenants")
    ///
    /// # Returns
    ///
    /// Returns a `TenantDirectory` on success, or an error if
    /// `organizations.yaml` is missing or any file contains invalid YAML.
    /// `locations.yaml` is optional; organizations without location records
    /// simply have no overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organizations_path = path.join("organizations.yaml");
        let organizations_file = Self::load_yaml::<OrganizationsFile>(&organizations_path)?;

        let locations_path = path.join("locations.yaml");
        let locations = if locations_path.exists() {
            Self::load_yaml::<LocationsFile>(&locations_path)?.locations
        } else {
            Vec::new()
        };

        Ok(Self::from_parts(organizations_file.organizations, locations))
    }

    /// Builds a directory from already-loaded settings records.
    pub fn from_parts(
        organizations: Vec<OrganizationSettings>,
        locations: Vec<LocationSettings>,
    ) -> Self {
        Self {
            organizations: organizations
                .into_iter()
                .map(|o| (o.id.clone(), o))
                .collect(),
            locations: locations.into_iter().map(|l| (l.id.clone(), l)).collect(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets an organization's raw settings by id.
    pub fn organization(&self, id: &str) -> EngineResult<&OrganizationSettings> {
        self.organizations
            .get(id)
            .ok_or_else(|| EngineError::OrganizationNotFound { id: id.to_string() })
    }

    /// Gets a location's raw settings by id.
    pub fn location(&self, id: &str) -> EngineResult<&LocationSettings> {
        self.locations
            .get(id)
            .ok_or_else(|| EngineError::LocationNotFound { id: id.to_string() })
    }

    /// Resolves effective settings for an organization and optional location.
    pub fn effective_settings(
        &self,
        organization_id: &str,
        location_id: Option<&str>,
    ) -> EngineResult<EffectiveSettings> {
        let org = self.organization(organization_id)?;
        let location = match location_id {
            Some(id) => Some(self.location(id)?),
            None => None,
        };
        resolve_settings(org, location)
    }
}
