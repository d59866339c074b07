//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a salary guide
//! from YAML files, either from a directory on disk or from the copy compiled
//! into the crate.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};

use super::types::{GuideMetadata, RateTable, RatesConfig, RolesConfig, SectorsConfig};

const BUILTIN_GUIDE: &str = include_str!("../../config/recruitica_2025/guide.yaml");
const BUILTIN_RATES: &str = include_str!("../../config/recruitica_2025/rates.yaml");
const BUILTIN_ROLES: &str = include_str!("../../config/recruitica_2025/roles.yaml");
const BUILTIN_SECTORS: &str = include_str!("../../config/recruitica_2025/sectors.yaml");

/// Loads and provides access to a salary guide.
///
/// # Directory Structure
///
/// ```text
/// config/recruitica_2025/
/// ├── guide.yaml    # Guide metadata
/// ├── rates.yaml    # Salary bands per region and role
/// ├── roles.yaml    # Billings thresholds and experience bands
/// └── sectors.yaml  # Sector enumeration and policy sets
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/recruitica_2025").unwrap();
/// let entry = loader.rate_table().rate_for("United Kingdom", "Manager").unwrap();
/// println!("Manager band: {}{}-{}", entry.currency_label, entry.min, entry.max);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: RateTable,
}

impl ConfigLoader {
    /// Loads a salary guide from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or the
    /// assembled table fails validation (see [`RateTable::validate`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<GuideMetadata>(&path.join("guide.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;
        let roles = Self::load_yaml::<RolesConfig>(&path.join("roles.yaml"))?;
        let sectors = Self::load_yaml::<SectorsConfig>(&path.join("sectors.yaml"))?;

        Self::from_parts(path.display().to_string(), metadata, rates, roles, sectors)
    }

    /// Loads the 2025 salary guide compiled into the crate.
    pub fn builtin() -> EngineResult<Self> {
        let metadata = Self::parse_yaml::<GuideMetadata>(BUILTIN_GUIDE, "builtin:guide.yaml")?;
        let rates = Self::parse_yaml::<RatesConfig>(BUILTIN_RATES, "builtin:rates.yaml")?;
        let roles = Self::parse_yaml::<RolesConfig>(BUILTIN_ROLES, "builtin:roles.yaml")?;
        let sectors = Self::parse_yaml::<SectorsConfig>(BUILTIN_SECTORS, "builtin:sectors.yaml")?;

        Self::from_parts("builtin".to_string(), metadata, rates, roles, sectors)
    }

    fn from_parts(
        origin: String,
        metadata: GuideMetadata,
        rates: RatesConfig,
        roles: RolesConfig,
        sectors: SectorsConfig,
    ) -> EngineResult<Self> {
        let table = RateTable::new(metadata, rates, roles, sectors);
        table
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: origin,
                message,
            })?;
        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: DeserializeOwned>(content: &str, origin: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.table
    }

    /// Consumes the loader, returning the rate table.
    pub fn into_rate_table(self) -> RateTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/recruitica_2025"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rate_table().guide().code, "RSG2025");
        assert_eq!(
            loader.rate_table().guide().name,
            "Recruitica 2025 Salary Guide"
        );
    }

    #[test]
    fn test_builtin_matches_directory() {
        let builtin = ConfigLoader::builtin().unwrap();
        let loaded = ConfigLoader::load(config_path()).unwrap();

        let a = builtin.rate_table();
        let b = loaded.rate_table();
        assert_eq!(a.guide().version, b.guide().version);
        assert_eq!(
            a.regions().collect::<Vec<_>>(),
            b.regions().collect::<Vec<_>>()
        );
        assert_eq!(a.roles(), b.roles());
    }

    #[test]
    fn test_builtin_has_seven_regions_and_eight_roles() {
        let loader = ConfigLoader::builtin().unwrap();
        let table = loader.rate_table();

        assert_eq!(table.regions().count(), 7);
        assert_eq!(table.roles().len(), 8);
        assert_eq!(table.roles().first(), Some(&"Trainee Recruiter"));
        assert_eq!(table.roles().last(), Some(&"Director"));
    }

    #[test]
    fn test_uk_trainee_band() {
        let loader = ConfigLoader::builtin().unwrap();
        let entry = loader
            .rate_table()
            .rate_for("United Kingdom", "Trainee Recruiter")
            .unwrap();

        assert_eq!(entry.min, Decimal::from(24000));
        assert_eq!(entry.max, Decimal::from(30000));
        assert_eq!(entry.currency_label, "£");
    }

    #[test]
    fn test_dubai_currency_label() {
        let loader = ConfigLoader::builtin().unwrap();
        let entry = loader.rate_table().rate_for("Dubai", "Manager").unwrap();

        assert_eq!(entry.min, Decimal::from(480000));
        assert_eq!(entry.max, Decimal::from(660000));
        assert_eq!(entry.currency_label, "AED");
    }

    #[test]
    fn test_director_billings_threshold() {
        let loader = ConfigLoader::builtin().unwrap();
        assert_eq!(
            loader.rate_table().billings_threshold_for("Director"),
            Some(Decimal::from(1000000))
        );
    }

    #[test]
    fn test_experience_bands_loaded() {
        let loader = ConfigLoader::builtin().unwrap();
        let band = loader
            .rate_table()
            .experience_band_for("Manager")
            .unwrap();

        assert_eq!(band.min_years, 8);
        assert_eq!(band.max_years, 15);
        assert_eq!(band.base_factor, Decimal::new(7, 1));
    }

    #[test]
    fn test_policy_sets_loaded() {
        let loader = ConfigLoader::builtin().unwrap();
        let table = loader.rate_table();

        assert!(table.is_high_demand_sector("Tech"));
        assert!(table.is_high_demand_sector("Finance"));
        assert!(!table.is_high_demand_sector("Legal"));
        assert!(table.is_entry_level_role("Trainee Recruiter"));
        assert!(!table.is_entry_level_role("180 Recruiter"));
        assert_eq!(table.sectors().len(), 8);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("guide.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_parse_yaml_reports_origin() {
        let result = ConfigLoader::parse_yaml::<RatesConfig>("regions: [oops", "inline.yaml");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "inline.yaml");
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }
}
