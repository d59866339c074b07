//! Configuration types for the salary guide.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a salary guide directory, and the read-only [`RateTable`]
//! the engine queries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Metadata about the salary guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideMetadata {
    /// Short code identifying the guide (e.g., "RSG2025").
    pub code: String,
    /// The human-readable name of the guide.
    pub name: String,
    /// The version or publication date of the guide.
    pub version: String,
    /// Where the guide was published.
    pub source_url: String,
}

/// A salary band for a single role within a region, as written in `rates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BandConfig {
    /// Bottom of the band.
    pub min: Decimal,
    /// Top of the band.
    pub max: Decimal,
}

/// The bands for every role within one region.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRates {
    /// The currency label attached to every amount in this region (e.g., "£").
    pub currency: String,
    /// Map of role name to band.
    pub roles: HashMap<String, BandConfig>,
}

/// Rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Map of region name to its bands.
    pub regions: BTreeMap<String, RegionRates>,
}

/// Per-role experience band.
///
/// Carried as reference data; the salary formula applies one logarithmic
/// experience curve to every role and never reads these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBand {
    /// Typical minimum years in the role.
    pub min_years: u32,
    /// Typical maximum years in the role.
    pub max_years: u32,
    /// Factor at the bottom of the band.
    pub base_factor: Decimal,
    /// Factor at the top of the band.
    pub max_factor: Decimal,
}

/// Role-level reference data.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleConfig {
    /// Annual billings considered on-target for the role, in local currency.
    pub billings_threshold: Decimal,
    /// Typical experience band for the role.
    pub experience_band: ExperienceBand,
}

/// Roles configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RolesConfig {
    /// Map of role name to role data.
    pub roles: HashMap<String, RoleConfig>,
}

/// Sector and role policy sets from `sectors.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorsConfig {
    /// Every sector the calculator accepts.
    pub sectors: Vec<String>,
    /// Alternative labels mapped onto a sector (e.g., "Technology" to "Tech").
    #[serde(default)]
    pub sector_aliases: HashMap<String, String>,
    /// Sectors that amplify the specialization bonus.
    pub high_demand_sectors: Vec<String>,
    /// Roles paid at the band minimum without scoring.
    pub entry_level_roles: Vec<String>,
}

/// The band a (region, role) pair resolves to.
///
/// # Example
///
/// ```
/// use salary_engine::config::RateEntry;
/// use rust_decimal::Decimal;
///
/// let entry = RateEntry {
///     min: Decimal::from(24000),
///     max: Decimal::from(30000),
///     currency_label: "£".to_string(),
/// };
/// assert!(entry.min <= entry.max);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Bottom of the band.
    pub min: Decimal,
    /// Top of the band.
    pub max: Decimal,
    /// The region's currency label.
    pub currency_label: String,
}

/// The complete salary guide: every lookup the engine performs.
///
/// Built once at startup and never mutated; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RateTable {
    metadata: GuideMetadata,
    regions: BTreeMap<String, RegionRates>,
    roles: HashMap<String, RoleConfig>,
    sectors: SectorsConfig,
}

impl RateTable {
    /// Creates a new RateTable from its component parts.
    pub fn new(
        metadata: GuideMetadata,
        rates: RatesConfig,
        roles: RolesConfig,
        sectors: SectorsConfig,
    ) -> Self {
        Self {
            metadata,
            regions: rates.regions,
            roles: roles.roles,
            sectors,
        }
    }

    /// Returns the guide metadata.
    pub fn guide(&self) -> &GuideMetadata {
        &self.metadata
    }

    /// Returns true if the region has any bands.
    pub fn has_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Looks up the band for a (region, role) pair.
    pub fn rate_for(&self, region: &str, role: &str) -> Option<RateEntry> {
        let region_rates = self.regions.get(region)?;
        let band = region_rates.roles.get(role)?;
        Some(RateEntry {
            min: band.min,
            max: band.max,
            currency_label: region_rates.currency.clone(),
        })
    }

    /// Looks up the billings threshold for a role.
    pub fn billings_threshold_for(&self, role: &str) -> Option<Decimal> {
        self.roles.get(role).map(|r| r.billings_threshold)
    }

    /// Looks up the experience band for a role.
    pub fn experience_band_for(&self, role: &str) -> Option<&ExperienceBand> {
        self.roles.get(role).map(|r| &r.experience_band)
    }

    /// Returns true if the sector amplifies the specialization bonus.
    pub fn is_high_demand_sector(&self, sector: &str) -> bool {
        self.sectors.high_demand_sectors.iter().any(|s| s == sector)
    }

    /// Returns true if the role bypasses scoring.
    pub fn is_entry_level_role(&self, role: &str) -> bool {
        self.sectors.entry_level_roles.iter().any(|r| r == role)
    }

    /// Resolves a sector label (or one of its aliases) to the canonical sector.
    pub fn canonical_sector(&self, sector: &str) -> Option<&str> {
        let sector = sector.trim();
        let mapped = self
            .sectors
            .sector_aliases
            .get(sector)
            .map(String::as_str)
            .unwrap_or(sector);
        self.sectors
            .sectors
            .iter()
            .find(|s| s.as_str() == mapped)
            .map(String::as_str)
    }

    /// Returns every region with its currency label, ordered by name.
    pub fn regions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.regions
            .iter()
            .map(|(name, rates)| (name.as_str(), rates.currency.as_str()))
    }

    /// Returns every role ordered by seniority (ascending billings threshold).
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<(&String, &RoleConfig)> = self.roles.iter().collect();
        roles.sort_by(|a, b| {
            a.1.billings_threshold
                .cmp(&b.1.billings_threshold)
                .then_with(|| a.0.cmp(b.0))
        });
        roles.into_iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns every accepted sector in configuration order.
    pub fn sectors(&self) -> &[String] {
        &self.sectors.sectors
    }

    /// Returns the high-demand sectors.
    pub fn high_demand_sectors(&self) -> &[String] {
        &self.sectors.high_demand_sectors
    }

    /// Returns the entry-level roles.
    pub fn entry_level_roles(&self) -> &[String] {
        &self.sectors.entry_level_roles
    }

    /// Checks the table's internal consistency.
    ///
    /// Returns a description of the first problem found: a band with
    /// `min > max` or a negative bound, a rated role without a positive
    /// billings threshold, or a policy set naming an unknown sector or role.
    pub fn validate(&self) -> Result<(), String> {
        for (region, rates) in &self.regions {
            for (role, band) in &rates.roles {
                if band.min.is_sign_negative() || band.max.is_sign_negative() {
                    return Err(format!("band for '{}' in '{}' is negative", role, region));
                }
                if band.min > band.max {
                    return Err(format!(
                        "band for '{}' in '{}' has min {} above max {}",
                        role, region, band.min, band.max
                    ));
                }
                match self.roles.get(role) {
                    Some(cfg) if cfg.billings_threshold > Decimal::ZERO => {}
                    Some(_) => {
                        return Err(format!("billings threshold for '{}' must be positive", role));
                    }
                    None => {
                        return Err(format!("role '{}' in '{}' has no role entry", role, region));
                    }
                }
            }
        }

        for sector in &self.sectors.high_demand_sectors {
            if !self.sectors.sectors.contains(sector) {
                return Err(format!("high-demand sector '{}' is not a known sector", sector));
            }
        }
        for (alias, sector) in &self.sectors.sector_aliases {
            if !self.sectors.sectors.contains(sector) {
                return Err(format!("alias '{}' maps to unknown sector '{}'", alias, sector));
            }
        }
        for role in &self.sectors.entry_level_roles {
            if !self.roles.contains_key(role) {
                return Err(format!("entry-level role '{}' is not a known role", role));
            }
        }

        Ok(())
    }
}
