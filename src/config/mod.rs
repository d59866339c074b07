//! Configuration loading and management for the salary estimation engine.
//!
//! This module loads a salary guide (bands, thresholds, sector policy) from
//! YAML files and reads the server settings from the environment.
//!
//! # Example
//!
//! ```
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::builtin().unwrap();
//! println!("Loaded guide: {}", config.rate_table().guide().name);
//! ```

mod loader;
mod server;
mod types;

pub use loader::ConfigLoader;
pub use server::{
    DEFAULT_HOST, DEFAULT_PORT, ENV_PREFIX, NOTION_API_URL, NOTION_ENV_PREFIX, NotionConfig,
    ServerConfig,
};
pub use types::{
    BandConfig, ExperienceBand, GuideMetadata, RateEntry, RateTable, RatesConfig, RegionRates,
    RoleConfig, RolesConfig, SectorsConfig,
};
