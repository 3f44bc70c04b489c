//! Catalog and behavior options for a dropdown instance.
//!
//! Both types deserialize from JSON with every field optional, so a catalog
//! file only needs to name what differs from the built-in travel-quote list.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Destinations offered by the travel-quote form.
const DEFAULT_DESTINATIONS: [&str; 9] = [
    "Bali [Indonesia]",
    "New Zealand",
    "USA [United States]",
    "United Kingdom",
    "Austria",
    "Canada",
    "World Wide",
    "All of Europe",
    "All of Asia",
];

/// Umbrella options drawn below the divider.
const DEFAULT_BROAD_REGIONS: [&str; 3] = ["World Wide", "All of Europe", "All of Asia"];

/// Default delay before an announcement reaches the live region.
pub const DEFAULT_ANNOUNCE_DELAY_MS: u64 = 100;

/// The candidate list and its fixed metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub destinations: Vec<String>,
    pub broad_regions: Vec<String>,
    pub preselected: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            destinations: DEFAULT_DESTINATIONS.iter().map(|s| s.to_string()).collect(),
            broad_regions: DEFAULT_BROAD_REGIONS.iter().map(|s| s.to_string()).collect(),
            preselected: Vec::new(),
        }
    }
}

impl Catalog {
    /// Build a catalog from bare labels, with no broad regions.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            destinations: labels.into_iter().map(Into::into).collect(),
            broad_regions: Vec::new(),
            preselected: Vec::new(),
        }
    }

    /// Read and validate a catalog from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            destinations = catalog.destinations.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that labels are unique and every referenced label is a destination.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.destinations.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for label in &self.destinations {
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateCandidate(label.clone()));
            }
        }

        if let Some(region) = self.broad_regions.iter().find(|r| !seen.contains(r.as_str())) {
            return Err(ConfigError::UnknownBroadRegion(region.clone()));
        }

        if let Some(label) = self.preselected.iter().find(|l| !seen.contains(l.as_str())) {
            return Err(ConfigError::UnknownPreselected(label.clone()));
        }

        Ok(())
    }
}

/// Integrator-facing switches for one dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownOptions {
    /// Close the list after an item is committed.
    pub close_on_select: bool,
    /// Reset the filter term after a successful selection.
    pub clear_filter_on_select: bool,
    pub announce_delay_ms: u64,
    /// Singular noun used in announcements ("3 destinations selected.").
    pub noun: String,
    /// Placeholder row shown when nothing matches the filter.
    pub empty_message: String,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            close_on_select: false,
            clear_filter_on_select: true,
            announce_delay_ms: DEFAULT_ANNOUNCE_DELAY_MS,
            noun: "destination".to_string(),
            empty_message: "Destination not found".to_string(),
        }
    }
}

impl DropdownOptions {
    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
    }
}
