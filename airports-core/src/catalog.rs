use std::{fs, path::Path};

use log::{debug, info};

use crate::{error::CatalogError, model::AirportRecord};

/// Read-only, in-memory index over the airport dataset.
///
/// Records keep the order they had in the dataset file; every lookup returns
/// results in that order.
#[derive(Debug, Clone, Default)]
pub struct AirportCatalog {
    airports: Vec<AirportRecord>,
}

impl AirportCatalog {
    /// Load the dataset: a JSON array of airport objects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;

        let airports: Vec<AirportRecord> = serde_json::from_str(&contents)
            .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;

        info!("Loaded {} airports from {}", airports.len(), path.display());

        Ok(Self::from_records(airports))
    }

    pub fn from_records(airports: Vec<AirportRecord>) -> Self {
        Self { airports }
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn records(&self) -> &[AirportRecord] {
        &self.airports
    }

    /// Every airport whose name contains `query`, ignoring case.
    ///
    /// An empty query matches the whole catalog.
    pub fn search_by_name(&self, query: &str) -> Vec<&AirportRecord> {
        let needle = query.to_lowercase();

        let found: Vec<&AirportRecord> = self
            .airports
            .iter()
            .filter(|airport| airport.name.to_lowercase().contains(&needle))
            .collect();

        debug!("Name search '{query}' matched {} airports", found.len());
        found
    }

    /// First airport whose IATA code contains `code`.
    ///
    /// Matching is a case-sensitive substring test. With duplicate codes the
    /// earliest record in the dataset wins.
    pub fn lookup_by_iata(&self, code: &str) -> Option<&AirportRecord> {
        self.airports.iter().find(|airport| airport.iata.contains(code))
    }
}
