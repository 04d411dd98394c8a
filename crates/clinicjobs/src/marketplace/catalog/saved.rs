use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::filter::{JobFilter, SalaryBand, Selection};
use crate::marketplace::domain::Region;

static FILTER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_filter_id() -> String {
    let id = FILTER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("filter-{id:06}")
}

/// Named snapshot of the search criteria. The only entity that survives a
/// restart; persisted as a JSON array under a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFilter {
    pub id: String,
    pub name: String,
    pub search_term: String,
    pub salary_label: String,
    pub regions: Vec<Region>,
}

impl SavedFilter {
    /// Captures the current criteria under a user-assigned name, or an
    /// auto-generated `Filtro N` when the name is blank.
    pub fn capture(filter: &JobFilter, name: Option<String>, existing: usize) -> Self {
        let name = name
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| format!("Filtro {}", existing + 1));

        Self {
            id: next_filter_id(),
            name,
            search_term: filter.search_term.clone(),
            salary_label: filter.salary.label.to_string(),
            regions: filter.regions.values().to_vec(),
        }
    }

    /// Restores the captured tuple. The salary range is re-derived from its
    /// label; a label missing from the table (hand-edited file) falls back to
    /// the unbounded band. Specialties are not captured and reset to all.
    pub fn restore(&self) -> JobFilter {
        JobFilter {
            search_term: self.search_term.clone(),
            regions: Selection::only(self.regions.clone()),
            salary: SalaryBand::by_label(&self.salary_label).unwrap_or_else(SalaryBand::unbounded),
            specialties: Selection::All,
        }
    }
}

/// Storage abstraction so dashboards and tests can swap the backing medium.
pub trait SavedFilterStore: Send + Sync {
    fn list(&self) -> Result<Vec<SavedFilter>, StoreError>;
    fn save(&self, filter: SavedFilter) -> Result<SavedFilter, StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Error enumeration for saved-filter storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("saved filter not found")]
    NotFound,
    #[error("filter store unavailable: {0}")]
    Unavailable(String),
    #[error("stored filters are corrupt: {0}")]
    Corrupt(String),
}

/// Single-file JSON store: the whole list is read on demand and rewritten
/// synchronously on every save or delete. Single writer, same thread — no
/// locking needed beyond the filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<Vec<SavedFilter>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt(err.to_string()))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(StoreError::Unavailable(err.to_string())),
        }
    }

    fn write(&self, filters: &[SavedFilter]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::Unavailable(err.to_string()))?;
        }
        let bytes = serde_json::to_vec_pretty(filters)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        fs::write(&self.path, bytes).map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}

impl SavedFilterStore for JsonFileStore {
    fn list(&self) -> Result<Vec<SavedFilter>, StoreError> {
        self.read()
    }

    fn save(&self, filter: SavedFilter) -> Result<SavedFilter, StoreError> {
        let mut filters = self.read()?;
        filters.push(filter.clone());
        self.write(&filters)?;
        Ok(filter)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut filters = self.read()?;
        let position = filters
            .iter()
            .position(|filter| filter.id == id)
            .ok_or(StoreError::NotFound)?;
        filters.remove(position);
        self.write(&filters)
    }
}
