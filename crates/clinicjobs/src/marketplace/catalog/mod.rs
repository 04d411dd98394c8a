mod filter;
mod saved;

pub use filter::{CandidateFilter, JobFilter, SalaryBand, Selection, SALARY_BANDS};
pub use saved::{JsonFileStore, SavedFilter, SavedFilterStore, StoreError};

use std::io::Read;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ContractType, Region};

/// Advertised opening in the read-only mock catalog. Listings are never
/// created or mutated in-session; publishing by a clinic only acknowledges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub clinic_id: String,
    pub clinic_name: String,
    pub title: String,
    pub specialty: String,
    pub location: String,
    pub region: Region,
    pub salary_range: String,
    pub min_salary_value: u32,
    pub description: String,
    pub contract_type: ContractType,
    pub posted_at: NaiveDate,
}

/// Dentist summary browsed from the clinic dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub experience_years: u8,
    pub rating: f32,
    pub bio: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog row is malformed: {0}")]
    Malformed(#[from] csv::Error),
    #[error("unknown region label '{0}'")]
    UnknownRegion(String),
    #[error("unknown contract type '{0}'")]
    UnknownContractType(String),
    #[error("invalid posted_at date '{0}'")]
    InvalidDate(String),
}

const JOB_SEED: &str = include_str!("seed/jobs.csv");
const CANDIDATE_SEED: &str = include_str!("seed/candidates.csv");

/// Read-only catalogs backing both dashboards.
#[derive(Debug, Clone)]
pub struct MarketplaceCatalog {
    jobs: Vec<JobListing>,
    candidates: Vec<CandidateSummary>,
}

impl MarketplaceCatalog {
    pub fn new(jobs: Vec<JobListing>, candidates: Vec<CandidateSummary>) -> Self {
        Self { jobs, candidates }
    }

    /// Loads the bundled mock data.
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self {
            jobs: parse_jobs(JOB_SEED.as_bytes())?,
            candidates: parse_candidates(CANDIDATE_SEED.as_bytes())?,
        })
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn candidates(&self) -> &[CandidateSummary] {
        &self.candidates
    }
}

#[derive(Debug, Deserialize)]
struct JobRow {
    id: String,
    clinic_id: String,
    clinic_name: String,
    title: String,
    specialty: String,
    location: String,
    region: String,
    salary_range: String,
    min_salary_value: u32,
    description: String,
    contract_type: String,
    posted_at: String,
}

pub fn parse_jobs<R: Read>(reader: R) -> Result<Vec<JobListing>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut jobs = Vec::new();

    for record in csv_reader.deserialize::<JobRow>() {
        let row = record?;
        let region = Region::from_label(&row.region)
            .ok_or_else(|| CatalogError::UnknownRegion(row.region.clone()))?;
        let contract_type = ContractType::from_label(&row.contract_type)
            .ok_or_else(|| CatalogError::UnknownContractType(row.contract_type.clone()))?;
        let posted_at = NaiveDate::parse_from_str(row.posted_at.trim(), "%Y-%m-%d")
            .map_err(|_| CatalogError::InvalidDate(row.posted_at.clone()))?;

        jobs.push(JobListing {
            id: row.id,
            clinic_id: row.clinic_id,
            clinic_name: row.clinic_name,
            title: row.title,
            specialty: row.specialty,
            location: row.location,
            region,
            salary_range: row.salary_range,
            min_salary_value: row.min_salary_value,
            description: row.description,
            contract_type,
            posted_at,
        });
    }

    Ok(jobs)
}

pub fn parse_candidates<R: Read>(reader: R) -> Result<Vec<CandidateSummary>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for record in csv_reader.deserialize::<CandidateSummary>() {
        candidates.push(record?);
    }

    Ok(candidates)
}
