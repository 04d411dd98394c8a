use super::{CandidateSummary, JobListing};
use crate::marketplace::domain::Region;

/// Multi-select filter dimension with an explicit "all" sentinel.
///
/// The invariant mirrors the dashboard chips: the set is never empty, and the
/// sentinel never coexists with specific values. Removing the last specific
/// value reverts to `All`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(Vec<T>),
}

impl<T: PartialEq + Clone> Selection<T> {
    /// Builds a selection from explicit values; an empty list means `All`.
    pub fn only(values: Vec<T>) -> Self {
        if values.is_empty() {
            Self::All
        } else {
            Self::Only(values)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Selecting the sentinel drops every specific value.
    pub fn select_all(&mut self) {
        *self = Self::All;
    }

    /// Chip toggle: from `All`, picking a value narrows to just that value;
    /// picking an already-selected value removes it, falling back to `All`
    /// when it was the last one.
    pub fn toggle(&mut self, value: T) {
        match self {
            Selection::All => *self = Selection::Only(vec![value]),
            Selection::Only(values) => {
                if let Some(pos) = values.iter().position(|existing| existing == &value) {
                    values.remove(pos);
                    if values.is_empty() {
                        *self = Selection::All;
                    }
                } else {
                    values.push(value);
                }
            }
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.contains(value),
        }
    }

    pub fn values(&self) -> &[T] {
        match self {
            Selection::All => &[],
            Selection::Only(values) => values,
        }
    }
}

/// One row of the fixed salary filter table. `max` is exclusive; `None` means
/// no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBand {
    pub label: &'static str,
    pub min: u32,
    pub max: Option<u32>,
}

impl SalaryBand {
    pub const fn contains(&self, min_salary: u32) -> bool {
        min_salary >= self.min
            && match self.max {
                Some(max) => min_salary < max,
                None => true,
            }
    }

    /// The label is the lookup key saved filters store.
    pub fn by_label(label: &str) -> Option<&'static SalaryBand> {
        SALARY_BANDS.iter().find(|band| band.label == label)
    }

    pub fn unbounded() -> &'static SalaryBand {
        &SALARY_BANDS[0]
    }
}

/// Salary filter table shown on the jobs dashboard. Labels never change; they
/// are the persisted key for saved filters.
pub static SALARY_BANDS: [SalaryBand; 5] = [
    SalaryBand {
        label: "Todas as faixas",
        min: 0,
        max: None,
    },
    SalaryBand {
        label: "Até R$ 5.000",
        min: 0,
        max: Some(5_000),
    },
    SalaryBand {
        label: "R$ 5.000 - R$ 10.000",
        min: 5_000,
        max: Some(10_000),
    },
    SalaryBand {
        label: "R$ 10.000 - R$ 15.000",
        min: 10_000,
        max: Some(15_000),
    },
    SalaryBand {
        label: "Acima de R$ 15.000",
        min: 15_000,
        max: None,
    },
];

/// Filter state applied to the job catalog. Active dimensions combine with
/// AND; the result preserves catalog order.
#[derive(Debug, Clone)]
pub struct JobFilter {
    pub search_term: String,
    pub regions: Selection<Region>,
    pub salary: &'static SalaryBand,
    pub specialties: Selection<String>,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            regions: Selection::All,
            salary: SalaryBand::unbounded(),
            specialties: Selection::All,
        }
    }
}

impl JobFilter {
    pub fn apply<'a>(&self, catalog: &'a [JobListing]) -> Vec<&'a JobListing> {
        catalog.iter().filter(|job| self.matches(job)).collect()
    }

    pub fn matches(&self, job: &JobListing) -> bool {
        matches_search(
            &self.search_term,
            &[&job.title, &job.specialty, &job.clinic_name, &job.location],
        ) && self.regions.matches(&job.region)
            && self.salary.contains(job.min_salary_value)
            && self.specialties.matches(&job.specialty)
    }
}

/// Search plus specialty narrowing for the clinic's candidate browser.
/// Candidates carry no salary, so that dimension does not apply.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub search_term: String,
    pub specialties: Selection<String>,
}

impl CandidateFilter {
    pub fn apply<'a>(&self, catalog: &'a [CandidateSummary]) -> Vec<&'a CandidateSummary> {
        catalog
            .iter()
            .filter(|candidate| self.matches(candidate))
            .collect()
    }

    pub fn matches(&self, candidate: &CandidateSummary) -> bool {
        matches_search(
            &self.search_term,
            &[&candidate.name, &candidate.specialty, &candidate.bio],
        ) && self.specialties.matches(&candidate.specialty)
    }
}

/// Case-insensitive substring match over the searchable fields. An empty term
/// matches everything.
fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}
