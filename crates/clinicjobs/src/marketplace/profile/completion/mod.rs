mod config;
mod rules;

pub use config::{ClinicCompletionConfig, CompletionConfig, DentistCompletionConfig};

use serde::Serialize;

use super::{ClinicProfile, DentistProfile};

/// Named requirement backing one checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Specialty,
    Bio,
    PortfolioItem,
    WorkExperience,
    Description,
    Photos,
    Neighborhood,
    Remuneration,
    SearchedSpecialties,
    WorkDays,
}

impl Requirement {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Specialty => "Especialidade",
            Self::Bio => "Bio (30+ letras)",
            Self::PortfolioItem => "Item no Portfólio",
            Self::WorkExperience => "Experiência Profissional",
            Self::Description => "Sobre a Clínica",
            Self::Photos => "Fotos Reais",
            Self::Neighborhood => "Bairro Definido",
            Self::Remuneration => "Remuneração",
            Self::SearchedSpecialties => "Especialidades buscadas",
            Self::WorkDays => "Dias por Semana",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementCheck {
    pub requirement: Requirement,
    pub satisfied: bool,
}

/// Derived checklist view. Recomputed from the profile on every read; nothing
/// here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    pub percentage: u8,
    pub checks: Vec<RequirementCheck>,
    pub is_complete: bool,
}

impl CompletionReport {
    fn from_checks(checks: Vec<RequirementCheck>) -> Self {
        let total = checks.len();
        let satisfied = checks.iter().filter(|check| check.satisfied).count();
        let percentage = if total == 0 {
            100
        } else {
            ((satisfied * 100 + total / 2) / total) as u8
        };
        Self {
            percentage,
            is_complete: satisfied == total,
            checks,
        }
    }

    pub fn missing(&self) -> Vec<Requirement> {
        self.checks
            .iter()
            .filter(|check| !check.satisfied)
            .map(|check| check.requirement)
            .collect()
    }
}

/// Applies the per-role checklists configured at construction time.
#[derive(Debug, Clone, Default)]
pub struct CompletionEvaluator {
    config: CompletionConfig,
}

impl CompletionEvaluator {
    pub fn new(config: CompletionConfig) -> Self {
        Self { config }
    }

    pub fn evaluate_dentist(&self, profile: &DentistProfile) -> CompletionReport {
        CompletionReport::from_checks(rules::dentist_checks(profile, &self.config.dentist))
    }

    pub fn evaluate_clinic(&self, profile: &ClinicProfile) -> CompletionReport {
        CompletionReport::from_checks(rules::clinic_checks(profile, &self.config.clinic))
    }
}
