use super::config::{ClinicCompletionConfig, DentistCompletionConfig};
use super::{Requirement, RequirementCheck};
use crate::marketplace::profile::{ClinicProfile, DentistProfile};

fn trimmed_chars(value: &str) -> usize {
    value.trim().chars().count()
}

pub(super) fn dentist_checks(
    profile: &DentistProfile,
    config: &DentistCompletionConfig,
) -> Vec<RequirementCheck> {
    vec![
        RequirementCheck {
            requirement: Requirement::Specialty,
            satisfied: trimmed_chars(&profile.specialty) >= config.specialty_min_chars,
        },
        RequirementCheck {
            requirement: Requirement::Bio,
            satisfied: trimmed_chars(&profile.bio) > config.bio_min_chars,
        },
        RequirementCheck {
            requirement: Requirement::PortfolioItem,
            satisfied: !profile.portfolio.is_empty(),
        },
        RequirementCheck {
            requirement: Requirement::WorkExperience,
            satisfied: !profile.experiences.is_empty(),
        },
    ]
}

pub(super) fn clinic_checks(
    profile: &ClinicProfile,
    config: &ClinicCompletionConfig,
) -> Vec<RequirementCheck> {
    let specialties = profile.selected_specialties.len();
    vec![
        RequirementCheck {
            requirement: Requirement::Description,
            satisfied: trimmed_chars(&profile.description) > config.description_min_chars,
        },
        RequirementCheck {
            requirement: Requirement::Photos,
            satisfied: !profile.photos.is_empty(),
        },
        RequirementCheck {
            requirement: Requirement::Neighborhood,
            satisfied: trimmed_chars(&profile.neighborhood) > config.neighborhood_min_chars,
        },
        RequirementCheck {
            requirement: Requirement::Remuneration,
            satisfied: !profile.remuneration_value.trim().is_empty(),
        },
        RequirementCheck {
            requirement: Requirement::SearchedSpecialties,
            satisfied: specialties >= 1 && specialties <= config.max_specialties,
        },
        RequirementCheck {
            requirement: Requirement::WorkDays,
            satisfied: profile.work_days >= 1,
        },
    ]
}
