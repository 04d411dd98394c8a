use serde::{Deserialize, Serialize};

/// Thresholds for the dentist requirement checklist. Lengths are counted in
/// characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DentistCompletionConfig {
    /// Bio must be strictly longer than this.
    pub bio_min_chars: usize,
    /// Specialty must reach at least this length.
    pub specialty_min_chars: usize,
}

impl Default for DentistCompletionConfig {
    fn default() -> Self {
        Self {
            bio_min_chars: 30,
            specialty_min_chars: 3,
        }
    }
}

/// Thresholds for the clinic requirement checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicCompletionConfig {
    /// Description must be strictly longer than this.
    pub description_min_chars: usize,
    /// Neighborhood must be strictly longer than this.
    pub neighborhood_min_chars: usize,
    /// Upper bound on searched specialties; the lower bound is always one.
    pub max_specialties: usize,
}

impl Default for ClinicCompletionConfig {
    fn default() -> Self {
        Self {
            description_min_chars: 30,
            neighborhood_min_chars: 3,
            max_specialties: 3,
        }
    }
}

/// Checklist thresholds for both roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub dentist: DentistCompletionConfig,
    pub clinic: ClinicCompletionConfig,
}
