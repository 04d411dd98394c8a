pub mod completion;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_entry_id(prefix: &str) -> String {
    let id = ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id:06}")
}

/// Clinical case shown on the dentist's public portfolio. Immutable once
/// created, removable by id; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Past position listed on the dentist's profile. Same lifecycle as
/// [`PortfolioItem`], but kept newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: String,
    pub clinic_name: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DentistProfile {
    pub specialty: String,
    pub bio: String,
    pub cv_summary: String,
    pub digital_experience: String,
    pub portfolio: Vec<PortfolioItem>,
    pub experiences: Vec<WorkExperience>,
}

impl DentistProfile {
    pub fn add_portfolio_item(
        &mut self,
        title: String,
        description: String,
        image_url: String,
    ) -> &PortfolioItem {
        let item = PortfolioItem {
            id: next_entry_id("case"),
            title,
            description,
            image_url,
        };
        self.portfolio.push(item);
        self.portfolio.last().expect("item was just pushed")
    }

    /// Removing an unknown id is a no-op.
    pub fn remove_portfolio_item(&mut self, id: &str) -> bool {
        let before = self.portfolio.len();
        self.portfolio.retain(|item| item.id != id);
        self.portfolio.len() != before
    }

    /// Experiences are kept newest first: new entries are prepended.
    pub fn add_experience(
        &mut self,
        clinic_name: String,
        role: String,
        period: String,
        description: String,
    ) -> &WorkExperience {
        let entry = WorkExperience {
            id: next_entry_id("exp"),
            clinic_name,
            role,
            period,
            description,
        };
        self.experiences.insert(0, entry);
        &self.experiences[0]
    }

    pub fn remove_experience(&mut self, id: &str) -> bool {
        let before = self.experiences.len();
        self.experiences.retain(|entry| entry.id != id);
        self.experiences.len() != before
    }
}

/// Remuneration regime a clinic offers when searching for talent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemunerationType {
    Fixed,
    Daily,
    #[default]
    Commission,
}

impl RemunerationType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "Fixo",
            Self::Daily => "Diária",
            Self::Commission => "Comissão",
        }
    }
}

/// A clinic may tag at most this many searched specialties.
pub const MAX_SELECTED_SPECIALTIES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicProfile {
    pub description: String,
    pub neighborhood: String,
    pub photos: Vec<String>,
    pub selected_specialties: Vec<String>,
    pub remuneration_type: RemunerationType,
    pub remuneration_value: String,
    pub work_days: u8,
}

impl Default for ClinicProfile {
    fn default() -> Self {
        Self {
            description: String::new(),
            neighborhood: String::new(),
            photos: Vec::new(),
            selected_specialties: Vec::new(),
            remuneration_type: RemunerationType::default(),
            remuneration_value: String::new(),
            work_days: 1,
        }
    }
}

impl ClinicProfile {
    /// Toggles a searched specialty. Adding a fourth tag is a silent no-op;
    /// toggling an existing tag removes it.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        if let Some(pos) = self
            .selected_specialties
            .iter()
            .position(|tag| tag == specialty)
        {
            self.selected_specialties.remove(pos);
        } else if self.selected_specialties.len() < MAX_SELECTED_SPECIALTIES {
            self.selected_specialties.push(specialty.to_string());
        }
    }

    pub fn add_photo(&mut self, url: String) {
        self.photos.push(url);
    }

    /// Photos carry no id; removal is positional. Out-of-range is a no-op.
    pub fn remove_photo(&mut self, index: usize) -> bool {
        if index < self.photos.len() {
            self.photos.remove(index);
            true
        } else {
            false
        }
    }

    /// Weekly availability, clamped to the 1..=7 slider range.
    pub fn set_work_days(&mut self, days: u8) {
        self.work_days = days.clamp(1, 7);
    }
}

/// Both editable profiles for the current session. Created fresh at login and
/// dropped at logout; only the session role's half is ever shown.
#[derive(Debug, Clone, Default)]
pub struct ProfileWorkspace {
    pub dentist: DentistProfile,
    pub clinic: ClinicProfile,
}
