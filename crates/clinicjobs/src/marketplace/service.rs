use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{
    CandidateFilter, CandidateSummary, JobFilter, JobListing, MarketplaceCatalog, SavedFilter,
    SavedFilterStore, StoreError,
};
use super::domain::Role;
use super::profile::completion::{CompletionEvaluator, CompletionReport, Requirement};
use super::profile::{PortfolioItem, ProfileWorkspace, RemunerationType, WorkExperience};
use super::session::{
    AccessGate, GateState, PaymentMethod, PaymentReceipt, PaymentSimulator, ResolvedView,
    RouteRequest, Session, SessionError,
};
use super::suggestions::{SuggestionError, SuggestionGateway, SuggestionService};

/// Error raised by the marketplace facade.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("this area requires an activated {} session", .required.label())]
    AccessDenied { required: Role },
    #[error("profile incomplete: {} requirement(s) missing", .missing.len())]
    ProfileIncomplete { missing: Vec<Requirement> },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}

/// Partial update for the dentist profile form; absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DentistProfileUpdate {
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub cv_summary: Option<String>,
    pub digital_experience: Option<String>,
}

/// Partial update for the clinic profile form; absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicProfileUpdate {
    pub description: Option<String>,
    pub neighborhood: Option<String>,
    pub remuneration_type: Option<RemunerationType>,
    pub remuneration_value: Option<String>,
    pub work_days: Option<u8>,
}

/// Draft submitted by a clinic when publishing an opening.
#[derive(Debug, Clone, Deserialize)]
pub struct JobDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Acknowledgement returned by a successful publication. The catalog itself
/// is never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct PublishAck {
    pub title: String,
    pub message: String,
}

/// Facade composing the access gate, profile workspace, catalogs, saved
/// filters, and the suggestion collaborator behind one session-scoped API.
pub struct MarketplaceService<S, G> {
    gate: Mutex<AccessGate>,
    profiles: Mutex<ProfileWorkspace>,
    evaluator: CompletionEvaluator,
    catalog: MarketplaceCatalog,
    store: Arc<S>,
    suggestions: SuggestionService<G>,
    payments: PaymentSimulator,
}

impl<S, G> MarketplaceService<S, G>
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    pub fn new(
        catalog: MarketplaceCatalog,
        store: Arc<S>,
        gateway: G,
        evaluator: CompletionEvaluator,
        payments: PaymentSimulator,
    ) -> Self {
        Self {
            gate: Mutex::new(AccessGate::new()),
            profiles: Mutex::new(ProfileWorkspace::default()),
            evaluator,
            catalog,
            store,
            suggestions: SuggestionService::new(gateway),
            payments,
        }
    }

    // --- session ---

    pub fn login(&self, role: Role) -> Result<Session, MarketplaceError> {
        let session = self.lock_gate().login(role)?;
        *self.lock_profiles() = ProfileWorkspace::default();
        info!(role = role.label(), "session created, awaiting activation");
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), MarketplaceError> {
        self.lock_gate().logout()?;
        *self.lock_profiles() = ProfileWorkspace::default();
        info!("session destroyed");
        Ok(())
    }

    pub fn session(&self) -> Option<Session> {
        self.lock_gate().session()
    }

    pub fn resolve(&self, route: RouteRequest) -> ResolvedView {
        self.lock_gate().resolve(route)
    }

    /// Runs the simulated payment and fires the gate transition afterwards.
    /// The session may have been logged out while the timer ran, in which
    /// case the transition fails and no state changes.
    pub async fn activate(
        &self,
        method: PaymentMethod,
    ) -> Result<(PaymentReceipt, Session), MarketplaceError> {
        let role = match self.lock_gate().state() {
            GateState::AwaitingPayment(role) => role,
            GateState::LoggedOut => return Err(SessionError::NotLoggedIn.into()),
            GateState::Active(_) => return Err(SessionError::PaymentNotPending.into()),
        };

        let receipt = self.payments.charge(role, method).await;
        let session = self.lock_gate().confirm_payment()?;
        info!(role = role.label(), "activation payment confirmed");
        Ok((receipt, session))
    }

    // --- dentist profile ---

    pub fn update_dentist_profile(
        &self,
        update: DentistProfileUpdate,
    ) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let mut profiles = self.lock_profiles();
        let profile = &mut profiles.dentist;
        if let Some(specialty) = update.specialty {
            profile.specialty = specialty;
        }
        if let Some(bio) = update.bio {
            profile.bio = bio;
        }
        if let Some(cv_summary) = update.cv_summary {
            profile.cv_summary = cv_summary;
        }
        if let Some(digital_experience) = update.digital_experience {
            profile.digital_experience = digital_experience;
        }
        Ok(self.evaluator.evaluate_dentist(profile))
    }

    pub fn add_portfolio_item(
        &self,
        title: String,
        description: String,
        image_url: String,
    ) -> Result<(PortfolioItem, CompletionReport), MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let mut profiles = self.lock_profiles();
        let item = profiles
            .dentist
            .add_portfolio_item(title, description, image_url)
            .clone();
        Ok((item, self.evaluator.evaluate_dentist(&profiles.dentist)))
    }

    pub fn remove_portfolio_item(&self, id: &str) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let mut profiles = self.lock_profiles();
        profiles.dentist.remove_portfolio_item(id);
        Ok(self.evaluator.evaluate_dentist(&profiles.dentist))
    }

    pub fn add_experience(
        &self,
        clinic_name: String,
        role: String,
        period: String,
        description: String,
    ) -> Result<(WorkExperience, CompletionReport), MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let mut profiles = self.lock_profiles();
        let entry = profiles
            .dentist
            .add_experience(clinic_name, role, period, description)
            .clone();
        Ok((entry, self.evaluator.evaluate_dentist(&profiles.dentist)))
    }

    pub fn remove_experience(&self, id: &str) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let mut profiles = self.lock_profiles();
        profiles.dentist.remove_experience(id);
        Ok(self.evaluator.evaluate_dentist(&profiles.dentist))
    }

    pub fn dentist_completion(&self) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let profiles = self.lock_profiles();
        Ok(self.evaluator.evaluate_dentist(&profiles.dentist))
    }

    // --- clinic profile ---

    pub fn update_clinic_profile(
        &self,
        update: ClinicProfileUpdate,
    ) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Clinic)?;
        let mut profiles = self.lock_profiles();
        let profile = &mut profiles.clinic;
        if let Some(description) = update.description {
            profile.description = description;
        }
        if let Some(neighborhood) = update.neighborhood {
            profile.neighborhood = neighborhood;
        }
        if let Some(remuneration_type) = update.remuneration_type {
            profile.remuneration_type = remuneration_type;
        }
        if let Some(remuneration_value) = update.remuneration_value {
            profile.remuneration_value = remuneration_value;
        }
        if let Some(work_days) = update.work_days {
            profile.set_work_days(work_days);
        }
        Ok(self.evaluator.evaluate_clinic(profile))
    }

    pub fn toggle_clinic_specialty(
        &self,
        specialty: &str,
    ) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Clinic)?;
        let mut profiles = self.lock_profiles();
        profiles.clinic.toggle_specialty(specialty);
        Ok(self.evaluator.evaluate_clinic(&profiles.clinic))
    }

    pub fn add_clinic_photo(&self, url: String) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Clinic)?;
        let mut profiles = self.lock_profiles();
        profiles.clinic.add_photo(url);
        Ok(self.evaluator.evaluate_clinic(&profiles.clinic))
    }

    pub fn remove_clinic_photo(&self, index: usize) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Clinic)?;
        let mut profiles = self.lock_profiles();
        profiles.clinic.remove_photo(index);
        Ok(self.evaluator.evaluate_clinic(&profiles.clinic))
    }

    pub fn clinic_completion(&self) -> Result<CompletionReport, MarketplaceError> {
        self.require_role(Role::Clinic)?;
        let profiles = self.lock_profiles();
        Ok(self.evaluator.evaluate_clinic(&profiles.clinic))
    }

    // --- catalog ---

    /// Job browsing is locked until the dentist profile is complete; the
    /// rejection carries the open requirements so the dashboard can redirect.
    pub fn search_jobs(&self, filter: &JobFilter) -> Result<Vec<JobListing>, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let report = {
            let profiles = self.lock_profiles();
            self.evaluator.evaluate_dentist(&profiles.dentist)
        };
        if !report.is_complete {
            return Err(MarketplaceError::ProfileIncomplete {
                missing: report.missing(),
            });
        }
        Ok(filter
            .apply(self.catalog.jobs())
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn browse_candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<CandidateSummary>, MarketplaceError> {
        self.require_role(Role::Clinic)?;
        Ok(filter
            .apply(self.catalog.candidates())
            .into_iter()
            .cloned()
            .collect())
    }

    /// Validates completion and acknowledges the publication. The visible
    /// catalog is never mutated by publishing.
    pub fn publish_job(&self, draft: JobDraft) -> Result<PublishAck, MarketplaceError> {
        self.require_role(Role::Clinic)?;
        let report = {
            let profiles = self.lock_profiles();
            self.evaluator.evaluate_clinic(&profiles.clinic)
        };
        if !report.is_complete {
            return Err(MarketplaceError::ProfileIncomplete {
                missing: report.missing(),
            });
        }
        info!(title = %draft.title, "job publication acknowledged");
        Ok(PublishAck {
            title: draft.title,
            message: "Vaga publicada com sucesso!".to_string(),
        })
    }

    // --- saved filters ---

    pub fn list_saved_filters(&self) -> Result<Vec<SavedFilter>, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        Ok(self.store.list()?)
    }

    pub fn save_filter(
        &self,
        filter: &JobFilter,
        name: Option<String>,
    ) -> Result<SavedFilter, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let existing = self.store.list()?.len();
        let saved = self.store.save(SavedFilter::capture(filter, name, existing))?;
        Ok(saved)
    }

    pub fn delete_saved_filter(&self, id: &str) -> Result<(), MarketplaceError> {
        self.require_role(Role::Dentist)?;
        Ok(self.store.delete(id)?)
    }

    pub fn apply_saved_filter(&self, id: &str) -> Result<JobFilter, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let filters = self.store.list()?;
        let saved = filters
            .iter()
            .find(|filter| filter.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(saved.restore())
    }

    // --- suggestions ---

    /// Returns the rewritten bio. The profile is untouched; accepting the
    /// suggestion is a separate profile update.
    pub async fn improve_bio(&self, specialty_focus: &str) -> Result<String, MarketplaceError> {
        self.require_role(Role::Dentist)?;
        let current = { self.lock_profiles().dentist.bio.clone() };
        Ok(self
            .suggestions
            .improve_bio(&current, specialty_focus)
            .await?)
    }

    /// Drafts a description for the given title using the clinic's own
    /// description as context.
    pub async fn draft_job_description(&self, title: &str) -> Result<String, MarketplaceError> {
        self.require_role(Role::Clinic)?;
        let details = { self.lock_profiles().clinic.description.clone() };
        Ok(self
            .suggestions
            .draft_job_description(title, &details)
            .await?)
    }

    // --- internals ---

    fn require_role(&self, required: Role) -> Result<(), MarketplaceError> {
        match self.lock_gate().state() {
            GateState::Active(role) if role == required => Ok(()),
            _ => Err(MarketplaceError::AccessDenied { required }),
        }
    }

    fn lock_gate(&self) -> MutexGuard<'_, AccessGate> {
        self.gate.lock().expect("gate mutex poisoned")
    }

    fn lock_profiles(&self) -> MutexGuard<'_, ProfileWorkspace> {
        self.profiles.lock().expect("profile mutex poisoned")
    }
}
