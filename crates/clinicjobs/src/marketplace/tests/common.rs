use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::marketplace::catalog::{
    CandidateSummary, JobListing, MarketplaceCatalog, SavedFilter, SavedFilterStore, StoreError,
};
use crate::marketplace::domain::{ContractType, Region, Role};
use crate::marketplace::profile::completion::CompletionEvaluator;
use crate::marketplace::service::{DentistProfileUpdate, MarketplaceService};
use crate::marketplace::session::{PaymentMethod, PaymentSimulator, PaymentTiming};
use crate::marketplace::suggestions::{SuggestionError, SuggestionGateway};

pub(super) fn job(
    id: &str,
    clinic: &str,
    title: &str,
    specialty: &str,
    region: Region,
    min_salary: u32,
) -> JobListing {
    JobListing {
        id: id.to_string(),
        clinic_id: format!("c-{id}"),
        clinic_name: clinic.to_string(),
        title: title.to_string(),
        specialty: specialty.to_string(),
        location: "São Paulo, SP".to_string(),
        region,
        salary_range: format!("R$ {min_salary}+"),
        min_salary_value: min_salary,
        description: "Atendimento em consultório moderno.".to_string(),
        contract_type: ContractType::Pj,
        posted_at: NaiveDate::from_ymd_opt(2025, 8, 1).expect("valid date"),
    }
}

pub(super) fn sample_jobs() -> Vec<JobListing> {
    vec![
        job(
            "job-1",
            "Odonto Excellence",
            "Ortodontista Sênior",
            "Ortodontia",
            Region::ZonaSul,
            8_000,
        ),
        job(
            "job-2",
            "Sorriso Prime",
            "Implantodontista",
            "Implantodontia",
            Region::Centro,
            15_000,
        ),
        job(
            "job-3",
            "Clínica Bem Estar",
            "Clínico Geral",
            "Clínico Geral",
            Region::ZonaNorte,
            4_500,
        ),
        job(
            "job-4",
            "OdontoKids",
            "Odontopediatra",
            "Odontopediatria",
            Region::ZonaOeste,
            10_000,
        ),
    ]
}

pub(super) fn sample_candidates() -> Vec<CandidateSummary> {
    vec![
        CandidateSummary {
            id: "cand-1".to_string(),
            name: "Dra. Ana Costa".to_string(),
            specialty: "Odontopediatria".to_string(),
            experience_years: 8,
            rating: 4.9,
            bio: "Especialista em atendimento humanizado para crianças.".to_string(),
        },
        CandidateSummary {
            id: "cand-2".to_string(),
            name: "Dr. Ricardo Lima".to_string(),
            specialty: "Ortodontia".to_string(),
            experience_years: 12,
            rating: 4.7,
            bio: "Ortodontista com certificação Invisalign.".to_string(),
        },
    ]
}

pub(super) fn catalog() -> MarketplaceCatalog {
    MarketplaceCatalog::new(sample_jobs(), sample_candidates())
}

#[derive(Default)]
pub(super) struct MemoryStore {
    filters: Mutex<Vec<SavedFilter>>,
}

impl SavedFilterStore for MemoryStore {
    fn list(&self) -> Result<Vec<SavedFilter>, StoreError> {
        Ok(self.filters.lock().expect("store mutex poisoned").clone())
    }

    fn save(&self, filter: SavedFilter) -> Result<SavedFilter, StoreError> {
        self.filters
            .lock()
            .expect("store mutex poisoned")
            .push(filter.clone());
        Ok(filter)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.filters.lock().expect("store mutex poisoned");
        let position = guard
            .iter()
            .position(|filter| filter.id == id)
            .ok_or(StoreError::NotFound)?;
        guard.remove(position);
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct StaticGateway;

#[async_trait]
impl SuggestionGateway for StaticGateway {
    async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String, SuggestionError> {
        Ok("Biografia aprimorada para clínicas de alto padrão.".to_string())
    }
}

/// Records every prompt/temperature pair it receives.
#[derive(Clone, Default)]
pub(super) struct CapturingGateway {
    pub(super) calls: Arc<Mutex<Vec<(String, f32)>>>,
}

#[async_trait]
impl SuggestionGateway for CapturingGateway {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, SuggestionError> {
        self.calls
            .lock()
            .expect("call mutex poisoned")
            .push((prompt.to_string(), temperature));
        Ok("texto gerado".to_string())
    }
}

pub(super) struct FailingGateway;

#[async_trait]
impl SuggestionGateway for FailingGateway {
    async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String, SuggestionError> {
        Err(SuggestionError::Api {
            status: 503,
            message: "temporarily unavailable".to_string(),
        })
    }
}

/// Parks every call until the test releases a permit, so a second trigger can
/// race against a deliberately outstanding one.
#[derive(Clone)]
pub(super) struct HoldingGateway {
    pub(super) release: Arc<tokio::sync::Semaphore>,
}

impl HoldingGateway {
    pub(super) fn new() -> Self {
        Self {
            release: Arc::new(tokio::sync::Semaphore::new(0)),
        }
    }
}

#[async_trait]
impl SuggestionGateway for HoldingGateway {
    async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String, SuggestionError> {
        let _permit = self.release.acquire().await.expect("semaphore open");
        Ok("texto gerado".to_string())
    }
}

pub(super) fn build_service<G>(gateway: G) -> MarketplaceService<MemoryStore, G>
where
    G: SuggestionGateway + 'static,
{
    MarketplaceService::new(
        catalog(),
        Arc::new(MemoryStore::default()),
        gateway,
        CompletionEvaluator::default(),
        PaymentSimulator::new(PaymentTiming::instant()),
    )
}

pub(super) async fn activated<G>(role: Role, gateway: G) -> MarketplaceService<MemoryStore, G>
where
    G: SuggestionGateway + 'static,
{
    let service = build_service(gateway);
    service.login(role).expect("login succeeds");
    service
        .activate(PaymentMethod::Pix)
        .await
        .expect("activation succeeds");
    service
}

pub(super) fn complete_dentist<S, G>(service: &MarketplaceService<S, G>)
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    service
        .update_dentist_profile(DentistProfileUpdate {
            specialty: Some("Ortodontia".to_string()),
            bio: Some("Ortodontista com doze anos de experiência em casos complexos.".to_string()),
            ..Default::default()
        })
        .expect("profile update succeeds");
    service
        .add_portfolio_item(
            "Caso Clínico Exemplo".to_string(),
            "Reabilitação Estética".to_string(),
            "https://example.com/caso.jpg".to_string(),
        )
        .expect("portfolio item added");
    service
        .add_experience(
            "Sorriso Kids".to_string(),
            "Ortodontista".to_string(),
            "2018 - 2022".to_string(),
            "Responsável pelo setor de ortodontia.".to_string(),
        )
        .expect("experience added");
}
