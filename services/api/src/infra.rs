use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::warn;

use clinicjobs::config::SuggestionConfig;
use clinicjobs::marketplace::catalog::{SavedFilter, SavedFilterStore, StoreError};
use clinicjobs::marketplace::suggestions::{GeminiClient, SuggestionError, SuggestionGateway};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Deterministic canned gateway so keyless deployments and the CLI demo still
/// exercise the suggestion flow end to end.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct OfflineSuggestionGateway;

#[async_trait]
impl SuggestionGateway for OfflineSuggestionGateway {
    async fn generate(&self, prompt: &str, _temperature: f32) -> Result<String, SuggestionError> {
        let text = if prompt.starts_with("Crie uma descrição") {
            "Buscamos profissional dedicado para integrar nossa equipe clínica, com domínio \
             técnico, atendimento humanizado e foco em resultados. Oferecemos estrutura moderna \
             e agenda ativa."
        } else {
            "Cirurgião-dentista com atuação focada em resultados clínicos e atendimento \
             humanizado, experiência consolidada em casos de alta complexidade e atualização \
             constante em novas tecnologias."
        };
        Ok(text.to_string())
    }
}

/// Concrete gateway selected at startup: the real client when an API key is
/// configured, the offline gateway otherwise.
pub(crate) enum SuggestionBackend {
    Gemini(GeminiClient),
    Offline(OfflineSuggestionGateway),
}

impl SuggestionBackend {
    pub(crate) fn from_config(config: &SuggestionConfig) -> Self {
        match &config.api_key {
            Some(key) => Self::Gemini(GeminiClient::new(key.clone(), config.model.clone())),
            None => {
                warn!("GEMINI_API_KEY not set; using the offline suggestion gateway");
                Self::Offline(OfflineSuggestionGateway)
            }
        }
    }
}

#[async_trait]
impl SuggestionGateway for SuggestionBackend {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, SuggestionError> {
        match self {
            Self::Gemini(client) => client.generate(prompt, temperature).await,
            Self::Offline(gateway) => gateway.generate(prompt, temperature).await,
        }
    }
}

/// Saved-filter store for the CLI demo, which should not touch the data dir.
#[derive(Default)]
pub(crate) struct InMemoryFilterStore {
    filters: Mutex<Vec<SavedFilter>>,
}

impl SavedFilterStore for InMemoryFilterStore {
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
