mod gemini;
pub mod prompts;

pub use gemini::{GeminiClient, DEFAULT_SUGGESTION_MODEL};

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

/// Field a suggestion writes back into. Used to bar concurrent duplicate
/// requests: two in-flight calls for the same field would race on the
/// overwrite with no defined winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionField {
    DentistBio,
    JobDescription,
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("suggestion API error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("suggestion API returned no text")]
    EmptyContent,
    #[error("a suggestion for this field is already being generated")]
    InFlight,
}

/// Remote text generator behind the dashboards' AI buttons. Treated as a
/// black box: one prompt in, one opaque text block or a failure out.
#[async_trait]
pub trait SuggestionGateway: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, SuggestionError>;
}

/// Wraps a gateway with the per-field in-flight guard. Each trigger is a
/// single best-effort attempt; on failure the caller keeps the original field
/// value and may retry manually.
pub struct SuggestionService<G> {
    gateway: G,
    in_flight: Mutex<HashSet<SuggestionField>>,
}

impl<G: SuggestionGateway> SuggestionService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Rewrites the bio for the given specialty focus. An empty bio is seeded
    /// with a neutral placeholder before prompting.
    pub async fn improve_bio(
        &self,
        current_bio: &str,
        specialty: &str,
    ) -> Result<String, SuggestionError> {
        let _slot = self.reserve(SuggestionField::DentistBio)?;
        let seed = if current_bio.trim().is_empty() {
            prompts::DEFAULT_BIO_SEED
        } else {
            current_bio
        };
        self.gateway
            .generate(&prompts::improve_bio(seed, specialty), prompts::BIO_TEMPERATURE)
            .await
    }

    /// Drafts a job description for the given title and clinic context.
    pub async fn draft_job_description(
        &self,
        title: &str,
        clinic_details: &str,
    ) -> Result<String, SuggestionError> {
        let _slot = self.reserve(SuggestionField::JobDescription)?;
        self.gateway
            .generate(
                &prompts::draft_job_description(title, clinic_details),
                prompts::JOB_TEMPERATURE,
            )
            .await
    }

    fn reserve(&self, field: SuggestionField) -> Result<FieldSlot<'_>, SuggestionError> {
        let mut guard = self.in_flight.lock().expect("in-flight mutex poisoned");
        if !guard.insert(field) {
            return Err(SuggestionError::InFlight);
        }
        Ok(FieldSlot {
            fields: &self.in_flight,
            field,
        })
    }
}

/// Releases the in-flight slot when the call resolves, fails, or is dropped.
struct FieldSlot<'a> {
    fields: &'a Mutex<HashSet<SuggestionField>>,
    field: SuggestionField,
}

impl Drop for FieldSlot<'_> {
    fn drop(&mut self) {
        self.fields
            .lock()
            .expect("in-flight mutex poisoned")
            .remove(&self.field);
    }
}
