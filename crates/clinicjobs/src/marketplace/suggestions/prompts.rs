//! Prompt templates sent to the text-generation collaborator. Portuguese,
//! matching the dashboard copy the generated text sits next to.

pub const BIO_TEMPERATURE: f32 = 0.7;
pub const JOB_TEMPERATURE: f32 = 0.8;

/// Placeholder bio used when the user asks for an optimization before writing
/// anything.
pub const DEFAULT_BIO_SEED: &str = "Sou dentista focado em resultados.";

pub fn improve_bio(current_bio: &str, specialty: &str) -> String {
    format!(
        "Melhore esta biografia profissional de um dentista especializado em {specialty}. \
         Deixe-a mais profissional e atraente para clínicas de alto padrão. \
         Biografia atual: \"{current_bio}\""
    )
}

pub fn draft_job_description(title: &str, clinic_details: &str) -> String {
    format!(
        "Crie uma descrição detalhada e atraente de vaga de emprego para o cargo de {title} \
         em uma clínica com estas características: {clinic_details}. \
         Inclua requisitos técnicos, diferenciais e tom profissional."
    )
}
