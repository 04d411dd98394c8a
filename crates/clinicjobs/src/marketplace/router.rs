use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::{
    CandidateFilter, JobFilter, SalaryBand, SavedFilterStore, Selection, StoreError, SALARY_BANDS,
};
use super::domain::{Region, Role, SPECIALTIES};
use super::profile::RemunerationType;
use super::service::{
    ClinicProfileUpdate, DentistProfileUpdate, JobDraft, MarketplaceError, MarketplaceService,
};
use super::session::{PaymentMethod, RouteRequest, SessionError};
use super::suggestions::{SuggestionError, SuggestionGateway};

type Service<S, G> = Arc<MarketplaceService<S, G>>;

/// Router builder exposing the four gated views and the session, profile,
/// search, saved-filter, and suggestion endpoints.
pub fn marketplace_router<S, G>(service: Service<S, G>) -> Router
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    Router::new()
        .route("/", get(landing_view::<S, G>))
        .route("/activate", get(activation_view::<S, G>))
        .route("/dentist", get(dentist_view::<S, G>))
        .route("/clinic", get(clinic_view::<S, G>))
        .route("/api/v1/session", get(session_snapshot::<S, G>))
        .route("/api/v1/session/login", post(login_handler::<S, G>))
        .route("/api/v1/session/logout", post(logout_handler::<S, G>))
        .route("/api/v1/session/activate", post(activate_handler::<S, G>))
        .route(
            "/api/v1/profile/dentist",
            put(update_dentist_handler::<S, G>).get(dentist_completion_handler::<S, G>),
        )
        .route(
            "/api/v1/profile/dentist/portfolio",
            post(add_portfolio_handler::<S, G>),
        )
        .route(
            "/api/v1/profile/dentist/portfolio/:item_id",
            delete(remove_portfolio_handler::<S, G>),
        )
        .route(
            "/api/v1/profile/dentist/experiences",
            post(add_experience_handler::<S, G>),
        )
        .route(
            "/api/v1/profile/dentist/experiences/:entry_id",
            delete(remove_experience_handler::<S, G>),
        )
        .route(
            "/api/v1/profile/clinic",
            put(update_clinic_handler::<S, G>).get(clinic_completion_handler::<S, G>),
        )
        .route(
            "/api/v1/profile/clinic/photos",
            post(add_photo_handler::<S, G>),
        )
        .route(
            "/api/v1/profile/clinic/photos/:index",
            delete(remove_photo_handler::<S, G>),
        )
        .route(
            "/api/v1/profile/clinic/specialties",
            post(toggle_specialty_handler::<S, G>),
        )
        .route("/api/v1/jobs/search", post(search_jobs_handler::<S, G>))
        .route("/api/v1/jobs/publish", post(publish_job_handler::<S, G>))
        .route(
            "/api/v1/candidates/search",
            post(search_candidates_handler::<S, G>),
        )
        .route(
            "/api/v1/filters",
            get(list_filters_handler::<S, G>).post(save_filter_handler::<S, G>),
        )
        .route(
            "/api/v1/filters/:filter_id",
            delete(delete_filter_handler::<S, G>),
        )
        .route(
            "/api/v1/filters/:filter_id/apply",
            post(apply_filter_handler::<S, G>),
        )
        .route("/api/v1/reference", get(reference_data))
        .route(
            "/api/v1/suggestions/bio",
            post(bio_suggestion_handler::<S, G>),
        )
        .route(
            "/api/v1/suggestions/job-description",
            post(job_suggestion_handler::<S, G>),
        )
        .with_state(service)
}

fn error_response(error: MarketplaceError) -> Response {
    let status = match &error {
        MarketplaceError::Session(SessionError::NotLoggedIn) => StatusCode::UNAUTHORIZED,
        MarketplaceError::Session(_) => StatusCode::CONFLICT,
        MarketplaceError::AccessDenied { .. } => StatusCode::FORBIDDEN,
        MarketplaceError::ProfileIncomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        MarketplaceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        MarketplaceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MarketplaceError::Suggestion(SuggestionError::InFlight) => StatusCode::CONFLICT,
        MarketplaceError::Suggestion(_) => StatusCode::BAD_GATEWAY,
    };

    let body = match &error {
        MarketplaceError::ProfileIncomplete { missing } => json!({
            "error": error.to_string(),
            "missing": missing.iter().map(|req| req.label()).collect::<Vec<_>>(),
        }),
        _ => json!({ "error": error.to_string() }),
    };

    (status, Json(body)).into_response()
}

fn report_response(result: Result<impl serde::Serialize, MarketplaceError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(error) => error_response(error),
    }
}

// --- view routes ---

async fn landing_view<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    Json(service.resolve(RouteRequest::Landing)).into_response()
}

async fn activation_view<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    Json(service.resolve(RouteRequest::Activation)).into_response()
}

async fn dentist_view<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    Json(service.resolve(RouteRequest::Dashboard(Role::Dentist))).into_response()
}

async fn clinic_view<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    Json(service.resolve(RouteRequest::Dashboard(Role::Clinic))).into_response()
}

// --- session ---

async fn session_snapshot<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    Json(json!({ "session": service.session() })).into_response()
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    role: Role,
}

async fn login_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.login(request.role) {
        Ok(session) => (StatusCode::CREATED, Json(json!({ "session": session }))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn logout_handler<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.logout() {
        Ok(()) => (StatusCode::OK, Json(json!({ "session": null }))).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
struct ActivateRequest {
    #[serde(default)]
    method: PaymentMethod,
}

async fn activate_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<ActivateRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.activate(request.method).await {
        Ok((receipt, session)) => (
            StatusCode::OK,
            Json(json!({ "receipt": receipt, "session": session })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

// --- dentist profile ---

async fn update_dentist_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(update): Json<DentistProfileUpdate>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.update_dentist_profile(update))
}

async fn dentist_completion_handler<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.dentist_completion())
}

#[derive(Debug, Deserialize)]
struct PortfolioItemRequest {
    title: String,
    description: String,
    image_url: String,
}

async fn add_portfolio_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<PortfolioItemRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.add_portfolio_item(request.title, request.description, request.image_url) {
        Ok((item, report)) => (
            StatusCode::CREATED,
            Json(json!({ "item": item, "completion": report })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

async fn remove_portfolio_handler<S, G>(
    State(service): State<Service<S, G>>,
    Path(item_id): Path<String>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.remove_portfolio_item(&item_id))
}

#[derive(Debug, Deserialize)]
struct ExperienceRequest {
    clinic_name: String,
    role: String,
    #[serde(default)]
    period: String,
    #[serde(default)]
    description: String,
}

async fn add_experience_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<ExperienceRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.add_experience(
        request.clinic_name,
        request.role,
        request.period,
        request.description,
    ) {
        Ok((entry, report)) => (
            StatusCode::CREATED,
            Json(json!({ "experience": entry, "completion": report })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

async fn remove_experience_handler<S, G>(
    State(service): State<Service<S, G>>,
    Path(entry_id): Path<String>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.remove_experience(&entry_id))
}

// --- clinic profile ---

async fn update_clinic_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(update): Json<ClinicProfileUpdate>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.update_clinic_profile(update))
}

async fn clinic_completion_handler<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.clinic_completion())
}

#[derive(Debug, Deserialize)]
struct PhotoRequest {
    url: String,
}

async fn add_photo_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<PhotoRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.add_clinic_photo(request.url))
}

async fn remove_photo_handler<S, G>(
    State(service): State<Service<S, G>>,
    Path(index): Path<usize>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.remove_clinic_photo(index))
}

#[derive(Debug, Deserialize)]
struct ToggleSpecialtyRequest {
    specialty: String,
}

async fn toggle_specialty_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<ToggleSpecialtyRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.toggle_clinic_specialty(&request.specialty))
}

// --- search ---

#[derive(Debug, Default, Deserialize)]
struct JobSearchRequest {
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    regions: Option<Vec<Region>>,
    #[serde(default)]
    salary_label: Option<String>,
    #[serde(default)]
    specialties: Option<Vec<String>>,
}

impl JobSearchRequest {
    /// Absent selections mean "all"; an unknown salary label is rejected
    /// rather than silently widening the search.
    fn into_filter(self) -> Result<JobFilter, Response> {
        let salary = match self.salary_label.as_deref() {
            None => SalaryBand::unbounded(),
            Some(label) => SalaryBand::by_label(label).ok_or_else(|| {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": format!("unknown salary band '{label}'") })),
                )
                    .into_response()
            })?,
        };

        Ok(JobFilter {
            search_term: self.search_term,
            regions: Selection::only(self.regions.unwrap_or_default()),
            salary,
            specialties: Selection::only(self.specialties.unwrap_or_default()),
        })
    }
}

async fn search_jobs_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<JobSearchRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    let filter = match request.into_filter() {
        Ok(filter) => filter,
        Err(response) => return response,
    };
    match service.search_jobs(&filter) {
        Ok(jobs) => (StatusCode::OK, Json(json!({ "jobs": jobs }))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn publish_job_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(draft): Json<JobDraft>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    report_response(service.publish_job(draft))
}

#[derive(Debug, Default, Deserialize)]
struct CandidateSearchRequest {
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    specialties: Option<Vec<String>>,
}

async fn search_candidates_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<CandidateSearchRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    let filter = CandidateFilter {
        search_term: request.search_term,
        specialties: Selection::only(request.specialties.unwrap_or_default()),
    };
    match service.browse_candidates(&filter) {
        Ok(candidates) => {
            (StatusCode::OK, Json(json!({ "candidates": candidates }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

// --- saved filters ---

async fn list_filters_handler<S, G>(State(service): State<Service<S, G>>) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.list_saved_filters() {
        Ok(filters) => (StatusCode::OK, Json(json!({ "filters": filters }))).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
struct SaveFilterRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    regions: Option<Vec<Region>>,
    #[serde(default)]
    salary_label: Option<String>,
}

async fn save_filter_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<SaveFilterRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    let search = JobSearchRequest {
        search_term: request.search_term,
        regions: request.regions,
        salary_label: request.salary_label,
        specialties: None,
    };
    let filter = match search.into_filter() {
        Ok(filter) => filter,
        Err(response) => return response,
    };
    match service.save_filter(&filter, request.name) {
        Ok(saved) => (StatusCode::CREATED, Json(json!({ "filter": saved }))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn delete_filter_handler<S, G>(
    State(service): State<Service<S, G>>,
    Path(filter_id): Path<String>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.delete_saved_filter(&filter_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn apply_filter_handler<S, G>(
    State(service): State<Service<S, G>>,
    Path(filter_id): Path<String>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.apply_saved_filter(&filter_id) {
        Ok(filter) => (
            StatusCode::OK,
            Json(json!({
                "search_term": filter.search_term,
                "regions": filter.regions.values(),
                "salary_label": filter.salary.label,
            })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

/// Static reference lists the form surfaces render: specialty chips, region
/// chips, salary bands, and remuneration regimes.
async fn reference_data() -> Response {
    Json(json!({
        "specialties": SPECIALTIES,
        "regions": Region::ordered().map(Region::label),
        "salary_bands": SALARY_BANDS.map(|band| band.label),
        "remuneration_types": [
            RemunerationType::Fixed.label(),
            RemunerationType::Daily.label(),
            RemunerationType::Commission.label(),
        ],
    }))
    .into_response()
}

// --- suggestions ---

#[derive(Debug, Deserialize)]
struct BioSuggestionRequest {
    specialty_focus: String,
}

async fn bio_suggestion_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<BioSuggestionRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.improve_bio(&request.specialty_focus).await {
        Ok(text) => (StatusCode::OK, Json(json!({ "suggestion": text }))).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
struct JobSuggestionRequest {
    title: String,
}

async fn job_suggestion_handler<S, G>(
    State(service): State<Service<S, G>>,
    Json(request): Json<JobSuggestionRequest>,
) -> Response
where
    S: SavedFilterStore + 'static,
    G: SuggestionGateway + 'static,
{
    match service.draft_job_description(&request.title).await {
        Ok(text) => (StatusCode::OK, Json(json!({ "suggestion": text }))).into_response(),
        Err(error) => error_response(error),
    }
}
