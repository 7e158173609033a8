use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::{
    ApplicationId, ApplicationStatus, CompanyId, CompanyUpdate, JobId, JobUpdate, NewApplication,
    NewCompany, NewJob, NewUser, UserId,
};
use super::query::JobSearch;
use super::reference;
use super::repository::ListingRepository;
use super::service::{JobBoardService, ServiceError};
use super::validation::ValidationError;

type SharedService<R> = Arc<JobBoardService<R>>;

/// Router builder exposing the job board REST endpoints.
pub fn listings_router<R>(service: SharedService<R>) -> Router
where
    R: ListingRepository + 'static,
{
    Router::new()
        .route(
            "/api/jobs",
            get(search_jobs_handler::<R>).post(create_job_handler::<R>),
        )
        .route(
            "/api/jobs/:job_id",
            get(job_handler::<R>).patch(update_job_handler::<R>),
        )
        .route(
            "/api/companies",
            get(companies_handler::<R>).post(create_company_handler::<R>),
        )
        .route(
            "/api/companies/:company_id",
            get(company_handler::<R>).patch(update_company_handler::<R>),
        )
        .route("/api/applications", post(create_application_handler::<R>))
        .route(
            "/api/applications/:application_id/status",
            patch(update_application_status_handler::<R>),
        )
        .route(
            "/api/applications/user/:user_id",
            get(user_applications_handler::<R>),
        )
        .route(
            "/api/applications/job/:job_id",
            get(job_applications_handler::<R>),
        )
        .route("/api/users", post(create_user_handler::<R>))
        .route(
            "/api/users/:user_id/companies",
            get(user_companies_handler::<R>),
        )
        .route("/api/categories", get(categories_handler))
        .route("/api/locations", get(locations_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateJobRequest {
    pub(crate) company_id: CompanyId,
    #[serde(flatten)]
    pub(crate) job: NewJob,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCompanyRequest {
    pub(crate) user_id: UserId,
    #[serde(flatten)]
    pub(crate) company: NewCompany,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateApplicationRequest {
    pub(crate) job_id: JobId,
    pub(crate) user_id: UserId,
    #[serde(flatten)]
    pub(crate) application: NewApplication,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusChangeRequest {
    pub(crate) status: ApplicationStatus,
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (status, Json(payload)).into_response()
}

fn invalid_body(label: &str, rejection: JsonRejection) -> Response {
    let reason = ValidationError::MalformedBody(rejection.body_text());
    error_body(StatusCode::BAD_REQUEST, format!("Invalid {label} data: {reason}"))
}

fn service_error(label: &str, err: ServiceError) -> Response {
    match err {
        ServiceError::Validation(reason) => {
            error_body(StatusCode::BAD_REQUEST, format!("Invalid {label} data: {reason}"))
        }
        ServiceError::DuplicateEmail | ServiceError::DuplicateUsername => {
            error_body(StatusCode::BAD_REQUEST, err.to_string())
        }
        ServiceError::NotFound { .. } => error_body(StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::Repository(source) => {
            error!(error = %source, "repository failure while handling {label} request");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to process {label} request"),
            )
        }
    }
}

fn ok_json<T: serde::Serialize>(label: &str, result: Result<T, ServiceError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => service_error(label, err),
    }
}

pub(crate) async fn search_jobs_handler<R>(
    State(service): State<SharedService<R>>,
    search: Result<Query<JobSearch>, QueryRejection>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Query(search) = match search {
        Ok(search) => search,
        Err(rejection) => return error_body(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    ok_json("job", service.search_jobs(&search))
}

pub(crate) async fn job_handler<R>(
    State(service): State<SharedService<R>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: ListingRepository + 'static,
{
    match service.job_detail(&JobId(job_id)) {
        Ok(Some(detail)) => (StatusCode::OK, Json(detail)).into_response(),
        Ok(None) => error_body(StatusCode::NOT_FOUND, "Job not found"),
        Err(err) => service_error("job", err),
    }
}

pub(crate) async fn create_job_handler<R>(
    State(service): State<SharedService<R>>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body("job", rejection),
    };
    ok_json("job", service.post_job(&request.company_id, request.job))
}

pub(crate) async fn update_job_handler<R>(
    State(service): State<SharedService<R>>,
    Path(job_id): Path<String>,
    payload: Result<Json<JobUpdate>, JsonRejection>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Json(update) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body("job", rejection),
    };
    ok_json("job", service.update_job(&JobId(job_id), update))
}

pub(crate) async fn companies_handler<R>(State(service): State<SharedService<R>>) -> Response
where
    R: ListingRepository + 'static,
{
    ok_json("company", service.companies())
}

pub(crate) async fn company_handler<R>(
    State(service): State<SharedService<R>>,
    Path(company_id): Path<String>,
) -> Response
where
    R: ListingRepository + 'static,
{
    match service.company_detail(&CompanyId(company_id)) {
        Ok(Some(detail)) => (StatusCode::OK, Json(detail)).into_response(),
        Ok(None) => error_body(StatusCode::NOT_FOUND, "Company not found"),
        Err(err) => service_error("company", err),
    }
}

pub(crate) async fn create_company_handler<R>(
    State(service): State<SharedService<R>>,
    payload: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body("company", rejection),
    };
    ok_json(
        "company",
        service.register_company(&request.user_id, request.company),
    )
}

pub(crate) async fn update_company_handler<R>(
    State(service): State<SharedService<R>>,
    Path(company_id): Path<String>,
    payload: Result<Json<CompanyUpdate>, JsonRejection>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Json(update) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body("company", rejection),
    };
    ok_json(
        "company",
        service.update_company(&CompanyId(company_id), update),
    )
}

pub(crate) async fn create_application_handler<R>(
    State(service): State<SharedService<R>>,
    payload: Result<Json<CreateApplicationRequest>, JsonRejection>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body("application", rejection),
    };
    ok_json(
        "application",
        service.apply(&request.user_id, &request.job_id, request.application),
    )
}

pub(crate) async fn update_application_status_handler<R>(
    State(service): State<SharedService<R>>,
    Path(application_id): Path<String>,
    payload: Result<Json<StatusChangeRequest>, JsonRejection>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body("application", rejection),
    };
    ok_json(
        "application",
        service.update_application_status(&ApplicationId(application_id), request.status),
    )
}

pub(crate) async fn user_applications_handler<R>(
    State(service): State<SharedService<R>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ListingRepository + 'static,
{
    ok_json(
        "user applications",
        service.applications_for_user(&UserId(user_id)),
    )
}

pub(crate) async fn job_applications_handler<R>(
    State(service): State<SharedService<R>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: ListingRepository + 'static,
{
    ok_json(
        "job applications",
        service.applications_for_job(&JobId(job_id)),
    )
}

pub(crate) async fn create_user_handler<R>(
    State(service): State<SharedService<R>>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Json(draft) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body("user", rejection),
    };
    ok_json("user", service.register_user(draft))
}

pub(crate) async fn user_companies_handler<R>(
    State(service): State<SharedService<R>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ListingRepository + 'static,
{
    ok_json("company", service.companies_owned_by(&UserId(user_id)))
}

pub(crate) async fn categories_handler() -> Response {
    (StatusCode::OK, Json(reference::job_categories())).into_response()
}

pub(crate) async fn locations_handler() -> Response {
    (StatusCode::OK, Json(reference::locations())).into_response()
}
