use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::listings::listings_router;
use crate::listings::domain::{
    Application, ApplicationId, ApplicationStatus, Company, CompanyId, CompanyUpdate,
    EmploymentType, ExperienceLevel, Job, JobId, JobUpdate, LocalizedText, NewApplication,
    NewCompany, NewJob, NewUser, User, UserId, UserRole,
};
use crate::listings::memory::InMemoryListingRepository;
use crate::listings::repository::{ListingRepository, RepositoryError};
use crate::listings::service::JobBoardService;
use crate::listings::store::Clock;

/// Clock that advances one minute on every reading.
pub(super) struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub(super) fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock mutex poisoned");
        let current = *next;
        *next = current + Duration::minutes(1);
        current
    }
}

pub(super) fn repository() -> Arc<InMemoryListingRepository> {
    Arc::new(InMemoryListingRepository::with_clock(Arc::new(
        SteppingClock::default(),
    )))
}

pub(super) fn build_service() -> (
    JobBoardService<InMemoryListingRepository>,
    Arc<InMemoryListingRepository>,
) {
    let repository = repository();
    let service = JobBoardService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(
    service: JobBoardService<InMemoryListingRepository>,
) -> axum::Router {
    listings_router(Arc::new(service))
}

pub(super) fn seeker(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "s3cret".to_string(),
        full_name: "Amal Saleh".to_string(),
        phone: None,
        user_type: UserRole::JobSeeker,
    }
}

pub(super) fn company(name: &str, english: &str) -> NewCompany {
    NewCompany {
        name: LocalizedText::new(name).with_english(english),
        description: None,
        logo: None,
        website: None,
        industry: Some("تقنية المعلومات".to_string()),
        location: Some("صنعاء".to_string()),
        size: None,
    }
}

pub(super) fn job(title: &str, english: &str, description: &str, location: &str) -> NewJob {
    NewJob {
        title: LocalizedText::new(title).with_english(english),
        description: LocalizedText::new(description),
        requirements: None,
        location: location.to_string(),
        employment_type: EmploymentType::FullTime,
        experience: Some(ExperienceLevel::Mid),
        category: "تقنية المعلومات".to_string(),
        skills: vec!["React".to_string()],
        salary: None,
    }
}

pub(super) fn frontend_job() -> NewJob {
    job(
        "مطور ويب فرونت إند",
        "Frontend Web Developer",
        "Build interactive interfaces with React and TypeScript",
        "صنعاء",
    )
}

pub(super) fn nurse_job() -> NewJob {
    let mut nurse = job(
        "ممرض/ة مؤهل/ة",
        "Qualified Nurse",
        "مطلوب ممرض/ة للعمل في قسم العناية المركزة",
        "عدن",
    );
    nurse.category = "الرعاية الصحية".to_string();
    nurse.skills = vec!["التمريض".to_string()];
    nurse
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn empty_application() -> NewApplication {
    NewApplication::default()
}

/// Repository whose every call fails, for exercising the 500 paths.
pub(super) struct UnavailableRepository;

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("store offline".to_string())
}

impl ListingRepository for UnavailableRepository {
    fn user(&self, _id: &UserId) -> Result<Option<User>, RepositoryError> {
        Err(offline())
    }

    fn users(&self) -> Result<Vec<User>, RepositoryError> {
        Err(offline())
    }

    fn create_user(&self, _draft: NewUser) -> Result<User, RepositoryError> {
        Err(offline())
    }

    fn company(&self, _id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
        Err(offline())
    }

    fn companies(&self) -> Result<Vec<Company>, RepositoryError> {
        Err(offline())
    }

    fn create_company(
        &self,
        _owner: UserId,
        _draft: NewCompany,
    ) -> Result<Company, RepositoryError> {
        Err(offline())
    }

    fn update_company(
        &self,
        _id: &CompanyId,
        _update: CompanyUpdate,
    ) -> Result<Option<Company>, RepositoryError> {
        Err(offline())
    }

    fn job(&self, _id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Err(offline())
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Err(offline())
    }

    fn create_job(&self, _company: CompanyId, _draft: NewJob) -> Result<Job, RepositoryError> {
        Err(offline())
    }

    fn update_job(&self, _id: &JobId, _update: JobUpdate) -> Result<Option<Job>, RepositoryError> {
        Err(offline())
    }

    fn application(&self, _id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Err(offline())
    }

    fn applications(&self) -> Result<Vec<Application>, RepositoryError> {
        Err(offline())
    }

    fn create_application(
        &self,
        _job: JobId,
        _applicant: UserId,
        _draft: NewApplication,
    ) -> Result<Application, RepositoryError> {
        Err(offline())
    }

    fn update_application_status(
        &self,
        _id: &ApplicationId,
        _status: ApplicationStatus,
    ) -> Result<Option<Application>, RepositoryError> {
        Err(offline())
    }
}
