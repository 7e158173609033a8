use std::sync::Arc;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, Company, CompanyId, CompanyUpdate, Job, JobId,
    JobUpdate, NewApplication, NewCompany, NewJob, NewUser, User, UserId,
};
use super::repository::{ListingRepository, RepositoryError, UniqueField};
use super::store::{Clock, EntityStore, SystemClock};

/// Volatile, process-local repository backing the HTTP service and tests.
pub struct InMemoryListingRepository {
    users: EntityStore<User>,
    companies: EntityStore<Company>,
    jobs: EntityStore<Job>,
    applications: EntityStore<Application>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryListingRepository {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: EntityStore::new(),
            companies: EntityStore::new(),
            jobs: EntityStore::new(),
            applications: EntityStore::new(),
            clock,
        }
    }

    pub fn user_count(&self) -> Result<usize, RepositoryError> {
        self.users.len()
    }
}

impl ListingRepository for InMemoryListingRepository {
    fn user(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        self.users.get(id)
    }

    fn users(&self) -> Result<Vec<User>, RepositoryError> {
        self.users.list()
    }

    fn create_user(&self, draft: NewUser) -> Result<User, RepositoryError> {
        let created_at = self.clock.now();
        let email = draft.email.clone();
        let username = draft.username.clone();
        let taken = move |users: &[User]| {
            if users.iter().any(|user| user.email == email) {
                Some(RepositoryError::Duplicate(UniqueField::Email))
            } else if users.iter().any(|user| user.username == username) {
                Some(RepositoryError::Duplicate(UniqueField::Username))
            } else {
                None
            }
        };

        self.users.create_unless(taken, |id| User {
            id,
            username: draft.username,
            email: draft.email,
            password: draft.password,
            full_name: draft.full_name,
            phone: draft.phone,
            user_type: draft.user_type,
            created_at,
        })
    }

    fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
        self.companies.get(id)
    }

    fn companies(&self) -> Result<Vec<Company>, RepositoryError> {
        self.companies.list()
    }

    fn create_company(
        &self,
        owner: UserId,
        draft: NewCompany,
    ) -> Result<Company, RepositoryError> {
        let created_at = self.clock.now();
        self.companies.create(|id| Company {
            id,
            name: draft.name,
            description: draft.description,
            logo: draft.logo,
            website: draft.website,
            industry: draft.industry,
            location: draft.location,
            size: draft.size,
            user_id: owner,
            created_at,
        })
    }

    fn update_company(
        &self,
        id: &CompanyId,
        update: CompanyUpdate,
    ) -> Result<Option<Company>, RepositoryError> {
        self.companies
            .update(id, |company| update.apply_to(company))
    }

    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        self.jobs.get(id)
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        self.jobs.list()
    }

    fn create_job(&self, company: CompanyId, draft: NewJob) -> Result<Job, RepositoryError> {
        let created_at = self.clock.now();
        self.jobs.create(|id| Job {
            id,
            title: draft.title,
            description: draft.description,
            requirements: draft.requirements,
            location: draft.location,
            employment_type: draft.employment_type,
            experience: draft.experience,
            category: draft.category,
            skills: draft.skills,
            salary: draft.salary,
            company_id: company,
            is_active: true,
            created_at,
        })
    }

    fn update_job(&self, id: &JobId, update: JobUpdate) -> Result<Option<Job>, RepositoryError> {
        self.jobs.update(id, |job| update.apply_to(job))
    }

    fn application(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        self.applications.get(id)
    }

    fn applications(&self) -> Result<Vec<Application>, RepositoryError> {
        self.applications.list()
    }

    fn create_application(
        &self,
        job: JobId,
        applicant: UserId,
        draft: NewApplication,
    ) -> Result<Application, RepositoryError> {
        let applied_at = self.clock.now();
        self.applications.create(|id| Application {
            id,
            job_id: job,
            user_id: applicant,
            cover_letter: draft.cover_letter,
            resume_url: draft.resume_url,
            status: ApplicationStatus::Pending,
            applied_at,
        })
    }

    fn update_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, RepositoryError> {
        self.applications
            .update(id, |application| application.status = status)
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.users.find(|user| user.email == email)
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        self.users.find(|user| user.username == username)
    }

    fn companies_by_owner(&self, owner: &UserId) -> Result<Vec<Company>, RepositoryError> {
        self.companies.filter(|company| &company.user_id == owner)
    }
}
