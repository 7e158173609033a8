use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationWithJob, Company, CompanyId,
    CompanyUpdate, CompanyWithJobs, Job, JobDetail, JobId, JobUpdate, JobWithCompany,
    NewApplication, NewCompany, NewJob, NewUser, User, UserId,
};
use super::query::{JobSearch, ListingQueries};
use super::repository::{ListingRepository, RepositoryError, UniqueField};
use super::validation::{self, ValidationError};

/// Service composing validation, the repository, and the query engine.
///
/// Callers identify the acting user or company explicitly on every create operation.
pub struct JobBoardService<R> {
    repository: Arc<R>,
}

impl<R> JobBoardService<R>
where
    R: ListingRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn queries(&self) -> ListingQueries<'_, R> {
        ListingQueries::new(self.repository.as_ref())
    }

    /// Register an account. Email and username must not already be in use.
    pub fn register_user(&self, draft: NewUser) -> Result<User, ServiceError> {
        validation::new_user(&draft)?;

        let email = draft.email.clone();
        let username = draft.username.clone();
        let user = match self.repository.create_user(draft) {
            Ok(user) => user,
            Err(RepositoryError::Duplicate(UniqueField::Email)) => {
                warn!(%email, "registration rejected: email already registered");
                return Err(ServiceError::DuplicateEmail);
            }
            Err(RepositoryError::Duplicate(UniqueField::Username)) => {
                warn!(%username, "registration rejected: username taken");
                return Err(ServiceError::DuplicateUsername);
            }
            Err(err) => return Err(err.into()),
        };
        info!(user_id = %user.id, role = user.user_type.label(), "user registered");
        Ok(user)
    }

    pub fn register_company(
        &self,
        owner: &UserId,
        draft: NewCompany,
    ) -> Result<Company, ServiceError> {
        validation::reference("userId", owner.as_str())?;
        validation::new_company(&draft)?;

        let company = self.repository.create_company(owner.clone(), draft)?;
        info!(company_id = %company.id, owner = %owner, "company registered");
        Ok(company)
    }

    pub fn post_job(&self, company: &CompanyId, mut draft: NewJob) -> Result<Job, ServiceError> {
        validation::reference("companyId", company.as_str())?;
        validation::new_job(&draft)?;
        draft.skills = validation::normalize_skills(draft.skills);

        let job = self.repository.create_job(company.clone(), draft)?;
        info!(job_id = %job.id, company_id = %company, "job posted");
        Ok(job)
    }

    pub fn apply(
        &self,
        applicant: &UserId,
        job: &JobId,
        draft: NewApplication,
    ) -> Result<Application, ServiceError> {
        validation::reference("jobId", job.as_str())?;
        validation::reference("userId", applicant.as_str())?;

        let application =
            self.repository
                .create_application(job.clone(), applicant.clone(), draft)?;
        info!(
            application_id = %application.id,
            job_id = %job,
            user_id = %applicant,
            "application submitted"
        );
        Ok(application)
    }

    pub fn update_company(
        &self,
        id: &CompanyId,
        update: CompanyUpdate,
    ) -> Result<Company, ServiceError> {
        validation::company_update(&update)?;
        let company = self
            .repository
            .update_company(id, update)?
            .ok_or(ServiceError::NotFound { entity: "Company" })?;
        info!(company_id = %id, "company updated");
        Ok(company)
    }

    pub fn update_job(&self, id: &JobId, mut update: JobUpdate) -> Result<Job, ServiceError> {
        validation::job_update(&update)?;
        update.skills = update.skills.map(validation::normalize_skills);
        let job = self
            .repository
            .update_job(id, update)?
            .ok_or(ServiceError::NotFound { entity: "Job" })?;
        info!(job_id = %id, active = job.is_active, "job updated");
        Ok(job)
    }

    pub fn update_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, ServiceError> {
        let application = self
            .repository
            .update_application_status(id, status)?
            .ok_or(ServiceError::NotFound {
                entity: "Application",
            })?;
        info!(application_id = %id, status = status.label(), "application status changed");
        Ok(application)
    }

    pub fn search_jobs(&self, search: &JobSearch) -> Result<Vec<JobWithCompany>, ServiceError> {
        let jobs = self.queries().search_jobs(search)?;
        debug!(?search, matches = jobs.len(), "job search");
        Ok(jobs)
    }

    pub fn job_detail(&self, id: &JobId) -> Result<Option<JobDetail>, ServiceError> {
        Ok(self.queries().job_with_company(id)?)
    }

    pub fn companies(&self) -> Result<Vec<Company>, ServiceError> {
        Ok(self.repository.companies()?)
    }

    pub fn company_detail(&self, id: &CompanyId) -> Result<Option<CompanyWithJobs>, ServiceError> {
        Ok(self.queries().company_with_jobs(id)?)
    }

    pub fn companies_owned_by(&self, owner: &UserId) -> Result<Vec<Company>, ServiceError> {
        Ok(self.repository.companies_by_owner(owner)?)
    }

    pub fn applications_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ApplicationWithJob>, ServiceError> {
        Ok(self.queries().applications_for_user(user_id)?)
    }

    pub fn applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationWithJob>, ServiceError> {
        Ok(self.queries().applications_for_job(job_id)?)
    }
}

/// Error raised by the job board service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("User already exists")]
    DuplicateEmail,
    #[error("Username already taken")]
    DuplicateUsername,
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
