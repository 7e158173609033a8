use super::domain::{
    Application, ApplicationId, ApplicationStatus, Company, CompanyId, CompanyUpdate, Job, JobId,
    JobUpdate, NewApplication, NewCompany, NewJob, NewUser, User, UserId,
};

/// Storage abstraction over the four entity collections so the service and query engine
/// can be exercised in isolation.
///
/// `create_*` assigns the id and timestamp. `update_*` returns `Ok(None)` for unknown ids.
/// Referential integrity is not checked on write. `create_user` is the one uniqueness-checked
/// write: it fails with [`RepositoryError::Duplicate`] when the email or username is already
/// registered, and the check and the insert happen atomically.
pub trait ListingRepository: Send + Sync {
    fn user(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    fn users(&self) -> Result<Vec<User>, RepositoryError>;
    fn create_user(&self, draft: NewUser) -> Result<User, RepositoryError>;

    fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError>;
    fn companies(&self) -> Result<Vec<Company>, RepositoryError>;
    fn create_company(&self, owner: UserId, draft: NewCompany)
        -> Result<Company, RepositoryError>;
    fn update_company(
        &self,
        id: &CompanyId,
        update: CompanyUpdate,
    ) -> Result<Option<Company>, RepositoryError>;

    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    fn jobs(&self) -> Result<Vec<Job>, RepositoryError>;
    fn create_job(&self, company: CompanyId, draft: NewJob) -> Result<Job, RepositoryError>;
    fn update_job(&self, id: &JobId, update: JobUpdate) -> Result<Option<Job>, RepositoryError>;

    fn application(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
    fn applications(&self) -> Result<Vec<Application>, RepositoryError>;
    fn create_application(
        &self,
        job: JobId,
        applicant: UserId,
        draft: NewApplication,
    ) -> Result<Application, RepositoryError>;
    fn update_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, RepositoryError>;

    fn user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users()?.into_iter().find(|user| user.email == email))
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users()?
            .into_iter()
            .find(|user| user.username == username))
    }

    fn companies_by_owner(&self, owner: &UserId) -> Result<Vec<Company>, RepositoryError> {
        Ok(self
            .companies()?
            .into_iter()
            .filter(|company| &company.user_id == owner)
            .collect())
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("{} already registered", .0.label())]
    Duplicate(UniqueField),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Account fields that must not be shared between two users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Username,
}

impl UniqueField {
    pub const fn label(self) -> &'static str {
        match self {
            UniqueField::Email => "email",
            UniqueField::Username => "username",
        }
    }
}
