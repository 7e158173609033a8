//! Job postings, employer companies, accounts and applications.
//!
//! The entity store keeps each record kind in its own locked collection; the query engine
//! joins and filters those collections for the read endpoints; the service validates
//! writes and is what the HTTP router talks to.

pub mod domain;
pub mod memory;
pub mod query;
pub mod reference;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;
pub mod store;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationWithJob, Company, CompanyId,
    CompanySize, CompanyUpdate, CompanyWithJobs, EmploymentType, ExperienceLevel, Job, JobDetail,
    JobId, JobUpdate, JobWithCompany, Locale, LocalizedText, NewApplication, NewCompany, NewJob,
    NewUser, UnknownLocale, User, UserId, UserRole,
};
pub use memory::InMemoryListingRepository;
pub use query::{JobSearch, ListingQueries};
pub use reference::ReferenceEntry;
pub use repository::{ListingRepository, RepositoryError, UniqueField};
pub use router::listings_router;
pub use seed::{seed_sample_data, SampleData};
pub use service::{JobBoardService, ServiceError};
pub use store::{Clock, Entity, EntityStore, SystemClock};
pub use validation::ValidationError;
