use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiers that the store mints on insert.
pub trait GeneratedId: Clone + Eq + std::hash::Hash {
    fn generate() -> Self;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl GeneratedId for $name {
            fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier for registered job seekers and employers.
    UserId
);
entity_id!(
    /// Identifier for employer companies.
    CompanyId
);
entity_id!(
    /// Identifier for job postings.
    JobId
);
entity_id!(
    /// Identifier for submitted job applications.
    ApplicationId
);

/// Display languages supported by the board. Arabic is the primary language of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::Arabic => "ar",
            Locale::English => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Locale::Arabic),
            "en" => Ok(Locale::English),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected 'ar' or 'en')")]
pub struct UnknownLocale(pub String);

/// Text stored in the primary language with an optional English rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
}

impl LocalizedText {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            english: None,
        }
    }

    pub fn with_english(mut self, english: impl Into<String>) -> Self {
        self.english = Some(english.into());
        self
    }

    /// English falls back to the primary text when no (or a blank) translation exists.
    pub fn resolve(&self, locale: Locale) -> &str {
        match (locale, self.english.as_deref()) {
            (Locale::English, Some(english)) if !english.trim().is_empty() => english,
            _ => &self.primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    JobSeeker,
    Employer,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::JobSeeker => "job_seeker",
            UserRole::Employer => "employer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Remote,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
            EmploymentType::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// Registered account. The credential never leaves the service in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub user_type: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Registration payload for a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub user_type: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: LocalizedText,
    pub description: Option<LocalizedText>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub size: Option<CompanySize>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Company registration payload; the owning user is supplied separately by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub size: Option<CompanySize>,
}

/// Partial company update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyUpdate {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub size: Option<CompanySize>,
}

impl CompanyUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(self, company: &mut Company) {
        if let Some(name) = self.name {
            company.name = name;
        }
        if let Some(description) = self.description {
            company.description = Some(description);
        }
        if let Some(logo) = self.logo {
            company.logo = Some(logo);
        }
        if let Some(website) = self.website {
            company.website = Some(website);
        }
        if let Some(industry) = self.industry {
            company.industry = Some(industry);
        }
        if let Some(location) = self.location {
            company.location = Some(location);
        }
        if let Some(size) = self.size {
            company.size = Some(size);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub requirements: Option<LocalizedText>,
    pub location: String,
    pub employment_type: EmploymentType,
    pub experience: Option<ExperienceLevel>,
    pub category: String,
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub company_id: CompanyId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Job posting payload; the owning company is supplied separately by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub requirements: Option<LocalizedText>,
    pub location: String,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub experience: Option<ExperienceLevel>,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub salary: Option<String>,
}

/// Partial job update. `is_active = Some(false)` withdraws the posting from listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobUpdate {
    pub title: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub requirements: Option<LocalizedText>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub experience: Option<ExperienceLevel>,
    pub category: Option<String>,
    pub skills: Option<Vec<String>>,
    pub salary: Option<String>,
    pub is_active: Option<bool>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = Some(requirements);
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(employment_type) = self.employment_type {
            job.employment_type = employment_type;
        }
        if let Some(experience) = self.experience {
            job.experience = Some(experience);
        }
        if let Some(category) = self.category {
            job.category = category;
        }
        if let Some(skills) = self.skills {
            job.skills = skills;
        }
        if let Some(salary) = self.salary {
            job.salary = Some(salary);
        }
        if let Some(is_active) = self.is_active {
            job.is_active = is_active;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub user_id: UserId,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Applicant-provided material; job and applicant are supplied separately by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// A job rendered together with the company that posted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobWithCompany {
    #[serde(flatten)]
    pub job: Job,
    pub company: Company,
}

/// Single-job view; the company is `None` when the reference does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    pub company: Option<Company>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyWithJobs {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

/// Application joined with its job (and that job's company) plus the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: Application,
    pub job: JobWithCompany,
    pub user: User,
}
