use serde::Deserialize;

use super::domain::{
    Application, ApplicationWithJob, CompanyId, CompanyWithJobs, JobDetail, JobId, JobWithCompany,
    UserId,
};
use super::repository::{ListingRepository, RepositoryError};

/// Optional job-search filters. Every present, non-empty filter narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearch {
    pub query: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub employment_type: Option<String>,
}

impl JobSearch {
    pub fn is_unfiltered(&self) -> bool {
        [
            &self.query,
            &self.location,
            &self.category,
            &self.employment_type,
        ]
        .into_iter()
        .all(|filter| present(filter).is_none())
    }
}

fn present(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|value| !value.is_empty())
}

/// Joined, filtered and sorted read views over a [`ListingRepository`].
pub struct ListingQueries<'a, R: ?Sized> {
    repository: &'a R,
}

impl<'a, R> ListingQueries<'a, R>
where
    R: ListingRepository + ?Sized,
{
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Active jobs joined to their company, newest first. Jobs whose company is missing
    /// are dropped.
    pub fn active_jobs_with_company(&self) -> Result<Vec<JobWithCompany>, RepositoryError> {
        let mut listing = Vec::new();
        for job in self.repository.jobs()? {
            if !job.is_active {
                continue;
            }
            if let Some(company) = self.repository.company(&job.company_id)? {
                listing.push(JobWithCompany { job, company });
            }
        }

        listing.sort_by(|a, b| b.job.created_at.cmp(&a.job.created_at));
        Ok(listing)
    }

    /// Free-text `query` is a case-insensitive substring match over the job title (both
    /// languages), the primary description, and the company's primary name. The remaining
    /// filters are exact, case-sensitive comparisons.
    pub fn search_jobs(&self, search: &JobSearch) -> Result<Vec<JobWithCompany>, RepositoryError> {
        let mut jobs = self.active_jobs_with_company()?;

        if let Some(query) = present(&search.query) {
            let needle = query.to_lowercase();
            jobs.retain(|entry| matches_query(entry, &needle));
        }

        if let Some(location) = present(&search.location) {
            jobs.retain(|entry| entry.job.location == location);
        }

        if let Some(category) = present(&search.category) {
            jobs.retain(|entry| entry.job.category == category);
        }

        if let Some(employment_type) = present(&search.employment_type) {
            jobs.retain(|entry| entry.job.employment_type.label() == employment_type);
        }

        Ok(jobs)
    }

    pub fn job_with_company(&self, id: &JobId) -> Result<Option<JobDetail>, RepositoryError> {
        let Some(job) = self.repository.job(id)? else {
            return Ok(None);
        };
        let company = self.repository.company(&job.company_id)?;
        Ok(Some(JobDetail { job, company }))
    }

    /// Company joined with its active postings in insertion order.
    pub fn company_with_jobs(
        &self,
        id: &CompanyId,
    ) -> Result<Option<CompanyWithJobs>, RepositoryError> {
        let Some(company) = self.repository.company(id)? else {
            return Ok(None);
        };
        let jobs = self
            .repository
            .jobs()?
            .into_iter()
            .filter(|job| &job.company_id == id && job.is_active)
            .collect();
        Ok(Some(CompanyWithJobs { company, jobs }))
    }

    /// Applications submitted by `user_id`, most recent first.
    pub fn applications_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ApplicationWithJob>, RepositoryError> {
        let mut joined = self.join_applications(|application| &application.user_id == user_id)?;
        joined.sort_by(|a, b| b.application.applied_at.cmp(&a.application.applied_at));
        Ok(joined)
    }

    /// Applications received for `job_id`. No ordering is promised.
    pub fn applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationWithJob>, RepositoryError> {
        self.join_applications(|application| &application.job_id == job_id)
    }

    fn join_applications<P>(&self, select: P) -> Result<Vec<ApplicationWithJob>, RepositoryError>
    where
        P: Fn(&Application) -> bool,
    {
        let mut joined = Vec::new();
        for application in self.repository.applications()? {
            if !select(&application) {
                continue;
            }
            if let Some(view) = self.join_application(application)? {
                joined.push(view);
            }
        }
        Ok(joined)
    }

    fn join_application(
        &self,
        application: Application,
    ) -> Result<Option<ApplicationWithJob>, RepositoryError> {
        let Some(job) = self.repository.job(&application.job_id)? else {
            return Ok(None);
        };
        let Some(user) = self.repository.user(&application.user_id)? else {
            return Ok(None);
        };
        let Some(company) = self.repository.company(&job.company_id)? else {
            return Ok(None);
        };

        Ok(Some(ApplicationWithJob {
            application,
            job: JobWithCompany { job, company },
            user,
        }))
    }
}

fn matches_query(entry: &JobWithCompany, needle: &str) -> bool {
    let job = &entry.job;
    let haystacks = [
        Some(job.title.primary.as_str()),
        job.title.english.as_deref(),
        Some(job.description.primary.as_str()),
        Some(entry.company.name.primary.as_str()),
    ];

    haystacks
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}
