use super::domain::{CompanyUpdate, JobUpdate, LocalizedText, NewCompany, NewJob, NewUser};

/// Rejections raised before any store mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("email must contain '@'")]
    InvalidEmail,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn required_text(field: &'static str, value: &LocalizedText) -> Result<(), ValidationError> {
    required(field, &value.primary)
}

pub(crate) fn new_user(draft: &NewUser) -> Result<(), ValidationError> {
    required("username", &draft.username)?;
    required("email", &draft.email)?;
    if !draft.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    required("password", &draft.password)?;
    required("fullName", &draft.full_name)
}

pub(crate) fn new_company(draft: &NewCompany) -> Result<(), ValidationError> {
    required_text("name", &draft.name)
}

pub(crate) fn new_job(draft: &NewJob) -> Result<(), ValidationError> {
    required_text("title", &draft.title)?;
    required_text("description", &draft.description)?;
    required("location", &draft.location)?;
    required("category", &draft.category)
}

pub(crate) fn company_update(update: &CompanyUpdate) -> Result<(), ValidationError> {
    if let Some(name) = &update.name {
        required_text("name", name)?;
    }
    Ok(())
}

pub(crate) fn job_update(update: &JobUpdate) -> Result<(), ValidationError> {
    if let Some(title) = &update.title {
        required_text("title", title)?;
    }
    if let Some(description) = &update.description {
        required_text("description", description)?;
    }
    if let Some(location) = &update.location {
        required("location", location)?;
    }
    if let Some(category) = &update.category {
        required("category", category)?;
    }
    Ok(())
}

pub(crate) fn reference(field: &'static str, id: &str) -> Result<(), ValidationError> {
    required(field, id)
}

/// Trims skills and drops blank entries, keeping the submitted order.
pub(crate) fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}
