use std::sync::Arc;

use job_board::listings::{
    seed_sample_data, ApplicationStatus, CompanyUpdate, InMemoryListingRepository,
    JobBoardService, JobSearch, JobUpdate, Locale, NewApplication, NewUser, ServiceError,
    UserRole,
};

fn board() -> JobBoardService<InMemoryListingRepository> {
    JobBoardService::new(Arc::new(InMemoryListingRepository::new()))
}

fn applicant(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@example.org"),
        password: "correct horse".to_string(),
        full_name: "Yousef Ahmed".to_string(),
        phone: Some("+967 1 234 567".to_string()),
        user_type: UserRole::JobSeeker,
    }
}

#[test]
fn seeded_board_supports_search_and_application_review() {
    let service = board();
    let sample = seed_sample_data(&service).expect("seed succeeds");

    let everything = service
        .search_jobs(&JobSearch::default())
        .expect("search runs");
    assert_eq!(everything.len(), 2);

    let healthcare = service
        .search_jobs(&JobSearch {
            category: Some("الرعاية الصحية".to_string()),
            ..JobSearch::default()
        })
        .expect("search runs");
    assert_eq!(healthcare.len(), 1);
    let nurse = &healthcare[0];
    assert_eq!(nurse.job.title.resolve(Locale::English), "Qualified Nurse");
    assert_eq!(nurse.company.name.resolve(Locale::Arabic), "مستشفى السلام الطبي");

    let user = service
        .register_user(applicant("yousef"))
        .expect("registration succeeds");
    let application = service
        .apply(
            &user.id,
            &nurse.job.id,
            NewApplication {
                cover_letter: Some("خبرة خمس سنوات في العناية المركزة".to_string()),
                resume_url: None,
            },
        )
        .expect("application submitted");

    service
        .update_application_status(&application.id, ApplicationStatus::Reviewed)
        .expect("status updated");

    let for_job = service
        .applications_for_job(&nurse.job.id)
        .expect("applications load");
    assert_eq!(for_job.len(), 1);
    assert_eq!(for_job[0].application.status, ApplicationStatus::Reviewed);
    assert_eq!(for_job[0].user.username, "yousef");
    assert_eq!(for_job[0].job.company.id, sample.companies[1].id);
}

#[test]
fn employer_edits_flow_into_company_view() {
    let service = board();
    let sample = seed_sample_data(&service).expect("seed succeeds");
    let tech = &sample.companies[0];
    let frontend = &sample.jobs[0];

    service
        .update_company(
            &tech.id,
            CompanyUpdate {
                website: Some("https://tech.example".to_string()),
                ..CompanyUpdate::default()
            },
        )
        .expect("company updated");
    service
        .update_job(
            &frontend.id,
            JobUpdate {
                salary: Some("900 USD".to_string()),
                ..JobUpdate::default()
            },
        )
        .expect("job updated");

    let view = service
        .company_detail(&tech.id)
        .expect("lookup runs")
        .expect("company present");
    assert_eq!(view.company.website.as_deref(), Some("https://tech.example"));
    assert_eq!(view.jobs.len(), 1);
    assert_eq!(view.jobs[0].salary.as_deref(), Some("900 USD"));

    let detail = service
        .job_detail(&frontend.id)
        .expect("lookup runs")
        .expect("job present");
    assert_eq!(detail.company.map(|company| company.id), Some(tech.id.clone()));
}

#[test]
fn second_account_with_same_email_is_refused() {
    let service = board();
    service
        .register_user(applicant("mariam"))
        .expect("registration succeeds");

    let mut duplicate = applicant("mariam_2");
    duplicate.email = "mariam@example.org".to_string();
    let err = service
        .register_user(duplicate)
        .expect_err("duplicate email rejected");

    assert!(matches!(err, ServiceError::DuplicateEmail));
    assert_eq!(err.to_string(), "User already exists");
}
