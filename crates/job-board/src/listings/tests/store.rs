use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};

use chrono::{TimeZone, Utc};

use super::common::*;
use crate::listings::domain::{Company, CompanyId, JobUpdate, LocalizedText, UserId};
use crate::listings::repository::{ListingRepository, RepositoryError, UniqueField};
use crate::listings::store::EntityStore;

fn company_record(id: CompanyId, name: &str) -> Company {
    Company {
        id,
        name: LocalizedText::new(name),
        description: None,
        logo: None,
        website: None,
        industry: None,
        location: None,
        size: None,
        user_id: UserId::new("employer1"),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn create_assigns_distinct_ids() {
    let repository = repository();

    let ids: HashSet<_> = (0..50)
        .map(|n| {
            repository
                .create_user(seeker(&format!("seeker{n}")))
                .expect("user created")
                .id
        })
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(repository.user_count().expect("count"), 50);
}

#[test]
fn create_stamps_records_from_the_clock() {
    let repository = repository();
    let first = repository
        .create_company(UserId::new("employer1"), company("أ", "A"))
        .expect("company created");
    let second = repository
        .create_company(UserId::new("employer1"), company("ب", "B"))
        .expect("company created");

    assert!(second.created_at > first.created_at);
    assert_eq!(
        repository.company(&first.id).expect("lookup"),
        Some(first.clone())
    );
}

#[test]
fn list_preserves_insertion_order() {
    let store = EntityStore::<Company>::new();
    for name in ["first", "second", "third"] {
        store
            .create(|id| company_record(id, name))
            .expect("insert succeeds");
    }

    let names: Vec<_> = store
        .list()
        .expect("list")
        .into_iter()
        .map(|company| company.name.primary)
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn empty_update_leaves_record_unchanged() {
    let repository = repository();
    let company = repository
        .create_company(UserId::new("employer1"), company("أ", "A"))
        .expect("company created");
    let job = repository
        .create_job(company.id.clone(), frontend_job())
        .expect("job created");

    let updated = repository
        .update_job(&job.id, JobUpdate::default())
        .expect("update runs")
        .expect("job present");
    assert_eq!(updated, job);

    let again = repository
        .update_job(&job.id, JobUpdate::default())
        .expect("update runs")
        .expect("job present");
    assert_eq!(again, job);
    assert_eq!(repository.job(&job.id).expect("lookup"), Some(job));
}

#[test]
fn update_merges_only_supplied_fields() {
    let repository = repository();
    let job = repository
        .create_job(CompanyId::new("company1"), frontend_job())
        .expect("job created");

    let updated = repository
        .update_job(
            &job.id,
            JobUpdate {
                salary: Some("800 USD".to_string()),
                is_active: Some(false),
                ..JobUpdate::default()
            },
        )
        .expect("update runs")
        .expect("job present");

    assert_eq!(updated.salary.as_deref(), Some("800 USD"));
    assert!(!updated.is_active);
    assert_eq!(updated.title, job.title);
    assert_eq!(updated.created_at, job.created_at);
    assert_eq!(updated.id, job.id);
}

#[test]
fn update_of_unknown_id_is_a_no_op() {
    let store = EntityStore::<Company>::new();
    store
        .create(|id| company_record(id, "only"))
        .expect("insert succeeds");

    let result = store
        .update(&CompanyId::new("missing"), |company| {
            company.name = LocalizedText::new("changed")
        })
        .expect("update runs");

    assert!(result.is_none());
    let names: Vec<_> = store
        .list()
        .expect("list")
        .into_iter()
        .map(|company| company.name.primary)
        .collect();
    assert_eq!(names, vec!["only"]);
}

#[test]
fn builder_reusing_an_existing_id_is_a_conflict() {
    let store = EntityStore::<Company>::new();
    let existing = store
        .create(|id| company_record(id, "first"))
        .expect("insert succeeds");

    let result = store.create(|_| company_record(existing.id.clone(), "duplicate"));

    assert!(matches!(result, Err(RepositoryError::Conflict)));
    assert_eq!(store.len().expect("len"), 1);
}

#[test]
fn rejected_create_leaves_store_unchanged() {
    let store = EntityStore::<Company>::new();
    store
        .create(|id| company_record(id, "first"))
        .expect("insert succeeds");

    let result = store.create_unless(
        |existing| {
            existing
                .iter()
                .any(|company| company.name.primary == "first")
                .then_some(RepositoryError::Conflict)
        },
        |id| company_record(id, "second"),
    );

    assert!(matches!(result, Err(RepositoryError::Conflict)));
    assert_eq!(store.len().expect("len"), 1);

    store
        .create_unless(|_| None, |id| company_record(id, "second"))
        .expect("unvetoed insert succeeds");
    assert_eq!(store.len().expect("len"), 2);
}

#[test]
fn create_user_reports_the_clashing_field() {
    let repository = repository();
    repository.create_user(seeker("dina")).expect("user created");

    let mut same_email = seeker("dina2");
    same_email.email = "dina@example.com".to_string();
    assert!(matches!(
        repository.create_user(same_email),
        Err(RepositoryError::Duplicate(UniqueField::Email))
    ));

    let mut same_username = seeker("dina");
    same_username.email = "dina.other@example.com".to_string();
    assert!(matches!(
        repository.create_user(same_username),
        Err(RepositoryError::Duplicate(UniqueField::Username))
    ));
    assert_eq!(repository.user_count().expect("count"), 1);
}

#[test]
fn poisoned_store_reports_unavailable() {
    let store = EntityStore::<Company>::new();
    let company = store
        .create(|id| company_record(id, "fragile"))
        .expect("insert succeeds");

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let _ = store.update(&company.id, |_| panic!("writer crashed mid-update"));
    }));
    assert!(outcome.is_err());

    match store.get(&company.id) {
        Err(RepositoryError::Unavailable(message)) => assert!(message.contains("company")),
        other => panic!("expected unavailable store, got {other:?}"),
    }
}

#[test]
fn lookups_scan_by_email_and_username() {
    let repository = repository();
    let user = repository
        .create_user(seeker("huda"))
        .expect("user created");

    assert_eq!(
        repository
            .user_by_email("huda@example.com")
            .expect("lookup")
            .map(|found| found.id),
        Some(user.id.clone())
    );
    assert_eq!(
        repository
            .user_by_username("huda")
            .expect("lookup")
            .map(|found| found.id),
        Some(user.id)
    );
    assert!(repository
        .user_by_email("HUDA@example.com")
        .expect("lookup")
        .is_none());
}
