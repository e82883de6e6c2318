use chrono::NaiveDate;

use clio::auth::AuthenticatedUser;
use clio::dates::FixedClock;
use clio::domain::article::ArticleStatus;
use clio::domain::researcher::NewResearcher;
use clio::forms::articles::ArticleForm;
use clio::forms::editorial_numbers::EditorialNumberForm;
use clio::repository::{DieselRepository, ResearcherWriter};
use clio::roles::Role;
use clio::services::ServiceError;
use clio::services::articles::create_article;
use clio::services::editorial_numbers::{
    OverlapQuery, check_date_overlap, create_editorial_number, current_editorial_number,
    update_editorial_number,
};

mod common;

fn editor() -> AuthenticatedUser {
    AuthenticatedUser {
        id: 1,
        email: "editor@clio.test".to_string(),
        role: Some(Role::Editor),
    }
}

fn number_form(number: i32, start: &str, end: &str) -> EditorialNumberForm {
    EditorialNumberForm {
        number,
        title: None,
        start_date: start.to_string(),
        end_date: end.to_string(),
        is_active: true,
    }
}

#[test]
fn test_overlapping_windows_are_rejected() {
    let test_db = common::TestDb::new("test_overlapping_windows_are_rejected.db");
    let repo = DieselRepository::new(test_db.pool());
    let user = editor();

    let first = create_editorial_number(
        &repo,
        &user,
        number_form(1, "01-01-2024", "30-06-2024"),
    )
    .unwrap();

    let err = create_editorial_number(&repo, &user, number_form(2, "15-06-2024", "31-12-2024"))
        .expect_err("windows share two weeks");
    match err {
        ServiceError::OverlapConflict { id, number, .. } => {
            assert_eq!(id, first.id);
            assert_eq!(number, 1);
        }
        other => panic!("unexpected error {other:?}"),
    }

    // Inactive numbers are not checked.
    let mut inactive = number_form(2, "15-06-2024", "31-12-2024");
    inactive.is_active = false;
    let second = create_editorial_number(&repo, &user, inactive).unwrap();

    // Reactivating it runs the check again.
    let err = update_editorial_number(
        &repo,
        &user,
        second.id,
        number_form(2, "15-06-2024", "31-12-2024"),
    )
    .expect_err("reactivation overlaps");
    assert!(matches!(err, ServiceError::OverlapConflict { .. }));

    let moved = update_editorial_number(
        &repo,
        &user,
        second.id,
        number_form(2, "01-07-2024", "31-12-2024"),
    )
    .unwrap();
    assert!(moved.is_active);

    // A number never conflicts with its own stored window.
    update_editorial_number(
        &repo,
        &user,
        first.id,
        number_form(1, "02-01-2024", "30-06-2024"),
    )
    .unwrap();
}

#[test]
fn test_overlap_report_and_current_number() {
    let test_db = common::TestDb::new("test_overlap_report_and_current_number.db");
    let repo = DieselRepository::new(test_db.pool());
    let user = editor();

    let first = create_editorial_number(
        &repo,
        &user,
        number_form(7, "01-03-2024", "31-05-2024"),
    )
    .unwrap();

    let report = check_date_overlap(
        &repo,
        &user,
        OverlapQuery {
            start: "31-05-2024".to_string(),
            end: "30-06-2024".to_string(),
            exclude_id: None,
        },
    )
    .unwrap();
    assert!(report.overlaps, "shared end day counts as overlap");
    assert_eq!(report.conflict.map(|n| n.id), Some(first.id));

    let report = check_date_overlap(
        &repo,
        &user,
        OverlapQuery {
            start: "01-04-2024".to_string(),
            end: "15-04-2024".to_string(),
            exclude_id: Some(first.id),
        },
    )
    .unwrap();
    assert!(!report.overlaps);

    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());
    let current = current_editorial_number(&repo, &user, &clock).unwrap();
    assert_eq!(current.map(|n| n.number), Some(7));

    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
    let current = current_editorial_number(&repo, &user, &clock).unwrap();
    assert_eq!(current.map(|n| n.number), Some(7), "end day is still current");

    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
    assert!(current_editorial_number(&repo, &user, &clock).unwrap().is_none());
}

#[test]
fn test_article_requires_reviewer_flag() {
    let test_db = common::TestDb::new("test_article_requires_reviewer_flag.db");
    let repo = DieselRepository::new(test_db.pool());
    let user = AuthenticatedUser {
        id: 2,
        email: "asistente@clio.test".to_string(),
        role: Some(Role::Asistente),
    };
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());

    let author = repo
        .create_researcher(&NewResearcher::new("Inés", "Vidal", "ines@clio.test"))
        .unwrap();
    let plain = repo
        .create_researcher(&NewResearcher::new("Raúl", "Soto", "raul@clio.test"))
        .unwrap();
    let reviewer = repo
        .create_researcher(&NewResearcher::new("Elena", "Mora", "elena@clio.test").reviewer())
        .unwrap();

    let form = |reviewer_id: i32| ArticleForm {
        title: "Archivos coloniales".to_string(),
        summary: None,
        author_id: author.id,
        reviewer_id: Some(reviewer_id),
        thematic_line_id: None,
        language_id: None,
        editorial_number_id: None,
        status: ArticleStatus::Received,
        submitted_on: None,
    };

    let err = create_article(&repo, &user, &clock, form(plain.id))
        .expect_err("researcher is not a reviewer");
    assert!(matches!(err, ServiceError::Form(_)));

    let article = create_article(&repo, &user, &clock, form(reviewer.id)).unwrap();
    assert_eq!(article.submitted_on, clock.0);
    assert_eq!(article.reviewer_id, Some(reviewer.id));
}
