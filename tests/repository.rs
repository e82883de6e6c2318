use chrono::NaiveDate;

use clio::domain::editorial_number::{
    EditorialNumberListQuery, NewEditorialNumber, UpdateEditorialNumber,
};
use clio::domain::language::NewLanguage;
use clio::domain::researcher::{NewResearcher, ResearcherListQuery, UpdateResearcher};
use clio::domain::thematic_line::{NewThematicLine, ThematicLineListQuery};
use clio::domain::user::{NewUser, UpdateUser, UserListQuery};
use clio::repository::errors::RepositoryError;
use clio::repository::{
    DieselRepository, EditorialNumberReader, EditorialNumberWriter, LanguageReader,
    LanguageWriter, ResearcherReader, ResearcherWriter, ThematicLineReader, ThematicLineWriter,
    UserReader, UserWriter,
};
use clio::roles::Role;

mod common;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = repo
        .create_user(&NewUser::new(
            "Ana".to_string(),
            "Ana@Clio.test".to_string(),
            "hash".to_string(),
            Role::Editor,
        ))
        .unwrap();
    assert_eq!(user.email, "ana@clio.test");
    assert_eq!(user.role, Role::Editor);
    assert!(user.is_active);

    let err = repo
        .create_user(&NewUser::new(
            "Otra Ana".to_string(),
            "ana@clio.test".to_string(),
            "hash".to_string(),
            Role::Asistente,
        ))
        .expect_err("duplicate email must fail");
    assert!(matches!(err, RepositoryError::Conflict));

    let found = repo.get_user_by_email("ana@clio.test").unwrap().unwrap();
    assert_eq!(found.id, user.id);

    let updated = repo
        .update_user(
            user.id,
            &UpdateUser {
                role: Some(Role::Administrador),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Ana");
    assert_eq!(updated.role, Role::Administrador);
    assert!(!updated.is_active);

    let admins = repo
        .list_users(UserListQuery::default().role(Role::Administrador))
        .unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(repo.count_users().unwrap(), 1);

    repo.delete_user(user.id).unwrap();
    assert!(repo.get_user_by_id(user.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_user(user.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_editorial_number_repository() {
    let test_db = common::TestDb::new("test_editorial_number_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_editorial_number(&NewEditorialNumber {
            number: 1,
            title: Some("Memoria y archivo".to_string()),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 6, 30),
            is_active: true,
        })
        .unwrap();
    let second = repo
        .create_editorial_number(&NewEditorialNumber {
            number: 2,
            title: None,
            start_date: date(2024, 7, 1),
            end_date: date(2024, 12, 31),
            is_active: false,
        })
        .unwrap();
    assert_eq!(first.start_date, date(2024, 1, 1));

    let all = repo
        .list_editorial_numbers(EditorialNumberListQuery::default())
        .unwrap();
    assert_eq!(
        all.iter().map(|n| n.number).collect::<Vec<_>>(),
        vec![2, 1],
        "newest window first"
    );

    let active = repo
        .list_editorial_numbers(EditorialNumberListQuery::default().active_only())
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, first.id);

    let by_title = repo
        .list_editorial_numbers(EditorialNumberListQuery::default().search("archivo"))
        .unwrap();
    assert_eq!(by_title.len(), 1);

    let updated = repo
        .update_editorial_number(
            second.id,
            &UpdateEditorialNumber::from_new(NewEditorialNumber {
                number: 2,
                title: Some("Fronteras".to_string()),
                start_date: date(2024, 7, 1),
                end_date: date(2025, 1, 15),
                is_active: true,
            }),
        )
        .unwrap();
    assert_eq!(updated.end_date, date(2025, 1, 15));
    assert!(updated.is_active);

    let err = repo
        .create_editorial_number(&NewEditorialNumber {
            number: 1,
            title: None,
            start_date: date(2026, 1, 1),
            end_date: date(2026, 2, 1),
            is_active: false,
        })
        .expect_err("number is unique");
    assert!(matches!(err, RepositoryError::Conflict));
}

#[test]
fn test_catalog_repository() {
    let test_db = common::TestDb::new("test_catalog_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let history = repo
        .create_thematic_line(&NewThematicLine::new("Historia social"))
        .unwrap();
    repo.create_thematic_line(&NewThematicLine::new("Arqueología").with_description("Campo"))
        .unwrap();

    let found = repo
        .list_thematic_lines(ThematicLineListQuery::default().search("social"))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, history.id);

    repo.delete_thematic_line(history.id).unwrap();
    assert!(repo.get_thematic_line_by_id(history.id).unwrap().is_none());

    let spanish = repo
        .create_language(&NewLanguage::new("Español").with_code("es"))
        .unwrap();
    repo.create_language(&NewLanguage::new("Inglés").with_code("en"))
        .unwrap();
    assert!(matches!(
        repo.create_language(&NewLanguage::new("Español")),
        Err(RepositoryError::Conflict)
    ));

    assert_eq!(repo.list_languages().unwrap().len(), 2);
    repo.delete_language(spanish.id).unwrap();
    assert!(matches!(
        repo.delete_language(spanish.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_researcher_repository_filters() {
    let test_db = common::TestDb::new("test_researcher_repository_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let line = repo
        .create_thematic_line(&NewThematicLine::new("Historia"))
        .unwrap();
    let spanish = repo
        .create_language(&NewLanguage::new("Español").with_code("es"))
        .unwrap();

    let created = repo
        .create_researchers(&[
            NewResearcher::new("Lucía", "Pérez", "lucia@uchile.test")
                .with_affiliation("Universidad de Chile")
                .with_country("Chile")
                .with_thematic_line(line.id)
                .with_language(spanish.id)
                .reviewer(),
            NewResearcher::new("Mateo", "Gómez", "mateo@unam.test")
                .with_affiliation("UNAM")
                .with_country("México"),
            NewResearcher::new("Sofía", "Rojas", "sofia@uba.test").with_country("Argentina"),
        ])
        .unwrap();
    assert_eq!(created, 3);

    assert_eq!(
        repo.list_countries().unwrap(),
        vec!["Argentina", "Chile", "México"]
    );

    let chileans = repo
        .list_researchers(ResearcherListQuery::default().countries(vec!["Chile".to_string()]))
        .unwrap();
    assert_eq!(chileans.len(), 1);
    assert_eq!(chileans[0].first_name, "Lucía");

    let by_line_and_language = repo
        .list_researchers(
            ResearcherListQuery::default()
                .thematic_lines(vec![line.id])
                .languages(vec![spanish.id]),
        )
        .unwrap();
    assert_eq!(by_line_and_language.len(), 1);

    let either_country = repo
        .list_researchers(
            ResearcherListQuery::default()
                .countries(vec!["Chile".to_string(), "Argentina".to_string()]),
        )
        .unwrap();
    assert_eq!(either_country.len(), 2);

    let by_term = repo
        .list_researchers(ResearcherListQuery::default().terms(vec!["unam".to_string()]))
        .unwrap();
    assert_eq!(by_term.len(), 1);
    assert_eq!(by_term[0].last_name, "Gómez");

    let reviewers = repo
        .list_researchers(ResearcherListQuery::default().reviewers_only())
        .unwrap();
    assert_eq!(reviewers.len(), 1);

    let sofia = repo
        .list_researchers(ResearcherListQuery::default().search("sofia@"))
        .unwrap()
        .remove(0);
    let updated = repo
        .update_researcher(
            sofia.id,
            &UpdateResearcher::from(
                NewResearcher::new("Sofía", "Rojas", "sofia@uba.test").with_country("Uruguay"),
            ),
        )
        .unwrap();
    assert_eq!(updated.country.as_deref(), Some("Uruguay"));

    repo.delete_researcher(sofia.id).unwrap();
    assert!(repo.get_researcher_by_id(sofia.id).unwrap().is_none());
}

#[test]
fn test_bulk_researcher_insert_is_atomic() {
    let test_db = common::TestDb::new("test_bulk_researcher_insert_is_atomic.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .create_researchers(&[
            NewResearcher::new("Ana", "Uno", "ana@clio.test"),
            NewResearcher::new("Ana", "Dos", "ana@clio.test"),
        ])
        .expect_err("duplicate email inside one upload");
    assert!(matches!(err, RepositoryError::Conflict));

    assert!(
        repo.list_researchers(ResearcherListQuery::default())
            .unwrap()
            .is_empty()
    );
}
