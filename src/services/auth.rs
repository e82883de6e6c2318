use serde::Serialize;
use validator::{Validate, ValidateEmail};

use crate::auth::{AuthenticatedUser, TokenIssuer, hash_password, verify_password};
use crate::domain::user::{NewUser, User};
use crate::forms::auth::LoginForm;
use crate::repository::{UserReader, UserWriter};
use crate::roles::Role;
use crate::services::{ServiceError, ServiceResult};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
    pub user: User,
}

/// Exchange credentials for a bearer token. Unknown emails, wrong passwords
/// and inactive accounts get the same answer.
pub fn login<R>(repo: &R, issuer: &TokenIssuer, form: LoginForm) -> ServiceResult<LoginResponse>
where
    R: UserReader + ?Sized,
{
    form.validate().map_err(|_| ServiceError::Unauthenticated)?;

    let user = repo
        .get_user_by_email(&form.normalized_email())?
        .filter(|user| user.is_active)
        .ok_or(ServiceError::Unauthenticated)?;

    if !verify_password(&form.password, &user.password_hash)? {
        return Err(ServiceError::Unauthenticated);
    }

    let token = issuer.issue(user.id, &user.email, user.role)?;

    Ok(LoginResponse {
        token,
        expires_in: issuer.ttl_secs(),
        user,
    })
}

/// Stored account of the token holder.
pub fn current_user<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(user.id)?
        .filter(|stored| stored.is_active)
        .ok_or(ServiceError::Unauthenticated)
}

/// Create the first administrator when there are no accounts yet.
pub fn seed_admin<R>(repo: &R, name: &str, email: &str, password: &str) -> ServiceResult<Option<User>>
where
    R: UserReader + UserWriter + ?Sized,
{
    if repo.count_users()? > 0 {
        return Ok(None);
    }

    let email = email.trim();
    if !email.validate_email() {
        return Err(ServiceError::Form(format!(
            "El correo del administrador inicial no es válido: {email}"
        )));
    }

    let password_hash = hash_password(password)?;
    let new_user = NewUser::new(
        name.trim().to_string(),
        email.to_string(),
        password_hash,
        Role::Administrador,
    );

    let created = repo.create_user(&new_user)?;
    log::info!("Created initial administrator {}", created.email);

    Ok(Some(created))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::repository::mock::MockUserRepository;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

    fn stored_user(password: &str, is_active: bool) -> User {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("timestamp");

        User {
            id: 7,
            name: "Editora".into(),
            email: "editora@clio.test".into(),
            role: Role::Editor,
            is_active,
            password_hash: hash_password(password).expect("hash"),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    fn login_form(password: &str) -> LoginForm {
        LoginForm {
            email: " Editora@Clio.test ".into(),
            password: password.into(),
        }
    }

    #[test]
    fn login_issues_verifiable_token() {
        let mut repo = MockUserRepository::new();
        let user = stored_user("clave-segura", true);
        repo.expect_get_user_by_email()
            .withf(|email: &str| email == "editora@clio.test")
            .returning(move |_| Ok(Some(user.clone())));

        let issuer = TokenIssuer::new(SECRET, 60).expect("issuer");
        let response = login(&repo, &issuer, login_form("clave-segura")).expect("login");

        let claims = issuer.verify(&response.token).expect("claims");
        assert_eq!(claims.id, 7);
        assert_eq!(claims.role, "EDITOR");
        assert_eq!(response.expires_in, 60);
        assert_eq!(response.user.email, "editora@clio.test");
    }

    #[test]
    fn wrong_password_is_unauthenticated() {
        let mut repo = MockUserRepository::new();
        let user = stored_user("clave-segura", true);
        repo.expect_get_user_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let issuer = TokenIssuer::new(SECRET, 60).expect("issuer");
        let result = login(&repo, &issuer, login_form("otra-clave"));
        assert!(matches!(result, Err(ServiceError::Unauthenticated)));
    }

    #[test]
    fn inactive_user_cannot_log_in() {
        let mut repo = MockUserRepository::new();
        let user = stored_user("clave-segura", false);
        repo.expect_get_user_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let issuer = TokenIssuer::new(SECRET, 60).expect("issuer");
        let result = login(&repo, &issuer, login_form("clave-segura"));
        assert!(matches!(result, Err(ServiceError::Unauthenticated)));
    }

    #[test]
    fn seed_admin_skips_populated_database() {
        let mut repo = MockUserRepository::new();
        repo.expect_count_users().returning(|| Ok(3));
        repo.expect_create_user().never();

        let seeded = seed_admin(&repo, "Admin", "admin@clio.test", "clave-segura").expect("seed");
        assert!(seeded.is_none());
    }

    #[test]
    fn seed_admin_creates_administrator() {
        let mut repo = MockUserRepository::new();
        repo.expect_count_users().returning(|| Ok(0));
        repo.expect_create_user()
            .times(1)
            .withf(|new: &NewUser| new.role == Role::Administrador && new.email == "admin@clio.test")
            .returning(|new| {
                let mut user = stored_user("ignored", true);
                user.email = new.email.clone();
                user.role = new.role;
                Ok(user)
            });

        let seeded = seed_admin(&repo, "Admin", "Admin@Clio.test", "clave-segura").expect("seed");
        assert_eq!(seeded.map(|user| user.role), Some(Role::Administrador));
    }

    #[test]
    fn seed_admin_rejects_invalid_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_count_users().returning(|| Ok(0));
        repo.expect_create_user().never();

        let result = seed_admin(&repo, "Admin", "admin-sin-dominio", "clave-segura");
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
