//! Admin session service

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{Session, SessionClaims},
};

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Check the admin credential and return a session token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let Some(hash) = self.config.admin_password_hash.as_deref() else {
            tracing::debug!("Admin login attempted but no admin password is configured");
            return Err(AppError::Authentication("Invalid username or password".to_string()));
        };

        if username != self.config.admin_username || !verify_password(hash, password)? {
            return Err(AppError::Authentication("Invalid username or password".to_string()));
        }

        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: username.to_string(),
            admin: true,
            iat: now,
            exp: now + (self.config.jwt_expiration_hours as i64 * 3600),
        };

        tracing::info!(user = username, "Admin logged in");
        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Resolve the session for an optional bearer token
    pub fn session(&self, token: Option<&str>) -> AppResult<Session> {
        let Some(token) = token else {
            return Ok(Session::anonymous());
        };

        let claims = SessionClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;
        Ok(Session {
            claims: Some(claims),
        })
    }

    pub fn expiration_seconds(&self) -> u64 {
        self.config.jwt_expiration_hours * 3600
    }
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid admin password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    use super::*;

    fn service_with_password(password: Option<&str>) -> AuthService {
        let admin_password_hash = password.map(|p| {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(p.as_bytes(), &salt)
                .unwrap()
                .to_string()
        });
        AuthService::new(AuthConfig {
            admin_password_hash,
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        })
    }

    #[tokio::test]
    async fn test_login_issues_admin_session() {
        let auth = service_with_password(Some("hunter2"));

        let token = auth.login("admin", "hunter2").await.unwrap();
        let session = auth.session(Some(&token)).unwrap();

        assert!(session.is_admin());
        assert!(session.require_admin().is_ok());
    }

    #[tokio::test]
    async fn test_wrong_credentials_are_rejected() {
        let auth = service_with_password(Some("hunter2"));

        assert!(matches!(
            auth.login("admin", "wrong").await,
            Err(AppError::Authentication(_))
        ));
        assert!(matches!(
            auth.login("someone", "hunter2").await,
            Err(AppError::Authentication(_))
        ));
    }

    #[tokio::test]
    async fn test_login_disabled_without_configured_password() {
        let auth = service_with_password(None);
        assert!(auth.login("admin", "").await.is_err());
    }

    #[test]
    fn test_anonymous_and_forged_sessions() {
        let auth = service_with_password(None);

        let anonymous = auth.session(None).unwrap();
        assert!(!anonymous.is_admin());
        assert!(matches!(anonymous.require_admin(), Err(AppError::Authorization(_))));

        let forged = SessionClaims {
            sub: "admin".to_string(),
            admin: true,
            iat: 0,
            exp: Utc::now().timestamp() + 60,
        }
        .create_token("another-secret")
        .unwrap();
        assert!(matches!(
            auth.session(Some(&forged)),
            Err(AppError::Authentication(_))
        ));
    }
}
