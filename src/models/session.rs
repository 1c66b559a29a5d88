//! Session claims carried in bearer tokens

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims for an authenticated session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub admin: bool,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

/// Capability of the caller making a request
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub claims: Option<SessionClaims>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { claims: None }
    }

    pub fn is_admin(&self) -> bool {
        self.claims.as_ref().map(|c| c.admin).unwrap_or(false)
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization("Admin session required".to_string()))
        }
    }
}
