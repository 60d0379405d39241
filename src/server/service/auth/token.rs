//! Signed session tokens.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::auth::AuthError,
    model::{
        auth::{claims_role, Claims},
        user::User,
    },
};

/// Issues and verifies HS256 tokens with a shared secret.
///
/// Keys are derived once at startup; clones share nothing mutable.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiration: Duration,
}

impl TokenService {
    pub fn new(secret: &str, expiration: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiration,
        }
    }

    /// Signs a token naming `user`, valid for the configured expiration.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AuthError::TokenSigning)` - Encoding failed
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            id: user.id,
            role: claims_role(user.role),
            email: user.email.clone(),
            iat,
            exp: iat + self.expiration.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenSigning(e.to_string()))
    }

    /// Checks signature and expiry and returns the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;

        Ok(data.claims)
    }
}
