use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Identity claims carried by a bearer token.
///
/// Tokens are stateless: nothing is stored server-side and verification
/// never touches the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            email: email.into(),
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT secret is not configured")]
    MissingSecret,

    #[error("token generation failed: {0}")]
    TokenGeneration(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),
}

/// Issue a signed bearer token for the given email, valid for the
/// configured expiry window (24 hours by default).
pub fn issue_token(email: &str) -> Result<String, AuthError> {
    sign(&Claims::new(email), &config::config().security.jwt_secret)
}

/// Verify a bearer token and return its claims. Pure and stateless.
pub fn verify_token(token: &str) -> Result<Claims, AuthError> {
    decode_claims(token, &config::config().security.jwt_secret)
}

fn sign(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

fn decode_claims(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    // No expiry leeway: a token one minute past exp must fail
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn claims_with_offsets(issued_secs_ago: i64, expires_in_secs: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            email: "alice@example.com".to_string(),
            iat: now - issued_secs_ago,
            exp: now + expires_in_secs,
        }
    }

    #[test]
    fn round_trip_preserves_claims() {
        let claims = claims_with_offsets(0, 24 * 3600);
        let token = sign(&claims, SECRET).unwrap();
        let decoded = decode_claims(&token, SECRET).unwrap();
        assert_eq!(decoded.email, "alice@example.com");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn token_valid_just_before_expiry() {
        // Issued 23h59m ago with a 24h lifetime: one minute left
        let claims = claims_with_offsets(24 * 3600 - 60, 60);
        let token = sign(&claims, SECRET).unwrap();
        assert!(decode_claims(&token, SECRET).is_ok());
    }

    #[test]
    fn token_rejected_just_after_expiry() {
        // One minute past exp; default 60s leeway would accept this
        let claims = claims_with_offsets(24 * 3600 + 60, -60);
        let token = sign(&claims, SECRET).unwrap();
        assert!(matches!(
            decode_claims(&token, SECRET),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn wrong_secret_rejected() {
        let claims = claims_with_offsets(0, 3600);
        let token = sign(&claims, SECRET).unwrap();
        assert!(matches!(
            decode_claims(&token, "other-secret"),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn malformed_token_rejected() {
        assert!(matches!(
            decode_claims("not-a-jwt", SECRET),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn empty_secret_is_an_error() {
        let claims = claims_with_offsets(0, 3600);
        assert!(matches!(sign(&claims, ""), Err(AuthError::MissingSecret)));
    }
}
