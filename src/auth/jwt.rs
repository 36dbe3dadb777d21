use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::users::Roles;

/// Claims carried by the tokens this service issues.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user's UUID.
    pub sub: String,
    /// Role at the time of issue; the extractor re-reads it from the database.
    pub role: Roles,
    /// Token issued-at (Unix timestamp).
    pub iat: usize,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
}

impl Claims {
    pub fn new(user_id: Uuid, role: Roles, ttl_secs: u64) -> Self {
        let now = chrono::Utc::now().timestamp().max(0) as usize;
        Self {
            sub: user_id.to_string(),
            role,
            iat: now,
            exp: now + ttl_secs as usize,
        }
    }

    /// Extract the user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }
}

/// Sign `claims` with HS256.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to sign token: {e}"))
}

/// Validate an HS256 token and return the decoded claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|e| format!("Token validation failed: {e}"))
}
