///! Integration tests for token issuing/validation and password hashing.
///!
///! Tokens are minted locally with the same HS256 secret the server would
///! use. No running server or database is needed.
///!
///! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use yatra_backend::auth::jwt::{Claims, issue_token, validate_token};
use yatra_backend::auth::password::{hash_password, verify_password};
use yatra_backend::models::users::Roles;

/// A fake secret used only by these tests.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

#[test]
fn test_issued_token_decodes_correctly() {
    let user_id = Uuid::new_v4();
    let token = issue_token(&Claims::new(user_id, Roles::Admin, 3600), TEST_SECRET)
        .expect("Token should be issued");

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, Roles::Admin);
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        role: Roles::User,
        iat: now - 3600,
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = issue_token(&Claims::new(Uuid::new_v4(), Roles::User, 3600), TEST_SECRET).unwrap();

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_non_uuid_subject_is_rejected() {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: "not-a-uuid".to_string(),
        role: Roles::User,
        iat: now,
        exp: now + 3600,
    };

    assert!(claims.user_id().is_err());
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("s3cret-pass").unwrap();

    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("s3cret-pass", &hash).unwrap());
    assert!(!verify_password("wrong-pass", &hash).unwrap());
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("repeatable").unwrap();
    let second = hash_password("repeatable").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_corrupt_hash_is_an_error() {
    assert!(verify_password("anything", "not-a-phc-string").is_err());
}
