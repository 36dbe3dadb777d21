use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde_json::json;
use validator::Validate;

use crate::auth::jwt::{Claims, issue_token};
use crate::auth::middleware::{AuthenticatedUser, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::handlers::duplicate_or_internal;
use crate::models::users::{self, LoginRequest, NewUser, RegisterUser, Roles, UserResponse};

fn token_for(user: &users::Model, jwt: &JwtConfig) -> Result<String, ApiError> {
    let claims = Claims::new(user.id, user.role.clone(), jwt.ttl_secs);
    issue_token(&claims, &jwt.secret).map_err(|e| ApiError::internal("Error issuing token", e))
}

/// POST /api/auth/register: Create a `user` account and sign it in.
pub async fn register(
    db: web::Data<DatabaseConnection>,
    jwt: web::Data<JwtConfig>,
    body: web::Json<RegisterUser>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate()?;

    let email = input.email.trim().to_lowercase();
    let existing = user_db::get_user_by_email(db.get_ref(), &email)
        .await
        .map_err(|e| ApiError::internal("Error registering user", e))?;
    if existing.is_some() {
        return Err(ApiError::BadRequest("User already exists".to_string()));
    }

    let password_hash =
        hash_password(&input.password).map_err(|e| ApiError::internal("Error registering user", e))?;

    let user = user_db::insert_user(
        db.get_ref(),
        NewUser {
            name: input.name.trim().to_string(),
            email,
            password_hash,
            phone: input.phone,
            role: Roles::User,
        },
    )
    .await
    .map_err(duplicate_or_internal("User already exists", "Error registering user"))?;

    tracing::info!(user_id = %user.id, "New user registered");
    let token = token_for(&user, &jwt)?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "token": token,
        "user": UserResponse::from(user),
    })))
}

/// POST /api/auth/login
pub async fn login(
    db: web::Data<DatabaseConnection>,
    jwt: web::Data<JwtConfig>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    let invalid = || ApiError::Unauthorized("Invalid credentials".to_string());

    let user = user_db::get_user_by_email(db.get_ref(), &input.email)
        .await
        .map_err(|e| ApiError::internal("Error logging in", e))?
        .ok_or_else(invalid)?;

    let matches = verify_password(&input.password, &user.password_hash)
        .map_err(|e| ApiError::internal("Error logging in", e))?;
    if !matches {
        return Err(invalid());
    }

    let token = token_for(&user, &jwt)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "token": token,
        "user": UserResponse::from(user),
    })))
}

/// GET /api/auth/me: Return the currently authenticated user's profile.
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": UserResponse::from(user.0),
    })))
}
