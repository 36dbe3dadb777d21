use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt;
use crate::db::users::get_user_by_id;
use crate::error::ApiError;
use crate::models::users;

/// Signing settings stored in Actix app data.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_secs: u64,
}

/// Any signed-in user. Rejects with 401 when the token is missing, invalid,
/// or names a user that no longer exists.
pub struct AuthenticatedUser(pub users::Model);

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let bearer = BearerAuth::extract(&req).await.map_err(|_| {
                ApiError::Unauthorized("Not authorized, no token".to_string())
            })?;

            // 2. Validate it against the configured secret.
            let jwt_config = req.app_data::<web::Data<JwtConfig>>().ok_or_else(|| {
                ApiError::internal("Authentication is not configured", "JWT secret missing")
            })?;

            let claims = jwt::validate_token(bearer.token(), &jwt_config.secret).map_err(|e| {
                tracing::debug!("Rejected token: {e}");
                ApiError::Unauthorized("Not authorized, token failed".to_string())
            })?;

            let user_id = claims.user_id().map_err(ApiError::Unauthorized)?;

            // 3. Load the user so role changes and deletions take effect immediately.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| ApiError::internal("Database not configured", "missing app data"))?;

            let user = get_user_by_id(db.get_ref(), user_id)
                .await
                .map_err(|e| ApiError::internal("Error loading user", e))?
                .ok_or_else(|| ApiError::Unauthorized("User no longer exists".to_string()))?;

            Ok(AuthenticatedUser(user))
        })
    }
}

/// A signed-in user with the `admin` role.
pub struct AdminUser(pub users::Model);

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let AuthenticatedUser(user) = authenticated.await?;
            if !user.is_admin() {
                return Err(ApiError::Unauthorized(
                    "Not authorized as an admin".to_string(),
                ));
            }
            Ok(AdminUser(user))
        })
    }
}
