use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;

use crate::auth::authorization::ensure_owner_or_admin;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::custom_packages as custom_db;
use crate::error::ApiError;
use crate::models::custom_packages::{self, CreateCustomPackage};
use crate::query::{ListEnvelope, ListQuery};

/// POST /api/custom-packages: Every rule is checked and all failures are
/// reported together.
pub async fn create_custom_package(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateCustomPackage>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input
        .validate_submission(Utc::now().date_naive())
        .map_err(ApiError::Validation)?;

    let request = custom_db::insert_custom_package(db.get_ref(), input, user.0.id)
        .await
        .map_err(|e| ApiError::internal("Error creating custom package", e))?;
    tracing::info!(custom_package_id = %request.id, user_id = %user.0.id, "Custom package requested");

    Ok(HttpResponse::Created().json(json!({ "success": true, "data": request })))
}

/// GET /api/custom-packages: The caller's own requests.
pub async fn get_my_custom_packages(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let list = ListQuery::parse(&query, &custom_db::LIST_SPEC)?
        .scoped(custom_packages::Column::UserId.eq(user.0.id));
    let page = list
        .fetch(db.get_ref(), custom_packages::Entity::find())
        .await
        .map_err(|e| ApiError::internal("Error fetching custom packages", e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope::from(page)))
}

/// GET /api/custom-packages/{id}: Owner or admin.
pub async fn get_custom_package(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let request = custom_db::get_custom_package_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching custom package", e))?
        .ok_or_else(|| ApiError::NotFound("Custom package not found".to_string()))?;

    ensure_owner_or_admin(&user.0, request.user_id, "custom package")?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": request })))
}

/// PUT /api/custom-packages/{id}/cancel: Owner only, once.
pub async fn cancel_custom_package(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let request = custom_db::get_custom_package_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error cancelling custom package", e))?
        .ok_or_else(|| ApiError::NotFound("Custom package not found".to_string()))?;

    request.ensure_cancellable_by(user.0.id)?;

    let cancelled = custom_db::cancel_custom_package(db.get_ref(), request)
        .await
        .map_err(|e| ApiError::internal("Error cancelling custom package", e))?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": cancelled })))
}
