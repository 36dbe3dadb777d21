use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::{AdminUser, AuthenticatedUser};
use crate::cache::{CacheConfig, CacheData, keys};
use crate::db::{packages as package_db, reviews as review_db};
use crate::error::ApiError;
use crate::handlers::not_found_or_internal;
use crate::models::CreateReview;
use crate::models::packages::{self, CreatePackage, PackageResponse, UpdatePackage};
use crate::query::{ListEnvelope, ListQuery};

/// GET /api/packages: Public, filtered, sorted and paginated.
pub async fn get_packages(
    db: web::Data<DatabaseConnection>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let list = ListQuery::parse(&query, &package_db::LIST_SPEC)?;
    let page = list
        .fetch(db.get_ref(), packages::Entity::find())
        .await
        .map_err(|e| ApiError::internal("Error fetching packages", e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope::from(page.map(PackageResponse::from))))
}

/// GET /api/packages/{id}: Package with its reviews, cached in Redis.
pub async fn get_package(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let cache_key = keys::package(&id.to_string());

    match cache.get::<serde_json::Value>(&cache_key).await {
        Ok(Some(cached)) => {
            return Ok(HttpResponse::Ok().json(json!({ "success": true, "data": cached })));
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {}", e),
    }

    let package = package_db::get_package_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching package", e))?
        .ok_or_else(|| ApiError::NotFound("Package not found".to_string()))?;
    let reviews = review_db::get_package_reviews(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching package", e))?;

    let response = PackageResponse::from(package).with_reviews(reviews);
    if let Err(e) = cache.set(&cache_key, &response, cache_config.package_ttl).await {
        tracing::warn!(key = %cache_key, "Failed to cache package: {e}");
    }

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": response })))
}

/// POST /api/packages: Admin only.
pub async fn create_package(
    admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePackage>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate()?;

    let package = package_db::insert_package(db.get_ref(), input)
        .await
        .map_err(|e| ApiError::internal("Error creating package", e))?;
    tracing::info!(package_id = %package.id, admin_id = %admin.0.id, "Package created");

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": PackageResponse::from(package),
    })))
}

/// PUT /api/packages/{id}: Admin only.
pub async fn update_package(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePackage>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate()?;

    let package = package_db::update_package(db.get_ref(), id, input)
        .await
        .map_err(not_found_or_internal("Error updating package"))?;
    cache.invalidate(&keys::package(&id.to_string())).await;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": PackageResponse::from(package),
    })))
}

/// DELETE /api/packages/{id}: Admin only. Bookings and reviews cascade.
pub async fn delete_package(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = package_db::delete_package(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error deleting package", e))?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Package not found".to_string()));
    }
    cache.invalidate(&keys::package(&id.to_string())).await;
    tracing::info!(package_id = %id, "Package deleted");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Package removed",
    })))
}

/// POST /api/packages/{id}/reviews: Any signed-in user.
pub async fn add_review(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<CreateReview>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate()?;

    package_db::get_package_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error adding review", e))?
        .ok_or_else(|| ApiError::NotFound("Package not found".to_string()))?;

    let review = review_db::add_package_review(db.get_ref(), id, user.0.id, input)
        .await
        .map_err(|e| ApiError::internal("Error adding review", e))?;
    cache.invalidate(&keys::package(&id.to_string())).await;

    Ok(HttpResponse::Created().json(json!({ "success": true, "data": review })))
}
