use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::{AdminUser, AuthenticatedUser};
use crate::cache::{CacheConfig, CacheData, keys};
use crate::db::{destinations as destination_db, hotels as hotel_db, reviews as review_db};
use crate::error::ApiError;
use crate::handlers::{duplicate_or_internal, not_found_or_internal};
use crate::models::CreateReview;
use crate::models::hotels::{self, CreateHotel, HotelResponse, UpdateHotel};
use crate::query::{ListEnvelope, ListQuery};

async fn ensure_destination_exists(db: &DatabaseConnection, id: Uuid) -> Result<(), ApiError> {
    destination_db::get_destination_by_id(db, id)
        .await
        .map_err(|e| ApiError::internal("Error checking destination", e))?
        .ok_or_else(|| ApiError::NotFound("Destination not found".to_string()))?;
    Ok(())
}

/// GET /api/hotels
pub async fn get_hotels(
    db: web::Data<DatabaseConnection>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let list = ListQuery::parse(&query, &hotel_db::LIST_SPEC)?;
    let page = list
        .fetch(db.get_ref(), hotels::Entity::find())
        .await
        .map_err(|e| ApiError::internal("Error fetching hotels", e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope::from(page.map(HotelResponse::from))))
}

/// GET /api/hotels/{id}: Cached in Redis.
pub async fn get_hotel(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let cache_key = keys::hotel(&id.to_string());

    match cache.get::<serde_json::Value>(&cache_key).await {
        Ok(Some(cached)) => {
            return Ok(HttpResponse::Ok().json(json!({ "success": true, "data": cached })));
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {}", e),
    }

    let hotel = hotel_db::get_hotel_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching hotel", e))?
        .ok_or_else(|| ApiError::NotFound("Hotel not found".to_string()))?;

    let response = HotelResponse::from(hotel);
    if let Err(e) = cache.set(&cache_key, &response, cache_config.hotel_ttl).await {
        tracing::warn!(key = %cache_key, "Failed to cache hotel: {e}");
    }

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": response })))
}

/// POST /api/hotels: Admin only.
pub async fn create_hotel(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateHotel>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate_all().map_err(ApiError::Validation)?;
    ensure_destination_exists(db.get_ref(), input.location).await?;

    let hotel = hotel_db::insert_hotel(db.get_ref(), input)
        .await
        .map_err(|e| ApiError::internal("Error creating hotel", e))?;
    tracing::info!(hotel_id = %hotel.id, "Hotel created");

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "data": HotelResponse::from(hotel),
    })))
}

/// PUT /api/hotels/{id}: Admin only.
pub async fn update_hotel(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateHotel>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate_all().map_err(ApiError::Validation)?;
    if let Some(location) = input.location {
        ensure_destination_exists(db.get_ref(), location).await?;
    }

    let hotel = hotel_db::update_hotel(db.get_ref(), id, input)
        .await
        .map_err(not_found_or_internal("Error updating hotel"))?;
    cache.invalidate(&keys::hotel(&id.to_string())).await;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": HotelResponse::from(hotel),
    })))
}

/// DELETE /api/hotels/{id}: Admin only.
pub async fn delete_hotel(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = hotel_db::delete_hotel(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error deleting hotel", e))?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Hotel not found".to_string()));
    }
    cache.invalidate(&keys::hotel(&id.to_string())).await;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Hotel removed",
    })))
}

/// GET /api/hotels/{id}/reviews
pub async fn get_reviews(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    hotel_db::get_hotel_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching reviews", e))?
        .ok_or_else(|| ApiError::NotFound("Hotel not found".to_string()))?;

    let reviews = review_db::get_hotel_reviews(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching reviews", e))?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": reviews.len(),
        "data": reviews,
    })))
}

/// POST /api/hotels/{id}/reviews: One review per user per hotel.
pub async fn add_review(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<CreateReview>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate()?;

    hotel_db::get_hotel_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error adding review", e))?
        .ok_or_else(|| ApiError::NotFound("Hotel not found".to_string()))?;

    let already_reviewed = review_db::has_hotel_review(db.get_ref(), id, user.0.id)
        .await
        .map_err(|e| ApiError::internal("Error adding review", e))?;
    if already_reviewed {
        return Err(ApiError::BadRequest(
            "You have already reviewed this hotel".to_string(),
        ));
    }

    let review = review_db::insert_hotel_review(db.get_ref(), id, user.0.id, input)
        .await
        .map_err(duplicate_or_internal(
            "You have already reviewed this hotel",
            "Error adding review",
        ))?;

    Ok(HttpResponse::Created().json(json!({ "success": true, "data": review })))
}
