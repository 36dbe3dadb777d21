use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AdminUser;
use crate::db::{destinations as destination_db, hotels as hotel_db};
use crate::error::ApiError;
use crate::handlers::{duplicate_or_internal, not_found_or_internal};
use crate::models::destinations::{self, CreateDestination, UpdateDestination};
use crate::models::hotels::HotelResponse;
use crate::query::{ListEnvelope, ListQuery};

/// Reject `name` when another destination already carries it.
async fn ensure_name_free(
    db: &DatabaseConnection,
    name: &str,
    except: Option<Uuid>,
) -> Result<(), ApiError> {
    let existing = destination_db::get_destination_by_name(db, name)
        .await
        .map_err(|e| ApiError::internal("Error checking destination", e))?;

    match existing {
        Some(found) if Some(found.id) != except => Err(ApiError::BadRequest(
            "Destination already exists".to_string(),
        )),
        _ => Ok(()),
    }
}

/// GET /api/destinations
pub async fn get_destinations(
    db: web::Data<DatabaseConnection>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let list = ListQuery::parse(&query, &destination_db::LIST_SPEC)?;
    let page = list
        .fetch(db.get_ref(), destinations::Entity::find())
        .await
        .map_err(|e| ApiError::internal("Error fetching destinations", e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope::from(page)))
}

/// GET /api/destinations/{id}
pub async fn get_destination(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let destination = destination_db::get_destination_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching destination", e))?
        .ok_or_else(|| ApiError::NotFound("Destination not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": destination })))
}

/// GET /api/destinations/{id}/hotels
pub async fn get_destination_hotels(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    destination_db::get_destination_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching hotels", e))?
        .ok_or_else(|| ApiError::NotFound("Destination not found".to_string()))?;

    let hotels: Vec<HotelResponse> = hotel_db::get_hotels_by_location(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching hotels", e))?
        .into_iter()
        .map(HotelResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": hotels.len(),
        "data": hotels,
    })))
}

/// POST /api/destinations: Admin only.
pub async fn create_destination(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateDestination>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate()?;
    ensure_name_free(db.get_ref(), &input.name, None).await?;

    let destination = destination_db::insert_destination(db.get_ref(), input)
        .await
        .map_err(duplicate_or_internal(
            "Destination already exists",
            "Error creating destination",
        ))?;

    Ok(HttpResponse::Created().json(json!({ "success": true, "data": destination })))
}

/// PUT /api/destinations/{id}: Admin only.
pub async fn update_destination(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateDestination>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    input.validate()?;
    if let Some(name) = &input.name {
        ensure_name_free(db.get_ref(), name, Some(id)).await?;
    }

    let destination = destination_db::update_destination(db.get_ref(), id, input)
        .await
        .map_err(not_found_or_internal("Error updating destination"))?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": destination })))
}

/// DELETE /api/destinations/{id}: Admin only. Its hotels go with it.
pub async fn delete_destination(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = destination_db::delete_destination(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error deleting destination", e))?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("Destination not found".to_string()));
    }
    tracing::info!(destination_id = %id, "Destination deleted");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Destination removed",
    })))
}
