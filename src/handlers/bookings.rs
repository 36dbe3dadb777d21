use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::auth::authorization::ensure_owner_or_admin;
use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheData, keys};
use crate::db::{bookings as booking_db, packages as package_db};
use crate::error::ApiError;
use crate::models::bookings::{self, CreateBooking, total_price};
use crate::query::{ListEnvelope, ListQuery};

/// POST /api/bookings: Price is computed here, never taken from the client.
pub async fn create_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate()?;

    let package = package_db::get_package_by_id(db.get_ref(), input.package_id)
        .await
        .map_err(|e| ApiError::internal("Error creating booking", e))?
        .ok_or_else(|| ApiError::NotFound("Package not found".to_string()))?;

    let price = total_price(package.price, &input.travelers);
    let booking = booking_db::insert_booking(db.get_ref(), input, user.0.id, price)
        .await
        .map_err(|e| ApiError::internal("Error creating booking", e))?;

    package_db::increment_bookings_count(db.get_ref(), package.id)
        .await
        .map_err(|e| ApiError::internal("Error creating booking", e))?;
    cache.invalidate(&keys::package(&package.id.to_string())).await;

    tracing::info!(
        booking_id = %booking.id,
        user_id = %user.0.id,
        package_id = %package.id,
        total_price = price,
        "Booking created"
    );

    Ok(HttpResponse::Created().json(json!({ "success": true, "data": booking })))
}

/// GET /api/bookings: The caller's own bookings.
pub async fn get_my_bookings(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let list = ListQuery::parse(&query, &booking_db::LIST_SPEC)?
        .scoped(bookings::Column::UserId.eq(user.0.id));
    let mut page = list
        .fetch(db.get_ref(), bookings::Entity::find())
        .await
        .map_err(|e| ApiError::internal("Error fetching bookings", e))?;

    let views = booking_db::populate(db.get_ref(), std::mem::take(&mut page.items))
        .await
        .map_err(|e| ApiError::internal("Error fetching bookings", e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope::from(page.with_items(views))))
}

/// GET /api/bookings/{id}: Owner or admin.
pub async fn get_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let booking = booking_db::get_booking_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error fetching booking", e))?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    ensure_owner_or_admin(&user.0, booking.user_id, "booking")?;

    let view = booking_db::populate(db.get_ref(), vec![booking])
        .await
        .map_err(|e| ApiError::internal("Error fetching booking", e))?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": view.into_iter().next() })))
}

/// PUT /api/bookings/{id}/cancel: Owner only, once.
pub async fn cancel_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let booking = booking_db::get_booking_by_id(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error cancelling booking", e))?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    booking.ensure_cancellable_by(user.0.id)?;

    let package_id = booking.package_id;
    let cancelled = booking_db::cancel_booking(db.get_ref(), booking)
        .await
        .map_err(|e| ApiError::internal("Error cancelling booking", e))?;

    package_db::decrement_bookings_count(db.get_ref(), package_id)
        .await
        .map_err(|e| ApiError::internal("Error cancelling booking", e))?;
    cache.invalidate(&keys::package(&package_id.to_string())).await;

    tracing::info!(booking_id = %id, user_id = %user.0.id, "Booking cancelled");

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": cancelled })))
}
