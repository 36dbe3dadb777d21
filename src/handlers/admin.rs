use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::cache::StatsData;
use crate::db::{
    bookings as booking_db, custom_packages as custom_db, dashboard as dashboard_db,
    packages as package_db, users as user_db,
};
use crate::error::ApiError;
use crate::handlers::not_found_or_internal;
use crate::models::bookings::{self, UpdateBookingStatus};
use crate::models::custom_packages::{self, UpdateCustomPackage};
use crate::models::packages::{self, PackageResponse};
use crate::models::users::{self, UserResponse};
use crate::query::{ListEnvelope, ListQuery};

/// GET /api/admin/dashboard: Served from the in-process cache when fresh.
pub async fn dashboard(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    stats: web::Data<StatsData>,
) -> Result<HttpResponse, ApiError> {
    if let Some(cached) = stats.dashboard().await {
        return Ok(HttpResponse::Ok().json(json!({ "success": true, "data": cached })));
    }

    let fresh = dashboard_db::load_dashboard(db.get_ref())
        .await
        .map_err(|e| ApiError::internal("Error fetching dashboard stats", e))?;
    stats.store_dashboard(fresh.clone()).await;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": fresh })))
}

/// GET /api/admin/packages
pub async fn get_packages(
    _admin: AdminUser,
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

/// GET /api/admin/bookings: With user and package populated.
pub async fn get_bookings(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let list = ListQuery::parse(&query, &booking_db::LIST_SPEC)?;
    let mut page = list
        .fetch(db.get_ref(), bookings::Entity::find())
        .await
        .map_err(|e| ApiError::internal("Error fetching bookings", e))?;

    let views = booking_db::populate(db.get_ref(), std::mem::take(&mut page.items))
        .await
        .map_err(|e| ApiError::internal("Error fetching bookings", e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope::from(page.with_items(views))))
}

/// PUT /api/admin/bookings/{id}: Any status change is accepted.
pub async fn update_booking(
    admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    stats: web::Data<StatsData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBookingStatus>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    if input.is_empty() {
        return Err(ApiError::BadRequest(
            "Provide bookingStatus or paymentStatus".to_string(),
        ));
    }

    let booking = booking_db::update_booking_status(db.get_ref(), id, input)
        .await
        .map_err(not_found_or_internal("Error updating booking"))?;
    stats.clear().await;

    tracing::info!(
        booking_id = %id,
        admin_id = %admin.0.id,
        booking_status = ?booking.booking_status,
        payment_status = ?booking.payment_status,
        "Booking status updated"
    );

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": booking })))
}

/// GET /api/admin/users
pub async fn get_users(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let list = ListQuery::parse(&query, &user_db::LIST_SPEC)?;
    let page = list
        .fetch(db.get_ref(), users::Entity::find())
        .await
        .map_err(|e| ApiError::internal("Error fetching users", e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope::from(page.map(UserResponse::from))))
}

/// DELETE /api/admin/users/{id}: Removes the user's bookings first.
pub async fn delete_user(
    admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    stats: web::Data<StatsData>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if id == admin.0.id {
        return Err(ApiError::BadRequest(
            "You cannot delete your own account".to_string(),
        ));
    }

    let removed = user_db::delete_user_cascade(db.get_ref(), id)
        .await
        .map_err(|e| ApiError::internal("Error deleting user", e))?;
    if removed == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }
    stats.clear().await;

    tracing::info!(user_id = %id, admin_id = %admin.0.id, "User deleted");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "User removed",
    })))
}

/// GET /api/admin/custom-packages: With the requesting user populated.
pub async fn get_custom_packages(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let list = ListQuery::parse(&query, &custom_db::LIST_SPEC)?;
    let mut page = list
        .fetch(db.get_ref(), custom_packages::Entity::find())
        .await
        .map_err(|e| ApiError::internal("Error fetching custom packages", e))?;

    let views = custom_db::populate(db.get_ref(), std::mem::take(&mut page.items))
        .await
        .map_err(|e| ApiError::internal("Error fetching custom packages", e))?;

    Ok(HttpResponse::Ok().json(ListEnvelope::from(page.with_items(views))))
}

/// PUT /api/admin/custom-packages/{id}: Set status and/or attach a quote.
pub async fn update_custom_package(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    stats: web::Data<StatsData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCustomPackage>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let input = body.into_inner();
    if input.is_empty() {
        return Err(ApiError::BadRequest("Provide status or quote".to_string()));
    }

    let request = custom_db::update_custom_package(db.get_ref(), id, input)
        .await
        .map_err(not_found_or_internal("Error updating custom package"))?;
    stats.clear().await;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": request })))
}
