pub mod admin;
pub mod auth;
pub mod bookings;
pub mod custom_packages;
pub mod destinations;
pub mod hotels;
pub mod packages;

use actix_web::{ResponseError, error, web};
use sea_orm::{DbErr, SqlErr};

use crate::error::ApiError;

/// Malformed bodies, path ids and query strings get the same envelope as
/// handler errors.
pub fn extractor_config(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = ApiError::BadRequest(err.to_string()).error_response();
        error::InternalError::from_response(err, response).into()
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        let response = ApiError::BadRequest("Invalid resource id".to_string()).error_response();
        error::InternalError::from_response(err, response).into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let response = ApiError::BadRequest(err.to_string()).error_response();
        error::InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .app_data(path_config)
        .app_data(query_config);
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes ──
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(auth::register))
            .route("/login", web::post().to(auth::login))
            .route("/me", web::get().to(auth::me)),
    );

    // ── Package routes (reads public, writes admin-only) ──
    cfg.service(
        web::scope("/packages")
            .route("", web::get().to(packages::get_packages))
            .route("", web::post().to(packages::create_package))
            .route("/{id}", web::get().to(packages::get_package))
            .route("/{id}", web::put().to(packages::update_package))
            .route("/{id}", web::delete().to(packages::delete_package))
            .route("/{id}/reviews", web::post().to(packages::add_review)),
    );

    // ── Booking routes (all protected) ──
    cfg.service(
        web::scope("/bookings")
            .route("", web::get().to(bookings::get_my_bookings))
            .route("", web::post().to(bookings::create_booking))
            .route("/{id}", web::get().to(bookings::get_booking))
            .route("/{id}/cancel", web::put().to(bookings::cancel_booking)),
    );

    // ── Custom package routes (all protected) ──
    cfg.service(
        web::scope("/custom-packages")
            .route("", web::get().to(custom_packages::get_my_custom_packages))
            .route("", web::post().to(custom_packages::create_custom_package))
            .route("/{id}", web::get().to(custom_packages::get_custom_package))
            .route("/{id}/cancel", web::put().to(custom_packages::cancel_custom_package)),
    );

    // ── Hotel routes ──
    cfg.service(
        web::scope("/hotels")
            .route("", web::get().to(hotels::get_hotels))
            .route("", web::post().to(hotels::create_hotel))
            .route("/{id}", web::get().to(hotels::get_hotel))
            .route("/{id}", web::put().to(hotels::update_hotel))
            .route("/{id}", web::delete().to(hotels::delete_hotel))
            .route("/{id}/reviews", web::get().to(hotels::get_reviews))
            .route("/{id}/reviews", web::post().to(hotels::add_review)),
    );

    // ── Destination routes ──
    cfg.service(
        web::scope("/destinations")
            .route("", web::get().to(destinations::get_destinations))
            .route("", web::post().to(destinations::create_destination))
            .route("/{id}", web::get().to(destinations::get_destination))
            .route("/{id}", web::put().to(destinations::update_destination))
            .route("/{id}", web::delete().to(destinations::delete_destination))
            .route("/{id}/hotels", web::get().to(destinations::get_destination_hotels)),
    );

    // ── Admin routes (AdminUser extractor on every handler) ──
    cfg.service(
        web::scope("/admin")
            .route("/dashboard", web::get().to(admin::dashboard))
            .route("/packages", web::get().to(admin::get_packages))
            .route("/bookings", web::get().to(admin::get_bookings))
            .route("/bookings/{id}", web::put().to(admin::update_booking))
            .route("/users", web::get().to(admin::get_users))
            .route("/users/{id}", web::delete().to(admin::delete_user))
            .route("/custom-packages", web::get().to(admin::get_custom_packages))
            .route("/custom-packages/{id}", web::put().to(admin::update_custom_package)),
    );
}

/// For updates that look the row up first: `RecordNotFound` is a 404,
/// anything else a 500 with `message`.
pub(crate) fn not_found_or_internal(message: &'static str) -> impl Fn(DbErr) -> ApiError {
    move |e| match e {
        DbErr::RecordNotFound(what) => ApiError::NotFound(what),
        e => ApiError::internal(message, e),
    }
}

/// For inserts guarded by a unique index: a concurrent duplicate that slipped
/// past the existence check is reported as `duplicate`, not as a 500.
pub fn duplicate_or_internal(
    duplicate: &'static str,
    message: &'static str,
) -> impl Fn(DbErr) -> ApiError {
    move |e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::BadRequest(duplicate.to_string()),
        _ => ApiError::internal(message, e),
    }
}
