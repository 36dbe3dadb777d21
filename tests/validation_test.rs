///! Request validation for hotels, packages and reviews, and the error
///! envelope the API answers with.
///!
///! Run with: `cargo test --test validation_test`
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;
use validator::Validate;

use yatra_backend::db::reviews::average_rating;
use yatra_backend::error::{ApiError, FieldError};
use yatra_backend::models::CreateReview;
use yatra_backend::models::hotels::{CreateHotel, UpdateHotel};
use yatra_backend::models::packages::CreatePackage;
use yatra_backend::query::FilterError;

fn hotel_body() -> Value {
    json!({
        "name": "Sea Breeze",
        "location": Uuid::new_v4(),
        "address": "12 Beach Road",
        "rating": 4,
        "category": "deluxe",
        "priceRange": { "min": 3000, "max": 9000 }
    })
}

async fn body_json(err: ApiError) -> (StatusCode, Value) {
    let response = err.error_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_valid_hotel_passes() {
    let hotel: CreateHotel = serde_json::from_value(hotel_body()).unwrap();
    assert!(hotel.validate_all().is_ok());
}

#[test]
fn test_hotel_price_range_and_rating() {
    let mut body = hotel_body();
    body["priceRange"] = json!({ "min": 9000, "max": 3000 });
    body["rating"] = json!(6);
    let hotel: CreateHotel = serde_json::from_value(body).unwrap();

    let fields: Vec<String> = hotel
        .validate_all()
        .unwrap_err()
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert!(fields.contains(&"priceRange.max".to_string()), "{fields:?}");
    assert!(fields.contains(&"rating".to_string()), "{fields:?}");
}

#[test]
fn test_hotel_image_limit() {
    let mut body = hotel_body();
    body["images"] = json!((0..11).map(|i| format!("https://img.example.com/{i}.jpg")).collect::<Vec<_>>());
    let hotel: CreateHotel = serde_json::from_value(body).unwrap();

    let errors = hotel.validate_all().unwrap_err();
    assert_eq!(errors[0].field, "images");
}

#[test]
fn test_partial_hotel_update_checks_only_given_fields() {
    let update: UpdateHotel = serde_json::from_value(json!({ "amenities": ["pool"] })).unwrap();
    assert!(update.validate_all().is_ok());

    let update: UpdateHotel =
        serde_json::from_value(json!({ "priceRange": { "min": -1, "max": 10 } })).unwrap();
    let errors = update.validate_all().unwrap_err();
    assert_eq!(errors[0].field, "priceRange.min");
}

#[test]
fn test_package_rules() {
    let package: CreatePackage = serde_json::from_value(json!({
        "name": "Goa Getaway",
        "type": "domestic",
        "destination": "Goa",
        "duration": { "days": 0, "nights": 3 },
        "price": -5,
        "images": ["1", "2", "3", "4", "5", "6"]
    }))
    .unwrap();

    let errors = ApiError::from(package.validate().unwrap_err());
    let ApiError::Validation(fields) = errors else {
        panic!("expected a validation error");
    };
    let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(names, vec!["duration.days", "images", "price"]);
}

#[test]
fn test_review_rating_bounds() {
    let review = CreateReview {
        rating: 0,
        comment: String::new(),
    };
    assert!(review.validate().is_err());

    let review = CreateReview {
        rating: 5,
        comment: "Lovely stay".to_string(),
    };
    assert!(review.validate().is_ok());
}

#[test]
fn test_average_rating() {
    assert_eq!(average_rating(&[]), 0.0);
    assert_eq!(average_rating(&[5, 4, 3]), 4.0);
    assert_eq!(average_rating(&[5, 4]), 4.5);
}

#[actix_web::test]
async fn test_validation_envelope() {
    let err = ApiError::Validation(vec![FieldError::new("startDate", "Start date must be in the future")]);
    let (status, body) = body_json(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"][0]["field"], "startDate");
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn test_internal_envelope_carries_raw_error() {
    let err = ApiError::internal("Error fetching packages", "connection refused");
    let (status, body) = body_json(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error fetching packages");
    assert_eq!(body["error"], "connection refused");
}

#[actix_web::test]
async fn test_filter_error_is_a_bad_request() {
    let err = ApiError::from(FilterError::InvalidValue {
        param: "minPrice",
        value: "cheap".to_string(),
    });
    let (status, body) = body_json(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid value 'cheap' for query parameter 'minPrice'");
}

#[actix_web::test]
async fn test_unauthorized_and_not_found_envelopes() {
    let (status, body) = body_json(ApiError::Unauthorized("Not authorized, no token".into())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized, no token");

    let (status, _) = body_json(ApiError::NotFound("Package not found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
