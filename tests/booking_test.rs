///! Booking pricing and the cancellation guard.
///!
///! Run with: `cargo test --test booking_test`
use actix_web::ResponseError;
use actix_web::http::StatusCode;
use chrono::{NaiveDate, Utc};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use yatra_backend::error::{ApiError, field_errors};
use yatra_backend::models::bookings::{
    BookingStatus, ContactDetails, CreateBooking, Model, PaymentStatus, TravelerDetails,
    Travelers, UpdateBookingStatus, total_price,
};

fn travelers(adults: i32, children: i32, infants: i32) -> Travelers {
    Travelers {
        adults,
        children,
        infants,
    }
}

fn booking(owner: Uuid, status: BookingStatus) -> Model {
    Model {
        id: Uuid::new_v4(),
        user_id: owner,
        package_id: Uuid::new_v4(),
        travel_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        travelers: travelers(2, 0, 0),
        traveler_details: TravelerDetails::default(),
        contact_details: ContactDetails {
            email: "owner@example.com".to_string(),
            phone: "9876543210".to_string(),
        },
        total_price: 2000.0,
        special_requests: None,
        booking_status: status,
        payment_status: PaymentStatus::Pending,
        created_at: Utc::now(),
        updated_at: None,
    }
}

#[test]
fn test_children_pay_seventy_percent_and_infants_are_free() {
    assert_eq!(total_price(1000.0, &travelers(2, 1, 0)), 2700.0);
    assert_eq!(total_price(1000.0, &travelers(2, 1, 3)), 2700.0);
}

#[test]
fn test_adults_only_price() {
    assert_eq!(total_price(1500.0, &travelers(1, 0, 0)), 1500.0);
    assert_eq!(total_price(1500.0, &travelers(4, 0, 0)), 6000.0);
}

#[test]
fn test_owner_can_cancel_pending_or_confirmed() {
    let owner = Uuid::new_v4();
    assert!(booking(owner, BookingStatus::Pending).ensure_cancellable_by(owner).is_ok());
    assert!(booking(owner, BookingStatus::Confirmed).ensure_cancellable_by(owner).is_ok());
}

#[test]
fn test_someone_else_cannot_cancel() {
    let err = booking(Uuid::new_v4(), BookingStatus::Pending)
        .ensure_cancellable_by(Uuid::new_v4())
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_cancelling_twice_is_a_bad_request() {
    let owner = Uuid::new_v4();
    let err = booking(owner, BookingStatus::Cancelled)
        .ensure_cancellable_by(owner)
        .unwrap_err();

    assert_eq!(err.to_string(), "Booking is already cancelled");
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_booking_body_validation_reports_nested_fields() {
    let body: CreateBooking = serde_json::from_value(json!({
        "packageId": Uuid::new_v4(),
        "travelDate": "2030-06-01",
        "travelers": { "adults": 0, "children": -1 },
        "contactDetails": { "email": "not-an-email", "phone": "98765" }
    }))
    .unwrap();

    let errors = field_errors(&body.validate().unwrap_err());
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

    assert_eq!(
        fields,
        vec![
            "contactDetails.email",
            "contactDetails.phone",
            "travelers.adults",
            "travelers.children",
        ]
    );
}

#[test]
fn test_unknown_status_is_rejected_by_deserialization() {
    let parsed = serde_json::from_value::<UpdateBookingStatus>(json!({
        "bookingStatus": "shipped"
    }));
    assert!(parsed.is_err());
}

#[test]
fn test_empty_status_update_is_detected() {
    let update: UpdateBookingStatus = serde_json::from_value(json!({})).unwrap();
    assert!(update.is_empty());

    let update: UpdateBookingStatus =
        serde_json::from_value(json!({ "paymentStatus": "completed" })).unwrap();
    assert!(!update.is_empty());
    assert_eq!(update.payment_status, Some(PaymentStatus::Completed));
}
