///! Custom package request validation.
///!
///! Run with: `cargo test --test custom_package_test`
use chrono::NaiveDate;
use serde_json::{Value, json};

use yatra_backend::models::custom_packages::{
    AccommodationType, CreateCustomPackage, CustomPackageStatus, FlightClass, LocalTransport,
    UpdateCustomPackage,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()
}

fn valid_body() -> Value {
    json!({
        "name": "Kerala backwaters",
        "destination": "Kerala",
        "startDate": "2030-02-01",
        "endDate": "2030-02-08",
        "accommodation": { "type": "homestay", "preferredRating": 4 },
        "transportation": {
            "flights": { "required": true, "preferredClass": "premium_economy" },
            "localTransport": "private_driver"
        },
        "meals": { "included": true, "preferences": ["vegetarian"] },
        "activities": ["houseboat", "spice tour"],
        "budget": 85000,
        "travelers": { "adults": 2, "children": 1 }
    })
}

fn parse(body: Value) -> CreateCustomPackage {
    serde_json::from_value(body).expect("body should deserialize")
}

fn failed_fields(body: Value) -> Vec<String> {
    parse(body)
        .validate_submission(today())
        .unwrap_err()
        .into_iter()
        .map(|e| e.field)
        .collect()
}

#[test]
fn test_valid_request_passes() {
    let request = parse(valid_body());
    assert!(request.validate_submission(today()).is_ok());

    assert_eq!(request.accommodation.kind, AccommodationType::Homestay);
    assert_eq!(
        request.transportation.flights.preferred_class,
        Some(FlightClass::PremiumEconomy)
    );
    assert_eq!(
        request.transportation.local_transport,
        Some(LocalTransport::PrivateDriver)
    );
}

#[test]
fn test_optional_sections_default() {
    let mut body = valid_body();
    let object = body.as_object_mut().unwrap();
    object.remove("transportation");
    object.remove("meals");
    object.remove("activities");

    let request = parse(body);
    assert!(request.validate_submission(today()).is_ok());
    assert!(!request.transportation.flights.required);
    assert!(request.activities.is_empty());
}

#[test]
fn test_local_transport_none_is_accepted() {
    let mut body = valid_body();
    body["transportation"]["localTransport"] = json!("none");
    assert_eq!(
        parse(body).transportation.local_transport,
        Some(LocalTransport::NotRequired)
    );
}

#[test]
fn test_start_date_must_be_after_today() {
    let mut body = valid_body();
    body["startDate"] = json!("2030-01-15");
    assert_eq!(failed_fields(body), vec!["startDate"]);

    let mut body = valid_body();
    body["startDate"] = json!("2029-12-01");
    assert_eq!(failed_fields(body), vec!["startDate"]);
}

#[test]
fn test_end_date_must_be_after_start_date() {
    let mut body = valid_body();
    body["endDate"] = json!("2030-02-01");
    assert_eq!(failed_fields(body), vec!["endDate"]);
}

#[test]
fn test_all_failures_are_collected() {
    let mut body = valid_body();
    body["name"] = json!("");
    body["budget"] = json!(0);
    body["accommodation"]["preferredRating"] = json!(7);
    body["travelers"]["adults"] = json!(0);
    body["startDate"] = json!("2030-01-01");
    body["endDate"] = json!("2029-12-31");

    let fields = failed_fields(body);
    for expected in [
        "name",
        "budget",
        "accommodation.preferredRating",
        "travelers.adults",
        "startDate",
        "endDate",
    ] {
        assert!(fields.iter().any(|f| f == expected), "missing {expected} in {fields:?}");
    }
}

#[test]
fn test_unknown_enum_values_are_rejected() {
    let mut body = valid_body();
    body["accommodation"]["type"] = json!("castle");
    assert!(serde_json::from_value::<CreateCustomPackage>(body).is_err());

    let mut body = valid_body();
    body["transportation"]["flights"]["preferredClass"] = json!("cargo");
    assert!(serde_json::from_value::<CreateCustomPackage>(body).is_err());
}

#[test]
fn test_admin_update_parses_quote() {
    let update: UpdateCustomPackage = serde_json::from_value(json!({
        "status": "quoted",
        "quote": { "details": "7 nights, all inclusive: 82,000", "expiresAt": "2030-01-31T00:00:00Z" }
    }))
    .unwrap();

    assert!(!update.is_empty());
    assert_eq!(update.status, Some(CustomPackageStatus::Quoted));
    assert!(update.quote.unwrap().expires_at.is_some());

    let empty: UpdateCustomPackage = serde_json::from_value(json!({})).unwrap();
    assert!(empty.is_empty());
}
