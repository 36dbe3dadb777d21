use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::package_reviews;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[sea_orm(string_value = "domestic")]
    Domestic,
    #[sea_orm(string_value = "international")]
    International,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: i32,
    pub description: String,
}

/// Day-by-day plan, stored as a JSONB array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Itinerary(pub Vec<ItineraryDay>);

/// SeaORM entity for the `packages` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "packages")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub package_type: PackageType,
    pub destination: String,
    pub duration_days: i32,
    pub duration_nights: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub highlights: Vec<String>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub transportation: Option<String>,
    pub accommodation: Option<String>,
    pub images: Vec<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub itinerary: Itinerary,
    #[sea_orm(column_type = "Double")]
    pub average_rating: f64,
    pub bookings_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::package_reviews::Entity")]
    Reviews,
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::package_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Duration {
    #[validate(range(min = 1, message = "Duration must be at least 1 day"))]
    pub days: i32,
    #[validate(range(min = 0, message = "Nights cannot be negative"))]
    pub nights: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackage {
    #[validate(length(min = 1, message = "Package name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    #[validate(nested)]
    pub duration: Duration,
    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    pub transportation: Option<String>,
    pub accommodation: Option<String>,
    #[serde(default)]
    #[validate(length(max = 5, message = "A package can have at most 5 images"))]
    pub images: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackage {
    #[validate(length(min = 1, message = "Package name cannot be empty"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub package_type: Option<PackageType>,
    #[validate(length(min = 1, message = "Destination cannot be empty"))]
    pub destination: Option<String>,
    #[validate(nested)]
    pub duration: Option<Duration>,
    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: Option<f64>,
    pub description: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub inclusions: Option<Vec<String>>,
    pub exclusions: Option<Vec<String>>,
    pub transportation: Option<String>,
    pub accommodation: Option<String>,
    #[validate(length(max = 5, message = "A package can have at most 5 images"))]
    pub images: Option<Vec<String>>,
    pub itinerary: Option<Vec<ItineraryDay>>,
}

/// Package as returned by the API: duration nested, reviews only on detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub destination: String,
    pub duration: Duration,
    pub price: f64,
    pub description: String,
    pub highlights: Vec<String>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub transportation: Option<String>,
    pub accommodation: Option<String>,
    pub images: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub average_rating: f64,
    pub bookings_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reviews: Option<Vec<package_reviews::Model>>,
}

impl From<Model> for PackageResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            package_type: m.package_type,
            destination: m.destination,
            duration: Duration {
                days: m.duration_days,
                nights: m.duration_nights,
            },
            price: m.price,
            description: m.description,
            highlights: m.highlights,
            inclusions: m.inclusions,
            exclusions: m.exclusions,
            transportation: m.transportation,
            accommodation: m.accommodation,
            images: m.images,
            itinerary: m.itinerary.0,
            average_rating: m.average_rating,
            bookings_count: m.bookings_count,
            created_at: m.created_at,
            updated_at: m.updated_at,
            reviews: None,
        }
    }
}

impl PackageResponse {
    pub fn with_reviews(mut self, reviews: Vec<package_reviews::Model>) -> Self {
        self.reviews = Some(reviews);
        self
    }
}

/// The populated form of a package reference on bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub id: Uuid,
    pub name: String,
    pub destination: String,
    pub price: f64,
}

impl From<&Model> for PackageSummary {
    fn from(m: &Model) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            destination: m.destination.clone(),
            price: m.price,
        }
    }
}
