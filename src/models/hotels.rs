use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{FieldError, field_errors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum HotelCategory {
    #[sea_orm(string_value = "budget")]
    Budget,
    #[sea_orm(string_value = "standard")]
    Standard,
    #[sea_orm(string_value = "deluxe")]
    Deluxe,
    #[sea_orm(string_value = "luxury")]
    Luxury,
    #[sea_orm(string_value = "boutique")]
    Boutique,
    #[sea_orm(string_value = "resort")]
    Resort,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(rename = "type")]
    pub kind: String,
    pub sleeps: i32,
    pub price: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RoomTypes(pub Vec<RoomType>);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub cancellation: Option<String>,
    pub pets: Option<String>,
}

/// SeaORM entity for the `hotels` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotels")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub location_id: Uuid,
    pub address: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rating: i32,
    pub category: HotelCategory,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    #[sea_orm(column_type = "Double")]
    pub price_min: f64,
    #[sea_orm(column_type = "Double")]
    pub price_max: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub room_types: RoomTypes,
    #[sea_orm(column_type = "JsonBinary")]
    pub contact_info: ContactInfo,
    #[sea_orm(column_type = "JsonBinary")]
    pub policies: Policies,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::destinations::Entity",
        from = "Column::LocationId",
        to = "super::destinations::Column::Id"
    )]
    Location,
    #[sea_orm(has_many = "super::hotel_reviews::Entity")]
    Reviews,
}

impl Related<super::destinations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::hotel_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

fn check_price_range(range: Option<&PriceRange>, errors: &mut Vec<FieldError>) {
    if let Some(range) = range {
        if range.min < 0.0 {
            errors.push(FieldError::new("priceRange.min", "Minimum price cannot be negative"));
        }
        if range.min > range.max {
            errors.push(FieldError::new(
                "priceRange.max",
                "Maximum price must not be below the minimum price",
            ));
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotel {
    #[validate(length(min = 1, message = "Hotel name is required"))]
    pub name: String,
    pub location: Uuid,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    pub category: HotelCategory,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 10, message = "A hotel can have at most 10 images"))]
    pub images: Vec<String>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub policies: Policies,
}

impl CreateHotel {
    pub fn validate_all(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = self.validate().err().map(|e| field_errors(&e)).unwrap_or_default();
        check_price_range(Some(&self.price_range), &mut errors);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotel {
    #[validate(length(min = 1, message = "Hotel name cannot be empty"))]
    pub name: Option<String>,
    pub location: Option<Uuid>,
    pub address: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub category: Option<HotelCategory>,
    pub amenities: Option<Vec<String>>,
    #[validate(length(max = 10, message = "A hotel can have at most 10 images"))]
    pub images: Option<Vec<String>>,
    pub price_range: Option<PriceRange>,
    pub room_types: Option<Vec<RoomType>>,
    pub contact_info: Option<ContactInfo>,
    pub policies: Option<Policies>,
}

impl UpdateHotel {
    pub fn validate_all(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = self.validate().err().map(|e| field_errors(&e)).unwrap_or_default();
        check_price_range(self.price_range.as_ref(), &mut errors);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Hotel as returned by the API, with the price bounds grouped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: Uuid,
    pub name: String,
    pub location: Uuid,
    pub address: String,
    pub description: String,
    pub rating: i32,
    pub category: HotelCategory,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub price_range: PriceRange,
    pub room_types: Vec<RoomType>,
    pub contact_info: ContactInfo,
    pub policies: Policies,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

impl From<Model> for HotelResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            location: m.location_id,
            address: m.address,
            description: m.description,
            rating: m.rating,
            category: m.category,
            amenities: m.amenities,
            images: m.images,
            price_range: PriceRange {
                min: m.price_min,
                max: m.price_max,
            },
            room_types: m.room_types.0,
            contact_info: m.contact_info,
            policies: m.policies,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
