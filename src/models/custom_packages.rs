use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::bookings::TravelerDetail;
use super::users::UserSummary;
use crate::error::{ApiError, FieldError, field_errors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum CustomPackageStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "processing")]
    Processing,
    #[sea_orm(string_value = "quoted")]
    Quoted,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationType {
    Hotel,
    Resort,
    Villa,
    Homestay,
    Hostel,
    Apartment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalTransport {
    RentalCar,
    PublicTransport,
    PrivateDriver,
    #[serde(rename = "none")]
    NotRequired,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    #[serde(rename = "type")]
    pub kind: AccommodationType,
    #[validate(range(min = 1, max = 5, message = "Preferred rating must be between 1 and 5"))]
    pub preferred_rating: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flights {
    #[serde(default)]
    pub required: bool,
    pub preferred_class: Option<FlightClass>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    #[serde(default)]
    pub flights: Flights,
    pub local_transport: Option<LocalTransport>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Meals {
    #[serde(default)]
    pub included: bool,
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, Validate)]
pub struct PartyTravelers {
    #[validate(range(min = 1, message = "At least one adult is required"))]
    pub adults: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Children cannot be negative"))]
    pub children: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Infants cannot be negative"))]
    pub infants: i32,
    #[serde(default)]
    pub details: Vec<TravelerDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub details: String,
    pub expires_at: Option<DateTimeUtc>,
}

/// SeaORM entity for the `custom_packages` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_packages")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub destination: String,
    pub start_date: Date,
    pub end_date: Date,
    #[sea_orm(column_type = "JsonBinary")]
    pub accommodation: Accommodation,
    #[sea_orm(column_type = "JsonBinary")]
    pub transportation: Transportation,
    #[sea_orm(column_type = "JsonBinary")]
    pub meals: Meals,
    pub activities: Vec<String>,
    #[sea_orm(column_type = "Double")]
    pub budget: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub travelers: PartyTravelers,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_requests: Option<String>,
    pub status: CustomPackageStatus,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub quote: Option<Quote>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Only the requester may cancel, and only once.
    pub fn ensure_cancellable_by(&self, user_id: Uuid) -> Result<(), ApiError> {
        if self.user_id != user_id {
            return Err(ApiError::Unauthorized(
                "Not authorized to cancel this custom package".to_string(),
            ));
        }
        if self.status == CustomPackageStatus::Cancelled {
            return Err(ApiError::BadRequest(
                "Custom package is already cancelled".to_string(),
            ));
        }
        Ok(())
    }
}

// ── DTOs ──

/// Body of `POST /api/custom-packages`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomPackage {
    #[validate(length(min = 1, message = "Package name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    pub start_date: Date,
    pub end_date: Date,
    #[validate(nested)]
    pub accommodation: Accommodation,
    #[serde(default)]
    pub transportation: Transportation,
    #[serde(default)]
    pub meals: Meals,
    #[serde(default)]
    pub activities: Vec<String>,
    #[validate(range(exclusive_min = 0.0, message = "Budget must be a positive number"))]
    pub budget: f64,
    #[validate(nested)]
    pub travelers: PartyTravelers,
    pub special_requests: Option<String>,
}

impl CreateCustomPackage {
    /// Run every rule and report all failures at once. `today` is the
    /// submission date; the trip has to start after it.
    pub fn validate_submission(&self, today: Date) -> Result<(), Vec<FieldError>> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => field_errors(&e),
        };

        if self.start_date <= today {
            errors.push(FieldError::new(
                "startDate",
                "Start date must be in the future",
            ));
        }
        if self.end_date <= self.start_date {
            errors.push(FieldError::new(
                "endDate",
                "End date must be after start date",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Body of `PUT /api/admin/custom-packages/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomPackage {
    pub status: Option<CustomPackageStatus>,
    pub quote: Option<Quote>,
}

impl UpdateCustomPackage {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.quote.is_none()
    }
}

/// A custom package with its requesting user resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPackageView {
    #[serde(flatten)]
    pub request: Model,
    pub user: Option<UserSummary>,
}
