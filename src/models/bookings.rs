use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::packages::PackageSummary;
use super::users::UserSummary;
use crate::error::ApiError;

/// Children travel at 70% of the adult fare; infants are free.
pub const CHILD_FARE_RATIO: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "refunded")]
    Refunded,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, Validate)]
pub struct Travelers {
    #[validate(range(min = 1, message = "At least one adult is required"))]
    pub adults: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Children cannot be negative"))]
    pub children: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Infants cannot be negative"))]
    pub infants: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerDetail {
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TravelerDetails(pub Vec<TravelerDetail>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, Validate)]
pub struct ContactDetails {
    #[validate(email(message = "Contact email must be valid"))]
    pub email: String,
    #[validate(length(min = 7, message = "Contact phone is required"))]
    pub phone: String,
}

/// SeaORM entity for the `bookings` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub package_id: Uuid,
    pub travel_date: Date,
    #[sea_orm(column_type = "JsonBinary")]
    pub travelers: Travelers,
    #[sea_orm(column_type = "JsonBinary")]
    pub traveler_details: TravelerDetails,
    #[sea_orm(column_type = "JsonBinary")]
    pub contact_details: ContactDetails,
    #[sea_orm(column_type = "Double")]
    pub total_price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_requests: Option<String>,
    pub booking_status: BookingStatus,
    pub payment_status: PaymentStatus,
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
    #[sea_orm(
        belongs_to = "super::packages::Entity",
        from = "Column::PackageId",
        to = "super::packages::Column::Id"
    )]
    Package,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Package.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Price of a booking for the given per-adult package price.
pub fn total_price(price: f64, travelers: &Travelers) -> f64 {
    price * f64::from(travelers.adults) + price * CHILD_FARE_RATIO * f64::from(travelers.children)
}

impl Model {
    /// A user may cancel only their own booking, and only once.
    pub fn ensure_cancellable_by(&self, user_id: Uuid) -> Result<(), ApiError> {
        if self.user_id != user_id {
            return Err(ApiError::Unauthorized(
                "Not authorized to cancel this booking".to_string(),
            ));
        }
        if self.booking_status == BookingStatus::Cancelled {
            return Err(ApiError::BadRequest(
                "Booking is already cancelled".to_string(),
            ));
        }
        Ok(())
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub package_id: Uuid,
    pub travel_date: Date,
    #[validate(nested)]
    pub travelers: Travelers,
    #[serde(default)]
    pub traveler_details: Vec<TravelerDetail>,
    #[validate(nested)]
    pub contact_details: ContactDetails,
    pub special_requests: Option<String>,
}

/// Admin status change; both fields are drawn from closed sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatus {
    pub booking_status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
}

impl UpdateBookingStatus {
    pub fn is_empty(&self) -> bool {
        self.booking_status.is_none() && self.payment_status.is_none()
    }
}

/// A booking with its user and package references resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Model,
    pub user: Option<UserSummary>,
    pub package: Option<PackageSummary>,
}
