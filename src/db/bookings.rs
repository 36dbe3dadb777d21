use std::collections::{HashMap, HashSet};

use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::db::{packages::get_packages_by_ids, users::get_users_by_ids};
use crate::models::bookings::{
    self, BookingStatus, BookingView, CreateBooking, PaymentStatus, TravelerDetails,
    UpdateBookingStatus,
};
use crate::models::packages::PackageSummary;
use crate::models::users::UserSummary;
use crate::query::{Filter, ListSpec};

pub const LIST_SPEC: ListSpec<bookings::Column> = ListSpec {
    filters: &[
        Filter::exact("bookingStatus", bookings::Column::BookingStatus),
        Filter::exact("paymentStatus", bookings::Column::PaymentStatus),
        Filter::id("user", bookings::Column::UserId),
        Filter::id("package", bookings::Column::PackageId),
        Filter::date_range("startDate", "endDate", bookings::Column::TravelDate),
        Filter::number_range("minPrice", "maxPrice", bookings::Column::TotalPrice),
    ],
    sortable: &[
        ("createdAt", bookings::Column::CreatedAt),
        ("travelDate", bookings::Column::TravelDate),
        ("totalPrice", bookings::Column::TotalPrice),
    ],
    default_sort: bookings::Column::CreatedAt,
};

/// Insert a new booking for `user_id` with a precomputed price.
pub async fn insert_booking(
    db: &DatabaseConnection,
    input: CreateBooking,
    user_id: Uuid,
    total_price: f64,
) -> Result<bookings::Model, DbErr> {
    let new_booking = bookings::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        package_id: Set(input.package_id),
        travel_date: Set(input.travel_date),
        travelers: Set(input.travelers),
        traveler_details: Set(TravelerDetails(input.traveler_details)),
        contact_details: Set(input.contact_details),
        total_price: Set(total_price),
        special_requests: Set(input.special_requests),
        booking_status: Set(BookingStatus::Pending),
        payment_status: Set(PaymentStatus::Pending),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_booking.insert(db).await
}

pub async fn get_booking_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<bookings::Model>, DbErr> {
    bookings::Entity::find_by_id(id).one(db).await
}

/// Mark a booking cancelled; its payment becomes refunded.
pub async fn cancel_booking(
    db: &DatabaseConnection,
    booking: bookings::Model,
) -> Result<bookings::Model, DbErr> {
    let mut active: bookings::ActiveModel = booking.into();
    active.booking_status = Set(BookingStatus::Cancelled);
    active.payment_status = Set(PaymentStatus::Refunded);
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Admin status change. Any transition is accepted.
pub async fn update_booking_status(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateBookingStatus,
) -> Result<bookings::Model, DbErr> {
    let booking = bookings::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Booking not found".to_string()))?;

    let mut active: bookings::ActiveModel = booking.into();

    if let Some(status) = input.booking_status {
        active.booking_status = Set(status);
    }
    if let Some(status) = input.payment_status {
        active.payment_status = Set(status);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

pub async fn count_bookings(
    db: &DatabaseConnection,
    status: Option<BookingStatus>,
) -> Result<u64, DbErr> {
    let mut query = bookings::Entity::find();
    if let Some(status) = status {
        query = query.filter(bookings::Column::BookingStatus.eq(status));
    }
    query.count(db).await
}

/// Sum of `total_price` over bookings whose payment completed.
pub async fn total_revenue(db: &DatabaseConnection) -> Result<f64, DbErr> {
    let revenue = bookings::Entity::find()
        .select_only()
        .column_as(Expr::cust("COALESCE(SUM(total_price), 0)"), "revenue")
        .filter(bookings::Column::PaymentStatus.eq(PaymentStatus::Completed))
        .into_tuple::<f64>()
        .one(db)
        .await?;

    Ok(revenue.unwrap_or(0.0))
}

/// The `limit` most recently created bookings.
pub async fn recent_bookings(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<bookings::Model>, DbErr> {
    bookings::Entity::find()
        .order_by_desc(bookings::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
}

/// Resolve the user and package of every booking with two batched lookups.
/// A reference whose row is gone is left as `None`.
pub async fn populate(
    db: &DatabaseConnection,
    bookings: Vec<bookings::Model>,
) -> Result<Vec<BookingView>, DbErr> {
    let user_ids: HashSet<Uuid> = bookings.iter().map(|b| b.user_id).collect();
    let package_ids: HashSet<Uuid> = bookings.iter().map(|b| b.package_id).collect();

    let users: HashMap<Uuid, UserSummary> = get_users_by_ids(db, user_ids.into_iter().collect())
        .await?
        .iter()
        .map(|u| (u.id, UserSummary::from(u)))
        .collect();
    let packages: HashMap<Uuid, PackageSummary> =
        get_packages_by_ids(db, package_ids.into_iter().collect())
            .await?
            .iter()
            .map(|p| (p.id, PackageSummary::from(p)))
            .collect();

    Ok(bookings
        .into_iter()
        .map(|booking| BookingView {
            user: users.get(&booking.user_id).cloned(),
            package: packages.get(&booking.package_id).cloned(),
            booking,
        })
        .collect())
}
