use sea_orm::*;
use uuid::Uuid;

use crate::db::packages::set_average_rating;
use crate::models::CreateReview;
use crate::models::{hotel_reviews, package_reviews};

// ── Package reviews ──

/// Append a review and refresh the package's average rating.
pub async fn add_package_review(
    db: &DatabaseConnection,
    package_id: Uuid,
    user_id: Uuid,
    input: CreateReview,
) -> Result<package_reviews::Model, DbErr> {
    let review = package_reviews::ActiveModel {
        id: Set(Uuid::new_v4()),
        package_id: Set(package_id),
        user_id: Set(user_id),
        rating: Set(input.rating),
        comment: Set(input.comment),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    let ratings: Vec<i32> = package_reviews::Entity::find()
        .select_only()
        .column(package_reviews::Column::Rating)
        .filter(package_reviews::Column::PackageId.eq(package_id))
        .into_tuple()
        .all(db)
        .await?;
    set_average_rating(db, package_id, average_rating(&ratings)).await?;

    Ok(review)
}

pub async fn get_package_reviews(
    db: &DatabaseConnection,
    package_id: Uuid,
) -> Result<Vec<package_reviews::Model>, DbErr> {
    package_reviews::Entity::find()
        .filter(package_reviews::Column::PackageId.eq(package_id))
        .order_by_desc(package_reviews::Column::CreatedAt)
        .all(db)
        .await
}

/// Mean of the ratings, 0 when there are none.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    sum as f64 / ratings.len() as f64
}

// ── Hotel reviews ──

pub async fn has_hotel_review(
    db: &DatabaseConnection,
    hotel_id: Uuid,
    user_id: Uuid,
) -> Result<bool, DbErr> {
    let existing = hotel_reviews::Entity::find()
        .filter(hotel_reviews::Column::HotelId.eq(hotel_id))
        .filter(hotel_reviews::Column::UserId.eq(user_id))
        .count(db)
        .await?;
    Ok(existing > 0)
}

pub async fn insert_hotel_review(
    db: &DatabaseConnection,
    hotel_id: Uuid,
    user_id: Uuid,
    input: CreateReview,
) -> Result<hotel_reviews::Model, DbErr> {
    hotel_reviews::ActiveModel {
        id: Set(Uuid::new_v4()),
        hotel_id: Set(hotel_id),
        user_id: Set(user_id),
        rating: Set(input.rating),
        comment: Set(input.comment),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
}

pub async fn get_hotel_reviews(
    db: &DatabaseConnection,
    hotel_id: Uuid,
) -> Result<Vec<hotel_reviews::Model>, DbErr> {
    hotel_reviews::Entity::find()
        .filter(hotel_reviews::Column::HotelId.eq(hotel_id))
        .order_by_desc(hotel_reviews::Column::CreatedAt)
        .all(db)
        .await
}
