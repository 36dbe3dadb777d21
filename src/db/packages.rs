use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::packages::{self, CreatePackage, Itinerary, UpdatePackage};
use crate::query::{Filter, ListSpec};

pub const LIST_SPEC: ListSpec<packages::Column> = ListSpec {
    filters: &[
        Filter::exact("type", packages::Column::PackageType),
        Filter::contains("destination", &[packages::Column::Destination]),
        Filter::contains(
            "search",
            &[packages::Column::Name, packages::Column::Destination],
        ),
        Filter::number_range("minPrice", "maxPrice", packages::Column::Price),
        Filter::number_range("minDays", "maxDays", packages::Column::DurationDays),
        Filter::number_range("minRating", "maxRating", packages::Column::AverageRating),
    ],
    sortable: &[
        ("createdAt", packages::Column::CreatedAt),
        ("price", packages::Column::Price),
        ("name", packages::Column::Name),
        ("duration", packages::Column::DurationDays),
        ("averageRating", packages::Column::AverageRating),
        ("bookingsCount", packages::Column::BookingsCount),
    ],
    default_sort: packages::Column::CreatedAt,
};

/// Insert a new package.
pub async fn insert_package(
    db: &DatabaseConnection,
    input: CreatePackage,
) -> Result<packages::Model, DbErr> {
    let new_package = packages::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        package_type: Set(input.package_type),
        destination: Set(input.destination),
        duration_days: Set(input.duration.days),
        duration_nights: Set(input.duration.nights),
        price: Set(input.price),
        description: Set(input.description),
        highlights: Set(input.highlights),
        inclusions: Set(input.inclusions),
        exclusions: Set(input.exclusions),
        transportation: Set(input.transportation),
        accommodation: Set(input.accommodation),
        images: Set(input.images),
        itinerary: Set(Itinerary(input.itinerary)),
        average_rating: Set(0.0),
        bookings_count: Set(0),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_package.insert(db).await
}

/// Fetch a single package by ID.
pub async fn get_package_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<packages::Model>, DbErr> {
    packages::Entity::find_by_id(id).one(db).await
}

/// Fetch several packages at once (for populating booking lists).
pub async fn get_packages_by_ids(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<packages::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    packages::Entity::find()
        .filter(packages::Column::Id.is_in(ids))
        .all(db)
        .await
}

/// Update an existing package.
pub async fn update_package(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePackage,
) -> Result<packages::Model, DbErr> {
    let package = packages::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Package not found".to_string()))?;

    let mut active: packages::ActiveModel = package.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(package_type) = input.package_type {
        active.package_type = Set(package_type);
    }
    if let Some(destination) = input.destination {
        active.destination = Set(destination);
    }
    if let Some(duration) = input.duration {
        active.duration_days = Set(duration.days);
        active.duration_nights = Set(duration.nights);
    }
    if let Some(price) = input.price {
        active.price = Set(price);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(highlights) = input.highlights {
        active.highlights = Set(highlights);
    }
    if let Some(inclusions) = input.inclusions {
        active.inclusions = Set(inclusions);
    }
    if let Some(exclusions) = input.exclusions {
        active.exclusions = Set(exclusions);
    }
    if let Some(transportation) = input.transportation {
        active.transportation = Set(Some(transportation));
    }
    if let Some(accommodation) = input.accommodation {
        active.accommodation = Set(Some(accommodation));
    }
    if let Some(images) = input.images {
        active.images = Set(images);
    }
    if let Some(itinerary) = input.itinerary {
        active.itinerary = Set(Itinerary(itinerary));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete a package by ID (bookings and reviews go with it).
pub async fn delete_package(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    packages::Entity::delete_by_id(id).exec(db).await
}

/// `bookings_count + 1`. Not transactional with the booking insert.
pub async fn increment_bookings_count(db: &DatabaseConnection, id: Uuid) -> Result<(), DbErr> {
    packages::Entity::update_many()
        .col_expr(
            packages::Column::BookingsCount,
            Expr::cust("bookings_count + 1"),
        )
        .filter(packages::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}

/// `bookings_count - 1`, never below zero.
pub async fn decrement_bookings_count(db: &DatabaseConnection, id: Uuid) -> Result<(), DbErr> {
    packages::Entity::update_many()
        .col_expr(
            packages::Column::BookingsCount,
            Expr::cust("GREATEST(bookings_count - 1, 0)"),
        )
        .filter(packages::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn set_average_rating(
    db: &DatabaseConnection,
    id: Uuid,
    average: f64,
) -> Result<(), DbErr> {
    packages::Entity::update_many()
        .col_expr(packages::Column::AverageRating, Expr::value(average))
        .filter(packages::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn count_packages(db: &DatabaseConnection) -> Result<u64, DbErr> {
    packages::Entity::find().count(db).await
}
