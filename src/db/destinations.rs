use sea_orm::*;
use uuid::Uuid;

use crate::models::destinations::{self, CreateDestination, UpdateDestination};
use crate::query::{Filter, ListSpec};

pub const LIST_SPEC: ListSpec<destinations::Column> = ListSpec {
    filters: &[
        Filter::contains(
            "search",
            &[destinations::Column::Name, destinations::Column::Country],
        ),
        Filter::contains("country", &[destinations::Column::Country]),
    ],
    sortable: &[
        ("createdAt", destinations::Column::CreatedAt),
        ("name", destinations::Column::Name),
        ("country", destinations::Column::Country),
    ],
    default_sort: destinations::Column::CreatedAt,
};

pub async fn insert_destination(
    db: &DatabaseConnection,
    input: CreateDestination,
) -> Result<destinations::Model, DbErr> {
    let new_destination = destinations::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        country: Set(input.country),
        description: Set(input.description),
        images: Set(input.images),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_destination.insert(db).await
}

pub async fn get_destination_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<destinations::Model>, DbErr> {
    destinations::Entity::find_by_id(id).one(db).await
}

pub async fn get_destination_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<destinations::Model>, DbErr> {
    destinations::Entity::find()
        .filter(destinations::Column::Name.eq(name.trim()))
        .one(db)
        .await
}

pub async fn update_destination(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateDestination,
) -> Result<destinations::Model, DbErr> {
    let destination = destinations::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Destination not found".to_string()))?;

    let mut active: destinations::ActiveModel = destination.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(country) = input.country {
        active.country = Set(country);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(images) = input.images {
        active.images = Set(images);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete a destination (its hotels go with it).
pub async fn delete_destination(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    destinations::Entity::delete_by_id(id).exec(db).await
}
