use sea_orm::*;
use uuid::Uuid;

use crate::models::bookings;
use crate::models::users::{self, NewUser, Roles};
use crate::query::{Filter, ListSpec};

pub const LIST_SPEC: ListSpec<users::Column> = ListSpec {
    filters: &[
        Filter::exact("role", users::Column::Role),
        Filter::contains("search", &[users::Column::Name, users::Column::Email]),
    ],
    sortable: &[
        ("createdAt", users::Column::CreatedAt),
        ("name", users::Column::Name),
        ("email", users::Column::Email),
    ],
    default_sort: users::Column::CreatedAt,
};

/// Insert a new user; the password is already hashed.
pub async fn insert_user(db: &DatabaseConnection, input: NewUser) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        email: Set(input.email),
        password_hash: Set(input.password_hash),
        phone: Set(input.phone),
        role: Set(input.role),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_user.insert(db).await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Emails are stored lower-cased, so lookups are case-insensitive.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email.trim().to_lowercase()))
        .one(db)
        .await
}

pub async fn count_users(db: &DatabaseConnection, role: Option<Roles>) -> Result<u64, DbErr> {
    let mut query = users::Entity::find();
    if let Some(role) = role {
        query = query.filter(users::Column::Role.eq(role));
    }
    query.count(db).await
}

/// Delete a user and every booking they made. Returns the number of users
/// removed (0 or 1).
pub async fn delete_user_cascade(db: &DatabaseConnection, id: Uuid) -> Result<u64, DbErr> {
    let removed = bookings::Entity::delete_many()
        .filter(bookings::Column::UserId.eq(id))
        .exec(db)
        .await?;
    tracing::info!(user_id = %id, bookings = removed.rows_affected, "Deleted user bookings");

    let result = users::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

/// Fetch several users at once (for populating booking and request lists).
pub async fn get_users_by_ids(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<users::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await
}
