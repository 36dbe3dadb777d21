use std::collections::{HashMap, HashSet};

use sea_orm::*;
use uuid::Uuid;

use crate::db::users::get_users_by_ids;
use crate::models::custom_packages::{
    self, CreateCustomPackage, CustomPackageStatus, CustomPackageView, UpdateCustomPackage,
};
use crate::models::users::UserSummary;
use crate::query::{Filter, ListSpec};

pub const LIST_SPEC: ListSpec<custom_packages::Column> = ListSpec {
    filters: &[
        Filter::exact("status", custom_packages::Column::Status),
        Filter::contains("destination", &[custom_packages::Column::Destination]),
        Filter::number_range("minBudget", "maxBudget", custom_packages::Column::Budget),
        Filter::date_range("startDate", "endDate", custom_packages::Column::StartDate),
    ],
    sortable: &[
        ("createdAt", custom_packages::Column::CreatedAt),
        ("startDate", custom_packages::Column::StartDate),
        ("budget", custom_packages::Column::Budget),
    ],
    default_sort: custom_packages::Column::CreatedAt,
};

/// Insert a validated request in the `pending` state.
pub async fn insert_custom_package(
    db: &DatabaseConnection,
    input: CreateCustomPackage,
    user_id: Uuid,
) -> Result<custom_packages::Model, DbErr> {
    let new_request = custom_packages::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        name: Set(input.name),
        destination: Set(input.destination),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        accommodation: Set(input.accommodation),
        transportation: Set(input.transportation),
        meals: Set(input.meals),
        activities: Set(input.activities),
        budget: Set(input.budget),
        travelers: Set(input.travelers),
        special_requests: Set(input.special_requests),
        status: Set(CustomPackageStatus::Pending),
        quote: Set(None),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_request.insert(db).await
}

pub async fn get_custom_package_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<custom_packages::Model>, DbErr> {
    custom_packages::Entity::find_by_id(id).one(db).await
}

pub async fn cancel_custom_package(
    db: &DatabaseConnection,
    request: custom_packages::Model,
) -> Result<custom_packages::Model, DbErr> {
    let mut active: custom_packages::ActiveModel = request.into();
    active.status = Set(CustomPackageStatus::Cancelled);
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Admin update of status and/or quote.
pub async fn update_custom_package(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateCustomPackage,
) -> Result<custom_packages::Model, DbErr> {
    let request = custom_packages::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Custom package not found".to_string()))?;

    let mut active: custom_packages::ActiveModel = request.into();

    if let Some(status) = input.status {
        active.status = Set(status);
    }
    if let Some(quote) = input.quote {
        active.quote = Set(Some(quote));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

pub async fn count_custom_packages(
    db: &DatabaseConnection,
    status: Option<CustomPackageStatus>,
) -> Result<u64, DbErr> {
    let mut query = custom_packages::Entity::find();
    if let Some(status) = status {
        query = query.filter(custom_packages::Column::Status.eq(status));
    }
    query.count(db).await
}

pub async fn recent_custom_packages(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<custom_packages::Model>, DbErr> {
    custom_packages::Entity::find()
        .order_by_desc(custom_packages::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
}

/// Resolve the requesting user of each custom package.
pub async fn populate(
    db: &DatabaseConnection,
    requests: Vec<custom_packages::Model>,
) -> Result<Vec<CustomPackageView>, DbErr> {
    let user_ids: HashSet<Uuid> = requests.iter().map(|r| r.user_id).collect();
    let users: HashMap<Uuid, UserSummary> = get_users_by_ids(db, user_ids.into_iter().collect())
        .await?
        .iter()
        .map(|u| (u.id, UserSummary::from(u)))
        .collect();

    Ok(requests
        .into_iter()
        .map(|request| CustomPackageView {
            user: users.get(&request.user_id).cloned(),
            request,
        })
        .collect())
}
