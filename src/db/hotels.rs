use sea_orm::*;
use uuid::Uuid;

use crate::models::hotels::{self, CreateHotel, RoomTypes, UpdateHotel};
use crate::query::{Filter, ListSpec};

pub const LIST_SPEC: ListSpec<hotels::Column> = ListSpec {
    filters: &[
        Filter::id("location", hotels::Column::LocationId),
        Filter::exact("category", hotels::Column::Category),
        Filter::contains("search", &[hotels::Column::Name, hotels::Column::Address]),
        Filter::number_range("minRating", "maxRating", hotels::Column::Rating),
        Filter::number_range("minPrice", "maxPrice", hotels::Column::PriceMin),
    ],
    sortable: &[
        ("createdAt", hotels::Column::CreatedAt),
        ("name", hotels::Column::Name),
        ("rating", hotels::Column::Rating),
        ("price", hotels::Column::PriceMin),
    ],
    default_sort: hotels::Column::CreatedAt,
};

pub async fn insert_hotel(db: &DatabaseConnection, input: CreateHotel) -> Result<hotels::Model, DbErr> {
    let new_hotel = hotels::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        location_id: Set(input.location),
        address: Set(input.address),
        description: Set(input.description),
        rating: Set(input.rating),
        category: Set(input.category),
        amenities: Set(input.amenities),
        images: Set(input.images),
        price_min: Set(input.price_range.min),
        price_max: Set(input.price_range.max),
        room_types: Set(RoomTypes(input.room_types)),
        contact_info: Set(input.contact_info),
        policies: Set(input.policies),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_hotel.insert(db).await
}

pub async fn get_hotel_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<hotels::Model>, DbErr> {
    hotels::Entity::find_by_id(id).one(db).await
}

/// Every hotel at a destination, best rated first.
pub async fn get_hotels_by_location(
    db: &DatabaseConnection,
    location_id: Uuid,
) -> Result<Vec<hotels::Model>, DbErr> {
    hotels::Entity::find()
        .filter(hotels::Column::LocationId.eq(location_id))
        .order_by_desc(hotels::Column::Rating)
        .order_by_asc(hotels::Column::Name)
        .all(db)
        .await
}

pub async fn update_hotel(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateHotel,
) -> Result<hotels::Model, DbErr> {
    let hotel = hotels::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Hotel not found".to_string()))?;

    let mut active: hotels::ActiveModel = hotel.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(location) = input.location {
        active.location_id = Set(location);
    }
    if let Some(address) = input.address {
        active.address = Set(address);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(rating) = input.rating {
        active.rating = Set(rating);
    }
    if let Some(category) = input.category {
        active.category = Set(category);
    }
    if let Some(amenities) = input.amenities {
        active.amenities = Set(amenities);
    }
    if let Some(images) = input.images {
        active.images = Set(images);
    }
    if let Some(range) = input.price_range {
        active.price_min = Set(range.min);
        active.price_max = Set(range.max);
    }
    if let Some(room_types) = input.room_types {
        active.room_types = Set(RoomTypes(room_types));
    }
    if let Some(contact_info) = input.contact_info {
        active.contact_info = Set(contact_info);
    }
    if let Some(policies) = input.policies {
        active.policies = Set(policies);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

pub async fn delete_hotel(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    hotels::Entity::delete_by_id(id).exec(db).await
}
