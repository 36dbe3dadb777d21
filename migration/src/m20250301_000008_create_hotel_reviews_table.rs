use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum HotelReviews {
    Table,
    Id,
    HotelId,
    UserId,
    Rating,
    Comment,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Hotels {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HotelReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HotelReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HotelReviews::HotelId).uuid().not_null())
                    .col(ColumnDef::new(HotelReviews::UserId).uuid().not_null())
                    .col(ColumnDef::new(HotelReviews::Rating).integer().not_null())
                    .col(ColumnDef::new(HotelReviews::Comment).text().not_null())
                    .col(
                        ColumnDef::new(HotelReviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_reviews_hotel_id")
                            .from(HotelReviews::Table, HotelReviews::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_reviews_user_id")
                            .from(HotelReviews::Table, HotelReviews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One review per user per hotel
        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_reviews_hotel_user_unique")
                    .table(HotelReviews::Table)
                    .col(HotelReviews::HotelId)
                    .col(HotelReviews::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelReviews::Table).to_owned())
            .await
    }
}
