use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `hotels` table and its columns.
#[derive(DeriveIden)]
enum Hotels {
    Table,
    Id,
    Name,
    LocationId,
    Address,
    Description,
    Rating,
    Category,
    Amenities,
    Images,
    PriceMin,
    PriceMax,
    RoomTypes,
    ContactInfo,
    Policies,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Destinations {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Hotels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Hotels::Name).string().not_null())
                    .col(ColumnDef::new(Hotels::LocationId).uuid().not_null())
                    .col(ColumnDef::new(Hotels::Address).string().not_null())
                    .col(ColumnDef::new(Hotels::Description).text().not_null())
                    .col(ColumnDef::new(Hotels::Rating).integer().not_null())
                    .col(ColumnDef::new(Hotels::Category).string().not_null())
                    .col(
                        ColumnDef::new(Hotels::Amenities)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hotels::Images)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Hotels::PriceMin).double().not_null())
                    .col(ColumnDef::new(Hotels::PriceMax).double().not_null())
                    .col(ColumnDef::new(Hotels::RoomTypes).json_binary().not_null())
                    .col(ColumnDef::new(Hotels::ContactInfo).json_binary().not_null())
                    .col(ColumnDef::new(Hotels::Policies).json_binary().not_null())
                    .col(
                        ColumnDef::new(Hotels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hotels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotels_location_id")
                            .from(Hotels::Table, Hotels::LocationId)
                            .to(Destinations::Table, Destinations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await
    }
}
