use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `packages` table and its columns.
#[derive(DeriveIden)]
enum Packages {
    Table,
    Id,
    Name,
    PackageType,
    Destination,
    DurationDays,
    DurationNights,
    Price,
    Description,
    Highlights,
    Inclusions,
    Exclusions,
    Transportation,
    Accommodation,
    Images,
    Itinerary,
    AverageRating,
    BookingsCount,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Packages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Packages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Packages::Name).string().not_null())
                    .col(ColumnDef::new(Packages::PackageType).string().not_null())
                    .col(ColumnDef::new(Packages::Destination).string().not_null())
                    .col(ColumnDef::new(Packages::DurationDays).integer().not_null())
                    .col(ColumnDef::new(Packages::DurationNights).integer().not_null())
                    .col(ColumnDef::new(Packages::Price).double().not_null())
                    .col(ColumnDef::new(Packages::Description).text().not_null())
                    .col(
                        ColumnDef::new(Packages::Highlights)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Packages::Inclusions)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Packages::Exclusions)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Packages::Transportation).string().null())
                    .col(ColumnDef::new(Packages::Accommodation).string().null())
                    .col(
                        ColumnDef::new(Packages::Images)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Packages::Itinerary).json_binary().not_null())
                    .col(
                        ColumnDef::new(Packages::AverageRating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Packages::BookingsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Packages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Packages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Packages::Table).to_owned())
            .await
    }
}
