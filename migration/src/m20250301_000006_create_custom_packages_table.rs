use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum CustomPackages {
    Table,
    Id,
    UserId,
    Name,
    Destination,
    StartDate,
    EndDate,
    Accommodation,
    Transportation,
    Meals,
    Activities,
    Budget,
    Travelers,
    SpecialRequests,
    Status,
    Quote,
    CreatedAt,
    UpdatedAt,
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
                    .table(CustomPackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomPackages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CustomPackages::UserId).uuid().not_null())
                    .col(ColumnDef::new(CustomPackages::Name).string().not_null())
                    .col(ColumnDef::new(CustomPackages::Destination).string().not_null())
                    .col(ColumnDef::new(CustomPackages::StartDate).date().not_null())
                    .col(ColumnDef::new(CustomPackages::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(CustomPackages::Accommodation)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomPackages::Transportation)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CustomPackages::Meals).json_binary().not_null())
                    .col(
                        ColumnDef::new(CustomPackages::Activities)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CustomPackages::Budget).double().not_null())
                    .col(
                        ColumnDef::new(CustomPackages::Travelers)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CustomPackages::SpecialRequests).text().null())
                    .col(
                        ColumnDef::new(CustomPackages::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(CustomPackages::Quote).json_binary().null())
                    .col(
                        ColumnDef::new(CustomPackages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomPackages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_custom_packages_user_id")
                            .from(CustomPackages::Table, CustomPackages::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomPackages::Table).to_owned())
            .await
    }
}
