use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PackageReviews {
    Table,
    Id,
    PackageId,
    UserId,
    Rating,
    Comment,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Packages {
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
                    .table(PackageReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PackageReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PackageReviews::PackageId).uuid().not_null())
                    .col(ColumnDef::new(PackageReviews::UserId).uuid().not_null())
                    .col(ColumnDef::new(PackageReviews::Rating).integer().not_null())
                    .col(ColumnDef::new(PackageReviews::Comment).text().not_null())
                    .col(
                        ColumnDef::new(PackageReviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_package_reviews_package_id")
                            .from(PackageReviews::Table, PackageReviews::PackageId)
                            .to(Packages::Table, Packages::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_package_reviews_user_id")
                            .from(PackageReviews::Table, PackageReviews::UserId)
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
            .drop_table(Table::drop().table(PackageReviews::Table).to_owned())
            .await
    }
}
