use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Bookings {
    Table,
    UserId,
    PackageId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CustomPackages {
    Table,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PackageReviews {
    Table,
    PackageId,
}

#[derive(DeriveIden)]
enum Hotels {
    Table,
    LocationId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // bookings.user_id for "my bookings"
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_user_id")
                    .table(Bookings::Table)
                    .col(Bookings::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_package_id")
                    .table(Bookings::Table)
                    .col(Bookings::PackageId)
                    .to_owned(),
            )
            .await?;

        // Default list order and the dashboard's recent bookings
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_created_at")
                    .table(Bookings::Table)
                    .col(Bookings::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_custom_packages_user_id")
                    .table(CustomPackages::Table)
                    .col(CustomPackages::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_custom_packages_created_at")
                    .table(CustomPackages::Table)
                    .col(CustomPackages::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_package_reviews_package_id")
                    .table(PackageReviews::Table)
                    .col(PackageReviews::PackageId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotels_location_id")
                    .table(Hotels::Table)
                    .col(Hotels::LocationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_bookings_user_id",
            "idx_bookings_package_id",
            "idx_bookings_created_at",
            "idx_custom_packages_user_id",
            "idx_custom_packages_created_at",
            "idx_package_reviews_package_id",
            "idx_hotels_location_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
