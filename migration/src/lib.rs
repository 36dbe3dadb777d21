pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_destinations_table;
mod m20250301_000003_create_packages_table;
mod m20250301_000004_create_package_reviews_table;
mod m20250301_000005_create_bookings_table;
mod m20250301_000006_create_custom_packages_table;
mod m20250301_000007_create_hotels_table;
mod m20250301_000008_create_hotel_reviews_table;
mod m20250301_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_destinations_table::Migration),
            Box::new(m20250301_000003_create_packages_table::Migration),
            Box::new(m20250301_000004_create_package_reviews_table::Migration),
            Box::new(m20250301_000005_create_bookings_table::Migration),
            Box::new(m20250301_000006_create_custom_packages_table::Migration),
            Box::new(m20250301_000007_create_hotels_table::Migration),
            Box::new(m20250301_000008_create_hotel_reviews_table::Migration),
            Box::new(m20250301_000009_add_indexes::Migration),
        ]
    }
}
