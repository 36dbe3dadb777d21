pub mod bookings;
pub mod custom_packages;
pub mod dashboard;
pub mod destinations;
pub mod hotels;
pub mod packages;
pub mod reviews;
pub mod users;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Create a SeaORM database connection pool.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
