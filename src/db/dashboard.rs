use sea_orm::{DatabaseConnection, DbErr};

use crate::db::{bookings, custom_packages, packages, users};
use crate::models::admin::DashboardStats;
use crate::models::bookings::BookingStatus;
use crate::models::custom_packages::CustomPackageStatus;

/// How many recent bookings and custom packages the dashboard shows.
pub const RECENT_LIMIT: u64 = 5;

/// Gather every dashboard figure. The reads are independent; they run
/// concurrently and the first failure aborts the lot.
pub async fn load_dashboard(db: &DatabaseConnection) -> Result<DashboardStats, DbErr> {
    let (
        total_packages,
        total_bookings,
        total_users,
        total_custom_packages,
        pending_bookings,
        pending_custom_packages,
        total_revenue,
        recent_bookings,
        recent_custom_packages,
    ) = tokio::try_join!(
        packages::count_packages(db),
        bookings::count_bookings(db, None),
        users::count_users(db, None),
        custom_packages::count_custom_packages(db, None),
        bookings::count_bookings(db, Some(BookingStatus::Pending)),
        custom_packages::count_custom_packages(db, Some(CustomPackageStatus::Pending)),
        bookings::total_revenue(db),
        bookings::recent_bookings(db, RECENT_LIMIT),
        custom_packages::recent_custom_packages(db, RECENT_LIMIT),
    )?;

    let (recent_bookings, recent_custom_packages) = tokio::try_join!(
        bookings::populate(db, recent_bookings),
        custom_packages::populate(db, recent_custom_packages),
    )?;

    Ok(DashboardStats {
        total_packages,
        total_bookings,
        total_users,
        total_custom_packages,
        pending_bookings,
        pending_custom_packages,
        total_revenue,
        recent_bookings,
        recent_custom_packages,
    })
}
