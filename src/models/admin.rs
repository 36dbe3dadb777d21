use serde::{Deserialize, Serialize};

use super::bookings::BookingView;
use super::custom_packages::CustomPackageView;

/// Aggregate figures for `GET /api/admin/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_packages: u64,
    pub total_bookings: u64,
    pub total_users: u64,
    pub total_custom_packages: u64,
    pub pending_bookings: u64,
    pub pending_custom_packages: u64,
    /// Sum of `totalPrice` over bookings whose payment completed.
    pub total_revenue: f64,
    pub recent_bookings: Vec<BookingView>,
    pub recent_custom_packages: Vec<CustomPackageView>,
}
