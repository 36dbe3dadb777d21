pub mod admin;
pub mod bookings;
pub mod custom_packages;
pub mod destinations;
pub mod hotel_reviews;
pub mod hotels;
pub mod package_reviews;
pub mod packages;
pub mod users;

use serde::Deserialize;
use validator::Validate;

/// Body of the package and hotel review endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Review is too long"))]
    pub comment: String,
}
