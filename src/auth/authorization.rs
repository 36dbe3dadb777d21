use uuid::Uuid;

use crate::error::ApiError;
use crate::models::users;

/// Owners see their own records; admins see everything.
pub fn ensure_owner_or_admin(
    user: &users::Model,
    owner_id: Uuid,
    what: &str,
) -> Result<(), ApiError> {
    if user.id == owner_id || user.is_admin() {
        Ok(())
    } else {
        Err(ApiError::Unauthorized(format!(
            "Not authorized to access this {what}"
        )))
    }
}
