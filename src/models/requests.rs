use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to store a notification
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
    #[validate(length(min = 1, max = 1000))]
    pub message: String,
}
