//! User entity - Post authors

use crate::domain::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Login name; posts refer to authors by this
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}
