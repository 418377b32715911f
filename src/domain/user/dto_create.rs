use chrono::NaiveDate;

use super::Preference;

/// Everything the repository needs to insert a new user row.
///
/// `password` arrives in plain text and is hashed at the storage boundary.
/// The area ids come from the remote provisioning step that precedes the
/// local persist.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub birthdate: NaiveDate,
    pub age: i64,
    pub sex: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub is_enabled: bool,
    pub register_date: NaiveDate,
    pub free_area_id: i64,
    pub private_area_id: i64,
    pub preference: Preference,
}
