//! User domain model

use chrono::NaiveDate;

use crate::domain::area::{FreeArea, PrivateArea};

/// Matching criteria a user states about partners: an age range and a
/// preferred sex. Stored 1:1 with the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preference {
    pub age_from: Option<i64>,
    pub age_to: Option<i64>,
    pub sex_preference: Option<String>,
}

/// A platform member.
///
/// `free_area_id` and `private_area_id` reference resources owned by the
/// free-area and private-area sibling services; only the ids live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
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

/// A user together with the area details fetched from the sibling services.
///
/// `None` means the stored foreign id had no remote counterpart.
#[derive(Debug, Clone)]
pub struct EnrichedUser {
    pub user: User,
    pub free_area: Option<FreeArea>,
    pub private_area: Option<PrivateArea>,
}
