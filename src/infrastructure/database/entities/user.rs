//! User entity for database

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User model
///
/// The preference sub-object (age range + sex preference) is flattened into
/// columns; the two area ids reference resources owned by the sibling
/// services.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
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
    pub age_from: Option<i64>,
    pub age_to: Option<i64>,
    pub sex_preference: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
