//! Create users table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Birthdate).date().not_null())
                    .col(ColumnDef::new(Users::Age).big_integer().not_null())
                    .col(ColumnDef::new(Users::Sex).string().not_null())
                    .col(ColumnDef::new(Users::City).string().not_null())
                    .col(ColumnDef::new(Users::Country).string().not_null())
                    .col(ColumnDef::new(Users::Description).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::RegisterDate).date().not_null())
                    .col(ColumnDef::new(Users::FreeAreaId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Users::PrivateAreaId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::AgeFrom).big_integer())
                    .col(ColumnDef::new(Users::AgeTo).big_integer())
                    .col(ColumnDef::new(Users::SexPreference).string())
                    .to_owned(),
            )
            .await?;

        // Filter path queries by age + equality predicates
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_age")
                    .table(Users::Table)
                    .col(Users::Age)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Birthdate,
    Age,
    Sex,
    City,
    Country,
    Description,
    IsEnabled,
    RegisterDate,
    FreeAreaId,
    PrivateAreaId,
    AgeFrom,
    AgeTo,
    SexPreference,
}
