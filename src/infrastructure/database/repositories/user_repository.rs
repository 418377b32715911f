use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, Preference, UpdateUserDto, User,
    UserFilter, UserRepositoryInterface,
};
use crate::infrastructure::database::entities::user;
use crate::shared::PaginatedResult;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        birthdate: model.birthdate,
        age: model.age,
        sex: model.sex,
        city: model.city,
        country: model.country,
        description: model.description,
        is_enabled: model.is_enabled,
        register_date: model.register_date,
        free_area_id: model.free_area_id,
        private_area_id: model.private_area_id,
        preference: Preference {
            age_from: model.age_from,
            age_to: model.age_to,
            sex_preference: model.sex_preference,
        },
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn map_unique_violation(e: sea_orm::DbErr) -> DomainError {
    if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
        DomainError::Conflict("Username or email already exists".to_string())
    } else {
        db_err(e)
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        use crate::infrastructure::crypto::password::hash_password;

        let password_hash = hash_password(&dto.password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let new_user = user::ActiveModel {
            username: Set(dto.username),
            email: Set(dto.email),
            password_hash: Set(password_hash),
            birthdate: Set(dto.birthdate),
            age: Set(dto.age),
            sex: Set(dto.sex),
            city: Set(dto.city),
            country: Set(dto.country),
            description: Set(dto.description),
            is_enabled: Set(dto.is_enabled),
            register_date: Set(dto.register_date),
            free_area_id: Set(dto.free_area_id),
            private_area_id: Set(dto.private_area_id),
            age_from: Set(dto.preference.age_from),
            age_to: Set(dto.preference.age_to),
            sex_preference: Set(dto.preference.sex_preference),
            ..Default::default()
        };

        let inserted = new_user
            .insert(&self.db)
            .await
            .map_err(map_unique_violation)?;

        Ok(user_model_to_domain(inserted))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn filter_users(
        &self,
        filter: &UserFilter,
        page: u64,
        size: u64,
    ) -> DomainResult<PaginatedResult<User>> {
        let mut query = user::Entity::find()
            .filter(user::Column::Age.gte(filter.age_from))
            .filter(user::Column::Age.lte(filter.age_to));

        if let Some(ref sex) = filter.sex {
            query = query.filter(user::Column::Sex.eq(sex));
        }
        if let Some(ref city) = filter.city {
            query = query.filter(user::Column::City.eq(city));
        }
        if let Some(ref country) = filter.country {
            query = query.filter(user::Column::Country.eq(country));
        }
        if let Some(is_enabled) = filter.is_enabled {
            query = query.filter(user::Column::IsEnabled.eq(is_enabled));
        }

        let query = query.order_by_asc(user::Column::Id);

        // Count total
        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        // Paginate (zero-based page)
        let models = query
            .offset(page * size)
            .limit(size)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<User> = models.into_iter().map(user_model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, size))
    }

    async fn update_user(&self, id: i64, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        use crate::infrastructure::crypto::password::hash_password;

        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let password_hash = hash_password(&dto.password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let mut active: user::ActiveModel = existing.into();
        active.username = Set(dto.username);
        active.email = Set(dto.email);
        active.password_hash = Set(password_hash);
        active.city = Set(dto.city);
        active.country = Set(dto.country);
        if let Some(description) = dto.description {
            active.description = Set(description);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(map_unique_violation)?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn delete_user(&self, id: i64) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
