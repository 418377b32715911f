//! User service — application-layer orchestration
//!
//! All user-related business logic lives here: validation, remote
//! provisioning of the area sub-resources, enrichment of read results with
//! area details, and the delete cascade. HTTP handlers are thin wrappers
//! that delegate to this service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use futures_util::future::try_join_all;
use tracing::{info, warn};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, EnrichedUser, FreeAreaClient, Preference,
    PrivateAreaClient, UpdateUserDto, User, UserFilter, UserRepositoryInterface,
};
use crate::shared::{validate_pagination, PaginatedResult};

/// Age thresholds for the filter and creation policies.
///
/// Injected from configuration; `adult` doubles as the minimum age for
/// registration.
#[derive(Debug, Clone, Copy)]
pub struct AgeLimits {
    pub adult: i64,
    pub senior: i64,
}

impl Default for AgeLimits {
    fn default() -> Self {
        Self {
            adult: 18,
            senior: 99,
        }
    }
}

/// Creation request as accepted by the service.
#[derive(Debug, Clone)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub birthdate: NaiveDate,
    pub sex: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub age_from: Option<i64>,
    pub age_to: Option<i64>,
    pub sex_preference: Option<String>,
}

/// User service — orchestrates all user-management use-cases.
///
/// Generic over the repository and the two area-client ports so it stays
/// decoupled from the persistence layer and the HTTP transport.
pub struct UserService<R, F, P> {
    repo: Arc<R>,
    free_areas: Arc<F>,
    private_areas: Arc<P>,
    age_limits: AgeLimits,
}

impl<R, F, P> UserService<R, F, P>
where
    R: UserRepositoryInterface,
    F: FreeAreaClient,
    P: PrivateAreaClient,
{
    pub fn new(repo: Arc<R>, free_areas: Arc<F>, private_areas: Arc<P>, age_limits: AgeLimits) -> Self {
        Self {
            repo,
            free_areas,
            private_areas,
            age_limits,
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// List every user, enriched with area details.
    ///
    /// Both area collections are fetched once and correlated by id, so the
    /// whole listing costs two remote calls regardless of user count.
    pub async fn find_all(&self) -> DomainResult<Vec<EnrichedUser>> {
        let (users, free_areas, private_areas) = tokio::try_join!(
            self.repo.find_all(),
            self.free_areas.find_all(),
            self.private_areas.find_all(),
        )?;

        let free_by_id: HashMap<i64, _> =
            free_areas.into_iter().map(|area| (area.id, area)).collect();
        let private_by_id: HashMap<i64, _> = private_areas
            .into_iter()
            .map(|area| (area.id, area))
            .collect();

        Ok(users
            .into_iter()
            .map(|user| {
                let free_area = free_by_id.get(&user.free_area_id).cloned();
                let private_area = private_by_id.get(&user.private_area_id).cloned();
                EnrichedUser {
                    user,
                    free_area,
                    private_area,
                }
            })
            .collect())
    }

    /// Get a single user by id, enriched with area details.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<EnrichedUser> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;
        self.enrich(user).await
    }

    /// Get a single user by email, enriched with area details.
    pub async fn find_by_email(&self, email: &str) -> DomainResult<EnrichedUser> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "email",
                value: email.to_string(),
            })?;
        self.enrich(user).await
    }

    /// Get a single user by username, enriched with area details.
    pub async fn find_by_username(&self, username: &str) -> DomainResult<EnrichedUser> {
        let user = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "username",
                value: username.to_string(),
            })?;
        self.enrich(user).await
    }

    /// Filtered, paginated search. The age range is validated before any
    /// query executes; each result row is enriched with per-row remote
    /// fetches.
    pub async fn filter(
        &self,
        filter: UserFilter,
        page: Option<u64>,
        size: Option<u64>,
    ) -> DomainResult<PaginatedResult<EnrichedUser>> {
        self.validate_selected_age_range(&filter)?;

        let (page, size) = validate_pagination(page, size);
        let result = self.repo.filter_users(&filter, page, size).await?;

        let PaginatedResult {
            items,
            total,
            page,
            size,
            ..
        } = result;

        let enriched = try_join_all(items.into_iter().map(|user| self.enrich(user))).await?;

        Ok(PaginatedResult::new(enriched, total, page, size))
    }

    // ── Commands ────────────────────────────────────────────────

    /// Create a new user.
    ///
    /// Validation strictly precedes provisioning: no remote call happens
    /// for a request that fails the age or uniqueness checks. The two area
    /// creations are outside the local transaction; if the persist fails
    /// afterwards, compensating deletes are issued for both.
    pub async fn save(&self, form: UserForm) -> DomainResult<EnrichedUser> {
        self.validate_form(&form)?;
        self.check_availability(&form).await?;

        let free_area = self.free_areas.create(true).await?;
        let private_area = self.private_areas.create(false).await?;

        let today = Utc::now().date_naive();
        let dto = CreateUserDto {
            username: form.username,
            email: form.email,
            password: form.password,
            birthdate: form.birthdate,
            age: age_in_years(form.birthdate, today),
            sex: form.sex,
            city: form.city,
            country: form.country,
            description: form.description,
            is_enabled: true,
            register_date: today,
            free_area_id: free_area.id,
            private_area_id: private_area.id,
            preference: Preference {
                age_from: form.age_from,
                age_to: form.age_to,
                sex_preference: form.sex_preference,
            },
        };

        let user = match self.repo.create_user(dto).await {
            Ok(user) => user,
            Err(e) => {
                self.compensate_provisioning(free_area.id, private_area.id)
                    .await;
                return Err(e);
            }
        };

        info!(user_id = user.id, username = %user.username, "New user registered");

        Ok(EnrichedUser {
            user,
            free_area: Some(free_area),
            private_area: Some(private_area),
        })
    }

    /// Edit an existing user behind the field-validation gate.
    pub async fn edit(&self, id: i64, dto: UpdateUserDto) -> DomainResult<User> {
        let stored = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        validate_edit_fields(&stored, &dto)?;

        let updated = self
            .repo
            .update_user(id, dto)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        info!(user_id = id, "User updated");
        Ok(updated)
    }

    /// Delete a user and cascade deletion of both remote areas.
    ///
    /// A missing id fails with NotFound before any remote call is made.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        self.repo.delete_user(id).await?;

        self.free_areas.delete(user.free_area_id).await?;
        self.private_areas.delete(user.private_area_id).await?;

        info!(user_id = id, "User deleted");
        Ok(())
    }

    // ── Internals ───────────────────────────────────────────────

    async fn enrich(&self, user: User) -> DomainResult<EnrichedUser> {
        let (free_area, private_area) = tokio::try_join!(
            self.free_areas.find_by_id(user.free_area_id),
            self.private_areas.find_by_id(user.private_area_id),
        )?;

        Ok(EnrichedUser {
            user,
            free_area: Some(free_area),
            private_area: Some(private_area),
        })
    }

    fn validate_selected_age_range(&self, filter: &UserFilter) -> DomainResult<()> {
        let age_from = filter.age_from;
        let age_to = filter.age_to;

        let from_too_low = age_from < self.age_limits.adult;
        let range_inverted = age_from > age_to;
        let to_too_high = age_to > self.age_limits.senior;

        if from_too_low || range_inverted || to_too_high {
            return Err(DomainError::InvalidAgeRange(format!(
                "ageFrom = {}, ageTo = {}",
                age_from, age_to
            )));
        }
        Ok(())
    }

    fn validate_form(&self, form: &UserForm) -> DomainResult<()> {
        if let (Some(age_from), Some(age_to)) = (form.age_from, form.age_to) {
            if age_from > age_to {
                return Err(DomainError::InvalidAgeRange(
                    "Age from cannot be greater than age to".to_string(),
                ));
            }
        }

        let today = Utc::now().date_naive();
        if age_in_years(form.birthdate, today) < self.age_limits.adult {
            return Err(DomainError::InvalidBirthdate(format!(
                "Age must be at least {} years old",
                self.age_limits.adult
            )));
        }
        Ok(())
    }

    async fn check_availability(&self, form: &UserForm) -> DomainResult<()> {
        if self.repo.find_by_username(&form.username).await?.is_some() {
            return Err(DomainError::Conflict("Username already exists".into()));
        }
        if self.repo.find_by_email(&form.email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".into()));
        }
        Ok(())
    }

    /// Best-effort rollback of freshly provisioned areas after a failed
    /// persist. Failures are logged and swallowed; the persist error is
    /// what the caller sees.
    async fn compensate_provisioning(&self, free_area_id: i64, private_area_id: i64) {
        if let Err(e) = self.free_areas.delete(free_area_id).await {
            warn!(free_area_id, error = %e, "Failed to roll back provisioned free area");
        }
        if let Err(e) = self.private_areas.delete(private_area_id).await {
            warn!(private_area_id, error = %e, "Failed to roll back provisioned private area");
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────

/// The edit gate: the submitted free-area reference must match the stored
/// row and none of the required fields may be empty. A single generic
/// failure, not a field-by-field report.
fn validate_edit_fields(stored: &User, dto: &UpdateUserDto) -> DomainResult<()> {
    let area_mismatch = dto.free_area_id != stored.free_area_id;

    if area_mismatch
        || dto.username.is_empty()
        || dto.email.is_empty()
        || dto.city.is_empty()
        || dto.country.is_empty()
        || dto.password.is_empty()
    {
        return Err(DomainError::Validation(
            "Some data cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Whole years elapsed between `birthdate` and `today`.
pub fn age_in_years(birthdate: NaiveDate, today: NaiveDate) -> i64 {
    let mut age = i64::from(today.year() - birthdate.year());
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Datelike;

    use super::*;
    use crate::domain::{FreeArea, PrivateArea};

    // ── Mocks ───────────────────────────────────────────────────

    #[derive(Default)]
    struct MockUserRepository {
        users: Mutex<Vec<User>>,
        next_id: AtomicI64,
        fail_create: bool,
    }

    impl MockUserRepository {
        fn with_users(users: Vec<User>) -> Self {
            let max_id = users.iter().map(|u| u.id).max().unwrap_or(0);
            let repo = Self::default();
            repo.next_id.store(max_id, Ordering::SeqCst);
            *repo.users.lock().unwrap() = users;
            repo
        }

        fn failing_on_create() -> Self {
            Self {
                fail_create: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl UserRepositoryInterface for MockUserRepository {
        async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
            if self.fail_create {
                return Err(DomainError::Storage("insert failed".into()));
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let user = User {
                id,
                username: dto.username,
                email: dto.email,
                password_hash: format!("hashed:{}", dto.password),
                birthdate: dto.birthdate,
                age: dto.age,
                sex: dto.sex,
                city: dto.city,
                country: dto.country,
                description: dto.description,
                is_enabled: dto.is_enabled,
                register_date: dto.register_date,
                free_area_id: dto.free_area_id,
                private_area_id: dto.private_area_id,
                preference: dto.preference,
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn find_all(&self) -> DomainResult<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn filter_users(
            &self,
            filter: &UserFilter,
            page: u64,
            size: u64,
        ) -> DomainResult<PaginatedResult<User>> {
            let matching: Vec<User> = self
                .users
                .lock()
                .unwrap()
                .iter()
                .filter(|u| u.age >= filter.age_from && u.age <= filter.age_to)
                .filter(|u| filter.sex.as_ref().map_or(true, |s| &u.sex == s))
                .filter(|u| filter.city.as_ref().map_or(true, |c| &u.city == c))
                .filter(|u| filter.country.as_ref().map_or(true, |c| &u.country == c))
                .filter(|u| filter.is_enabled.map_or(true, |e| u.is_enabled == e))
                .cloned()
                .collect();
            let total = matching.len() as u64;
            let items = matching
                .into_iter()
                .skip((page * size) as usize)
                .take(size as usize)
                .collect();
            Ok(PaginatedResult::new(items, total, page, size))
        }

        async fn update_user(&self, id: i64, dto: UpdateUserDto) -> DomainResult<Option<User>> {
            let mut users = self.users.lock().unwrap();
            let Some(user) = users.iter_mut().find(|u| u.id == id) else {
                return Ok(None);
            };
            user.username = dto.username;
            user.email = dto.email;
            user.password_hash = format!("hashed:{}", dto.password);
            user.city = dto.city;
            user.country = dto.country;
            if let Some(description) = dto.description {
                user.description = description;
            }
            Ok(Some(user.clone()))
        }

        async fn delete_user(&self, id: i64) -> DomainResult<()> {
            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id != id);
            if users.len() == before {
                return Err(DomainError::NotFound {
                    entity: "User",
                    field: "id",
                    value: id.to_string(),
                });
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockFreeAreaClient {
        areas: Mutex<Vec<FreeArea>>,
        next_id: AtomicI64,
        created: Mutex<Vec<bool>>,
        deleted: Mutex<Vec<i64>>,
    }

    impl MockFreeAreaClient {
        fn with_areas(areas: Vec<FreeArea>) -> Self {
            let max_id = areas.iter().map(|a| a.id).max().unwrap_or(0);
            let client = Self::default();
            client.next_id.store(max_id, Ordering::SeqCst);
            *client.areas.lock().unwrap() = areas;
            client
        }
    }

    #[async_trait]
    impl FreeAreaClient for MockFreeAreaClient {
        async fn find_all(&self) -> DomainResult<Vec<FreeArea>> {
            Ok(self.areas.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i64) -> DomainResult<FreeArea> {
            self.areas
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or(DomainError::NotFound {
                    entity: "FreeArea",
                    field: "id",
                    value: id.to_string(),
                })
        }

        async fn create(&self, is_enabled: bool) -> DomainResult<FreeArea> {
            self.created.lock().unwrap().push(is_enabled);
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let area = FreeArea {
                id,
                is_enabled,
                principal_photos: Vec::new(),
                public_content: Vec::new(),
            };
            self.areas.lock().unwrap().push(area.clone());
            Ok(area)
        }

        async fn delete(&self, id: i64) -> DomainResult<()> {
            self.deleted.lock().unwrap().push(id);
            self.areas.lock().unwrap().retain(|a| a.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockPrivateAreaClient {
        areas: Mutex<Vec<PrivateArea>>,
        next_id: AtomicI64,
        created: Mutex<Vec<bool>>,
        deleted: Mutex<Vec<i64>>,
    }

    impl MockPrivateAreaClient {
        fn with_areas(areas: Vec<PrivateArea>) -> Self {
            let max_id = areas.iter().map(|a| a.id).max().unwrap_or(0);
            let client = Self::default();
            client.next_id.store(max_id, Ordering::SeqCst);
            *client.areas.lock().unwrap() = areas;
            client
        }
    }

    #[async_trait]
    impl PrivateAreaClient for MockPrivateAreaClient {
        async fn find_all(&self) -> DomainResult<Vec<PrivateArea>> {
            Ok(self.areas.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i64) -> DomainResult<PrivateArea> {
            self.areas
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or(DomainError::NotFound {
                    entity: "PrivateArea",
                    field: "id",
                    value: id.to_string(),
                })
        }

        async fn create(&self, is_enabled: bool) -> DomainResult<PrivateArea> {
            self.created.lock().unwrap().push(is_enabled);
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let area = PrivateArea { id, is_enabled };
            self.areas.lock().unwrap().push(area.clone());
            Ok(area)
        }

        async fn delete(&self, id: i64) -> DomainResult<()> {
            self.deleted.lock().unwrap().push(id);
            self.areas.lock().unwrap().retain(|a| a.id != id);
            Ok(())
        }
    }

    // ── Fixtures ────────────────────────────────────────────────

    type TestService = UserService<MockUserRepository, MockFreeAreaClient, MockPrivateAreaClient>;

    fn service(
        repo: MockUserRepository,
        free: MockFreeAreaClient,
        private: MockPrivateAreaClient,
    ) -> TestService {
        UserService::new(
            Arc::new(repo),
            Arc::new(free),
            Arc::new(private),
            AgeLimits::default(),
        )
    }

    fn years_ago(years: i32) -> NaiveDate {
        let today = Utc::now().date_naive();
        today
            .with_year(today.year() - years)
            // Feb 29 on a non-leap target year
            .unwrap_or_else(|| today.with_day(28).unwrap().with_year(today.year() - years).unwrap())
    }

    fn sample_form() -> UserForm {
        UserForm {
            username: "amelie".into(),
            email: "amelie@example.com".into(),
            password: "s3cret-pw".into(),
            birthdate: years_ago(25),
            sex: "F".into(),
            city: "Lyon".into(),
            country: "France".into(),
            description: "likes hiking".into(),
            age_from: Some(20),
            age_to: Some(30),
            sex_preference: Some("M".into()),
        }
    }

    fn stored_user(id: i64, free_area_id: i64, private_area_id: i64) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password_hash: "hashed:pw".into(),
            birthdate: years_ago(30),
            age: 30,
            sex: "F".into(),
            city: "Lyon".into(),
            country: "France".into(),
            description: "stored".into(),
            is_enabled: true,
            register_date: years_ago(1),
            free_area_id,
            private_area_id,
            preference: Preference::default(),
        }
    }

    fn free_area(id: i64) -> FreeArea {
        FreeArea {
            id,
            is_enabled: true,
            principal_photos: Vec::new(),
            public_content: Vec::new(),
        }
    }

    fn private_area(id: i64) -> PrivateArea {
        PrivateArea {
            id,
            is_enabled: false,
        }
    }

    fn base_filter(age_from: i64, age_to: i64) -> UserFilter {
        UserFilter {
            age_from,
            age_to,
            sex: None,
            city: None,
            country: None,
            is_enabled: None,
        }
    }

    // ── Filter validation ───────────────────────────────────────

    #[tokio::test]
    async fn filter_rejects_age_from_below_adult() {
        let svc = service(
            MockUserRepository::default(),
            MockFreeAreaClient::default(),
            MockPrivateAreaClient::default(),
        );
        let err = svc.filter(base_filter(17, 30), None, None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidAgeRange(_)));
    }

    #[tokio::test]
    async fn filter_rejects_inverted_range() {
        let svc = service(
            MockUserRepository::default(),
            MockFreeAreaClient::default(),
            MockPrivateAreaClient::default(),
        );
        let err = svc.filter(base_filter(40, 30), None, None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidAgeRange(_)));
    }

    #[tokio::test]
    async fn filter_rejects_age_to_above_senior() {
        let svc = service(
            MockUserRepository::default(),
            MockFreeAreaClient::default(),
            MockPrivateAreaClient::default(),
        );
        let err = svc
            .filter(base_filter(20, 100), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidAgeRange(_)));
    }

    #[tokio::test]
    async fn filter_accepts_full_adult_to_senior_range() {
        let repo = MockUserRepository::with_users(vec![stored_user(1, 10, 20)]);
        let free = MockFreeAreaClient::with_areas(vec![free_area(10)]);
        let private = MockPrivateAreaClient::with_areas(vec![private_area(20)]);
        let svc = service(repo, free, private);

        let page = svc.filter(base_filter(18, 99), None, None).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].user.id, 1);
        assert_eq!(page.items[0].free_area.as_ref().unwrap().id, 10);
        assert_eq!(page.items[0].private_area.as_ref().unwrap().id, 20);
    }

    #[tokio::test]
    async fn filter_applies_optional_predicates() {
        let mut other_city = stored_user(2, 11, 21);
        other_city.city = "Paris".into();
        let repo = MockUserRepository::with_users(vec![stored_user(1, 10, 20), other_city]);
        let free = MockFreeAreaClient::with_areas(vec![free_area(10), free_area(11)]);
        let private =
            MockPrivateAreaClient::with_areas(vec![private_area(20), private_area(21)]);
        let svc = service(repo, free, private);

        let mut filter = base_filter(18, 99);
        filter.city = Some("Paris".into());
        let page = svc.filter(filter, None, None).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].user.id, 2);
    }

    // ── Creation ────────────────────────────────────────────────

    #[tokio::test]
    async fn save_provisions_areas_and_persists() {
        let repo = MockUserRepository::default();
        let free = MockFreeAreaClient::default();
        let private = MockPrivateAreaClient::default();
        let svc = service(repo, free, private);

        let created = svc.save(sample_form()).await.unwrap();

        let free_area = created.free_area.expect("free area attached");
        let private_area = created.private_area.expect("private area attached");
        assert!(free_area.is_enabled);
        assert!(!private_area.is_enabled);
        assert_eq!(created.user.free_area_id, free_area.id);
        assert_eq!(created.user.private_area_id, private_area.id);
        assert!(created.user.is_enabled);
        assert_eq!(created.user.age, 25);
        assert_eq!(created.user.register_date, Utc::now().date_naive());
        assert_eq!(created.user.preference.age_from, Some(20));
    }

    #[tokio::test]
    async fn save_rejects_underage_without_provisioning() {
        let repo = MockUserRepository::default();
        let free = MockFreeAreaClient::default();
        let private = MockPrivateAreaClient::default();
        let free_ref = Arc::new(free);
        let private_ref = Arc::new(private);
        let svc = UserService::new(
            Arc::new(repo),
            Arc::clone(&free_ref),
            Arc::clone(&private_ref),
            AgeLimits::default(),
        );

        let mut form = sample_form();
        form.birthdate = years_ago(10);
        let err = svc.save(form).await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidBirthdate(_)));
        assert!(free_ref.created.lock().unwrap().is_empty());
        assert!(private_ref.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_rejects_inverted_preference_range() {
        let svc = service(
            MockUserRepository::default(),
            MockFreeAreaClient::default(),
            MockPrivateAreaClient::default(),
        );
        let mut form = sample_form();
        form.age_from = Some(35);
        form.age_to = Some(25);
        let err = svc.save(form).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidAgeRange(_)));
    }

    #[tokio::test]
    async fn save_rejects_duplicate_username_before_provisioning() {
        let mut existing = stored_user(1, 10, 20);
        existing.username = "amelie".into();
        let repo = MockUserRepository::with_users(vec![existing]);
        let free_ref = Arc::new(MockFreeAreaClient::default());
        let private_ref = Arc::new(MockPrivateAreaClient::default());
        let svc = UserService::new(
            Arc::new(repo),
            Arc::clone(&free_ref),
            Arc::clone(&private_ref),
            AgeLimits::default(),
        );

        let err = svc.save(sample_form()).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert!(free_ref.created.lock().unwrap().is_empty());
        assert!(private_ref.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_rejects_duplicate_email() {
        let mut existing = stored_user(1, 10, 20);
        existing.email = "amelie@example.com".into();
        let repo = MockUserRepository::with_users(vec![existing]);
        let svc = service(repo, MockFreeAreaClient::default(), MockPrivateAreaClient::default());

        let err = svc.save(sample_form()).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn save_compensates_provisioned_areas_when_persist_fails() {
        let repo = MockUserRepository::failing_on_create();
        let free_ref = Arc::new(MockFreeAreaClient::default());
        let private_ref = Arc::new(MockPrivateAreaClient::default());
        let svc = UserService::new(
            Arc::new(repo),
            Arc::clone(&free_ref),
            Arc::clone(&private_ref),
            AgeLimits::default(),
        );

        let err = svc.save(sample_form()).await.unwrap_err();

        assert!(matches!(err, DomainError::Storage(_)));
        assert_eq!(*free_ref.deleted.lock().unwrap(), vec![1]);
        assert_eq!(*private_ref.deleted.lock().unwrap(), vec![1]);
    }

    // ── Lookups & enrichment ────────────────────────────────────

    #[tokio::test]
    async fn lookups_for_missing_users_fail_with_not_found() {
        let svc = service(
            MockUserRepository::default(),
            MockFreeAreaClient::default(),
            MockPrivateAreaClient::default(),
        );

        assert!(matches!(
            svc.find_by_id(42).await.unwrap_err(),
            DomainError::NotFound { field: "id", .. }
        ));
        assert!(matches!(
            svc.find_by_email("ghost@example.com").await.unwrap_err(),
            DomainError::NotFound { field: "email", .. }
        ));
        assert!(matches!(
            svc.find_by_username("ghost").await.unwrap_err(),
            DomainError::NotFound { field: "username", .. }
        ));
    }

    #[tokio::test]
    async fn find_by_id_enriches_with_matching_areas() {
        let repo = MockUserRepository::with_users(vec![stored_user(1, 10, 20)]);
        let free = MockFreeAreaClient::with_areas(vec![free_area(10)]);
        let private = MockPrivateAreaClient::with_areas(vec![private_area(20)]);
        let svc = service(repo, free, private);

        let enriched = svc.find_by_id(1).await.unwrap();
        assert_eq!(enriched.free_area.unwrap().id, 10);
        assert_eq!(enriched.private_area.unwrap().id, 20);
    }

    #[tokio::test]
    async fn find_all_correlates_areas_by_id() {
        let repo =
            MockUserRepository::with_users(vec![stored_user(1, 10, 20), stored_user(2, 11, 21)]);
        // Area 11 is missing remotely; user 2's free area must stay None.
        let free = MockFreeAreaClient::with_areas(vec![free_area(10)]);
        let private =
            MockPrivateAreaClient::with_areas(vec![private_area(20), private_area(21)]);
        let svc = service(repo, free, private);

        let users = svc.find_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].free_area.as_ref().unwrap().id, 10);
        assert!(users[1].free_area.is_none());
        assert_eq!(users[1].private_area.as_ref().unwrap().id, 21);
    }

    // ── Edit gate ───────────────────────────────────────────────

    fn edit_dto(free_area_id: i64) -> UpdateUserDto {
        UpdateUserDto {
            free_area_id,
            username: "renamed".into(),
            email: "renamed@example.com".into(),
            password: "new-pw".into(),
            city: "Nice".into(),
            country: "France".into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn edit_updates_profile_fields() {
        let repo = MockUserRepository::with_users(vec![stored_user(1, 10, 20)]);
        let svc = service(repo, MockFreeAreaClient::default(), MockPrivateAreaClient::default());

        let updated = svc.edit(1, edit_dto(10)).await.unwrap();
        assert_eq!(updated.username, "renamed");
        assert_eq!(updated.city, "Nice");
    }

    #[tokio::test]
    async fn edit_rejects_mismatched_free_area_reference() {
        let repo = MockUserRepository::with_users(vec![stored_user(1, 10, 20)]);
        let svc = service(repo, MockFreeAreaClient::default(), MockPrivateAreaClient::default());

        let err = svc.edit(1, edit_dto(99)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn edit_rejects_empty_required_fields() {
        let repo = MockUserRepository::with_users(vec![stored_user(1, 10, 20)]);
        let svc = service(repo, MockFreeAreaClient::default(), MockPrivateAreaClient::default());

        let mut dto = edit_dto(10);
        dto.password = String::new();
        let err = svc.edit(1, dto).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn edit_missing_user_fails_with_not_found() {
        let svc = service(
            MockUserRepository::default(),
            MockFreeAreaClient::default(),
            MockPrivateAreaClient::default(),
        );
        let err = svc.edit(7, edit_dto(10)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    // ── Deletion ────────────────────────────────────────────────

    #[tokio::test]
    async fn delete_removes_row_and_cascades_both_areas() {
        let repo = MockUserRepository::with_users(vec![stored_user(1, 10, 20)]);
        let free_ref = Arc::new(MockFreeAreaClient::with_areas(vec![free_area(10)]));
        let private_ref = Arc::new(MockPrivateAreaClient::with_areas(vec![private_area(20)]));
        let repo_ref = Arc::new(repo);
        let svc = UserService::new(
            Arc::clone(&repo_ref),
            Arc::clone(&free_ref),
            Arc::clone(&private_ref),
            AgeLimits::default(),
        );

        svc.delete(1).await.unwrap();

        assert!(repo_ref.users.lock().unwrap().is_empty());
        assert_eq!(*free_ref.deleted.lock().unwrap(), vec![10]);
        assert_eq!(*private_ref.deleted.lock().unwrap(), vec![20]);
    }

    #[tokio::test]
    async fn delete_missing_id_issues_no_remote_calls() {
        let free_ref = Arc::new(MockFreeAreaClient::default());
        let private_ref = Arc::new(MockPrivateAreaClient::default());
        let svc = UserService::new(
            Arc::new(MockUserRepository::default()),
            Arc::clone(&free_ref),
            Arc::clone(&private_ref),
            AgeLimits::default(),
        );

        let err = svc.delete(42).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(free_ref.deleted.lock().unwrap().is_empty());
        assert!(private_ref.deleted.lock().unwrap().is_empty());
    }

    // ── Age helper ──────────────────────────────────────────────

    #[test]
    fn age_counts_whole_years_only() {
        let birthdate = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let day_before = NaiveDate::from_ymd_opt(2018, 6, 14).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2018, 6, 15).unwrap();

        assert_eq!(age_in_years(birthdate, day_before), 17);
        assert_eq!(age_in_years(birthdate, birthday), 18);
    }
}
