/// Predicates for the filtered user search.
///
/// `age_from`/`age_to` are required at the API boundary; the rest are
/// optional equality predicates.
#[derive(Debug, Clone)]
pub struct UserFilter {
    pub age_from: i64,
    pub age_to: i64,
    pub sex: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_enabled: Option<bool>,
}
