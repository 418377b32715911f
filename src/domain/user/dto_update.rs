/// Fields accepted by the edit workflow.
///
/// The field-validation gate in the service requires all of these to be
/// present and non-empty, plus `free_area_id` to match the stored row.
#[derive(Debug, Clone)]
pub struct UpdateUserDto {
    pub free_area_id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub city: String,
    pub country: String,
    pub description: Option<String>,
}
