pub mod response;
pub mod validated_json;

pub use response::{ApiResponse, PageParams, PaginatedResponse};
pub use validated_json::ValidatedJson;
