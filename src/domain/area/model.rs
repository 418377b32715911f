//! Remote-owned area models

/// A photo shown on a user's public profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalPhoto {
    pub id: i64,
    pub url: String,
}

/// A piece of publicly visible profile content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicContent {
    pub id: i64,
    pub content: String,
}

/// A user's public profile area, owned by the free-area service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeArea {
    pub id: i64,
    pub is_enabled: bool,
    pub principal_photos: Vec<PrincipalPhoto>,
    pub public_content: Vec<PublicContent>,
}

/// A user's gated profile area, owned by the private-area service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateArea {
    pub id: i64,
    pub is_enabled: bool,
}
