use crate::{Time, STUB_ID};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct UserId(pub i64);

impl UserId {
    pub fn stub() -> UserId {
        UserId(STUB_ID)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct DepartmentId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub created_at: Time,
}

/// Roster entry as returned by `/users/lookup`
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub department: Option<Department>,
    pub created_at: Time,
}

impl User {
    pub fn stub() -> User {
        User {
            id: UserId::stub(),
            email: String::new(),
            full_name: String::new(),
            is_admin: false,
            avatar_url: None,
            department: None,
            created_at: chrono::DateTime::<chrono::Utc>::MIN_UTC,
        }
    }
}
