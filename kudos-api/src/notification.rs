use crate::{Shoutout, Time, UserId};

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
pub struct NotificationId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub shoutout: Shoutout,
    pub is_read: bool,
    pub created_at: Time,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NotificationCount {
    pub unread_count: u64,
}
