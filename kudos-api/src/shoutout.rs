use crate::{Comment, DepartmentId, Time, User, UserId, STUB_ID};

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
pub struct ShoutoutId(pub i64);

impl ShoutoutId {
    pub fn stub() -> ShoutoutId {
        ShoutoutId(STUB_ID)
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
pub struct ReactionId(pub i64);

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
pub struct AttachmentId(pub i64);

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Clap,
    Star,
}

/// At most one reaction per (shout-out, user); re-sending the same kind
/// removes it, a different kind replaces it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reaction {
    pub id: ReactionId,
    #[serde(rename = "type")]
    pub kind: ReactionKind,
    pub user: User,
    pub created_at: Time,
}

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, bolero::generator::TypeGenerator, serde::Deserialize,
    serde::Serialize,
)]
pub struct NewReaction {
    #[serde(rename = "type")]
    pub kind: ReactionKind,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub file_url: String,
    pub file_name: String,
    pub file_type: String,
    pub created_at: Time,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Shoutout {
    pub id: ShoutoutId,
    pub content: String,
    pub created_at: Time,
    pub created_by: User,
    pub recipients: Vec<User>,
    pub reactions: Vec<Reaction>,
    /// Flat, parent-referencing list in chronological order
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(
    Clone, Debug, Eq, PartialEq, bolero::generator::TypeGenerator, serde::Deserialize,
    serde::Serialize,
)]
pub struct NewShoutout {
    #[generator(bolero::generator::gen_with::<String>().len(1..1000usize))]
    pub content: String,
    pub recipient_ids: Vec<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}
