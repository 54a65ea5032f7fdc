use crate::{Time, User, STUB_ID};

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
pub struct CommentId(pub i64);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_ID)
    }
}

/// One entry of the flat comment list carried by a shout-out.
///
/// `parent_id` of `None` means a top-level comment; anything else must
/// reference another comment of the same shout-out. The server enforces
/// acyclicity, the client trusts it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: Time,
    pub user: User,
    #[serde(default)]
    pub parent_id: Option<CommentId>,
}

#[derive(
    Clone, Debug, Eq, PartialEq, bolero::generator::TypeGenerator, serde::Deserialize,
    serde::Serialize,
)]
pub struct NewComment {
    #[generator(bolero::generator::gen_with::<String>().len(1..500usize))]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
}
